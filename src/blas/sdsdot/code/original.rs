//! Original (reference) implementation of the sdsdot accumulation.
//!
//! A straightforward element-at-a-time loop over full unit-stride slices with
//! a double-precision accumulator. This is the correctness baseline the other
//! variants are verified against.

/// Compute the extended-accumulation dot product one element at a time.
///
/// Each `f32` product is formed at `f64` width and added to an `f64` running
/// sum seeded with `scalar`; the sum is narrowed to `f32` once, on return.
///
/// # Panics
/// Panics if the slices have different lengths.
///
/// # Example
/// ```
/// use sdsdot::blas::sdsdot::sdsdot_original;
///
/// let x = [1.0, 2.0, 3.0];
/// let y = [4.0, 5.0, 6.0];
/// assert_eq!(sdsdot_original(0.0, &x, &y), 32.0);
/// ```
pub fn sdsdot_original(scalar: f64, x: &[f32], y: &[f32]) -> f32 {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");

    let mut dot = scalar;
    for (a, b) in x.iter().zip(y.iter()) {
        dot += *a as f64 * *b as f64;
    }
    dot as f32
}

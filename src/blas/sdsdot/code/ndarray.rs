//! Indexed sdsdot kernel with explicit starting offsets.
//!
//! This is the computational core: every other entry point (the safe wrapper,
//! the benchmark variants operating on full slices) eventually reduces to the
//! same accumulation strategy implemented here.

/// Block size for the unit-stride unrolled loop.
const M: usize = 5;

/// Compute the dot product of two single-precision vectors with extended
/// (double-precision) accumulation, using explicit strides and starting
/// offsets.
///
/// The scalar bias seeds the accumulator before any products are added. The
/// running sum and every per-term product are carried at `f64` width; the
/// result is narrowed to `f32` exactly once, on return.
///
/// If `n <= 0`, no elements are accessed and the narrowed scalar is returned.
///
/// When both strides are `1`, the loop is unrolled in blocks of five: a
/// remainder pass of `n % 5` single elements first, then five products summed
/// per iteration. The grouping changes the order of additions relative to the
/// general strided loop, which can shift the last bit of the result; this
/// matches the reference algorithm and is deliberate.
///
/// # Panics
/// Panics if the stride/offset addressing walks outside either slice. Valid
/// addressing for `n` elements is the caller's contract.
///
/// # Example
/// ```
/// use sdsdot::sdsdot_ndarray;
///
/// let x: [f32; 5] = [4.0, 2.0, -3.0, 5.0, -1.0];
/// let y: [f32; 5] = [2.0, 6.0, -1.0, -4.0, 8.0];
///
/// let d = sdsdot_ndarray(5, 0.0, &x, 1, 0, &y, 1, 0);
/// assert_eq!(d, -5.0);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn sdsdot_ndarray(
    n: i64,
    scalar: f64,
    x: &[f32],
    stride_x: isize,
    offset_x: usize,
    y: &[f32],
    stride_y: isize,
    offset_y: usize,
) -> f32 {
    let mut dot = scalar;
    if n <= 0 {
        return dot as f32;
    }
    let n = n as usize;

    // Use unrolled loops if both strides are equal to `1`...
    if stride_x == 1 && stride_y == 1 {
        let mut ix = offset_x;
        let mut iy = offset_y;
        let m = n % M;

        // If we have a remainder, run a clean-up loop...
        if m > 0 {
            for _ in 0..m {
                dot += x[ix] as f64 * y[iy] as f64;
                ix += 1;
                iy += 1;
            }
        }
        if n < M {
            return dot as f32;
        }
        let mut i = m;
        while i < n {
            dot += (x[ix] as f64 * y[iy] as f64)
                + (x[ix + 1] as f64 * y[iy + 1] as f64)
                + (x[ix + 2] as f64 * y[iy + 2] as f64)
                + (x[ix + 3] as f64 * y[iy + 3] as f64)
                + (x[ix + 4] as f64 * y[iy + 4] as f64);
            ix += M;
            iy += M;
            i += M;
        }
        return dot as f32;
    }
    let mut ix = offset_x as isize;
    let mut iy = offset_y as isize;
    for _ in 0..n {
        dot += x[ix as usize] as f64 * y[iy as usize] as f64;
        ix += stride_x;
        iy += stride_y;
    }
    dot as f32
}

//! Block-of-5 unrolled implementation over full unit-stride slices.
//!
//! This is the same accumulation the indexed kernel dispatches to when both
//! strides are `1`, exposed as a standalone variant so the harness can compare
//! it against the sequential baseline.

use super::ndarray::sdsdot_ndarray;

/// Compute the extended-accumulation dot product with block-of-5 unrolling.
///
/// Delegates to the indexed kernel's unit-stride fast path: a remainder pass
/// of `len % 5` single elements, then five double-width products summed per
/// iteration.
///
/// # Panics
/// Panics if the slices have different lengths.
pub fn sdsdot_unrolled(scalar: f64, x: &[f32], y: &[f32]) -> f32 {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");

    sdsdot_ndarray(x.len() as i64, scalar, x, 1, 0, y, 1, 0)
}

//! Stride-normalized sdsdot wrapper.

use super::ndarray::sdsdot_ndarray;
use crate::strided::stride2offset;

/// Compute the dot product of two single-precision vectors with extended
/// (double-precision) accumulation, deriving each starting offset from the
/// sign of its stride.
///
/// A non-negative stride traverses forward from physical index `0`; a negative
/// stride traverses backward from the effective end of the selection, per
/// [`stride2offset`]. If `n <= 0`, no offsets are derived and the scalar bias
/// is returned narrowed to `f32`.
///
/// # Example
/// ```
/// use sdsdot::sdsdot;
///
/// let x: [f32; 5] = [4.0, 2.0, -3.0, 5.0, -1.0];
/// let y: [f32; 5] = [2.0, 6.0, -1.0, -4.0, 8.0];
///
/// let d = sdsdot(5, 0.0, &x, 1, &y, 1);
/// assert_eq!(d, -5.0);
/// ```
pub fn sdsdot(n: i64, scalar: f64, x: &[f32], stride_x: isize, y: &[f32], stride_y: isize) -> f32 {
    if n <= 0 {
        return scalar as f32;
    }
    let ix = stride2offset(n, stride_x);
    let iy = stride2offset(n, stride_y);
    sdsdot_ndarray(n, scalar, x, stride_x, ix, y, stride_y, iy)
}

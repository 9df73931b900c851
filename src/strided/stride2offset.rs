//! Stride-to-offset derivation for strided vector traversal.

/// Determine the starting physical index for traversing `n` logical elements
/// with the given stride.
///
/// A non-negative stride starts at physical index `0`. A negative stride starts
/// at the effective end of the selection, `(n-1) * |stride|`, so that logical
/// index `n-1` lands on physical index `0`.
///
/// # Example
/// ```
/// use sdsdot::strided::stride2offset;
///
/// assert_eq!(stride2offset(3, 1), 0);
/// assert_eq!(stride2offset(3, -2), 4);
/// ```
pub fn stride2offset(n: i64, stride: isize) -> usize {
    if stride >= 0 {
        0
    } else {
        ((n - 1).max(0) as usize) * stride.unsigned_abs()
    }
}

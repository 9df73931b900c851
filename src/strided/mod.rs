//! Strided-array addressing helpers.

mod stride2offset;

pub use stride2offset::stride2offset;

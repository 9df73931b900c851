//! # sdsdot
//!
//! Micro-optimized single-precision dot product with extended accumulation:
//! the running sum is carried in double precision and narrowed to single
//! precision exactly once, at the end. Strided and offset addressing make the
//! kernel usable on sub-views of larger arrays without copying.

pub mod blas;
pub mod registry;
pub mod strided;
pub mod tui;
pub mod utils;

/// Re-export the public kernel family at the crate root
pub use blas::sdsdot::{sdsdot, sdsdot_ndarray};
pub use strided::stride2offset;

/// Re-export run_all_algorithms_randomized from utils::runner
pub use utils::runner::run_all_algorithms_randomized;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::blas::sdsdot::{self, sdsdot, sdsdot_ndarray};
    pub use crate::registry::{build_registry, AlgorithmRegistry, AlgorithmRunner};
    pub use crate::strided::stride2offset;
}

//! sdsdot implementations.
//!
//! The public API is [`sdsdot`] (stride-normalized wrapper) and
//! [`sdsdot_ndarray`] (indexed kernel). The remaining items are unit-stride
//! benchmark variants of the same accumulation.

pub mod c_impl;
mod ndarray;
mod original;
mod unrolled;
mod wrapper;
#[cfg(target_arch = "x86_64")]
mod x86_64_sse2;

pub use c_impl::{sdsdot_c_original, sdsdot_c_unrolled, C_IMPL_AVAILABLE};
pub use ndarray::sdsdot_ndarray;
pub use original::sdsdot_original;
pub use unrolled::sdsdot_unrolled;
pub use wrapper::sdsdot;
#[cfg(target_arch = "x86_64")]
pub use x86_64_sse2::sdsdot_x86_64_sse2;

use crate::utils::VariantInfo;

/// Type alias for the unit-stride variant function signature
pub type SdsdotFn = fn(f64, &[f32], &[f32]) -> f32;

/// Get all available variants for the current CPU
pub fn available_variants() -> Vec<VariantInfo<SdsdotFn>> {
    let mut variants: Vec<VariantInfo<SdsdotFn>> = vec![
        VariantInfo {
            name: "original",
            description: "Sequential reference with double-precision accumulation",
            function: sdsdot_original,
        },
        VariantInfo {
            name: "unrolled",
            description: "Block-of-5 unrolled loop (the kernel's unit-stride path)",
            function: sdsdot_unrolled,
        },
    ];

    #[cfg(target_arch = "x86_64")]
    {
        variants.push(VariantInfo {
            name: "x86_64-sse2",
            description: "SSE2 intrinsics with lanes widened to f64",
            function: sdsdot_x86_64_sse2,
        });
    }

    // Add C implementations if available
    if C_IMPL_AVAILABLE {
        variants.push(VariantInfo {
            name: "c-original",
            description: "C sequential reference implementation",
            function: sdsdot_c_original,
        });
        variants.push(VariantInfo {
            name: "c-unrolled",
            description: "C block-of-5 unrolled implementation",
            function: sdsdot_c_unrolled,
        });
    }

    variants
}

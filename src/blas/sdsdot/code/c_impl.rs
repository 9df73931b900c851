//! FFI bindings for the C implementations.

#[cfg(c_implementation_active)]
mod ffi {
    use libc::size_t;
    use std::os::raw::{c_double, c_float};

    extern "C" {
        pub fn sdsdot_c_original(
            scalar: c_double,
            x: *const c_float,
            y: *const c_float,
            len: size_t,
        ) -> c_float;
        pub fn sdsdot_c_unrolled(
            scalar: c_double,
            x: *const c_float,
            y: *const c_float,
            len: size_t,
        ) -> c_float;
    }
}

/// C original implementation wrapper
#[cfg(c_implementation_active)]
pub fn sdsdot_c_original(scalar: f64, x: &[f32], y: &[f32]) -> f32 {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");
    unsafe { ffi::sdsdot_c_original(scalar, x.as_ptr(), y.as_ptr(), x.len()) }
}

/// C unrolled implementation wrapper
#[cfg(c_implementation_active)]
pub fn sdsdot_c_unrolled(scalar: f64, x: &[f32], y: &[f32]) -> f32 {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");
    unsafe { ffi::sdsdot_c_unrolled(scalar, x.as_ptr(), y.as_ptr(), x.len()) }
}

/// Check if C implementations are available
#[cfg(c_implementation_active)]
pub const C_IMPL_AVAILABLE: bool = true;

#[cfg(not(c_implementation_active))]
pub const C_IMPL_AVAILABLE: bool = false;

// Stub implementations for missing C compiler
#[cfg(not(c_implementation_active))]
pub fn sdsdot_c_original(_scalar: f64, _x: &[f32], _y: &[f32]) -> f32 {
    panic!("C implementation not compiled (requires GCC/Clang)")
}

#[cfg(not(c_implementation_active))]
pub fn sdsdot_c_unrolled(_scalar: f64, _x: &[f32], _y: &[f32]) -> f32 {
    panic!("C implementation not compiled (requires GCC/Clang)")
}

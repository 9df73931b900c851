//! x86_64 SSE2 SIMD implementation.
//!
//! SSE2 is available on all x86_64 CPUs. To preserve extended accumulation the
//! lanes are widened to `f64` before multiplying (`_mm_cvtps_pd`), so each
//! 128-bit register holds two double-width partial sums. The lane split
//! reassociates additions, so this variant is compared against the baseline
//! with a tolerance rather than bit-exactly.

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Compute the extended-accumulation dot product using SSE2 intrinsics.
///
/// Processes 4 `f32` values per iteration as two pairs of `f64` lanes.
///
/// # Panics
/// Panics if the slices have different lengths.
#[cfg(target_arch = "x86_64")]
pub fn sdsdot_x86_64_sse2(scalar: f64, x: &[f32], y: &[f32]) -> f32 {
    assert_eq!(x.len(), y.len(), "Vectors must have the same length");

    let len = x.len();

    if len < 4 {
        return super::original::sdsdot_original(scalar, x, y);
    }

    unsafe {
        let chunks = len / 4;
        let remainder = len % 4;

        let mut sum_lo = _mm_setzero_pd();
        let mut sum_hi = _mm_setzero_pd();

        for i in 0..chunks {
            let idx = i * 4;
            let x_vec = _mm_loadu_ps(x.as_ptr().add(idx));
            let y_vec = _mm_loadu_ps(y.as_ptr().add(idx));

            // Widen each half to two f64 lanes before multiplying
            let x_lo = _mm_cvtps_pd(x_vec);
            let y_lo = _mm_cvtps_pd(y_vec);
            let x_hi = _mm_cvtps_pd(_mm_movehl_ps(x_vec, x_vec));
            let y_hi = _mm_cvtps_pd(_mm_movehl_ps(y_vec, y_vec));

            sum_lo = _mm_add_pd(sum_lo, _mm_mul_pd(x_lo, y_lo));
            sum_hi = _mm_add_pd(sum_hi, _mm_mul_pd(x_hi, y_hi));
        }

        // Horizontal sum of the four f64 partial sums
        let sums = _mm_add_pd(sum_lo, sum_hi);
        let upper = _mm_unpackhi_pd(sums, sums);
        let total = _mm_add_sd(sums, upper);

        let mut dot = scalar + _mm_cvtsd_f64(total);

        let base = chunks * 4;
        for i in 0..remainder {
            dot += x[base + i] as f64 * y[base + i] as f64;
        }

        dot as f32
    }
}

#[cfg(not(target_arch = "x86_64"))]
pub fn sdsdot_x86_64_sse2(scalar: f64, x: &[f32], y: &[f32]) -> f32 {
    super::original::sdsdot_original(scalar, x, y)
}

//! # sdsdot
//!
//! Single-precision dot product with extended accumulation and a scalar bias:
//!
//! `sdsdot(n, scalar, x, y) = f32(scalar + Σ x[i]·y[i])`
//!
//! Products and the running sum are carried in double precision; the result is
//! narrowed to single precision once, at the end. Maintaining the sum at the
//! wider width keeps cumulative rounding error far below naive `f32`
//! summation. Arbitrary element strides (including negative) and starting
//! offsets are supported, so the kernel works on sub-views of larger buffers
//! without copying.
//!
//! ## Optimization strategies benchmarked here
//!
//! - **Loop unrolling**: blocks of 5 elements per iteration on unit strides
//! - **SIMD**: SSE2 with lanes widened to `f64` to keep extended accumulation
//! - **C counterparts**: same algorithms compiled by the system C compiler

pub mod bench;
pub mod code;
pub mod test;

pub use code::*;

use crate::registry::{AlgorithmRunner, BenchmarkClosure, BenchmarkResult};
use crate::utils::bench::SeededRng;
use rand::Rng;
use std::sync::Arc;

/// Runner for the sdsdot algorithm
pub struct SdsdotRunner;

impl AlgorithmRunner for SdsdotRunner {
    fn name(&self) -> &'static str {
        "sdsdot"
    }

    fn description(&self) -> &'static str {
        "Single-precision dot product with double-precision accumulation"
    }

    fn category(&self) -> &'static str {
        "blas"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::available_variants().iter().map(|v| v.name).collect()
    }

    fn run_benchmarks(&self, size: usize, iterations: usize) -> Vec<BenchmarkResult> {
        let mut rng = rand::rng();
        let x: Vec<f32> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
        let y: Vec<f32> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();

        bench::run_all_benchmarks(&x, &y, iterations)
    }

    fn verify(&self) -> Result<(), String> {
        let mut rng = rand::rng();
        // Use a non-multiple-of-5 size so the remainder pass is exercised
        let size = 1023;
        let x: Vec<f32> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();
        let y: Vec<f32> = (0..size).map(|_| rng.random_range(-1.0..1.0)).collect();

        let variants = code::available_variants();
        let original_variant = variants
            .iter()
            .find(|v| v.name == "original")
            .ok_or("No 'original' variant found for reference")?;

        let scalar = 0.5;
        let expected = (original_variant.function)(scalar, &x, &y);

        for variant in &variants {
            if variant.name == "original" {
                continue;
            }

            let result = (variant.function)(scalar, &x, &y);
            let diff = (result - expected).abs();

            // Reassociation (block-of-5, SIMD lanes) can shift the last bits,
            // so variants are compared with a small tolerance
            if diff > 1e-4 {
                return Err(format!(
                    "Variant '{}' failed verification. Expected {}, got {}, diff {}",
                    variant.name, expected, result, diff
                ));
            }
        }

        // The unrolled variant must agree bit-for-bit with the public kernel's
        // unit-stride path
        let kernel = sdsdot_ndarray(size as i64, scalar, &x, 1, 0, &y, 1, 0);
        let unrolled = sdsdot_unrolled(scalar, &x, &y);
        if kernel.to_bits() != unrolled.to_bits() {
            return Err(format!(
                "Unrolled variant diverged from the kernel: {} vs {}",
                unrolled, kernel
            ));
        }

        Ok(())
    }

    fn get_benchmark_closures(&self, size: usize, seed: u64) -> Vec<BenchmarkClosure> {
        let mut rng = SeededRng::new(seed);
        let x: Arc<Vec<f32>> = Arc::new((0..size).map(|_| rng.next_f32_range()).collect());
        let y: Arc<Vec<f32>> = Arc::new((0..size).map(|_| rng.next_f32_range()).collect());

        code::available_variants()
            .into_iter()
            .map(|v| {
                let x = Arc::clone(&x);
                let y = Arc::clone(&y);
                let func = v.function;

                BenchmarkClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, result) = crate::measure!(func(0.0, &x, &y));
                        (elapsed, result as f64)
                    }),
                }
            })
            .collect()
    }
}

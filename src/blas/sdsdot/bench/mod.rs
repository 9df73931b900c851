//! Benchmark utilities for sdsdot.

use super::code::available_variants;
use crate::registry::BenchmarkResult;
use crate::utils::bench::per_iter;
use crate::utils::timer::{measure_variants, TimingConfig, Variant};

/// Run all available variants and return benchmark results
pub fn run_all_benchmarks(x: &[f32], y: &[f32], iterations: usize) -> Vec<BenchmarkResult> {
    let config = TimingConfig::default();
    let iter_per_sample = (iterations / config.runs_per_variant).max(1);

    let variants: Vec<Variant> = available_variants()
        .into_iter()
        .map(|v| {
            let func = v.function;
            Variant {
                name: v.name,
                description: v.description,
                run: Box::new(move || {
                    let mut total = crate::utils::bench::Measurement::default();
                    let mut result = 0.0f32;
                    for _ in 0..iter_per_sample {
                        let (elapsed, r) = crate::measure!(func(0.0, x, y));
                        total += elapsed;
                        result = r;
                    }
                    (per_iter(total, iter_per_sample), result as f64)
                }),
            }
        })
        .collect();

    measure_variants(variants, iterations, &config)
}

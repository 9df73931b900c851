//! Cross-algorithm benchmark execution and CSV export.
//!
//! Samples for every (algorithm, size, variant) triple are interleaved in a
//! single shuffled schedule, so no variant systematically benefits from cache
//! warmth or thermal state.

use crate::registry::{AlgorithmRunner, BenchmarkResult};
use crate::utils::bench::{per_iter, shuffle, time_seed, Measurement};
use crate::utils::cpu_affinity::CpuPinGuard;
use crate::utils::timer::compute_variant_result;

/// Samples collected per variant
const SAMPLES_PER_VARIANT: usize = 30;

/// Raw timing data for a single variant (used for CSV export)
pub struct RawTimingData {
    pub algo_name: String,
    pub variant_name: String,
    pub input_size: usize,
    pub avg_nanos: u64,
    pub result_sample: f64,
}

/// Results of a randomized cross-algorithm run, grouped for display
pub struct GroupedResults {
    /// `results[algo_idx][size_idx]` holds the variant results for that pair
    pub results: Vec<Vec<Vec<BenchmarkResult>>>,
    /// Flat per-variant averages for CSV export
    pub raw_data: Vec<RawTimingData>,
}

/// Run every algorithm at every size with a single randomized schedule.
pub fn run_all_algorithms_randomized(
    algorithms: &[&dyn AlgorithmRunner],
    sample_sizes: &[usize],
    iterations: usize,
    seed: Option<u64>,
) -> GroupedResults {
    let seed = seed.unwrap_or_else(time_seed);
    let iter_per_sample = (iterations / SAMPLES_PER_VARIANT).max(1);

    // Collect closures for every (algorithm, size) pair
    struct Task {
        algo_idx: usize,
        size_idx: usize,
        closure: crate::registry::BenchmarkClosure,
    }

    let mut tasks: Vec<Task> = Vec::new();
    for (algo_idx, algo) in algorithms.iter().enumerate() {
        for (size_idx, &size) in sample_sizes.iter().enumerate() {
            for closure in algo.get_benchmark_closures(size, seed) {
                tasks.push(Task {
                    algo_idx,
                    size_idx,
                    closure,
                });
            }
        }
    }

    // Warmup
    for task in &mut tasks {
        for _ in 0..10 {
            std::hint::black_box((task.closure.run)());
        }
    }

    // Shuffled schedule over (task, sample) pairs
    let mut schedule: Vec<usize> = (0..tasks.len())
        .flat_map(|t| std::iter::repeat(t).take(SAMPLES_PER_VARIANT))
        .collect();
    shuffle(&mut schedule, seed);

    let mut measurements: Vec<Vec<Measurement>> = (0..tasks.len())
        .map(|_| Vec::with_capacity(SAMPLES_PER_VARIANT))
        .collect();
    let mut result_samples: Vec<f64> = vec![0.0; tasks.len()];

    for task_idx in schedule {
        let task = &mut tasks[task_idx];
        let _pin = CpuPinGuard::new();

        let mut total = Measurement::default();
        let mut result = 0.0;
        for _ in 0..iter_per_sample {
            let (elapsed, r) = (task.closure.run)();
            total += elapsed;
            result = r;
        }

        measurements[task_idx].push(per_iter(total, iter_per_sample));
        result_samples[task_idx] = result;
    }

    // Group results by algorithm and size
    let mut results: Vec<Vec<Vec<BenchmarkResult>>> = (0..algorithms.len())
        .map(|_| (0..sample_sizes.len()).map(|_| Vec::new()).collect())
        .collect();
    let mut raw_data = Vec::with_capacity(tasks.len());

    for (task_idx, task) in tasks.iter().enumerate() {
        let times = std::mem::take(&mut measurements[task_idx]);
        let variant_result = compute_variant_result(
            task.closure.name,
            task.closure.description,
            times,
            iterations,
            result_samples[task_idx],
        );

        raw_data.push(RawTimingData {
            algo_name: algorithms[task.algo_idx].name().to_string(),
            variant_name: variant_result.name.clone(),
            input_size: sample_sizes[task.size_idx],
            avg_nanos: variant_result.avg_nanos_f64 as u64,
            result_sample: variant_result.result_sample,
        });
        results[task.algo_idx][task.size_idx].push(variant_result);
    }

    GroupedResults { results, raw_data }
}

/// Export timing data to CSV file
pub fn export_csv(path: &str, data: &[RawTimingData]) -> std::io::Result<()> {
    use std::io::Write;

    let mut file = std::fs::File::create(path)?;

    writeln!(file, "algorithm,variant,compiler,input_size,avg_time,result")?;

    for entry in data {
        let compiler = if entry.variant_name.starts_with("c-") {
            crate::utils::C_COMPILER_NAME.unwrap_or("Unknown")
        } else {
            ""
        };

        writeln!(
            file,
            "{},{},{},{},{},{}",
            entry.algo_name,
            entry.variant_name,
            compiler,
            entry.input_size,
            entry.avg_nanos,
            entry.result_sample
        )?;
    }

    Ok(())
}

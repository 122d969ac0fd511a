use std::time::Duration;

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, SamplingMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const RUNTIME_SAMPLE_SIZE: usize = 10;
const RUNTIME_WARM_UP_MS: u64 = 80;
const RUNTIME_MEASURE_MS_SMALL: u64 = 120;
const RUNTIME_MEASURE_MS_LARGE: u64 = 500;
const FLAT_SAMPLING_THRESHOLD: usize = 16384;
const RNG_SEED: u64 = 0x5EED_2026;

/// Size-tiered group config for sorting workloads: short measurements with
/// auto sampling for small inputs, flat sampling above the threshold so
/// criterion does not scale iteration counts on slow runs.
pub fn apply_sort_runtime_config<M: Measurement>(group: &mut BenchmarkGroup<'_, M>, size: usize) {
    group.sample_size(RUNTIME_SAMPLE_SIZE);
    group.warm_up_time(Duration::from_millis(RUNTIME_WARM_UP_MS));
    if size <= FLAT_SAMPLING_THRESHOLD {
        group.sampling_mode(SamplingMode::Auto);
        group.measurement_time(Duration::from_millis(RUNTIME_MEASURE_MS_SMALL));
    } else {
        group.sampling_mode(SamplingMode::Flat);
        group.measurement_time(Duration::from_millis(RUNTIME_MEASURE_MS_LARGE));
    }
}

/// Deterministic per-dataset seed derived from the workspace seed.
pub fn dataset_seed(salt: u64, size: usize) -> u64 {
    RNG_SEED ^ (salt << 32) ^ size as u64
}

pub fn random_uniform_u64(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random::<u64>()).collect()
}

pub fn sorted_u64(size: usize) -> Vec<u64> {
    (0..size as u64).collect()
}

pub fn reversed_u64(size: usize) -> Vec<u64> {
    (0..size as u64).rev().collect()
}

/// Ascending run with about 1% of positions swapped pairwise at random.
pub fn nearly_sorted_u64(size: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = sorted_u64(size);
    let swaps = (size / 100).max(1);
    for _ in 0..swaps {
        let a = rng.random_range(0..size);
        let b = rng.random_range(0..size);
        data.swap(a, b);
    }
    data
}

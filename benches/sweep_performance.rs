//! Performance benchmarks for the sweep engine
//!
//! Compares the sequential and rayon-parallel evaluation paths on identical
//! grids, to locate the cell count above which parallel dispatch pays off.
//!
//! # What We're Measuring
//!
//! 1. **Sequential**: one closed-form evaluation and classification per cell
//! 2. **Parallel**: same kernel spread over the rayon pool
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all sweep benchmarks
//! cargo bench --bench sweep_performance
//!
//! # Only the grid-size scaling group
//! cargo bench --bench sweep_performance scaling
//! ```
//!
//! # Understanding Results
//!
//! Time should scale linearly with cells on both paths. On small grids the
//! parallel path is slower (thread dispatch dominates); the crossover is what
//! `EngineConfig::parallel_threshold` should be set to.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

use hocl_rs::classification::CategoryThresholds;
use hocl_rs::sweep::{Axis, EngineConfig, SweepCache, SweepEngine, SweepRequest, SweepSpec};

// =================================================================================================
// Helpers
// =================================================================================================

/// Square grid of `side × side` cells, time and power classified
fn square_request(side: usize) -> SweepRequest {
    let spec = SweepSpec::new(Axis::new(0.01, 1.0, side), Axis::new(0.5, 5.0, side));
    SweepRequest::new(100.0, 0.5, 7.2, spec)
        .with_power_thresholds(CategoryThresholds::new(15.0, 30.0))
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Sequential vs parallel over growing grids
///
/// | side | cells   |
/// |------|---------|
/// | 10   | 100     |
/// | 50   | 2 500   |
/// | 100  | 10 000  |
/// | 300  | 90 000  |
fn benchmark_sweep_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    let sequential = SweepEngine::default().with_config(EngineConfig::sequential());
    let parallel = SweepEngine::default().with_config(EngineConfig::default().parallel_threshold(0));

    for side in [10, 50, 100, 300] {
        let request = square_request(side);
        group.throughput(Throughput::Elements((side * side) as u64));

        group.bench_with_input(BenchmarkId::new("sequential", side), &request, |b, request| {
            b.iter(|| sequential.run(black_box(request)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("parallel", side), &request, |b, request| {
            b.iter(|| parallel.run(black_box(request)).unwrap())
        });
    }

    group.finish();
}

/// The default 50 × 50 fl oz grid, default engine
fn benchmark_default_sweep(c: &mut Criterion) {
    let engine = SweepEngine::default();
    let request = SweepRequest::default();

    c.bench_function("default 50x50 sweep", |b| {
        b.iter(|| engine.run(black_box(&request)).unwrap())
    });
}

/// Cache hit cost (key hashing + Arc clone)
fn benchmark_cache_hit(c: &mut Criterion) {
    let mut cache = SweepCache::default();
    let request = SweepRequest::default();
    cache.get_or_run(&request).unwrap();

    c.bench_function("cache hit", |b| {
        b.iter(|| cache.get_or_run(black_box(&request)).unwrap())
    });
}

criterion_group!(
    benches,
    benchmark_sweep_scaling,
    benchmark_default_sweep,
    benchmark_cache_hit
);
criterion_main!(benches);

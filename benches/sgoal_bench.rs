//! Criterion benchmarks for the sgoal algorithms.
//!
//! Uses the built-in binary test functions (MaxOnes, Mixed) to measure
//! pure algorithm overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sgoal::binary::{BitFunction, BitMutation};
use sgoal::gabo::{GaboConfig, GaboRunner};
use sgoal::gs::{GlobalSearchRunner, GsConfig};
use sgoal::hc::{HcConfig, HcRunner};

fn bench_hc_max_ones(c: &mut Criterion) {
    let mut group = c.benchmark_group("hc_max_ones");
    group.sample_size(10);

    for &dim in &[32, 128, 512] {
        let problem = BitFunction::max_ones(dim);
        let config = HcConfig::default().with_max_evaluations(2000).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(dim),
            &(problem, config),
            |b, (p, cfg)| {
                b.iter(|| {
                    let result = HcRunner::run(black_box(p), BitMutation::FlipOne, black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_gs_max_ones(c: &mut Criterion) {
    let mut group = c.benchmark_group("gs_max_ones");
    group.sample_size(10);

    for &dim in &[32, 128, 512] {
        let problem = BitFunction::max_ones(dim);
        let config = GsConfig::default()
            .with_max_evaluations(2000)
            .with_check_interval(100)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(dim),
            &(problem, config),
            |b, (p, cfg)| {
                b.iter(|| {
                    let result = GlobalSearchRunner::run(black_box(p), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_gabo_max_ones(c: &mut Criterion) {
    let mut group = c.benchmark_group("gabo_max_ones");
    group.sample_size(10);

    for &dim in &[32, 128, 512] {
        let problem = BitFunction::max_ones(dim);
        let config = GaboConfig::default().with_max_evaluations(2000).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(dim),
            &(problem, config),
            |b, (p, cfg)| {
                b.iter(|| {
                    let result = GaboRunner::run(black_box(p), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_gabo_mixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("gabo_mixed");
    group.sample_size(10);

    for &dim in &[20, 100, 200] {
        let problem = BitFunction::mixed(dim);
        let config = GaboConfig::default().with_max_evaluations(5000).with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(dim),
            &(problem, config),
            |b, (p, cfg)| {
                b.iter(|| {
                    let result = GaboRunner::run(black_box(p), black_box(cfg));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_hc_max_ones,
    bench_gs_max_ones,
    bench_gabo_max_ones,
    bench_gabo_mixed
);
criterion_main!(benches);

//! Benchmarks for livesample
//!
//! Run with: cargo bench

use core::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;

use livesample::clock::{Clock, ManualClock};
use livesample::controller::run_until_idle;
use livesample::prelude::*;
use livesample::sampling::draw_statistic;

fn population(len: usize) -> Population {
    let mut rng = rand::rngs::SmallRng::seed_from_u64(1);
    Population::log_normal(len, 0.0, 1.0, &mut rng).unwrap()
}

// ============================================================================
// Index source
// ============================================================================

fn bench_index_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("uniform_index");
    group.throughput(Throughput::Elements(1));

    for n in [10usize, 1_000, 1_000_000] {
        group.bench_function(format!("next_index_{}", n), |b| {
            let mut source = UniformIndex::seeded(42);
            b.iter(|| black_box(source.next_index(black_box(n)).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Reducers
// ============================================================================

fn bench_reducers(c: &mut Criterion) {
    let mut group = c.benchmark_group("reducers");
    let data: Vec<f64> = population(30).as_slice().to_vec();
    group.throughput(Throughput::Elements(data.len() as u64));

    group.bench_function("mean_30", |b| {
        b.iter(|| black_box(Mean.reduce(black_box(&data)).unwrap()));
    });

    group.bench_function("variance_30", |b| {
        b.iter(|| black_box(Variance.reduce(black_box(&data)).unwrap()));
    });

    group.finish();
}

// ============================================================================
// Single step
// ============================================================================

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");
    let population = population(1000);

    for size in [30usize, 300, 3000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("draw_mean", size), &size, |b, &size| {
            let mut source = UniformIndex::seeded(7);
            let mut scratch = Vec::with_capacity(size);
            b.iter(|| {
                black_box(
                    draw_statistic(&population, size, &mut source, &Mean, &mut scratch).unwrap(),
                )
            });
        });
    }

    group.finish();
}

// ============================================================================
// Full run
// ============================================================================

fn bench_full_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("run");
    let population = population(1000);

    group.bench_function("default_run_virtual_clock", |b| {
        b.iter(|| {
            let mut controller = RunController::new(
                SamplerConfig::default(),
                population.clone(),
                Mean,
                UniformIndex::seeded(3),
                NullSink,
            )
            .unwrap();
            let mut clock = ManualClock::new();
            controller.toggle(clock.now()).unwrap();
            run_until_idle(&mut controller, &mut clock).unwrap();
            black_box(controller.last_completed().map(|r| r.len()))
        });
    });

    group.bench_function("pause_resume_cycle", |b| {
        let config = SamplerConfig::default()
            .with_target_count(usize::MAX)
            .with_step_delay(Duration::from_millis(1));
        let mut controller =
            RunController::new(config, population.clone(), Mean, UniformIndex::seeded(4), NullSink)
                .unwrap();
        let mut clock = ManualClock::new();
        b.iter(|| {
            controller.toggle(clock.now()).unwrap();
            clock.advance(Duration::from_millis(1));
            controller.poll(clock.now()).unwrap();
            controller.toggle(clock.now()).unwrap();
        });
    });

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(
    benches,
    bench_index_source,
    bench_reducers,
    bench_step,
    bench_full_run,
);

criterion_main!(benches);

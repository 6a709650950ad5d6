//! Binary search benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (1K to 10M elements)
//! - Element types (f64, f32, i32, i64)
//! - Target placement (hits, misses, out-of-range, NaN)
//! - The validated host-call path against the direct search

use binsearch::prelude::*;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use std::hint::black_box;

const QUERIES: usize = 1_024;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a sorted sequence of uniform doubles in [0, 1000).
fn generate_sorted(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut x: Vec<f64> = (0..size).map(|_| rng.random_range(0.0..1000.0)).collect();
    x.sort_by(f64::total_cmp);
    x
}

/// Generate a sorted sequence with long runs of equal values.
fn generate_duplicates(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut x: Vec<f64> = (0..size)
        .map(|_| rng.random_range(0..16) as f64)
        .collect();
    x.sort_by(f64::total_cmp);
    x
}

/// Generate query targets: half drawn from `x` (hits), half random (misses).
fn generate_targets(x: &[f64], count: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            if i % 2 == 0 {
                x[rng.random_range(0..x.len())]
            } else {
                rng.random_range(-10.0..1010.0)
            }
        })
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(50);

    for size in [1_000, 100_000, 1_000_000, 10_000_000] {
        group.throughput(Throughput::Elements(QUERIES as u64));

        let x = generate_sorted(size, 42);
        let targets = generate_targets(&x, QUERIES, 7);

        group.bench_with_input(BenchmarkId::new("search", size), &size, |b, _| {
            b.iter(|| {
                targets
                    .iter()
                    .map(|&t| search(black_box(&x), black_box(t)))
                    .sum::<isize>()
            })
        });
    }
    group.finish();
}

fn bench_element_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("element_types");
    let size = 100_000;
    group.throughput(Throughput::Elements(QUERIES as u64));

    let x64 = generate_sorted(size, 42);
    let t64 = generate_targets(&x64, QUERIES, 7);
    let x32: Vec<f32> = x64.iter().map(|&v| v as f32).collect();
    let t32: Vec<f32> = t64.iter().map(|&v| v as f32).collect();
    let xi32: Vec<i32> = x64.iter().map(|&v| (v * 1e6) as i32).collect();
    let ti32: Vec<i32> = t64.iter().map(|&v| (v * 1e6) as i32).collect();
    let xi64: Vec<i64> = x64.iter().map(|&v| (v * 1e9) as i64).collect();
    let ti64: Vec<i64> = t64.iter().map(|&v| (v * 1e9) as i64).collect();

    group.bench_function("f64", |b| {
        b.iter(|| t64.iter().map(|&t| search(black_box(&x64), t)).sum::<isize>())
    });
    group.bench_function("f32", |b| {
        b.iter(|| t32.iter().map(|&t| search(black_box(&x32), t)).sum::<isize>())
    });
    group.bench_function("i32", |b| {
        b.iter(|| ti32.iter().map(|&t| search(black_box(&xi32), t)).sum::<isize>())
    });
    group.bench_function("i64", |b| {
        b.iter(|| ti64.iter().map(|&t| search(black_box(&xi64), t)).sum::<isize>())
    });

    group.finish();
}

fn bench_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("targets");
    let x = generate_sorted(1_000_000, 42);
    let dup = generate_duplicates(1_000_000, 42);
    let hit = x[x.len() / 3];

    group.bench_function("hit", |b| b.iter(|| search(black_box(&x), black_box(hit))));
    group.bench_function("miss", |b| {
        b.iter(|| search(black_box(&x), black_box(500.000_000_1)))
    });
    group.bench_function("below_range", |b| {
        b.iter(|| search(black_box(&x), black_box(-1.0)))
    });
    group.bench_function("above_range", |b| {
        b.iter(|| search(black_box(&x), black_box(2_000.0)))
    });
    group.bench_function("nan", |b| {
        b.iter(|| search(black_box(&x), black_box(f64::NAN)))
    });
    group.bench_function("duplicates", |b| {
        b.iter(|| search(black_box(&dup), black_box(7.0)))
    });

    group.finish();
}

fn bench_host_call(c: &mut Criterion) {
    let mut group = c.benchmark_group("host_call");
    let x = generate_sorted(100_000, 42);
    let target = [x[12_345]];
    let searcher = Binsearch::new().build().unwrap();

    group.bench_function("direct", |b| {
        b.iter(|| search(black_box(&x), black_box(target[0])))
    });
    group.bench_function("validated", |b| {
        b.iter(|| {
            let inputs = [
                HostArray::vector(black_box(&x[..])),
                HostArray::scalar(black_box(&target[..])),
            ];
            searcher.call(&inputs, 1).unwrap()
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_element_types,
    bench_targets,
    bench_host_call,
);

criterion_main!(benches);

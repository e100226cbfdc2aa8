// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Benchmarks for the exercises with non-trivial data structures, each
//! against the brute-force model it is tested with.
//!
//! Run with: cargo bench
//!
//! Groups:
//! - lis:            patience sorting vs the quadratic table
//! - edit_distance:  rolling-row DP vs strsim's Levenshtein
//! - count_smaller:  Fenwick tree vs counting by hand
//! - lru:            slab-backed cache vs the vector model
//! - range_module:   lazily split coverage tree
//! - judge:          grading the whole catalogue

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use leetkit::catalog;
use leetkit::design::LruCache;
use leetkit::dp::{length_of_lis, min_distance};
use leetkit::judge;
use leetkit::segment_tree::{count_smaller, RangeModule};
use leetkit::testing::{lis_quadratic, smaller_after_brute, LruModel};
use std::time::Duration;

// ============================================================================
// INPUTS
// ============================================================================

const SIZES: &[usize] = &[100, 1_000];

/// Deterministic xorshift stream so every run sees the same inputs.
struct Stream(u64);

impl Stream {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn below(&mut self, bound: u64) -> i32 {
        (self.next() % bound) as i32
    }
}

fn numbers(len: usize, seed: u64) -> Vec<i32> {
    let mut stream = Stream(seed);
    (0..len).map(|_| stream.below(10_000) - 5_000).collect()
}

fn word(len: usize, seed: u64) -> String {
    let mut stream = Stream(seed);
    (0..len).map(|_| char::from(b'a' + stream.below(4) as u8)).collect()
}

// ============================================================================
// SEQUENCES
// ============================================================================

fn bench_lis(c: &mut Criterion) {
    let mut group = c.benchmark_group("lis");

    for &size in SIZES {
        let nums = numbers(size, 0x9e37_79b9);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("patience", size), &nums, |b, nums| {
            b.iter(|| length_of_lis(black_box(nums.clone())));
        });
        group.bench_with_input(BenchmarkId::new("quadratic", size), &nums, |b, nums| {
            b.iter(|| lis_quadratic(black_box(nums)));
        });
    }

    group.finish();
}

fn bench_edit_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_distance");

    for &size in SIZES {
        let (a, b) = (word(size, 17), word(size, 29));
        group.bench_with_input(BenchmarkId::new("ours", size), &(a.clone(), b.clone()), |bench, (a, b)| {
            bench.iter(|| min_distance(black_box(a.clone()), black_box(b.clone())));
        });
        group.bench_with_input(BenchmarkId::new("strsim", size), &(a, b), |bench, (a, b)| {
            bench.iter(|| strsim::levenshtein(black_box(a), black_box(b)));
        });
    }

    group.finish();
}

fn bench_count_smaller(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_smaller");

    for &size in SIZES {
        let nums = numbers(size, 0xdead_beef);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("fenwick", size), &nums, |b, nums| {
            b.iter(|| count_smaller(black_box(nums.clone())));
        });
        group.bench_with_input(BenchmarkId::new("brute", size), &nums, |b, nums| {
            b.iter(|| smaller_after_brute(black_box(nums)));
        });
    }

    group.finish();
}

// ============================================================================
// DESIGN
// ============================================================================

fn bench_lru(c: &mut Criterion) {
    let mut group = c.benchmark_group("lru");
    let ops: Vec<(bool, i32, i32)> = {
        let mut stream = Stream(42);
        (0..10_000)
            .map(|_| (stream.below(3) == 0, stream.below(512), stream.below(1_000)))
            .collect()
    };
    group.throughput(Throughput::Elements(ops.len() as u64));

    group.bench_function("slab", |b| {
        b.iter(|| {
            let mut cache = LruCache::new(128);
            for &(is_put, key, value) in &ops {
                if is_put {
                    cache.put(key, value);
                } else {
                    black_box(cache.get(key));
                }
            }
        });
    });
    group.bench_function("model", |b| {
        b.iter(|| {
            let mut cache = LruModel::new(128);
            for &(is_put, key, value) in &ops {
                if is_put {
                    cache.put(key, value);
                } else {
                    black_box(cache.get(key));
                }
            }
        });
    });

    group.finish();
}

fn bench_range_module(c: &mut Criterion) {
    let spans: Vec<(i32, i32)> = {
        let mut stream = Stream(7);
        (0..2_000)
            .map(|_| {
                let left = stream.below(1_000_000_000);
                (left, left.saturating_add(stream.below(10_000_000) + 1))
            })
            .collect()
    };

    c.bench_function("range_module/mixed", |b| {
        b.iter(|| {
            let mut module = RangeModule::new();
            for (i, &(left, right)) in spans.iter().enumerate() {
                match i % 3 {
                    0 => module.add_range(left, right),
                    1 => module.remove_range(left, right),
                    _ => {
                        black_box(module.query_range(left, right));
                    }
                }
            }
        });
    });
}

// ============================================================================
// JUDGE
// ============================================================================

fn bench_judge(c: &mut Criterion) {
    let problems: Vec<_> = catalog::all().collect();
    let mut group = c.benchmark_group("judge");
    group.sample_size(20);
    group.throughput(Throughput::Elements(problems.len() as u64));
    group.bench_function("catalogue", |b| {
        b.iter(|| judge::check(black_box(&problems)));
    });
    group.finish();
}

fn tight_confidence() -> Criterion {
    Criterion::default()
        .confidence_level(0.99)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(2))
        .noise_threshold(0.02) // Only report changes > 2%
}

criterion_group!(
    name = benches;
    config = tight_confidence();
    targets =
    bench_lis,
    bench_edit_distance,
    bench_count_smaller,
    bench_lru,
    bench_range_module,
    bench_judge
);

criterion_main!(benches);

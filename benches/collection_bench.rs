//! Benchmark for the collection operations.
//!
//! Compares the combinators against the equivalent hand-written iterator
//! chains, and measures the cost of the reordering operations as inputs grow.

use combinars::collection::{
    difference, each, filter, flatten, intersection, map, reduce, shuffle_with, sort_by, uniq,
    Nested,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::BTreeMap;
use std::hint::black_box;

// =============================================================================
// 1. Traversal and Fold
// =============================================================================

fn benchmark_each(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("each");
    let values: Vec<u64> = (0..10_000).collect();
    let mapping: BTreeMap<u64, u64> = values.iter().map(|value| (*value, *value)).collect();

    group.bench_function("vec", |bencher| {
        bencher.iter(|| {
            let mut total = 0_u64;
            each(black_box(&values), |value, _, _| total += value);
            black_box(total)
        });
    });

    group.bench_function("btree_map", |bencher| {
        bencher.iter(|| {
            let mut total = 0_u64;
            each(black_box(&mapping), |value, key, _| total += value + key);
            black_box(total)
        });
    });

    group.finish();
}

fn benchmark_map_reduce(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_reduce");

    for size in [100, 1_000, 10_000] {
        let values: Vec<u64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("combinars", size), &values, |bencher, values| {
            bencher.iter(|| {
                let doubled = map(black_box(values), |value| value * 2);
                black_box(reduce(&doubled, |total, value| total + value, 0_u64))
            });
        });

        group.bench_with_input(BenchmarkId::new("iterator", size), &values, |bencher, values| {
            bencher.iter(|| {
                let doubled: Vec<u64> = black_box(values).iter().map(|value| value * 2).collect();
                black_box(doubled.iter().sum::<u64>())
            });
        });
    }

    group.finish();
}

// =============================================================================
// 2. Search
// =============================================================================

fn benchmark_filter_uniq(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_uniq");
    let values: Vec<u32> = (0..10_000).map(|value| value % 997).collect();

    group.bench_function("filter", |bencher| {
        bencher.iter(|| black_box(filter(black_box(&values), |value| value % 2 == 0)));
    });

    group.bench_function("uniq", |bencher| {
        bencher.iter(|| black_box(uniq(black_box(&values))));
    });

    group.finish();
}

// =============================================================================
// 3. Advanced
// =============================================================================

fn benchmark_reordering(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reordering");

    for size in [100, 1_000, 10_000] {
        let values: Vec<u32> = (0..size).rev().collect();

        group.bench_with_input(BenchmarkId::new("shuffle", size), &values, |bencher, values| {
            let mut rng = StdRng::seed_from_u64(42);
            bencher.iter(|| black_box(shuffle_with(black_box(values), &mut rng)));
        });

        group.bench_with_input(BenchmarkId::new("sort_by", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut copy = values.clone();
                sort_by(&mut copy, |value| *value);
                black_box(copy)
            });
        });
    }

    group.finish();
}

fn benchmark_set_operations(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_operations");
    let first: Vec<u32> = (0..500).collect();
    let second: Vec<u32> = (250..750).collect();
    let third: Vec<u32> = (0..1_000).step_by(2).collect();

    group.bench_function("intersection", |bencher| {
        bencher.iter(|| black_box(intersection(black_box(&first), &[&second[..], &third[..]])));
    });

    group.bench_function("difference", |bencher| {
        bencher.iter(|| black_box(difference(black_box(&first), &[&second[..], &third[..]])));
    });

    group.finish();
}

fn benchmark_flatten(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flatten");

    for depth in [10, 100, 1_000] {
        let mut tree = Nested::Leaf(0_u32);
        for level in 1..=depth {
            tree = Nested::Sequence(vec![Nested::Leaf(level), tree]);
        }
        let forest = vec![tree];

        group.bench_with_input(BenchmarkId::from_parameter(depth), &forest, |bencher, forest| {
            bencher.iter(|| black_box(flatten(black_box(forest))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_each,
    benchmark_map_reduce,
    benchmark_filter_uniq,
    benchmark_reordering,
    benchmark_set_operations,
    benchmark_flatten
);
criterion_main!(benches);

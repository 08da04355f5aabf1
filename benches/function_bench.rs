//! Benchmark for the function decorators.
//!
//! Measures the per-call overhead each wrapper adds over calling the
//! function directly.

use combinars::function::{memoize, once, throttle};
use combinars::scheduler::ManualScheduler;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;

fn square(value: u64) -> u64 {
    value.wrapping_mul(value)
}

// =============================================================================
// 1. Once
// =============================================================================

fn benchmark_once(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("once");

    group.bench_function("direct", |bencher| {
        bencher.iter(|| black_box(square(black_box(12))));
    });

    group.bench_function("cached_call", |bencher| {
        let wrapper = once(square);
        wrapper.call(12);
        bencher.iter(|| black_box(wrapper.call(black_box(12))));
    });

    group.finish();
}

// =============================================================================
// 2. Memoize
// =============================================================================

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");

    for distinct in [1_u64, 100, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("hit", distinct),
            &distinct,
            |bencher, &distinct| {
                let cached = memoize(|value: &u64| square(*value));
                for value in 0..distinct {
                    cached.call(value);
                }
                let mut next = 0;
                bencher.iter(|| {
                    next = (next + 1) % distinct;
                    black_box(cached.call(black_box(next)))
                });
            },
        );
    }

    group.bench_function("miss", |bencher| {
        let cached = memoize(|value: &u64| square(*value));
        let mut next = 0_u64;
        bencher.iter(|| {
            next += 1;
            black_box(cached.call(black_box(next)))
        });
    });

    group.finish();
}

// =============================================================================
// 3. Throttle
// =============================================================================

fn benchmark_throttle(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("throttle");

    group.bench_function("dropped_call", |bencher| {
        let scheduler = ManualScheduler::new();
        let wrapper = throttle(&scheduler, square, Duration::from_secs(60));
        wrapper.call(1);
        bencher.iter(|| black_box(wrapper.call(black_box(2))));
    });

    group.bench_function("window_cycle", |bencher| {
        let scheduler = ManualScheduler::new();
        let wrapper = throttle(&scheduler, square, Duration::from_millis(1));
        bencher.iter(|| {
            scheduler.advance(Duration::from_millis(1));
            black_box(wrapper.call(black_box(3)))
        });
    });

    group.finish();
}

criterion_group!(benches, benchmark_once, benchmark_memoize, benchmark_throttle);
criterion_main!(benches);

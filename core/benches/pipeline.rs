//! Benchmarks for array growth and iterator pipelines
//!
//! Run with: `cargo bench --bench pipeline`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use keel_core::{Array, Iter};

fn bench_growth(c: &mut Criterion) {
    let mut group = c.benchmark_group("growth");

    for size in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("append", size), &size, |b, &size| {
            b.iter(|| {
                let mut array = Array::new();
                for i in 0..size {
                    let _ = array.append(black_box(i as u64));
                }
                black_box(array);
            });
        });

        // A single write past the end fills the gap in one step.
        group.bench_with_input(BenchmarkId::new("write_past_end", size), &size, |b, &size| {
            b.iter(|| {
                let mut array = Array::<u64>::new();
                if let Ok(slot) = array.at_mut(black_box(size as isize - 1)) {
                    *slot = 1;
                }
                black_box(array);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec::push", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::new();
                for i in 0..size {
                    vec.push(black_box(i as u64));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");

    for size in [100_i64, 10_000] {
        group.bench_with_input(BenchmarkId::new("range_filter_map", size), &size, |b, &size| {
            b.iter(|| {
                let array: Array<i64> = Iter::range(black_box(size))
                    .into_iterate(|i| (i % 3 == 0).then_some(i * 2))
                    .into();
                black_box(array);
            });
        });

        group.bench_with_input(BenchmarkId::new("std_filter_map", size), &size, |b, &size| {
            b.iter(|| {
                let vec: Vec<i64> = (0..black_box(size))
                    .filter_map(|i| (i % 3 == 0).then_some(i * 2))
                    .collect();
                black_box(vec);
            });
        });

        let source: Array<i64> = Iter::range(size).into();
        group.bench_with_input(BenchmarkId::new("values_join", size), &source, |b, source| {
            b.iter(|| black_box(source.values().join(',')));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_growth, bench_pipeline);
criterion_main!(benches);

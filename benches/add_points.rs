use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use pointset::test_utils::{balanced_order, rand_points};
use pointset::{KdPointSet, OrderedPointSet, Point, PointSet};

fn add_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("Add Points");

    for size in [100, 1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        bench_add_points::<KdPointSet>(&mut group, size, "kd", |points| points);
        bench_add_points::<KdPointSet>(&mut group, size, "kd (balanced order)", |points| {
            balanced_order(&points)
        });
        bench_add_points::<OrderedPointSet>(&mut group, size, "ordered", |points| points);
    }

    group.finish();
}

fn bench_add_points<S: PointSet>(
    group: &mut criterion::BenchmarkGroup<criterion::measurement::WallTime>,
    size: usize,
    subtype: &str,
    arrange: fn(Vec<Point>) -> Vec<Point>,
) {
    group.bench_with_input(BenchmarkId::new(subtype, size), &size, |b, &size| {
        b.iter_batched(
            || arrange(rand_points(size)),
            |points| {
                let mut set = S::default();
                for point in points {
                    set.put(point);
                }
                black_box(set)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, add_points);
criterion_main!(benches);

use std::hint::black_box;

use criterion::measurement::WallTime;
use criterion::{
    criterion_group, criterion_main, AxisScale, BatchSize, BenchmarkGroup, BenchmarkId, Criterion,
    PlotConfiguration, Throughput,
};
use pointset::test_utils::{build_populated_set_and_query_points, process_queries};
use pointset::{KdPointSet, OrderedPointSet, Point, PointSet};

const QUERY_POINTS_PER_LOOP: usize = 1000;
const SIZE: usize = 10_000;

pub fn nearest_n(c: &mut Criterion) {
    let mut group = c.benchmark_group("Query Nearest N");
    group.throughput(Throughput::Elements(QUERY_POINTS_PER_LOOP as u64));

    let plot_config = PlotConfiguration::default().summary_scale(AxisScale::Logarithmic);
    group.plot_config(plot_config);

    for qty in [1, 10, 100] {
        bench_query_nearest_n::<KdPointSet>(&mut group, qty, "kd");
        bench_query_nearest_n::<OrderedPointSet>(&mut group, qty, "ordered");
    }

    group.finish();
}

fn bench_query_nearest_n<S: PointSet + FromIterator<Point>>(
    group: &mut BenchmarkGroup<WallTime>,
    qty: usize,
    subtype: &str,
) {
    group.bench_with_input(BenchmarkId::new(subtype, qty), &qty, |b, &qty| {
        b.iter_batched(
            || build_populated_set_and_query_points::<S>(SIZE, QUERY_POINTS_PER_LOOP),
            process_queries(move |set: &S, point| {
                black_box(set.nearest_neighbours(point, qty));
            }),
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, nearest_n);
criterion_main!(benches);

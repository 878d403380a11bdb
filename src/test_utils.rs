//! Random data and brute-force reference queries for tests and benchmarks.

use std::collections::BTreeSet;

use ordered_float::OrderedFloat;
use rand::Rng;

use crate::point::Point;
use crate::rect::Rect;
use crate::spatial::kdtree::next_split_dim;
use crate::traits::PointSet;

/// A point drawn uniformly from the unit square.
pub fn rand_point() -> Point {
    let mut rng = rand::rng();
    Point::new(rng.random(), rng.random())
}

/// `qty` points drawn uniformly from the unit square.
pub fn rand_points(qty: usize) -> Vec<Point> {
    (0..qty).map(|_| rand_point()).collect()
}

/// A rectangle inside the unit square with sides of at most `max_side`.
pub fn rand_rect(max_side: f64) -> Rect {
    let mut rng = rand::rng();
    let corner = rand_point();
    Rect::new(
        corner.x(),
        corner.y(),
        (corner.x() + rng.random_range(0.0..=max_side)).min(1.0),
        (corner.y() + rng.random_range(0.0..=max_side)).min(1.0),
    )
}

/// Builds a set of type `S` holding `qty` random points, returning the
/// points in insertion order alongside it.
pub fn build_populated_set<S: PointSet + FromIterator<Point>>(qty: usize) -> (S, Vec<Point>) {
    let points = rand_points(qty);
    let set = points.iter().copied().collect();
    (set, points)
}

/// A random set of `size` points plus `query_point_qty` random query points.
pub fn build_populated_set_and_query_points<S: PointSet + FromIterator<Point>>(
    size: usize,
    query_point_qty: usize,
) -> (S, Vec<Point>) {
    let (set, _) = build_populated_set(size);
    (set, rand_points(query_point_qty))
}

/// Wraps a per-point query so that it can be run over every query point
/// produced by [`build_populated_set_and_query_points`].
pub fn process_queries<S, F>(query: F) -> impl Fn((S, Vec<Point>))
where
    S: PointSet,
    F: Fn(&S, Point),
{
    move |(set, query_points)| {
        for point in query_points {
            query(&set, point);
        }
    }
}

/// Distance from `query` to the closest of `points`, by linear scan.
pub fn linear_nearest_distance(points: &[Point], query: Point) -> Option<f64> {
    points
        .iter()
        .map(|p| query.distance(*p))
        .min_by(f64::total_cmp)
}

/// Ascending distances from `query` to the `qty` closest of `points`, by
/// sorting all of them.
pub fn linear_nearest_n_distances(points: &[Point], query: Point, qty: usize) -> Vec<f64> {
    let mut distances: Vec<f64> = points.iter().map(|p| query.distance(*p)).collect();
    distances.sort_by(f64::total_cmp);
    distances.truncate(qty);
    distances
}

/// The members of `points` inside `rect`, by linear scan.
pub fn linear_range(points: &[Point], rect: &Rect) -> BTreeSet<Point> {
    points.iter().copied().filter(|p| rect.contains(*p)).collect()
}

/// Reorders `points` so that inserting them one by one into a
/// [`KdPointSet`](crate::KdPointSet) yields a tree of logarithmic depth:
/// each subtree's median on its split axis comes first, followed by the
/// points below it and then those above.
pub fn balanced_order(points: &[Point]) -> Vec<Point> {
    let mut scratch: Vec<Point> = points.to_vec();
    let mut ordered = Vec::with_capacity(points.len());
    balanced_order_recurse(&mut scratch, 0, &mut ordered);
    ordered
}

fn balanced_order_recurse(points: &mut [Point], split_dim: usize, out: &mut Vec<Point>) {
    if points.is_empty() {
        return;
    }

    points.sort_unstable_by_key(|p| OrderedFloat(p.coord(split_dim)));

    // points tied with the median on this axis would be sent right, so the
    // median must be the first of them
    let mut pivot = points.len() / 2;
    while pivot > 0 && points[pivot - 1].coord(split_dim) == points[pivot].coord(split_dim) {
        pivot -= 1;
    }

    out.push(points[pivot]);

    let (lower, upper) = points.split_at_mut(pivot);
    let next_dim = next_split_dim(split_dim);
    balanced_order_recurse(lower, next_dim, out);
    balanced_order_recurse(&mut upper[1..], next_dim, out);
}

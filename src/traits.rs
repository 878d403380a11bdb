//! The contract shared by every point set backend.

use crate::neighbour::Neighbour;
use crate::point::Point;
use crate::rect::Rect;

/// A set of distinct points in the plane supporting membership,
/// nearest-neighbour, k-nearest and range queries.
///
/// [`OrderedPointSet`](crate::OrderedPointSet) and [`KdPointSet`](crate::KdPointSet)
/// both implement this trait and give the same answers to every query; only
/// the order of [`PointSet::iter`] and [`PointSet::range`] differs, and which
/// of several equidistant points a nearest query picks.
///
/// # Examples
///
/// ```rust
/// use pointset::{KdPointSet, OrderedPointSet, Point, PointSet, Rect};
///
/// fn closest_three<S: PointSet + FromIterator<Point>>(points: &[Point]) -> Vec<Point> {
///     let set: S = points.iter().copied().collect();
///     set.nearest_n(Point::new(0.0, 0.0), 3)
/// }
///
/// let points = [
///     Point::new(4.0, 4.0),
///     Point::new(1.0, 0.0),
///     Point::new(0.0, 2.0),
///     Point::new(3.0, 0.0),
/// ];
///
/// assert_eq!(
///     closest_three::<OrderedPointSet>(&points),
///     closest_three::<KdPointSet>(&points),
/// );
/// ```
pub trait PointSet: Default {
    /// Iterator over every stored point.
    type Iter<'a>: Iterator<Item = Point>
    where
        Self: 'a;

    /// Iterator over the stored points inside a rectangle.
    type Range<'a>: Iterator<Item = Point>
    where
        Self: 'a;

    /// Number of distinct points stored.
    fn size(&self) -> usize;

    /// Whether the set holds no points.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Adds `point` unless an equal point is already present.
    ///
    /// Returns `true` if the set grew.
    fn put(&mut self, point: Point) -> bool;

    /// Whether a point equal to `point` has been added.
    fn contains(&self, point: Point) -> bool;

    /// Visits every stored point exactly once. Each call starts a fresh,
    /// independent traversal.
    fn iter(&self) -> Self::Iter<'_>;

    /// Lazily yields every stored point that `rect` contains, boundary included.
    fn range(&self, rect: &Rect) -> Self::Range<'_>;

    /// The stored point closest to `query`, together with its distance.
    /// `None` only when the set is empty.
    fn nearest_neighbour(&self, query: Point) -> Option<Neighbour>;

    /// The `qty` stored points closest to `query`, ascending by distance.
    ///
    /// Returns `min(qty, size())` entries.
    fn nearest_neighbours(&self, query: Point, qty: usize) -> Vec<Neighbour>;

    /// The stored point closest to `query`. `None` only when the set is empty.
    fn nearest(&self, query: Point) -> Option<Point> {
        self.nearest_neighbour(query).map(|n| n.point)
    }

    /// The `qty` stored points closest to `query`, ascending by distance.
    fn nearest_n(&self, query: Point, qty: usize) -> Vec<Point> {
        self.nearest_neighbours(query, qty)
            .into_iter()
            .map(|n| n.point)
            .collect()
    }
}

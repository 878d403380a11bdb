//! Closed axis-aligned rectangle used for range queries and as the pruning
//! bound of k-d subtrees.

use crate::point::Point;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed axis-aligned rectangle: the boundary is part of the rectangle.
///
/// Always satisfies `xmin <= xmax` and `ymin <= ymax`; the constructors swap
/// bounds given in the wrong order rather than rejecting them.
///
/// # Examples
///
/// ```rust
/// use pointset::{Point, Rect};
///
/// let r = Rect::from_corners(Point::new(2.0, 2.0), Point::new(1.0, 1.0));
///
/// assert_eq!(r.xmin(), 1.0);
/// assert!(r.contains(Point::new(1.5, 1.5)));
/// assert_eq!(r.distance(Point::new(0.0, 1.0)), 1.0);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(from = "(Point, Point)", into = "(Point, Point)")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    min: Point,
    max: Point,
}

impl Rect {
    /// Creates a rectangle from its bounds, normalizing each axis.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        Self {
            min: Point::new(xmin.min(xmax), ymin.min(ymax)),
            max: Point::new(xmin.max(xmax), ymin.max(ymax)),
        }
    }

    /// Creates the rectangle spanned by two opposite corners, given in any order.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self::new(a.x(), a.y(), b.x(), b.y())
    }

    /// The whole plane. Root bound of a k-d tree.
    pub(crate) const fn everything() -> Self {
        Self {
            min: Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
            max: Point::new(f64::INFINITY, f64::INFINITY),
        }
    }

    /// Lower `x` bound.
    #[inline]
    pub fn xmin(&self) -> f64 {
        self.min.x()
    }

    /// Lower `y` bound.
    #[inline]
    pub fn ymin(&self) -> f64 {
        self.min.y()
    }

    /// Upper `x` bound.
    #[inline]
    pub fn xmax(&self) -> f64 {
        self.max.x()
    }

    /// Upper `y` bound.
    #[inline]
    pub fn ymax(&self) -> f64 {
        self.max.y()
    }

    /// Lower-left corner.
    #[inline]
    pub fn min_corner(&self) -> Point {
        self.min
    }

    /// Upper-right corner.
    #[inline]
    pub fn max_corner(&self) -> Point {
        self.max
    }

    /// Whether `point` lies inside or on the boundary.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        self.xmin() <= point.x()
            && point.x() <= self.xmax()
            && self.ymin() <= point.y()
            && point.y() <= self.ymax()
    }

    /// Whether the two closed rectangles overlap. Shared edges and corners count.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.xmin() <= other.xmax()
            && other.xmin() <= self.xmax()
            && self.ymin() <= other.ymax()
            && other.ymin() <= self.ymax()
    }

    /// Euclidean distance from `point` to the closest point of the rectangle;
    /// zero when the rectangle contains it.
    ///
    /// A lower bound on the distance from `point` to anything stored inside.
    #[inline]
    pub fn distance(&self, point: Point) -> f64 {
        point.distance(self.clamp(point))
    }

    /// Squared form of [`Rect::distance`].
    #[inline]
    pub fn squared_distance(&self, point: Point) -> f64 {
        point.squared_distance(self.clamp(point))
    }

    /// Closest point of the rectangle to `point`.
    ///
    /// Written with `max`/`min` rather than `f64::clamp`, which panics on
    /// NaN bounds.
    #[inline]
    fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x().max(self.xmin()).min(self.xmax()),
            point.y().max(self.ymin()).min(self.ymax()),
        )
    }

    /// Splits the rectangle at `value` along `axis` into the lower and upper
    /// halves. Both halves keep the split line.
    #[inline]
    pub(crate) fn split(&self, axis: usize, value: f64) -> (Rect, Rect) {
        let mut lower = *self;
        let mut upper = *self;
        if axis == 0 {
            lower.max = Point::new(value, self.ymax());
            upper.min = Point::new(value, self.ymin());
        } else {
            lower.max = Point::new(self.xmax(), value);
            upper.min = Point::new(self.xmin(), value);
        }
        (lower, upper)
    }
}

impl From<(Point, Point)> for Rect {
    fn from((a, b): (Point, Point)) -> Self {
        Self::from_corners(a, b)
    }
}

impl From<Rect> for (Point, Point) {
    fn from(rect: Rect) -> Self {
        (rect.min, rect.max)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.min, self.max)
    }
}

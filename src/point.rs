//! A point in the plane, stored as two [`f64`] co-ordinates.

use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Immutable two-dimensional point.
///
/// Equality is exact co-ordinate equality. Points are totally ordered
/// lexicographically (by `x`, then by `y`) so that they can be used as keys
/// in an ordered tree.
///
/// # Examples
///
/// ```rust
/// use pointset::Point;
///
/// let a = Point::new(0.0, 4.0);
/// let b = Point::new(3.0, 0.0);
///
/// assert_eq!(a.distance(b), 5.0);
/// assert!(a < b);
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, Default)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point from its two co-ordinates.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The `x` co-ordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// The `y` co-ordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Co-ordinate along `axis`: `0` is `x`, anything else is `y`.
    #[inline]
    pub(crate) fn coord(&self, axis: usize) -> f64 {
        if axis == 0 {
            self.x
        } else {
            self.y
        }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        self.squared_distance(other).sqrt()
    }

    /// Squared Euclidean distance to `other`. Preserves the ordering of
    /// [`Point::distance`] without the square root.
    #[inline]
    pub fn squared_distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Point {}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.x)
            .cmp(&OrderedFloat(other.x))
            .then_with(|| OrderedFloat(self.y).cmp(&OrderedFloat(other.y)))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        OrderedFloat(self.x).hash(state);
        OrderedFloat(self.y).hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

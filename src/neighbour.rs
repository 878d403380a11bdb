//! A result item returned by a nearest-neighbour query
use crate::point::Point;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Represents an entry in the results of a nearest neighbour query, with `distance` being the
/// Euclidean distance of this particular point from the query point, and `point` being the stored
/// point that was found as part of the query.
///
/// Entries order by distance first and then by the lexicographic order of `point`, so a set of
/// candidates always has a single well-defined farthest entry.
#[derive(Debug, Copy, Clone)]
pub struct Neighbour {
    /// the distance of the found point from the query point
    pub distance: f64,
    /// the stored point that was found in the query
    pub point: Point,
}

impl Neighbour {
    pub(crate) fn new(query: Point, point: Point) -> Self {
        Self {
            distance: query.distance(point),
            point,
        }
    }
}

impl Ord for Neighbour {
    fn cmp(&self, other: &Self) -> Ordering {
        OrderedFloat(self.distance)
            .cmp(&OrderedFloat(other.distance))
            .then_with(|| self.point.cmp(&other.point))
    }
}

impl PartialOrd for Neighbour {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for Neighbour {}

impl PartialEq for Neighbour {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl From<Neighbour> for (f64, Point) {
    fn from(elem: Neighbour) -> Self {
        (elem.distance, elem.point)
    }
}

use crate::neighbour::Neighbour;
use crate::point::Point;
use crate::result_collection::{BestN, ResultCollection};
use crate::spatial::kdtree::KdPointSet;

impl KdPointSet {
    /// Finds the `qty` stored points closest to `query`, ascending by distance.
    ///
    /// Same walk as [`KdPointSet::nearest_neighbour`], pruning against the
    /// farthest of the best `qty` candidates once that many have been found.
    /// Returns `min(qty, size())` entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset::{KdPointSet, Point};
    ///
    /// let set: KdPointSet = [(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]
    ///     .into_iter()
    ///     .map(Point::from)
    ///     .collect();
    ///
    /// let nearest: Vec<Point> = set
    ///     .nearest_neighbours(Point::new(0.0, 0.0), 2)
    ///     .into_iter()
    ///     .map(|n| n.point)
    ///     .collect();
    ///
    /// assert_eq!(nearest, vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]);
    /// ```
    pub fn nearest_neighbours(&self, query: Point, qty: usize) -> Vec<Neighbour> {
        if qty == 0 {
            return Vec::new();
        }

        let mut best = BestN::new(qty.min(self.size()));
        self.nearest_search(query, &mut best);
        best.into_sorted_vec()
    }
}

use crate::neighbour::Neighbour;
use crate::ordered::tree::OrderedPointSet;
use crate::point::Point;
use crate::result_collection::{BestN, ResultCollection};

impl OrderedPointSet {
    /// Finds the `qty` stored points closest to `query`, ascending by distance.
    ///
    /// Every point is offered to a bounded max-heap of capacity `qty`; ties in
    /// distance are settled by the lexicographic point order. Returns
    /// `min(qty, size())` entries.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset::{OrderedPointSet, Point};
    ///
    /// let set: OrderedPointSet = [(3.0, 0.0), (1.0, 0.0), (0.0, 2.0)]
    ///     .into_iter()
    ///     .map(Point::from)
    ///     .collect();
    ///
    /// let nearest: Vec<f64> = set
    ///     .nearest_neighbours(Point::new(0.0, 0.0), 2)
    ///     .iter()
    ///     .map(|n| n.distance)
    ///     .collect();
    ///
    /// assert_eq!(nearest, vec![1.0, 2.0]);
    /// ```
    pub fn nearest_neighbours(&self, query: Point, qty: usize) -> Vec<Neighbour> {
        if qty == 0 {
            return Vec::new();
        }

        let mut best = BestN::new(qty.min(self.size()));
        self.iter()
            .for_each(|point| best.add(Neighbour::new(query, point)));
        best.into_sorted_vec()
    }
}

#[cfg(test)]
mod tests {
    use crate::ordered::tree::OrderedPointSet;
    use crate::point::Point;
    use rand::Rng;

    fn square() -> OrderedPointSet {
        [(0., 0.), (1., 0.), (0., 1.), (1., 1.), (5., 5.)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn can_query_nearest_n_points() {
        let found = square().nearest_neighbours(Point::new(0.1, 0.2), 3);

        let points: Vec<Point> = found.iter().map(|n| n.point).collect();
        assert_eq!(points, vec![Point::new(0., 0.), Point::new(0., 1.), Point::new(1., 0.)]);
        assert!(found.windows(2).all(|w| w[0].distance <= w[1].distance));
    }

    #[test]
    fn zero_and_oversized_requests() {
        let set = square();
        let query = Point::new(0.4, 0.4);

        assert!(set.nearest_neighbours(query, 0).is_empty());
        assert_eq!(set.nearest_neighbours(query, 5).len(), 5);
        assert_eq!(set.nearest_neighbours(query, 210).len(), 5);
        assert!(OrderedPointSet::new().nearest_neighbours(query, 3).is_empty());
    }

    #[test]
    fn ties_at_the_cut_prefer_smaller_points() {
        let found = square().nearest_neighbours(Point::new(0.5, 0.5), 2);

        let points: Vec<Point> = found.iter().map(|n| n.point).collect();
        assert_eq!(points, vec![Point::new(0., 0.), Point::new(0., 1.)]);
    }

    #[test]
    fn nearest_n_matches_sorted_linear_search() {
        let mut rng = rand::rng();
        let points: Vec<Point> = (0..400)
            .map(|_| Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
            .collect();
        let set: OrderedPointSet = points.iter().copied().collect();

        for qty in [1, 2, 7, 50, 399, 400, 401] {
            let query = Point::new(rng.random_range(0.0..1.0), rng.random_range(0.0..1.0));

            let mut expected: Vec<f64> = points.iter().map(|p| query.distance(*p)).collect();
            expected.sort_by(f64::total_cmp);
            expected.truncate(qty);

            let found: Vec<f64> = set
                .nearest_neighbours(query, qty)
                .iter()
                .map(|n| n.distance)
                .collect();

            assert_eq!(found, expected);
        }
    }
}

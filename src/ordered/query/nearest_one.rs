use crate::neighbour::Neighbour;
use crate::ordered::tree::OrderedPointSet;
use crate::point::Point;
use crate::result_collection::ResultCollection;

impl OrderedPointSet {
    /// Finds the stored point closest to `query`, scanning every point.
    ///
    /// The points are visited in ascending order and only a strictly closer
    /// point replaces the current best, so among equidistant points the
    /// lexicographically smallest one is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset::{OrderedPointSet, Point};
    ///
    /// let mut set = OrderedPointSet::new();
    /// set.put(Point::new(1.0, 0.0));
    /// set.put(Point::new(-1.0, 0.0));
    ///
    /// let nearest = set.nearest_neighbour(Point::new(0.0, 0.0)).unwrap();
    ///
    /// assert_eq!(nearest.point, Point::new(-1.0, 0.0));
    /// assert_eq!(nearest.distance, 1.0);
    /// ```
    pub fn nearest_neighbour(&self, query: Point) -> Option<Neighbour> {
        let mut best: Option<Neighbour> = None;
        self.iter()
            .for_each(|point| best.add(Neighbour::new(query, point)));
        best
    }
}

#[cfg(test)]
mod tests {
    use crate::ordered::tree::OrderedPointSet;
    use crate::point::Point;
    use rand::Rng;

    #[test]
    fn can_query_nearest_one_point() {
        let set: OrderedPointSet = [(0., 0.), (1., 1.), (0.5, 0.5)]
            .into_iter()
            .map(Point::from)
            .collect();

        let nearest = set.nearest_neighbour(Point::new(0.4, 0.4)).unwrap();

        assert_eq!(nearest.point, Point::new(0.5, 0.5));
        assert!((nearest.distance - 0.02f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn empty_set_has_no_nearest() {
        let set = OrderedPointSet::new();

        assert!(set.nearest_neighbour(Point::new(0., 0.)).is_none());
    }

    #[test]
    fn ties_go_to_the_smallest_point() {
        let set: OrderedPointSet = [(0., 1.), (1., 0.), (0., -1.), (-1., 0.)]
            .into_iter()
            .map(Point::from)
            .collect();

        let nearest = set.nearest_neighbour(Point::new(0., 0.)).unwrap();

        assert_eq!(nearest.point, Point::new(-1., 0.));
    }

    #[test]
    fn nearest_matches_linear_search() {
        let mut rng = rand::rng();
        let points: Vec<Point> = (0..500)
            .map(|_| Point::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)))
            .collect();
        let set: OrderedPointSet = points.iter().copied().collect();

        for _ in 0..100 {
            let query = Point::new(rng.random_range(-12.0..12.0), rng.random_range(-12.0..12.0));
            let expected = points
                .iter()
                .map(|p| query.distance(*p))
                .fold(f64::INFINITY, f64::min);

            let nearest = set.nearest_neighbour(query).unwrap();

            assert_eq!(nearest.distance, expected);
            assert_eq!(query.distance(nearest.point), expected);
        }
    }
}

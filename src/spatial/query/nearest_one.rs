use crate::neighbour::Neighbour;
use crate::point::Point;
use crate::rect::Rect;
use crate::result_collection::ResultCollection;
use crate::spatial::kdtree::{next_split_dim, KdPointSet, ROOT};

impl KdPointSet {
    /// Finds the stored point closest to `query`.
    ///
    /// Searches the child on the query's side of each split first, and only
    /// enters the other child if its region is strictly closer than the best
    /// point found so far. Among equidistant points the first one reached by
    /// this walk wins.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset::{KdPointSet, Point};
    ///
    /// let mut set = KdPointSet::new();
    /// set.put(Point::new(1.0, 2.0));
    /// set.put(Point::new(2.0, 3.0));
    ///
    /// let nearest = set.nearest_neighbour(Point::new(1.0, 2.1)).unwrap();
    ///
    /// assert_eq!(nearest.point, Point::new(1.0, 2.0));
    /// assert!((nearest.distance - 0.1).abs() < 1e-12);
    /// ```
    pub fn nearest_neighbour(&self, query: Point) -> Option<Neighbour> {
        let mut best: Option<Neighbour> = None;
        self.nearest_search(query, &mut best);
        best
    }

    /// Branch-and-bound walk shared by the nearest queries.
    ///
    /// Uses an explicit stack: the tree is unbalanced and can be as deep as
    /// it is large. Each entry carries the region its subtree covers, and is
    /// dropped on pop unless that region could still beat `results`.
    pub(crate) fn nearest_search<R: ResultCollection>(&self, query: Point, results: &mut R) {
        if self.is_empty() {
            return;
        }

        let mut stack = vec![(ROOT, 0, Rect::everything())];

        while let Some((idx, split_dim, bound)) = stack.pop() {
            if bound.distance(query) >= results.max_dist() {
                continue;
            }

            let node = &self.nodes[idx];
            results.add(Neighbour::new(query, node.point));

            let [near, far] = node.near_far(query, split_dim, &bound);
            let next_dim = next_split_dim(split_dim);

            // far goes underneath so the near subtree is exhausted first
            if let (Some(far_idx), far_bound) = far {
                stack.push((far_idx, next_dim, far_bound));
            }
            if let (Some(near_idx), near_bound) = near {
                stack.push((near_idx, next_dim, near_bound));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::point::Point;
    use crate::spatial::kdtree::KdPointSet;
    use rand::Rng;

    #[test]
    fn can_query_nearest_one_point() {
        let set: KdPointSet = [(0., 0.), (1., 1.), (0.5, 0.5)]
            .into_iter()
            .map(Point::from)
            .collect();

        let nearest = set.nearest_neighbour(Point::new(0.4, 0.4)).unwrap();

        assert_eq!(nearest.point, Point::new(0.5, 0.5));
    }

    #[test]
    fn empty_set_has_no_nearest() {
        assert!(KdPointSet::new().nearest_neighbour(Point::new(0., 0.)).is_none());
    }

    #[test]
    fn finds_a_point_across_a_split() {
        // the query sits left of the root split, but the closest point is right of it
        let set: KdPointSet = [(0.5, 0.5), (0.1, 0.9), (0.51, 0.2), (0.9, 0.9)]
            .into_iter()
            .map(Point::from)
            .collect();

        let nearest = set.nearest_neighbour(Point::new(0.49, 0.2)).unwrap();

        assert_eq!(nearest.point, Point::new(0.51, 0.2));
    }

    #[test]
    fn ties_go_to_the_first_point_reached() {
        let set: KdPointSet = [(0., 1.), (1., 0.), (0., -1.), (-1., 0.)]
            .into_iter()
            .map(Point::from)
            .collect();

        let nearest = set.nearest_neighbour(Point::new(0., 0.)).unwrap();

        // the root is visited first and nothing strictly closer exists
        assert_eq!(nearest.point, Point::new(0., 1.));
        assert_eq!(nearest.distance, 1.);
    }

    #[test]
    fn nearest_matches_linear_search() {
        let mut rng = rand::rng();
        let points: Vec<Point> = (0..1000)
            .map(|_| Point::new(rng.random_range(-10.0..10.0), rng.random_range(-10.0..10.0)))
            .collect();
        let set: KdPointSet = points.iter().copied().collect();

        for _ in 0..200 {
            let query = Point::new(rng.random_range(-12.0..12.0), rng.random_range(-12.0..12.0));
            let expected = points
                .iter()
                .map(|p| query.distance(*p))
                .fold(f64::INFINITY, f64::min);

            let nearest = set.nearest_neighbour(query).unwrap();

            assert_eq!(nearest.distance, expected);
        }
    }

    #[test]
    fn deep_unbalanced_tree_does_not_overflow() {
        let set: KdPointSet = (0..10_000)
            .map(|i| Point::new(f64::from(i), f64::from(i)))
            .collect();

        assert_eq!(set.depth(), 9_999);

        let nearest = set.nearest_neighbour(Point::new(9_998.6, 9_998.6)).unwrap();
        assert_eq!(nearest.point, Point::new(9_999., 9_999.));
    }

    fn three_node_tree() -> KdPointSet {
        [(0.5, 0.5), (0.2, 0.5), (0.8, 0.5)]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn far_child_is_skipped_unless_strictly_closer() {
        let mut set = three_node_tree();
        // plant a point in the right subtree that lies outside its region;
        // it is only found if the right subtree is searched
        set.nodes[2].point = Point::new(0.1, 0.52);

        let nearest = set.nearest_neighbour(Point::new(0.1, 0.5)).unwrap();
        assert_eq!(nearest.point, Point::new(0.2, 0.5));

        // the right region is exactly as far as the root, which is not enough
        set.nodes[2].point = Point::new(0.4, 0.45);

        let nearest = set.nearest_neighbour(Point::new(0.4, 0.5)).unwrap();
        assert_eq!(nearest.point, Point::new(0.5, 0.5));
    }

    #[test]
    fn far_child_is_searched_when_it_could_be_closer() {
        let mut set = three_node_tree();
        set.nodes[2].point = Point::new(0.45, 0.9);

        let nearest = set.nearest_neighbour(Point::new(0.44, 0.9)).unwrap();

        assert_eq!(nearest.point, Point::new(0.45, 0.9));
    }
}

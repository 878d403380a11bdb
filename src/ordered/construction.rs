use std::cmp::Ordering;

use crate::ordered::tree::{Node, OrderedPointSet};
use crate::point::Point;

#[cfg(feature = "tracing")]
use tracing::{event, Level};

impl OrderedPointSet {
    /// Adds `point` to the set, rebalancing on the way back up.
    ///
    /// Returns `false`, leaving the set untouched, if an equal point is
    /// already stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset::{OrderedPointSet, Point};
    ///
    /// let mut set = OrderedPointSet::new();
    ///
    /// assert!(set.put(Point::new(1.0, 2.0)));
    /// assert!(!set.put(Point::new(1.0, 2.0)));
    ///
    /// assert_eq!(set.size(), 1);
    /// ```
    pub fn put(&mut self, point: Point) -> bool {
        let (root, added) = self.insert_at(self.root, point);
        self.root = Some(root);
        added
    }

    /// Inserts below `curr`, returning the index of whatever node now roots
    /// that subtree.
    fn insert_at(&mut self, curr: Option<usize>, point: Point) -> (usize, bool) {
        let Some(idx) = curr else {
            self.nodes.push(Node::leaf(point));
            return (self.nodes.len() - 1, true);
        };

        let added = match point.cmp(&self.nodes[idx].point) {
            Ordering::Less => {
                let (left, added) = self.insert_at(self.nodes[idx].left, point);
                self.nodes[idx].left = Some(left);
                added
            }
            Ordering::Greater => {
                let (right, added) = self.insert_at(self.nodes[idx].right, point);
                self.nodes[idx].right = Some(right);
                added
            }
            Ordering::Equal => false,
        };

        if !added {
            return (idx, false);
        }

        let idx = self.skew(idx);
        (self.split(idx), true)
    }

    /// Rotates right when the left child sits on the same level.
    fn skew(&mut self, idx: usize) -> usize {
        match self.nodes[idx].left {
            Some(left) if self.nodes[left].level == self.nodes[idx].level => {
                #[cfg(feature = "tracing")]
                event!(Level::TRACE, node = idx, pivot = left, "skew");

                self.nodes[idx].left = self.nodes[left].right;
                self.nodes[left].right = Some(idx);
                left
            }
            _ => idx,
        }
    }

    /// Rotates left and promotes when two consecutive right links share a level.
    fn split(&mut self, idx: usize) -> usize {
        let Some(right) = self.nodes[idx].right else {
            return idx;
        };

        match self.nodes[right].right {
            Some(right_right) if self.nodes[right_right].level == self.nodes[idx].level => {
                #[cfg(feature = "tracing")]
                event!(Level::TRACE, node = idx, pivot = right, "split");

                self.nodes[idx].right = self.nodes[right].left;
                self.nodes[right].left = Some(idx);
                self.nodes[right].level += 1;
                right
            }
            _ => idx,
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::ordered::tree::OrderedPointSet;
    use crate::point::Point;
    use rand::Rng;

    /// Checks the AA tree shape rules below `idx` and returns its level.
    fn assert_aa_invariants(set: &OrderedPointSet, idx: usize) -> u32 {
        let node = &set.nodes[idx];

        if let Some(left) = node.left {
            assert!(set.nodes[left].point < node.point);
            assert_eq!(assert_aa_invariants(set, left), node.level - 1);
        } else {
            assert_eq!(node.level, 1);
        }

        if let Some(right) = node.right {
            assert!(set.nodes[right].point > node.point);
            let right_level = assert_aa_invariants(set, right);
            assert!(right_level == node.level || right_level + 1 == node.level);

            if let Some(right_right) = set.nodes[right].right {
                assert!(set.nodes[right_right].level < node.level);
            }
        } else {
            assert_eq!(node.level, 1);
        }

        node.level
    }

    fn max_balanced_height(size: usize) -> usize {
        2 * ((size + 1) as f64).log2().ceil() as usize + 1
    }

    #[test]
    fn can_add_a_point() {
        let mut set = OrderedPointSet::new();

        assert!(set.put(Point::new(0.1, 0.2)));

        assert_eq!(set.size(), 1);
        assert!(set.contains(Point::new(0.1, 0.2)));
    }

    #[test]
    fn adding_a_duplicate_is_a_no_op() {
        let mut set = OrderedPointSet::new();
        set.put(Point::new(0., 0.));
        set.put(Point::new(1., 1.));

        assert!(!set.put(Point::new(1., 1.)));
        assert!(!set.put(Point::new(0., 0.)));

        assert_eq!(set.size(), 2);
        assert_eq!(set.iter().count(), 2);
    }

    #[test]
    fn stays_balanced_under_sorted_insertion() {
        let mut set = OrderedPointSet::new();
        for i in 0..1024 {
            set.put(Point::new(f64::from(i), 0.));
        }

        assert_eq!(set.size(), 1024);
        assert!(set.height() <= max_balanced_height(1024));
        assert_aa_invariants(&set, set.root.unwrap());
    }

    #[test]
    fn stays_balanced_under_reverse_sorted_insertion() {
        let mut set = OrderedPointSet::new();
        for i in (0..1000).rev() {
            set.put(Point::new(0.5, f64::from(i)));
        }

        assert!(set.height() <= max_balanced_height(1000));
        assert_aa_invariants(&set, set.root.unwrap());
    }

    #[test]
    fn random_insertion_keeps_every_point_reachable() {
        let mut rng = rand::rng();
        let points: Vec<Point> = (0..2000)
            .map(|_| Point::new(rng.random_range(0..100) as f64, rng.random_range(0..100) as f64))
            .collect();

        let mut set = OrderedPointSet::new();
        let mut expected = std::collections::BTreeSet::new();
        for &point in &points {
            assert_eq!(set.put(point), expected.insert(point));
        }

        assert_eq!(set.size(), expected.len());
        assert!(points.iter().all(|&p| set.contains(p)));
        assert!(set.iter().eq(expected.iter().copied()));
        assert_aa_invariants(&set, set.root.unwrap());
    }
}

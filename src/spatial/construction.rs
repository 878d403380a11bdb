use crate::point::Point;
use crate::spatial::kdtree::{next_split_dim, KdNode, KdPointSet, ROOT};

#[cfg(feature = "tracing")]
use tracing::{event, Level};

impl KdPointSet {
    /// Adds `point` as a new leaf at the end of its search path.
    ///
    /// Returns `false`, leaving the set untouched, if an equal point is
    /// already stored. Existing nodes never move: no rebalancing happens.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset::{KdPointSet, Point};
    ///
    /// let mut set = KdPointSet::new();
    ///
    /// assert!(set.put(Point::new(1.0, 2.0)));
    /// assert!(set.put(Point::new(1.0, 3.0)));
    /// assert!(!set.put(Point::new(1.0, 2.0)));
    ///
    /// assert_eq!(set.size(), 2);
    /// ```
    pub fn put(&mut self, point: Point) -> bool {
        if self.nodes.is_empty() {
            self.nodes.push(KdNode::leaf(point));
            return true;
        }

        let mut idx = ROOT;
        let mut split_dim = 0;
        let mut depth = 0;

        loop {
            let node = &self.nodes[idx];
            if node.point == point {
                return false;
            }

            let is_left_child = point.coord(split_dim) < node.point.coord(split_dim);
            let child = if is_left_child { node.left } else { node.right };
            depth += 1;

            match child {
                Some(child_idx) => {
                    idx = child_idx;
                    split_dim = next_split_dim(split_dim);
                }
                None => {
                    let new_idx = self.nodes.len();
                    self.nodes.push(KdNode::leaf(point));

                    let parent = &mut self.nodes[idx];
                    if is_left_child {
                        parent.left = Some(new_idx);
                    } else {
                        parent.right = Some(new_idx);
                    }

                    #[cfg(feature = "tracing")]
                    event!(Level::TRACE, depth, parent = idx, is_left_child, "point added");

                    if depth > self.max_depth {
                        self.max_depth = depth;

                        #[cfg(feature = "tracing")]
                        event!(Level::DEBUG, depth, size = self.nodes.len(), "tree deepened");
                    }

                    return true;
                }
            }
        }
    }
}

use crate::ordered::tree::{Node, OrderedPointSet};
use crate::point::Point;
use crate::rect::Rect;

impl OrderedPointSet {
    /// Lazily yields every point inside `rect` (boundary included), in
    /// ascending lexicographic order.
    ///
    /// Subtrees entirely left or right of the rectangle's `x` interval are
    /// skipped; the `y` bounds are checked point by point.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset::{OrderedPointSet, Point, Rect};
    ///
    /// let set: OrderedPointSet = [(0.0, 0.0), (1.0, 1.0), (0.5, 0.5)]
    ///     .into_iter()
    ///     .map(Point::from)
    ///     .collect();
    ///
    /// let found: Vec<_> = set.range(&Rect::new(0.3, 0.3, 0.7, 0.7)).collect();
    ///
    /// assert_eq!(found, vec![Point::new(0.5, 0.5)]);
    /// ```
    pub fn range(&self, rect: &Rect) -> Range<'_> {
        Range::new(self, *rect)
    }
}

/// Iterator returned by [`OrderedPointSet::range`].
#[derive(Debug)]
pub struct Range<'a> {
    set: &'a OrderedPointSet,
    rect: Rect,
    stack: Vec<usize>,
}

impl<'a> Range<'a> {
    fn new(set: &'a OrderedPointSet, rect: Rect) -> Self {
        let mut range = Self {
            set,
            rect,
            stack: Vec::new(),
        };
        range.push_left_spine(set.root);
        range
    }

    /// Walks down-left from `curr`. A node left of `xmin` is skipped along
    /// with its left subtree, whose points are no greater in `x`.
    fn push_left_spine(&mut self, mut curr: Option<usize>) {
        while let Some(idx) = curr {
            let node = &self.set.nodes[idx];
            if node.point.x() < self.rect.xmin() {
                curr = node.right;
            } else {
                self.stack.push(idx);
                curr = node.left;
            }
        }
    }
}

impl Iterator for Range<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(idx) = self.stack.pop() {
            let Node { point, right, .. } = self.set.nodes[idx];

            // in-order: everything still to come is at least this far right
            if point.x() > self.rect.xmax() {
                self.stack.clear();
                return None;
            }

            self.push_left_spine(right);
            if self.rect.contains(point) {
                return Some(point);
            }
        }
        None
    }
}

use crate::point::Point;
use crate::rect::Rect;
use crate::spatial::kdtree::{next_split_dim, KdPointSet, ROOT};

impl KdPointSet {
    /// Lazily yields every point inside `rect` (boundary included).
    ///
    /// A subtree is entered only if the region it covers intersects `rect`.
    /// Points come out in the same pre-order as [`KdPointSet::iter`], minus
    /// those outside `rect`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset::{KdPointSet, Point, Rect};
    ///
    /// let set: KdPointSet = [(0.655, 0.382), (0.725, 0.311), (0.1, 0.9), (0.9, 0.3)]
    ///     .into_iter()
    ///     .map(Point::from)
    ///     .collect();
    ///
    /// let mut found: Vec<_> = set.range(&Rect::new(0.634, 0.276, 0.818, 0.42)).collect();
    /// found.sort();
    ///
    /// assert_eq!(found, vec![Point::new(0.655, 0.382), Point::new(0.725, 0.311)]);
    /// ```
    pub fn range(&self, rect: &Rect) -> Range<'_> {
        Range::new(self, *rect)
    }
}

/// Iterator returned by [`KdPointSet::range`].
#[derive(Debug)]
pub struct Range<'a> {
    set: &'a KdPointSet,
    rect: Rect,
    /// pending subtrees: node index, split axis, region covered
    stack: Vec<(usize, usize, Rect)>,
}

impl<'a> Range<'a> {
    fn new(set: &'a KdPointSet, rect: Rect) -> Self {
        let mut stack = Vec::new();
        if !set.is_empty() {
            stack.push((ROOT, 0, Rect::everything()));
        }
        Self { set, rect, stack }
    }
}

impl Iterator for Range<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, split_dim, bound)) = self.stack.pop() {
            let node = &self.set.nodes[idx];
            let (lower, upper) = bound.split(split_dim, node.point.coord(split_dim));
            let next_dim = next_split_dim(split_dim);

            if let Some(right) = node.right.filter(|_| upper.intersects(&self.rect)) {
                self.stack.push((right, next_dim, upper));
            }
            if let Some(left) = node.left.filter(|_| lower.intersects(&self.rect)) {
                self.stack.push((left, next_dim, lower));
            }

            if self.rect.contains(node.point) {
                return Some(node.point);
            }
        }
        None
    }
}

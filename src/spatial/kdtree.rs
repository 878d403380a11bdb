//! k-d tree point set, stored as an arena of nodes. Each node holds one
//! point and splits the region it covers in two along its depth's axis.

use std::ops::Rem;

use crate::neighbour::Neighbour;
use crate::point::Point;
use crate::rect::Rect;
use crate::spatial::query::range::Range;
use crate::traits::PointSet;

/// Number of dimensions the tree cycles through.
pub(crate) const K: usize = 2;

/// Arena index of the root node of a non-empty tree.
pub(crate) const ROOT: usize = 0;

#[doc(hidden)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KdNode {
    pub(crate) point: Point,
    /// points whose split-axis value is less than this node's
    pub(crate) left: Option<usize>,
    /// points whose split-axis value is greater than or equal to this node's
    pub(crate) right: Option<usize>,
}

impl KdNode {
    pub(crate) fn leaf(point: Point) -> Self {
        Self {
            point,
            left: None,
            right: None,
        }
    }

    /// The children in the order a search from `query` should visit them,
    /// each paired with the region it covers.
    #[inline]
    pub(crate) fn near_far(
        &self,
        query: Point,
        split_dim: usize,
        bound: &Rect,
    ) -> [(Option<usize>, Rect); 2] {
        let split_val = self.point.coord(split_dim);
        let (lower, upper) = bound.split(split_dim, split_val);

        if query.coord(split_dim) < split_val {
            [(self.left, lower), (self.right, upper)]
        } else {
            [(self.right, upper), (self.left, lower)]
        }
    }
}

/// Next axis to split on below a node that splits on `split_dim`.
#[inline]
pub(crate) fn next_split_dim(split_dim: usize) -> usize {
    (split_dim + 1).rem(K)
}

/// Point set backed by a 2-d tree.
///
/// Queries prune whole subtrees using the region of the plane each subtree
/// covers. Iteration order is a pre-order walk of the tree and depends on
/// insertion order.
///
/// # Examples
///
/// ```rust
/// use pointset::{KdPointSet, Point, PointSet, Rect};
///
/// let mut set = KdPointSet::new();
///
/// set.put(Point::new(0.0, 0.0));
/// set.put(Point::new(1.0, 1.0));
/// set.put(Point::new(0.5, 0.5));
///
/// assert_eq!(set.size(), 3);
/// assert_eq!(set.nearest(Point::new(0.4, 0.4)), Some(Point::new(0.5, 0.5)));
///
/// let inside: Vec<_> = set.range(&Rect::new(0.3, 0.3, 0.7, 0.7)).collect();
/// assert_eq!(inside, vec![Point::new(0.5, 0.5)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct KdPointSet {
    pub(crate) nodes: Vec<KdNode>,
    pub(crate) max_depth: usize,
}

impl KdPointSet {
    /// Creates an empty set.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set with room for `capacity` points before reallocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset::{KdPointSet, Point};
    ///
    /// let mut set = KdPointSet::with_capacity(1_000);
    /// set.put(Point::new(1.0, 2.0));
    ///
    /// assert_eq!(set.size(), 1);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            max_depth: 0,
        }
    }

    /// Returns the number of distinct points stored.
    #[inline]
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no points are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth of the deepest node; the root is at depth 0 and an empty tree
    /// reports 0.
    ///
    /// Shows how well the insertion order spread the points out: a tree
    /// built from sorted input has depth `size() - 1`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset::{KdPointSet, Point};
    ///
    /// let mut set = KdPointSet::new();
    /// for i in 0..5 {
    ///     set.put(Point::new(i as f64, i as f64));
    /// }
    ///
    /// assert_eq!(set.depth(), 4);
    /// ```
    #[inline]
    pub fn depth(&self) -> usize {
        self.max_depth
    }

    /// Whether a point equal to `point` is stored.
    ///
    /// Follows the single branch picked by each node's split axis, checking
    /// full equality at every node passed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset::{KdPointSet, Point};
    ///
    /// let mut set = KdPointSet::new();
    /// set.put(Point::new(0.5, 0.0));
    /// set.put(Point::new(0.5, 1.0));
    ///
    /// assert!(set.contains(Point::new(0.5, 1.0)));
    /// assert!(!set.contains(Point::new(0.5, 0.5)));
    /// ```
    pub fn contains(&self, point: Point) -> bool {
        let mut curr = (!self.nodes.is_empty()).then_some(ROOT);
        let mut split_dim = 0;

        while let Some(idx) = curr {
            let node = &self.nodes[idx];
            if node.point == point {
                return true;
            }

            curr = if point.coord(split_dim) < node.point.coord(split_dim) {
                node.left
            } else {
                node.right
            };
            split_dim = next_split_dim(split_dim);
        }

        false
    }

    /// Iterates over all points in pre-order: each node before its left
    /// subtree, the left subtree before the right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset::{KdPointSet, Point};
    ///
    /// let set: KdPointSet = [(0.5, 0.5), (0.7, 0.1), (0.2, 0.9)]
    ///     .into_iter()
    ///     .map(Point::from)
    ///     .collect();
    ///
    /// let points: Vec<_> = set.iter().collect();
    /// assert_eq!(
    ///     points,
    ///     vec![Point::new(0.5, 0.5), Point::new(0.2, 0.9), Point::new(0.7, 0.1)]
    /// );
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }
}

/// Pre-order iterator over a [`KdPointSet`], returned by [`KdPointSet::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    set: &'a KdPointSet,
    stack: Vec<usize>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(set: &'a KdPointSet) -> Self {
        let mut stack = Vec::new();
        if !set.is_empty() {
            stack.push(ROOT);
        }
        Self { set, stack }
    }
}

impl Iterator for Iter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let KdNode { point, left, right } = self.set.nodes[idx];
        self.stack.extend(right);
        self.stack.extend(left);
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.stack.len(), Some(self.set.size()))
    }
}

impl<'a> IntoIterator for &'a KdPointSet {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Point> for KdPointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        iter.into_iter().for_each(|point| {
            self.put(point);
        });
    }
}

impl FromIterator<Point> for KdPointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl PointSet for KdPointSet {
    type Iter<'a> = Iter<'a>;
    type Range<'a> = Range<'a>;

    fn size(&self) -> usize {
        KdPointSet::size(self)
    }

    fn is_empty(&self) -> bool {
        KdPointSet::is_empty(self)
    }

    fn put(&mut self, point: Point) -> bool {
        KdPointSet::put(self, point)
    }

    fn contains(&self, point: Point) -> bool {
        KdPointSet::contains(self, point)
    }

    fn iter(&self) -> Self::Iter<'_> {
        KdPointSet::iter(self)
    }

    fn range(&self, rect: &Rect) -> Self::Range<'_> {
        KdPointSet::range(self, rect)
    }

    fn nearest_neighbour(&self, query: Point) -> Option<Neighbour> {
        KdPointSet::nearest_neighbour(self, query)
    }

    fn nearest_neighbours(&self, query: Point, qty: usize) -> Vec<Neighbour> {
        KdPointSet::nearest_neighbours(self, query, qty)
    }
}

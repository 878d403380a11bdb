//! Ordered-tree point set, stored as an arena of nodes forming an AA tree
//! (a red-black tree variant where red links may only lean right).

use std::cmp::Ordering;

use crate::neighbour::Neighbour;
use crate::ordered::query::range::Range;
use crate::point::Point;
use crate::rect::Rect;
use crate::traits::PointSet;

#[doc(hidden)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Node {
    pub(crate) point: Point,
    /// AA level: 1 for leaves; a left child is always one level below its
    /// parent, a right child is at the same level or one below.
    pub(crate) level: u32,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

impl Node {
    pub(crate) fn leaf(point: Point) -> Self {
        Self {
            point,
            level: 1,
            left: None,
            right: None,
        }
    }
}

/// Point set backed by a balanced binary search tree ordered by `x`, then `y`.
///
/// Iteration and range results come out in ascending lexicographic order.
///
/// # Examples
///
/// ```rust
/// use pointset::{OrderedPointSet, Point, PointSet, Rect};
///
/// let mut set = OrderedPointSet::new();
///
/// set.put(Point::new(1.0, 1.0));
/// set.put(Point::new(0.0, 0.0));
/// set.put(Point::new(0.5, 0.5));
///
/// assert_eq!(set.size(), 3);
/// assert_eq!(set.nearest(Point::new(0.4, 0.4)), Some(Point::new(0.5, 0.5)));
///
/// let inside: Vec<_> = set.range(&Rect::new(0.0, 0.0, 0.7, 0.7)).collect();
/// assert_eq!(inside, vec![Point::new(0.0, 0.0), Point::new(0.5, 0.5)]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct OrderedPointSet {
    pub(crate) nodes: Vec<Node>,
    pub(crate) root: Option<usize>,
}

impl OrderedPointSet {
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
    /// use pointset::{OrderedPointSet, Point};
    ///
    /// let mut set = OrderedPointSet::with_capacity(1_000);
    /// set.put(Point::new(1.0, 2.0));
    ///
    /// assert_eq!(set.size(), 1);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            root: None,
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

    /// Whether a point equal to `point` is stored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset::{OrderedPointSet, Point};
    ///
    /// let mut set = OrderedPointSet::new();
    /// set.put(Point::new(0.0, 0.0));
    ///
    /// assert!(set.contains(Point::new(0.0, 0.0)));
    /// assert!(!set.contains(Point::new(0.5, 0.0)));
    /// ```
    pub fn contains(&self, point: Point) -> bool {
        let mut curr = self.root;
        while let Some(idx) = curr {
            let node = &self.nodes[idx];
            curr = match point.cmp(&node.point) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// Iterates over all points in ascending lexicographic order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset::{OrderedPointSet, Point};
    ///
    /// let set: OrderedPointSet = [(2.0, 0.0), (1.0, 5.0), (1.0, 3.0)]
    ///     .into_iter()
    ///     .map(Point::from)
    ///     .collect();
    ///
    /// let points: Vec<_> = set.iter().collect();
    /// assert_eq!(
    ///     points,
    ///     vec![Point::new(1.0, 3.0), Point::new(1.0, 5.0), Point::new(2.0, 0.0)]
    /// );
    /// ```
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    /// Number of nodes on the longest root-to-leaf path.
    pub(crate) fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(usize, usize)> = self.root.map(|idx| (idx, 1)).into_iter().collect();
        while let Some((idx, depth)) = stack.pop() {
            height = height.max(depth);
            let node = &self.nodes[idx];
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        height
    }
}

/// In-order iterator over an [`OrderedPointSet`], returned by [`OrderedPointSet::iter`].
#[derive(Debug)]
pub struct Iter<'a> {
    set: &'a OrderedPointSet,
    stack: Vec<usize>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(set: &'a OrderedPointSet) -> Self {
        let mut iter = Self {
            set,
            stack: Vec::new(),
        };
        iter.push_left_spine(set.root);
        iter
    }

    fn push_left_spine(&mut self, mut curr: Option<usize>) {
        while let Some(idx) = curr {
            self.stack.push(idx);
            curr = self.set.nodes[idx].left;
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.stack.pop()?;
        let Node { point, right, .. } = self.set.nodes[idx];
        self.push_left_spine(right);
        Some(point)
    }
}

impl<'a> IntoIterator for &'a OrderedPointSet {
    type Item = Point;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<Point> for OrderedPointSet {
    fn extend<I: IntoIterator<Item = Point>>(&mut self, iter: I) {
        iter.into_iter().for_each(|point| {
            self.put(point);
        });
    }
}

impl FromIterator<Point> for OrderedPointSet {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = Self::with_capacity(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl PointSet for OrderedPointSet {
    type Iter<'a> = Iter<'a>;
    type Range<'a> = Range<'a>;

    fn size(&self) -> usize {
        OrderedPointSet::size(self)
    }

    fn is_empty(&self) -> bool {
        OrderedPointSet::is_empty(self)
    }

    fn put(&mut self, point: Point) -> bool {
        OrderedPointSet::put(self, point)
    }

    fn contains(&self, point: Point) -> bool {
        OrderedPointSet::contains(self, point)
    }

    fn iter(&self) -> Self::Iter<'_> {
        OrderedPointSet::iter(self)
    }

    fn range(&self, rect: &Rect) -> Self::Range<'_> {
        OrderedPointSet::range(self, rect)
    }

    fn nearest_neighbour(&self, query: Point) -> Option<Neighbour> {
        OrderedPointSet::nearest_neighbour(self, query)
    }

    fn nearest_neighbours(&self, query: Point, qty: usize) -> Vec<Neighbour> {
        OrderedPointSet::nearest_neighbours(self, query, qty)
    }
}

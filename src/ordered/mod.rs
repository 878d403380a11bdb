//! Ordered-tree point set: a balanced binary search tree keyed by the
//! lexicographic order of [`Point`](crate::Point).
//!
//! Membership and insertion are `O(log n)`. Range queries prune descent on
//! the `x` interval only and filter on `y`; nearest queries scan every point.

#[doc(hidden)]
pub mod construction;
#[doc(hidden)]
pub mod query;
pub mod tree;

pub use query::range::Range;
pub use tree::{Iter, OrderedPointSet};

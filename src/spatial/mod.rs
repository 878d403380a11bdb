//! Spatial point set: a k-d tree over the plane that splits on `x` at even
//! depths and on `y` at odd depths.
//!
//! The tree is never rebalanced. Its shape is fixed by insertion order, so
//! sorted input produces a deep tree and queries degrade towards linear.

#[doc(hidden)]
pub mod construction;
pub mod kdtree;
#[doc(hidden)]
pub mod query;

pub use kdtree::{Iter, KdPointSet};
pub use query::range::Range;

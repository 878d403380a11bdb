#![warn(rustdoc::missing_crate_level_docs)]
#![deny(rustdoc::invalid_codeblock_attributes)]
#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
#![warn(rustdoc::private_intra_doc_links)]

//! # Pointset
//!
//! Two-dimensional point sets answering membership, nearest-neighbour,
//! k-nearest-neighbour and rectangular range queries.
//!
//! Two interchangeable backends implement the [`PointSet`] trait:
//!
//! * [`OrderedPointSet`]: a balanced binary search tree keyed by the
//!   lexicographic order of points. Insertion and membership are `O(log n)`,
//!   range queries prune on the `x` interval, nearest queries scan.
//! * [`KdPointSet`]: a 2-d tree that alternates between splitting on `x` and
//!   on `y`. Nearest and range queries prune whole subtrees using the region
//!   of the plane each one covers. The tree is not rebalanced, so its
//!   performance depends on insertion order.
//!
//! Both give the same answers to every query. Only the iteration order
//! differs, and which of several equidistant points a nearest query picks.
//!
//! Point files can be read with the [`loader`] module.
//!
//! ## Usage
//! ```rust
//! use pointset::{KdPointSet, Point, PointSet, Rect};
//!
//! let mut set = KdPointSet::new();
//!
//! set.put(Point::new(0.0, 0.0));
//! set.put(Point::new(1.0, 1.0));
//! set.put(Point::new(0.5, 0.5));
//!
//! assert_eq!(set.size(), 3);
//! assert_eq!(set.nearest(Point::new(0.4, 0.4)), Some(Point::new(0.5, 0.5)));
//! assert_eq!(
//!     set.nearest_n(Point::new(0.0, 0.1), 2),
//!     vec![Point::new(0.0, 0.0), Point::new(0.5, 0.5)]
//! );
//!
//! let inside: Vec<_> = set.range(&Rect::new(0.3, 0.3, 0.7, 0.7)).collect();
//! assert_eq!(inside, vec![Point::new(0.5, 0.5)]);
//! ```
//!
//! ## Features
//!
//! * `tracing` (default): emits `tracing` events from tree construction
//!   and the loader.
//! * `serde`: `Serialize` / `Deserialize` for [`Point`] and [`Rect`].
//! * `test_utils`: random data generators and brute-force reference queries.

pub mod loader;
mod neighbour;
pub mod ordered;
mod point;
mod rect;
mod result_collection;
pub mod spatial;
#[cfg(feature = "test_utils")]
#[doc(hidden)]
pub mod test_utils;
mod traits;

pub use crate::neighbour::Neighbour;
pub use crate::ordered::OrderedPointSet;
pub use crate::point::Point;
pub use crate::rect::Rect;
pub use crate::spatial::KdPointSet;
pub use crate::traits::PointSet;

//! Core types for latency binning
//!
//! This crate provides the ordered-axis building blocks shared by the
//! histogram, density and color crates:
//!
//! - [`OrderedBoundary`]: a point on an axis that may be `-inf` or `+inf`
//! - [`Interval`]: a half-open `[low, high)` range between two boundaries
//! - [`AxisPartition`]: sorted split points plus both sentinels, with
//!   O(log n) segment lookup
//!
//! # Example
//!
//! ```rust
//! use latmap_core::{AxisPartition, OrderedBoundary};
//!
//! let partition = AxisPartition::new([10, 20]);
//! assert_eq!(partition.segment_count(), 3);
//! assert_eq!(partition.segment_of(&15), 1);
//! assert_eq!(partition.boundaries()[0].boundary(), &OrderedBoundary::NegativeInfinite);
//! ```

pub mod boundary;
pub mod error;
pub mod interval;
pub mod partition;
pub mod utils;

pub use boundary::{IndexedBoundary, OrderedBoundary};
pub use error::{Error, Result};
pub use interval::Interval;
pub use partition::AxisPartition;

// Float keys on an axis need a total order
pub use ordered_float::OrderedFloat;

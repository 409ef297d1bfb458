//! Sorted, indexed partitions of an ordered axis
//!
//! An [`AxisPartition`] turns a set of finite split points into the boundary
//! sequence `[-inf, p0, p1, ..., pk, +inf]` and answers "which segment holds
//! this value" by binary search. The two infinite sentinels make the lookup
//! total: values below the first split point land in segment 0 and values at
//! or above the last one land in the final segment.

use crate::boundary::{IndexedBoundary, OrderedBoundary};
use crate::error::{Error, Result};
use crate::interval::Interval;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::fmt;

/// Sorted boundary sequence with sentinels at both ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisPartition<T> {
    boundaries: Vec<IndexedBoundary<T>>,
}

impl<T: Ord> AxisPartition<T> {
    /// Build a partition from finite split points; duplicates collapse
    pub fn new<I>(split_points: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut points: Vec<T> = split_points.into_iter().collect();
        points.sort_unstable();
        points.dedup();

        let mut boundaries = Vec::with_capacity(points.len() + 2);
        boundaries.push(IndexedBoundary::new(OrderedBoundary::NegativeInfinite, 0));
        for (i, point) in points.into_iter().enumerate() {
            boundaries.push(IndexedBoundary::new(OrderedBoundary::Finite(point), i + 1));
        }
        let last = boundaries.len();
        boundaries.push(IndexedBoundary::new(OrderedBoundary::PositiveInfinite, last));

        log::trace!("built axis partition with {} boundaries", boundaries.len());
        Self { boundaries }
    }

    /// Index of the segment holding `value`
    ///
    /// This is the highest boundary index `i` with `boundary[i] < value`, so
    /// a value equal to a split point belongs to the segment that starts
    /// at that point's predecessor.
    pub fn segment_of(&self, value: &T) -> usize {
        // Sentinel at index 0 is below every value, so the count is at least 1.
        let below = self
            .boundaries
            .partition_point(|b| b.boundary().cmp_value(value) == Ordering::Less);
        below - 1
    }

    /// Index of the segment whose `[low, high)` interval contains `value`
    ///
    /// Unlike [`segment_of`](Self::segment_of), a value equal to a split
    /// point belongs to the segment that starts at that point.
    pub fn segment_containing(&self, value: &T) -> usize {
        let at_or_below = self
            .boundaries
            .partition_point(|b| b.boundary().cmp_value(value) != Ordering::Greater);
        at_or_below - 1
    }

    /// Index of the segment holding a possibly infinite boundary
    ///
    /// Negative infinity has no strict predecessor and maps to segment 0.
    pub fn segment_of_boundary(&self, point: &OrderedBoundary<T>) -> usize {
        let below = self.boundaries.partition_point(|b| b.boundary() < point);
        below.saturating_sub(1)
    }
}

impl<T> AxisPartition<T> {
    /// Number of boundaries, sentinels included
    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    /// Always false: a partition holds at least its two sentinels
    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Number of half-open segments between consecutive boundaries
    pub fn segment_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Boundaries in ascending order
    pub fn boundaries(&self) -> &[IndexedBoundary<T>] {
        &self.boundaries
    }

    /// Finite split points in ascending order
    pub fn split_points(&self) -> impl Iterator<Item = &T> + '_ {
        self.boundaries.iter().filter_map(|b| b.boundary().value())
    }
}

impl<T: Ord + Clone + fmt::Debug> AxisPartition<T> {
    /// Interval covered by segment `index`
    pub fn segment(&self, index: usize) -> Result<Interval<T>> {
        if index >= self.segment_count() {
            return Err(Error::InvalidParameter(format!(
                "segment index {index} out of range for {} segments",
                self.segment_count()
            )));
        }
        Interval::new(
            self.boundaries[index].boundary().clone(),
            self.boundaries[index + 1].boundary().clone(),
        )
    }

    /// All segments in ascending order
    pub fn segments(&self) -> Result<Vec<Interval<T>>> {
        self.boundaries
            .windows(2)
            .map(|w| Interval::new(w[0].boundary().clone(), w[1].boundary().clone()))
            .collect()
    }
}

impl AxisPartition<OrderedFloat<f64>> {
    /// Build a partition over floating-point split points, rejecting NaN
    pub fn from_f64(split_points: &[f64]) -> Result<Self> {
        if split_points.iter().any(|p| p.is_nan()) {
            return Err(Error::InvalidInput("split points contain NaN".to_string()));
        }
        Ok(Self::new(split_points.iter().copied().map(OrderedFloat)))
    }

    /// Segment lookup for a raw `f64`
    pub fn segment_of_f64(&self, value: f64) -> Result<usize> {
        if value.is_nan() {
            return Err(Error::InvalidInput("cannot locate NaN on an axis".to_string()));
        }
        Ok(self.segment_of(&OrderedFloat(value)))
    }
}

impl<T: fmt::Display> fmt::Display for AxisPartition<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, b) in self.boundaries.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{b}")?;
        }
        f.write_str("]")
    }
}

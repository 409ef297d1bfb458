//! Histogram building strategies

use crate::scale::NiceScale;
use crate::traits::HistogramBuilder;
use crate::types::{Histogram, HistogramBin};
use latmap_core::{AxisPartition, Error, OrderedFloat, Result};
use std::fmt::Debug;
use tracing::debug;

/// Histogram builder over caller-supplied split points
///
/// The split points, plus both infinite sentinels, define the bins, so a
/// histogram over `k` distinct points has `k + 1` bins before empty ones are
/// dropped. Each sample is placed by binary search.
#[derive(Debug, Clone)]
pub struct IntervalHistogramBuilder<T> {
    partition: AxisPartition<T>,
    ignore_empty_intervals: bool,
}

impl<T: Ord + Clone + Debug> IntervalHistogramBuilder<T> {
    /// Create a builder from split points; duplicates collapse
    pub fn new<I>(split_points: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            partition: AxisPartition::new(split_points),
            ignore_empty_intervals: false,
        }
    }

    /// Omit bins that received no samples
    pub fn with_ignore_empty_intervals(mut self, ignore: bool) -> Self {
        self.ignore_empty_intervals = ignore;
        self
    }

    /// The partition the bins are drawn from
    pub fn partition(&self) -> &AxisPartition<T> {
        &self.partition
    }
}

impl IntervalHistogramBuilder<OrderedFloat<f64>> {
    /// Create a builder from floating-point split points, rejecting NaN
    pub fn from_f64(split_points: &[f64]) -> Result<Self> {
        Ok(Self {
            partition: AxisPartition::from_f64(split_points)?,
            ignore_empty_intervals: false,
        })
    }
}

impl<T: Ord + Clone + Debug> HistogramBuilder<T> for IntervalHistogramBuilder<T> {
    fn build(&self, sample: &[T]) -> Result<Histogram<T>> {
        let mut counts = vec![0usize; self.partition.segment_count()];
        for value in sample {
            counts[self.partition.segment_containing(value)] += 1;
        }

        let bins = self
            .partition
            .segments()?
            .into_iter()
            .zip(counts)
            .filter(|(_, count)| !self.ignore_empty_intervals || *count > 0)
            .map(|(interval, count)| HistogramBin::new(interval, count))
            .collect::<Vec<_>>();

        debug!(
            "interval histogram: {} samples into {} of {} bins",
            sample.len(),
            bins.len(),
            self.partition.segment_count()
        );
        Ok(Histogram::new(bins, sample.len()))
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.partition.segment_count())
    }
}

/// Histogram builder whose split points come from a [`NiceScale`]
///
/// The scale is fitted to the sample's minimum and maximum, so samples must be
/// non-negative.
#[derive(Debug, Clone)]
pub struct NiceScaleHistogramBuilder {
    bucket_count: usize,
    ignore_empty_intervals: bool,
}

impl NiceScaleHistogramBuilder {
    /// Create a builder targeting `bucket_count` buckets
    pub fn new(bucket_count: usize) -> Self {
        Self {
            bucket_count,
            ignore_empty_intervals: false,
        }
    }

    /// Omit bins that received no samples
    pub fn with_ignore_empty_intervals(mut self, ignore: bool) -> Self {
        self.ignore_empty_intervals = ignore;
        self
    }

    /// Split points the scale would use for this sample
    pub fn split_points(&self, sample: &[OrderedFloat<f64>]) -> Result<Vec<f64>> {
        let min = sample.iter().min().ok_or_else(|| Error::empty_input("histogram"))?;
        let max = sample.iter().max().ok_or_else(|| Error::empty_input("histogram"))?;
        Ok(NiceScale::new(min.0, max.0, self.bucket_count)?.into_boundaries())
    }
}

impl HistogramBuilder<OrderedFloat<f64>> for NiceScaleHistogramBuilder {
    fn build(&self, sample: &[OrderedFloat<f64>]) -> Result<Histogram<OrderedFloat<f64>>> {
        let points = self.split_points(sample)?;
        IntervalHistogramBuilder::from_f64(&points)?
            .with_ignore_empty_intervals(self.ignore_empty_intervals)
            .build(sample)
    }

    fn target_bins(&self) -> Option<usize> {
        Some(self.bucket_count)
    }
}

/// Build an interval histogram with a single call
pub fn interval_histogram<T: Ord + Clone + Debug>(
    sample: &[T],
    split_points: impl IntoIterator<Item = T>,
    ignore_empty_intervals: bool,
) -> Result<Histogram<T>> {
    IntervalHistogramBuilder::new(split_points)
        .with_ignore_empty_intervals(ignore_empty_intervals)
        .build(sample)
}

//! Core types for histogram representation

use latmap_core::{Interval, OrderedBoundary};
use ordered_float::OrderedFloat;
use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistogramBin<T> {
    /// Half-open range covered by this bin
    pub interval: Interval<T>,
    /// Number of values in this bin
    pub count: usize,
}

impl<T> HistogramBin<T> {
    /// Create a new histogram bin
    pub fn new(interval: Interval<T>, count: usize) -> Self {
        Self { interval, count }
    }

    /// Get the relative frequency (count / total_count)
    pub fn frequency(&self, total_count: usize) -> f64 {
        if total_count > 0 {
            self.count as f64 / total_count as f64
        } else {
            0.0
        }
    }
}

impl<T: Ord> HistogramBin<T> {
    /// Check if a value falls within this bin
    pub fn contains(&self, value: &T) -> bool {
        self.interval.contains_value(value)
    }
}

impl<T: fmt::Display> fmt::Display for HistogramBin<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: count={}", self.interval, self.count)
    }
}

/// A histogram over half-open intervals of an ordered axis
///
/// Bins are kept in ascending order. When empty intervals were dropped at
/// build time the bins need not be contiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram<T> {
    bins: Vec<HistogramBin<T>>,
    total_count: usize,
}

/// Histogram keyed by latency values
pub type LatencyHistogram = Histogram<OrderedFloat<f64>>;

impl<T> Histogram<T> {
    /// Create a new histogram
    pub fn new(bins: Vec<HistogramBin<T>>, total_count: usize) -> Self {
        Self { bins, total_count }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin<T>] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram has no bins
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the total count of data points
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Get frequencies as a vector
    pub fn frequencies(&self) -> Vec<f64> {
        self.bins
            .iter()
            .map(|bin| bin.frequency(self.total_count))
            .collect()
    }
}

impl<T: Ord> Histogram<T> {
    /// Find which bin contains a given value
    pub fn find_bin(&self, value: &T) -> Option<usize> {
        let idx = self
            .bins
            .partition_point(|bin| bin.interval.low().cmp_value(value) != std::cmp::Ordering::Greater);
        let candidate = idx.checked_sub(1)?;
        self.bins[candidate].contains(value).then_some(candidate)
    }

    /// Find the bin whose interval starts at `low`
    pub fn bin_starting_at(&self, low: &OrderedBoundary<T>) -> Option<&HistogramBin<T>> {
        self.bins
            .binary_search_by(|bin| bin.interval.low().cmp(low))
            .ok()
            .map(|i| &self.bins[i])
    }
}

impl<T: fmt::Display> fmt::Display for Histogram<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Histogram with {} bins, {} values:", self.len(), self.total_count)?;
        for bin in &self.bins {
            writeln!(f, "  {bin}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use OrderedBoundary::{Finite, NegativeInfinite, PositiveInfinite};

    fn sample_histogram() -> Histogram<i32> {
        let bins = vec![
            HistogramBin::new(Interval::new(NegativeInfinite, Finite(10)).unwrap(), 1),
            HistogramBin::new(Interval::new(Finite(10), Finite(20)).unwrap(), 3),
            HistogramBin::new(Interval::new(Finite(20), PositiveInfinite).unwrap(), 0),
        ];
        Histogram::new(bins, 4)
    }

    #[test]
    fn test_accessors() {
        let hist = sample_histogram();
        assert_eq!(hist.len(), 3);
        assert_eq!(hist.total_count(), 4);
        assert_eq!(hist.max_count(), 3);
        assert_eq!(hist.counts(), vec![1, 3, 0]);
        let freqs = hist.frequencies();
        assert_relative_eq!(freqs[0], 0.25);
        assert_relative_eq!(freqs[1], 0.75);
        assert_relative_eq!(freqs[2], 0.0);
    }

    #[test]
    fn test_find_bin() {
        let hist = sample_histogram();
        assert_eq!(hist.find_bin(&-100), Some(0));
        assert_eq!(hist.find_bin(&10), Some(1));
        assert_eq!(hist.find_bin(&19), Some(1));
        assert_eq!(hist.find_bin(&20), Some(2));
        assert_eq!(hist.bin_starting_at(&Finite(10)).map(|b| b.count), Some(3));
        assert!(hist.bin_starting_at(&Finite(15)).is_none());
    }

    #[test]
    fn test_find_bin_with_gaps() {
        let bins = vec![
            HistogramBin::new(Interval::new(Finite(0), Finite(5)).unwrap(), 2),
            HistogramBin::new(Interval::new(Finite(10), Finite(15)).unwrap(), 1),
        ];
        let hist = Histogram::new(bins, 3);
        assert_eq!(hist.find_bin(&3), Some(0));
        assert_eq!(hist.find_bin(&7), None);
        assert_eq!(hist.find_bin(&-1), None);
        assert_eq!(hist.find_bin(&12), Some(1));
        assert_eq!(hist.find_bin(&15), None);
    }

    #[test]
    fn test_empty_histogram() {
        let hist = Histogram::<i32>::new(Vec::new(), 0);
        assert!(hist.is_empty());
        assert_eq!(hist.max_count(), 0);
        assert_eq!(hist.find_bin(&1), None);
    }

    #[test]
    fn test_display() {
        let text = sample_histogram().to_string();
        assert!(text.starts_with("Histogram with 3 bins, 4 values:"));
        assert!(text.contains("[10,20]: count=3"));
        assert!(text.contains("[<,10]: count=1"));
    }
}

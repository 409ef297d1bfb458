//! Core traits for histogram building

use crate::types::Histogram;
use latmap_core::{Error, OrderedFloat, Result};

/// Trait for building histograms from sample data
pub trait HistogramBuilder<T: Ord> {
    /// Build a histogram from the given sample
    fn build(&self, sample: &[T]) -> Result<Histogram<T>>;

    /// Get the target number of bins (if known)
    fn target_bins(&self) -> Option<usize> {
        None
    }
}

/// Building from raw `f64` latencies
///
/// Implemented for every builder over [`OrderedFloat<f64>`] keys.
pub trait FloatHistogramBuilder: HistogramBuilder<OrderedFloat<f64>> {
    /// Build a histogram from raw floats, rejecting NaN
    fn build_f64(&self, sample: &[f64]) -> Result<Histogram<OrderedFloat<f64>>> {
        if sample.iter().any(|x| x.is_nan()) {
            return Err(Error::InvalidInput("sample contains NaN".to_string()));
        }
        let keys: Vec<OrderedFloat<f64>> = sample.iter().copied().map(OrderedFloat).collect();
        self.build(&keys)
    }
}

impl<B: HistogramBuilder<OrderedFloat<f64>> + ?Sized> FloatHistogramBuilder for B {}

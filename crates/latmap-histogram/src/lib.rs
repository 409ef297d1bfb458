//! Nice scales and interval histograms for latency samples
//!
//! This crate turns raw samples into counted bins over an ordered axis:
//!
//! - [`NiceScale`] / [`generate`]: human-friendly bucket boundaries computed
//!   in decimal arithmetic
//! - [`IntervalHistogramBuilder`]: counts over caller-supplied split points,
//!   including the two unbounded edge bins
//! - [`NiceScaleHistogramBuilder`]: split points fitted to the data by
//!   [`NiceScale`]
//! - [`FrequencyTable`]: per-bin percentage and cumulative percentage
//!
//! # Examples
//!
//! ```rust
//! use latmap_histogram::{FloatHistogramBuilder, NiceScaleHistogramBuilder};
//!
//! let latencies = vec![1.2, 3.4, 3.9, 7.5, 9.8];
//! let histogram = NiceScaleHistogramBuilder::new(5).build_f64(&latencies).unwrap();
//!
//! for row in histogram.frequency_table().rows() {
//!     println!("{}: {} ({:.1}%)", row.interval, row.count, row.percentage);
//! }
//! ```

pub mod builders;
pub mod ops;
pub mod scale;
pub mod traits;
pub mod types;

pub use latmap_core::Result;
pub use builders::{interval_histogram, IntervalHistogramBuilder, NiceScaleHistogramBuilder};
pub use ops::{FrequencyRow, FrequencyTable};
pub use scale::{generate, NiceScale};
pub use traits::{FloatHistogramBuilder, HistogramBuilder};
pub use types::{Histogram, HistogramBin, LatencyHistogram};

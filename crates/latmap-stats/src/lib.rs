//! Summary statistics for latency samples
//!
//! [`StatisticsSummary`] computes the classical moments of one sample (mean,
//! population variance, sample standard deviation, skewness and kurtosis)
//! together with its median and per-sample z-scores. Percentiles follow the
//! interpolating definition in [`percentile`], and [`zscore_outliers`] flags
//! the slow tail.
//!
//! # Example
//!
//! ```rust
//! use latmap_stats::StatisticsSummary;
//!
//! let summary = StatisticsSummary::new(vec![12.0, 15.0, 11.0, 90.0, 14.0]).unwrap();
//! let table = summary.percentiles(&[50.0, 90.0, 99.0]).unwrap();
//! println!("median = {}, p90 = {:?}", summary.median(), table.get(90.0));
//! ```

pub mod outliers;
pub mod percentiles;
pub mod summary;

pub use latmap_core::Result;
pub use outliers::{zscore_outliers, Outliers};
pub use percentiles::{median, percentile, Percentiles};
pub use summary::StatisticsSummary;

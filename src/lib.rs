//! # latmap
//!
//! Latency binning, density matrices and summary statistics for offline
//! performance analysis.
//!
//! Raw `(timestamp, latency)` samples flow through the workspace crates:
//!
//! - [`latmap_core`]: ordered boundaries with infinite sentinels, intervals
//!   and axis partitions
//! - [`latmap_histogram`]: nice scales and interval histograms
//! - [`latmap_density`]: two-axis density matrices and latency heat maps
//! - [`latmap_stats`]: percentiles, moments, z-scores and outliers
//! - [`latmap_color`]: color ramps and quantization of counts
//!
//! [`LatencyReport`] ties them together for a batch of parsed records.
//!
//! ## Quick Start
//!
//! ```rust
//! use latmap::{LatencyRecord, LatencyReport, ReportConfig};
//!
//! let records: Vec<LatencyRecord> = (0..100)
//!     .map(|i| LatencyRecord::new("checkout", 1_709_287_200_000 + i * 1_000, 20.0 + (i % 7) as f64))
//!     .collect();
//!
//! let report = LatencyReport::build(&records, &ReportConfig::default()).unwrap();
//! let checkout = report.event("checkout").unwrap();
//! println!("{}", checkout.summary());
//! println!("{}", checkout.percentiles());
//! ```

pub mod report;

// Re-export workspace crates
pub use latmap_color;
pub use latmap_core;
pub use latmap_density;
pub use latmap_histogram;
pub use latmap_stats;

// Common types
pub use latmap_color::{ColorPalette, ColorRampQuantizer, ColorRampScheme};
pub use latmap_core::{AxisPartition, Error, Interval, OrderedBoundary, OrderedFloat, Result};
pub use latmap_density::{DensityMatrix, HeatMapConfig, LatencyHeatMap};
pub use latmap_histogram::{Histogram, NiceScale};
pub use latmap_stats::{Percentiles, StatisticsSummary};

pub use report::{EventReport, LatencyRecord, LatencyReport, ReportConfig};

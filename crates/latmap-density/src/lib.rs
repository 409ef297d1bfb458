//! Density matrices and latency heat maps
//!
//! - [`DensityMatrix`]: a grid over two [`AxisPartition`](latmap_core::AxisPartition)s
//!   with a caller-supplied combining function per cell
//! - [`LatencyHeatMap`]: counts per (nice latency bucket, time slot)
//! - [`time_axis`]: hour-aligned time split points and labels
//!
//! # Example
//!
//! ```rust
//! use latmap_density::{HeatMapConfig, LatencyHeatMap};
//!
//! let latencies = [1.5, 2.5, 7.0];
//! let timestamps = [1_709_287_260_000, 1_709_287_320_000, 1_709_287_800_000];
//! let heat_map = LatencyHeatMap::new(&latencies, &timestamps, &HeatMapConfig::default()).unwrap();
//!
//! assert_eq!(heat_map.total(), 3);
//! println!("{}", heat_map.density());
//! ```

pub mod config;
pub mod heatmap;
pub mod matrix;
pub mod time_axis;

pub use latmap_core::Result;
pub use config::{HeatMapConfig, DEFAULT_MAX_LATENCY_BUCKETS};
pub use heatmap::{LatencyDensity, LatencyHeatMap};
pub use matrix::DensityMatrix;
pub use time_axis::{auto_interval_ms, format_timestamp, start_of_hour, timestamp_split_points};

//! Time-series latency heat maps
//!
//! Rows are nice latency buckets, columns are fixed-width time slots aligned
//! to the hour, and each cell counts the requests that fell into both.

use crate::config::HeatMapConfig;
use crate::matrix::DensityMatrix;
use crate::time_axis::{auto_interval_ms, format_timestamp, timestamp_split_points};
use latmap_core::utils::{ensure_finite, min_max};
use latmap_core::{Error, OrderedFloat, Result};
use latmap_histogram::NiceScale;
use tracing::{debug, instrument};

/// Request counts per (latency bucket, time slot)
pub type LatencyDensity = DensityMatrix<OrderedFloat<f64>, i64, u64>;

/// Latency density over time
#[derive(Debug, Clone, PartialEq)]
pub struct LatencyHeatMap {
    density: LatencyDensity,
    time_interval_ms: i64,
    utc_offset_seconds: i32,
}

impl LatencyHeatMap {
    /// Bin `latencies[i]` observed at `timestamps[i]` (epoch milliseconds)
    #[instrument(level = "debug", skip_all, fields(n = latencies.len()))]
    pub fn new(latencies: &[f64], timestamps: &[i64], config: &HeatMapConfig) -> Result<Self> {
        if latencies.len() != timestamps.len() {
            return Err(Error::size_mismatch(latencies.len(), timestamps.len(), "timestamps"));
        }
        if latencies.is_empty() {
            return Err(Error::empty_input("heat map"));
        }
        if config.max_latency_buckets == 0 {
            return Err(Error::InvalidParameter(
                "max_latency_buckets must be at least 1".to_string(),
            ));
        }
        ensure_finite(latencies, "latencies")?;

        let (min, max) = latency_range(latencies, config.latency_range)?;
        let latency_points = latency_split_points(min, max, config.max_latency_buckets)?;

        let (first, last) = timestamps
            .iter()
            .fold((i64::MAX, i64::MIN), |(lo, hi), &t| (lo.min(t), hi.max(t)));
        let interval = config
            .time_interval_ms
            .unwrap_or_else(|| auto_interval_ms(last.saturating_sub(first)));
        let time_points = timestamp_split_points(timestamps, interval, config.utc_offset_seconds)?;

        debug!(
            "heat map axes: {} latency points in [{}, {}], {} time points every {}ms",
            latency_points.len(),
            min,
            max,
            time_points.len(),
            interval
        );

        let mut density = DensityMatrix::new(
            latency_points.into_iter().map(OrderedFloat),
            time_points,
            0u64,
        );
        for (&latency, timestamp) in latencies.iter().zip(timestamps) {
            density.accumulate(&OrderedFloat(latency), timestamp, |count| count + 1);
        }

        Ok(Self {
            density,
            time_interval_ms: interval,
            utc_offset_seconds: config.utc_offset_seconds,
        })
    }

    /// The underlying count matrix; rows are latency, columns are time
    pub fn density(&self) -> &LatencyDensity {
        &self.density
    }

    pub fn time_interval_ms(&self) -> i64 {
        self.time_interval_ms
    }

    /// Requests per time slot
    pub fn column_totals(&self) -> Vec<u64> {
        self.density.column_totals()
    }

    /// Requests per latency bucket
    pub fn row_totals(&self) -> Vec<u64> {
        self.density.row_totals()
    }

    pub fn total(&self) -> u64 {
        self.density.total()
    }

    /// Count in the busiest cell
    pub fn max_count(&self) -> u64 {
        self.density.max_cell().unwrap_or(0)
    }

    /// Finite latency split points in ascending order
    pub fn latency_split_points(&self) -> Vec<f64> {
        self.density
            .row_partition()
            .split_points()
            .map(|p| p.into_inner())
            .collect()
    }

    /// Time split points formatted as `dd/MM/yyyy HH:mm` in the configured offset
    pub fn time_labels(&self) -> Result<Vec<String>> {
        self.density
            .column_partition()
            .split_points()
            .map(|&t| format_timestamp(t, self.utc_offset_seconds))
            .collect()
    }
}

/// Latency axis range: the data range, narrowed to a configured range that overlaps it
fn latency_range(latencies: &[f64], configured: Option<(f64, f64)>) -> Result<(f64, f64)> {
    let (data_min, data_max) = min_max(latencies)?;
    let Some((lo, hi)) = configured else {
        return Ok((data_min, data_max));
    };
    if !lo.is_finite() || !hi.is_finite() {
        return Err(Error::non_finite("latency range"));
    }
    if lo > hi {
        return Err(Error::invalid_range(lo, hi));
    }
    if hi < data_min || lo > data_max {
        Ok((lo, hi))
    } else {
        Ok((data_min.max(lo), data_max.min(hi)))
    }
}

/// Nice latency split points over `[floor(min), ceil(max)]`
fn latency_split_points(min: f64, max: f64, max_buckets: usize) -> Result<Vec<f64>> {
    let lo = min.floor();
    let hi = max.ceil();
    let buckets = if lo == hi {
        1
    } else {
        max_buckets.min((hi - lo).ceil() as usize)
    };
    Ok(NiceScale::new(lo, hi, buckets)?.into_boundaries())
}

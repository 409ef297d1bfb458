//! Heat map configuration

use serde::{Deserialize, Serialize};

/// Default upper bound on latency rows
pub const DEFAULT_MAX_LATENCY_BUCKETS: usize = 40;

/// Configuration for [`LatencyHeatMap`](crate::LatencyHeatMap)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatMapConfig {
    /// Upper bound on the number of nice latency buckets
    pub max_latency_buckets: usize,
    /// Restrict the latency axis to `(min, max)`
    pub latency_range: Option<(f64, f64)>,
    /// Column width; chosen from the time span when unset
    pub time_interval_ms: Option<i64>,
    /// Offset used to align columns to local hours
    pub utc_offset_seconds: i32,
}

impl Default for HeatMapConfig {
    fn default() -> Self {
        Self {
            max_latency_buckets: DEFAULT_MAX_LATENCY_BUCKETS,
            latency_range: None,
            time_interval_ms: None,
            utc_offset_seconds: 0,
        }
    }
}

impl HeatMapConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_latency_buckets(mut self, buckets: usize) -> Self {
        self.max_latency_buckets = buckets;
        self
    }

    pub fn with_latency_range(mut self, min: f64, max: f64) -> Self {
        self.latency_range = Some((min, max));
        self
    }

    pub fn with_time_interval_ms(mut self, interval_ms: i64) -> Self {
        self.time_interval_ms = Some(interval_ms);
        self
    }

    pub fn with_utc_offset_seconds(mut self, seconds: i32) -> Self {
        self.utc_offset_seconds = seconds;
        self
    }
}

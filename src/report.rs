//! Per-event latency reports
//!
//! Groups parsed latency records by event name and runs the whole pipeline on
//! each group: summary statistics, percentile table, nice-scale histogram and
//! heat map. A combined report covers every record.

use latmap_color::{quantize_matrix, ColorPalette, ColorRampScheme};
use latmap_core::{Error, Result};
use latmap_density::{HeatMapConfig, LatencyHeatMap};
use latmap_histogram::{
    FloatHistogramBuilder, IntervalHistogramBuilder, LatencyHistogram, NiceScaleHistogramBuilder,
};
use latmap_stats::{Percentiles, StatisticsSummary};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

pub const DEFAULT_PERCENTILE_KEYS: [f64; 5] = [50.0, 90.0, 95.0, 99.0, 99.9];
pub const DEFAULT_HISTOGRAM_BUCKETS: usize = 10;
pub const DEFAULT_COMBINED_EVENT_NAME: &str = "All events combined";

/// One parsed latency observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatencyRecord {
    pub event: String,
    /// Epoch milliseconds
    pub timestamp_ms: i64,
    pub latency: f64,
}

impl LatencyRecord {
    pub fn new(event: impl Into<String>, timestamp_ms: i64, latency: f64) -> Self {
        Self {
            event: event.into(),
            timestamp_ms,
            latency,
        }
    }
}

/// Report settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Explicit histogram split points; a nice scale is fitted when unset
    pub histogram_split_points: Option<Vec<f64>>,
    pub histogram_buckets: usize,
    pub percentile_keys: Vec<f64>,
    /// Drop samples whose z-score exceeds this before analysis
    pub outlier_threshold: Option<f64>,
    pub color_scheme: ColorRampScheme,
    pub heat_map: HeatMapConfig,
    pub combined_event_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            histogram_split_points: None,
            histogram_buckets: DEFAULT_HISTOGRAM_BUCKETS,
            percentile_keys: DEFAULT_PERCENTILE_KEYS.to_vec(),
            outlier_threshold: None,
            color_scheme: ColorRampScheme::default(),
            heat_map: HeatMapConfig::default(),
            combined_event_name: DEFAULT_COMBINED_EVENT_NAME.to_string(),
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_histogram_split_points(mut self, points: Vec<f64>) -> Self {
        self.histogram_split_points = Some(points);
        self
    }

    pub fn with_histogram_buckets(mut self, buckets: usize) -> Self {
        self.histogram_buckets = buckets;
        self
    }

    pub fn with_percentile_keys(mut self, keys: Vec<f64>) -> Self {
        self.percentile_keys = keys;
        self
    }

    pub fn with_outlier_threshold(mut self, threshold: f64) -> Self {
        self.outlier_threshold = Some(threshold);
        self
    }

    pub fn with_color_scheme(mut self, scheme: ColorRampScheme) -> Self {
        self.color_scheme = scheme;
        self
    }

    pub fn with_heat_map(mut self, heat_map: HeatMapConfig) -> Self {
        self.heat_map = heat_map;
        self
    }

    pub fn with_combined_event_name(mut self, name: impl Into<String>) -> Self {
        self.combined_event_name = name.into();
        self
    }
}

/// Analysis of one event's latencies
#[derive(Debug, Clone)]
pub struct EventReport {
    event: String,
    summary: StatisticsSummary,
    percentiles: Percentiles,
    histogram: LatencyHistogram,
    heat_map: LatencyHeatMap,
    palette: ColorPalette,
}

impl EventReport {
    /// Analyze latencies observed at the parallel `timestamps`
    #[instrument(level = "debug", skip_all, fields(event = %event, n = latencies.len()))]
    pub fn build(
        event: String,
        latencies: Vec<f64>,
        timestamps: Vec<i64>,
        config: &ReportConfig,
    ) -> Result<Self> {
        let mut summary = StatisticsSummary::with_timestamps(latencies, timestamps)?;
        if let Some(threshold) = config.outlier_threshold {
            summary = summary.without_outliers(threshold)?;
        }

        let percentiles = summary.percentiles(&config.percentile_keys)?;
        let histogram = match &config.histogram_split_points {
            Some(points) => IntervalHistogramBuilder::from_f64(points)?.build_f64(summary.samples())?,
            None => NiceScaleHistogramBuilder::new(config.histogram_buckets)
                .build_f64(summary.samples())?,
        };
        let timestamps = summary
            .timestamps()
            .ok_or_else(|| Error::Computation("summary lost its timestamps".to_string()))?;
        let heat_map = LatencyHeatMap::new(summary.samples(), timestamps, &config.heat_map)?;

        Ok(Self {
            event,
            summary,
            percentiles,
            histogram,
            heat_map,
            palette: config.color_scheme.palette(),
        })
    }

    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn summary(&self) -> &StatisticsSummary {
        &self.summary
    }

    pub fn percentiles(&self) -> &Percentiles {
        &self.percentiles
    }

    pub fn histogram(&self) -> &LatencyHistogram {
        &self.histogram
    }

    pub fn heat_map(&self) -> &LatencyHeatMap {
        &self.heat_map
    }

    /// Heat map cells colored with the configured scheme, row-major
    pub fn heat_map_colors(&self) -> Result<Vec<Vec<&str>>> {
        quantize_matrix(self.heat_map.density(), &self.palette)
    }
}

/// Reports for every event plus one over all records
#[derive(Debug, Clone)]
pub struct LatencyReport {
    combined: EventReport,
    events: Vec<EventReport>,
}

impl LatencyReport {
    /// Group `records` by event and analyze each group
    ///
    /// Per-event reports are ordered by median latency, slowest first; events
    /// with equal medians keep their name order.
    #[instrument(level = "debug", skip_all, fields(n = records.len()))]
    pub fn build(records: &[LatencyRecord], config: &ReportConfig) -> Result<Self> {
        if records.is_empty() {
            return Err(Error::empty_input("report"));
        }

        let mut groups: BTreeMap<&str, (Vec<f64>, Vec<i64>)> = BTreeMap::new();
        for record in records {
            let (latencies, timestamps) = groups.entry(record.event.as_str()).or_default();
            latencies.push(record.latency);
            timestamps.push(record.timestamp_ms);
        }
        debug!("{} records across {} events", records.len(), groups.len());

        let mut events = groups
            .into_iter()
            .map(|(event, (latencies, timestamps))| {
                EventReport::build(event.to_string(), latencies, timestamps, config)
            })
            .collect::<Result<Vec<_>>>()?;
        events.sort_by(|a, b| b.summary.median().total_cmp(&a.summary.median()));

        let combined = EventReport::build(
            config.combined_event_name.clone(),
            records.iter().map(|r| r.latency).collect(),
            records.iter().map(|r| r.timestamp_ms).collect(),
            config,
        )?;

        Ok(Self { combined, events })
    }

    /// Report over every record
    pub fn combined(&self) -> &EventReport {
        &self.combined
    }

    /// Per-event reports, slowest median first
    pub fn events(&self) -> &[EventReport] {
        &self.events
    }

    pub fn event(&self, name: &str) -> Option<&EventReport> {
        self.events.iter().find(|e| e.event == name)
    }
}

//! Classical summary statistics for one latency sample
//!
//! Variance, skewness and kurtosis use population (`1/n`) moments, while the
//! standard deviation (and therefore the z-scores) uses the sample (`1/(n-1)`)
//! estimator. Both conventions are kept as reported by the latency tables.

use crate::outliers::{zscore_outliers, Outliers};
use crate::percentiles::{median, Percentiles};
use latmap_core::utils::{ensure_finite, min_max, sorted};
use latmap_core::{Error, Result};
use std::fmt;
use tracing::{debug, instrument};

/// Summary of a latency sample with optional parallel timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsSummary {
    samples: Vec<f64>,
    timestamps: Option<Vec<i64>>,
    sorted: Vec<f64>,
    min: f64,
    max: f64,
    mean: f64,
    median: f64,
    variance: f64,
    std_deviation: f64,
    skewness: f64,
    kurtosis: f64,
    zscores: Vec<f64>,
}

impl StatisticsSummary {
    /// Summarize a sample without timestamps
    pub fn new(samples: Vec<f64>) -> Result<Self> {
        Self::build(samples, None)
    }

    /// Summarize a sample whose `i`-th value was observed at `timestamps[i]`
    pub fn with_timestamps(samples: Vec<f64>, timestamps: Vec<i64>) -> Result<Self> {
        if samples.len() != timestamps.len() {
            return Err(Error::size_mismatch(samples.len(), timestamps.len(), "timestamps"));
        }
        Self::build(samples, Some(timestamps))
    }

    #[instrument(level = "debug", skip_all, fields(n = samples.len()))]
    fn build(samples: Vec<f64>, timestamps: Option<Vec<i64>>) -> Result<Self> {
        if samples.is_empty() {
            return Err(Error::empty_input("summary"));
        }
        ensure_finite(&samples, "samples")?;

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let (min, max) = min_max(&samples)?;

        let (mut s2, mut s3, mut s4) = (0.0, 0.0, 0.0);
        for &x in &samples {
            let diff = x - mean;
            let sq = diff * diff;
            s2 += sq;
            s3 += sq * diff;
            s4 += sq * sq;
        }

        let variance = s2 / n;
        let magnitude = min.abs().max(max.abs());
        let (skewness, kurtosis) = if variance <= f64::EPSILON * magnitude * magnitude {
            // Constant up to rounding: no spread to normalize by.
            (0.0, 3.0)
        } else {
            (s3 / n / variance.powf(1.5), s4 / n / (variance * variance))
        };

        let std_deviation = if samples.len() > 1 {
            (s2 / (n - 1.0)).sqrt()
        } else {
            0.0
        };

        let zscores = if std_deviation > 0.0 {
            samples.iter().map(|&x| (x - mean) / std_deviation).collect()
        } else {
            vec![0.0; samples.len()]
        };

        let sorted = sorted(&samples);
        let median = median(&sorted)?;

        debug!(
            "summary: mean={:.4}, median={:.4}, std_dev={:.4}",
            mean, median, std_deviation
        );

        Ok(Self {
            samples,
            timestamps,
            sorted,
            min,
            max,
            mean,
            median,
            variance,
            std_deviation,
            skewness,
            kurtosis,
            zscores,
        })
    }

    pub fn count(&self) -> usize {
        self.samples.len()
    }

    /// Samples in input order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Samples in ascending order
    pub fn sorted(&self) -> &[f64] {
        &self.sorted
    }

    pub fn timestamps(&self) -> Option<&[i64]> {
        self.timestamps.as_deref()
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn median(&self) -> f64 {
        self.median
    }

    /// Population variance
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Sample standard deviation; 0 for a single value
    pub fn std_deviation(&self) -> f64 {
        self.std_deviation
    }

    /// Pearson's moment coefficient of skewness
    pub fn skewness(&self) -> f64 {
        self.skewness
    }

    /// Pearson's moment coefficient of kurtosis
    pub fn kurtosis(&self) -> f64 {
        self.kurtosis
    }

    pub fn excess_kurtosis(&self) -> f64 {
        self.kurtosis - 3.0
    }

    /// Z-score of each sample, in input order
    pub fn zscores(&self) -> &[f64] {
        &self.zscores
    }

    /// Percentile table over this sample
    pub fn percentiles(&self, keys: &[f64]) -> Result<Percentiles> {
        Percentiles::compute(&self.sorted, keys)
    }

    /// Samples whose z-score is strictly above `threshold`
    pub fn zscore_outliers(&self, threshold: f64) -> Result<Outliers> {
        zscore_outliers(&self.samples, &self.zscores, threshold)
    }

    /// Rebuild the summary without the samples above the z-score `threshold`
    ///
    /// Timestamps, if present, are filtered in step with the samples.
    pub fn without_outliers(&self, threshold: f64) -> Result<Self> {
        let outliers = self.zscore_outliers(threshold)?;
        if outliers.is_empty() {
            return Ok(self.clone());
        }

        let mut flagged = outliers.indices().iter().peekable();
        let mut keep = Vec::with_capacity(self.count() - outliers.len());
        for i in 0..self.count() {
            if flagged.peek() == Some(&&i) {
                flagged.next();
            } else {
                keep.push(i);
            }
        }
        debug!("removing {} outliers above z={}", outliers.len(), threshold);

        let samples = keep.iter().map(|&i| self.samples[i]).collect();
        match &self.timestamps {
            Some(ts) => Self::with_timestamps(samples, keep.iter().map(|&i| ts[i]).collect()),
            None => Self::new(samples),
        }
    }
}

impl fmt::Display for StatisticsSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "       Event count = {}", self.count())?;
        writeln!(f, "            Median = {:.3}", self.median)?;
        writeln!(f, "              Mean = {:.3}", self.mean)?;
        writeln!(f, "           Minimum = {:.3}", self.min)?;
        writeln!(f, "           Maximum = {:.3}", self.max)?;
        writeln!(f, "Standard deviation = {:.3}", self.std_deviation)?;
        writeln!(f, "          Variance = {:.3}", self.variance)?;
        writeln!(f, "          Skewness = {:.3}", self.skewness)?;
        writeln!(f, "          Kurtosis = {:.3}", self.kurtosis)?;
        write!(f, "   Excess Kurtosis = {:.3}", self.excess_kurtosis())
    }
}

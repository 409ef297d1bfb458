//! Right-tail outlier extraction by z-score

use latmap_core::{Error, Result};

/// Samples flagged as outliers, in input order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outliers {
    indices: Vec<usize>,
    values: Vec<f64>,
    zscores: Vec<f64>,
}

impl Outliers {
    /// Positions of the flagged samples in the original input
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn zscores(&self) -> &[f64] {
        &self.zscores
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Flag every sample whose z-score is strictly greater than `threshold`
///
/// Only the high tail is flagged; a large negative z-score never counts.
pub fn zscore_outliers(samples: &[f64], zscores: &[f64], threshold: f64) -> Result<Outliers> {
    if threshold.is_nan() {
        return Err(Error::InvalidParameter("outlier threshold is NaN".to_string()));
    }
    if samples.len() != zscores.len() {
        return Err(Error::size_mismatch(samples.len(), zscores.len(), "zscores"));
    }

    let mut outliers = Outliers::default();
    for (i, (&value, &z)) in samples.iter().zip(zscores).enumerate() {
        if z > threshold {
            outliers.indices.push(i);
            outliers.values.push(value);
            outliers.zscores.push(z);
        }
    }
    Ok(outliers)
}

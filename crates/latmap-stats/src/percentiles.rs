//! Percentile interpolation over sorted samples
//!
//! Percentile `p` of `n` sorted values sits at the 1-based position
//! `n * p / 100 + 0.5`; fractional positions interpolate linearly between the
//! two neighbouring values. Positions below 1 are undefined, so small samples
//! cannot answer low percentiles.

use latmap_core::{Error, Result};
use std::fmt;
use tracing::debug;

/// The `p`-th percentile of `sorted`, with `p` in `[0, 100]`
///
/// # Errors
///
/// [`Error::InvalidParameter`] if `p` is NaN or outside `[0, 100]`, and
/// [`Error::UndefinedPercentile`] if the sample is too small for `p`.
///
/// # Examples
///
/// ```rust
/// use latmap_stats::percentile;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(percentile(&sorted, 50.0).unwrap(), 2.5);
/// assert_eq!(percentile(&sorted, 100.0).unwrap(), 4.0);
/// assert!(percentile(&sorted, 10.0).is_err());
/// ```
pub fn percentile(sorted: &[f64], p: f64) -> Result<f64> {
    if !(0.0..=100.0).contains(&p) {
        return Err(Error::InvalidParameter(format!(
            "percentile must be in [0, 100], got {p}"
        )));
    }

    let n = sorted.len();
    let pos = n as f64 * (p / 100.0) + 0.5;
    let whole = pos.floor();
    if whole < 1.0 {
        return Err(Error::UndefinedPercentile { n, p });
    }

    let index = whole as usize - 1;
    let fraction = pos - whole;
    let x = sorted[index];
    if fraction == 0.0 || index == n - 1 {
        Ok(x)
    } else {
        let y = sorted[index + 1];
        // Rounding must not carry the result past the upper neighbour.
        Ok((x + fraction * (y - x)).min(y))
    }
}

/// Median of `sorted`: the middle value, or the mean of the two middle values
pub fn median(sorted: &[f64]) -> Result<f64> {
    let n = sorted.len();
    if n == 0 {
        return Err(Error::empty_input("median"));
    }
    if n % 2 == 0 {
        Ok((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Ok(sorted[n / 2])
    }
}

/// Percentile keys paired with their values, keys ascending
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Percentiles {
    keys: Vec<f64>,
    values: Vec<f64>,
}

impl Percentiles {
    /// Compute the given percentiles of `sorted`
    ///
    /// Keys are sorted first. Keys that are undefined for this sample size
    /// are left out of the result instead of failing the whole table.
    pub fn compute(sorted: &[f64], keys: &[f64]) -> Result<Self> {
        let mut sorted_keys = keys.to_vec();
        if let Some(bad) = sorted_keys.iter().find(|k| !(0.0..=100.0).contains(*k)) {
            return Err(Error::InvalidParameter(format!(
                "percentile must be in [0, 100], got {bad}"
            )));
        }
        sorted_keys.sort_by(f64::total_cmp);

        let mut result = Self::default();
        for key in sorted_keys {
            match percentile(sorted, key) {
                Ok(value) => {
                    result.keys.push(key);
                    result.values.push(value);
                }
                Err(Error::UndefinedPercentile { n, p }) => {
                    debug!("dropping percentile {} for sample of {}", p, n);
                }
                Err(e) => return Err(e),
            }
        }
        Ok(result)
    }

    pub fn keys(&self) -> &[f64] {
        &self.keys
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value for an exact key, if it was computed
    pub fn get(&self, key: f64) -> Option<f64> {
        self.keys
            .iter()
            .position(|k| *k == key)
            .map(|i| self.values[i])
    }

    /// `(key, value)` pairs in ascending key order
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.keys.iter().copied().zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Display for Percentiles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in self.iter() {
            writeln!(f, "p{key} = {value:.3}")?;
        }
        Ok(())
    }
}

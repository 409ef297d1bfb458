//! "Nice" axis scales
//!
//! Turns a raw `[min, max]` range and a target bucket count into boundaries
//! spaced by a human-friendly interval (1, 2, 2.5, 5, ... times a power of
//! ten). All arithmetic runs on [`Decimal`] so that boundaries such as `0.3`
//! come out as `0.3` and not `0.30000000000000004`.

use latmap_core::{Error, Result};
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Allowed mantissas for the nice interval, as `(digits, scale)` pairs
const NICE_STEPS: [(i64, u32); 12] = [
    (1, 1),
    (2, 1),
    (25, 2),
    (3, 1),
    (4, 1),
    (5, 1),
    (6, 1),
    (7, 1),
    (75, 2),
    (8, 1),
    (9, 1),
    (1, 0),
];

/// Boundaries of a nice scale together with the interval between them
#[derive(Debug, Clone, PartialEq)]
pub struct NiceScale {
    interval: f64,
    boundaries: Vec<f64>,
}

impl NiceScale {
    /// Compute a nice scale covering `[min, max]` with about `bucket_count` buckets
    ///
    /// The result has at least `bucket_count + 1` strictly increasing
    /// boundaries. The last one is `max` rounded up to a multiple of the nice
    /// interval and the first one is at or below `min`; it may be negative.
    /// A degenerate range (`min == max`) is widened first: values strictly
    /// between 0 and 1 gain one unit in their last decimal place, anything
    /// else gains 1.
    #[instrument(level = "debug")]
    pub fn new(min: f64, max: f64, bucket_count: usize) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(Error::non_finite("scale range"));
        }
        if min < 0.0 || max < 0.0 || min > max {
            return Err(Error::invalid_range(min, max));
        }
        if bucket_count == 0 {
            return Err(Error::InvalidParameter(
                "bucket count must be at least 1".to_string(),
            ));
        }

        let min_d = to_decimal(min)?;
        let max_d = if min == max {
            widen(min_d)?
        } else {
            to_decimal(max)?
        };

        let range = max_d - min_d;
        let raw_interval = range
            .checked_div(Decimal::from(bucket_count as u64))
            .filter(|i| *i > Decimal::ZERO)
            .ok_or_else(|| {
                Error::Computation(format!(
                    "cannot split range {range} into {bucket_count} buckets"
                ))
            })?;

        let magnitude = magnitude_above(raw_interval)?;
        let normalized = raw_interval / magnitude;
        if normalized < Decimal::new(1, 1) || normalized > Decimal::ONE {
            return Err(Error::Computation(format!(
                "normalized interval {normalized} outside [0.1, 1]"
            )));
        }

        let step = NICE_STEPS
            .iter()
            .map(|&(digits, scale)| Decimal::new(digits, scale))
            .find(|step| *step >= normalized)
            .unwrap_or(Decimal::ONE);
        let nice_interval = step
            .checked_mul(magnitude)
            .ok_or_else(|| Error::Computation("nice interval overflow".to_string()))?;
        let nice_max = max_d
            .checked_div(nice_interval)
            .ok_or_else(|| Error::Computation("nice maximum overflow".to_string()))?
            .ceil()
            .checked_mul(nice_interval)
            .ok_or_else(|| Error::Computation("nice maximum overflow".to_string()))?;

        let mut points = Vec::with_capacity(bucket_count + 2);
        let mut current = nice_max;
        points.push(current);
        for _ in 0..bucket_count {
            current -= nice_interval;
            points.push(current);
        }
        // Rounding max up can leave the walk short of min by one step.
        while current > min_d {
            current -= nice_interval;
            points.push(current);
        }
        points.reverse();

        debug!(
            "nice scale: interval={}, first={}, last={}, boundaries={}",
            nice_interval,
            points[0],
            nice_max,
            points.len()
        );

        Ok(Self {
            interval: to_f64(nice_interval)?,
            boundaries: points.into_iter().map(to_f64).collect::<Result<_>>()?,
        })
    }

    /// Distance between consecutive boundaries
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Boundaries in ascending order
    pub fn boundaries(&self) -> &[f64] {
        &self.boundaries
    }

    /// Number of buckets between the boundaries
    pub fn bucket_count(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Consume the scale and return its boundaries
    pub fn into_boundaries(self) -> Vec<f64> {
        self.boundaries
    }
}

/// Boundaries of a nice scale over `[min, max]`
///
/// ```rust
/// use latmap_histogram::generate;
///
/// let points = generate(0.0, 0.0, 5).unwrap();
/// assert_eq!(points, vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
/// ```
pub fn generate(min: f64, max: f64, bucket_count: usize) -> Result<Vec<f64>> {
    NiceScale::new(min, max, bucket_count).map(NiceScale::into_boundaries)
}

fn widen(value: Decimal) -> Result<Decimal> {
    if value > Decimal::ZERO && value < Decimal::ONE {
        let unit = Decimal::try_new(1, value.scale())
            .map_err(|e| Error::Computation(format!("cannot widen {value}: {e}")))?;
        Ok(value + unit)
    } else {
        value
            .checked_add(Decimal::ONE)
            .ok_or_else(|| Error::Computation(format!("cannot widen {value}")))
    }
}

/// Smallest power of ten strictly above `value`, so `value / p` is in `[0.1, 1)`
fn magnitude_above(value: Decimal) -> Result<Decimal> {
    let mut power = Decimal::ONE;
    while value >= power {
        power = power.checked_mul(Decimal::TEN).ok_or_else(|| {
            Error::Computation(format!("{value} exceeds decimal precision"))
        })?;
    }
    loop {
        let lower = power / Decimal::TEN;
        if lower.is_zero() || value >= lower {
            break;
        }
        power = lower;
    }
    Ok(power)
}

fn to_decimal(value: f64) -> Result<Decimal> {
    Decimal::from_str(&value.to_string())
        .map_err(|e| Error::Computation(format!("cannot represent {value} as a decimal: {e}")))
}

fn to_f64(value: Decimal) -> Result<f64> {
    value
        .normalize()
        .to_string()
        .parse::<f64>()
        .map_err(|e| Error::Computation(format!("cannot convert {value} to f64: {e}")))
}

//! Half-open intervals between two boundaries

use crate::boundary::OrderedBoundary;
use crate::error::{Error, Result};
use std::cmp::Ordering;
use std::fmt;

/// A half-open range `[low, high)` on an ordered axis
///
/// Intervals are only partially ordered: one interval is less than another
/// when it lies entirely to its left. Overlapping but unequal intervals are
/// incomparable and `partial_cmp` returns `None` for them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Interval<T> {
    low: OrderedBoundary<T>,
    high: OrderedBoundary<T>,
}

impl<T: Ord + fmt::Debug> Interval<T> {
    /// Create an interval, failing unless `low < high`
    pub fn new(low: OrderedBoundary<T>, high: OrderedBoundary<T>) -> Result<Self> {
        if low >= high {
            return Err(Error::InvalidInterval {
                low: format!("{low:?}"),
                high: format!("{high:?}"),
            });
        }
        Ok(Self { low, high })
    }
}

impl<T: Ord> Interval<T> {
    /// Check whether a boundary falls inside `[low, high)`
    pub fn contains(&self, point: &OrderedBoundary<T>) -> bool {
        *point >= self.low && *point < self.high
    }

    /// Check whether a finite value falls inside `[low, high)`
    pub fn contains_value(&self, value: &T) -> bool {
        self.low.cmp_value(value) != Ordering::Greater && self.high.cmp_value(value) == Ordering::Greater
    }
}

impl<T> Interval<T> {
    /// Lower (inclusive) boundary
    pub fn low(&self) -> &OrderedBoundary<T> {
        &self.low
    }

    /// Upper (exclusive) boundary
    pub fn high(&self) -> &OrderedBoundary<T> {
        &self.high
    }

    /// Check whether both ends are finite
    pub fn is_bounded(&self) -> bool {
        self.low.is_finite() && self.high.is_finite()
    }

    /// Render as `[low,high]`, formatting finite values with `formatter`
    pub fn display_with<F>(&self, formatter: F) -> String
    where
        F: Fn(&T) -> String,
    {
        format!(
            "[{},{}]",
            self.low.display_with(&formatter),
            self.high.display_with(&formatter)
        )
    }
}

impl<T: Ord> PartialOrd for Interval<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.high <= other.low {
            Some(Ordering::Less)
        } else if self.low >= other.high {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl<T: fmt::Display> fmt::Display for Interval<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.low, self.high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use OrderedBoundary::{Finite, NegativeInfinite, PositiveInfinite};

    #[test]
    fn test_construction_requires_low_below_high() {
        assert!(Interval::new(Finite(1), Finite(2)).is_ok());
        assert!(Interval::<i32>::new(NegativeInfinite, PositiveInfinite).is_ok());

        let err = Interval::new(Finite(2), Finite(2)).unwrap_err();
        assert!(matches!(err, Error::InvalidInterval { .. }));
        assert!(Interval::new(Finite(3), Finite(2)).is_err());
        assert!(Interval::<i32>::new(PositiveInfinite, NegativeInfinite).is_err());
        assert!(Interval::new(PositiveInfinite, Finite(0)).is_err());
    }

    #[test]
    fn test_half_open_containment() {
        let interval = Interval::new(Finite(10), Finite(20)).unwrap();
        assert!(interval.contains_value(&10));
        assert!(interval.contains_value(&19));
        assert!(!interval.contains_value(&20));
        assert!(!interval.contains_value(&9));
        assert!(interval.contains(&Finite(15)));
        assert!(!interval.contains(&PositiveInfinite));

        let lower_edge = Interval::new(NegativeInfinite, Finite(10)).unwrap();
        assert!(lower_edge.contains_value(&i32::MIN));
        assert!(lower_edge.contains(&NegativeInfinite));
        assert!(!lower_edge.contains_value(&10));

        let upper_edge = Interval::new(Finite(20), PositiveInfinite).unwrap();
        assert!(upper_edge.contains_value(&i32::MAX));
        assert!(!upper_edge.contains(&PositiveInfinite));
    }

    #[test]
    fn test_partial_ordering() {
        let a = Interval::new(NegativeInfinite, Finite(10)).unwrap();
        let b = Interval::new(Finite(10), Finite(20)).unwrap();
        let c = Interval::new(Finite(20), PositiveInfinite).unwrap();
        let overlapping = Interval::new(Finite(5), Finite(15)).unwrap();

        assert!(a < b);
        assert!(b < c);
        assert!(c > a);
        assert_eq!(b.partial_cmp(&b.clone()), Some(Ordering::Equal));
        assert_eq!(b.partial_cmp(&overlapping), None);
        assert_eq!(overlapping.partial_cmp(&a), None);
    }

    #[test]
    fn test_display() {
        let interval = Interval::new(NegativeInfinite, Finite(25)).unwrap();
        assert_eq!(interval.to_string(), "[<,25]");
        assert_eq!(interval.display_with(|v| format!("{v}ms")), "[<,25ms]");
        assert!(!interval.is_bounded());
        assert!(Interval::new(Finite(1), Finite(2)).unwrap().is_bounded());
    }
}

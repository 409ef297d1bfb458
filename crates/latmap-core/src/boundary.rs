//! Boundaries on an ordered axis, including the two unbounded ends

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A point on an ordered axis that may be infinite
///
/// Variants are declared in axis order, so the derived ordering ranks
/// `NegativeInfinite` below every finite value and `PositiveInfinite` above
/// it, and compares two finite boundaries by their wrapped values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OrderedBoundary<T> {
    /// Below every finite value
    NegativeInfinite,
    /// A concrete split point
    Finite(T),
    /// Above every finite value
    PositiveInfinite,
}

impl<T> OrderedBoundary<T> {
    /// Check whether this is a finite boundary
    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    /// Get the wrapped value of a finite boundary
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Finite(v) => Some(v),
            _ => None,
        }
    }

    /// Compare this boundary against a bare value without wrapping it
    pub fn cmp_value(&self, value: &T) -> Ordering
    where
        T: Ord,
    {
        match self {
            Self::NegativeInfinite => Ordering::Less,
            Self::Finite(v) => v.cmp(value),
            Self::PositiveInfinite => Ordering::Greater,
        }
    }

    /// Render the boundary, formatting finite values with `formatter`
    pub fn display_with<F>(&self, formatter: F) -> String
    where
        F: Fn(&T) -> String,
    {
        match self {
            Self::NegativeInfinite => "<".to_string(),
            Self::Finite(v) => formatter(v),
            Self::PositiveInfinite => ">".to_string(),
        }
    }
}

impl<T> From<T> for OrderedBoundary<T> {
    fn from(value: T) -> Self {
        Self::Finite(value)
    }
}

impl<T: fmt::Display> fmt::Display for OrderedBoundary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeInfinite => f.write_str("<"),
            Self::Finite(v) => write!(f, "{v}"),
            Self::PositiveInfinite => f.write_str(">"),
        }
    }
}

/// A boundary together with its rank in the owning partition
///
/// Only [`AxisPartition`](crate::AxisPartition) creates these, so the index
/// is fixed once the partition is built. Equality and ordering look at the
/// boundary alone.
#[derive(Debug, Clone)]
pub struct IndexedBoundary<T> {
    boundary: OrderedBoundary<T>,
    index: usize,
}

impl<T> IndexedBoundary<T> {
    pub(crate) fn new(boundary: OrderedBoundary<T>, index: usize) -> Self {
        Self { boundary, index }
    }

    /// The underlying boundary
    pub fn boundary(&self) -> &OrderedBoundary<T> {
        &self.boundary
    }

    /// Rank of this boundary in the partition, starting at 0 for negative infinity
    pub fn index(&self) -> usize {
        self.index
    }

    /// Render the boundary, formatting finite values with `formatter`
    pub fn display_with<F>(&self, formatter: F) -> String
    where
        F: Fn(&T) -> String,
    {
        self.boundary.display_with(formatter)
    }
}

impl<T: PartialEq> PartialEq for IndexedBoundary<T> {
    fn eq(&self, other: &Self) -> bool {
        self.boundary == other.boundary
    }
}

impl<T: Eq> Eq for IndexedBoundary<T> {}

impl<T: Hash> Hash for IndexedBoundary<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.boundary.hash(state);
    }
}

impl<T: Ord> PartialOrd for IndexedBoundary<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for IndexedBoundary<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.boundary.cmp(&other.boundary)
    }
}

impl<T: fmt::Display> fmt::Display for IndexedBoundary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.boundary.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_infinite_ordering() {
        let neg = OrderedBoundary::<i64>::NegativeInfinite;
        let pos = OrderedBoundary::<i64>::PositiveInfinite;
        let small = OrderedBoundary::Finite(i64::MIN);
        let large = OrderedBoundary::Finite(i64::MAX);

        assert!(neg < small);
        assert!(small < large);
        assert!(large < pos);
        assert!(neg < pos);
        assert_eq!(neg, OrderedBoundary::NegativeInfinite);
    }

    #[test]
    fn test_finite_compare_by_value() {
        assert!(OrderedBoundary::Finite(3) < OrderedBoundary::Finite(4));
        assert_eq!(OrderedBoundary::Finite(7).cmp(&OrderedBoundary::Finite(7)), Ordering::Equal);
        assert_ne!(OrderedBoundary::Finite(7), OrderedBoundary::Finite(8));
    }

    #[test]
    fn test_cmp_value() {
        assert_eq!(OrderedBoundary::NegativeInfinite.cmp_value(&i32::MIN), Ordering::Less);
        assert_eq!(OrderedBoundary::PositiveInfinite.cmp_value(&i32::MAX), Ordering::Greater);
        assert_eq!(OrderedBoundary::Finite(5).cmp_value(&5), Ordering::Equal);
        assert_eq!(OrderedBoundary::Finite(5).cmp_value(&6), Ordering::Less);
    }

    #[test]
    fn test_display() {
        assert_eq!(OrderedBoundary::<u32>::NegativeInfinite.to_string(), "<");
        assert_eq!(OrderedBoundary::<u32>::PositiveInfinite.to_string(), ">");
        assert_eq!(OrderedBoundary::Finite(42u32).to_string(), "42");
        assert_eq!(
            OrderedBoundary::Finite(1.5f64).display_with(|v| format!("{v:.2}ms")),
            "1.50ms"
        );
        assert_eq!(OrderedBoundary::<f64>::PositiveInfinite.display_with(|v| v.to_string()), ">");
    }

    #[test]
    fn test_accessors() {
        let b = OrderedBoundary::from(10u8);
        assert!(b.is_finite());
        assert_eq!(b.value(), Some(&10));
        assert_eq!(OrderedBoundary::<u8>::NegativeInfinite.value(), None);

        let indexed = IndexedBoundary::new(b, 3);
        assert_eq!(indexed.index(), 3);
        assert_eq!(indexed.boundary(), &OrderedBoundary::Finite(10));
    }
}

//! Utility functions for working with sample slices

use crate::error::{Error, Result};

/// Sort data and return a new vector
///
/// NaN values sort after every other value.
///
/// # Examples
///
/// ```rust
/// use latmap_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.total_cmp(b),
    });
    sorted
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// ```rust
/// use latmap_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Smallest and largest value of a non-empty slice
pub fn min_max(data: &[f64]) -> Result<(f64, f64)> {
    let (first, rest) = data
        .split_first()
        .ok_or_else(|| Error::empty_input("min_max"))?;
    Ok(rest
        .iter()
        .fold((*first, *first), |(lo, hi), &x| (lo.min(x), hi.max(x))))
}

/// Fail with [`Error::non_finite`] if any value is NaN or infinite
pub fn ensure_finite(data: &[f64], context: &str) -> Result<()> {
    if data.iter().all(|x| x.is_finite()) {
        Ok(())
    } else {
        Err(Error::non_finite(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_basic() {
        let data = vec![3.0, -1.0, 0.0, -5.0, 2.0];
        assert_eq!(sorted(&data), vec![-5.0, -1.0, 0.0, 2.0, 3.0]);
        assert_eq!(data[0], 3.0);
    }

    #[test]
    fn test_sorted_with_nan() {
        let data = vec![3.0, f64::NAN, 1.0, 2.0];
        let sorted_data = sorted(&data);
        assert_eq!(&sorted_data[..3], &[1.0, 2.0, 3.0]);
        assert!(sorted_data[3].is_nan());
    }

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[-10.0, 10.0]), 0.0);
        assert!((mean(&[1.1, 2.2, 3.3, 4.4, 5.5]) - 3.3).abs() < 1e-10);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[4.0, -2.0, 9.5, 0.0]).unwrap(), (-2.0, 9.5));
        assert_eq!(min_max(&[7.0]).unwrap(), (7.0, 7.0));
        assert!(matches!(min_max(&[]), Err(Error::InsufficientData { .. })));
    }

    #[test]
    fn test_ensure_finite() {
        assert!(ensure_finite(&[1.0, 2.0], "data").is_ok());
        assert!(ensure_finite(&[], "data").is_ok());
        assert!(ensure_finite(&[1.0, f64::NAN], "data").is_err());
        assert!(ensure_finite(&[f64::INFINITY], "data").is_err());
    }
}

//! Error types for latency binning and analysis
//!
//! Provides a unified error type for all latmap crates.

use thiserror::Error;

/// Core error type for binning, aggregation and summary operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A range whose lower end lies above its upper end, or outside the allowed domain
    #[error("Invalid range: min = <{min}>, max = <{max}>")]
    InvalidRange { min: String, max: String },

    /// An interval whose low boundary is not strictly below its high boundary
    #[error("Invalid interval: low = <{low}>, high = <{high}>")]
    InvalidInterval { low: String, high: String },

    /// Insufficient data for the requested operation
    #[error("Insufficient data for {operation}: expected at least {expected} samples, got {actual}")]
    InsufficientData {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// Percentile key that cannot be computed for this sample size
    #[error("Undefined percentile: n={n}, p={p}")]
    UndefinedPercentile { n: usize, p: f64 },

    /// Color palette that violates its construction invariants
    #[error("Invalid color scheme: {0}")]
    InvalidPalette(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::InsufficientData {
            operation: operation.to_string(),
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a range with `min > max` or values outside the domain
    pub fn invalid_range(min: impl ToString, max: impl ToString) -> Self {
        Self::InvalidRange {
            min: min.to_string(),
            max: max.to_string(),
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}

//! Error types for survey statistics
//!
//! Provides a unified error type for all docs-survey crates.

use thiserror::Error;

/// Core error type for survey statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter lies outside its documented numeric domain
    #[error("Domain error: {0}")]
    Domain(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an empty sample
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires a non-empty sample"))
    }

    /// Create an error for a percentile outside [0, 100]
    pub fn invalid_percentile(p: f64) -> Self {
        Self::Domain(format!("Percentile {p} must be in [0, 100]"))
    }

    /// Create an error for a resample count below one
    pub fn invalid_resamples(n: usize) -> Self {
        Self::Domain(format!("Resample count {n} must be at least 1"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Whether this error is a domain violation
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::Domain(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::Domain("alpha must be positive".to_string());
        assert_eq!(err.to_string(), "Domain error: alpha must be positive");

        let err = Error::InvalidInput("data contains duplicates".to_string());
        assert_eq!(err.to_string(), "Invalid input: data contains duplicates");

        let err = Error::InsufficientData { expected: 10, actual: 5 };
        assert_eq!(
            err.to_string(),
            "Insufficient data: expected at least 10 samples, got 5"
        );

        let err = Error::Computation("convergence failed".to_string());
        assert_eq!(err.to_string(), "Computation error: convergence failed");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_input("bootstrap mean");
        assert_eq!(
            err.to_string(),
            "Invalid input: bootstrap mean requires a non-empty sample"
        );
        assert!(!err.is_domain());

        let err = Error::invalid_percentile(150.0);
        assert_eq!(err.to_string(), "Domain error: Percentile 150 must be in [0, 100]");
        assert!(err.is_domain());

        let err = Error::invalid_percentile(-0.5);
        assert_eq!(err.to_string(), "Domain error: Percentile -0.5 must be in [0, 100]");

        let err = Error::invalid_resamples(0);
        assert_eq!(err.to_string(), "Domain error: Resample count 0 must be at least 1");
        assert!(err.is_domain());

        let err = Error::non_finite("input data");
        assert_eq!(
            err.to_string(),
            "Computation error: input data contains NaN or infinite values"
        );
    }

    #[test]
    fn test_error_patterns() {
        fn validate_percentile(p: f64) -> Result<()> {
            if !(0.0..=100.0).contains(&p) {
                return Err(Error::invalid_percentile(p));
            }
            Ok(())
        }

        assert!(validate_percentile(50.0).is_ok());
        assert!(validate_percentile(100.1).is_err());
        assert!(validate_percentile(f64::NAN).is_err());
    }
}

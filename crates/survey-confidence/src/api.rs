//! High-level API for bootstrap confidence intervals
//!
//! This module provides the single-call entry points used by the survey
//! report: percentiles of the bootstrapped mean, and the symmetric interval
//! built from them.

use crate::{bootstrap::BootstrapMean, ConfidenceInterval, ConfidenceLevel};
use rand::Rng;
use survey_core::Result;

/// Default number of bootstrap resamples
pub const DEFAULT_RESAMPLES: usize = 1000;

/// Fast number of resamples for quick estimates
pub const FAST_RESAMPLES: usize = 500;

/// High-precision number of resamples
pub const HIGH_PRECISION_RESAMPLES: usize = 10000;

/// Bootstrap the mean of `sample` and read off the requested percentiles
///
/// # Arguments
/// * `sample` - Observations with missing values already removed
/// * `percentiles` - Percentiles on the `[0, 100]` scale, returned in order
/// * `n_boots` - Number of resamples, [`DEFAULT_RESAMPLES`] when `None`
/// * `rng` - Randomness source; seed it for reproducible output
///
/// # Example
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use survey_confidence::api::bootstrap_mean;
///
/// let diffs = vec![-20.0, -10.0, 0.0, 5.0, -15.0, -30.0];
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let bounds = bootstrap_mean(&diffs, &[2.5, 97.5], None, &mut rng).unwrap();
/// assert_eq!(bounds.len(), 2);
/// assert!(bounds[0] <= bounds[1]);
/// ```
pub fn bootstrap_mean<R: Rng + ?Sized>(
    sample: &[f64],
    percentiles: &[f64],
    n_boots: Option<usize>,
    rng: &mut R,
) -> Result<Vec<f64>> {
    BootstrapMean::new()
        .with_resamples(n_boots.unwrap_or(DEFAULT_RESAMPLES))
        .estimate(sample, percentiles, rng)
}

/// Percentile bootstrap confidence interval for the mean
///
/// `confidence_level` must lie in (0, 1); 0.95 asks for the 2.5th and 97.5th
/// percentiles of the resampled means.
pub fn bootstrap_mean_ci<R: Rng + ?Sized>(
    sample: &[f64],
    confidence_level: f64,
    n_boots: Option<usize>,
    rng: &mut R,
) -> Result<ConfidenceInterval> {
    let level = ConfidenceLevel::new(confidence_level)?;
    BootstrapMean::new()
        .with_resamples(n_boots.unwrap_or(DEFAULT_RESAMPLES))
        .confidence_interval(sample, level, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_default_resamples_match_explicit() {
        let sample = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];

        let implicit = bootstrap_mean(&sample, &[5.0, 95.0], None, &mut StdRng::seed_from_u64(11)).unwrap();
        let explicit = bootstrap_mean(
            &sample,
            &[5.0, 95.0],
            Some(DEFAULT_RESAMPLES),
            &mut StdRng::seed_from_u64(11),
        )
        .unwrap();
        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_ci_matches_percentiles() {
        let sample = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];

        let ci = bootstrap_mean_ci(&sample, 0.95, Some(400), &mut StdRng::seed_from_u64(5)).unwrap();
        let bounds = bootstrap_mean(&sample, &[2.5, 97.5], Some(400), &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!([ci.lower, ci.upper], [bounds[0], bounds[1]]);
    }

    #[test]
    fn test_ci_rejects_bad_level() {
        let err = bootstrap_mean_ci(&[1.0, 2.0], 1.0, None, &mut StdRng::seed_from_u64(0)).unwrap_err();
        assert!(err.is_domain());
    }
}

//! Percentile bootstrap for the sample mean
//!
//! Each resampling round draws `n` indices uniformly with replacement from the
//! sample and keeps only the mean of the drawn values, so memory stays at one
//! `f64` per round rather than a full `n × resamples` table.
//!
//! Rounds get their own RNG stream derived from a single base seed drawn from
//! the caller's generator. The distribution of means is therefore identical
//! whether rounds run sequentially or, with the `parallel` feature, on rayon.

use crate::{api::DEFAULT_RESAMPLES, ConfidenceInterval, ConfidenceLevel};
use rand::{
    distributions::{Distribution, Uniform},
    rngs::StdRng,
    Rng, SeedableRng,
};
use survey_core::{check_percentile, percentiles_in_place, utils::mean, Error, Result};
use tracing::{debug, instrument};

/// Bootstrap estimator for percentiles of the resampled-mean distribution
///
/// # Example
///
/// ```rust
/// use rand::{rngs::StdRng, SeedableRng};
/// use survey_confidence::BootstrapMean;
///
/// let sample = [10.0, 20.0, 30.0, 40.0, 50.0];
/// let mut rng = StdRng::seed_from_u64(42);
///
/// let bounds = BootstrapMean::new()
///     .with_resamples(500)
///     .estimate(&sample, &[2.5, 97.5], &mut rng)
///     .unwrap();
/// assert!(bounds[0] < 30.0 && 30.0 < bounds[1]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BootstrapMean {
    n_resamples: usize,
}

impl BootstrapMean {
    /// Create an estimator with the default number of resamples
    pub fn new() -> Self {
        Self {
            n_resamples: DEFAULT_RESAMPLES,
        }
    }

    /// Set the number of bootstrap resamples
    ///
    /// Zero is accepted here and reported as a domain error by the
    /// estimation methods.
    pub fn with_resamples(mut self, n_resamples: usize) -> Self {
        self.n_resamples = n_resamples;
        self
    }

    /// Number of bootstrap resamples
    pub fn n_resamples(&self) -> usize {
        self.n_resamples
    }

    /// Percentiles of the resampled-mean distribution
    ///
    /// Returns one value per entry of `percentiles`, in request order.
    /// Percentiles are on the `[0, 100]` scale and are interpolated linearly
    /// between ranked means.
    #[instrument(
        skip(self, sample, percentiles, rng),
        fields(n = sample.len(), n_percentiles = percentiles.len(), n_resamples = self.n_resamples)
    )]
    pub fn estimate<R: Rng + ?Sized>(
        &self,
        sample: &[f64],
        percentiles: &[f64],
        rng: &mut R,
    ) -> Result<Vec<f64>> {
        self.validate(sample, percentiles)?;

        let mut means = self.draw_means(sample, rng.gen());
        let result = percentiles_in_place(&mut means, percentiles)?;

        debug!(?result, "Bootstrap percentiles computed");
        Ok(result)
    }

    /// Symmetric percentile interval around the sample mean
    pub fn confidence_interval<R: Rng + ?Sized>(
        &self,
        sample: &[f64],
        level: ConfidenceLevel,
        rng: &mut R,
    ) -> Result<ConfidenceInterval> {
        let [lower, upper] = level.percentiles();
        let bounds = self.estimate(sample, &[lower, upper], rng)?;

        Ok(ConfidenceInterval::new(
            bounds[0],
            bounds[1],
            mean(sample),
            level.value(),
        ))
    }

    /// The raw resampled-mean distribution, unsorted, one entry per round
    pub fn resampled_means<R: Rng + ?Sized>(&self, sample: &[f64], rng: &mut R) -> Result<Vec<f64>> {
        self.check_shape(sample)?;
        Ok(self.draw_means(sample, rng.gen()))
    }

    fn validate(&self, sample: &[f64], percentiles: &[f64]) -> Result<()> {
        self.check_shape(sample)?;
        for &p in percentiles {
            check_percentile(p)?;
        }
        if percentiles.is_empty() {
            return Err(Error::InvalidInput("No percentiles requested".to_string()));
        }
        Ok(())
    }

    fn check_shape(&self, sample: &[f64]) -> Result<()> {
        if self.n_resamples < 1 {
            return Err(Error::invalid_resamples(self.n_resamples));
        }
        if sample.is_empty() {
            return Err(Error::empty_input("bootstrap mean"));
        }
        Ok(())
    }

    #[cfg(not(feature = "parallel"))]
    fn draw_means(&self, sample: &[f64], base_seed: u64) -> Vec<f64> {
        debug!("Drawing {} sequential resamples", self.n_resamples);
        (0..self.n_resamples)
            .map(|round| round_mean(sample, base_seed, round))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn draw_means(&self, sample: &[f64], base_seed: u64) -> Vec<f64> {
        use rayon::prelude::*;

        debug!("Drawing {} parallel resamples", self.n_resamples);
        (0..self.n_resamples)
            .into_par_iter()
            .map(|round| round_mean(sample, base_seed, round))
            .collect()
    }
}

impl Default for BootstrapMean {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean of one resample, drawn from the stream for `round`
fn round_mean(sample: &[f64], base_seed: u64, round: usize) -> f64 {
    let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(round as u64));
    resample_mean(sample, &mut rng)
}

/// Mean of `sample.len()` values drawn with replacement
fn resample_mean<R: Rng + ?Sized>(sample: &[f64], rng: &mut R) -> f64 {
    let n = sample.len();
    let index = Uniform::new(0, n);
    let sum: f64 = (0..n).map(|_| sample[index.sample(rng)]).sum();
    sum / n as f64
}

//! Bootstrap confidence intervals for survey means
//!
//! This crate estimates the sampling uncertainty of a mean by resampling the
//! observations with replacement, averaging each resample, and reading
//! percentiles off the resulting distribution of means.
//!
//! The randomness source is always passed in by the caller. Seeding it makes
//! every result reproducible.
//!
//! # Examples
//!
//! ## Single-call percentiles
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use survey_confidence::bootstrap_mean;
//!
//! let sample = vec![10.0, 20.0, 30.0, 40.0, 50.0];
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let bounds = bootstrap_mean(&sample, &[2.5, 97.5], Some(500), &mut rng).unwrap();
//! println!("95% CI for the mean: [{:.2}, {:.2}]", bounds[0], bounds[1]);
//! ```
//!
//! ## Confidence interval with a point estimate
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use survey_confidence::{BootstrapMean, ConfidenceLevel};
//!
//! let sample = vec![4.0, 2.0, 5.0, 3.0, 3.0, 4.0];
//! let mut rng = StdRng::seed_from_u64(1);
//!
//! let ci = BootstrapMean::new()
//!     .confidence_interval(&sample, ConfidenceLevel::NINETY, &mut rng)
//!     .unwrap();
//! assert!(ci.contains(ci.estimate));
//! ```

pub mod api;
mod bootstrap;
mod types;

// Re-exports
pub use api::{
    bootstrap_mean, bootstrap_mean_ci, DEFAULT_RESAMPLES, FAST_RESAMPLES,
    HIGH_PRECISION_RESAMPLES,
};
pub use bootstrap::BootstrapMean;
pub use survey_core::{Error, Result};
pub use types::{ConfidenceInterval, ConfidenceLevel};

//! Bootstrap confidence intervals and figures for survey analysis
//!
//! This crate re-exports the workspace members:
//!
//! - [`common`]: errors, percentiles and small numeric helpers
//! - [`confidence`]: the bootstrap estimator for the mean
//! - [`histogram`]: histograms over explicit bin edges
//! - [`report`]: survey tables, figures and the report pipeline
//!
//! # Example
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use survey_stats::confidence::bootstrap_mean;
//!
//! let sample = [10.0, 20.0, 30.0, 40.0, 50.0];
//! let mut rng = StdRng::seed_from_u64(42);
//! let bounds = bootstrap_mean(&sample, &[2.5, 97.5], Some(500), &mut rng)?;
//! assert!(bounds[0] < 30.0 && 30.0 < bounds[1]);
//! # Ok::<(), survey_stats::Error>(())
//! ```

pub use survey_confidence as confidence;
pub use survey_core as common;
pub use survey_histogram as histogram;
pub use survey_report as report;

pub use survey_confidence::{bootstrap_mean, bootstrap_mean_ci, BootstrapMean, ConfidenceInterval};
pub use survey_core::{Error, Result};

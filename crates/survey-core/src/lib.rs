//! Core types and numeric helpers for survey statistics
//!
//! This crate holds the pieces shared by every docs-survey crate: the unified
//! error type, slice utilities (mean, standard deviation, NaN-last sorting) and
//! the linear-interpolation percentile used to read confidence bounds off a
//! bootstrap distribution.
//!
//! # Example
//!
//! ```rust
//! use survey_core::{percentile::percentiles_of, utils::mean};
//!
//! let data = vec![10.0, 20.0, 30.0, 40.0, 50.0];
//! assert_eq!(mean(&data), 30.0);
//!
//! let bounds = percentiles_of(&data, &[0.0, 50.0, 100.0]).unwrap();
//! assert_eq!(bounds, vec![10.0, 30.0, 50.0]);
//! ```

pub mod error;
pub mod percentile;
pub mod utils;

// Re-export core types
pub use error::{Error, Result};
pub use percentile::{check_percentile, percentile_of_sorted, percentiles_in_place, percentiles_of};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::percentile::{percentiles_in_place, percentiles_of};
    pub use crate::utils::{mean, standard_error, std_dev};
    pub use crate::Result;
}

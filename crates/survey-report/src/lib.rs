//! Figures for the SciPy documentation survey
//!
//! This crate turns the survey's CSV tables into chart-ready [`Figure`]s:
//! time spent on documentation, open-source activity counts, and enjoyment
//! versus perceived credit per task. Every mean shown with an interval uses
//! the bootstrap estimator from `survey-confidence`. Figures are written as
//! JSON descriptions and drawn to SVG with `plotters`.
//!
//! # Example
//!
//! ```rust,no_run
//! use survey_report::{Report, ReportConfig};
//!
//! let config = ReportConfig::default().with_seed(42);
//! let report = Report::from_config(&config)?;
//! report.write_to(&config.output_dir)?;
//! # Ok::<(), survey_report::Error>(())
//! ```

pub mod config;
pub mod contribs;
pub mod credit;
pub mod dataset;
pub mod docs;
mod error;
pub mod figures;
pub mod render;
pub mod report;

pub use config::ReportConfig;
pub use dataset::Table;
pub use error::{Error, Result};
pub use figures::{Axes, Figure, Layer};
pub use render::render_svg;
pub use report::Report;

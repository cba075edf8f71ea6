//! Histogram construction for survey responses
//!
//! [`EdgesBuilder`] bins data over explicit edges: half-open bins with a
//! closed last bin, out-of-range and NaN values dropped. The report uses it
//! for the docs-time difference chart, with edges from [`arange_edges`].
//!
//! # Example
//!
//! ```rust
//! use survey_histogram::{arange_edges, EdgesBuilder, HistogramBuilder};
//!
//! let diffs = vec![-20.0, -10.0, -10.0, 0.0, 15.0];
//! let builder = EdgesBuilder::new(arange_edges(-50.0, 50.0, 10.0).unwrap()).unwrap();
//! let histogram = builder.build(&diffs).unwrap();
//!
//! for bin in histogram.bins() {
//!     println!("  [{:.1}, {:.1}): count={}", bin.left, bin.right, bin.count);
//! }
//! ```

pub mod builders;
pub mod traits;
pub mod types;

pub use builders::{arange_edges, EdgesBuilder};
pub use traits::HistogramBuilder;
pub use types::{Histogram, HistogramBin};

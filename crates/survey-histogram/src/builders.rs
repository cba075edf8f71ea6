//! Histogram builders

use crate::{
    traits::HistogramBuilder,
    types::{Histogram, HistogramBin},
};
use survey_core::{Error, Result};
use tracing::debug;

/// Histogram over explicit bin edges
///
/// Bins are half-open `[e_i, e_{i+1})` except the last, which also includes
/// its right edge. Values outside the edges and NaN values are not counted.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgesBuilder {
    edges: Vec<f64>,
}

impl EdgesBuilder {
    /// Create a builder from strictly increasing, finite edges
    pub fn new(edges: Vec<f64>) -> Result<Self> {
        if edges.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: edges.len(),
            });
        }
        if edges.iter().any(|e| !e.is_finite()) {
            return Err(Error::non_finite("histogram edges"));
        }
        if edges.windows(2).any(|w| w[0] >= w[1]) {
            return Err(Error::InvalidInput(
                "histogram edges must be strictly increasing".to_string(),
            ));
        }
        Ok(Self { edges })
    }

    /// The bin edges
    pub fn edges(&self) -> &[f64] {
        &self.edges
    }

    fn bin_index(&self, value: f64) -> Option<usize> {
        let first = self.edges[0];
        let last = self.edges[self.edges.len() - 1];
        if !(first..=last).contains(&value) {
            return None;
        }
        if value == last {
            return Some(self.edges.len() - 2);
        }
        // Number of edges <= value, minus one, is the bin holding value
        Some(self.edges.partition_point(|&e| e <= value) - 1)
    }
}

impl HistogramBuilder for EdgesBuilder {
    fn build(&self, sample: &[f64]) -> Result<Histogram> {
        let n_bins = self.edges.len() - 1;
        let mut counts = vec![0usize; n_bins];
        let mut excluded = 0;

        for &value in sample {
            match self.bin_index(value) {
                Some(idx) => counts[idx] += 1,
                None => excluded += 1,
            }
        }

        let total: usize = counts.iter().sum();
        if excluded > 0 {
            debug!("{excluded} values fell outside the histogram edges");
        }

        let bins = self
            .edges
            .windows(2)
            .zip(counts)
            .map(|(w, count)| HistogramBin::new(w[0], w[1], count))
            .collect();

        Ok(Histogram::new(bins, total, excluded))
    }
}

/// Evenly spaced values in `[start, stop)`
///
/// Mirrors the familiar `arange`: the stop value itself is excluded.
///
/// ```rust
/// use survey_histogram::arange_edges;
///
/// let edges = arange_edges(-50.0, 50.0, 10.0).unwrap();
/// assert_eq!(edges.first(), Some(&-50.0));
/// assert_eq!(edges.last(), Some(&40.0));
/// assert_eq!(edges.len(), 10);
/// ```
pub fn arange_edges(start: f64, stop: f64, step: f64) -> Result<Vec<f64>> {
    if !(start.is_finite() && stop.is_finite() && step.is_finite()) {
        return Err(Error::non_finite("arange bounds"));
    }
    if step <= 0.0 {
        return Err(Error::Domain(format!("arange step {step} must be positive")));
    }
    let n = ((stop - start) / step).ceil().max(0.0) as usize;
    Ok((0..n).map(|i| start + i as f64 * step).collect())
}

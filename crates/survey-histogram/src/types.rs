//! Core types for histogram representation

use std::fmt;

/// A single bin in a histogram
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBin {
    /// Left edge of the bin (inclusive)
    pub left: f64,
    /// Right edge of the bin (exclusive, except for the last bin)
    pub right: f64,
    /// Number of values in this bin
    pub count: usize,
}

impl HistogramBin {
    pub fn new(left: f64, right: f64, count: usize) -> Self {
        Self { left, right, count }
    }
}

impl fmt::Display for HistogramBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.3}, {:.3}): count={}",
            self.left, self.right, self.count
        )
    }
}

/// A histogram representation of data
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// The bins that make up the histogram
    bins: Vec<HistogramBin>,
    /// Number of data points that fell inside the bins
    total_count: usize,
    /// Number of data points outside the edges (or NaN)
    excluded: usize,
}

impl Histogram {
    /// Create a new histogram
    pub fn new(bins: Vec<HistogramBin>, total_count: usize, excluded: usize) -> Self {
        Self {
            bins,
            total_count,
            excluded,
        }
    }

    /// Get the bins
    pub fn bins(&self) -> &[HistogramBin] {
        &self.bins
    }

    /// Get the number of bins
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    /// Check if the histogram is empty
    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Get the count of binned data points
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Number of values that were not binned
    pub fn excluded(&self) -> usize {
        self.excluded
    }

    /// Get the maximum count in any bin
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|bin| bin.count).max().unwrap_or(0)
    }

    /// Get counts as a vector
    pub fn counts(&self) -> Vec<usize> {
        self.bins.iter().map(|bin| bin.count).collect()
    }

    /// Left edges of every bin
    pub fn left_edges(&self) -> Vec<f64> {
        self.bins.iter().map(|bin| bin.left).collect()
    }

    /// Get bin edges (including rightmost edge)
    pub fn edges(&self) -> Vec<f64> {
        let mut edges = self.left_edges();
        if let Some(last) = self.bins.last() {
            edges.push(last.right);
        }
        edges
    }
}

impl fmt::Display for Histogram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edges = self.edges();
        write!(
            f,
            "Histogram({} bins, n={}, range=[{:.3}, {:.3}])",
            self.len(),
            self.total_count,
            edges.first().copied().unwrap_or(0.0),
            edges.last().copied().unwrap_or(0.0)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_histogram_bin() {
        let bin = HistogramBin::new(0.0, 1.0, 5);
        assert_eq!(bin.to_string(), "[0.000, 1.000): count=5");
    }

    #[test]
    fn test_edges_and_max_count() {
        let hist = Histogram::new(
            vec![HistogramBin::new(0.0, 1.0, 1), HistogramBin::new(1.0, 2.0, 3)],
            4,
            0,
        );
        assert_eq!(hist.edges(), vec![0.0, 1.0, 2.0]);
        assert_eq!(hist.left_edges(), vec![0.0, 1.0]);
        assert_eq!(hist.counts(), vec![1, 3]);
        assert_eq!(hist.max_count(), 3);
        assert_eq!(hist.to_string(), "Histogram(2 bins, n=4, range=[0.000, 2.000])");
    }
}

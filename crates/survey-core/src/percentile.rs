//! Empirical percentiles with linear interpolation
//!
//! Percentiles are expressed on the `[0, 100]` scale. The value at percentile
//! `p` of `n` sorted values sits at rank `p / 100 * (n - 1)`; fractional
//! ranks interpolate linearly between the neighbouring order statistics.
//! This matches the "linear" method used by most numerical libraries.

use crate::{utils::sort_nan_last, Error, Result};

/// Validate that a percentile lies in `[0, 100]`
///
/// NaN is rejected.
pub fn check_percentile(p: f64) -> Result<()> {
    if (0.0..=100.0).contains(&p) {
        Ok(())
    } else {
        Err(Error::invalid_percentile(p))
    }
}

/// Percentile of already sorted data
///
/// # Examples
///
/// ```rust
/// use survey_core::percentile::percentile_of_sorted;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(percentile_of_sorted(&sorted, 50.0).unwrap(), 2.5);
/// assert_eq!(percentile_of_sorted(&sorted, 100.0).unwrap(), 4.0);
/// ```
pub fn percentile_of_sorted(sorted: &[f64], p: f64) -> Result<f64> {
    check_percentile(p)?;
    if sorted.is_empty() {
        return Err(Error::empty_input("percentile"));
    }

    let last = sorted.len() - 1;
    let rank = p / 100.0 * last as f64;
    let lo = (rank.floor() as usize).min(last);
    let hi = (rank.ceil() as usize).min(last);
    let fraction = rank - lo as f64;

    if lo == hi {
        return Ok(sorted[lo]);
    }
    // Rounding can overshoot the upper neighbour by an ulp.
    let value = sorted[lo] + (sorted[hi] - sorted[lo]) * fraction;
    Ok(value.max(sorted[lo]).min(sorted[hi]))
}

/// Percentiles of unsorted data, one output per requested percentile
///
/// All percentiles are validated before any work is done. The input is
/// copied, never reordered in place.
pub fn percentiles_of(values: &[f64], percentiles: &[f64]) -> Result<Vec<f64>> {
    for &p in percentiles {
        check_percentile(p)?;
    }
    if values.is_empty() {
        return Err(Error::empty_input("percentile"));
    }

    let mut sorted = values.to_vec();
    sort_nan_last(&mut sorted);
    percentiles_of_sorted_unchecked(&sorted, percentiles)
}

/// Percentiles of data that the caller has already sorted in place
pub(crate) fn percentiles_of_sorted_unchecked(
    sorted: &[f64],
    percentiles: &[f64],
) -> Result<Vec<f64>> {
    percentiles
        .iter()
        .map(|&p| percentile_of_sorted(sorted, p))
        .collect()
}

/// Sort `values` in place and read off the requested percentiles
///
/// Useful when the caller owns a scratch buffer that may be reordered.
pub fn percentiles_in_place(values: &mut [f64], percentiles: &[f64]) -> Result<Vec<f64>> {
    for &p in percentiles {
        check_percentile(p)?;
    }
    if values.is_empty() {
        return Err(Error::empty_input("percentile"));
    }
    sort_nan_last(values);
    percentiles_of_sorted_unchecked(values, percentiles)
}

//! Utility functions for working with data slices

/// Sort a slice in place, NaN values last
///
/// # Examples
///
/// ```rust
/// use survey_core::utils::sort_nan_last;
///
/// let mut data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// sort_nan_last(&mut data);
/// assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sort_nan_last(data: &mut [f64]) {
    data.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => a.total_cmp(b),
    });
}

/// Calculate the mean of a slice
///
/// Returns 0.0 for empty slices.
///
/// # Examples
///
/// ```rust
/// use survey_core::utils::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
/// assert_eq!(mean(&[]), 0.0);
/// ```
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Calculate the sample standard deviation
///
/// Returns 0.0 for slices with less than 2 elements.
///
/// # Examples
///
/// ```rust
/// use survey_core::utils::std_dev;
///
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let sd = std_dev(&data);
/// assert!((sd - 1.58113883).abs() < 1e-6);
/// ```
pub fn std_dev(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    let m = mean(data);
    let variance: f64 = data
        .iter()
        .map(|&x| {
            let diff = x - m;
            diff * diff
        })
        .sum::<f64>()
        / (data.len() - 1) as f64;
    variance.sqrt()
}

/// Standard error of the mean (`std_dev / sqrt(n)`)
pub fn standard_error(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    std_dev(data) / (data.len() as f64).sqrt()
}

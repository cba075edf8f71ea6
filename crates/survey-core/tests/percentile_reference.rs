//! Percentiles against hand-checked linear-interpolation values

use approx::assert_relative_eq;
use survey_core::{percentile_of_sorted, percentiles_in_place, percentiles_of, Error};

#[test]
fn test_reference_values() {
    let cases: &[(&[f64], f64, f64)] = &[
        (&[1.0, 2.0, 3.0, 4.0], 25.0, 1.75),
        (&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0], 90.0, 9.1),
        (&[10.0, 20.0, 30.0, 40.0, 50.0], 2.5, 11.0),
        (&[10.0, 20.0, 30.0, 40.0, 50.0], 97.5, 49.0),
        (&[3.0, 1.0, 2.0], 50.0, 2.0),
    ];

    for &(data, p, expected) in cases {
        let got = percentiles_of(data, &[p]).unwrap();
        assert_relative_eq!(got[0], expected, epsilon = 1e-12);
    }
}

#[test]
fn test_extremes_are_min_and_max() {
    let data = [4.0, -2.0, 9.5, 0.0];
    assert_eq!(percentiles_of(&data, &[0.0, 100.0]).unwrap(), vec![-2.0, 9.5]);
}

#[test]
fn test_in_place_sorts_buffer() {
    let mut data = vec![5.0, 1.0, 4.0, 2.0, 3.0];
    let values = percentiles_in_place(&mut data, &[50.0]).unwrap();
    assert_eq!(values, vec![3.0]);
    assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
}

#[test]
fn test_single_value() {
    assert_eq!(percentile_of_sorted(&[7.0], 33.0).unwrap(), 7.0);
}

#[test]
fn test_errors() {
    assert!(matches!(percentiles_of(&[], &[50.0]), Err(Error::InvalidInput(_))));
    assert!(matches!(percentiles_of(&[1.0], &[-0.5]), Err(Error::Domain(_))));
    assert!(matches!(percentiles_of(&[1.0], &[f64::NAN]), Err(Error::Domain(_))));
}

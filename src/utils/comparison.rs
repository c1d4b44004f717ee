//! Signal comparison utilities.
//!
//! These helpers compare filtered output against reference signals; the
//! filters themselves never call them.

use crate::{FilterError, FilterResult};
use num_traits::Float;

/// Absolute per-sample tolerance used by [`is_almost_equal`].
pub const TOLERANCE: f64 = 1e-10;

/// Returns true if both signals have the same length and every pair of
/// samples differs by no more than [`TOLERANCE`].
///
/// # Examples
/// ```
/// use sos_filters::is_almost_equal;
///
/// assert!(is_almost_equal(&[1.0, 2.0], &[1.0, 2.0 + 1e-12]));
/// assert!(!is_almost_equal(&[1.0, 2.0], &[1.0, 2.001]));
/// assert!(!is_almost_equal(&[1.0], &[1.0, 1.0]));
/// ```
pub fn is_almost_equal(a: &[f64], b: &[f64]) -> bool {
    is_almost_equal_with_tolerance(a, b, TOLERANCE)
}

/// Like [`is_almost_equal`] with a caller-chosen absolute tolerance.
///
/// NaN samples never compare equal.
pub fn is_almost_equal_with_tolerance<T: Float>(a: &[T], b: &[T], tolerance: T) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|(&x, &y)| (x - y).abs() <= tolerance)
}

/// Largest absolute sample-wise difference between two signals.
///
/// # Errors
/// Returns [`FilterError::DimensionMismatch`] if the lengths differ.
pub fn max_abs_difference(a: &[f64], b: &[f64]) -> FilterResult<f64> {
    check_lengths(a, b, "maximum difference")?;
    Ok(a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y).abs())
        .fold(0.0, f64::max))
}

/// Computes the Mean Squared Error (MSE) between two signals.
///
/// # Errors
/// Returns [`FilterError::DimensionMismatch`] if the lengths differ and
/// [`FilterError::InvalidInput`] if both are empty.
pub fn mse(a: &[f64], b: &[f64]) -> FilterResult<f64> {
    check_lengths(a, b, "MSE")?;
    if a.is_empty() {
        return Err(FilterError::invalid_input("MSE of empty signals is undefined"));
    }

    let n = a.len() as f64;
    let sum_squared_diff: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (x - y) * (x - y))
        .sum();

    Ok(sum_squared_diff / n)
}

fn check_lengths(a: &[f64], b: &[f64], what: &str) -> FilterResult<()> {
    if a.len() != b.len() {
        return Err(FilterError::DimensionMismatch(format!(
            "Signals must have the same length for {what}: {} vs {}",
            a.len(),
            b.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_identical_signals_are_equal() {
        let x = [0.1, -0.2, 0.3];
        assert!(is_almost_equal(&x, &x));
        assert!(is_almost_equal(&[], &[]));
    }

    #[test]
    fn test_tolerance_boundary() {
        assert!(is_almost_equal(&[0.0], &[1e-10]));
        assert!(!is_almost_equal(&[0.0], &[1e-9]));
    }

    #[test]
    fn test_length_mismatch_is_not_equal() {
        assert!(!is_almost_equal(&[1.0, 2.0], &[1.0]));
    }

    #[test]
    fn test_nan_is_never_equal() {
        assert!(!is_almost_equal(&[f64::NAN], &[f64::NAN]));
    }

    #[test]
    fn test_custom_tolerance_f32() {
        assert!(is_almost_equal_with_tolerance(&[1.0f32], &[1.05], 0.1));
        assert!(!is_almost_equal_with_tolerance(&[1.0f32], &[1.2], 0.1));
    }

    #[test]
    fn test_max_abs_difference() {
        let d = max_abs_difference(&[1.0, 2.0, 3.0], &[1.5, 2.0, 1.0]).unwrap();
        assert_approx_eq!(d, 2.0, 1e-12);
        assert!(matches!(
            max_abs_difference(&[1.0], &[]),
            Err(FilterError::DimensionMismatch(_))
        ));
    }

    #[test]
    fn test_mse() {
        let m = mse(&[1.0, 2.0, 3.0, 4.0], &[2.0, 2.0, 3.0, 6.0]).unwrap();
        assert_approx_eq!(m, 1.25, 1e-12);
        assert!(mse(&[], &[]).is_err());
    }
}

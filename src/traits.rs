//! Core traits for filtering.

use crate::FilterResult;
use crate::operations::types::FilterStructure;

/// The single capability every filter realization provides.
///
/// Implementations are immutable once built: delay-line state lives only for
/// the duration of one [`Filter::filter`] call, so a filter can be shared
/// across threads and invoked concurrently on independent signals.
///
/// ```rust
/// use sos_filters::{Filter, FirFilter, SosFilter};
///
/// fn run(filter: &dyn Filter, signal: &[f64]) -> Vec<f64> {
///     filter.filter(signal).unwrap()
/// }
///
/// let fir = FirFilter::new(vec![1.0]);
/// let sos = SosFilter::new(vec![vec![1.0, 0.0, 0.0, 1.0, 0.0, 0.0]], vec![1.0, 1.0]);
/// assert_eq!(run(&fir, &[1.0, 2.0]), vec![1.0, 2.0]);
/// assert_eq!(run(&sos, &[1.0, 2.0]), vec![1.0, 2.0]);
/// ```
pub trait Filter: Send + Sync {
    /// Filter `signal`, producing an output of the same length.
    ///
    /// # Errors
    /// Returns [`crate::FilterError::InvalidInput`] if the signal is empty or
    /// the filter's coefficients are unusable.
    fn filter(&self, signal: &[f64]) -> FilterResult<Vec<f64>>;

    /// The structure this realization implements.
    fn structure(&self) -> FilterStructure;
}

impl<F: Filter + ?Sized> Filter for Box<F> {
    fn filter(&self, signal: &[f64]) -> FilterResult<Vec<f64>> {
        (**self).filter(signal)
    }

    fn structure(&self) -> FilterStructure {
        (**self).structure()
    }
}

impl<F: Filter + ?Sized> Filter for &F {
    fn filter(&self, signal: &[f64]) -> FilterResult<Vec<f64>> {
        (**self).filter(signal)
    }

    fn structure(&self) -> FilterStructure {
        (**self).structure()
    }
}

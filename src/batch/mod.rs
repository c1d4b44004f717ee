//! Applying one filter to many independent signals.
//!
//! Filters keep no state between calls, so every signal in a batch is
//! filtered from zero initial conditions regardless of its position.

mod error;
#[cfg(feature = "parallel-processing")]
pub mod parallel;

pub use error::{BatchError, BatchResult, ErrorHandling};
#[cfg(feature = "parallel-processing")]
pub use parallel::ParallelProcessor;

use crate::{Filter, FilterError, FilterResult};

/// Filter every signal in `signals` with `filter`, in order.
///
/// # Errors
/// With [`ErrorHandling::StopOnFirstError`] the first failing signal is
/// reported as [`BatchError::ItemError`]. With
/// [`ErrorHandling::CollectErrors`] every signal is attempted and all
/// failures are reported together.
pub fn filter_batch<F, S>(
    filter: &F,
    signals: &[S],
    error_handling: ErrorHandling,
) -> BatchResult<Vec<Vec<f64>>>
where
    F: Filter + ?Sized,
    S: AsRef<[f64]>,
{
    collect_results(
        signals.iter().map(|s| filter.filter(s.as_ref())),
        error_handling,
    )
}

pub(crate) fn collect_results(
    results: impl IntoIterator<Item = FilterResult<Vec<f64>>>,
    error_handling: ErrorHandling,
) -> BatchResult<Vec<Vec<f64>>> {
    let mut outputs = Vec::new();
    let mut errors: Vec<(usize, FilterError)> = Vec::new();

    for (index, result) in results.into_iter().enumerate() {
        match result {
            Ok(output) => outputs.push(output),
            Err(source) => match error_handling {
                ErrorHandling::StopOnFirstError => {
                    return Err(BatchError::item_error(index, source));
                }
                ErrorHandling::CollectErrors => errors.push((index, source)),
            },
        }
    }

    if errors.is_empty() {
        Ok(outputs)
    } else {
        Err(BatchError::multiple_errors(errors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FirFilter, SosFilter};

    #[test]
    fn test_filter_batch_preserves_order() {
        let filter = FirFilter::new(vec![2.0]);
        let signals = vec![vec![1.0, 2.0], vec![3.0], vec![4.0, 5.0, 6.0]];
        let out = filter_batch(&filter, &signals, ErrorHandling::default()).unwrap();
        assert_eq!(out, vec![vec![2.0, 4.0], vec![6.0], vec![8.0, 10.0, 12.0]]);
    }

    #[test]
    fn test_each_signal_starts_from_zero_state() {
        let filter = SosFilter::new(vec![vec![1.0, 0.0, 0.0, 1.0, -0.5, 0.0]], vec![]);
        let impulse = vec![1.0, 0.0, 0.0];
        let out = filter_batch(&filter, &[&impulse, &impulse], ErrorHandling::default()).unwrap();
        assert_eq!(out[0], out[1]);
    }

    #[test]
    fn test_stop_on_first_error() {
        let filter = FirFilter::new(vec![1.0]);
        let signals: Vec<Vec<f64>> = vec![vec![1.0], vec![], vec![]];
        let err = filter_batch(&filter, &signals, ErrorHandling::StopOnFirstError).unwrap_err();
        assert!(matches!(err, BatchError::ItemError { index: 1, .. }));
    }

    #[test]
    fn test_collect_errors() {
        let filter = FirFilter::new(vec![1.0]);
        let signals: Vec<Vec<f64>> = vec![vec![], vec![1.0], vec![]];
        let err = filter_batch(&filter, &signals, ErrorHandling::CollectErrors).unwrap_err();
        match err {
            BatchError::MultipleErrors { count, errors } => {
                assert_eq!(count, 2);
                assert_eq!(errors.iter().map(|(i, _)| *i).collect::<Vec<_>>(), vec![0, 2]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

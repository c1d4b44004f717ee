//! Parallel batch filtering.
//!
//! Signals are distributed across the rayon thread pool. Each call to
//! [`Filter::filter`] owns its delay-line state, so no synchronization is
//! needed between workers.

use super::{BatchError, BatchResult, ErrorHandling, collect_results};
use crate::{Filter, FilterResult};
use rayon::prelude::*;

/// Parallel batch processor for applying one filter to many signals concurrently.
pub struct ParallelProcessor;

impl ParallelProcessor {
    /// Filter every signal in parallel, returning outputs in input order.
    ///
    /// # Arguments
    /// * `filter` - Filter to apply to each signal
    /// * `signals` - Signals to filter
    /// * `error_handling` - Whether to stop at the first failure or report all of them
    ///
    /// # Errors
    /// See [`super::filter_batch`].
    pub fn process_parallel<F, S>(
        filter: &F,
        signals: &[S],
        error_handling: ErrorHandling,
    ) -> BatchResult<Vec<Vec<f64>>>
    where
        F: Filter + ?Sized,
        S: AsRef<[f64]> + Sync,
    {
        let results: Vec<FilterResult<Vec<f64>>> = signals
            .par_iter()
            .map(|s| filter.filter(s.as_ref()))
            .collect();

        collect_results(results, error_handling)
    }

    /// Like [`ParallelProcessor::process_parallel`] on a dedicated pool.
    ///
    /// # Arguments
    /// * `thread_count` - Number of threads to use (None for default)
    ///
    /// # Errors
    /// Returns [`BatchError::ParallelError`] if the thread pool cannot be built,
    /// otherwise as [`ParallelProcessor::process_parallel`].
    pub fn process_with_threads<F, S>(
        filter: &F,
        signals: &[S],
        error_handling: ErrorHandling,
        thread_count: Option<usize>,
    ) -> BatchResult<Vec<Vec<f64>>>
    where
        F: Filter + ?Sized,
        S: AsRef<[f64]> + Sync,
    {
        let mut builder = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = thread_count {
            builder = builder.num_threads(threads);
        }
        let pool = builder.build().map_err(|e| {
            BatchError::parallel_error(format!("Thread pool creation failed: {}", e))
        })?;

        pool.install(|| Self::process_parallel(filter, signals, error_handling))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::filter_batch;
    use crate::{FilterKind, FirFilter, SosFilter};

    fn signals() -> Vec<Vec<f64>> {
        (1..=8)
            .map(|n| (0..n * 16).map(|i| (i as f64 * 0.3).sin()).collect())
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let filter: FilterKind = SosFilter::new(
            vec![vec![0.2, 0.4, 0.2, 1.0, -0.5, 0.25], vec![1.0, 0.0, -1.0, 1.0, 0.1, 0.2]],
            vec![0.5, 1.0, 2.0],
        )
        .into();
        let signals = signals();

        let sequential = filter_batch(&filter, &signals, ErrorHandling::default()).unwrap();
        let parallel =
            ParallelProcessor::process_parallel(&filter, &signals, ErrorHandling::default())
                .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_process_with_threads() {
        let filter = FirFilter::new(vec![0.5, 0.5]);
        let signals = signals();
        let out = ParallelProcessor::process_with_threads(
            &filter,
            &signals,
            ErrorHandling::default(),
            Some(2),
        )
        .unwrap();
        assert_eq!(out.len(), signals.len());
        assert!(out.iter().zip(&signals).all(|(o, s)| o.len() == s.len()));
    }

    #[test]
    fn test_parallel_reports_failing_index() {
        let filter = FirFilter::new(vec![1.0]);
        let signals: Vec<Vec<f64>> = vec![vec![1.0], vec![2.0], vec![]];
        let err = ParallelProcessor::process_parallel(&filter, &signals, ErrorHandling::default())
            .unwrap_err();
        assert!(matches!(err, BatchError::ItemError { index: 2, .. }));
    }
}

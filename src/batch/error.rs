//! Error types for batch filtering.

use crate::FilterError;
use thiserror::Error;

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

/// Errors that can occur during batch filtering.
#[derive(Error, Debug)]
pub enum BatchError {
    /// An error occurred while filtering a specific signal in the batch.
    #[error("Error processing item {index}: {source}")]
    ItemError {
        /// The index of the signal that failed.
        index: usize,
        /// The underlying error.
        source: FilterError,
    },

    /// Multiple signals failed.
    #[error("Multiple errors occurred during batch processing: {count} errors")]
    MultipleErrors {
        /// The number of errors that occurred.
        count: usize,
        /// The individual errors with their indices.
        errors: Vec<(usize, FilterError)>,
    },

    /// Parallel processing error.
    #[cfg(feature = "parallel-processing")]
    #[error("Parallel processing error: {message}")]
    ParallelError {
        /// Description of the failure.
        message: String,
    },
}

impl BatchError {
    /// Create a new item error.
    pub const fn item_error(index: usize, source: FilterError) -> Self {
        Self::ItemError { index, source }
    }

    /// Create a new multiple errors error.
    ///
    /// A single failure is reported as an [`BatchError::ItemError`].
    pub fn multiple_errors(mut errors: Vec<(usize, FilterError)>) -> Self {
        if errors.len() == 1 {
            let (index, source) = errors.remove(0);
            return Self::item_error(index, source);
        }
        let count = errors.len();
        Self::MultipleErrors { count, errors }
    }

    /// Create a new parallel processing error.
    #[cfg(feature = "parallel-processing")]
    pub fn parallel_error(message: impl Into<String>) -> Self {
        Self::ParallelError {
            message: message.into(),
        }
    }
}

/// Configuration for error handling in batch operations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorHandling {
    /// Stop processing on the first error encountered.
    #[default]
    StopOnFirstError,
    /// Continue processing and collect all errors.
    CollectErrors,
}

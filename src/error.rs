//! Error types and result utilities for filtering operations.

use thiserror::Error;

use crate::operations::types::FilterStructure;

/// Convenience type alias for results that may contain a [`FilterError`].
pub type FilterResult<T> = Result<T, FilterError>;

/// Error types that can occur while constructing or applying a filter.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Error that occurs when the signal or coefficients handed to a filter are unusable.
    ///
    /// This covers empty signals, empty SOS matrices or numerators, sections that
    /// do not carry exactly six coefficients and scale values of the wrong length.
    #[error("Invalid input error: {msg}")]
    InvalidInput {
        /// Description of what was wrong with the input.
        msg: String,
    },

    /// Error that occurs when a descriptor declares a structure other than the
    /// one the realization being built requires.
    #[error("Invalid filter structure: expected '{expected}', got '{actual}'")]
    InvalidStructure {
        /// The exact structure label the realization requires.
        expected: String,
        /// The structure label found in the descriptor.
        actual: String,
    },

    /// Error that occurs when a descriptor declares a structure label that names
    /// no known realization.
    #[error(
        "Unknown filter structure '{actual}': expected '{sos}' or '{fir}'",
        sos = FilterStructure::DirectFormIISos,
        fir = FilterStructure::DirectFormFir
    )]
    UnknownStructure {
        /// The structure label found in the descriptor.
        actual: String,
    },

    /// Error that occurs when an external blob cannot be decoded.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Error that occurs when two sequences that must line up have different lengths.
    #[error("Dimension mismatch error: {0}")]
    DimensionMismatch(String),
}

impl FilterError {
    /// Create a new invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput { msg: msg.into() }
    }

    /// Create a new structure mismatch error.
    pub fn invalid_structure(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::InvalidStructure {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    /// Create a new unknown structure error.
    pub fn unknown_structure(actual: impl Into<String>) -> Self {
        Self::UnknownStructure {
            actual: actual.into(),
        }
    }

    /// Returns true if the error reports unusable numeric data (signals,
    /// coefficients, or sequence lengths) rather than a bad descriptor.
    pub const fn is_input_error(&self) -> bool {
        matches!(
            self,
            FilterError::InvalidInput { .. } | FilterError::DimensionMismatch(_)
        )
    }
}

#[cfg(feature = "serialization")]
impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        FilterError::Deserialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = FilterError::invalid_input("signal cannot be empty");
        assert!(err.is_input_error());
        assert!(err.to_string().contains("signal cannot be empty"));
    }

    #[test]
    fn test_invalid_structure_message() {
        let err = FilterError::invalid_structure(
            "Direct-Form FIR",
            "Direct-Form II, Second-Order Sections",
        );
        assert!(!err.is_input_error());
        let msg = err.to_string();
        assert!(msg.contains("expected 'Direct-Form FIR'"));
        assert!(msg.contains("got 'Direct-Form II, Second-Order Sections'"));
    }

    #[test]
    fn test_unknown_structure_message_lists_known_labels() {
        let err = FilterError::unknown_structure("Lattice");
        assert!(!err.is_input_error());
        assert_eq!(
            err.to_string(),
            "Unknown filter structure 'Lattice': expected \
             'Direct-Form II, Second-Order Sections' or 'Direct-Form FIR'"
        );
        match err {
            FilterError::UnknownStructure { actual } => assert_eq!(actual, "Lattice"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_input_error_classification() {
        assert!(FilterError::DimensionMismatch("3 vs 4".into()).is_input_error());
        assert!(!FilterError::Deserialization("eof".into()).is_input_error());
        assert!(!FilterError::invalid_structure("Direct-Form FIR", "").is_input_error());
    }

    #[cfg(feature = "serialization")]
    #[test]
    fn test_from_serde_json_error() {
        let parse = serde_json::from_str::<Vec<f64>>("[1.0, ").unwrap_err();
        let err: FilterError = parse.into();
        assert!(matches!(err, FilterError::Deserialization(_)));
    }
}

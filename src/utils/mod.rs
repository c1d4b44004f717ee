//! Utility functions around filtering.
//!
//! # Modules
//!
//! - [`comparison`] - Signal comparison utilities

pub mod comparison;

pub use comparison::*;

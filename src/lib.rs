// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![deny(missing_docs)] // Documentation is a must for release

//! # sos_filters
//!
//! Digital filtering of real-valued, discrete-time signals with two canonical
//! realizations:
//!
//! - a cascade of second-order sections in Direct Form II (transposed), and
//! - a tapped-delay-line FIR filter in direct form.
//!
//! Both implement the [`Filter`] trait, so callers can hold either behind
//! `&dyn Filter` or the closed [`FilterKind`] enum. Filters are immutable:
//! delay-line state is created at the start of every call and dropped at the
//! end of it, so one filter can be shared freely across threads.
//!
//! ## Features
//!
//! - `serialization` (default): JSON filter descriptors and signal ingestion (using `serde`)
//! - `parallel-processing`: rayon-backed FIR and batch filtering
//!
//! ## Error Handling
//!
//! ```rust
//! use sos_filters::{FilterError, filter_fir};
//!
//! match filter_fir(&[1.0, 2.0], &[]) {
//!     Ok(_) => unreachable!(),
//!     Err(FilterError::InvalidInput { msg }) => eprintln!("Invalid input: {msg}"),
//!     Err(other) => eprintln!("Other error: {other}"),
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use sos_filters::{Filter, FilterKind, is_almost_equal};
//!
//! let json = br#"{
//!     "Arithmetic": "double",
//!     "Numerator": [0.5, 0.5],
//!     "FilterStructure": "Direct-Form FIR"
//! }"#;
//!
//! let filter = FilterKind::from_json(json).unwrap();
//! let out = filter.filter(&[2.0, 4.0, 6.0]).unwrap();
//! assert!(is_almost_equal(&out, &[1.0, 3.0, 5.0]));
//! ```
//!
//! ## Logging
//!
//! Construction and filtering emit `tracing` events at `debug` and `trace`
//! level. The crate installs no subscriber.

mod error;

pub mod batch;
pub mod operations;
/// Core traits for filtering.
pub mod traits;
pub mod utils;

pub use crate::error::{FilterError, FilterResult};
pub use crate::operations::{
    FilterKind, FilterStructure, FirFilter, SosFilter, SosSection, filter_fir, filter_sos,
};
#[cfg(feature = "parallel-processing")]
pub use crate::operations::filter_fir_parallel;
#[cfg(feature = "serialization")]
pub use crate::operations::{FirDescriptor, SosDescriptor, signal_from_json};
pub use crate::traits::Filter;
pub use crate::utils::comparison::{
    TOLERANCE, is_almost_equal, is_almost_equal_with_tolerance, max_abs_difference, mse,
};

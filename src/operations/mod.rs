//! Filter realizations and the boundary layer that builds them.
//!
//! ## Module Organization
//!
//! - [`sos_filtering`] - Second-order-section cascade, Direct Form II (transposed)
//! - [`fir_filtering`] - Direct-form FIR
//! - [`types`] - Structure tags, section view and the [`FilterKind`] variant set
//! - [`serialization`] - JSON descriptors and structure-tag validation
//! - `frequency_response` - Unit-circle evaluation shared by both realizations

pub mod fir_filtering;
pub(crate) mod frequency_response;
#[cfg(feature = "serialization")]
pub mod serialization;
pub mod sos_filtering;
pub mod types;

pub use fir_filtering::{FirFilter, filter_fir};
#[cfg(feature = "parallel-processing")]
pub use fir_filtering::filter_fir_parallel;
#[cfg(feature = "serialization")]
pub use serialization::{FirDescriptor, SosDescriptor, signal_from_json};
pub use sos_filtering::{SosFilter, filter_sos};
pub use types::{FilterKind, FilterStructure, SOS_SECTION_LEN, SosSection};

//! Filter descriptors and JSON ingestion.
//!
//! A descriptor is the plain record an external tool serializes for one
//! filter realization. Only its coefficient fields reach the numeric core;
//! the bookkeeping fields (arithmetic label, state snapshot, persistence flag,
//! samples-processed counter, rate-change factor) are carried as-is.
//!
//! Decoding is lenient in the way the producing tools are: field names are
//! matched in their usual case variants, a missing field or an explicit
//! `null` takes the field's zero value, and unknown fields are ignored.

use crate::operations::fir_filtering::FirFilter;
use crate::operations::sos_filtering::SosFilter;
use crate::operations::types::{FilterKind, FilterStructure};
use crate::{FilterError, FilterResult};

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Serialized form of a Direct Form II second-order-section filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SosDescriptor {
    /// Whether the designer optimized the scale values.
    #[serde(
        rename = "OptimizeScaleValues",
        alias = "optimizeScaleValues",
        alias = "optimizescalevalues",
        deserialize_with = "null_as_default"
    )]
    pub optimize_scale_values: bool,
    /// Arithmetic precision label, e.g. "double".
    #[serde(
        rename = "Arithmetic",
        alias = "arithmetic",
        deserialize_with = "null_as_default"
    )]
    pub arithmetic: String,
    /// Sections in cascade order, each `[b0, b1, b2, a0, a1, a2]`.
    #[serde(
        rename = "sosMatrix",
        alias = "SOSMatrix",
        alias = "SosMatrix",
        alias = "sosmatrix",
        alias = "SOSMATRIX",
        deserialize_with = "null_as_default"
    )]
    pub sos_matrix: Vec<Vec<f64>>,
    /// Per-section gains plus a trailing overall gain.
    #[serde(
        rename = "ScaleValues",
        alias = "scaleValues",
        alias = "scalevalues",
        deserialize_with = "null_as_default"
    )]
    pub scale_values: Vec<f64>,
    /// Declared structure label.
    #[serde(
        rename = "FilterStructure",
        alias = "filterStructure",
        alias = "filterstructure",
        deserialize_with = "null_as_default"
    )]
    pub filter_structure: String,
    /// Integer state snapshot, one row per section.
    #[serde(rename = "States", alias = "states", deserialize_with = "null_as_default")]
    pub states: Vec<Vec<i64>>,
    /// Samples processed by the tool that produced the descriptor.
    #[serde(
        rename = "NumSamplesProcessed",
        alias = "numSamplesProcessed",
        alias = "numsamplesprocessed",
        deserialize_with = "null_as_default"
    )]
    pub num_samples_processed: i64,
    /// Whether the producer keeps state between calls.
    #[serde(
        rename = "PersistentMemory",
        alias = "persistentMemory",
        alias = "persistentmemory",
        deserialize_with = "null_as_default"
    )]
    pub persistent_memory: bool,
    /// Opaque rate-change factor.
    #[serde(
        rename = "RateChangeFactor",
        alias = "rateChangeFactor",
        alias = "ratechangefactor",
        deserialize_with = "null_as_default"
    )]
    pub rate_change_factor: Vec<i64>,
}

/// Serialized form of a direct-form FIR filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirDescriptor {
    /// Arithmetic precision label, e.g. "double".
    #[serde(
        rename = "Arithmetic",
        alias = "arithmetic",
        deserialize_with = "null_as_default"
    )]
    pub arithmetic: String,
    /// Tap coefficients, tap 0 first.
    #[serde(
        rename = "Numerator",
        alias = "numerator",
        deserialize_with = "null_as_default"
    )]
    pub numerator: Vec<f64>,
    /// Declared structure label.
    #[serde(
        rename = "FilterStructure",
        alias = "filterStructure",
        alias = "filterstructure",
        deserialize_with = "null_as_default"
    )]
    pub filter_structure: String,
    /// Integer state snapshot.
    #[serde(rename = "States", alias = "states", deserialize_with = "null_as_default")]
    pub states: Vec<i64>,
    /// Samples processed by the tool that produced the descriptor.
    #[serde(
        rename = "NumSamplesProcessed",
        alias = "numSamplesProcessed",
        alias = "numsamplesprocessed",
        deserialize_with = "null_as_default"
    )]
    pub num_samples_processed: i64,
    /// Whether the producer keeps state between calls.
    #[serde(
        rename = "PersistentMemory",
        alias = "persistentMemory",
        alias = "persistentmemory",
        deserialize_with = "null_as_default"
    )]
    pub persistent_memory: bool,
    /// Opaque rate-change factor.
    #[serde(
        rename = "RateChangeFactor",
        alias = "rateChangeFactor",
        alias = "ratechangefactor",
        deserialize_with = "null_as_default"
    )]
    pub rate_change_factor: Vec<i64>,
}

/// Only the structure tag, decoded ahead of the full record so a blob of the
/// other realization is reported as a structure mismatch.
#[derive(Deserialize)]
struct StructureTag {
    #[serde(
        rename = "FilterStructure",
        alias = "filterStructure",
        alias = "filterstructure",
        default,
        deserialize_with = "null_as_default"
    )]
    filter_structure: String,
}

impl StructureTag {
    fn from_json(json: &[u8]) -> FilterResult<Self> {
        Ok(serde_json::from_slice(json)?)
    }
}

fn warn_if_persistent(persistent_memory: bool, structure: FilterStructure) {
    if persistent_memory {
        warn!(
            structure = %structure,
            "descriptor requests persistent memory; state is reset on every call"
        );
    }
}

impl SosDescriptor {
    /// Decode a descriptor and check its structure tag.
    ///
    /// # Errors
    /// Returns [`FilterError::Deserialization`] if `json` is malformed and
    /// [`FilterError::InvalidStructure`] if the tag is not
    /// `"Direct-Form II, Second-Order Sections"`.
    pub fn from_json(json: &[u8]) -> FilterResult<Self> {
        let tag = StructureTag::from_json(json)?;
        FilterStructure::DirectFormIISos.validate(&tag.filter_structure)?;
        Ok(serde_json::from_slice(json)?)
    }

    /// Build the filter from the descriptor's coefficients.
    pub fn to_filter(&self) -> SosFilter {
        warn_if_persistent(self.persistent_memory, FilterStructure::DirectFormIISos);
        SosFilter::new(self.sos_matrix.clone(), self.scale_values.clone())
    }
}

impl FirDescriptor {
    /// Decode a descriptor and check its structure tag.
    ///
    /// # Errors
    /// Returns [`FilterError::Deserialization`] if `json` is malformed and
    /// [`FilterError::InvalidStructure`] if the tag is not `"Direct-Form FIR"`.
    pub fn from_json(json: &[u8]) -> FilterResult<Self> {
        let tag = StructureTag::from_json(json)?;
        FilterStructure::DirectFormFir.validate(&tag.filter_structure)?;
        Ok(serde_json::from_slice(json)?)
    }

    /// Build the filter from the descriptor's coefficients.
    pub fn to_filter(&self) -> FirFilter {
        warn_if_persistent(self.persistent_memory, FilterStructure::DirectFormFir);
        FirFilter::new(self.numerator.clone())
    }
}

impl From<SosDescriptor> for SosFilter {
    fn from(descriptor: SosDescriptor) -> Self {
        warn_if_persistent(descriptor.persistent_memory, FilterStructure::DirectFormIISos);
        SosFilter::new(descriptor.sos_matrix, descriptor.scale_values)
    }
}

impl From<FirDescriptor> for FirFilter {
    fn from(descriptor: FirDescriptor) -> Self {
        warn_if_persistent(descriptor.persistent_memory, FilterStructure::DirectFormFir);
        FirFilter::new(descriptor.numerator)
    }
}

impl SosFilter {
    /// Create an SOS filter from a JSON descriptor.
    ///
    /// # Errors
    /// Fails before any filter exists if the blob is malformed or declares a
    /// structure other than `"Direct-Form II, Second-Order Sections"`.
    ///
    /// # Examples
    /// ```
    /// use sos_filters::{Filter, SosFilter};
    ///
    /// let json = br#"{
    ///     "FilterStructure": "Direct-Form II, Second-Order Sections",
    ///     "sosMatrix": [[1, 0, 0, 1, 0, 0]],
    ///     "ScaleValues": [1, 1]
    /// }"#;
    /// let filter = SosFilter::from_json(json).unwrap();
    /// assert_eq!(filter.filter(&[1.0, 2.0]).unwrap(), vec![1.0, 2.0]);
    /// ```
    pub fn from_json(json: &[u8]) -> FilterResult<Self> {
        SosDescriptor::from_json(json).map(Self::from)
    }
}

impl FirFilter {
    /// Create a FIR filter from a JSON descriptor.
    ///
    /// # Errors
    /// Fails before any filter exists if the blob is malformed or declares a
    /// structure other than `"Direct-Form FIR"`.
    pub fn from_json(json: &[u8]) -> FilterResult<Self> {
        FirDescriptor::from_json(json).map(Self::from)
    }
}

impl FilterKind {
    /// Create whichever realization a JSON descriptor declares.
    ///
    /// # Errors
    /// Returns [`FilterError::Deserialization`] for malformed input and
    /// [`FilterError::UnknownStructure`] if the declared structure is not one
    /// of the known labels.
    pub fn from_json(json: &[u8]) -> FilterResult<Self> {
        let tag = StructureTag::from_json(json)?;
        let structure = FilterStructure::from_label(&tag.filter_structure)
            .ok_or_else(|| FilterError::unknown_structure(tag.filter_structure.as_str()))?;
        debug!(structure = %structure, "decoding filter descriptor");

        match structure {
            FilterStructure::DirectFormIISos => SosFilter::from_json(json).map(FilterKind::Sos),
            FilterStructure::DirectFormFir => FirFilter::from_json(json).map(FilterKind::Fir),
        }
    }
}

/// Decode a signal serialized as a flat JSON array of numbers.
///
/// # Errors
/// Returns [`FilterError::Deserialization`] if `json` is not such an array.
///
/// # Examples
/// ```
/// use sos_filters::signal_from_json;
///
/// assert_eq!(signal_from_json(b"[1, 2.5, -3]").unwrap(), vec![1.0, 2.5, -3.0]);
/// assert!(signal_from_json(b"{\"x\": 1}").is_err());
/// ```
pub fn signal_from_json(json: &[u8]) -> FilterResult<Vec<f64>> {
    Ok(serde_json::from_slice(json)?)
}

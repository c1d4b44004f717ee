//! Supporting types for the filter realizations.

use std::fmt;

use crate::operations::fir_filtering::FirFilter;
use crate::operations::sos_filtering::SosFilter;
use crate::{Filter, FilterError, FilterResult};

/// Number of coefficients carried by one second-order section.
pub const SOS_SECTION_LEN: usize = 6;

/// The filter structures a descriptor can declare.
///
/// Each variant maps to exactly one structure label; labels are compared
/// verbatim, so casing and punctuation matter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterStructure {
    /// Cascade of second-order sections, Direct Form II (transposed).
    DirectFormIISos,
    /// Tapped delay line FIR in direct form.
    DirectFormFir,
}

impl FilterStructure {
    /// The exact label an external descriptor uses for this structure.
    pub const fn label(&self) -> &'static str {
        match self {
            FilterStructure::DirectFormIISos => "Direct-Form II, Second-Order Sections",
            FilterStructure::DirectFormFir => "Direct-Form FIR",
        }
    }

    /// Look up a structure by its exact label.
    pub fn from_label(label: &str) -> Option<Self> {
        [FilterStructure::DirectFormIISos, FilterStructure::DirectFormFir]
            .into_iter()
            .find(|s| s.label() == label)
    }

    /// Check a declared label against this structure.
    ///
    /// # Errors
    /// Returns [`FilterError::InvalidStructure`] if `declared` is not exactly
    /// this structure's label.
    pub fn validate(&self, declared: &str) -> FilterResult<()> {
        if declared == self.label() {
            Ok(())
        } else {
            Err(FilterError::invalid_structure(self.label(), declared))
        }
    }
}

impl fmt::Display for FilterStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Typed copy of one `[b0, b1, b2, a0, a1, a2]` row of an SOS matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SosSection {
    /// Numerator coefficients `[b0, b1, b2]`.
    pub b: [f64; 3],
    /// Denominator coefficients `[a0, a1, a2]`.
    pub a: [f64; 3],
}

impl TryFrom<&[f64]> for SosSection {
    type Error = FilterError;

    fn try_from(row: &[f64]) -> FilterResult<Self> {
        match row {
            &[b0, b1, b2, a0, a1, a2] => Ok(Self {
                b: [b0, b1, b2],
                a: [a0, a1, a2],
            }),
            _ => Err(FilterError::invalid_input(format!(
                "invalid SOS matrix: each row must have {SOS_SECTION_LEN} coefficients [b0, b1, b2, a0, a1, a2], got {}",
                row.len()
            ))),
        }
    }
}

/// A constructed filter of either realization.
///
/// This is the closed set the boundary layer hands back after validating a
/// descriptor's structure tag.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterKind {
    /// Second-order-section cascade.
    Sos(SosFilter),
    /// Direct-form FIR.
    Fir(FirFilter),
}

impl FilterKind {
    /// Returns the SOS realization, if this is one.
    pub const fn as_sos(&self) -> Option<&SosFilter> {
        match self {
            FilterKind::Sos(f) => Some(f),
            FilterKind::Fir(_) => None,
        }
    }

    /// Returns the FIR realization, if this is one.
    pub const fn as_fir(&self) -> Option<&FirFilter> {
        match self {
            FilterKind::Fir(f) => Some(f),
            FilterKind::Sos(_) => None,
        }
    }

    /// Magnitude and phase response at the given frequencies.
    ///
    /// # Errors
    /// Returns [`FilterError::InvalidInput`] if an SOS realization carries a
    /// malformed section.
    pub fn frequency_response(
        &self,
        frequencies: &[f64],
        sample_rate: f64,
    ) -> FilterResult<(Vec<f64>, Vec<f64>)> {
        match self {
            FilterKind::Sos(f) => f.frequency_response(frequencies, sample_rate),
            FilterKind::Fir(f) => Ok(f.frequency_response(frequencies, sample_rate)),
        }
    }
}

impl Filter for FilterKind {
    fn filter(&self, signal: &[f64]) -> FilterResult<Vec<f64>> {
        match self {
            FilterKind::Sos(f) => f.filter(signal),
            FilterKind::Fir(f) => f.filter(signal),
        }
    }

    fn structure(&self) -> FilterStructure {
        match self {
            FilterKind::Sos(f) => f.structure(),
            FilterKind::Fir(f) => f.structure(),
        }
    }
}

impl From<SosFilter> for FilterKind {
    fn from(f: SosFilter) -> Self {
        FilterKind::Sos(f)
    }
}

impl From<FirFilter> for FilterKind {
    fn from(f: FirFilter) -> Self {
        FilterKind::Fir(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_labels_round_trip() {
        for s in [FilterStructure::DirectFormIISos, FilterStructure::DirectFormFir] {
            assert_eq!(FilterStructure::from_label(s.label()), Some(s));
            assert_eq!(s.to_string(), s.label());
        }
        assert_eq!(FilterStructure::from_label("direct-form fir"), None);
    }

    #[test]
    fn test_structure_validate_mismatch() {
        let err = FilterStructure::DirectFormIISos
            .validate("Direct-Form FIR")
            .unwrap_err();
        assert!(matches!(err, FilterError::InvalidStructure { .. }));
        assert!(FilterStructure::DirectFormFir.validate("Direct-Form FIR").is_ok());
    }

    #[test]
    fn test_section_requires_six_coefficients() {
        let ok = SosSection::try_from(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0][..]).unwrap();
        assert_eq!(ok.b, [1.0, 2.0, 3.0]);
        assert_eq!(ok.a, [4.0, 5.0, 6.0]);

        assert!(SosSection::try_from(&[1.0, 0.0, 0.0, 1.0, 0.0][..]).is_err());
        assert!(SosSection::try_from(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0][..]).is_err());
    }

    #[test]
    fn test_filter_kind_dispatch() {
        let sos: FilterKind =
            SosFilter::new(vec![vec![2.0, 0.0, 0.0, 1.0, 0.0, 0.0]], vec![]).into();
        let fir: FilterKind = FirFilter::new(vec![3.0]).into();

        assert_eq!(sos.structure(), FilterStructure::DirectFormIISos);
        assert_eq!(fir.structure(), FilterStructure::DirectFormFir);
        assert!(sos.as_sos().is_some() && sos.as_fir().is_none());
        assert!(fir.as_fir().is_some() && fir.as_sos().is_none());

        assert_eq!(sos.filter(&[1.0, 2.0]).unwrap(), vec![2.0, 4.0]);
        assert_eq!(fir.filter(&[1.0, 2.0]).unwrap(), vec![3.0, 6.0]);

        let (sos_mag, _) = sos.frequency_response(&[0.0], 8000.0).unwrap();
        let (fir_mag, _) = fir.frequency_response(&[0.0], 8000.0).unwrap();
        assert!((sos_mag[0] - 2.0).abs() < 1e-12);
        assert!((fir_mag[0] - 3.0).abs() < 1e-12);
    }
}

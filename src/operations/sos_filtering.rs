//! Second-order-section (SOS) cascade filtering.
//!
//! Each section is a biquad realized in Direct Form II (transposed). Sections
//! run in series in the order given: the output of section `i` is scaled by
//! `scale_values[i]` and fed into section `i + 1`, and the last value of
//! `scale_values` is applied as an overall gain after the final section.

use crate::operations::frequency_response::{biquad_response, magnitude_phase, unit_delays};
use crate::operations::types::{FilterStructure, SosSection};
use crate::{Filter, FilterError, FilterResult};

use num_complex::Complex;
use tracing::{debug, trace};

/// Filter `signal` through a cascade of second-order sections.
///
/// # Arguments
/// * `signal` - Input samples
/// * `sos_matrix` - One row per section, each `[b0, b1, b2, a0, a1, a2]`
/// * `scale_values` - Per-section gains plus one trailing overall gain, or empty for unity gain
///
/// Every section starts from zero state. Coefficients are normalized by the
/// section's `a0` as each sample is evaluated; `a0` is not checked for zero.
///
/// # Errors
/// Returns [`FilterError::InvalidInput`] if the signal or the SOS matrix is
/// empty, if `scale_values` is non-empty and its length is not
/// `sos_matrix.len() + 1`, or if any row does not hold exactly six coefficients.
///
/// # Examples
/// ```
/// use sos_filters::filter_sos;
///
/// let sos = [[1.0, 0.0, 0.0, 1.0, 0.0, 0.0], [1.0, 0.0, 0.0, 1.0, 0.0, 0.0]];
/// let out = filter_sos(&[1.0, 2.0, 3.0], &sos, &[1.0, 1.0, 1.0]).unwrap();
/// assert_eq!(out, vec![1.0, 2.0, 3.0]);
/// ```
pub fn filter_sos<S: AsRef<[f64]>>(
    signal: &[f64],
    sos_matrix: &[S],
    scale_values: &[f64],
) -> FilterResult<Vec<f64>> {
    if signal.is_empty() {
        return Err(FilterError::invalid_input("signal cannot be empty"));
    }
    if sos_matrix.is_empty() {
        return Err(FilterError::invalid_input("the SOS matrix cannot be empty"));
    }
    let num_sections = sos_matrix.len();
    if !scale_values.is_empty() && scale_values.len() != num_sections + 1 {
        return Err(FilterError::invalid_input(format!(
            "length of scale values must be 0 or the number of SOS sections + 1 ({}), got {}",
            num_sections + 1,
            scale_values.len()
        )));
    }

    let sections = sos_matrix
        .iter()
        .map(|row| SosSection::try_from(row.as_ref()))
        .collect::<FilterResult<Vec<_>>>()?;

    let gain = scale_values.last().copied().unwrap_or(1.0);
    let mut state = vec![[0.0f64; 2]; num_sections];
    trace!(
        samples = signal.len(),
        sections = num_sections,
        "filtering with SOS cascade"
    );

    let output = signal
        .iter()
        .map(|&sample| {
            let mut x = sample;
            for (i, (section, w)) in sections.iter().zip(state.iter_mut()).enumerate() {
                let [b0, b1, b2] = section.b;
                let [a0, a1, a2] = section.a;
                let scale = scale_values.get(i).copied().unwrap_or(1.0);

                let w0 = x - a1 / a0 * w[0] - a2 / a0 * w[1];
                let y = (b0 / a0) * w0 + (b1 / a0) * w[0] + (b2 / a0) * w[1];

                w[1] = w[0];
                w[0] = w0;

                x = y * scale;
            }
            x * gain
        })
        .collect();

    Ok(output)
}

/// A cascade of second-order sections with optional scale values.
#[derive(Debug, Clone, PartialEq)]
pub struct SosFilter {
    sos_matrix: Vec<Vec<f64>>,
    scale_values: Vec<f64>,
}

impl SosFilter {
    /// Create a new SOS filter from its coefficients.
    ///
    /// The coefficients are taken as given; shape problems surface when the
    /// filter is applied.
    ///
    /// # Arguments
    /// * `sos_matrix` - Sections in cascade order, each `[b0, b1, b2, a0, a1, a2]`
    /// * `scale_values` - Empty, or one gain per section plus a trailing overall gain
    pub fn new(sos_matrix: Vec<Vec<f64>>, scale_values: Vec<f64>) -> Self {
        debug!(
            sections = sos_matrix.len(),
            scale_values = scale_values.len(),
            "constructed SOS filter"
        );
        Self {
            sos_matrix,
            scale_values,
        }
    }

    /// The sections in cascade order.
    pub fn sos_matrix(&self) -> &[Vec<f64>] {
        &self.sos_matrix
    }

    /// The per-section and overall scale values.
    pub fn scale_values(&self) -> &[f64] {
        &self.scale_values
    }

    /// Number of second-order sections.
    pub fn num_sections(&self) -> usize {
        self.sos_matrix.len()
    }

    /// Get the frequency response at the specified frequencies.
    ///
    /// The cascade response is the product of each section's response and
    /// every scale value.
    ///
    /// Returns (magnitude, phase) response vectors.
    ///
    /// # Errors
    /// Returns [`FilterError::InvalidInput`] if any row of the SOS matrix is
    /// not exactly six coefficients long.
    pub fn frequency_response(
        &self,
        frequencies: &[f64],
        sample_rate: f64,
    ) -> FilterResult<(Vec<f64>, Vec<f64>)> {
        let sections = self
            .sos_matrix
            .iter()
            .map(|row| SosSection::try_from(row.as_slice()))
            .collect::<FilterResult<Vec<_>>>()?;
        let gain: f64 = self.scale_values.iter().product();

        Ok(magnitude_phase(unit_delays(frequencies, sample_rate).map(
            |z_inv| {
                sections
                    .iter()
                    .map(|s| biquad_response(s, z_inv))
                    .product::<Complex<f64>>()
                    * gain
            },
        )))
    }
}

impl Filter for SosFilter {
    fn filter(&self, signal: &[f64]) -> FilterResult<Vec<f64>> {
        filter_sos(signal, &self.sos_matrix, &self.scale_values)
    }

    fn structure(&self) -> FilterStructure {
        FilterStructure::DirectFormIISos
    }
}

//! Direct-form FIR filtering.
//!
//! Output sample `i` is the causal convolution `sum_j numerator[j] * signal[i - j]`
//! over taps with `i - j >= 0`; samples before the start of the signal are zero.

use crate::operations::frequency_response::{magnitude_phase, polynomial_response, unit_delays};
use crate::operations::types::FilterStructure;
use crate::{Filter, FilterError, FilterResult};

use tracing::{debug, trace};

fn validate(signal: &[f64], numerator: &[f64]) -> FilterResult<()> {
    if signal.is_empty() {
        return Err(FilterError::invalid_input("signal cannot be empty"));
    }
    if numerator.is_empty() {
        return Err(FilterError::invalid_input(
            "numerator coefficients cannot be empty",
        ));
    }
    Ok(())
}

#[inline]
fn convolve_at(signal: &[f64], numerator: &[f64], i: usize) -> f64 {
    numerator
        .iter()
        .zip(signal[..=i].iter().rev())
        .fold(0.0, |acc, (tap, x)| acc + x * tap)
}

/// Filter `signal` with the FIR taps in `numerator`.
///
/// # Errors
/// Returns [`FilterError::InvalidInput`] if the signal or the numerator is empty.
///
/// # Examples
/// ```
/// use sos_filters::filter_fir;
///
/// let out = filter_fir(&[1.0, 0.0, 0.0, 0.0], &[1.0, 1.0, 1.0]).unwrap();
/// assert_eq!(out, vec![1.0, 1.0, 1.0, 0.0]);
/// ```
pub fn filter_fir(signal: &[f64], numerator: &[f64]) -> FilterResult<Vec<f64>> {
    validate(signal, numerator)?;
    trace!(
        samples = signal.len(),
        taps = numerator.len(),
        "filtering with direct-form FIR"
    );

    Ok((0..signal.len())
        .map(|i| convolve_at(signal, numerator, i))
        .collect())
}

/// Parallel variant of [`filter_fir`].
///
/// Output samples are independent, so they are computed across the rayon
/// thread pool. Results are identical to [`filter_fir`].
///
/// # Errors
/// Returns [`FilterError::InvalidInput`] if the signal or the numerator is empty.
#[cfg(feature = "parallel-processing")]
pub fn filter_fir_parallel(signal: &[f64], numerator: &[f64]) -> FilterResult<Vec<f64>> {
    use rayon::prelude::*;

    validate(signal, numerator)?;
    trace!(
        samples = signal.len(),
        taps = numerator.len(),
        "filtering with direct-form FIR in parallel"
    );

    Ok((0..signal.len())
        .into_par_iter()
        .map(|i| convolve_at(signal, numerator, i))
        .collect())
}

/// A direct-form FIR filter.
#[derive(Debug, Clone, PartialEq)]
pub struct FirFilter {
    numerator: Vec<f64>,
}

impl FirFilter {
    /// Create a new FIR filter from its tap coefficients, tap 0 first.
    pub fn new(numerator: Vec<f64>) -> Self {
        debug!(taps = numerator.len(), "constructed FIR filter");
        Self { numerator }
    }

    /// The tap coefficients.
    pub fn numerator(&self) -> &[f64] {
        &self.numerator
    }

    /// Number of taps, including tap 0.
    pub fn num_taps(&self) -> usize {
        self.numerator.len()
    }

    /// Get the frequency response at the specified frequencies.
    ///
    /// Returns (magnitude, phase) response vectors.
    pub fn frequency_response(
        &self,
        frequencies: &[f64],
        sample_rate: f64,
    ) -> (Vec<f64>, Vec<f64>) {
        magnitude_phase(
            unit_delays(frequencies, sample_rate)
                .map(|z_inv| polynomial_response(&self.numerator, z_inv)),
        )
    }
}

impl Filter for FirFilter {
    fn filter(&self, signal: &[f64]) -> FilterResult<Vec<f64>> {
        filter_fir(signal, &self.numerator)
    }

    fn structure(&self) -> FilterStructure {
        FilterStructure::DirectFormFir
    }
}

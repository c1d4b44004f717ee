//! Frequency response evaluation on the unit circle.
//!
//! Transfer functions are evaluated as polynomials in `z^-1`, with
//! `z^-1 = e^{-jω}` and `ω = 2π f / fs`.

use crate::operations::types::SosSection;

use num_complex::Complex;
use std::f64::consts::PI;

/// `z^-1` on the unit circle for each frequency in Hz.
pub(crate) fn unit_delays(
    frequencies: &[f64],
    sample_rate: f64,
) -> impl Iterator<Item = Complex<f64>> + '_ {
    frequencies.iter().map(move |&freq| {
        let omega = 2.0 * PI * freq / sample_rate;
        Complex::new(0.0, -omega).exp()
    })
}

/// Evaluate `c[0] + c[1] z^-1 + c[2] z^-2 + ...` by Horner's rule.
pub(crate) fn polynomial_response(coeffs: &[f64], z_inv: Complex<f64>) -> Complex<f64> {
    coeffs
        .iter()
        .rev()
        .fold(Complex::new(0.0, 0.0), |acc, &c| acc * z_inv + c)
}

/// H(z) = B(z) / A(z) for one second-order section.
pub(crate) fn biquad_response(section: &SosSection, z_inv: Complex<f64>) -> Complex<f64> {
    polynomial_response(&section.b, z_inv) / polynomial_response(&section.a, z_inv)
}

/// Split complex responses into (magnitude, phase) vectors.
pub(crate) fn magnitude_phase(
    responses: impl Iterator<Item = Complex<f64>>,
) -> (Vec<f64>, Vec<f64>) {
    responses.map(|h| (h.norm(), h.arg())).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx_eq::assert_approx_eq;

    #[test]
    fn test_polynomial_at_dc_sums_coefficients() {
        let h = polynomial_response(&[1.0, 2.0, 3.0], Complex::new(1.0, 0.0));
        assert_approx_eq!(h.re, 6.0, 1e-12);
        assert!(h.im.abs() < 1e-12);
    }

    #[test]
    fn test_unit_delay_at_nyquist() {
        let z_inv: Vec<_> = unit_delays(&[24000.0], 48000.0).collect();
        assert_approx_eq!(z_inv[0].re, -1.0, 1e-12);
        assert!(z_inv[0].im.abs() < 1e-12);
    }

    #[test]
    fn test_biquad_highpass_zero_at_dc() {
        let section = SosSection {
            b: [1.0, -1.0, 0.0],
            a: [1.0, 0.0, 0.0],
        };
        let (mag, _) = magnitude_phase(
            unit_delays(&[0.0, 24000.0], 48000.0).map(|z| biquad_response(&section, z)),
        );
        assert!(mag[0].abs() < 1e-12);
        assert_approx_eq!(mag[1], 2.0, 1e-12);
    }
}

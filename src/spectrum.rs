//! Helpers for reading a spectrum.
//!
//! A length-`n` signal sampled at equally spaced points over `[0, s]` has its
//! spectrum bin `f` at frequency `f / s`.

use alloc::vec::Vec;

use crate::error::FftError;
use crate::num::{Complex, Float};

fn validate_scale<T: Float>(n: usize, scale: T) -> Result<(), FftError> {
    if n == 0 {
        return Err(FftError::InvalidLength { len: 0 });
    }
    if !(scale.is_finite() && scale > T::zero()) {
        return Err(FftError::InvalidScale);
    }
    Ok(())
}

/// Frequencies `0, 1/s, ..., (n-1)/s` of the `n` spectrum bins.
pub fn bin_frequencies<T: Float>(n: usize, scale: T) -> Result<Vec<T>, FftError> {
    validate_scale(n, scale)?;
    Ok((0..n).map(|f| T::from_f64(f as f64) / scale).collect())
}

/// Like [`bin_frequencies`], but bins at or above `n/2` are reported as the
/// negative frequencies `(f - n)/s` they alias.
pub fn signed_frequencies<T: Float>(n: usize, scale: T) -> Result<Vec<T>, FftError> {
    validate_scale(n, scale)?;
    let split = n.div_ceil(2);
    Ok((0..n)
        .map(|f| {
            let signed = if f < split {
                f as f64
            } else {
                -((n - f) as f64)
            };
            T::from_f64(signed) / scale
        })
        .collect())
}

/// `|U(f)|` for every bin.
pub fn magnitudes<T: Float>(spectrum: &[Complex<T>]) -> Vec<T> {
    spectrum.iter().map(|c| c.norm()).collect()
}

/// Phase of every bin in radians.
pub fn phases<T: Float>(spectrum: &[Complex<T>]) -> Vec<T> {
    spectrum.iter().map(|c| c.arg()).collect()
}

pub fn phases_degrees<T: Float>(spectrum: &[Complex<T>]) -> Vec<T> {
    spectrum.iter().map(|c| c.arg().to_degrees()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;

    #[test]
    fn frequencies_follow_scale() {
        let f = bin_frequencies(4, 2.0f64).unwrap();
        assert_eq!(f, [0.0, 0.5, 1.0, 1.5]);
        let s = signed_frequencies(4, 1.0f64).unwrap();
        assert_eq!(s, [0.0, 1.0, -2.0, -1.0]);
        let s = signed_frequencies(5, 1.0f64).unwrap();
        assert_eq!(s, [0.0, 1.0, 2.0, -2.0, -1.0]);
    }

    #[test]
    fn invalid_scale_is_rejected() {
        assert_eq!(bin_frequencies(4, 0.0f64), Err(FftError::InvalidScale));
        assert_eq!(bin_frequencies(4, -1.0f32), Err(FftError::InvalidScale));
        assert_eq!(signed_frequencies(4, f64::NAN), Err(FftError::InvalidScale));
        assert_eq!(
            bin_frequencies(0, 1.0f64),
            Err(FftError::InvalidLength { len: 0 })
        );
    }

    #[test]
    fn magnitude_and_phase() {
        let spectrum = [Complex64::new(0.0, 2.0), Complex64::new(-3.0, 0.0)];
        let m = magnitudes(&spectrum);
        assert!((m[0] - 2.0).abs() < 1e-12 && (m[1] - 3.0).abs() < 1e-12);
        let p = phases_degrees(&spectrum);
        assert!((p[0] - 90.0).abs() < 1e-9);
        assert!((p[1] - 180.0).abs() < 1e-9);
        assert!((phases(&spectrum)[0] - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}

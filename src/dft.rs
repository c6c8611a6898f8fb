//! Direct `O(n²)` Discrete Fourier Transform.
//!
//! Slow, but a literal evaluation of the definition, so it serves as the
//! yardstick for [`fft`](crate::fft::fft). Any non-zero length is accepted.

use alloc::vec::Vec;

use crate::error::FftError;
use crate::num::{Complex, Float};
use crate::twiddle::{root_of_unity, Direction};

fn direct<T: Float>(input: &[Complex<T>], direction: Direction) -> Result<Vec<Complex<T>>, FftError> {
    let n = input.len();
    if n == 0 {
        return Err(FftError::InvalidLength { len: 0 });
    }
    let out = (0..n)
        .map(|k| {
            input.iter().enumerate().fold(Complex::zero(), |acc, (j, &x)| {
                acc.add(x.mul(root_of_unity(j * k, n, direction)))
            })
        })
        .collect();
    Ok(out)
}

/// `X[k] = Σ x[j] e^{-2πi jk/n}`.
pub fn dft<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    direct(input, Direction::Forward)
}

/// `x[j] = (1/n) Σ X[k] e^{+2πi jk/n}`.
pub fn idft<T: Float>(input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
    let mut out = direct(input, Direction::Inverse)?;
    let scale = T::one() / T::from_f64(input.len() as f64);
    for c in out.iter_mut() {
        *c = c.scale(scale);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::num::Complex64;
    use alloc::vec;

    #[test]
    fn dft_handles_any_length() {
        let x = vec![
            Complex64::new(1.0, 0.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(3.0, 0.0),
        ];
        let spectrum = dft(&x).unwrap();
        assert!((spectrum[0].re - 6.0).abs() < 1e-12);
        let back = idft(&spectrum).unwrap();
        for (a, b) in x.iter().zip(back.iter()) {
            assert!((*a - *b).norm() < 1e-12);
        }
    }

    #[test]
    fn dft_rejects_empty_input() {
        let empty: [Complex64; 0] = [];
        assert_eq!(dft(&empty), Err(FftError::InvalidLength { len: 0 }));
        assert_eq!(idft(&empty), Err(FftError::InvalidLength { len: 0 }));
    }
}

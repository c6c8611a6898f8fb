//! Power-of-two precondition shared by every transform entry point.

use crate::error::FftError;

/// Check that `len` is `2^k` and return `k`.
///
/// A single sample (`k = 0`) is the trivial transform. Zero and every
/// non-power-of-two length are rejected; the caller's sequence is never
/// padded.
///
/// ```
/// use radixfft::length::validate_length;
/// assert_eq!(validate_length(1), Ok(0));
/// assert_eq!(validate_length(256), Ok(8));
/// assert!(validate_length(12).is_err());
/// ```
pub fn validate_length(len: usize) -> Result<u32, FftError> {
    if len.is_power_of_two() {
        Ok(len.trailing_zeros())
    } else {
        fft_debug!("rejecting sequence of length {}", len);
        Err(FftError::InvalidLength { len })
    }
}

pub fn is_valid_length(len: usize) -> bool {
    len.is_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn powers_of_two_report_their_exponent() {
        for k in 0..usize::BITS {
            assert_eq!(validate_length(1usize << k), Ok(k));
        }
    }

    #[test]
    fn zero_and_non_powers_are_rejected() {
        for len in [0usize, 3, 5, 6, 7, 12, 100, 1023, usize::MAX] {
            assert_eq!(validate_length(len), Err(FftError::InvalidLength { len }));
            assert!(!is_valid_length(len));
        }
    }
}

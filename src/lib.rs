//! # radixfft - recursive radix-2 FFT for Rust
//!
//! A small, dependable forward/inverse Fast Fourier Transform engine for
//! power-of-two signals. It is the transform behind plotted demonstrations of
//! the DFT round-trip, linearity, time-scaling and differentiation
//! properties, and it is built to be checked against them.
//!
//! ## Features
//!
//! - **Recursive Cooley–Tukey** decimation in time over strided views, no
//!   sub-sequence copies
//! - **Two inverse methods**: inverse twiddles with a single top-level `1/n`,
//!   or conjugate / forward / conjugate
//! - **Twiddle tables** memoized by a [`TwiddleCache`] and shared through an
//!   immutable, `Arc`-backed [`TwiddleTables`]
//! - **Reference DFT** for verification
//! - **Parallel fan-out** of independent sub-transforms (optional)
//!
//! ## Cargo Features
//!
//! - `std` (default): `std::error::Error` for [`FftError`], environment
//!   configuration
//! - `parallel`: run the even/odd halves of large stages with Rayon
//! - `verbose-logging`: emit `log` records for transform entry, rejected lengths,
//!   twiddle table builds and fan-out decisions
//!
//! ## Example
//!
//! ```
//! use radixfft::{fft, ifft, Complex64};
//!
//! let signal = [1.0f64, -1.0, 1.0, -1.0];
//! let spectrum = fft(&signal).unwrap();
//! assert!((spectrum[2] - Complex64::new(4.0, 0.0)).norm() < 1e-12);
//!
//! let back = ifft(&spectrum).unwrap();
//! for (x, y) in signal.iter().zip(back.iter()) {
//!     assert!((y.re - x).abs() < 1e-12 && y.im.abs() < 1e-12);
//! }
//! ```
//!
//! Lengths that are not a power of two are rejected rather than padded:
//!
//! ```
//! use radixfft::{fft, FftError};
//! assert_eq!(fft(&[1.0f64, 2.0, 3.0]), Err(FftError::InvalidLength { len: 3 }));
//! ```
//!
//! ## License
//!
//! Licensed under either of
//! - Apache License, Version 2.0 ([LICENSE-APACHE](LICENSE-APACHE) or https://www.apache.org/licenses/LICENSE-2.0)
//! - MIT license ([LICENSE-MIT](LICENSE-MIT) or https://opensource.org/licenses/MIT)
//!
//! at your option.

#![no_std]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

/// Complex numbers and the [`Float`] abstraction.
pub mod num;

pub mod error;

/// Power-of-two length validation.
pub mod length;

/// Twiddle factors: direct evaluation, memoizing cache, shared tables.
pub mod twiddle;

pub mod fft;

/// Reference Discrete Fourier Transform
///
/// Direct summation used to validate the fast path.
pub mod dft;

/// Frequency axes, magnitudes and phases of a spectrum.
pub mod spectrum;

/// Parallel fan-out configuration.
#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::FftError;
pub use fft::{fft, ifft, FftImpl, FftOptions, InverseMethod, RecursiveFft};
pub use length::validate_length;
pub use num::{Complex, Complex32, Complex64, Float, Sample};
pub use twiddle::{twiddle, Direction, TwiddleCache, TwiddleTables};

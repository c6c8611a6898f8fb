//! Fast Fourier Transform.
//!
//! This module implements the recursive radix-2
//! [Cooley–Tukey algorithm](https://en.wikipedia.org/wiki/Cooley%E2%80%93Tukey_FFT_algorithm)
//! (decimation in time) for power-of-two lengths. The recursion walks strided
//! views of the input (start offset plus stride) instead of copying the even
//! and odd subsequences, and writes the two half-spectra straight into the
//! two halves of the output before combining them with a butterfly.
//!
//! [`fft`] and [`ifft`] are the two entry points. [`RecursiveFft`] exposes the
//! same transforms through the in-place [`FftImpl`] trait and lets callers
//! choose the inverse method, supply precomputed twiddle tables, and tune the
//! optional Rayon fan-out (feature `parallel`).

use alloc::vec;
use alloc::vec::Vec;

use crate::error::FftError;
use crate::length::validate_length;
use crate::num::{Complex, Float, Sample};
use crate::twiddle::{twiddle, Direction, TwiddleTables};

#[cfg(feature = "parallel")]
use crate::parallel;

pub use crate::num::{Complex32, Complex64};

/// Forward transform of `signal` with default options.
///
/// ```
/// use radixfft::{fft, Complex64};
/// let spectrum = fft(&[1.0f64, 1.0, 1.0, 1.0]).unwrap();
/// assert!((spectrum[0] - Complex64::new(4.0, 0.0)).norm() < 1e-12);
/// assert!(spectrum[1..].iter().all(|c| c.norm() < 1e-12));
/// ```
pub fn fft<S: Sample>(signal: &[S]) -> Result<Vec<Complex<S::Real>>, FftError> {
    RecursiveFft::new().forward(signal)
}

/// Inverse transform of `spectrum` with default options.
///
/// Recovers the signal that produced `spectrum` up to floating-point rounding.
pub fn ifft<S: Sample>(spectrum: &[S]) -> Result<Vec<Complex<S::Real>>, FftError> {
    RecursiveFft::new().inverse(spectrum)
}

/// How the inverse transform is computed. Both agree within rounding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InverseMethod {
    /// Run the recursion with `+2πi j/m` twiddles and scale the top-level
    /// result by `1/n`.
    #[default]
    Direct,
    /// Conjugate, forward transform, conjugate, scale by `1/n`.
    Conjugate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FftOptions {
    pub inverse: InverseMethod,
    /// Minimum sub-transform length for parallel fan-out.
    ///
    /// `None` uses the process-wide setting, `Some(0)` disables fan-out for
    /// this instance. Ignored without the `parallel` feature.
    pub parallel_threshold: Option<usize>,
}

/// In-place transform interface.
///
/// Every method validates the length before touching any buffer, so a
/// rejected call leaves its arguments unchanged.
pub trait FftImpl<T: Float> {
    fn fft(&self, data: &mut [Complex<T>]) -> Result<(), FftError>;
    fn ifft(&self, data: &mut [Complex<T>]) -> Result<(), FftError>;

    fn fft_into(&self, input: &[Complex<T>], output: &mut [Complex<T>]) -> Result<(), FftError> {
        validate_length(input.len())?;
        if input.len() != output.len() {
            return Err(FftError::MismatchedLengths {
                input: input.len(),
                output: output.len(),
            });
        }
        output.copy_from_slice(input);
        self.fft(output)
    }

    fn ifft_into(&self, input: &[Complex<T>], output: &mut [Complex<T>]) -> Result<(), FftError> {
        validate_length(input.len())?;
        if input.len() != output.len() {
            return Err(FftError::MismatchedLengths {
                input: input.len(),
                output: output.len(),
            });
        }
        output.copy_from_slice(input);
        self.ifft(output)
    }

    fn fft_vec(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        validate_length(input.len())?;
        let mut out = input.to_vec();
        self.fft(&mut out)?;
        Ok(out)
    }

    fn ifft_vec(&self, input: &[Complex<T>]) -> Result<Vec<Complex<T>>, FftError> {
        validate_length(input.len())?;
        let mut out = input.to_vec();
        self.ifft(&mut out)?;
        Ok(out)
    }
}

/// Recursive radix-2 transform.
///
/// Holds no mutable state: one instance can serve any number of threads.
#[derive(Debug, Clone)]
pub struct RecursiveFft<T: Float> {
    options: FftOptions,
    tables: Option<TwiddleTables<T>>,
}

impl<T: Float> Default for RecursiveFft<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> RecursiveFft<T> {
    /// Transform with default options, evaluating twiddles directly.
    pub fn new() -> Self {
        Self::with_options(FftOptions::default())
    }

    pub fn with_options(options: FftOptions) -> Self {
        Self {
            options,
            tables: None,
        }
    }

    /// Read twiddles from `tables`. Inputs longer than
    /// [`TwiddleTables::max_len`] fall back to direct evaluation.
    pub fn with_tables(mut self, tables: TwiddleTables<T>) -> Self {
        self.tables = Some(tables);
        self
    }

    pub fn options(&self) -> FftOptions {
        self.options
    }

    pub fn tables(&self) -> Option<&TwiddleTables<T>> {
        self.tables.as_ref()
    }

    /// Spectrum of `signal`, freshly allocated.
    pub fn forward<S: Sample<Real = T>>(&self, signal: &[S]) -> Result<Vec<Complex<T>>, FftError> {
        let n = signal.len();
        validate_length(n)?;
        let input: Vec<Complex<T>> = signal.iter().map(|s| s.to_complex()).collect();
        let mut out = vec![Complex::zero(); n];
        self.transform(&input, &mut out, Direction::Forward);
        Ok(out)
    }

    /// Signal reconstructed from `spectrum`, freshly allocated.
    pub fn inverse<S: Sample<Real = T>>(&self, spectrum: &[S]) -> Result<Vec<Complex<T>>, FftError> {
        let n = spectrum.len();
        validate_length(n)?;
        let input: Vec<Complex<T>> = spectrum.iter().map(|s| s.to_complex()).collect();
        let mut out = vec![Complex::zero(); n];
        self.inverse_transform(input, &mut out);
        Ok(out)
    }

    /// `input.len()` must already be validated and equal `output.len()`.
    fn inverse_transform(&self, mut input: Vec<Complex<T>>, output: &mut [Complex<T>]) {
        let n = input.len();
        let scale = T::one() / T::from_f64(n as f64);
        match self.options.inverse {
            InverseMethod::Direct => {
                self.transform(&input, output, Direction::Inverse);
                for c in output.iter_mut() {
                    *c = c.scale(scale);
                }
            }
            InverseMethod::Conjugate => {
                for c in input.iter_mut() {
                    *c = c.conj();
                }
                self.transform(&input, output, Direction::Forward);
                for c in output.iter_mut() {
                    *c = c.conj().scale(scale);
                }
            }
        }
    }

    /// Unscaled transform of `input` into `output` in the given direction.
    fn transform(&self, input: &[Complex<T>], output: &mut [Complex<T>], direction: Direction) {
        debug_assert_eq!(input.len(), output.len());
        let n = input.len();
        fft_debug!("{:?} transform of {} points", direction, n);
        let tables = self.tables.as_ref().filter(|t| t.max_len() >= n);
        if self.tables.is_some() && tables.is_none() {
            fft_debug!("twiddle tables too short for {} points, evaluating directly", n);
        }
        let pass = Pass {
            direction,
            tables,
            fan_out: FanOut::resolve(self.options.parallel_threshold),
        };
        if pass.fan_out.splits(n, 0) {
            fft_debug!(
                "fanning out sub-transforms of at least {} points over {} levels",
                pass.fan_out.threshold,
                pass.fan_out.max_depth
            );
        }
        recurse(&pass, input, 0, 1, output, 0);
    }
}

impl<T: Float> FftImpl<T> for RecursiveFft<T> {
    fn fft(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        validate_length(data.len())?;
        let input = data.to_vec();
        self.transform(&input, data, Direction::Forward);
        Ok(())
    }

    fn ifft(&self, data: &mut [Complex<T>]) -> Result<(), FftError> {
        validate_length(data.len())?;
        let input = data.to_vec();
        self.inverse_transform(input, data);
        Ok(())
    }
}

/// When the recursion hands its two halves to separate tasks.
#[derive(Debug, Clone, Copy)]
struct FanOut {
    threshold: usize,
    max_depth: usize,
}

impl FanOut {
    #[cfg(feature = "parallel")]
    fn resolve(threshold: Option<usize>) -> Self {
        Self {
            threshold: threshold.unwrap_or_else(parallel::parallel_threshold),
            max_depth: parallel::max_fan_out_depth(),
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn resolve(_threshold: Option<usize>) -> Self {
        Self {
            threshold: 0,
            max_depth: 0,
        }
    }

    fn splits(&self, n: usize, depth: usize) -> bool {
        self.threshold != 0 && n >= self.threshold && depth < self.max_depth
    }
}

#[cfg(feature = "parallel")]
use crate::parallel::join;

#[cfg(not(feature = "parallel"))]
#[inline]
fn join<A, B>(a: A, b: B)
where
    A: FnOnce() + Send,
    B: FnOnce() + Send,
{
    a();
    b();
}

/// Per-call state shared by every level of the recursion.
struct Pass<'a, T: Float> {
    direction: Direction,
    tables: Option<&'a TwiddleTables<T>>,
    fan_out: FanOut,
}

/// Transform the view `input[offset], input[offset + stride], ...` of length
/// `out.len()` into `out`.
fn recurse<T: Float>(
    pass: &Pass<'_, T>,
    input: &[Complex<T>],
    offset: usize,
    stride: usize,
    out: &mut [Complex<T>],
    depth: usize,
) {
    let n = out.len();
    if n == 1 {
        out[0] = input[offset];
        return;
    }

    let half = n / 2;
    let (even, odd) = out.split_at_mut(half);
    if pass.fan_out.splits(n, depth) {
        join(
            || recurse(pass, input, offset, stride * 2, even, depth + 1),
            || recurse(pass, input, offset + stride, stride * 2, odd, depth + 1),
        );
    } else {
        recurse(pass, input, offset, stride * 2, even, depth + 1);
        recurse(pass, input, offset + stride, stride * 2, odd, depth + 1);
    }

    match pass.tables.and_then(|t| t.stage(n, pass.direction)) {
        Some(table) => butterfly(even, odd, |f| table[f]),
        None => butterfly(even, odd, |f| twiddle(n, f, pass.direction)),
    }
}

/// `E[f] ± w(f)·O[f]`, written back over the even and odd halves.
#[inline(always)]
fn butterfly<T: Float, W>(even: &mut [Complex<T>], odd: &mut [Complex<T>], w: W)
where
    W: Fn(usize) -> Complex<T>,
{
    for (f, (e, o)) in even.iter_mut().zip(odd.iter_mut()).enumerate() {
        let t = w(f).mul(*o);
        let u = *e;
        *e = u.add(t);
        *o = u.sub(t);
    }
}

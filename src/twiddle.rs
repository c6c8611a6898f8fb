//! Roots of unity for the butterfly stages.
//!
//! [`twiddle`] evaluates `e^{∓2πi j/m}` directly. [`TwiddleCache`] memoizes
//! whole per-stage tables the way a planner would, and [`TwiddleTables`] is
//! the immutable, shareable snapshot a [`RecursiveFft`](crate::fft::RecursiveFft)
//! reads from. All three produce bit-identical values for the same
//! `(m, j, direction)`.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::f64::consts::PI;

use hashbrown::HashMap;

use crate::error::FftError;
use crate::length::validate_length;
use crate::num::{Complex, Float};

/// Sign of the exponent in the transform kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// `e^{-2πi jk/n}`
    Forward,
    /// `e^{+2πi jk/n}`
    Inverse,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => -1.0,
            Direction::Inverse => 1.0,
        }
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::Forward => Direction::Inverse,
            Direction::Inverse => Direction::Forward,
        }
    }
}

/// `e^{sign · 2πi · (num mod den)/den}`, evaluated in `f64` and narrowed to `T`.
pub(crate) fn root_of_unity<T: Float>(num: usize, den: usize, direction: Direction) -> Complex<T> {
    let angle = 2.0 * PI * (num % den) as f64 / den as f64;
    let (sin, cos) = libm::sincos(angle);
    Complex::new(T::from_f64(cos), T::from_f64(direction.sign() * sin))
}

/// Twiddle factor `j` for a butterfly stage of size `m`.
///
/// # Panics
///
/// Panics if `m < 2` or `j >= m / 2`. The transforms only call this with
/// indices from a validated stage.
#[inline]
pub fn twiddle<T: Float>(m: usize, j: usize, direction: Direction) -> Complex<T> {
    assert!(m >= 2 && j < m / 2, "twiddle index {j} out of range for stage {m}");
    root_of_unity(j, m, direction)
}

fn build_table<T: Float>(m: usize, direction: Direction) -> Arc<[Complex<T>]> {
    let table: Vec<Complex<T>> = (0..m / 2).map(|j| twiddle(m, j, direction)).collect();
    Arc::from(table)
}

/// Memoizing source of per-stage twiddle tables.
///
/// The table for stage size `m` has `m/2` entries; entry `j` equals
/// [`twiddle(m, j, direction)`](twiddle).
#[derive(Debug, Clone)]
pub struct TwiddleCache<T: Float> {
    tables: HashMap<(usize, Direction), Arc<[Complex<T>]>>,
}

impl<T: Float> Default for TwiddleCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> TwiddleCache<T> {
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// Retrieve (building on first use) the table for stage size `m`.
    pub fn table(&mut self, m: usize, direction: Direction) -> Arc<[Complex<T>]> {
        let table = self.tables.entry((m, direction)).or_insert_with(|| {
            fft_trace!("building {:?} twiddle table for stage {}", direction, m);
            build_table(m, direction)
        });
        Arc::clone(table)
    }

    /// Number of cached tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn clear(&mut self) {
        self.tables.clear();
    }

    /// Collect the tables for every stage of an `n`-point transform, in both
    /// directions. `n` must be a power of two.
    pub fn tables_for(&mut self, n: usize) -> Result<TwiddleTables<T>, FftError> {
        let stages = validate_length(n)?;
        let mut forward = Vec::with_capacity(stages as usize);
        let mut inverse = Vec::with_capacity(stages as usize);
        for s in 1..=stages {
            let m = 1usize << s;
            forward.push(self.table(m, Direction::Forward));
            inverse.push(self.table(m, Direction::Inverse));
        }
        fft_debug!("prepared twiddle tables for {} stages (n = {})", stages, n);
        Ok(TwiddleTables {
            max_len: n,
            forward,
            inverse,
        })
    }
}

/// Immutable twiddle tables for every stage size `2, 4, ..., max_len`.
///
/// Cloning is cheap: the tables are reference counted.
#[derive(Debug, Clone)]
pub struct TwiddleTables<T: Float> {
    max_len: usize,
    forward: Vec<Arc<[Complex<T>]>>,
    inverse: Vec<Arc<[Complex<T>]>>,
}

impl<T: Float> TwiddleTables<T> {
    /// Build tables for an `n`-point transform without keeping a cache.
    pub fn new(n: usize) -> Result<Self, FftError> {
        TwiddleCache::new().tables_for(n)
    }

    /// Largest transform length these tables cover.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// The whole table for stage size `m`, if covered.
    pub fn stage(&self, m: usize, direction: Direction) -> Option<&[Complex<T>]> {
        if m < 2 || m > self.max_len || !m.is_power_of_two() {
            return None;
        }
        let idx = m.trailing_zeros() as usize - 1;
        let tables = match direction {
            Direction::Forward => &self.forward,
            Direction::Inverse => &self.inverse,
        };
        tables.get(idx).map(|t| &t[..])
    }

    pub fn get(&self, m: usize, j: usize, direction: Direction) -> Option<Complex<T>> {
        self.stage(m, direction)
            .and_then(|table| table.get(j))
            .copied()
    }
}

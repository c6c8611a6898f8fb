//! Rayon fan-out for the recursive transform.
//!
//! The even and odd half-transforms of a stage touch disjoint halves of the
//! output, so above a size threshold they are handed to [`rayon::join`].
//! The threshold is resolved in this order:
//!
//! 1. [`FftOptions::parallel_threshold`](crate::fft::FftOptions) on the
//!    transform instance,
//! 2. [`set_parallel_threshold`],
//! 3. the `RADIXFFT_PAR_THRESHOLD` environment variable (read once),
//! 4. [`DEFAULT_PARALLEL_THRESHOLD`].

use core::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Sub-transform length at which halves start running on separate tasks.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 4096;

/// Environment variable overriding [`DEFAULT_PARALLEL_THRESHOLD`].
pub const PARALLEL_THRESHOLD_ENV: &str = "RADIXFFT_PAR_THRESHOLD";

/// `0` means no override.
static PARALLEL_THRESHOLD_OVERRIDE: AtomicUsize = AtomicUsize::new(0);
static ENV_THRESHOLD: OnceLock<Option<usize>> = OnceLock::new();
static MAX_DEPTH: OnceLock<usize> = OnceLock::new();

/// Set the process-wide minimum sub-transform length for parallel fan-out.
///
/// Passing `0` reverts to the environment variable or the built-in default.
pub fn set_parallel_threshold(threshold: usize) {
    PARALLEL_THRESHOLD_OVERRIDE.store(threshold, Ordering::Relaxed);
}

fn env_threshold() -> Option<usize> {
    *ENV_THRESHOLD.get_or_init(|| {
        let raw = std::env::var(PARALLEL_THRESHOLD_ENV).ok()?;
        match raw.trim().parse::<usize>() {
            Ok(0) | Err(_) => {
                fft_warn!("ignoring invalid {}={:?}", PARALLEL_THRESHOLD_ENV, raw);
                None
            }
            Ok(v) => Some(v),
        }
    })
}

/// The process-wide threshold currently in effect.
pub fn parallel_threshold() -> usize {
    let override_thr = PARALLEL_THRESHOLD_OVERRIDE.load(Ordering::Relaxed);
    if override_thr != 0 {
        return override_thr;
    }
    env_threshold().unwrap_or(DEFAULT_PARALLEL_THRESHOLD)
}

/// Number of recursion levels that may fan out: enough to give every core a
/// task, plus one level of slack for work stealing.
pub(crate) fn max_fan_out_depth() -> usize {
    *MAX_DEPTH.get_or_init(|| {
        let cores = num_cpus::get().max(1);
        cores.next_power_of_two().trailing_zeros() as usize + 1
    })
}

#[inline]
pub(crate) fn join<A, B>(a: A, b: B)
where
    A: FnOnce() + Send,
    B: FnOnce() + Send,
{
    rayon::join(a, b);
}

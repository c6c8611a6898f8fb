//! Prints the spectra behind the round-trip and time-scaling demonstrations.
use std::f64::consts::PI;

use radixfft::spectrum::{bin_frequencies, magnitudes};
use radixfft::{fft, ifft};

const N: usize = 256;

fn linspace(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}

fn peak(mags: &[f64]) -> (usize, f64) {
    mags[..mags.len() / 2]
        .iter()
        .copied()
        .enumerate()
        .fold((0, 0.0), |best, (f, m)| if m > best.1 { (f, m) } else { best })
}

fn main() -> Result<(), radixfft::FftError> {
    let xs = linspace(N);
    let freqs = bin_frequencies(N, 1.0)?;

    let y: Vec<f64> = xs
        .iter()
        .map(|x| (2.0 * PI * 13.0 * x).sin() + (2.0 * PI * 25.0 * x).sin())
        .collect();
    let spectrum = fft(&y)?;
    let back = ifft(&spectrum)?;
    let err = y
        .iter()
        .zip(back.iter())
        .map(|(a, b)| (a - b.re).abs())
        .fold(0.0, f64::max);
    println!("round-trip max error: {err:e}");

    for a in [1.0, 3.0] {
        let g: Vec<f64> = xs.iter().map(|x| (2.0 * PI * 10.0 * a * x).sin()).collect();
        let (f, m) = peak(&magnitudes(&fft(&g)?));
        println!("a = {a}: peak at frequency {} with magnitude {m:.3}", freqs[f]);
    }
    Ok(())
}

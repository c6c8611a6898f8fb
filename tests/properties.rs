// Test intent: the DFT properties the engine is demonstrated against.
use std::f64::consts::PI;

use radixfft::spectrum::{magnitudes, signed_frequencies};
use radixfft::{fft, ifft, Complex64};

const N: usize = 256;

/// `n` equally spaced points over `[0, 1]`, both ends included.
fn linspace(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64 / (n - 1) as f64).collect()
}

fn sample<F: Fn(f64) -> f64>(xs: &[f64], f: F) -> Vec<f64> {
    xs.iter().map(|&x| f(x)).collect()
}

fn argmax(v: &[f64]) -> usize {
    v.iter()
        .enumerate()
        .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
        .unwrap()
        .0
}

#[test]
fn roundtrip_recovers_two_tone_signal() {
    let xs = linspace(N);
    let y = sample(&xs, |x| (2.0 * PI * 13.0 * x).sin() + (2.0 * PI * 25.0 * x).sin());
    let spectrum = fft(&y).unwrap();
    let back = ifft(&spectrum).unwrap();
    for (orig, rec) in y.iter().zip(back.iter()) {
        assert!((rec.re - orig).abs() < 1e-12);
        assert!(rec.im.abs() < 1e-12);
    }
}

#[test]
fn two_tone_peaks_sit_on_their_bins() {
    let xs: Vec<f64> = (0..N).map(|i| i as f64 / N as f64).collect();
    let y = sample(&xs, |x| (2.0 * PI * 13.0 * x).sin() + (2.0 * PI * 25.0 * x).sin());
    let mags = magnitudes(&fft(&y).unwrap());
    let lower = &mags[..N / 2];
    let peak = argmax(lower);
    assert!(peak == 13 || peak == 25);
    assert!((mags[13] - N as f64 / 2.0).abs() < 1e-9);
    assert!((mags[25] - N as f64 / 2.0).abs() < 1e-9);
    // Real input mirrors around the Nyquist bin.
    assert!((mags[N - 13] - mags[13]).abs() < 1e-9);
}

#[test]
fn linearity() {
    let (a, b) = (3.0, 5.0);
    let xs = linspace(N);
    let y1 = sample(&xs, |x| 2.0 * (-3.0 * x).exp());
    let y2 = sample(&xs, |x| (8.0 * PI * x).cos() * (-2.0 * x).exp());
    let y3: Vec<f64> = y1.iter().zip(y2.iter()).map(|(p, q)| a * p + b * q).collect();

    let u1 = fft(&y1).unwrap();
    let u2 = fft(&y2).unwrap();
    let u3 = fft(&y3).unwrap();
    for ((p, q), r) in u1.iter().zip(u2.iter()).zip(u3.iter()) {
        let combined = p.scale(a) + q.scale(b);
        assert!((combined - *r).norm() < 1e-10, "{} vs {}", combined, r);
    }
}

#[test]
fn linearity_with_complex_scalars() {
    let y1: Vec<Complex64> = (0..64).map(|i| Complex64::new(i as f64, 1.0)).collect();
    let y2: Vec<Complex64> = (0..64)
        .map(|i| Complex64::new((i as f64).sin(), (i as f64).cos()))
        .collect();
    let a = Complex64::new(0.5, -2.0);
    let b = Complex64::new(-1.0, 0.25);
    let y3: Vec<Complex64> = y1.iter().zip(y2.iter()).map(|(p, q)| a * *p + b * *q).collect();
    let u1 = fft(&y1).unwrap();
    let u2 = fft(&y2).unwrap();
    let u3 = fft(&y3).unwrap();
    for ((p, q), r) in u1.iter().zip(u2.iter()).zip(u3.iter()) {
        assert!((a * *p + b * *q - *r).norm() < 1e-9);
    }
}

#[test]
fn time_scaling_moves_and_flattens_the_peak() {
    // Y(x) = cos(20πx)·e^{-2x} peaks at f = 10; Y(3x) should peak three times
    // further out and roughly three times lower. The signals live on a
    // finite interval, so the height ratio is only approximately 3.
    let xs = linspace(N);
    let y = sample(&xs, |x| (20.0 * PI * x).cos() * (-2.0 * x).exp());
    let y_scaled = sample(&xs, |x| (60.0 * PI * x).cos() * (-6.0 * x).exp());
    let u = magnitudes(&fft(&y).unwrap());
    let u_scaled = magnitudes(&fft(&y_scaled).unwrap());

    assert_eq!(argmax(&u[..N / 2]), 10);
    assert_eq!(argmax(&u_scaled[..N / 2]), 30);
    let ratio = u[10] / u_scaled[30];
    assert!(ratio > 2.0 && ratio < 3.5, "peak ratio {}", ratio);
}

#[test]
fn differentiation_holds_for_periodic_band_limited_signals() {
    // On a periodic grid the DFT of dY/dx is 2πi·f·U(f) bin for bin.
    let xs: Vec<f64> = (0..N).map(|i| i as f64 / N as f64).collect();
    let y = sample(&xs, |x| (2.0 * PI * 3.0 * x).sin() + 0.5 * (2.0 * PI * 7.0 * x).cos());
    let dy = sample(&xs, |x| {
        2.0 * PI * 3.0 * (2.0 * PI * 3.0 * x).cos() - 0.5 * 2.0 * PI * 7.0 * (2.0 * PI * 7.0 * x).sin()
    });
    let u = fft(&y).unwrap();
    let du = fft(&dy).unwrap();
    let freqs = signed_frequencies(N, 1.0f64).unwrap();
    for ((ui, di), f) in u.iter().zip(du.iter()).zip(freqs.iter()) {
        let expected = Complex64::i().scale(2.0 * PI * f) * *ui;
        assert!((expected - *di).norm() < 1e-8, "f = {}", f);
    }
}

#[test]
fn differentiation_is_only_approximate_for_non_periodic_signals() {
    // exp(-6x) on [0, 1] is not periodic, so the jump at the boundary
    // dominates and the discrete spectrum of the derivative departs from
    // 2πi·f·U(f). The departure stays bounded.
    let xs = linspace(N);
    let y = sample(&xs, |x| (-6.0 * x).exp());
    let dy = sample(&xs, |x| -6.0 * (-6.0 * x).exp());
    let u = fft(&y).unwrap();
    let du = fft(&dy).unwrap();
    for f in 1..=20 {
        let expected = Complex64::i().scale(2.0 * PI * f as f64) * u[f];
        let rel = (du[f] - expected).norm() / expected.norm();
        assert!(rel.is_finite() && rel < 1.5, "f = {}: {}", f, rel);
    }
}

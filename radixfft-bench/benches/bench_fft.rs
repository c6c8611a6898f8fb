use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use radixfft::fft::{Complex32, FftImpl, FftOptions, InverseMethod, RecursiveFft};
use radixfft::TwiddleTables;
use rustfft::num_complex::Complex as RustComplex;
use rustfft::FftPlanner as RustFftPlanner;

const SIZES: &[usize] = &[64, 256, 1024, 4096, 16384, 65536];

fn signal(size: usize) -> Vec<Complex32> {
    (0..size)
        .map(|i| Complex32::new((i as f32 * 0.01).sin(), 0.0))
        .collect()
}

fn bench_forward(c: &mut Criterion) {
    for &size in SIZES {
        let mut group = c.benchmark_group(format!("forward_{}", size));
        let input = signal(size);
        let mut data = input.clone();

        let direct = RecursiveFft::<f32>::new();
        group.bench_function(BenchmarkId::new("radixfft/direct", size), |b| {
            b.iter(|| {
                data.copy_from_slice(&input);
                direct.fft(black_box(&mut data)).unwrap();
            })
        });

        let tabled = RecursiveFft::<f32>::new().with_tables(TwiddleTables::new(size).unwrap());
        group.bench_function(BenchmarkId::new("radixfft/tables", size), |b| {
            b.iter(|| {
                data.copy_from_slice(&input);
                tabled.fft(black_box(&mut data)).unwrap();
            })
        });

        #[cfg(feature = "parallel")]
        {
            let parallel = RecursiveFft::<f32>::with_options(FftOptions {
                parallel_threshold: Some(1024),
                ..FftOptions::default()
            })
            .with_tables(TwiddleTables::new(size).unwrap());
            group.bench_function(BenchmarkId::new("radixfft/parallel", size), |b| {
                b.iter(|| {
                    data.copy_from_slice(&input);
                    parallel.fft(black_box(&mut data)).unwrap();
                })
            });
        }

        let mut planner = RustFftPlanner::<f32>::new();
        let rust = planner.plan_fft_forward(size);
        let rust_input: Vec<RustComplex<f32>> =
            input.iter().map(|c| RustComplex::new(c.re, c.im)).collect();
        let mut rust_data = rust_input.clone();
        group.bench_function(BenchmarkId::new("rustfft", size), |b| {
            b.iter(|| {
                rust_data.copy_from_slice(&rust_input);
                rust.process(black_box(&mut rust_data));
            })
        });

        group.finish();
    }
}

fn bench_inverse(c: &mut Criterion) {
    for &size in &[1024usize, 16384] {
        let mut group = c.benchmark_group(format!("inverse_{}", size));
        let input = signal(size);
        let mut data = input.clone();
        for (name, method) in [
            ("direct", InverseMethod::Direct),
            ("conjugate", InverseMethod::Conjugate),
        ] {
            let engine = RecursiveFft::<f32>::with_options(FftOptions {
                inverse: method,
                parallel_threshold: Some(0),
            });
            group.bench_function(BenchmarkId::new(name, size), |b| {
                b.iter(|| {
                    data.copy_from_slice(&input);
                    engine.ifft(black_box(&mut data)).unwrap();
                })
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_forward, bench_inverse);
criterion_main!(benches);

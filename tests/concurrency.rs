// Test intent: one transform instance serves many threads at once.
use std::sync::Arc;
use std::thread;

use radixfft::fft::{FftImpl, RecursiveFft};
use radixfft::{Complex64, TwiddleTables};

#[test]
fn shared_instance_across_threads() {
    let engine = Arc::new(RecursiveFft::<f64>::new().with_tables(TwiddleTables::new(1024).unwrap()));
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                let n = 256usize << t;
                let input: Vec<Complex64> = (0..n)
                    .map(|i| Complex64::new(((i * (t + 1)) as f64).sin(), 0.0))
                    .collect();
                let mut data = input.clone();
                engine.fft(&mut data).unwrap();
                engine.ifft(&mut data).unwrap();
                data.iter()
                    .zip(input.iter())
                    .map(|(a, b)| (*a - *b).norm())
                    .fold(0.0, f64::max)
            })
        })
        .collect();
    for h in handles {
        let err = h.join().expect("worker panicked");
        assert!(err < 1e-9, "round-trip error {err}");
    }
}

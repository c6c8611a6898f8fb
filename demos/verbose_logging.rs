//! Demonstrates enabling verbose logging for radixfft.
use radixfft::fft::{FftImpl, RecursiveFft};
use radixfft::{Complex32, TwiddleCache};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Trace)
        .init();

    let mut cache = TwiddleCache::<f32>::new();
    let fft = RecursiveFft::new().with_tables(cache.tables_for(8).unwrap());
    let mut data: Vec<Complex32> = (0..8).map(|i| Complex32::new(i as f32, 0.0)).collect();
    fft.fft(&mut data).unwrap();
    fft.ifft(&mut data).unwrap();

    // Rejected lengths are logged before the error is returned.
    let _ = radixfft::fft(&[1.0f32, 2.0, 3.0]);
}

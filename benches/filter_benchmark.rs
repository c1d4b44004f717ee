//! Benchmark for the SOS cascade and direct-form FIR filters
//!
//! Runs both realizations over signals of increasing length and reports
//! mean, spread, median and range per case.

use sos_filters::{Filter, FirFilter, SosFilter};
use std::time::Instant;

/// Generate a two-tone test signal
fn generate_test_signal(num_samples: usize, sample_rate: f64) -> Vec<f64> {
    (0..num_samples)
        .map(|i| {
            let t = i as f64 / sample_rate;
            0.5 * (2.0 * std::f64::consts::PI * 440.0 * t).sin()
                + 0.25 * (2.0 * std::f64::consts::PI * 7000.0 * t).sin()
        })
        .collect()
}

fn benchmark_filter(filter: &dyn Filter, signal: &[f64], label: &str) {
    println!("Benchmarking {}: {} samples", label, signal.len());

    // Warm up
    for _ in 0..3 {
        let _ = filter.filter(signal);
    }

    let num_runs = 10;
    let mut times = Vec::with_capacity(num_runs);

    for _ in 0..num_runs {
        let start = Instant::now();
        let result = filter.filter(signal);
        let elapsed = start.elapsed();

        assert!(result.is_ok(), "Filtering failed");
        times.push(elapsed.as_secs_f64() * 1000.0);
    }

    times.sort_by(|a, b| a.total_cmp(b));
    let mean = times.iter().sum::<f64>() / times.len() as f64;
    let std_dev =
        (times.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / times.len() as f64).sqrt();
    let median = times[times.len() / 2];
    let min = times[0];
    let max = times[times.len() - 1];

    println!(
        "Results: {:.3}ms ± {:.3}ms (median: {:.3}ms, range: {:.3}-{:.3}ms)",
        mean, std_dev, median, min, max
    );
    println!();
}

fn main() {
    println!("SOS / FIR Filter Benchmark");
    println!("==========================");
    println!();

    let sample_rate = 48000.0;

    // 4th-order lowpass as two sections
    let sos = SosFilter::new(
        vec![
            vec![1.0, 2.0, 1.0, 1.0, -1.5610, 0.6414],
            vec![1.0, 2.0, 1.0, 1.0, -1.7786, 0.8008],
        ],
        vec![0.0201, 0.0055, 1.0],
    );
    let fir = FirFilter::new(vec![1.0 / 64.0; 64]);

    for num_samples in [1_000, 48_000, 480_000] {
        let signal = generate_test_signal(num_samples, sample_rate);
        benchmark_filter(&sos, &signal, "SOS cascade (2 sections)");
        benchmark_filter(&fir, &signal, "Direct-form FIR (64 taps)");
    }

    println!("Benchmark Complete!");
}

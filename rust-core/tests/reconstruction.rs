//! Filtering and inverse reconstruction pipelines

mod common;

use sliding_dft::{InverseReconstructor, SlidingDftEngine, SpectralFilter, SpectrumHistory};

#[test]
fn test_batch_inverse_recovers_window() {
    let n = 32;
    let signal = common::noise(3 * n, 7);
    let mut engine = SlidingDftEngine::new(n).unwrap();
    let mut inverse = InverseReconstructor::new(n).unwrap();

    for (t, &x) in signal.iter().enumerate() {
        let spectrum = engine.advance(x);
        if t + 1 < n {
            continue;
        }
        let recovered = inverse.batch(&spectrum).unwrap();
        let window = &signal[t + 1 - n..=t];
        for (k, (r, &expected)) in recovered.iter().zip(window).enumerate() {
            assert!((r.re - expected).abs() < 1e-9, "t={} k={}", t, k);
            assert!(r.im.abs() < 1e-9, "t={} k={}", t, k);
        }
    }
}

#[test]
fn test_empty_filter_preserves_roundtrip() {
    let n = 16;
    let signal = common::noise(n, 3);
    let mut engine = SlidingDftEngine::new(n).unwrap();
    let spectrum = engine.process(&signal).pop().unwrap();

    let filtered = SpectralFilter::new(Vec::new()).apply(&spectrum).unwrap();
    assert_eq!(filtered, spectrum);

    let mut inverse = InverseReconstructor::new(n).unwrap();
    let recovered = inverse.batch_real(&filtered).unwrap();
    for (r, x) in recovered.iter().zip(&signal) {
        assert!((r - x).abs() < 1e-9);
    }
}

#[test]
fn test_low_pass_removes_high_tone() {
    // 600 Hz sine plus 10 kHz cosine at 24 kHz, N = 512, T = 2048
    let n = 512;
    let fs = 24_000.0;
    let signal = common::two_tone(2048, fs, 600.0, 10_000.0);
    let sine = common::two_tone(2048, fs, 600.0, 0.0)
        .into_iter()
        .map(|x| x - 1.0)
        .collect::<Vec<_>>();

    let mut engine = SlidingDftEngine::new(n).unwrap();
    let spectrum = engine.process(&signal).pop().unwrap();
    let filtered = SpectralFilter::low_pass(128, n).apply(&spectrum).unwrap();

    let mut inverse = InverseReconstructor::new(n).unwrap();
    let recovered = inverse.batch_real(&filtered).unwrap();

    let t = signal.len() - 1;
    let target = common::trailing_window(&sine, t, n);
    let original = common::trailing_window(&signal, t, n);

    let err_filtered: f64 = recovered.iter().zip(&target).map(|(a, b)| (a - b).powi(2)).sum();
    let err_original: f64 = original.iter().zip(&target).map(|(a, b)| (a - b).powi(2)).sum();

    assert!(
        err_filtered < 0.1 * err_original,
        "filtered error {} vs unfiltered {}",
        err_filtered,
        err_original
    );
}

#[test]
fn test_streaming_inverse_lags_the_input() {
    let n = 8;
    let signal: Vec<f64> = (1..=32).map(|i| i as f64).collect();
    let mut engine = SlidingDftEngine::new(n).unwrap();
    let mut history = SpectrumHistory::new(n).unwrap();
    engine.process_into_history(&signal, &mut history).unwrap();

    let inverse = InverseReconstructor::new(n).unwrap();
    let streamed = inverse.streaming_history(&history).unwrap();
    assert_eq!(streamed.len(), signal.len());

    // Each value is the oldest sample of its window, not the one just fed
    for (t, value) in streamed.iter().enumerate() {
        let oldest = if t + 1 >= n { signal[t + 1 - n] } else { 0.0 };
        assert!((value.re - oldest).abs() < 1e-9, "t = {}", t);
        assert!((value.re - signal[t]).abs() > 0.5, "t = {}", t);
    }
}

#[test]
fn test_streaming_and_batch_diverge() {
    let n = 16;
    let signal = common::noise(2 * n, 11);
    let mut engine = SlidingDftEngine::new(n).unwrap();
    let spectrum = engine.process(&signal).pop().unwrap();

    let mut inverse = InverseReconstructor::new(n).unwrap();
    let streamed = inverse.streaming(&spectrum).unwrap();
    let batch = inverse.batch(&spectrum).unwrap();

    // The only coincidence is with the k = 0 term of the batch output
    assert!((streamed - batch[0]).norm() < 1e-9);
    assert!((streamed - batch[n - 1]).norm() > 1e-6);
}

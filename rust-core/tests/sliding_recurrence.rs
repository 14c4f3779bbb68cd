//! Sliding DFT against direct recomputation

mod common;

use num_complex::Complex64;
use sliding_dft::spectrum::dft_direct;
use sliding_dft::{EngineState, SlidingDftEngine, Spectrum, SpectrumHistory};

#[test]
fn test_matches_direct_dft_every_step() {
    for n in [1, 2, 3, 5, 8, 16] {
        let signal = common::noise(5 * n + 3, n as u64);
        let mut engine = SlidingDftEngine::new(n).unwrap();

        for (t, &x) in signal.iter().enumerate() {
            let spectrum = engine.advance(x);
            let direct = dft_direct(&common::trailing_window(&signal, t, n));
            let diff = spectrum.max_abs_diff(&direct);
            assert!(diff < 1e-9, "N={} t={}: diff = {}", n, t, diff);
        }
    }
}

#[test]
fn test_zero_input_stays_zero() {
    let mut engine = SlidingDftEngine::new(12).unwrap();
    for _ in 0..100 {
        let spectrum = engine.advance(0.0);
        assert!(spectrum.bins().iter().all(|c| *c == Complex64::new(0.0, 0.0)));
    }
}

#[test]
fn test_impulse_scenario() {
    // N = 8, T = 8, f = [1, 0, 0, 0, 0, 0, 0, 0]
    let mut signal = vec![0.0; 8];
    signal[0] = 1.0;

    let mut engine = SlidingDftEngine::new(8).unwrap();
    let mut history = SpectrumHistory::new(8).unwrap();
    engine.process_into_history(&signal, &mut history).unwrap();

    assert_eq!(history.len(), 8);
    let last = history.get(7).unwrap();
    for (n, bin) in last.bins().iter().enumerate() {
        assert!(
            (bin - Complex64::new(1.0, 0.0)).norm() < 1e-12,
            "bin {} = {}",
            n,
            bin
        );
    }
}

#[test]
fn test_state_transition() {
    let mut engine = SlidingDftEngine::new(4).unwrap();
    for _ in 0..4 {
        assert_eq!(engine.state(), EngineState::Filling);
        engine.advance(1.0);
    }
    for _ in 0..10 {
        assert_eq!(engine.state(), EngineState::Steady);
        engine.advance(1.0);
    }
}

#[test]
fn test_constant_input_concentrates_in_dc() {
    let n = 16;
    let mut engine = SlidingDftEngine::new(n).unwrap();
    let spectra = engine.process(&vec![0.5; 3 * n]);
    let steady: &Spectrum = &spectra[2 * n];

    assert!((steady.bins()[0] - Complex64::new(0.5 * n as f64, 0.0)).norm() < 1e-9);
    for bin in &steady.bins()[1..] {
        assert!(bin.norm() < 1e-9);
    }
}

#[test]
fn test_long_stream_drift_is_small() {
    let n = 64;
    let signal = common::two_tone(20_000, 24_000.0, 600.0, 10_000.0);
    let mut engine = SlidingDftEngine::new(n).unwrap();
    engine.process(&signal);

    let drift = engine.drift().unwrap();
    assert!(drift < 1e-6, "drift = {}", drift);
}

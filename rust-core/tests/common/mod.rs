#![allow(dead_code)]

use std::f64::consts::PI;

/// Deterministic pseudo-random samples in [-1, 1)
pub fn noise(len: usize, seed: u64) -> Vec<f64> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0
        })
        .collect()
}

/// sin(f1) + cos(f2) sampled at `sample_rate`
pub fn two_tone(len: usize, sample_rate: f64, sin_hz: f64, cos_hz: f64) -> Vec<f64> {
    (0..len)
        .map(|i| {
            let t = i as f64 / sample_rate;
            (2.0 * PI * sin_hz * t).sin() + (2.0 * PI * cos_hz * t).cos()
        })
        .collect()
}

/// Trailing `n` samples of `signal[..=t]`, zero-padded at the front
pub fn trailing_window(signal: &[f64], t: usize, n: usize) -> Vec<f64> {
    (0..n)
        .map(|k| {
            let idx = t as i64 - n as i64 + 1 + k as i64;
            if idx < 0 {
                0.0
            } else {
                signal[idx as usize]
            }
        })
        .collect()
}

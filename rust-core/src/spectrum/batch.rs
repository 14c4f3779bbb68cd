//! Full-window forward transforms
//!
//! `dft_direct` is the O(N²) textbook definition, `BatchDft` the planned
//! realfft equivalent used to resynchronise the sliding recurrence.

use num_complex::Complex64;
use realfft::{RealFftPlanner, RealToComplex};
use std::f64::consts::PI;
use std::sync::Arc;

use super::Spectrum;
use crate::error::{check_spectrum_len, check_window_length, Result};

/// Direct DFT: X[k] = Σ_m x[m] · exp(-i·2πkm/N)
pub fn dft_direct(window: &[f64]) -> Spectrum {
    let n = window.len();
    let bins = (0..n)
        .map(|k| {
            window
                .iter()
                .enumerate()
                .map(|(m, &x)| x * Complex64::from_polar(1.0, -2.0 * PI * (k * m) as f64 / n as f64))
                .sum::<Complex64>()
        })
        .collect();
    Spectrum::from_bins(bins)
}

/// Planned forward FFT over a real window of fixed length
pub struct BatchDft {
    window_length: usize,
    r2c: Arc<dyn RealToComplex<f64>>,
    input_buffer: Vec<f64>,
    output_buffer: Vec<Complex64>,
}

impl BatchDft {
    pub fn new(window_length: usize) -> Result<Self> {
        check_window_length(window_length)?;

        let mut planner = RealFftPlanner::<f64>::new();
        let r2c = planner.plan_fft_forward(window_length);
        let input_buffer = r2c.make_input_vec();
        let output_buffer = r2c.make_output_vec();

        Ok(Self {
            window_length,
            r2c,
            input_buffer,
            output_buffer,
        })
    }

    /// Transform one window of N samples into the full N-bin spectrum
    ///
    /// The real FFT yields bins 0..=N/2; the remainder follow from
    /// Hermitian symmetry, F[N-k] = conj(F[k]).
    pub fn forward(&mut self, window: &[f64]) -> Result<Spectrum> {
        check_spectrum_len(self.window_length, window.len())?;

        self.input_buffer.copy_from_slice(window);
        self.r2c
            .process(&mut self.input_buffer, &mut self.output_buffer)
            .expect("FFT processing failed");

        let n = self.window_length;
        let half = self.output_buffer.len();
        let bins = (0..n)
            .map(|k| {
                if k < half {
                    self.output_buffer[k]
                } else {
                    self.output_buffer[n - k].conj()
                }
            })
            .collect();

        Ok(Spectrum::from_bins(bins))
    }

    pub fn window_length(&self) -> usize {
        self.window_length
    }
}

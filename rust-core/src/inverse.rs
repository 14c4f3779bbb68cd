//! Time-domain reconstruction from spectrum snapshots
//!
//! Two modes that are not algebraically equivalent:
//!
//! - `batch`: textbook inverse DFT, x[k] = (1/N) · Σ_n F[n] · exp(+i·2πnk/N),
//!   recovering the whole window a spectrum describes (oldest sample first).
//! - `streaming`: one value per snapshot, the plain mean of the bins with no
//!   phase rotation. This equals the k = 0 term of the batch inverse, i.e. the
//!   oldest sample of the window, not the newest one.

use num_complex::Complex64;
use rustfft::{Fft, FftPlanner};
use std::sync::Arc;

use crate::error::{check_spectrum_len, check_window_length, Result};
use crate::spectrum::{Spectrum, SpectrumHistory};

/// Inverse transforms for a fixed window length
pub struct InverseReconstructor {
    window_length: usize,

    /// IFFT (unnormalised, scaled by 1/N after processing)
    ifft: Arc<dyn Fft<f64>>,

    scratch: Vec<Complex64>,
}

impl InverseReconstructor {
    pub fn new(window_length: usize) -> Result<Self> {
        check_window_length(window_length)?;

        let mut planner = FftPlanner::new();
        let ifft = planner.plan_fft_inverse(window_length);
        let scratch = vec![Complex64::new(0.0, 0.0); ifft.get_inplace_scratch_len()];

        Ok(Self {
            window_length,
            ifft,
            scratch,
        })
    }

    pub fn window_length(&self) -> usize {
        self.window_length
    }

    /// Recover all N samples of the window
    ///
    /// # Errors
    /// `InvalidHistoryLength` if the spectrum does not have N bins
    pub fn batch(&mut self, spectrum: &Spectrum) -> Result<Vec<Complex64>> {
        check_spectrum_len(self.window_length, spectrum.len())?;

        let mut buffer = spectrum.bins().to_vec();
        self.ifft.process_with_scratch(&mut buffer, &mut self.scratch);

        let scale = 1.0 / self.window_length as f64;
        for x in buffer.iter_mut() {
            *x *= scale;
        }
        Ok(buffer)
    }

    /// Real part of the batch reconstruction
    pub fn batch_real(&mut self, spectrum: &Spectrum) -> Result<Vec<f64>> {
        Ok(self.batch(spectrum)?.into_iter().map(|x| x.re).collect())
    }

    /// Mean of the bins: (1/N) · Σ_n F[n]
    pub fn streaming(&self, spectrum: &Spectrum) -> Result<Complex64> {
        check_spectrum_len(self.window_length, spectrum.len())?;
        let sum: Complex64 = spectrum.bins().iter().sum();
        Ok(sum / self.window_length as f64)
    }

    /// Streaming reconstruction of every snapshot in a history, one value per time step
    pub fn streaming_history(&self, history: &SpectrumHistory) -> Result<Vec<Complex64>> {
        check_spectrum_len(self.window_length, history.window_length())?;

        let scale = 1.0 / self.window_length as f64;
        Ok(history
            .as_array()
            .rows()
            .into_iter()
            .map(|row| row.sum() * scale)
            .collect())
    }
}

//! Sliding DFT engine
//!
//! Maintains the N-bin spectrum of the trailing window with O(N) work per
//! sample:
//!
//! F[t][n] = w[n] · (F[t-1][n] + x[t] - x[t-N])
//!
//! where x[t-N] is taken as zero while the window is still filling. The
//! recurrence carries no damping factor, so rounding error accumulates over
//! very long streams; `resynchronize` replaces the running spectrum with a
//! full recomputation when that matters.

use log::{debug, warn};
use num_complex::Complex64;
use ringbuf::{HeapRb, Rb};
use std::path::PathBuf;

use super::batch::BatchDft;
use super::history::SpectrumHistory;
use super::twiddle::TwiddleTable;
use super::Spectrum;
use crate::coe;
use crate::error::{check_spectrum_len, check_window_length, Result, SdftError};

/// Where the engine obtains its twiddle factors
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TwiddleSource {
    /// exp(i·2πn/N) computed at construction
    #[default]
    Computed,

    /// Loaded from a COE lookup file
    CoeFile(PathBuf),
}

/// Sliding DFT configuration
#[derive(Debug, Clone)]
pub struct SdftConfig {
    /// Window length N (number of bins)
    pub window_length: usize,

    /// Twiddle factor source
    pub twiddles: TwiddleSource,
}

impl Default for SdftConfig {
    fn default() -> Self {
        Self {
            window_length: 512,
            twiddles: TwiddleSource::Computed,
        }
    }
}

impl SdftConfig {
    pub fn validate(&self) -> Result<()> {
        check_window_length(self.window_length)
    }
}

/// Whether the past-sample term is still forced to zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Fewer than N samples consumed
    Filling,

    /// Window full, evicted samples drawn from history
    Steady,
}

/// Streaming DFT over the last N samples
pub struct SlidingDftEngine {
    window_length: usize,
    twiddles: TwiddleTable,

    /// Spectrum at the most recent time step (all zero before the first sample)
    spectrum: Spectrum,

    /// Last N samples, oldest first
    history: HeapRb<f64>,

    /// Samples consumed so far
    time: u64,

    /// Full-window transform, planned on first resynchronisation
    batch: Option<BatchDft>,
}

impl SlidingDftEngine {
    /// Create an engine with computed twiddle factors
    ///
    /// # Errors
    /// `InvalidWindowLength` if `window_length` is zero
    pub fn new(window_length: usize) -> Result<Self> {
        let twiddles = TwiddleTable::new(window_length)?;
        Ok(Self::with_twiddles(twiddles))
    }

    /// Create an engine around an existing twiddle table; N is the table length
    pub fn with_twiddles(twiddles: TwiddleTable) -> Self {
        let window_length = twiddles.len();
        debug!("sliding DFT engine created: N = {}", window_length);

        Self {
            window_length,
            twiddles,
            spectrum: Spectrum::zeros(window_length),
            history: HeapRb::new(window_length),
            time: 0,
            batch: None,
        }
    }

    /// Create an engine from configuration
    ///
    /// # Errors
    /// `InvalidWindowLength` for N = 0, `MalformedTwiddleFile` or `Io` if the
    /// lookup file cannot be read, `InvalidHistoryLength` if the file holds a
    /// different number of entries than N
    pub fn from_config(config: &SdftConfig) -> Result<Self> {
        config.validate()?;

        let twiddles = match &config.twiddles {
            TwiddleSource::Computed => TwiddleTable::new(config.window_length)?,
            TwiddleSource::CoeFile(path) => {
                debug!("loading twiddle factors from {}", path.display());
                let table = coe::load_coe(path)?;
                check_spectrum_len(config.window_length, table.len())?;
                table
            }
        };

        Ok(Self::with_twiddles(twiddles))
    }

    /// Consume the next sample and return the updated spectrum
    pub fn advance(&mut self, sample: f64) -> Spectrum {
        self.step(sample);
        self.spectrum.clone()
    }

    /// Advance over a block of samples, returning every intermediate spectrum
    pub fn process(&mut self, samples: &[f64]) -> Vec<Spectrum> {
        samples.iter().map(|&x| self.advance(x)).collect()
    }

    /// Advance over a block of samples, appending each spectrum to `history`
    ///
    /// # Errors
    /// `InvalidHistoryLength` if `history` was created for a different N; no
    /// samples are consumed in that case
    pub fn process_into_history(
        &mut self,
        samples: &[f64],
        history: &mut SpectrumHistory,
    ) -> Result<()> {
        check_spectrum_len(self.window_length, history.window_length())?;

        for &x in samples {
            self.step(x);
            history.push(&self.spectrum)?;
        }
        Ok(())
    }

    fn step(&mut self, sample: f64) {
        let evicted = self.history.push_overwrite(sample).unwrap_or(0.0);
        let delta = Complex64::new(sample - evicted, 0.0);

        // Bins are independent within one step; each reads only its own
        // previous value and the shared delta
        for (bin, w) in self
            .spectrum
            .bins_mut()
            .iter_mut()
            .zip(self.twiddles.factors())
        {
            *bin = w * (*bin + delta);
        }

        self.time += 1;
        if self.time == self.window_length as u64 {
            debug!("window full after {} samples, entering steady state", self.time);
        }
    }

    /// Most recent spectrum, without copying
    pub fn spectrum(&self) -> &Spectrum {
        &self.spectrum
    }

    pub fn window_length(&self) -> usize {
        self.window_length
    }

    /// Number of samples consumed
    pub fn time(&self) -> u64 {
        self.time
    }

    /// State the next call to `advance` will run in
    pub fn state(&self) -> EngineState {
        if self.history.len() == self.window_length {
            EngineState::Steady
        } else {
            EngineState::Filling
        }
    }

    pub fn twiddles(&self) -> &TwiddleTable {
        &self.twiddles
    }

    /// The trailing N samples, oldest first, zero-padded at the front while filling
    pub fn window(&self) -> Vec<f64> {
        let mut window = vec![0.0; self.window_length - self.history.len()];
        window.extend(self.history.iter().copied());
        window
    }

    /// Full-window recomputation of the current spectrum
    fn recompute(&mut self) -> Result<Spectrum> {
        let window = self.window();
        let batch = match &mut self.batch {
            Some(batch) => batch,
            slot => slot.insert(BatchDft::new(self.window_length)?),
        };
        batch.forward(&window)
    }

    /// Replace the running spectrum with a full recomputation of the window
    pub fn resynchronize(&mut self) -> Result<()> {
        let fresh = self.recompute()?;
        debug!(
            "resynchronised at t = {}, drift was {:e}",
            self.time,
            self.spectrum.max_abs_diff(&fresh)
        );
        self.spectrum = fresh;
        Ok(())
    }

    /// Largest absolute difference between the running spectrum and a full recomputation
    pub fn drift(&mut self) -> Result<f64> {
        let fresh = self.recompute()?;
        Ok(self.spectrum.max_abs_diff(&fresh))
    }

    /// Returns true if drift is within `tolerance`, logging a warning otherwise
    pub fn check_drift(&mut self, tolerance: f64) -> Result<bool> {
        let drift = self.drift()?;
        if drift > tolerance {
            warn!(
                "sliding DFT drift {:e} exceeds tolerance {:e} at t = {}",
                drift, tolerance, self.time
            );
            return Ok(false);
        }
        Ok(true)
    }

    /// Return to t = 0 with an all-zero spectrum and empty sample history
    pub fn reset(&mut self) {
        self.spectrum = Spectrum::zeros(self.window_length);
        self.history = HeapRb::new(self.window_length);
        self.time = 0;
    }
}

impl TryFrom<&SdftConfig> for SlidingDftEngine {
    type Error = SdftError;

    fn try_from(config: &SdftConfig) -> Result<Self> {
        Self::from_config(config)
    }
}

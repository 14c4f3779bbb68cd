//! Frequency-domain state for the sliding DFT

pub mod twiddle;
pub mod sliding;
pub mod batch;
pub mod history;

pub use twiddle::TwiddleTable;
pub use sliding::{EngineState, SdftConfig, SlidingDftEngine, TwiddleSource};
pub use batch::{dft_direct, BatchDft};
pub use history::SpectrumHistory;

use num_complex::Complex64;

/// N complex bins describing the trailing window at one time step
///
/// Bin `n` is always paired with twiddle factor `w[n]`; the bins are never
/// reordered independently of the table that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    bins: Vec<Complex64>,
}

impl Spectrum {
    /// All-zero spectrum of `n` bins
    pub fn zeros(n: usize) -> Self {
        Self {
            bins: vec![Complex64::new(0.0, 0.0); n],
        }
    }

    pub fn from_bins(bins: Vec<Complex64>) -> Self {
        Self { bins }
    }

    /// Number of bins (the window length N)
    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// Bin `n`, `None` if `n >= N`
    pub fn get(&self, n: usize) -> Option<Complex64> {
        self.bins.get(n).copied()
    }

    pub fn bins(&self) -> &[Complex64] {
        &self.bins
    }

    pub fn bins_mut(&mut self) -> &mut [Complex64] {
        &mut self.bins
    }

    pub fn into_bins(self) -> Vec<Complex64> {
        self.bins
    }

    /// Magnitude |F[n]| per bin
    pub fn magnitude(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.norm()).collect()
    }

    /// Power |F[n]|² per bin
    pub fn power(&self) -> Vec<f64> {
        self.bins.iter().map(|c| c.norm_sqr()).collect()
    }

    /// Largest absolute bin difference against another spectrum of the same length
    pub fn max_abs_diff(&self, other: &Spectrum) -> f64 {
        self.bins
            .iter()
            .zip(other.bins.iter())
            .map(|(a, b)| (a - b).norm())
            .fold(0.0, f64::max)
    }
}

impl From<Vec<Complex64>> for Spectrum {
    fn from(bins: Vec<Complex64>) -> Self {
        Self::from_bins(bins)
    }
}

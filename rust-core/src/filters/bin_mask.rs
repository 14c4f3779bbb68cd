//! Bin-mask filtering of spectrum snapshots
//!
//! Zeroes the selected bins and leaves every other bin untouched, for
//! band-limiting or notching before reconstruction.

use num_complex::Complex64;
use std::ops::Range;

use crate::error::{Result, SdftError};
use crate::spectrum::Spectrum;

/// Set of bin indices to zero
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinRange {
    /// Contiguous run `start..end`
    Contiguous(Range<usize>),

    /// Arbitrary indices, in any order, duplicates allowed
    Indices(Vec<usize>),
}

impl BinRange {
    /// Selects nothing
    pub fn empty() -> Self {
        BinRange::Indices(Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            BinRange::Contiguous(range) => range.is_empty(),
            BinRange::Indices(indices) => indices.is_empty(),
        }
    }

    /// Fail on the first index outside [0, N)
    fn validate(&self, window_length: usize) -> Result<()> {
        let out_of_range = match self {
            BinRange::Contiguous(range) if range.is_empty() => None,
            BinRange::Contiguous(range) => {
                (range.end > window_length).then(|| range.start.max(window_length))
            }
            BinRange::Indices(indices) => indices.iter().copied().find(|&i| i >= window_length),
        };

        match out_of_range {
            Some(index) => Err(SdftError::FilterIndexOutOfRange {
                index,
                window_length,
            }),
            None => Ok(()),
        }
    }
}

impl From<Range<usize>> for BinRange {
    fn from(range: Range<usize>) -> Self {
        BinRange::Contiguous(range)
    }
}

impl From<Vec<usize>> for BinRange {
    fn from(indices: Vec<usize>) -> Self {
        BinRange::Indices(indices)
    }
}

/// Zeroes a fixed set of bins
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpectralFilter {
    bins: BinRange,
}

impl SpectralFilter {
    pub fn new(bins: impl Into<BinRange>) -> Self {
        Self { bins: bins.into() }
    }

    /// Zero a contiguous band of bins
    pub fn band_stop(range: Range<usize>) -> Self {
        Self::new(range)
    }

    /// Keep the lowest `cutoff` positive and negative frequency bins
    ///
    /// Zeroes bins `cutoff..N-cutoff`, so for N = 512 and cutoff = 128 the
    /// band 128..384 is removed. A cutoff at or above N/2 keeps everything.
    pub fn low_pass(cutoff: usize, window_length: usize) -> Self {
        let end = window_length.saturating_sub(cutoff);
        Self::new(cutoff.min(end)..end)
    }

    pub fn bins(&self) -> &BinRange {
        &self.bins
    }

    /// Filtered copy of `spectrum`
    ///
    /// # Errors
    /// `FilterIndexOutOfRange` if any selected bin is outside [0, N)
    pub fn apply(&self, spectrum: &Spectrum) -> Result<Spectrum> {
        let mut filtered = spectrum.clone();
        self.apply_in_place(&mut filtered)?;
        Ok(filtered)
    }

    /// Filter in place; the spectrum is left unchanged on error
    pub fn apply_in_place(&self, spectrum: &mut Spectrum) -> Result<()> {
        self.bins.validate(spectrum.len())?;

        let zero = Complex64::new(0.0, 0.0);
        let bins = spectrum.bins_mut();
        match &self.bins {
            BinRange::Contiguous(range) => {
                if !range.is_empty() {
                    bins[range.clone()].fill(zero);
                }
            }
            BinRange::Indices(indices) => {
                for &i in indices {
                    bins[i] = zero;
                }
            }
        }
        Ok(())
    }
}

/// Filtered copy of `spectrum` with `bins` zeroed
pub fn apply(spectrum: &Spectrum, bins: impl Into<BinRange>) -> Result<Spectrum> {
    SpectralFilter::new(bins).apply(spectrum)
}

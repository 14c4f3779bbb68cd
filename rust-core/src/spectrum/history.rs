//! Caller-owned record of spectrum snapshots
//!
//! Row `t` holds the spectrum emitted at time step `t`.

use ndarray::{Array2, ArrayView1, ArrayView2};
use num_complex::Complex64;

use super::Spectrum;
use crate::error::{check_spectrum_len, check_window_length, Result, SdftError};

/// T × N matrix of spectra, appended one row per time step
#[derive(Debug, Clone)]
pub struct SpectrumHistory {
    window_length: usize,
    rows: Array2<Complex64>,
}

impl SpectrumHistory {
    pub fn new(window_length: usize) -> Result<Self> {
        check_window_length(window_length)?;
        Ok(Self {
            window_length,
            rows: Array2::zeros((0, window_length)),
        })
    }

    /// Append one snapshot
    ///
    /// # Errors
    /// `InvalidHistoryLength` if the spectrum does not have N bins
    pub fn push(&mut self, spectrum: &Spectrum) -> Result<()> {
        check_spectrum_len(self.window_length, spectrum.len())?;
        self.rows
            .push_row(ArrayView1::from(spectrum.bins()))
            .map_err(|_| SdftError::InvalidHistoryLength {
                expected: self.window_length,
                found: spectrum.len(),
            })
    }

    /// Number of snapshots stored (T)
    pub fn len(&self) -> usize {
        self.rows.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.nrows() == 0
    }

    pub fn window_length(&self) -> usize {
        self.window_length
    }

    /// Snapshot at time `t`
    pub fn get(&self, t: usize) -> Option<Spectrum> {
        if t >= self.len() {
            return None;
        }
        Some(Spectrum::from_bins(self.rows.row(t).to_vec()))
    }

    pub fn last(&self) -> Option<Spectrum> {
        self.len().checked_sub(1).and_then(|t| self.get(t))
    }

    pub fn row(&self, t: usize) -> Option<ArrayView1<'_, Complex64>> {
        (t < self.len()).then(|| self.rows.row(t))
    }

    pub fn as_array(&self) -> ArrayView2<'_, Complex64> {
        self.rows.view()
    }

    pub fn into_array(self) -> Array2<Complex64> {
        self.rows
    }

    /// Iterate snapshots in time order
    pub fn spectra(&self) -> impl Iterator<Item = Spectrum> + '_ {
        self.rows
            .rows()
            .into_iter()
            .map(|row| Spectrum::from_bins(row.to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_push_and_get() {
        let mut history = SpectrumHistory::new(4).unwrap();
        assert!(history.is_empty());

        let mut s = Spectrum::zeros(4);
        history.push(&s).unwrap();
        s.bins_mut()[2] = Complex64::new(1.0, -1.0);
        history.push(&s).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.get(1).unwrap(), s);
        assert_eq!(history.last().unwrap(), s);
        assert_eq!(history.get(0).unwrap(), Spectrum::zeros(4));
        assert!(history.get(2).is_none());
        assert_eq!(history.as_array().dim(), (2, 4));
        assert_eq!(history.spectra().count(), 2);
    }

    #[test]
    fn test_history_rejects_wrong_size() {
        let mut history = SpectrumHistory::new(4).unwrap();
        let err = history.push(&Spectrum::zeros(3)).unwrap_err();
        assert!(matches!(
            err,
            SdftError::InvalidHistoryLength { expected: 4, found: 3 }
        ));
        assert!(history.is_empty());
    }

    #[test]
    fn test_history_zero_window() {
        assert!(SpectrumHistory::new(0).is_err());
    }
}

//! Python bindings for spectral bin filtering

use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use num_complex::Complex64;
use pyo3::prelude::*;

use crate::filters::{BinRange, SpectralFilter};
use crate::spectrum::Spectrum;

/// Spectral bin filter exposed to Python
#[pyclass(name = "SpectralFilter")]
pub struct PySpectralFilter {
    filter: SpectralFilter,
}

#[pymethods]
impl PySpectralFilter {
    /// Create a filter zeroing an arbitrary set of bins
    ///
    /// Args:
    ///     bins: Bin indices to zero
    #[new]
    #[pyo3(signature = (bins=Vec::new()))]
    fn new(bins: Vec<usize>) -> Self {
        Self {
            filter: SpectralFilter::new(BinRange::Indices(bins)),
        }
    }

    /// Zero the contiguous band start..stop
    #[staticmethod]
    fn band_stop(start: usize, stop: usize) -> Self {
        Self {
            filter: SpectralFilter::band_stop(start..stop),
        }
    }

    /// Keep the lowest `cutoff` positive and negative frequency bins
    #[staticmethod]
    fn low_pass(cutoff: usize, window_length: usize) -> Self {
        Self {
            filter: SpectralFilter::low_pass(cutoff, window_length),
        }
    }

    /// Apply the filter to a spectrum
    ///
    /// Args:
    ///     spectrum: Complex spectrum as numpy array
    ///
    /// Returns:
    ///     Filtered copy
    fn apply<'py>(
        &self,
        py: Python<'py>,
        spectrum: PyReadonlyArray1<Complex64>,
    ) -> PyResult<&'py PyArray1<Complex64>> {
        let spectrum = Spectrum::from_bins(spectrum.as_array().to_vec());
        let filtered = self.filter.apply(&spectrum)?;
        Ok(filtered.into_bins().into_pyarray(py))
    }
}

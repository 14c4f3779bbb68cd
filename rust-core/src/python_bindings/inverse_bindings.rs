//! Python bindings for time-domain reconstruction

use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1, PyReadonlyArray2};
use num_complex::Complex64;
use pyo3::prelude::*;

use crate::inverse::InverseReconstructor;
use crate::spectrum::{Spectrum, SpectrumHistory};

/// Inverse reconstructor exposed to Python
#[pyclass(name = "InverseReconstructor")]
pub struct PyInverseReconstructor {
    inverse: InverseReconstructor,
}

#[pymethods]
impl PyInverseReconstructor {
    #[new]
    fn new(window_length: usize) -> PyResult<Self> {
        Ok(Self {
            inverse: InverseReconstructor::new(window_length)?,
        })
    }

    /// Textbook inverse DFT of one spectrum
    ///
    /// Returns:
    ///     N complex samples, oldest first
    fn batch<'py>(
        &mut self,
        py: Python<'py>,
        spectrum: PyReadonlyArray1<Complex64>,
    ) -> PyResult<&'py PyArray1<Complex64>> {
        let spectrum = Spectrum::from_bins(spectrum.as_array().to_vec());
        Ok(self.inverse.batch(&spectrum)?.into_pyarray(py))
    }

    /// Mean of the bins of one spectrum
    fn streaming(&self, spectrum: PyReadonlyArray1<Complex64>) -> PyResult<Complex64> {
        let spectrum = Spectrum::from_bins(spectrum.as_array().to_vec());
        Ok(self.inverse.streaming(&spectrum)?)
    }

    /// Streaming reconstruction of a T x N spectrum history
    ///
    /// Returns:
    ///     T complex samples
    fn streaming_history<'py>(
        &self,
        py: Python<'py>,
        history: PyReadonlyArray2<Complex64>,
    ) -> PyResult<&'py PyArray1<Complex64>> {
        let view = history.as_array();
        let mut spectra = SpectrumHistory::new(view.ncols())?;
        for row in view.rows() {
            spectra.push(&Spectrum::from_bins(row.to_vec()))?;
        }
        Ok(self.inverse.streaming_history(&spectra)?.into_pyarray(py))
    }
}

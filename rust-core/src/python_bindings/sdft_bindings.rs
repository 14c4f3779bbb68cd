//! Python bindings for the sliding DFT engine

use numpy::{IntoPyArray, PyArray1, PyArray2, PyReadonlyArray1};
use num_complex::Complex64;
use pyo3::prelude::*;
use std::path::PathBuf;

use crate::coe;
use crate::spectrum::{
    EngineState, SdftConfig, SlidingDftEngine, SpectrumHistory, TwiddleSource, TwiddleTable,
};

/// Sliding DFT engine exposed to Python
#[pyclass(name = "SlidingDft")]
pub struct PySlidingDft {
    engine: SlidingDftEngine,
}

#[pymethods]
impl PySlidingDft {
    /// Create a new sliding DFT engine
    ///
    /// Args:
    ///     window_length: Number of samples in the window (and bins in the spectrum)
    ///     coe_file: Optional twiddle lookup file to load instead of computing factors
    #[new]
    #[pyo3(signature = (window_length=512, coe_file=None))]
    fn new(window_length: usize, coe_file: Option<PathBuf>) -> PyResult<Self> {
        let config = SdftConfig {
            window_length,
            twiddles: coe_file.map_or(TwiddleSource::Computed, TwiddleSource::CoeFile),
        };

        Ok(Self {
            engine: SlidingDftEngine::from_config(&config)?,
        })
    }

    /// Consume one sample and return the updated spectrum
    ///
    /// Returns:
    ///     Complex spectrum as numpy array of N bins
    fn advance<'py>(&mut self, py: Python<'py>, sample: f64) -> &'py PyArray1<Complex64> {
        self.engine.advance(sample).into_bins().into_pyarray(py)
    }

    /// Consume a block of samples
    ///
    /// Args:
    ///     samples: Input samples as numpy array
    ///
    /// Returns:
    ///     T x N complex array, row t holding the spectrum after sample t
    fn process<'py>(
        &mut self,
        py: Python<'py>,
        samples: PyReadonlyArray1<f64>,
    ) -> PyResult<&'py PyArray2<Complex64>> {
        let samples: Vec<f64> = samples.as_array().iter().copied().collect();
        let mut history = SpectrumHistory::new(self.engine.window_length())?;
        self.engine.process_into_history(&samples, &mut history)?;

        Ok(history.into_array().into_pyarray(py))
    }

    /// Current spectrum
    fn spectrum<'py>(&self, py: Python<'py>) -> &'py PyArray1<Complex64> {
        PyArray1::from_slice(py, self.engine.spectrum().bins())
    }

    /// Trailing window of samples, oldest first
    fn window<'py>(&self, py: Python<'py>) -> &'py PyArray1<f64> {
        self.engine.window().into_pyarray(py)
    }

    /// Replace the running spectrum with a full recomputation
    fn resynchronize(&mut self) -> PyResult<()> {
        Ok(self.engine.resynchronize()?)
    }

    /// Max absolute deviation from a full recomputation
    fn drift(&mut self) -> PyResult<f64> {
        Ok(self.engine.drift()?)
    }

    fn reset(&mut self) {
        self.engine.reset();
    }

    #[getter]
    fn window_length(&self) -> usize {
        self.engine.window_length()
    }

    #[getter]
    fn time(&self) -> u64 {
        self.engine.time()
    }

    /// True once N samples have been consumed
    #[getter]
    fn is_steady(&self) -> bool {
        self.engine.state() == EngineState::Steady
    }
}

/// Compute the twiddle table exp(i·2πn/N)
#[pyfunction]
pub fn twiddle_factors(py: Python<'_>, window_length: usize) -> PyResult<&PyArray1<Complex64>> {
    let table = TwiddleTable::new(window_length)?;
    Ok(PyArray1::from_slice(py, table.factors()))
}

/// Load twiddle factors from a COE lookup file
#[pyfunction]
pub fn load_coe(py: Python<'_>, path: PathBuf) -> PyResult<&PyArray1<Complex64>> {
    let table = coe::load_coe(path)?;
    Ok(PyArray1::from_slice(py, table.factors()))
}

/// Write the computed twiddle table for `window_length` to a COE lookup file
#[pyfunction]
pub fn write_coe(path: PathBuf, window_length: usize) -> PyResult<()> {
    let table = TwiddleTable::new(window_length)?;
    Ok(coe::write_coe(path, &table)?)
}

//! PyO3 bindings for Python integration

use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use crate::error::SdftError;

mod sdft_bindings;
mod filter_bindings;
mod inverse_bindings;

impl From<SdftError> for PyErr {
    fn from(err: SdftError) -> Self {
        match err {
            SdftError::Io(e) => PyIOError::new_err(e.to_string()),
            other => PyValueError::new_err(other.to_string()),
        }
    }
}

/// Python module definition
#[pymodule]
fn sliding_dft(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_class::<sdft_bindings::PySlidingDft>()?;
    m.add_class::<filter_bindings::PySpectralFilter>()?;
    m.add_class::<inverse_bindings::PyInverseReconstructor>()?;

    m.add_function(wrap_pyfunction!(sdft_bindings::twiddle_factors, m)?)?;
    m.add_function(wrap_pyfunction!(sdft_bindings::load_coe, m)?)?;
    m.add_function(wrap_pyfunction!(sdft_bindings::write_coe, m)?)?;

    Ok(())
}

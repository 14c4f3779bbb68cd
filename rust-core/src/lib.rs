//! Sliding DFT - streaming spectral analysis core
//!
//! Maintains the spectrum of the trailing N-sample window with an O(N)
//! per-sample recurrence, plus bin-mask filtering and time-domain
//! reconstruction of the resulting snapshots.

// Suppress PyO3 non-local impl warnings (harmless macro-generated code)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

pub mod coe;
pub mod error;
pub mod filters;
pub mod inverse;
pub mod spectrum;

#[cfg(feature = "python")]
pub mod python_bindings;

pub use error::{Result, SdftError};
pub use filters::{BinRange, SpectralFilter};
pub use inverse::InverseReconstructor;
pub use spectrum::{
    EngineState, SdftConfig, SlidingDftEngine, Spectrum, SpectrumHistory, TwiddleSource,
    TwiddleTable,
};

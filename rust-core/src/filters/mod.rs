//! Spectral-domain filtering

pub mod bin_mask;

pub use bin_mask::{BinRange, SpectralFilter};

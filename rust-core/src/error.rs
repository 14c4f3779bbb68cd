//! Error types for the sliding DFT core

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SdftError {
    #[error("Window length must be greater than zero (got {0})")]
    InvalidWindowLength(usize),

    #[error("Spectrum has {found} bins but the window length is {expected}")]
    InvalidHistoryLength { expected: usize, found: usize },

    #[error("Bin index {index} is outside the spectrum [0, {window_length})")]
    FilterIndexOutOfRange { index: usize, window_length: usize },

    #[error("Malformed twiddle file at line {line}: {reason}")]
    MalformedTwiddleFile { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SdftError>;

/// Reject a window length of zero
pub(crate) fn check_window_length(window_length: usize) -> Result<()> {
    if window_length == 0 {
        return Err(SdftError::InvalidWindowLength(window_length));
    }
    Ok(())
}

/// Reject a spectrum whose bin count differs from the expected window length
pub(crate) fn check_spectrum_len(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(SdftError::InvalidHistoryLength { expected, found });
    }
    Ok(())
}

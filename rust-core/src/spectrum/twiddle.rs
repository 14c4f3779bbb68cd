//! Precomputed unit-circle rotation factors
//!
//! One factor per frequency bin: w[n] = exp(i·2πn/N)

use num_complex::Complex64;
use std::f64::consts::PI;

use crate::error::{check_window_length, Result};

/// Table of N twiddle factors, indexed by bin
#[derive(Debug, Clone, PartialEq)]
pub struct TwiddleTable {
    factors: Vec<Complex64>,
}

impl TwiddleTable {
    /// Compute the table for window length `n`
    ///
    /// # Errors
    /// `InvalidWindowLength` if `n` is zero
    pub fn new(n: usize) -> Result<Self> {
        check_window_length(n)?;

        let factors = (0..n)
            .map(|k| Complex64::from_polar(1.0, 2.0 * PI * k as f64 / n as f64))
            .collect();

        Ok(Self { factors })
    }

    /// Wrap factors obtained elsewhere (e.g. a lookup file)
    pub fn from_factors(factors: Vec<Complex64>) -> Result<Self> {
        check_window_length(factors.len())?;
        Ok(Self { factors })
    }

    /// Number of bins covered
    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Factor for bin `n`, `None` if out of range
    pub fn get(&self, n: usize) -> Option<Complex64> {
        self.factors.get(n).copied()
    }

    pub fn factors(&self) -> &[Complex64] {
        &self.factors
    }
}

//! Core types for FIR filter design and analysis
//!
//! Defines the coefficient element type, the error taxonomy shared by all
//! design and analysis operations, and the ISI report returned by the
//! inter-symbol interference analyzer.
//!
//! Coefficients are IEEE-754 single precision: downstream filtering engines
//! consume raw `f32` tap vectors, so every designer in this crate produces
//! `f32` and every analyzer consumes it.

use serde::{Deserialize, Serialize};

/// A single FIR tap weight (real-valued, single precision)
pub type Coeff = f32;

/// Result type for design and analysis operations
pub type DesignResult<T> = Result<T, DesignError>;

/// Errors that can occur during filter design or analysis
///
/// All parameter validation surfaces here as a recoverable value; no
/// operation panics or terminates the process on bad input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DesignError {
    #[error("Invalid transition bandwidth: {0}. Must be in (0, 0.5]")]
    InvalidBandwidth(f32),

    #[error("Invalid attenuation: {0} dB. Must be greater than 0")]
    InvalidAttenuation(f32),

    #[error("Invalid cutoff frequency: {0}. Must be within [0, 1]")]
    InvalidCutoff(f32),

    #[error("Invalid fractional offset: {0}. Must be within [-0.5, 0.5]")]
    InvalidOffset(f32),

    #[error("Filter length must be greater than zero")]
    ZeroLength,

    #[error("Invalid samples per symbol: {0}. Must be at least 2")]
    InvalidSamplesPerSymbol(usize),

    #[error("Invalid filter delay: {0} symbols. Must be at least 1")]
    InvalidDelay(usize),

    #[error("Coefficient length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Output buffer too short: expected {expected}, got {actual}")]
    BufferTooShort { expected: usize, actual: usize },

    #[error("Coefficient vector has zero energy")]
    ZeroEnergy,
}

/// Inter-symbol interference metrics for a pulse-shaping filter
///
/// Produced by [`filter_isi`](crate::analysis::filter_isi). Both fields are
/// normalized by the zero-lag autocorrelation, so they are invariant under
/// coefficient scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IsiReport {
    /// Mean-squared ISI over the symbol-spaced lags
    pub mse: f32,
    /// Largest single symbol-spaced ISI term
    pub max: f32,
}

impl IsiReport {
    /// Mean-squared ISI in dB (power quantity, `10*log10`)
    pub fn mse_db(&self) -> f32 {
        10.0 * self.mse.log10()
    }

    /// Maximum ISI in dB (amplitude quantity, `20*log10`)
    pub fn max_db(&self) -> f32 {
        20.0 * self.max.log10()
    }
}

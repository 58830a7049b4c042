//! Iterative root-Nyquist pulse-shaping design
//!
//! Starts from a Kaiser windowed-sinc prototype at the symbol-rate cutoff
//! and searches the cutoff scale for the point of least inter-symbol
//! interference in the matched-filter cascade. The search is a
//! golden-section bracket over a single scale factor; the objective is the
//! mean-squared ISI reported by [`filter_isi`](crate::analysis::filter_isi),
//! which the nominal prototype does not minimize on a finite tap grid.
//!
//! ## Example
//!
//! ```rust,no_run
//! use firdes_core::root_nyquist::RootNyquistSpec;
//!
//! // 2 samples/symbol, 6 symbols of delay: 2*2*6+1 = 25 taps
//! let taps = RootNyquistSpec::new(25, 2, 60.0).design().unwrap();
//! ```

use crate::analysis::{filter_energy, filter_isi};
use crate::kaiser_filter::kaiser_lowpass;
use crate::types::{Coeff, DesignError, DesignResult};
use serde::{Deserialize, Serialize};

/// Maximum golden-section iterations.
const MAX_ITERATIONS: usize = 40;

/// Bracket width at which the search stops.
const CONVERGENCE_TOLERANCE: f32 = 1e-6;

/// Search bracket for the prototype cutoff scale.
const SCALE_MIN: f32 = 0.5;
const SCALE_MAX: f32 = 1.5;

/// Inverse golden ratio, the section step.
const INV_PHI: f32 = 0.618_034;

/// Specification for an optimized root-Nyquist filter.
///
/// `num_taps` must be 2·k·m + 1 for the oversampling rate k and some
/// delay m ≥ 1 symbols, so the result can be scored at symbol spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootNyquistSpec {
    /// Number of filter taps (2·k·m + 1)
    pub num_taps: usize,
    /// Oversampling rate k (samples/symbol, at least 2)
    pub samples_per_symbol: usize,
    /// Stopband attenuation target in dB for the prototype window
    pub atten_db: f32,
    /// Iteration cap for the cutoff-scale search
    pub max_iterations: usize,
    /// Bracket width at which the search is considered converged
    pub tolerance: f32,
}

impl Default for RootNyquistSpec {
    fn default() -> Self {
        Self::new(25, 2, 60.0)
    }
}

impl RootNyquistSpec {
    /// Create a specification with the default search settings.
    pub fn new(num_taps: usize, samples_per_symbol: usize, atten_db: f32) -> Self {
        Self {
            num_taps,
            samples_per_symbol,
            atten_db,
            max_iterations: MAX_ITERATIONS,
            tolerance: CONVERGENCE_TOLERANCE,
        }
    }

    /// Set the iteration cap for the cutoff-scale search.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence tolerance on the search bracket.
    pub fn with_tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Validate the layout and return the filter delay in symbols.
    fn delay_symbols(&self) -> DesignResult<usize> {
        if self.num_taps == 0 {
            return Err(DesignError::ZeroLength);
        }
        if self.samples_per_symbol < 2 {
            return Err(DesignError::InvalidSamplesPerSymbol(self.samples_per_symbol));
        }
        if self.atten_db <= 0.0 {
            return Err(DesignError::InvalidAttenuation(self.atten_db));
        }

        let span = 2 * self.samples_per_symbol;
        if (self.num_taps - 1) % span != 0 || self.num_taps - 1 < span {
            // name the nearest symbol-aligned length
            let nearest = ((self.num_taps - 1 + span / 2) / span).max(1);
            return Err(DesignError::LengthMismatch {
                expected: span * nearest + 1,
                actual: self.num_taps,
            });
        }

        Ok((self.num_taps - 1) / span)
    }

    /// Design the filter into a caller-owned buffer.
    ///
    /// Writes exactly `num_taps` coefficients, normalized to unit energy.
    pub fn design_into(&self, taps: &mut [Coeff]) -> DesignResult<()> {
        let delay = self.delay_symbols()?;
        if taps.len() < self.num_taps {
            return Err(DesignError::BufferTooShort {
                expected: self.num_taps,
                actual: taps.len(),
            });
        }

        let mut scratch = vec![0.0; self.num_taps];

        // seed with the nominal symbol-rate prototype so the search can
        // only improve on it
        let mut best_scale = 1.0;
        let mut best_mse = self.prototype_mse(1.0, delay, &mut scratch)?;

        let mut lo = SCALE_MIN;
        let mut hi = SCALE_MAX;
        let mut c = hi - INV_PHI * (hi - lo);
        let mut d = lo + INV_PHI * (hi - lo);
        let mut mse_c = self.prototype_mse(c, delay, &mut scratch)?;
        let mut mse_d = self.prototype_mse(d, delay, &mut scratch)?;
        if mse_c < best_mse {
            best_mse = mse_c;
            best_scale = c;
        }
        if mse_d < best_mse {
            best_mse = mse_d;
            best_scale = d;
        }

        let mut iterations = 0;
        while hi - lo > self.tolerance && iterations < self.max_iterations {
            if mse_c < mse_d {
                hi = d;
                d = c;
                mse_d = mse_c;
                c = hi - INV_PHI * (hi - lo);
                mse_c = self.prototype_mse(c, delay, &mut scratch)?;
                if mse_c < best_mse {
                    best_mse = mse_c;
                    best_scale = c;
                }
            } else {
                lo = c;
                c = d;
                mse_c = mse_d;
                d = lo + INV_PHI * (hi - lo);
                mse_d = self.prototype_mse(d, delay, &mut scratch)?;
                if mse_d < best_mse {
                    best_mse = mse_d;
                    best_scale = d;
                }
            }

            iterations += 1;
            tracing::trace!(
                "root-Nyquist iteration {}: bracket [{:.6}, {:.6}], best mse {:.4e}",
                iterations,
                lo,
                hi,
                best_mse
            );
        }

        tracing::debug!(
            "root-Nyquist search done: scale {:.6}, isi mse {:.4e}, {} iterations",
            best_scale,
            best_mse,
            iterations
        );

        let out = &mut taps[..self.num_taps];
        kaiser_lowpass(
            self.num_taps,
            best_scale / self.samples_per_symbol as f32,
            self.atten_db,
            0.0,
            out,
        )?;

        // unit-energy normalization; the center tap is 1, so energy >= 1
        let norm = filter_energy(out).sqrt();
        for tap in out.iter_mut() {
            *tap /= norm;
        }

        Ok(())
    }

    /// Design the filter into a new vector.
    pub fn design(&self) -> DesignResult<Vec<Coeff>> {
        let mut taps = vec![0.0; self.num_taps];
        self.design_into(&mut taps)?;
        Ok(taps)
    }

    /// ISI objective for one cutoff scale, evaluated on the scratch buffer.
    fn prototype_mse(&self, scale: f32, delay: usize, scratch: &mut [Coeff]) -> DesignResult<f32> {
        let cutoff = scale / self.samples_per_symbol as f32;
        kaiser_lowpass(self.num_taps, cutoff, self.atten_db, 0.0, scratch)?;
        Ok(filter_isi(scratch, self.samples_per_symbol, delay)?.mse)
    }
}

/// Design an optimized root-Nyquist filter into a caller-owned buffer
/// using the default search settings.
pub fn root_nyquist(
    num_taps: usize,
    samples_per_symbol: usize,
    atten_db: f32,
    taps: &mut [Coeff],
) -> DesignResult<()> {
    RootNyquistSpec::new(num_taps, samples_per_symbol, atten_db).design_into(taps)
}

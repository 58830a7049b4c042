//! Kaiser windowed-sinc lowpass FIR designer
//!
//! Designs a linear-phase lowpass prototype as the product of a normalized
//! sinc and a Kaiser window. A fractional sample offset shifts the group
//! delay for timing-offset simulation; with zero offset the result is
//! exactly symmetric.
//!
//! ## Example
//!
//! ```rust,no_run
//! use firdes_core::kaiser_filter::kaiser_lowpass_taps;
//!
//! // 21-tap lowpass, half-Nyquist cutoff, 60 dB stopband
//! let taps = kaiser_lowpass_taps(21, 0.5, 60.0, 0.0).unwrap();
//! assert_eq!(taps.len(), 21);
//! ```

use crate::math::sinc;
use crate::types::{Coeff, DesignError, DesignResult};
use crate::windows::{kaiser_beta, kaiser_sample};

/// Design a Kaiser windowed-sinc lowpass filter into a caller-owned buffer.
///
/// Writes exactly `num_taps` coefficients into the front of `taps`; the
/// buffer is never resized and any excess capacity is left untouched. Each
/// coefficient is sinc(fc·t)·w(i) for the centered, offset sample point
/// t = i − (N−1)/2 + mu. The window β is derived from `atten_db` via
/// [`kaiser_beta`]. The composite is not normalized.
///
/// # Arguments
/// * `num_taps` - Filter length N, must be positive
/// * `cutoff` - Cutoff frequency, normalized to Nyquist, in [0, 1]
/// * `atten_db` - Stopband attenuation target in dB (sign-insensitive)
/// * `mu` - Fractional sample offset in [-0.5, 0.5]
/// * `taps` - Output buffer with room for at least `num_taps` entries
pub fn kaiser_lowpass(
    num_taps: usize,
    cutoff: f32,
    atten_db: f32,
    mu: f32,
    taps: &mut [Coeff],
) -> DesignResult<()> {
    if num_taps == 0 {
        return Err(DesignError::ZeroLength);
    }
    if cutoff < 0.0 || cutoff > 1.0 {
        return Err(DesignError::InvalidCutoff(cutoff));
    }
    if mu < -0.5 || mu > 0.5 {
        return Err(DesignError::InvalidOffset(mu));
    }
    if taps.len() < num_taps {
        return Err(DesignError::BufferTooShort {
            expected: num_taps,
            actual: taps.len(),
        });
    }

    let beta = kaiser_beta(atten_db);
    let center = (num_taps as f32 - 1.0) / 2.0;

    for (i, tap) in taps[..num_taps].iter_mut().enumerate() {
        let t = i as f32 - center + mu;
        *tap = sinc(cutoff * t) * kaiser_sample(i, num_taps, beta, mu);
    }

    Ok(())
}

/// Design a Kaiser windowed-sinc lowpass filter into a new vector.
pub fn kaiser_lowpass_taps(
    num_taps: usize,
    cutoff: f32,
    atten_db: f32,
    mu: f32,
) -> DesignResult<Vec<Coeff>> {
    let mut taps = vec![0.0; num_taps];
    kaiser_lowpass(num_taps, cutoff, atten_db, mu, &mut taps)?;
    Ok(taps)
}

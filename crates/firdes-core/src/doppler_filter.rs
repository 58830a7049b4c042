//! Rice-fading Doppler spectrum shaping filter
//!
//! Designs the FIR taps a channel simulator convolves with white noise to
//! obtain Rice-faded gains: a diffuse scatter component following the Jakes
//! spectrum (zeroth-order Bessel autocorrelation) plus a line-of-sight
//! cosine component weighted by the Rice K-factor, shaped under a fixed
//! Kaiser window.
//!
//! Unlike the lowpass designer, scalar parameters are not validated here.
//! Out-of-range Doppler or K values produce mathematically valid but
//! physically meaningless taps; only the output-buffer bound is enforced.

use std::f32::consts::PI;

use crate::math::bessel_j0;
use crate::types::{Coeff, DesignError, DesignResult};
use crate::windows::kaiser_sample;

/// Kaiser β for the fixed spectrum-shaping window.
const DOPPLER_WINDOW_BETA: f32 = 4.0;

/// Design a Rice-fading Doppler filter into a caller-owned buffer.
///
/// Writes exactly `num_taps` coefficients. For the centered sample point
/// t = i − (N−1)/2, each tap combines
/// 1.5·J₀(|2π·fd·t|) (scatter) with
/// 1.5·K/(K+1)·cos(2π·fd·t·cos θ) (line of sight), windowed at β = 4.
///
/// # Arguments
/// * `num_taps` - Filter length N
/// * `doppler_freq` - Normalized Doppler frequency, nominally in (0, 0.5)
/// * `k_factor` - Rice K-factor, nominally ≥ 0 (0 gives pure Jakes fading)
/// * `theta` - Line-of-sight angle of arrival in radians
/// * `taps` - Output buffer with room for at least `num_taps` entries
pub fn doppler_fading(
    num_taps: usize,
    doppler_freq: f32,
    k_factor: f32,
    theta: f32,
    taps: &mut [Coeff],
) -> DesignResult<()> {
    if taps.len() < num_taps {
        return Err(DesignError::BufferTooShort {
            expected: num_taps,
            actual: taps.len(),
        });
    }

    let center = (num_taps as f32 - 1.0) / 2.0;
    let los_gain = 1.5 * k_factor / (k_factor + 1.0);

    for (i, tap) in taps[..num_taps].iter_mut().enumerate() {
        let t = i as f32 - center;
        let scatter = 1.5 * bessel_j0((2.0 * PI * doppler_freq * t).abs());
        let los = los_gain * (2.0 * PI * doppler_freq * t * theta.cos()).cos();
        *tap = (scatter + los) * kaiser_sample(i, num_taps, DOPPLER_WINDOW_BETA, 0.0);
    }

    Ok(())
}

/// Design a Rice-fading Doppler filter into a new vector.
pub fn doppler_fading_taps(
    num_taps: usize,
    doppler_freq: f32,
    k_factor: f32,
    theta: f32,
) -> DesignResult<Vec<Coeff>> {
    let mut taps = vec![0.0; num_taps];
    doppler_fading(num_taps, doppler_freq, k_factor, theta, &mut taps)?;
    Ok(taps)
}

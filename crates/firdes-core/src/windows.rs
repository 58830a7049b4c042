//! Kaiser window and design-parameter estimators
//!
//! The Kaiser window trades main-lobe width against sidelobe suppression
//! through a single shape parameter β. This module maps a stopband
//! attenuation target to β, estimates the tap count needed for a given
//! transition bandwidth, and evaluates window samples with an optional
//! fractional offset for fractional-delay designs.
//!
//! ## Example
//!
//! ```rust,no_run
//! use firdes_core::windows::{estimate_filter_len, kaiser_beta, kaiser_window};
//!
//! // taps for 60 dB stopband over a 0.1 transition band
//! let n = estimate_filter_len(0.1, 60.0).unwrap();
//! let beta = kaiser_beta(60.0); // β ≈ 5.65
//! let window = kaiser_window(n, beta);
//! ```

use crate::math::bessel_i0;
use crate::types::{DesignError, DesignResult};

/// Calculate the Kaiser window β parameter for a stopband attenuation.
///
/// Sign-insensitive: the absolute value of `atten_db` is used. Empirical
/// three-region approximation:
///
/// - attenuation > 50 dB: β = 0.1102·(a − 8.7)
/// - 21 dB < attenuation ≤ 50 dB: β = 0.5842·(a − 21)^0.4 + 0.07886·(a − 21)
/// - attenuation ≤ 21 dB: β = 0
pub fn kaiser_beta(atten_db: f32) -> f32 {
    let a = atten_db.abs();
    if a > 50.0 {
        0.1102 * (a - 8.7)
    } else if a > 21.0 {
        0.5842 * (a - 21.0).powf(0.4) + 0.07886 * (a - 21.0)
    } else {
        0.0
    }
}

/// Estimate the filter length required for a transition bandwidth and
/// stopband attenuation.
///
/// Uses the Kaiser estimate, rounded up: taps = ⌈(a − 8) / (14·b)⌉ for
/// a ≥ 8 dB. Below 8 dB the estimate degenerates and a 2-tap minimum is
/// returned.
///
/// # Arguments
/// * `transition_bw` - Normalized transition bandwidth, in (0, 0.5]
/// * `atten_db` - Stopband attenuation in dB, must be positive
pub fn estimate_filter_len(transition_bw: f32, atten_db: f32) -> DesignResult<usize> {
    if transition_bw <= 0.0 || transition_bw > 0.5 {
        return Err(DesignError::InvalidBandwidth(transition_bw));
    }
    if atten_db <= 0.0 {
        return Err(DesignError::InvalidAttenuation(atten_db));
    }

    if atten_db < 8.0 {
        Ok(2)
    } else {
        Ok(((atten_db - 8.0) / (14.0 * transition_bw)).ceil() as usize)
    }
}

/// Evaluate one Kaiser window sample with a fractional offset.
///
/// For tap `index` of a length-`len` window, the sample point is
/// t = index − (len−1)/2 + mu and the window value is
/// I₀(β·√(1 − (2t/len)²)) / I₀(β). Normalizing by `len` keeps the Bessel
/// argument real for every mu in [-0.5, 0.5]; the clamp covers rounding at
/// the edges.
pub fn kaiser_sample(index: usize, len: usize, beta: f32, mu: f32) -> f32 {
    let t = index as f32 - (len as f32 - 1.0) / 2.0 + mu;
    let r = 2.0 * t / len as f32;
    bessel_i0(beta * (1.0 - r * r).max(0.0).sqrt()) / bessel_i0(beta)
}

/// Generate a full symmetric Kaiser window (no fractional offset).
pub fn kaiser_window(len: usize, beta: f32) -> Vec<f32> {
    (0..len).map(|i| kaiser_sample(i, len, beta, 0.0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_kaiser_beta_regions() {
        // 60 dB lies in the high-attenuation branch: 0.1102*(60-8.7)
        assert_relative_eq!(kaiser_beta(60.0), 5.65326, epsilon = 1e-4);

        // middle branch
        let beta_40 = kaiser_beta(40.0);
        assert!(beta_40 > 3.0 && beta_40 < 4.0);

        // at or below 21 dB the window degenerates to rectangular
        assert_eq!(kaiser_beta(21.0), 0.0);
        assert_eq!(kaiser_beta(15.0), 0.0);

        // more attenuation, larger beta
        assert!(kaiser_beta(80.0) > kaiser_beta(60.0));
    }

    #[test]
    fn test_kaiser_beta_sign_insensitive() {
        assert_relative_eq!(kaiser_beta(-60.0), kaiser_beta(60.0), epsilon = 1e-6);
    }

    #[test]
    fn test_kaiser_beta_breakpoints() {
        // approaches zero from above 21 dB
        assert!(kaiser_beta(21.1) < 0.3);

        // the two upper branches agree within the approximation error at 50 dB
        assert!((kaiser_beta(50.0) - kaiser_beta(50.01)).abs() < 0.05);
    }

    #[test]
    fn test_estimate_filter_len() {
        // (60-8)/(14*0.1) = 37.14, rounded up
        assert_eq!(estimate_filter_len(0.1, 60.0).unwrap(), 38);

        // narrower transition needs more taps
        assert_eq!(estimate_filter_len(0.05, 60.0).unwrap(), 75);

        // low attenuation clamps to the 2-tap minimum
        assert_eq!(estimate_filter_len(0.1, 5.0).unwrap(), 2);
        assert_eq!(estimate_filter_len(0.4, 7.9).unwrap(), 2);

        // widest allowed transition band
        assert_eq!(estimate_filter_len(0.5, 60.0).unwrap(), 8);
    }

    #[test]
    fn test_estimate_filter_len_errors() {
        assert!(matches!(
            estimate_filter_len(0.0, 60.0),
            Err(DesignError::InvalidBandwidth(_))
        ));
        assert!(matches!(
            estimate_filter_len(0.6, 60.0),
            Err(DesignError::InvalidBandwidth(_))
        ));
        assert!(matches!(
            estimate_filter_len(0.1, 0.0),
            Err(DesignError::InvalidAttenuation(_))
        ));
        assert!(matches!(
            estimate_filter_len(0.1, -20.0),
            Err(DesignError::InvalidAttenuation(_))
        ));
    }

    #[test]
    fn test_kaiser_sample_center() {
        // odd length, mu = 0: exact peak of 1 at the center tap
        assert_relative_eq!(kaiser_sample(5, 11, 5.0, 0.0), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_kaiser_sample_edge_offset() {
        // mu at the limit pushes the last sample point to the window edge;
        // the value must stay finite and nonnegative
        for i in 0..8 {
            let w = kaiser_sample(i, 8, 7.0, 0.5);
            assert!(w.is_finite());
            assert!(w >= 0.0 && w <= 1.0);
        }
    }

    #[test]
    fn test_kaiser_window_symmetry() {
        let w = kaiser_window(9, 5.0);
        assert_eq!(w.len(), 9);
        for i in 0..4 {
            assert_relative_eq!(w[i], w[8 - i], epsilon = 1e-6);
        }
        // monotone rise toward the center
        assert!(w[0] < w[1] && w[1] < w[2] && w[3] < w[4]);
    }

    #[test]
    fn test_kaiser_window_beta_zero() {
        // beta = 0 degenerates to rectangular
        for &v in &kaiser_window(8, 0.0) {
            assert_relative_eq!(v, 1.0, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_kaiser_window_degenerate_lengths() {
        assert!(kaiser_window(0, 5.0).is_empty());
        assert_eq!(kaiser_window(1, 5.0), vec![1.0]);
    }
}

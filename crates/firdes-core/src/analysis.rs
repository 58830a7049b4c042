//! Coefficient-vector analysis
//!
//! Post-design quality checks on a finished tap vector: discrete
//! autocorrelation, inter-symbol interference at symbol spacing, total
//! energy, and the FFT magnitude response. These read the coefficients
//! only; nothing here mutates or allocates on behalf of the caller except
//! the returned response vector.

use num_complex::Complex32;
use rustfft::FftPlanner;

use crate::types::{Coeff, DesignError, DesignResult, IsiReport};

/// Compute the filter autocorrelation at a single lag.
///
/// r(lag) = Σ h[i]·h[i−|lag|]. The autocorrelation of a real vector is
/// even, so negative lags fold onto positive ones; lags at or beyond the
/// filter length have no overlap and return 0. Accepts any slice length,
/// including empty.
pub fn autocorrelation(taps: &[Coeff], lag: isize) -> Coeff {
    let lag = lag.unsigned_abs();
    if lag >= taps.len() {
        return 0.0;
    }
    taps[lag..].iter().zip(taps.iter()).map(|(a, b)| a * b).sum()
}

/// Total energy of a coefficient vector (the zero-lag autocorrelation).
pub fn filter_energy(taps: &[Coeff]) -> Coeff {
    autocorrelation(taps, 0)
}

/// Measure inter-symbol interference of a pulse-shaping filter.
///
/// The vector must hold exactly 2·k·m + 1 taps for oversampling rate `k`
/// and delay `m` symbols. Every symbol-spaced lag i·k (i = 1..2m) is
/// normalized by the zero-lag autocorrelation; the report carries the
/// mean-squared and the largest normalized term.
///
/// # Errors
/// * `InvalidSamplesPerSymbol` / `InvalidDelay` when k < 2 or m < 1
/// * `LengthMismatch` when the vector is not 2·k·m + 1 long
/// * `ZeroEnergy` when the zero-lag autocorrelation is zero, which would
///   otherwise divide the normalization by zero
pub fn filter_isi(
    taps: &[Coeff],
    samples_per_symbol: usize,
    delay: usize,
) -> DesignResult<IsiReport> {
    if samples_per_symbol < 2 {
        return Err(DesignError::InvalidSamplesPerSymbol(samples_per_symbol));
    }
    if delay < 1 {
        return Err(DesignError::InvalidDelay(delay));
    }
    let expected = 2 * samples_per_symbol * delay + 1;
    if taps.len() != expected {
        return Err(DesignError::LengthMismatch {
            expected,
            actual: taps.len(),
        });
    }

    let rxx0 = autocorrelation(taps, 0);
    if rxx0 == 0.0 {
        return Err(DesignError::ZeroEnergy);
    }

    let mut mse = 0.0f32;
    let mut max = 0.0f32;
    for i in 1..=2 * delay {
        let e = (autocorrelation(taps, (i * samples_per_symbol) as isize) / rxx0).abs();
        mse += e * e;
        max = max.max(e);
    }

    Ok(IsiReport {
        mse: mse / (2 * delay) as f32,
        max,
    })
}

/// Magnitude response of a coefficient vector in dB, peak-normalized.
///
/// Zero-pads the impulse response to `nfft` points (never below the tap
/// count), runs a forward FFT, and scales so the strongest bin sits at
/// 0 dB. Bin j corresponds to frequency j/nfft cycles per sample.
pub fn magnitude_response_db(taps: &[Coeff], nfft: usize) -> Vec<f32> {
    let n = nfft.max(taps.len()).max(1);

    let mut buf: Vec<Complex32> = taps.iter().map(|&t| Complex32::new(t, 0.0)).collect();
    buf.resize(n, Complex32::new(0.0, 0.0));

    let mut planner = FftPlanner::new();
    planner.plan_fft_forward(n).process(&mut buf);

    let peak = buf.iter().map(|c| c.norm()).fold(0.0f32, f32::max);
    buf.iter()
        .map(|c| 20.0 * (c.norm() / peak).max(1e-12).log10())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kaiser_filter::kaiser_lowpass_taps;
    use approx::assert_relative_eq;

    #[test]
    fn test_autocorrelation_unit_impulse() {
        let taps = [0.0, 0.0, 1.0, 0.0, 0.0];
        assert_eq!(autocorrelation(&taps, 0), 1.0);
        for lag in 1..5 {
            assert_eq!(autocorrelation(&taps, lag), 0.0);
            assert_eq!(autocorrelation(&taps, -lag), 0.0);
        }
    }

    #[test]
    fn test_autocorrelation_known_values() {
        let taps = [1.0, 2.0, 3.0];
        assert_eq!(autocorrelation(&taps, 0), 14.0);
        assert_eq!(autocorrelation(&taps, 1), 8.0);
        assert_eq!(autocorrelation(&taps, 2), 3.0);
    }

    #[test]
    fn test_autocorrelation_even_in_lag() {
        let taps = [0.3, -1.2, 0.7, 2.1, -0.4];
        for lag in 0..6 {
            assert_eq!(autocorrelation(&taps, lag), autocorrelation(&taps, -lag));
        }
    }

    #[test]
    fn test_autocorrelation_out_of_range_lag() {
        let taps = [1.0, 2.0, 3.0];
        assert_eq!(autocorrelation(&taps, 3), 0.0);
        assert_eq!(autocorrelation(&taps, -17), 0.0);
        assert_eq!(autocorrelation(&[], 0), 0.0);
    }

    #[test]
    fn test_filter_energy() {
        assert_relative_eq!(filter_energy(&[3.0, 4.0]), 25.0, epsilon = 1e-6);
    }

    #[test]
    fn test_isi_ideal_nyquist_pulse() {
        // unit impulse at the center: zero autocorrelation at symbol lags
        let mut taps = [0.0; 9];
        taps[4] = 1.0;
        let report = filter_isi(&taps, 2, 2).unwrap();
        assert_eq!(report.mse, 0.0);
        assert_eq!(report.max, 0.0);
    }

    #[test]
    fn test_isi_rectangular_pulse() {
        // r(0)=5, r(2)=3, r(4)=1 for five unit taps at k=2, m=1
        let taps = [1.0; 5];
        let report = filter_isi(&taps, 2, 1).unwrap();
        assert_relative_eq!(report.max, 0.6, epsilon = 1e-6);
        assert_relative_eq!(report.mse, 0.2, epsilon = 1e-6);
    }

    #[test]
    fn test_isi_validation() {
        let taps = [0.5; 9];
        assert!(matches!(
            filter_isi(&taps, 1, 2),
            Err(DesignError::InvalidSamplesPerSymbol(1))
        ));
        assert!(matches!(
            filter_isi(&taps, 2, 0),
            Err(DesignError::InvalidDelay(0))
        ));
        assert_eq!(
            filter_isi(&taps[..8], 2, 2),
            Err(DesignError::LengthMismatch {
                expected: 9,
                actual: 8
            })
        );
    }

    #[test]
    fn test_isi_zero_energy() {
        let taps = [0.0; 9];
        assert_eq!(filter_isi(&taps, 2, 2), Err(DesignError::ZeroEnergy));
    }

    #[test]
    fn test_response_of_impulse_is_flat() {
        let response = magnitude_response_db(&[1.0], 16);
        assert_eq!(response.len(), 16);
        for &db in &response {
            assert_relative_eq!(db, 0.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn test_response_meets_stopband_target() {
        // 51 taps comfortably covers a 60 dB / 0.073-wide transition at
        // quarter-Nyquist cutoff; everything past 0.23 cycles/sample must
        // sit at least 50 dB down
        let taps = kaiser_lowpass_taps(51, 0.25, 60.0, 0.0).unwrap();
        let response = magnitude_response_db(&taps, 1024);

        assert!(response[0] > -0.5, "passband droop at DC: {}", response[0]);
        for (j, &db) in response.iter().enumerate().take(512).skip(236) {
            assert!(db < -50.0, "bin {} only {} dB down", j, db);
        }
    }

    #[test]
    fn test_response_pads_to_tap_count() {
        let taps = [0.2; 33];
        let response = magnitude_response_db(&taps, 8);
        assert_eq!(response.len(), 33);
    }
}

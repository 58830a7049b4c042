//! # FIR Filter Design Library
//!
//! This crate provides finite impulse response (FIR) filter design routines
//! built around the Kaiser window, plus the analysis tools needed to judge
//! the results.
//!
//! ## Overview
//!
//! - **Filter Sizing**: estimate tap count and Kaiser shape parameter from
//!   stopband attenuation and transition bandwidth
//! - **Windowed-Sinc Design**: Kaiser lowpass prototypes with fractional
//!   sample offset for polyphase banks
//! - **Fading Filters**: Doppler spectrum shaping for Rice and Rayleigh
//!   channel models
//! - **Pulse Shaping**: root-Nyquist filters optimized for minimal
//!   inter-symbol interference
//! - **Analysis**: autocorrelation, ISI measurement, magnitude response
//!
//! ## Design Flow
//!
//! ```text
//! atten/bandwidth → estimate_filter_len + kaiser_beta
//!                 → kaiser_lowpass | doppler_fading | root_nyquist
//!                 → filter_isi / magnitude_response_db
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use firdes_core::{kaiser_lowpass_taps, filter_isi, RootNyquistSpec};
//!
//! // 60 dB lowpass with cutoff at a quarter of Nyquist
//! let lowpass = kaiser_lowpass_taps(51, 0.25, 60.0, 0.0).unwrap();
//!
//! // matched-filter pulse shaping: 2 samples/symbol, 6 symbols of delay
//! let pulse = RootNyquistSpec::new(25, 2, 60.0).design().unwrap();
//! let isi = filter_isi(&pulse, 2, 6).unwrap();
//! println!("residual ISI: {:.1} dB", isi.mse_db());
//! ```

pub mod analysis;
pub mod doppler_filter;
pub mod kaiser_filter;
pub mod math;
pub mod root_nyquist;
pub mod types;
pub mod windows;

// Re-export main types
pub use analysis::{autocorrelation, filter_energy, filter_isi, magnitude_response_db};
pub use doppler_filter::{doppler_fading, doppler_fading_taps};
pub use kaiser_filter::{kaiser_lowpass, kaiser_lowpass_taps};
pub use root_nyquist::{root_nyquist, RootNyquistSpec};
pub use types::{Coeff, DesignError, DesignResult, IsiReport};
pub use windows::{estimate_filter_len, kaiser_beta, kaiser_sample, kaiser_window};

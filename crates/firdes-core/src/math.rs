//! Scalar math helpers shared by the designers
//!
//! Normalized sinc and the two zeroth-order Bessel evaluations used by the
//! Kaiser window and the Doppler spectrum model.

use std::f32::consts::PI;

/// Normalized sinc: sin(πx)/(πx), with sinc(0) = 1.
pub fn sinc(x: f32) -> f32 {
    if x.abs() < 1e-6 {
        1.0
    } else {
        let px = PI * x;
        px.sin() / px
    }
}

/// Modified Bessel function of the first kind, order 0.
///
/// Polynomial approximation for |x| < 3.75, asymptotic form beyond
/// (Abramowitz & Stegun 9.8.1 / 9.8.2).
pub fn bessel_i0(x: f32) -> f32 {
    let ax = x.abs();

    if ax < 3.75 {
        let t = (x / 3.75).powi(2);
        1.0 + t
            * (3.5156229
                + t * (3.0899424
                    + t * (1.2067492 + t * (0.2659732 + t * (0.0360768 + t * 0.0045813)))))
    } else {
        let t = 3.75 / ax;
        (ax.exp() / ax.sqrt())
            * (0.39894228
                + t * (0.01328592
                    + t * (0.00225319
                        + t * (-0.00157565
                            + t * (0.00916281
                                + t * (-0.02057706
                                    + t * (0.02635537 + t * (-0.01647633 + t * 0.00392377))))))))
    }
}

/// Bessel function of the first kind, order 0.
///
/// Power series for |x| < 3, asymptotic cosine form beyond. Even in x.
pub fn bessel_j0(x: f32) -> f32 {
    let ax = x.abs();
    if ax < 3.0 {
        let mut sum = 1.0;
        let mut term = 1.0;
        let x2 = x * x / 4.0;
        for k in 1..25 {
            term *= -x2 / (k * k) as f32;
            sum += term;
            if term.abs() < 1e-12 {
                break;
            }
        }
        sum
    } else {
        let z = 8.0 / ax;
        let z2 = z * z;
        let p0 = 1.0 - 0.1098628627e-2 * z2 + 0.2734510407e-4 * z2 * z2;
        let q0 = -0.1562499995e-1 + 0.1430488765e-3 * z2;
        let xx = ax - PI / 4.0;
        (2.0 / (PI * ax)).sqrt() * (xx.cos() * p0 - xx.sin() * q0 * z)
    }
}

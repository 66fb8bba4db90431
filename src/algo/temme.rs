//! Temme's series for the K Bessel function at small argument.
//!
//! N. M. Temme, "On the numerical evaluation of the modified Bessel
//! function of the third kind", J. Comput. Phys. 19 (1975), 324-337.

use crate::algo::constants::{EULER, MAX_ITERATIONS, PI};
use crate::algo::gamma::tgamma1pm1;
use crate::machine::BesselFloat;
use crate::types::Error;
use crate::utils::sinpi;

/// Compute `(K_v(x), K_{v+1}(x))` for |v| ≤ 1/2 and 0 < x ≤ 2.
///
/// The series coefficients are built from Γ(1±v) − 1 so that the limit
/// v → 0 needs no special casing beyond the `c`, `d` and `γ₁` guards.
pub(crate) fn temme_ik<T: BesselFloat>(v: T, x: T) -> Result<(T, T), Error> {
    let one = T::one();
    let two = T::from_f64(2.0);
    let four = T::from_f64(4.0);
    let half = T::from_f64(0.5);
    let eps = T::MACH_EPSILON;
    let pi_t = T::from_f64(PI);

    let gp = tgamma1pm1(v);
    let gm = tgamma1pm1(-v);

    let a = (x / two).ln();
    let b = (v * a).exp();
    let sigma = -a * v;
    let c = if v.abs() < eps {
        one
    } else {
        sinpi(v) / (v * pi_t)
    };
    let d = if sigma.abs() < eps {
        one
    } else {
        sigma.sinh() / sigma
    };
    let gamma1 = if v.abs() < eps {
        -T::from_f64(EULER)
    } else {
        (half / v) * (gp - gm) * c
    };
    let gamma2 = (two + gp + gm) * c / two;

    // Initial values of p_k, q_k, f_k (Temme eq. 2.7)
    let mut p = (gp + one) / (two * b);
    let mut q = (one + gm) * b / two;
    let mut f = (sigma.cosh() * gamma1 + d * (-a) * gamma2) / c;
    let mut h = p;
    let mut coef = one;
    let mut sum = coef * f;
    let mut sum1 = coef * h;

    let mut k = one;
    for _ in 0..MAX_ITERATIONS {
        f = (k * f + p + q) / (k * k - v * v);
        p = p / (k - v);
        q = q / (k + v);
        h = p - k * f;
        coef = coef * (x * x / (four * k));
        sum = sum + coef * f;
        sum1 = sum1 + coef * h;
        if (coef * f).abs() < sum.abs() * eps {
            return Ok((sum, two * sum1 / x));
        }
        k = k + one;
    }

    Err(Error::ConvergenceFailure)
}

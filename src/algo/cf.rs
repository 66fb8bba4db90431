//! Continued fractions for the I and K Bessel functions.
//!
//! `cf1_ik` evaluates the ratio I_{v+1}/I_v (A&S 9.1.73) by the modified
//! Lentz method; `cf2_ik` evaluates K_v and K_{v+1} by Steed's algorithm
//! (Thompson & Barnett, J. Comput. Phys. 64 (1986), 490-509).

use crate::algo::constants::{MAX_ITERATIONS, PI};
use crate::machine::BesselFloat;
use crate::types::Error;

/// Ratio `I_{v+1}(x) / I_v(x)` for v ≥ 0, x > 0.
///
/// Converges in O(x) steps for large x and very quickly when v ≫ x.
pub(crate) fn cf1_ik<T: BesselFloat>(v: T, x: T) -> Result<T, Error> {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let tiny = T::MACH_TINY.sqrt();
    let tolerance = two * T::MACH_EPSILON;

    let mut c = tiny;
    let mut f = tiny;
    let mut d = zero;
    let mut k = one;
    for _ in 0..MAX_ITERATIONS {
        let b = two * (v + k) / x;
        c = b + one / c;
        d = b + d;
        if c == zero {
            c = tiny;
        }
        if d == zero {
            d = tiny;
        }
        d = one / d;
        let delta = c * d;
        f = f * delta;
        if (delta - one).abs() <= tolerance {
            return Ok(f);
        }
        k = k + one;
    }

    Err(Error::ConvergenceFailure)
}

/// Exponentially scaled `(e^x K_v(x), e^x K_{v+1}(x))` for |v| ≤ 1/2, x > 2.
///
/// The scaling keeps both values representable for any x; callers undo it
/// once the final quantity is known.
pub(crate) fn cf2_ik<T: BesselFloat>(v: T, x: T) -> Result<(T, T), Error> {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let half = T::from_f64(0.5);
    let quarter = T::from_f64(0.25);
    let pi_t = T::from_f64(PI);
    let eps = T::MACH_EPSILON;

    let mut a = v * v - quarter;
    let mut b = two * (x + one);
    let mut d = one / b;
    let mut delta = d;
    let mut f = d;
    let mut prev = zero;
    let mut current = one;
    let mut c = -a;
    let mut q_sum = c;
    let mut s = one + q_sum * delta;

    let mut k = two;
    let mut converged = false;
    for _ in 0..MAX_ITERATIONS {
        a = a - two * (k - one);
        b = b + two;
        d = one / (b + a * d);
        delta = delta * (b * d - one);
        f = f + delta;

        // Minimal solution of the three-term recurrence, normalised to q_1 = 1
        let q = (prev - (b - two) * current) / a;
        prev = current;
        current = q;
        c = c * (-a / k);
        q_sum = q_sum + c * q;
        s = s + q_sum * delta;

        if (q_sum * delta).abs() < s.abs() * eps {
            converged = true;
            break;
        }
        k = k + one;
    }
    if !converged {
        return Err(Error::ConvergenceFailure);
    }

    let kv = (pi_t / (two * x)).sqrt() / s;
    let kv1 = kv * (half + v + x + (v * v - quarter) * f) / x;
    Ok((kv, kv1))
}

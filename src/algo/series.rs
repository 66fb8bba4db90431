//! Power series for the I Bessel function at small argument.

use crate::algo::constants::MAX_ITERATIONS;
use crate::algo::gamma::tgamma1p;
use crate::machine::BesselFloat;
use crate::types::Error;

/// Power series for I_v(x), intended for v ≤ `MAX_FACTORIAL` and either
/// x < v/4 or x small enough that one term suffices.
///
/// `I_v(x) = (x/2)^v / Γ(v+1) · Σ_k (x²/4)^k / (k! (v+1)_k)`
///
/// Returns 0 when the prefix underflows.
pub(crate) fn series_i<T: BesselFloat>(v: T, x: T) -> Result<T, Error> {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let four = T::from_f64(4.0);
    let eps = T::MACH_EPSILON;

    let prefix = (x / two).powf(v) / tgamma1p(v);
    if prefix == zero {
        return Ok(zero);
    }

    let mult = x * x / four;
    let mut term = one;
    let mut sum = one;
    let mut k = zero;
    for _ in 0..MAX_ITERATIONS {
        k = k + one;
        term = term * (mult / (k * (k + v)));
        sum = sum + term;
        if term.abs() < eps * sum.abs() {
            return Ok(prefix * sum);
        }
    }

    Err(Error::ConvergenceFailure)
}

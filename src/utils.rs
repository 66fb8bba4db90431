//! Small scalar helpers shared by the algorithms.

use crate::machine::BesselFloat;

/// Whether `x` is a finite integer value.
#[inline]
pub(crate) fn is_integer<T: BesselFloat>(x: T) -> bool {
    x.is_finite() && x.floor() == x
}

/// Whether the integer value `x` is odd. `x` must satisfy [`is_integer`].
#[inline]
pub(crate) fn is_odd<T: BesselFloat>(x: T) -> bool {
    let two = T::from_f64(2.0);
    (x % two).abs() == T::one()
}

/// sin(πx), exactly 0 at integers and exactly ±1 at half-integers.
///
/// Writes `x = n + f` with n the nearest integer, so `f` is exact and
/// `sin(πx) = (−1)^n sin(πf)` with |πf| ≤ π/2.
#[inline]
pub(crate) fn sinpi<T: BesselFloat>(x: T) -> T {
    let n = x.round();
    let s = ((x - n) * T::from_f64(core::f64::consts::PI)).sin();
    if is_odd(n) {
        -s
    } else {
        s
    }
}

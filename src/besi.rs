//! I Bessel function upper interface.
//!
//! Validates and normalises `(v, x)` to the v ≥ 0, x > 0 region handled by
//! [`crate::algo::ik`], then applies the continuation formulas:
//!
//! - `I_v(−x) = (−1)^v I_v(x)` for integer v (non-integer v has a complex result)
//! - `I_{−n}(x) = I_n(x)` for integer n
//! - `I_{−v}(x) = I_v(x) + (2/π) sin(πv) K_v(x)` otherwise

use crate::algo::constants::FRAC_2_PI;
use crate::algo::ik::{bessel_i, bessel_ik};
use crate::machine::BesselFloat;
use crate::types::{Error, OverflowPolicy};
use crate::utils::{is_integer, is_odd, sinpi};

/// Modified Bessel function of the first kind, I_v(x).
///
/// Overflow is reported as [`Error::Overflow`]; see [`cyl_bessel_i_with`]
/// to get `±∞` instead.
///
/// # Example
///
/// ```
/// use bessel_accuracy::cyl_bessel_i;
///
/// let val = cyl_bessel_i(0.0_f64, 1.0).unwrap();
/// assert!((val - 1.2660658777520084).abs() < 1e-15);
/// ```
#[inline]
pub fn cyl_bessel_i<T: BesselFloat>(v: T, x: T) -> Result<T, Error> {
    cyl_bessel_i_with(v, x, OverflowPolicy::Error)
}

/// I_v(x) with an explicit overflow policy.
///
/// The value is computed in `T::Working` and rounded to `T` once, so the
/// overflow check sees the final representation.
pub fn cyl_bessel_i_with<T: BesselFloat>(v: T, x: T, policy: OverflowPolicy) -> Result<T, Error> {
    let w = besi(v.to_working(), x.to_working())?;
    check_overflow(T::from_working(w), policy)
}

/// I_n(x) for integer order n and any real x.
///
/// # Example
///
/// ```
/// use bessel_accuracy::cyl_bessel_i_int;
///
/// let a = cyl_bessel_i_int(-3, 2.5_f64).unwrap();
/// let b = cyl_bessel_i_int(3, -2.5_f64).unwrap();
/// assert_eq!(a, -b);
/// ```
#[inline]
pub fn cyl_bessel_i_int<T: BesselFloat>(n: i32, x: T) -> Result<T, Error> {
    cyl_bessel_i_int_with(n, x, OverflowPolicy::Error)
}

/// I_n(x) for integer order with an explicit overflow policy.
pub fn cyl_bessel_i_int_with<T: BesselFloat>(
    n: i32,
    x: T,
    policy: OverflowPolicy,
) -> Result<T, Error> {
    let w = besi_int(n, x.to_working())?;
    check_overflow(T::from_working(w), policy)
}

#[inline]
fn check_overflow<T: BesselFloat>(val: T, policy: OverflowPolicy) -> Result<T, Error> {
    if val.is_infinite() && policy == OverflowPolicy::Error {
        return Err(Error::Overflow);
    }
    Ok(val)
}

fn besi<T: BesselFloat>(v: T, x: T) -> Result<T, Error> {
    let zero = T::zero();
    let one = T::one();

    if v.is_nan() || v.is_infinite() || x.is_nan() {
        return Err(Error::InvalidInput);
    }

    if x < zero {
        // Only integer orders have a real result here
        if !is_integer(v) {
            return Err(Error::InvalidInput);
        }
        let r = besi(v, -x)?;
        return Ok(if is_odd(v) { -r } else { r });
    }

    let v = if v < zero && is_integer(v) { -v } else { v };

    if x == zero {
        return Ok(if v == zero {
            one
        } else if v > zero {
            zero
        } else {
            // Pole of (x/2)^v / Γ(1+v) at the origin
            T::infinity().copysign(sinpi(-v))
        });
    }
    if x.is_infinite() {
        return Ok(T::infinity());
    }

    if v < zero {
        let av = -v;
        let (i, k) = bessel_ik(av, x)?;
        return Ok(i + T::from_f64(FRAC_2_PI) * sinpi(av) * k);
    }

    bessel_i(v, x)
}

fn besi_int<T: BesselFloat>(n: i32, x: T) -> Result<T, Error> {
    if x.is_nan() {
        return Err(Error::InvalidInput);
    }
    let order = T::from_f64(f64::from(n.unsigned_abs()));
    if x < T::zero() {
        let r = besi(order, -x)?;
        return Ok(if n % 2 != 0 { -r } else { r });
    }
    besi(order, x)
}

//! Simultaneous evaluation of I_v(x) and K_v(x) for v ≥ 0, x > 0.
//!
//! K is started at the reduced order u = v − n (|u| ≤ 1/2) by Temme's
//! series or CF2, carried up to order v by forward recurrence (stable for
//! K), and I follows from the Wronskian
//! `I_v K_{v+1} + I_{v+1} K_v = 1/x` together with the CF1 ratio
//! `f_v = I_{v+1}/I_v`. Orders beyond the recurrence budget use the Debye
//! expansion.

use crate::algo::asymptotic::{debye_ik, log_magnitudes, overflows, underflows};
use crate::algo::cf::{cf1_ik, cf2_ik};
use crate::algo::constants::MAX_ITERATIONS;
use crate::algo::series::series_i;
use crate::algo::temme::temme_ik;
use crate::machine::BesselFloat;
use crate::types::Error;

/// Whether the small-argument power series is accurate and cheap for I_v(x).
///
/// Besides the usual `x < v/4`, this covers any x small enough that the
/// second term `x²/(4(v+1))` is below epsilon, including subnormal x.
#[inline]
fn series_applies<T: BesselFloat>(v: T, x: T) -> bool {
    if v > T::from_f64(f64::from(T::MAX_FACTORIAL)) {
        return false;
    }
    let four = T::from_f64(4.0);
    x * x < four * T::MACH_EPSILON * (v + T::one())
        || (v > T::zero() && x / v < T::from_f64(0.25))
}

/// I_v(x) for v ≥ 0, x > 0.
pub(crate) fn bessel_i<T: BesselFloat>(v: T, x: T) -> Result<T, Error> {
    if series_applies(v, x) {
        return series_i(v, x);
    }
    let (log_i, _) = log_magnitudes(v, x);
    if overflows(log_i) {
        return Ok(T::infinity());
    }
    if underflows(log_i) {
        return Ok(T::zero());
    }
    bessel_ik(v, x).map(|(i, _)| i)
}

/// `value · grow^n_grow / shrink^n_shrink` for `grow`, `shrink` ≥ 1.
///
/// Steps alternate so that the running value stays near 1 for as long as
/// both kinds remain; it only leaves the range if the result does.
fn rescale<T: BesselFloat>(
    mut value: T,
    grow: T,
    mut n_grow: u32,
    shrink: T,
    mut n_shrink: u32,
) -> T {
    let one = T::one();
    while n_grow > 0 || n_shrink > 0 {
        if n_shrink > 0 && (value.abs() >= one || n_grow == 0) {
            value = value / shrink;
            n_shrink -= 1;
        } else {
            value = value * grow;
            n_grow -= 1;
        }
    }
    value
}

/// Split e^x into `pieces` equal factors with `e^{±x/pieces}` normal.
///
/// `pieces` is a power of two so that `x / pieces` is exact.
fn exp_pieces<T: BesselFloat>(x: T) -> (T, u32) {
    let limit = -T::MACH_TINY.ln() - T::one();
    let mut pieces = 2u32;
    while x / T::from_f64(f64::from(pieces)) > limit && pieces < 1 << 30 {
        pieces *= 2;
    }
    ((x / T::from_f64(f64::from(pieces))).exp(), pieces)
}

/// `(I_v(x), K_v(x))` for v ≥ 0, x > 0.
///
/// Either value may overflow to +∞ (I for large x, K for large v and
/// small x) or underflow to 0; the caller decides what that means.
pub(crate) fn bessel_ik<T: BesselFloat>(v: T, x: T) -> Result<(T, T), Error> {
    let one = T::one();
    let two = T::from_f64(2.0);
    let half = T::from_f64(0.5);

    let n = (v + half).floor();
    let u = v - n;
    let steps = match n.to_u32() {
        Some(s) if s <= MAX_ITERATIONS => s,
        _ => return Ok(debye_ik(v, x)),
    };

    // x > 2 works with e^x-scaled K to keep large arguments in range
    let scaled = x > two;
    let (k0, k1) = if scaled {
        cf2_ik(u, x)?
    } else {
        temme_ik(u, x)?
    };

    // ── Forward recurrence K_{u+k+1} = 2(u+k)/x K_{u+k} + K_{u+k-1} ──
    let big = T::MACH_HUGE.sqrt();
    let mut prev = k0;
    let mut current = k1;
    let mut rescales = 0u32;
    let mut kf = one;
    for _ in 0..steps {
        let next = two * (u + kf) / x * current + prev;
        prev = current;
        current = next;
        if current.abs() > big {
            prev = prev / big;
            current = current / big;
            rescales += 1;
        }
        kf = kf + one;
    }
    let kv = prev;
    let kv1 = current;

    // Both values still carry big^{-rescales}, and e^x when scaled
    let (log_i, log_k) = log_magnitudes(v, x);
    let (e, pieces) = if scaled && !(overflows(log_i) && underflows(log_k)) {
        exp_pieces(x)
    } else {
        (one, 0)
    };

    // ── I_v from the series or the Wronskian ──
    let iv = if series_applies(v, x) {
        series_i(v, x)?
    } else if overflows(log_i) {
        T::infinity()
    } else {
        let fv = cf1_ik(v, x)?;
        let r = (one / x) / (kv * fv + kv1);
        rescale(r, e, pieces, big, rescales)
    };

    let k = if underflows(log_k) {
        T::zero()
    } else {
        rescale(kv, big, rescales, e, pieces)
    };

    Ok((iv, k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn small_argument_orders_zero_and_one() {
        // I_0(1), K_0(1), I_1(1)
        let (i0, k0) = bessel_ik(0.0_f64, 1.0).unwrap();
        assert!(rel(i0, 1.2660658777520084) < 1e-14);
        assert!(rel(k0, 0.42102443824070834) < 1e-14);
        let (i1, _) = bessel_ik(1.0_f64, 1.0).unwrap();
        assert!(rel(i1, 0.5651591039924851) < 1e-14);
    }

    #[test]
    fn large_argument_uses_scaled_path() {
        // I_0(10) = 2815.716628466254, K_0(10) = 1.778006231616765e-05
        let (i0, k0) = bessel_ik(0.0_f64, 10.0).unwrap();
        assert!(rel(i0, 2815.716628466254) < 1e-14);
        assert!(rel(k0, 1.778006231616765e-05) < 1e-13);
    }

    #[test]
    fn half_integer_orders_are_elementary() {
        // I_{5/2}(x) = sqrt(2/(πx)) ((1 + 3/x²) sinh x − (3/x) cosh x)
        let x = 4.0_f64;
        let expected = (2.0 / (core::f64::consts::PI * x)).sqrt()
            * ((1.0 + 3.0 / (x * x)) * x.sinh() - (3.0 / x) * x.cosh());
        assert!(rel(bessel_i(2.5_f64, x).unwrap(), expected) < 1e-13);
    }

    #[test]
    fn large_argument_does_not_overflow_early() {
        // I_0(700) = 1.5295933476718737e302
        let val = bessel_i(0.0_f64, 700.0).unwrap();
        assert!(rel(val, 1.5295933476718737e302) < 1e-13);
    }

    #[test]
    fn overflowing_argument_gives_infinity() {
        assert!(bessel_i(0.0_f64, 800.0).unwrap().is_infinite());
    }

    #[test]
    fn large_order_stays_in_range() {
        // The rescaling and e^x factors must not underflow in between
        for (v, x, expected) in [
            (600.0_f64, 150.0, 9.294910994369755e-280),
            (1000.0, 400.0, 2.823892953877576e-250),
            (1000.0, 500.0, 4.6745252365944256e-144),
            (1000.0, 600.0, 9.8217537676195774e-54),
        ] {
            let val = bessel_i(v, x).unwrap();
            assert!(rel(val, expected) < 1e-14, "I_{v}({x}) = {val:e}");
        }
    }

    #[test]
    fn order_zero_at_subnormal_argument() {
        assert_eq!(bessel_i(0.0_f64, 1.0e-310).unwrap(), 1.0);
        assert_eq!(bessel_i(0.0_f64, 5.0e-324).unwrap(), 1.0);
        assert_eq!(bessel_i(1.0_f64, 1.0e-310).unwrap(), 5.0e-311);
    }

    #[test]
    fn orders_beyond_the_recurrence() {
        assert_eq!(bessel_i(2.0e6_f64, 1.0).unwrap(), 0.0);
        // I_{1.5e6}(993954) = 6.2387161693943453e-131
        let val = bessel_i(1.5e6_f64, 993954.0).unwrap();
        assert!(rel(val, 6.2387161693943453e-131) < 1e-9);
        let (i, k) = bessel_ik(2.0e6_f64, 1.0).unwrap();
        assert_eq!(i, 0.0);
        assert_eq!(k, f64::INFINITY);
    }

    #[test]
    fn rescale_interleaves() {
        let big = f64::MAX.sqrt();
        // 1e-200 · (1e150)^2 / big^2 never leaves the normal range
        let val = rescale(1.0e-200_f64, 1.0e150, 2, big, 2);
        assert!(rel(val, 1.0e100 / f64::MAX) < 1e-14);
        assert_eq!(rescale(3.0_f64, 2.0, 0, 2.0, 0), 3.0);
    }

    #[test]
    fn high_order_small_argument() {
        // I_50(1) = 2.9346353085118383e-80, K_50(1) = 3.406896854161702e77
        let (i50, k50) = bessel_ik(50.0_f64, 1.0).unwrap();
        assert!(rel(i50, 2.9346353085118383e-80) < 1e-13);
        assert!(rel(k50, 3.406896854161702e77) < 1e-13);
    }
}

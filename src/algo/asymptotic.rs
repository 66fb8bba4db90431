//! Uniform asymptotic (Debye) expansions for large order, A&S 9.7.7-9.7.8.
//!
//! With `s = sqrt(v² + x²)`, `t = v/s` and `vη = s − v·asinh(v/x)`:
//!
//! ```text
//! I_v(x) ~ e^{vη} / sqrt(2πs) · Σ_k u_k(t) / v^k
//! K_v(x) ~ e^{−vη} sqrt(π/2s) · Σ_k (−1)^k u_k(t) / v^k
//! ```
//!
//! The leading factors alone fix ln I and ln K to within O(1/s), which is
//! enough to decide overflow and underflow before any real work.

use crate::algo::constants::PI;
use crate::machine::BesselFloat;

/// Coefficients of `u_k(t) = t^k · P_k(t²) / DEBYE_DENOM[k]`, `P_k` in
/// ascending powers of t².
#[rustfmt::skip]
const DEBYE_NUMER: [&[f64]; 5] = [
    &[1.0],
    &[3.0, -5.0],
    &[81.0, -462.0, 385.0],
    &[30375.0, -369603.0, 765765.0, -425425.0],
    &[4465125.0, -94121676.0, 349922430.0, -446185740.0, 185910725.0],
];

const DEBYE_DENOM: [f64; 5] = [1.0, 24.0, 1152.0, 414720.0, 39813120.0];

/// `(s, vη)` for v ≥ 0, x > 0.
#[inline]
fn debye_exponent<T: BesselFloat>(v: T, x: T) -> (T, T) {
    let s = v.hypot(x);
    (s, s - v * (v / x).asinh())
}

/// Leading-order estimates of `(ln I_v(x), ln K_v(x))`.
pub(crate) fn log_magnitudes<T: BesselFloat>(v: T, x: T) -> (T, T) {
    let half = T::from_f64(0.5);
    let two = T::from_f64(2.0);
    let pi_t = T::from_f64(PI);
    let (s, eta) = debye_exponent(v, x);
    (
        eta - half * (two * pi_t * s).ln(),
        -eta + half * (pi_t / (two * s)).ln(),
    )
}

/// Whether the estimate puts ln of the result beyond the finite range of `T`.
#[inline]
pub(crate) fn overflows<T: BesselFloat>(log_value: T) -> bool {
    log_value > T::MACH_HUGE.ln() + T::one()
}

/// Whether the estimate puts the result below the smallest subnormal of `T`.
#[inline]
pub(crate) fn underflows<T: BesselFloat>(log_value: T) -> bool {
    log_value < (T::MACH_TINY * T::MACH_EPSILON).ln() - T::one()
}

/// `(I_v(x), K_v(x))` from the Debye series, for very large v.
///
/// Terms up to `u_4` are summed; at the orders this is used for the
/// remainder is below double precision. The exponentials are applied in
/// halves so a result near the edge of the range does not overflow early.
pub(crate) fn debye_ik<T: BesselFloat>(v: T, x: T) -> (T, T) {
    let zero = T::zero();
    let one = T::one();
    let two = T::from_f64(2.0);
    let pi_t = T::from_f64(PI);

    let (s, eta) = debye_exponent(v, x);
    let t = v / s;
    let t2 = t * t;

    let mut sum_i = zero;
    let mut sum_k = zero;
    let mut tk = one;
    let mut vk = one;
    for (k, (numer, &denom)) in DEBYE_NUMER.iter().zip(DEBYE_DENOM.iter()).enumerate() {
        let p = numer
            .iter()
            .rev()
            .fold(zero, |acc, &c| acc * t2 + T::from_f64(c));
        let term = tk * p / T::from_f64(denom) * vk;
        sum_i = sum_i + term;
        sum_k = if k % 2 == 0 { sum_k + term } else { sum_k - term };
        tk = tk * t;
        vk = vk / v;
    }

    let e = (eta / two).exp();
    let i = e * (sum_i / (two * pi_t * s).sqrt() * e);
    let e = (-eta / two).exp();
    let k = e * (sum_k * (pi_t / (two * s)).sqrt() * e);
    (i, k)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rel(a: f64, b: f64) -> f64 {
        ((a - b) / b).abs()
    }

    #[test]
    fn estimates_track_known_magnitudes() {
        // ln I_0(700) = 695.8057
        let (log_i, _) = log_magnitudes(0.0_f64, 700.0);
        assert!((log_i - 695.8057).abs() < 1e-3);
        let (log_i, log_k) = log_magnitudes(50.0_f64, 1.0);
        assert!((log_i - 2.9346353085118383e-80_f64.ln()).abs() < 1e-2);
        assert!((log_k - 3.406896854161702e77_f64.ln()).abs() < 1e-2);
    }

    #[test]
    fn range_checks() {
        assert!(overflows(800.0_f64));
        assert!(!overflows(700.0_f64));
        assert!(underflows(-800.0_f64));
        assert!(!underflows(-740.0_f64));
    }

    #[test]
    fn large_order_value() {
        // I_{1.5e6}(993954) = 6.2387161693943453e-131
        let (i, _) = debye_ik(1.5e6_f64, 993954.0);
        assert!(rel(i, 6.2387161693943453e-131) < 1e-9);
    }

    #[test]
    fn large_order_product() {
        // I_v K_v = 1/(2s) up to O(1/v²)
        let (v, x) = (1.5e6_f64, 993954.0);
        let (i, k) = debye_ik(v, x);
        let s = v.hypot(x);
        assert!(rel(i * k * 2.0 * s, 1.0) < 1e-9);
    }

    #[test]
    fn large_order_small_argument_underflows() {
        let (i, k) = debye_ik(2.0e6_f64, 1.0);
        assert_eq!(i, 0.0);
        assert_eq!(k, f64::INFINITY);
    }
}

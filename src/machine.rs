//! Machine constants and the `BesselFloat` trait.

use core::fmt;

use num_traits::Float;

/// Floating-point trait for Bessel function evaluation and accuracy testing.
///
/// Implemented for `f32`, `f64` and [`RealConcept`](crate::RealConcept).
/// Besides the machine constants used by the algorithms, every type names
/// itself (for tolerance lookup) and declares the precision it is
/// evaluated in.
pub trait BesselFloat: Float + fmt::Debug + fmt::Display + 'static {
    /// Machine epsilon.
    const MACH_EPSILON: Self;
    /// Smallest positive normal number.
    const MACH_TINY: Self;
    /// Largest representable number.
    const MACH_HUGE: Self;
    /// Largest `n` for which `n!` is finite.
    const MAX_FACTORIAL: u32;
    /// Name reported in test output and matched by tolerance rules.
    const TYPE_NAME: &'static str;

    /// Precision the algorithms run in for this type.
    ///
    /// `f32` is promoted to `f64` and rounded once at the end, which keeps
    /// single precision results correctly rounded in practice.
    type Working: BesselFloat;

    /// Infallible conversion from f64.
    ///
    /// For f64 this is the identity; for f32 it rounds via `as f32`.
    /// All tabulated constants originate as f64 literals.
    fn from_f64(x: f64) -> Self;

    fn to_working(self) -> Self::Working;

    fn from_working(w: Self::Working) -> Self;
}

impl BesselFloat for f64 {
    const MACH_EPSILON: f64 = 2.220446049250313e-16;
    const MACH_TINY: f64 = 2.2250738585072014e-308;
    const MACH_HUGE: f64 = 1.7976931348623157e+308;
    const MAX_FACTORIAL: u32 = 170;
    const TYPE_NAME: &'static str = "f64";

    type Working = f64;

    #[inline]
    fn from_f64(x: f64) -> f64 {
        x
    }
    #[inline]
    fn to_working(self) -> f64 {
        self
    }
    #[inline]
    fn from_working(w: f64) -> f64 {
        w
    }
}

impl BesselFloat for f32 {
    const MACH_EPSILON: f32 = 1.1920929e-7;
    const MACH_TINY: f32 = 1.1754944e-38;
    const MACH_HUGE: f32 = 3.4028235e+38;
    const MAX_FACTORIAL: u32 = 34;
    const TYPE_NAME: &'static str = "f32";

    type Working = f64;

    #[inline]
    fn from_f64(x: f64) -> f32 {
        x as f32
    }
    #[inline]
    fn to_working(self) -> f64 {
        f64::from(self)
    }
    // Out-of-range values become ±inf, which the caller reports as overflow.
    #[inline]
    fn from_working(w: f64) -> f32 {
        w as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants_match_std() {
        assert_eq!(<f64 as BesselFloat>::MACH_EPSILON, f64::EPSILON);
        assert_eq!(<f64 as BesselFloat>::MACH_TINY, f64::MIN_POSITIVE);
        assert_eq!(<f64 as BesselFloat>::MACH_HUGE, f64::MAX);
        assert_eq!(<f32 as BesselFloat>::MACH_EPSILON, f32::EPSILON);
        assert_eq!(<f32 as BesselFloat>::MACH_TINY, f32::MIN_POSITIVE);
        assert_eq!(<f32 as BesselFloat>::MACH_HUGE, f32::MAX);
    }

    #[test]
    fn max_factorial_is_the_last_finite_one() {
        let mut f = 1.0_f64;
        for k in 1..=170 {
            f *= k as f64;
        }
        assert!(f.is_finite());
        assert!((f * 171.0).is_infinite());

        let mut g = 1.0_f32;
        for k in 1..=34 {
            g *= k as f32;
        }
        assert!(g.is_finite());
        assert!((g * 35.0).is_infinite());
    }

    #[test]
    fn f32_promotes_and_rounds() {
        assert_eq!(1.5_f32.to_working(), 1.5_f64);
        assert_eq!(f32::from_working(1.0e39), f32::INFINITY);
        assert_eq!(f32::from_working(-1.0e39), f32::NEG_INFINITY);
        assert_eq!(f32::from_working(0.1), 0.1_f32);
    }
}

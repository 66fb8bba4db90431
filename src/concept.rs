//! A real number type that is only reachable through generic interfaces.
//!
//! [`RealConcept`] wraps an `f64` but exposes nothing except the
//! `num_traits` traits, the arithmetic operators and `Display`. Running the
//! Bessel code and the accuracy harness over it checks that neither relies
//! on primitive-only behaviour (inherent methods, literal coercions, `as`
//! casts). Its results are expected to match `f64` bit for bit.

use core::cmp::Ordering;
use core::fmt;
use core::num::FpCategory;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

use num_traits::{Float, Num, NumCast, One, ToPrimitive, Zero};

use crate::machine::BesselFloat;

/// Generic-interface-only real number backed by `f64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct RealConcept(f64);

impl RealConcept {
    pub const fn new(x: f64) -> Self {
        Self(x)
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for RealConcept {
    fn from(x: f64) -> Self {
        Self(x)
    }
}

impl fmt::Display for RealConcept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

macro_rules! forward_binary_op {
    ($($trait:ident :: $method:ident => $op:tt),* $(,)?) => {
        $(
            impl $trait for RealConcept {
                type Output = Self;
                #[inline]
                fn $method(self, rhs: Self) -> Self {
                    Self(self.0 $op rhs.0)
                }
            }
        )*
    };
}

forward_binary_op! {
    Add::add => +,
    Sub::sub => -,
    Mul::mul => *,
    Div::div => /,
    Rem::rem => %,
}

impl Neg for RealConcept {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Zero for RealConcept {
    fn zero() -> Self {
        Self(0.0)
    }
    fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl One for RealConcept {
    fn one() -> Self {
        Self(1.0)
    }
}

impl Num for RealConcept {
    type FromStrRadixErr = <f64 as Num>::FromStrRadixErr;

    fn from_str_radix(s: &str, radix: u32) -> Result<Self, Self::FromStrRadixErr> {
        <f64 as Num>::from_str_radix(s, radix).map(Self)
    }
}

impl ToPrimitive for RealConcept {
    fn to_i64(&self) -> Option<i64> {
        self.0.to_i64()
    }
    fn to_u64(&self) -> Option<u64> {
        self.0.to_u64()
    }
    fn to_i32(&self) -> Option<i32> {
        self.0.to_i32()
    }
    fn to_f32(&self) -> Option<f32> {
        self.0.to_f32()
    }
    fn to_f64(&self) -> Option<f64> {
        Some(self.0)
    }
}

impl NumCast for RealConcept {
    fn from<N: ToPrimitive>(n: N) -> Option<Self> {
        n.to_f64().map(Self)
    }
}

macro_rules! forward_unary {
    ($($method:ident),* $(,)?) => {
        $(
            #[inline]
            fn $method(self) -> Self {
                Self(self.0.$method())
            }
        )*
    };
}

macro_rules! forward_predicate {
    ($($method:ident),* $(,)?) => {
        $(
            #[inline]
            fn $method(self) -> bool {
                self.0.$method()
            }
        )*
    };
}

macro_rules! forward_constant {
    ($($method:ident => $value:expr),* $(,)?) => {
        $(
            #[inline]
            fn $method() -> Self {
                Self($value)
            }
        )*
    };
}

impl Float for RealConcept {
    forward_constant! {
        nan => f64::NAN,
        infinity => f64::INFINITY,
        neg_infinity => f64::NEG_INFINITY,
        neg_zero => -0.0,
        min_value => f64::MIN,
        min_positive_value => f64::MIN_POSITIVE,
        max_value => f64::MAX,
        epsilon => f64::EPSILON,
    }

    forward_predicate! {
        is_nan,
        is_infinite,
        is_finite,
        is_normal,
        is_sign_positive,
        is_sign_negative,
    }

    forward_unary! {
        floor, ceil, round, trunc, fract, abs, signum, recip, sqrt,
        exp, exp2, ln, log2, log10, cbrt,
        sin, cos, tan, asin, acos, atan,
        exp_m1, ln_1p, sinh, cosh, tanh, asinh, acosh, atanh,
    }

    fn classify(self) -> FpCategory {
        self.0.classify()
    }

    fn mul_add(self, a: Self, b: Self) -> Self {
        Self(self.0.mul_add(a.0, b.0))
    }

    fn powi(self, n: i32) -> Self {
        Self(self.0.powi(n))
    }

    fn powf(self, n: Self) -> Self {
        Self(self.0.powf(n.0))
    }

    fn log(self, base: Self) -> Self {
        Self(self.0.log(base.0))
    }

    fn max(self, other: Self) -> Self {
        Self(self.0.max(other.0))
    }

    fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    fn abs_sub(self, other: Self) -> Self {
        match self.0.partial_cmp(&other.0) {
            Some(Ordering::Greater) => Self(self.0 - other.0),
            Some(_) => Self(0.0),
            None => Self(f64::NAN),
        }
    }

    fn hypot(self, other: Self) -> Self {
        Self(self.0.hypot(other.0))
    }

    fn atan2(self, other: Self) -> Self {
        Self(self.0.atan2(other.0))
    }

    fn sin_cos(self) -> (Self, Self) {
        let (s, c) = self.0.sin_cos();
        (Self(s), Self(c))
    }

    fn integer_decode(self) -> (u64, i16, i8) {
        Float::integer_decode(self.0)
    }
}

impl BesselFloat for RealConcept {
    const MACH_EPSILON: Self = Self(f64::EPSILON);
    const MACH_TINY: Self = Self(f64::MIN_POSITIVE);
    const MACH_HUGE: Self = Self(f64::MAX);
    const MAX_FACTORIAL: u32 = 170;
    const TYPE_NAME: &'static str = "real_concept";

    type Working = Self;

    #[inline]
    fn from_f64(x: f64) -> Self {
        Self(x)
    }
    #[inline]
    fn to_working(self) -> Self {
        self
    }
    #[inline]
    fn from_working(w: Self) -> Self {
        w
    }
}

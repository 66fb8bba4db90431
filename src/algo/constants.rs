//! Shared constants used by multiple algorithm modules.
//!
//! Module-specific constants remain in their respective files.

#![allow(clippy::excessive_precision)]
#![allow(clippy::approx_constant)]

/// π
pub(crate) const PI: f64 = 3.14159265358979324e+00;

/// 2/π, the coefficient of the reflection term for negative orders.
pub(crate) const FRAC_2_PI: f64 = 6.36619772367581343e-01;

/// Euler–Mascheroni constant γ.
pub(crate) const EULER: f64 = 5.77215664901532861e-01;

/// Upper bound on terms or steps in any series, continued fraction or
/// recurrence before giving up with a convergence failure.
pub(crate) const MAX_ITERATIONS: u32 = 1_000_000;

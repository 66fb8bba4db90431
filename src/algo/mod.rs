//! Internal algorithm modules for the real-argument I Bessel function.
//!
//! All functions are `pub(crate)`; the public surface lives in [`crate::besi`].
//! Every routine expects v ≥ 0 and x > 0 and signals exhaustion of its
//! iteration budget with [`Error::ConvergenceFailure`](crate::types::Error).
//!
//! # Clippy suppressions
//!
//! `gamma` and `constants` carry `#![allow(clippy::excessive_precision)]`:
//! tabulated values are written with every digit the generator printed.

pub(crate) mod constants;

// Γ(1+z) and friends
pub(crate) mod gamma;

// Small-argument I
pub(crate) mod series;

// K at the reduced order
pub(crate) mod cf;
pub(crate) mod temme;

// Large-order expansion and range estimates
pub(crate) mod asymptotic;

// Recurrence + Wronskian
pub(crate) mod ik;

//! Accuracy regression suite for the modified Bessel function of the first
//! kind, I_v(x), together with the real-argument implementation it tests.
//!
//! The crate has two halves:
//!
//! - [`cyl_bessel_i`] and friends: generic I_v(x) for `f32`, `f64` and
//!   [`RealConcept`], built on Temme's method, continued fractions and the
//!   small-argument series.
//! - [`accuracy`]: a dataset runner, a tolerance registry and a report,
//!   driven over the compiled-in [`data`] tables by [`suite`].
//!
//! # Example
//!
//! ```
//! use bessel_accuracy::{cyl_bessel_i, cyl_bessel_i_int};
//!
//! let i0 = cyl_bessel_i(0.0_f64, 1.0).unwrap();
//! assert!((i0 - 1.2660658777520084).abs() < 1e-15);
//!
//! // Integer orders accept negative arguments
//! let i3 = cyl_bessel_i_int(3, -2.5_f64).unwrap();
//! assert!(i3 < 0.0);
//! ```

pub mod accuracy;
pub mod besi;
pub mod concept;
pub mod config;
pub mod data;
pub mod machine;
pub mod suite;
pub mod types;

pub(crate) mod algo;
pub(crate) mod utils;

pub use besi::{cyl_bessel_i, cyl_bessel_i_int, cyl_bessel_i_int_with, cyl_bessel_i_with};
pub use concept::RealConcept;
pub use config::{ConfigError, HarnessConfig, TypeSelection};
pub use machine::BesselFloat;
pub use types::{Error, OverflowPolicy};

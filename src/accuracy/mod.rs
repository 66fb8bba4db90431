//! Dataset-driven accuracy testing.
//!
//! A dataset is a table of `[args..., expected]` rows. [`run`] evaluates a
//! function on every row and aggregates peak and RMS relative error in
//! epsilons of the type under test; a [`ToleranceRegistry`] supplies the
//! allowed error for the build environment, type and dataset; [`compare`]
//! turns the two into a pass or an attributed [`AccuracyFailure`].
//!
//! ```
//! use bessel_accuracy::accuracy::{compare, run, Context, InvocationPolicy, Tolerance};
//!
//! let rows = [[0.0_f64, 0.0, 1.0]];
//! let result = run(&rows, |_: &[f64; 3]| Ok::<_, &str>(1.0), InvocationPolicy::Surface);
//! assert_eq!((result.peak, result.rms), (0.0, 0.0));
//!
//! let ctx = Context { function: "one", type_name: "f64", dataset: "unit" };
//! assert!(compare(&result, Tolerance::STRICTEST, &ctx).is_ok());
//! ```

pub mod relative;
pub mod report;
pub mod runner;
pub mod tolerance;

pub use relative::{error_in_epsilons, relative_error};
pub use report::{compare, AccuracyFailure, Context, Exceeded, Outcome, SuiteReport};
pub use runner::{run, InvocationPolicy, RowFailure, TestResult, WorstRow};
pub use tolerance::{Environment, Matcher, Tolerance, ToleranceRegistry, ToleranceRule};

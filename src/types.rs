//! Core types for Bessel function evaluation.

use core::fmt;

/// What to do when a result is too large to represent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OverflowPolicy {
    /// Report [`Error::Overflow`].
    #[default]
    Error,
    /// Return the correctly signed infinity.
    Ignore,
}

/// Error type for Bessel function evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// Invalid input (NaN, or x < 0 with a non-integer order).
    InvalidInput,
    /// Result magnitude exceeds the representable range.
    Overflow,
    /// Algorithm did not meet termination criteria.
    ConvergenceFailure,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidInput => {
                write!(f, "invalid input: the result is complex or undefined")
            }
            Error::Overflow => {
                write!(f, "overflow: result magnitude exceeds representable range")
            }
            Error::ConvergenceFailure => {
                write!(
                    f,
                    "convergence failure: algorithm did not meet termination criteria"
                )
            }
        }
    }
}

impl core::error::Error for Error {}

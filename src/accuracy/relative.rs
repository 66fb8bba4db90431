//! Relative error between a computed value and its reference.

use num_traits::Float;

/// Relative error `|computed − expected| / |expected|` with the edge-case
/// rules used for special-function accuracy tests:
///
/// - magnitudes at or beyond `max_value` (including ±∞) are clamped to
///   `±max_value`, so two same-signed overflowed values agree exactly;
/// - non-zero magnitudes below `min_positive_value` are clamped to
///   `±min_positive_value`, so all denormals are equivalent;
/// - an exactly zero `expected` falls back to the absolute error.
///
/// The result is never NaN for non-NaN inputs and saturates at `max_value`.
pub fn relative_error<T: Float>(computed: T, expected: T) -> T {
    let zero = T::zero();
    let max = T::max_value();
    let min = T::min_positive_value();

    let clamp = |v: T| {
        if v.abs() >= max {
            max.copysign(v)
        } else if v != zero && v.abs() < min {
            min.copysign(v)
        } else {
            v
        }
    };

    let a = clamp(computed);
    let b = clamp(expected);
    if b == zero {
        return a.abs();
    }
    if a == b {
        return zero;
    }
    ((a - b) / b).abs().min(max)
}

/// [`relative_error`] in units of `T::epsilon()`, widened to `f64`.
pub fn error_in_epsilons<T: Float>(computed: T, expected: T) -> f64 {
    let err = relative_error(computed, expected);
    let eps = T::epsilon().to_f64().unwrap_or(f64::EPSILON);
    err.to_f64().map_or(f64::MAX, |e| (e / eps).min(f64::MAX))
}

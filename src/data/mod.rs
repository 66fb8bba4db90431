//! Compiled-in reference tables for I_v(x).
//!
//! Every row is `[order, argument, expected]` stored as `f64`. Rows are
//! converted to the type under test with [`BesselFloat::from_f64`] right
//! before a run, so narrower types see the value a direct cast of the
//! literal would give.

use crate::machine::BesselFloat;

mod random_int;
mod random_real;
mod spot;

pub use random_int::BESSEL_I_INT_DATA;
pub use random_real::BESSEL_I_DATA;
pub use spot::{I0_DATA, I1_DATA, IN_DATA, IV_DATA};

/// Where the reference values of a dataset came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Origin {
    /// Hand-picked values checked against an independent calculator.
    Spot,
    /// Machine-generated rows with high-precision reference values.
    Random,
}

/// Whether every order in a dataset is an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderKind {
    /// Orders are integers; the integer-order entry point applies.
    Integer,
    /// Orders are arbitrary reals.
    Real,
}

/// A named, immutable table of `[order, argument, expected]` rows.
#[derive(Debug, Clone, Copy)]
pub struct Dataset {
    pub name: &'static str,
    pub origin: Origin,
    pub orders: OrderKind,
    pub rows: &'static [[f64; 3]],
}

impl Dataset {
    /// Rows converted to `T`.
    pub fn rows_as<T: BesselFloat>(&self) -> Vec<[T; 3]> {
        self.rows
            .iter()
            .map(|row| row.map(T::from_f64))
            .collect()
    }

    /// Number of rows.
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

pub const I0_SPOT: Dataset = Dataset {
    name: "Bessel I0: Mathworld Data",
    origin: Origin::Spot,
    orders: OrderKind::Integer,
    rows: &I0_DATA,
};

pub const I1_SPOT: Dataset = Dataset {
    name: "Bessel I1: Mathworld Data",
    origin: Origin::Spot,
    orders: OrderKind::Integer,
    rows: &I1_DATA,
};

pub const IN_SPOT: Dataset = Dataset {
    name: "Bessel In: Mathworld Data",
    origin: Origin::Spot,
    orders: OrderKind::Integer,
    rows: &IN_DATA,
};

pub const IV_SPOT: Dataset = Dataset {
    name: "Bessel Iv: Mathworld Data",
    origin: Origin::Spot,
    orders: OrderKind::Real,
    rows: &IV_DATA,
};

pub const IN_RANDOM: Dataset = Dataset {
    name: "Bessel In: Random Data",
    origin: Origin::Random,
    orders: OrderKind::Integer,
    rows: &BESSEL_I_INT_DATA,
};

pub const IV_RANDOM: Dataset = Dataset {
    name: "Bessel Iv: Random Data",
    origin: Origin::Random,
    orders: OrderKind::Real,
    rows: &BESSEL_I_DATA,
};

/// Datasets whose orders are all integers, in run order.
pub const INTEGER_ORDER_SPOT: [Dataset; 3] = [I0_SPOT, I1_SPOT, IN_SPOT];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_datasets_hold_integer_orders() {
        for dataset in [I0_SPOT, I1_SPOT, IN_SPOT, IN_RANDOM] {
            assert_eq!(dataset.orders, OrderKind::Integer);
            for row in dataset.rows {
                assert_eq!(row[0].fract(), 0.0, "{}: order {}", dataset.name, row[0]);
            }
        }
    }

    #[test]
    fn random_arguments_survive_f32_conversion() {
        for dataset in [IN_RANDOM, IV_RANDOM] {
            for row in dataset.rows {
                assert_eq!(row[0] as f32 as f64, row[0]);
                assert_eq!(row[1] as f32 as f64, row[1]);
            }
        }
    }

    #[test]
    fn expected_values_are_finite() {
        for dataset in [I0_SPOT, I1_SPOT, IN_SPOT, IV_SPOT, IN_RANDOM, IV_RANDOM] {
            assert!(!dataset.is_empty());
            assert!(dataset.rows.iter().all(|row| row.iter().all(|v| v.is_finite())));
        }
    }

    #[test]
    fn rows_as_f32_keeps_shape() {
        let rows = IV_SPOT.rows_as::<f32>();
        assert_eq!(rows.len(), IV_SPOT.len());
        assert_eq!(rows[0][0], 2.25_f32);
        // 1.07e42 is out of range for f32
        let rows = I0_SPOT.rows_as::<f32>();
        assert!(rows[8][2].is_infinite());
    }
}

//! Run a function over a table of reference rows and aggregate the error.

use core::fmt;

use log::{debug, trace, warn};
use num_traits::Float;

use crate::accuracy::relative::error_in_epsilons;

/// What to do when the function under test cannot produce a value for a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum InvocationPolicy {
    /// Record the row as a failure of the run.
    #[default]
    Surface,
    /// Count the row as ignored and carry on.
    Ignore,
}

/// A row the function under test returned an error (or NaN) for.
#[derive(Debug, Clone, PartialEq)]
pub struct RowFailure {
    /// Index of the row in the dataset.
    pub row: usize,
    /// Description of what went wrong.
    pub message: String,
}

/// The row with the largest error, together with its values.
#[derive(Debug, Clone, PartialEq)]
pub struct WorstRow {
    pub index: usize,
    /// Arguments followed by the expected value.
    pub values: Vec<f64>,
    /// The value the function produced for this row.
    pub computed: f64,
}

/// Aggregate error of one dataset run. Errors are in epsilons of the type
/// under test.
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    /// Number of rows in the dataset.
    pub rows: usize,
    /// First row reaching the peak error; `None` if no row produced a value.
    pub worst: Option<WorstRow>,
    pub peak: f64,
    pub rms: f64,
    /// Rows that failed under [`InvocationPolicy::Surface`].
    pub failures: Vec<RowFailure>,
    /// Rows that failed under [`InvocationPolicy::Ignore`].
    pub ignored: usize,
}

impl TestResult {
    /// Number of rows that contributed an error sample.
    #[must_use]
    pub fn evaluated(&self) -> usize {
        self.rows - self.failures.len() - self.ignored
    }
}

/// Evaluate `f` once for every row and aggregate the relative error of its
/// result against the row's last element.
///
/// Every row is evaluated; nothing short-circuits. The aggregates do not
/// depend on row order: the RMS is summed over the sorted errors and
/// computed as `peak · sqrt(mean((e/peak)²))`, which also keeps
/// `rms ≤ peak` exact in floating point.
///
/// `N` must be at least 1.
pub fn run<T, F, E, const N: usize>(rows: &[[T; N]], mut f: F, policy: InvocationPolicy) -> TestResult
where
    T: Float + fmt::Display,
    F: FnMut(&[T; N]) -> Result<T, E>,
    E: fmt::Display,
{
    let mut errors = Vec::with_capacity(rows.len());
    let mut worst: Option<WorstRow> = None;
    let mut peak = 0.0_f64;
    let mut failures = Vec::new();
    let mut ignored = 0usize;

    for (index, row) in rows.iter().enumerate() {
        let expected = row[N - 1];
        let message = match f(row) {
            Ok(computed) if computed.is_nan() => format!("non-finite result {computed}"),
            Ok(computed) => {
                let err = error_in_epsilons(computed, expected);
                trace!("row {index}: computed {computed}, expected {expected}, error {err:.3}ε");
                if worst.is_none() || err > peak {
                    peak = err;
                    worst = Some(WorstRow {
                        index,
                        values: row.iter().map(|v| v.to_f64().unwrap_or(f64::NAN)).collect(),
                        computed: computed.to_f64().unwrap_or(f64::NAN),
                    });
                }
                errors.push(err);
                continue;
            }
            Err(e) => e.to_string(),
        };

        match policy {
            InvocationPolicy::Surface => {
                warn!("row {index}: {message}");
                failures.push(RowFailure { row: index, message });
            }
            InvocationPolicy::Ignore => {
                debug!("row {index} ignored: {message}");
                ignored += 1;
            }
        }
    }

    let rms = root_mean_square(&mut errors, peak);
    debug!(
        "{} rows: peak {peak:.3}ε, rms {rms:.3}ε, {} failed, {ignored} ignored",
        rows.len(),
        failures.len()
    );

    TestResult {
        rows: rows.len(),
        worst,
        peak,
        rms,
        failures,
        ignored,
    }
}

/// RMS of `errors`, all of which are ≤ `peak`. Sorts `errors` in place.
fn root_mean_square(errors: &mut [f64], peak: f64) -> f64 {
    if errors.is_empty() || peak == 0.0 {
        return 0.0;
    }
    errors.sort_by(f64::total_cmp);
    let sum: f64 = errors.iter().map(|e| (e / peak) * (e / peak)).sum();
    peak * (sum / errors.len() as f64).sqrt()
}

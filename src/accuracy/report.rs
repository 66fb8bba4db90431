//! Comparison of a run against its tolerance, and the suite summary.

use core::fmt;
use std::fmt::Write;

use log::warn;

use crate::accuracy::runner::{RowFailure, TestResult, WorstRow};
use crate::accuracy::tolerance::{Environment, Tolerance};

/// Identifies a dataset run: function, type and dataset names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Context<'a> {
    pub function: &'a str,
    pub type_name: &'a str,
    pub dataset: &'a str,
}

impl fmt::Display for Context<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}<{}> on \"{}\"", self.function, self.type_name, self.dataset)
    }
}

/// Which bound a failed run broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exceeded {
    Peak,
    Rms,
    Both,
    /// Within both bounds, but some rows produced no value.
    Invocation,
}

impl fmt::Display for Exceeded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Peak => write!(f, "peak"),
            Self::Rms => write!(f, "rms"),
            Self::Both => write!(f, "peak and rms"),
            Self::Invocation => write!(f, "invocation"),
        }
    }
}

/// A dataset run that did not meet its tolerance.
#[derive(Debug, Clone, PartialEq)]
pub struct AccuracyFailure {
    pub function: String,
    pub type_name: String,
    pub dataset: String,
    pub worst: Option<WorstRow>,
    pub peak: f64,
    pub rms: f64,
    pub tolerance: Tolerance,
    pub exceeded: Exceeded,
    /// Rows for which the function produced no value, in row order.
    pub invocation_failures: Vec<RowFailure>,
}

impl fmt::Display for AccuracyFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}<{}> on \"{}\": {} exceeded (peak {:.3}ε allowed {}ε, rms {:.3}ε allowed {}ε)",
            self.function,
            self.type_name,
            self.dataset,
            self.exceeded,
            self.peak,
            self.tolerance.max_peak,
            self.rms,
            self.tolerance.max_rms
        )?;
        if let Some(w) = &self.worst {
            write!(f, ", worst row {} {:?} computed {:e}", w.index, w.values, w.computed)?;
        }
        if let Some(first) = self.invocation_failures.first() {
            write!(
                f,
                ", {} rows failed to evaluate (first at row {}: {})",
                self.invocation_failures.len(),
                first.row,
                first.message
            )?;
        }
        Ok(())
    }
}

impl core::error::Error for AccuracyFailure {}

/// Check a run against its tolerance.
///
/// Exceeding a bound takes precedence over invocation failures when
/// choosing [`AccuracyFailure::exceeded`]; the failed rows are always
/// carried.
pub fn compare(result: &TestResult, tolerance: Tolerance, context: &Context<'_>) -> Result<(), AccuracyFailure> {
    let peak_over = result.peak > tolerance.max_peak;
    let rms_over = result.rms > tolerance.max_rms;
    let exceeded = match (peak_over, rms_over) {
        (true, true) => Exceeded::Both,
        (true, false) => Exceeded::Peak,
        (false, true) => Exceeded::Rms,
        (false, false) if !result.failures.is_empty() => Exceeded::Invocation,
        (false, false) => return Ok(()),
    };

    let failure = AccuracyFailure {
        function: context.function.to_string(),
        type_name: context.type_name.to_string(),
        dataset: context.dataset.to_string(),
        worst: result.worst.clone(),
        peak: result.peak,
        rms: result.rms,
        tolerance,
        exceeded,
        invocation_failures: result.failures.clone(),
    };
    warn!("{failure}");
    Err(failure)
}

/// Result of one dataset run within a suite.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub function: String,
    pub type_name: String,
    pub dataset: String,
    pub tolerance: Tolerance,
    pub result: TestResult,
    pub failure: Option<AccuracyFailure>,
}

impl Outcome {
    /// Compare `result` with `tolerance` and record the verdict.
    pub fn new(result: TestResult, tolerance: Tolerance, context: &Context<'_>) -> Self {
        let failure = compare(&result, tolerance, context).err();
        Self {
            function: context.function.to_string(),
            type_name: context.type_name.to_string(),
            dataset: context.dataset.to_string(),
            tolerance,
            result,
            failure,
        }
    }

    #[must_use]
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

/// All outcomes of a harness run.
#[derive(Debug, Clone)]
#[must_use]
pub struct SuiteReport {
    pub environment: Environment,
    pub outcomes: Vec<Outcome>,
}

impl SuiteReport {
    pub fn new(environment: Environment) -> Self {
        Self {
            environment,
            outcomes: Vec::new(),
        }
    }

    pub fn push(&mut self, outcome: Outcome) {
        self.outcomes.push(outcome);
    }

    /// Number of dataset runs that met their tolerance.
    #[must_use]
    pub fn passed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    #[must_use]
    pub fn total_count(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(Outcome::passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &AccuracyFailure> {
        self.outcomes.iter().filter_map(|o| o.failure.as_ref())
    }

    /// One line per dataset run followed by the verdict.
    #[must_use]
    pub fn format_summary(&self) -> String {
        let mut s = String::new();
        let _ = writeln!(
            s,
            "═══ accuracy summary ({}): {}/{} datasets within tolerance ═══",
            self.environment,
            self.passed_count(),
            self.total_count()
        );
        for o in &self.outcomes {
            let icon = if o.passed() { "✓" } else { "✗" };
            let _ = writeln!(
                s,
                "  {icon} {}<{}> {}: peak={:.3}ε rms={:.3}ε (allowed {:.0}/{:.0})",
                o.function, o.type_name, o.dataset, o.result.peak, o.result.rms, o.tolerance.max_peak, o.tolerance.max_rms
            );
        }
        if self.all_passed() {
            let _ = writeln!(s, "ALL DATASETS PASSED");
        } else {
            let _ = writeln!(s, "FAILURES:");
            for failure in self.failures() {
                let _ = writeln!(s, "  {failure}");
            }
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    
    fn result(peak: f64, rms: f64) -> TestResult {
        TestResult {
            rows: 4,
            worst: Some(WorstRow {
                index: 2,
                values: vec![1.0, 2.0, 3.0],
                computed: 3.0000000000000004,
            }),
            peak,
            rms,
            failures: Vec::new(),
            ignored: 0,
        }
    }

    const CTX: Context<'static> = Context {
        function: "cyl_bessel_i",
        type_name: "f64",
        dataset: "Bessel Iv: Random Data",
    };

    #[test]
    fn within_tolerance_passes() {
        assert!(compare(&result(5.0, 3.0), Tolerance::new(15.0, 10.0), &CTX).is_ok());
        assert!(compare(&result(15.0, 10.0), Tolerance::new(15.0, 10.0), &CTX).is_ok());
    }

    #[test]
    fn peak_excess_is_attributed() {
        let failure = compare(&result(20.0, 3.0), Tolerance::new(15.0, 10.0), &CTX).unwrap_err();
        assert_eq!(failure.exceeded, Exceeded::Peak);
        assert_eq!(failure.peak, 20.0);
        assert_eq!(failure.tolerance.max_peak, 15.0);
        assert_eq!(failure.worst.as_ref().map(|w| w.index), Some(2));
        let msg = failure.to_string();
        assert!(msg.contains("cyl_bessel_i<f64>"), "{msg}");
        assert!(msg.contains("Bessel Iv: Random Data"), "{msg}");
        assert!(msg.contains("worst row 2"), "{msg}");
        assert!(msg.contains("peak exceeded"), "{msg}");
    }

    #[test]
    fn rms_and_both() {
        let t = Tolerance::new(15.0, 10.0);
        assert_eq!(compare(&result(12.0, 11.0), t, &CTX).unwrap_err().exceeded, Exceeded::Rms);
        assert_eq!(compare(&result(16.0, 11.0), t, &CTX).unwrap_err().exceeded, Exceeded::Both);
    }

    #[test]
    fn surfaced_rows_fail_the_run() {
        let mut r = result(0.0, 0.0);
        for (row, message) in [(1, "overflow"), (3, "convergence failure")] {
            r.failures.push(RowFailure {
                row,
                message: message.to_string(),
            });
        }
        let failure = compare(&r, Tolerance::new(15.0, 10.0), &CTX).unwrap_err();
        assert_eq!(failure.exceeded, Exceeded::Invocation);
        let rows: Vec<usize> = failure.invocation_failures.iter().map(|f| f.row).collect();
        assert_eq!(rows, [1, 3]);
        let msg = failure.to_string();
        assert!(msg.contains("2 rows failed to evaluate (first at row 1: overflow)"), "{msg}");
    }

    #[test]
    fn suite_report_counts() {
        let mut report = SuiteReport::new(Environment::new("rustc", "std", "linux-x86_64"));
        report.push(Outcome::new(result(5.0, 3.0), Tolerance::new(15.0, 10.0), &CTX));
        report.push(Outcome::new(result(20.0, 3.0), Tolerance::new(15.0, 10.0), &CTX));
        assert_eq!(report.passed_count(), 1);
        assert_eq!(report.total_count(), 2);
        assert!(!report.all_passed());
        assert_eq!(report.failures().count(), 1);

        let summary = report.format_summary();
        assert!(summary.contains("1/2 datasets within tolerance"), "{summary}");
        assert!(summary.contains("FAILURES:"), "{summary}");
        assert!(summary.contains("✗ cyl_bessel_i<f64>"), "{summary}");
    }

    #[test]
    fn empty_report_passes() {
        let report = SuiteReport::new(Environment::current());
        assert!(report.all_passed());
        assert!(report.format_summary().contains("ALL DATASETS PASSED"));
    }
}

//! The `cyl_bessel_i` accuracy suite: shipped tolerances, datasets and the
//! per-type driver.

use std::io::{self, Write};

use log::{debug, info};

use crate::accuracy::{
    run, Context, Environment, Matcher, Outcome, SuiteReport, TestResult, ToleranceRegistry,
    ToleranceRule,
};
use crate::besi::{cyl_bessel_i_int_with, cyl_bessel_i_with};
use crate::concept::RealConcept;
use crate::config::{HarnessConfig, TypeSelection};
use crate::data::{Dataset, INTEGER_ORDER_SPOT, IN_RANDOM, IV_RANDOM, IV_SPOT};
use crate::machine::BesselFloat;
use crate::types::Error;

/// Function name reported in output and matched by tolerance rules.
pub const FUNCTION: &str = "cyl_bessel_i";

/// Appended to a dataset name when it is run through the integer-order entry point.
pub const INTEGER_VERSION: &str = " (Integer Version)";

/// Tolerance rules shipped with the suite.
///
/// macOS system math libraries are less accurate in double precision, so
/// its rule comes first. `f32` has no rule: computed in double and rounded
/// once, it is held to the strictest default.
pub fn expected_results() -> ToleranceRegistry {
    let mut registry = ToleranceRegistry::new();
    registry.register(
        ToleranceRule::new(100.0, 50.0)
            .platform(Matcher::Contains("macos"))
            .type_name(Matcher::OneOf(&["f64", "real_concept"])),
    );
    registry.register(ToleranceRule::new(15.0, 10.0).type_name(Matcher::Exact("f64")));
    registry.register(ToleranceRule::new(15.0, 10.0).type_name(Matcher::Exact("real_concept")));
    registry
}

/// Run every configured type in the current environment, writing the
/// per-dataset report to `out`.
pub fn run_suite<W: Write>(out: &mut W, config: &HarnessConfig) -> io::Result<SuiteReport> {
    run_suite_in(out, config, Environment::current(), &expected_results())
}

/// [`run_suite`] with an explicit environment and tolerance registry.
pub fn run_suite_in<W: Write>(
    out: &mut W,
    config: &HarnessConfig,
    env: Environment,
    registry: &ToleranceRegistry,
) -> io::Result<SuiteReport> {
    writeln!(out, "Tests run with {env}")?;
    info!("accuracy suite for {FUNCTION} on {env}, types {:?}", config.types);

    let mut report = SuiteReport::new(env);
    for selection in &config.types {
        match selection {
            TypeSelection::F32 => run_type::<f32, W>(out, config, registry, &mut report)?,
            TypeSelection::F64 => run_type::<f64, W>(out, config, registry, &mut report)?,
            TypeSelection::RealConcept => run_type::<RealConcept, W>(out, config, registry, &mut report)?,
        }
    }
    Ok(report)
}

/// Write the suite summary and flush `out`.
pub fn write_summary<W: Write>(out: &mut W, report: &SuiteReport) -> io::Result<()> {
    out.write_all(report.format_summary().as_bytes())?;
    out.flush()
}

/// Run all datasets for one type, appending an [`Outcome`] per dataset.
///
/// Order: the integer-order spot sets through the direct entry point, the
/// same sets through the integer-order entry point, then the real-order
/// spot set and both random sets.
pub fn run_type<T: BesselFloat, W: Write>(
    out: &mut W,
    config: &HarnessConfig,
    registry: &ToleranceRegistry,
    report: &mut SuiteReport,
) -> io::Result<()> {
    let overflow = config.overflow;
    let direct = |row: &[T; 3]| cyl_bessel_i_with(row[0], row[1], overflow);
    let integer = |row: &[T; 3]| -> Result<T, Error> {
        let n = row[0].to_i32().ok_or(Error::InvalidInput)?;
        cyl_bessel_i_int_with(n, row[1], overflow)
    };

    for dataset in &INTEGER_ORDER_SPOT {
        run_dataset(out, dataset.name, dataset, direct, config, registry, report)?;
    }
    for dataset in &INTEGER_ORDER_SPOT {
        let name = format!("{}{INTEGER_VERSION}", dataset.name);
        run_dataset(out, &name, dataset, integer, config, registry, report)?;
    }
    for dataset in [&IV_SPOT, &IN_RANDOM, &IV_RANDOM] {
        run_dataset(out, dataset.name, dataset, direct, config, registry, report)?;
    }
    Ok(())
}

fn run_dataset<T, W, F>(
    out: &mut W,
    name: &str,
    dataset: &Dataset,
    f: F,
    config: &HarnessConfig,
    registry: &ToleranceRegistry,
    report: &mut SuiteReport,
) -> io::Result<()>
where
    T: BesselFloat,
    W: Write,
    F: FnMut(&[T; 3]) -> Result<T, Error>,
{
    let type_name = T::TYPE_NAME;
    debug!("{name}: {} rows with type {type_name}", dataset.len());

    writeln!(out, "Testing {name} with type {type_name}")?;
    writeln!(out, "{}", "~".repeat(66))?;

    let rows = dataset.rows_as::<T>();
    let result = run(&rows, f, config.invocation);
    write_result(out, type_name, &result)?;

    let tolerance = registry.lookup(&report.environment, type_name, name, FUNCTION);
    let context = Context {
        function: FUNCTION,
        type_name,
        dataset: name,
    };
    let outcome = Outcome::new(result, tolerance, &context);
    if let Some(failure) = &outcome.failure {
        writeln!(out, "FAILED: {failure}")?;
    }
    writeln!(out)?;

    report.push(outcome);
    Ok(())
}

fn write_result<W: Write>(out: &mut W, type_name: &str, result: &TestResult) -> io::Result<()> {
    writeln!(
        out,
        "{FUNCTION}<{type_name}> Max = {:.3} RMS Mean={:.3}",
        result.peak, result.rms
    )?;
    if let Some(worst) = &result.worst {
        writeln!(out, "    worst case at row: {}", worst.index)?;
        let values: Vec<String> = worst.values.iter().map(|v| format!("{v:e}")).collect();
        writeln!(out, "    {{ {} }} computed {:e}", values.join(", "), worst.computed)?;
    }
    for failure in &result.failures {
        writeln!(out, "    row {}: {}", failure.row, failure.message)?;
    }
    if result.ignored > 0 {
        writeln!(out, "    {} rows ignored", result.ignored)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accuracy::{InvocationPolicy, Tolerance};
    use crate::types::OverflowPolicy;

    #[test]
    fn shipped_tolerances() {
        let r = expected_results();
        assert_eq!(r.len(), 3);
        let linux = Environment::new("rustc", "std", "linux-x86_64");
        let macos = Environment::new("rustc", "std", "macos-aarch64");
        let ds = "Bessel Iv: Random Data";
        assert_eq!(r.lookup(&linux, "f64", ds, FUNCTION), Tolerance::new(15.0, 10.0));
        assert_eq!(r.lookup(&linux, "real_concept", ds, FUNCTION), Tolerance::new(15.0, 10.0));
        assert_eq!(r.lookup(&linux, "f32", ds, FUNCTION), Tolerance::STRICTEST);
        assert_eq!(r.lookup(&macos, "f64", ds, FUNCTION), Tolerance::new(100.0, 50.0));
        assert_eq!(r.lookup(&macos, "real_concept", ds, FUNCTION), Tolerance::new(100.0, 50.0));
        assert_eq!(r.lookup(&macos, "f32", ds, FUNCTION), Tolerance::STRICTEST);
        assert_eq!(r.lookup(&linux, "f128", ds, FUNCTION), Tolerance::STRICTEST);
    }

    #[test]
    fn f64_run_covers_every_dataset() {
        let config = HarnessConfig::default();
        let env = Environment::new("rustc", "std", "linux-x86_64");
        let mut out = Vec::new();
        let mut report = SuiteReport::new(env);
        run_type::<f64, _>(&mut out, &config, &expected_results(), &mut report).unwrap();

        assert_eq!(report.total_count(), 9);
        let names: Vec<&str> = report.outcomes.iter().map(|o| o.dataset.as_str()).collect();
        assert_eq!(names[0], "Bessel I0: Mathworld Data");
        assert_eq!(names[3], "Bessel I0: Mathworld Data (Integer Version)");
        assert_eq!(names[6], "Bessel Iv: Mathworld Data");
        assert_eq!(names[8], "Bessel Iv: Random Data");
        assert!(report.all_passed(), "{}", report.format_summary());

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Testing Bessel In: Random Data with type f64"));
        assert!(text.contains("cyl_bessel_i<f64> Max = "));
        assert!(!text.contains("FAILED"));
    }

    #[test]
    fn overflow_as_error_surfaces_rows() {
        // I_0(100) and I_0(200) do not fit in f32
        let config = HarnessConfig {
            overflow: OverflowPolicy::Error,
            types: vec![TypeSelection::F32],
            ..HarnessConfig::default()
        };
        let env = Environment::new("rustc", "std", "linux-x86_64");
        let report = run_suite_in(&mut io::sink(), &config, env, &expected_results()).unwrap();
        let i0 = &report.outcomes[0];
        assert!(!i0.passed());
        assert_eq!(i0.result.failures.len(), 2);

        let ignoring = HarnessConfig {
            invocation: InvocationPolicy::Ignore,
            ..config
        };
        let env = Environment::new("rustc", "std", "linux-x86_64");
        let report = run_suite_in(&mut io::sink(), &ignoring, env, &expected_results()).unwrap();
        assert!(report.outcomes[0].passed());
        assert_eq!(report.outcomes[0].result.ignored, 2);
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn summary_write_errors_are_reported() {
        let report = SuiteReport::new(Environment::new("rustc", "std", "linux-x86_64"));
        let err = write_summary(&mut BrokenPipe, &report).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let mut out = Vec::new();
        write_summary(&mut out, &report).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("ALL DATASETS PASSED"));
    }

    #[test]
    fn suite_header_names_environment() {
        let config = HarnessConfig {
            types: vec![TypeSelection::RealConcept],
            ..HarnessConfig::default()
        };
        let mut out = Vec::new();
        let env = Environment::new("rustc", "std", "linux-x86_64");
        let report = run_suite_in(&mut out, &config, env, &expected_results()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Tests run with rustc, std, linux-x86_64\n"));
        assert!(report.outcomes.iter().all(|o| o.type_name == "real_concept"));
    }
}

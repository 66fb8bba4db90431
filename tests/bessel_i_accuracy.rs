//! The full suite over every type meets the shipped tolerances.

use bessel_accuracy::accuracy::{Environment, InvocationPolicy};
use bessel_accuracy::suite::{expected_results, run_suite, run_suite_in, FUNCTION};
use bessel_accuracy::{HarnessConfig, TypeSelection};

#[test]
fn full_suite_passes() {
    let mut out = Vec::new();
    let report = run_suite(&mut out, &HarnessConfig::default()).unwrap();

    // 9 datasets for each of 3 types
    assert_eq!(report.total_count(), 27);
    assert!(report.all_passed(), "{}", report.format_summary());
    assert_eq!(report.passed_count(), report.total_count());
    assert_eq!(report.failures().count(), 0);

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Tests run with rustc, std, "));
    for t in TypeSelection::ALL {
        assert!(
            text.contains(&format!("Testing Bessel Iv: Random Data with type {t}")),
            "missing {t}"
        );
    }
}

#[test]
fn every_row_is_evaluated() {
    let config = HarnessConfig::default();
    let report = run_suite(&mut std::io::sink(), &config).unwrap();
    for outcome in &report.outcomes {
        assert_eq!(outcome.function, FUNCTION);
        assert!(outcome.result.failures.is_empty(), "{}: {:?}", outcome.dataset, outcome.result.failures);
        assert_eq!(outcome.result.ignored, 0);
        assert_eq!(outcome.result.evaluated(), outcome.result.rows);
        assert!(outcome.result.rms <= outcome.result.peak);
    }
}

#[test]
fn real_concept_matches_f64() {
    let config = HarnessConfig {
        types: vec![TypeSelection::F64, TypeSelection::RealConcept],
        invocation: InvocationPolicy::Surface,
        ..HarnessConfig::default()
    };
    let env = Environment::new("rustc", "std", "linux-x86_64");
    let report = run_suite_in(&mut std::io::sink(), &config, env, &expected_results()).unwrap();
    let (f64_runs, concept_runs) = report.outcomes.split_at(9);
    for (a, b) in f64_runs.iter().zip(concept_runs) {
        assert_eq!(a.dataset, b.dataset);
        assert_eq!(a.result.peak, b.result.peak, "{}", a.dataset);
        assert_eq!(a.result.rms, b.result.rms, "{}", a.dataset);
    }
}

#[test]
fn strictest_registry_reports_attributed_failures() {
    // With no rules every dataset must be within one epsilon
    let config = HarnessConfig {
        types: vec![TypeSelection::F64],
        ..HarnessConfig::default()
    };
    let env = Environment::new("rustc", "std", "linux-x86_64");
    let empty = bessel_accuracy::accuracy::ToleranceRegistry::new();
    let report = run_suite_in(&mut std::io::sink(), &config, env, &empty).unwrap();
    assert!(report.failures().count() > 0, "{}", report.format_summary());
    for failure in report.failures() {
        assert_eq!(failure.function, FUNCTION);
        assert_eq!(failure.type_name, "f64");
        assert!(failure.peak > 1.0 || failure.rms > 1.0);
        assert!(failure.worst.is_some());
    }
    assert_eq!(report.failures().count(), report.total_count() - report.passed_count());
}

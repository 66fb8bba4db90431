//! Run the `cyl_bessel_i` accuracy suite and print the report.
//!
//! Configuration comes from the environment (see [`HarnessConfig`]);
//! `RUST_LOG` controls diagnostic logging.

use std::io;
use std::process;

use bessel_accuracy::suite::{run_suite, write_summary};
use bessel_accuracy::HarnessConfig;
use log::{error, info};

fn main() {
    env_logger::init();

    let config = match HarnessConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            process::exit(2);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = match run_suite(&mut out, &config) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error writing report: {e}");
            process::exit(2);
        }
    };
    if let Err(e) = write_summary(&mut out, &report) {
        eprintln!("error writing summary: {e}");
        process::exit(2);
    }

    info!(
        "{}/{} datasets within tolerance",
        report.passed_count(),
        report.total_count()
    );
    if config.strict && !report.all_passed() {
        process::exit(1);
    }
}

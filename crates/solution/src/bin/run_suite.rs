use std::process::ExitCode;

use codility_bench::gate;
use codility_solution::suite::suite;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).try_init();

    match gate::autorun(suite()) {
        Some(report) if !report.is_success() => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

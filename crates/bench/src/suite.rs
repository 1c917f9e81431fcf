use std::{error::Error as StdError, fmt::Debug};

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{Error, Fit};

/// A failed test case assertion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Failure {
    message: String,
}

impl Failure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Passes when `actual` equals `expected`.
///
/// # Errors
///
/// Returns a [`Failure`] naming both values when they differ.
pub fn check_eq<T: PartialEq + Debug>(expected: T, actual: T) -> Result<(), Failure> {
    if expected == actual {
        Ok(())
    } else {
        Err(Failure::new(format!("expected {expected:?}, got {actual:?}")))
    }
}

type Case = Box<dyn Fn() -> Result<(), Failure>>;
type Bench = Box<dyn FnMut() -> Result<Fit, Error>>;

/// Named test cases and benchmarks run together.
pub struct Suite {
    name: String,
    cases: Vec<(String, Case)>,
    benches: Vec<(String, Bench)>,
}

/// Outcome of running a [`Suite`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub passed: Vec<String>,
    /// Failed case or benchmark names with their messages.
    pub failures: Vec<(String, String)>,
}

impl Report {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.passed.len() + self.failures.len()
    }

    fn record(&mut self, name: &str, outcome: Result<(), String>) {
        match outcome {
            Ok(()) => {
                debug!(name, "passed");
                self.passed.push(name.to_owned());
            }
            Err(message) => {
                warn!(name, %message, "failed");
                self.failures.push((name.to_owned(), message));
            }
        }
    }
}

impl Suite {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cases: Vec::new(),
            benches: Vec::new(),
        }
    }

    /// Adds a test case.
    #[must_use]
    pub fn case(
        mut self,
        name: impl Into<String>,
        case: impl Fn() -> Result<(), Failure> + 'static,
    ) -> Self {
        self.cases.push((name.into(), Box::new(case)));
        self
    }

    /// Adds a benchmark.
    #[must_use]
    pub fn bench(
        mut self,
        name: impl Into<String>,
        bench: impl FnMut() -> Result<Fit, Error> + 'static,
    ) -> Self {
        self.benches.push((name.into(), Box::new(bench)));
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Runs every case, then every benchmark.
    pub fn run(mut self) -> Report {
        let mut report = Report::default();

        for (name, case) in &self.cases {
            report.record(name, case().map_err(|failure| failure.to_string()));
        }

        for (name, bench) in &mut self.benches {
            report.record(name, bench().map(|_| ()).map_err(|err| describe(&err)));
        }

        info!(
            suite = %self.name,
            passed = report.passed.len(),
            failed = report.failures.len(),
            "finished"
        );
        report
    }
}

/// Joins an error with its sources.
fn describe(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

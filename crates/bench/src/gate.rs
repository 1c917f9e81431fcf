//! Opt-in execution of a [`Suite`].
//!
//! Suites only run when the `RUN_TESTS` environment variable is present.
//! Its value is ignored, so `RUN_TESTS=` counts as set.

use std::{env, ffi::OsString};

use tracing::debug;

use crate::{Report, Suite};

/// Name of the variable that enables [`autorun`].
pub const RUN_TESTS: &str = "RUN_TESTS";

/// Returns whether `RUN_TESTS` is set in the process environment.
#[must_use]
pub fn enabled() -> bool {
    enabled_in(|key| env::var_os(key))
}

/// Returns whether `RUN_TESTS` is present according to `lookup`.
pub fn enabled_in(lookup: impl FnOnce(&str) -> Option<OsString>) -> bool {
    lookup(RUN_TESTS).is_some()
}

/// Runs the suite if `RUN_TESTS` is set, otherwise does nothing.
pub fn autorun(suite: Suite) -> Option<Report> {
    run_if(enabled(), suite)
}

/// Like [`autorun`], with the environment supplied by `lookup`.
pub fn autorun_in(suite: Suite, lookup: impl FnOnce(&str) -> Option<OsString>) -> Option<Report> {
    run_if(enabled_in(lookup), suite)
}

fn run_if(enabled: bool, suite: Suite) -> Option<Report> {
    if enabled {
        Some(suite.run())
    } else {
        debug!(suite = suite.name(), "{RUN_TESTS} not set, skipping");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::Cell, rc::Rc};

    use crate::check_eq;

    fn tracked_suite(ran: &Rc<Cell<bool>>) -> Suite {
        let ran = Rc::clone(ran);
        Suite::new("tracked").case("marks", move || {
            ran.set(true);
            check_eq(0, 0)
        })
    }

    #[test]
    fn presence_is_enough() {
        assert!(enabled_in(|_| Some(OsString::new())));
        assert!(enabled_in(|_| Some(OsString::from("0"))));
        assert!(!enabled_in(|_| None));
    }

    #[test]
    fn looks_up_run_tests() {
        let mut asked = None;
        enabled_in(|key| {
            asked = Some(key.to_owned());
            None
        });
        assert_eq!(asked.as_deref(), Some(RUN_TESTS));
    }

    #[test]
    fn disabled_gate_never_runs_cases() {
        let ran = Rc::new(Cell::new(false));

        assert_eq!(run_if(false, tracked_suite(&ran)), None);
        assert!(!ran.get());

        let report = run_if(true, tracked_suite(&ran)).expect("suite should run");
        assert!(ran.get());
        assert!(report.is_success());
    }

    #[test]
    fn skips_when_unset() {
        let ran = Rc::new(Cell::new(false));

        let report = autorun_in(tracked_suite(&ran), |_| None);

        assert_eq!(report, None);
        assert!(!ran.get());
    }

    #[test]
    fn runs_when_set() {
        let ran = Rc::new(Cell::new(false));

        let report = autorun_in(tracked_suite(&ran), |_| Some(OsString::from("1")))
            .expect("suite should run");

        assert!(ran.get());
        assert_eq!(report.passed, vec!["marks"]);
    }
}

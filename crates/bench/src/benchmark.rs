use std::error::Error as StdError;

use tracing::{info, warn};

use crate::{
    Candidates, Complexity, Config, Error, Fit, Observer, bench_range,
    measure::{Action, Event, Timings, measure},
};

/// Checks that measured timings follow the expected complexity.
///
/// # Errors
///
/// Returns an error if the config is invalid, the timings cannot be fitted,
/// or the fit does not reach the configured threshold.
pub fn assert_performance(
    complexity: Complexity,
    timings: &Timings,
    config: &Config,
) -> Result<Fit, Error> {
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    if timings.len() < 2 {
        return Err(Error::TooFewPoints {
            count: timings.len(),
        });
    }

    let fit = complexity.fit(&timings.xs(), &timings.seconds)?;
    complexity.check(&fit, config.threshold)?;
    Ok(fit)
}

/// A named performance assertion over a range of input sizes.
#[derive(Debug, Clone, PartialEq)]
pub struct Benchmark {
    name: String,
    complexity: Complexity,
    sizes: Vec<usize>,
    config: Config,
}

impl Benchmark {
    /// Creates a benchmark over [`bench_range`] with the default config.
    pub fn new(name: impl Into<String>, complexity: Complexity) -> Self {
        Self {
            name: name.into(),
            complexity,
            sizes: bench_range(),
            config: Config::default(),
        }
    }

    /// Replaces the sizes to measure.
    #[must_use]
    pub fn with_sizes(mut self, sizes: Vec<usize>) -> Self {
        self.sizes = sizes;
        self
    }

    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn complexity(&self) -> Complexity {
        self.complexity
    }

    #[must_use]
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Times `work` on each candidate and asserts the complexity.
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate is missing, `work` fails, or the
    /// timings do not follow the expected complexity.
    pub fn run<T, O, E, W>(&self, candidates: &Candidates<T>, work: W) -> Result<Fit, Error>
    where
        E: StdError + Send + Sync + 'static,
        W: FnMut(&[T]) -> Result<O, E>,
    {
        self.run_observed(candidates, (), work)
    }

    /// Like [`Benchmark::run`], but reports each measured size to `observer`.
    ///
    /// # Errors
    ///
    /// Returns an error if a candidate is missing, `work` fails, or the
    /// timings do not follow the expected complexity.
    pub fn run_observed<T, O, E, W, Obs>(
        &self,
        candidates: &Candidates<T>,
        observer: Obs,
        mut work: W,
    ) -> Result<Fit, Error>
    where
        E: StdError + Send + Sync + 'static,
        W: FnMut(&[T]) -> Result<O, E>,
        Obs: Observer<Event, Action>,
    {
        if let Some(&size) = self.sizes.iter().find(|&&s| candidates.get(s).is_none()) {
            return Err(Error::MissingCandidate { size });
        }

        let timings = measure(&self.sizes, &self.config, observer, |size| {
            match candidates.get(size) {
                Some(input) => work(input).map_err(|err| Error::Solution(Box::new(err))),
                None => Err(Error::MissingCandidate { size }),
            }
        })
        .map_err(flatten_solution_error)?;

        info!(
            benchmark = %self.name,
            complexity = %self.complexity,
            "{}",
            report(&timings)
        );

        let result = assert_performance(self.complexity, &timings, &self.config);
        match &result {
            Ok(fit) => info!(benchmark = %self.name, a = fit.a, b = fit.b, rr = fit.rr, "passed"),
            Err(err) => warn!(benchmark = %self.name, error = %err, "failed"),
        }
        result
    }
}

/// Unwraps the benchmark error that `measure` boxed as a work failure.
fn flatten_solution_error(err: Error) -> Error {
    match err {
        Error::Solution(source) => match source.downcast::<Error>() {
            Ok(inner) => *inner,
            Err(source) => Error::Solution(source),
        },
        other => other,
    }
}

/// Formats timings as a tab-separated row of seconds.
fn report(timings: &Timings) -> String {
    timings
        .seconds
        .iter()
        .map(|seconds| format!("{seconds:.8}"))
        .collect::<Vec<_>>()
        .join("\t")
}

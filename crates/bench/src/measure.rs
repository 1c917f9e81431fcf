use std::{error::Error as StdError, hint::black_box, time::Instant};

use tracing::debug;

use crate::{Config, Error, Observer};

/// Control actions supported while measuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Skip the remaining sizes and keep what was measured so far.
    StopEarly,
}

/// Emitted once per size after its samples are taken.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    pub size: usize,
    /// Median wall-clock time of one call, in seconds.
    pub seconds: f64,
}

/// Measured timings, one entry per size in measurement order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Timings {
    pub sizes: Vec<usize>,
    pub seconds: Vec<f64>,
}

impl Timings {
    /// Returns the sizes as floats, ready for fitting.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn xs(&self) -> Vec<f64> {
        self.sizes.iter().map(|&size| size as f64).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }
}

/// Times `work` for each size.
///
/// Every size is called `config.samples` times and the median is recorded.
/// The observer sees each recorded size and may stop measurement early.
///
/// # Errors
///
/// Returns an error if the config is invalid or `work` fails.
pub fn measure<T, E, W, Obs>(
    sizes: &[usize],
    config: &Config,
    mut observer: Obs,
    mut work: W,
) -> Result<Timings, Error>
where
    E: StdError + Send + Sync + 'static,
    W: FnMut(usize) -> Result<T, E>,
    Obs: Observer<Event, Action>,
{
    config
        .validate()
        .map_err(|reason| Error::InvalidConfig { reason })?;

    let mut timings = Timings::default();
    let mut samples = Vec::with_capacity(config.samples);

    for &size in sizes {
        samples.clear();
        for _ in 0..config.samples {
            let start = Instant::now();
            let output = work(size).map_err(|err| Error::Solution(Box::new(err)))?;
            samples.push(start.elapsed().as_secs_f64());
            black_box(output);
        }

        samples.sort_by(f64::total_cmp);
        let seconds = samples[samples.len() / 2];
        debug!(size, seconds, "measured");

        timings.sizes.push(size);
        timings.seconds.push(seconds);

        if let Some(Action::StopEarly) = observer.observe(&Event { size, seconds }) {
            debug!(size, "measurement stopped early");
            break;
        }
    }

    Ok(timings)
}

/// Configuration for measuring and validating a benchmark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Minimum goodness of fit a complexity assertion must reach.
    ///
    /// For constant complexity the fitted slope must stay within
    /// `1 - threshold` of zero instead.
    pub threshold: f64,
    /// Number of timed calls per size; the median is kept.
    pub samples: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            threshold: 0.99,
            samples: 1,
        }
    }
}

impl Config {
    /// Validates the threshold and sample count.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is outside `[0, 1]` or no samples
    /// are requested.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err("threshold must be within [0, 1]");
        }
        if self.samples == 0 {
            return Err("samples must be at least 1");
        }
        Ok(())
    }
}

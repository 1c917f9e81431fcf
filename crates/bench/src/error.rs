use std::error::Error as StdError;

use thiserror::Error;

use crate::Complexity;

/// Errors that can occur while measuring or validating a benchmark.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {reason}")]
    InvalidConfig { reason: &'static str },

    #[error("invalid range: {reason}")]
    InvalidRange { reason: &'static str },

    #[error("no candidate generated for size {size}")]
    MissingCandidate { size: usize },

    #[error("need at least two points to fit, got {count}")]
    TooFewPoints { count: usize },

    #[error("got {sizes} sizes but {timings} timings")]
    LengthMismatch { sizes: usize, timings: usize },

    #[error("non-finite point ({x}, {y})")]
    NonFinite { x: f64, y: f64 },

    #[error("cannot take the logarithm of non-positive value {value}")]
    NonPositive { value: f64 },

    #[error("expected {complexity} performance: r^2 = {rr} is below {threshold}")]
    PoorFit {
        complexity: Complexity,
        rr: f64,
        threshold: f64,
    },

    #[error("expected constant performance: slope {slope} exceeds {tolerance}")]
    NotConstant { slope: f64, tolerance: f64 },

    #[error("solution call failed")]
    Solution(#[source] Box<dyn StdError + Send + Sync>),
}

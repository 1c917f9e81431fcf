//! Test and micro-benchmark harness for coding-challenge solutions.
//!
//! - [`Candidates`] — default-valued inputs keyed by size
//! - [`bench_range`], [`bench_exp`], [`bench_linear`] — benchmark sizes
//! - [`Complexity`] — least-squares fits for constant, linear, logarithmic,
//!   exponential, and power growth
//! - [`Benchmark`] — times a solution across sizes and asserts its complexity
//! - [`Suite`] — named test cases and benchmarks, run on demand through
//!   [`gate::autorun`] when `RUN_TESTS` is set
//!
//! # Example
//!
//! ```rust
//! use codility_bench::{Candidates, Complexity, Config, Timings, assert_performance, bench_range};
//!
//! let candidates = Candidates::<i32>::generate(bench_range());
//! assert_eq!(candidates.get(100).map(<[i32]>::len), Some(100));
//!
//! let timings = Timings {
//!     sizes: bench_range(),
//!     seconds: vec![1e-6, 1e-5, 1e-4, 1e-3, 1e-2],
//! };
//! assert!(assert_performance(Complexity::Linear, &timings, &Config::default()).is_ok());
//! ```

mod benchmark;
mod candidates;
mod complexity;
mod config;
mod error;
mod measure;
mod observe;
mod range;
mod suite;

pub mod gate;

pub use benchmark::{Benchmark, assert_performance};
pub use candidates::Candidates;
pub use complexity::{Complexity, Fit};
pub use config::Config;
pub use error::Error;
pub use measure::{Action, Event, Timings, measure};
pub use observe::Observer;
pub use range::{bench_exp, bench_linear, bench_range};
pub use suite::{Failure, Report, Suite, check_eq};

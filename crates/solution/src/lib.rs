//! Solution to a single-function coding challenge.
//!
//! [`solution`] is the callable the judge invokes. The work happens in
//! [`Solution::run`](codility_core::Solution::run); extend [`Solution`] with a
//! field per challenge argument and implement the algorithm there.
//!
//! # Features
//!
//! - `bench` (default) — enables the [`suite`] module and the `run-suite`
//!   binary. Build with `--no-default-features` where the harness is not
//!   wanted; the solution itself is unaffected.

use std::convert::Infallible;

use codility_core::solve;

#[cfg(feature = "bench")]
pub mod suite;

/// Computes the answer for `array`.
#[must_use]
pub fn solution(array: &[i32]) -> i64 {
    solve::<Solution, _>(array).unwrap_or_else(|never| match never {})
}

/// The arguments of one call to [`solution`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution<'a> {
    pub array: &'a [i32],
}

impl<'a> From<&'a [i32]> for Solution<'a> {
    fn from(array: &'a [i32]) -> Self {
        Self { array }
    }
}

impl codility_core::Solution for Solution<'_> {
    type Output = i64;
    type Error = Infallible;

    fn run(self) -> Result<Self::Output, Self::Error> {
        // Return the solution here.
        Ok(0)
    }
}

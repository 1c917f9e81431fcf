//! Core traits for single-function coding-challenge solutions.
//!
//! A challenge solution is split in two:
//!
//! - [`Solution`] — a short-lived computation unit built from the challenge
//!   arguments that produces one result
//! - [`solve`] — the entry point that builds the unit and runs it
//!
//! The unit consumes itself when it runs, so it never outlives the call that
//! created it.

mod entry;
mod solution;

pub use entry::solve;
pub use solution::Solution;

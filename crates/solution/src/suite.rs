//! Test cases and benchmarks for the solution.
//!
//! Run them with `RUN_TESTS=1 cargo run --bin run-suite`.

use codility_bench::{Benchmark, Candidates, Complexity, Suite, bench_range, check_eq};
use codility_core::solve;

use crate::{Solution, solution};

/// Returns the test cases without benchmarks.
#[must_use]
pub fn cases() -> Suite {
    Suite::new("solution")
        .case("test_examples", || check_eq(0, solution(&[])))
        .case("test_edge_cases", || check_eq(0, solution(&[])))
}

/// The linear-time assertion over [`bench_range`].
#[must_use]
pub fn benchmark() -> Benchmark {
    Benchmark::new("bench_solution", Complexity::Linear)
}

/// Returns the test cases plus [`benchmark`] run through [`solve`].
#[must_use]
pub fn suite() -> Suite {
    let benchmark = benchmark();
    let candidates = Candidates::<i32>::generate(benchmark.sizes().iter().copied());

    cases().bench(benchmark.name().to_owned(), move || {
        benchmark.run(&candidates, |input| solve::<Solution, _>(input))
    })
}

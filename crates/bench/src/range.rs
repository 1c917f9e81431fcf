//! Input sizes for benchmarks.

use crate::Error;

/// The default benchmark sizes: `[1, 10, 100, 1_000, 10_000]`.
#[must_use]
pub fn bench_range() -> Vec<usize> {
    vec![1, 10, 100, 1_000, 10_000]
}

/// Returns the powers of `base` between `min` and `max`.
///
/// Both bounds are rounded down to a power of `base`, so
/// `bench_exp(1, 10_000, 10)` yields the default [`bench_range`] and
/// `bench_exp(50, 5_000, 10)` yields `[10, 100, 1_000]`.
///
/// # Errors
///
/// Returns an error if `base < 2`, `min == 0`, or `min > max`.
pub fn bench_exp(min: usize, max: usize, base: usize) -> Result<Vec<usize>, Error> {
    if base < 2 {
        return Err(Error::InvalidRange {
            reason: "base must be at least 2",
        });
    }
    if min == 0 {
        return Err(Error::InvalidRange {
            reason: "min must be positive",
        });
    }
    if min > max {
        return Err(Error::InvalidRange {
            reason: "min must not exceed max",
        });
    }

    let sizes = (min.ilog(base)..=max.ilog(base))
        .map_while(|exp| base.checked_pow(exp))
        .collect();

    Ok(sizes)
}

/// Returns `min..=max` stepping by `step`.
///
/// # Errors
///
/// Returns an error if `step == 0` or `min > max`.
pub fn bench_linear(min: usize, max: usize, step: usize) -> Result<Vec<usize>, Error> {
    if step == 0 {
        return Err(Error::InvalidRange {
            reason: "step must be positive",
        });
    }
    if min > max {
        return Err(Error::InvalidRange {
            reason: "min must not exceed max",
        });
    }

    Ok((min..=max).step_by(step).collect())
}

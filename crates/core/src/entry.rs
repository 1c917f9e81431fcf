use crate::Solution;

/// Builds a solution from its arguments and runs it.
///
/// `args` is whatever the solution converts from: a single value such as a
/// slice, or a tuple when the challenge takes several arguments.
/// The result is returned unmodified.
///
/// # Errors
///
/// Returns the solution's error if it fails.
pub fn solve<S, A>(args: A) -> Result<S::Output, S::Error>
where
    S: Solution + From<A>,
{
    S::from(args).run()
}

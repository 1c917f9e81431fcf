/// A computation unit that produces the answer to a challenge.
///
/// Implementors hold the challenge arguments (usually by reference) and
/// compute the result in [`Solution::run`]. Construction goes through
/// [`From`], which lets [`solve`](crate::solve) accept either a single
/// argument or a tuple of them.
pub trait Solution {
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the result, consuming the unit.
    ///
    /// # Errors
    ///
    /// Returns an error if the computation fails.
    fn run(self) -> Result<Self::Output, Self::Error>;
}

use std::collections::BTreeMap;

/// Benchmark inputs keyed by size.
///
/// Each candidate holds exactly `size` default-valued elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates<T> {
    inputs: BTreeMap<usize, Vec<T>>,
}

impl<T: Default + Clone> Candidates<T> {
    /// Generates one candidate per size.
    ///
    /// Repeated sizes share a single candidate.
    pub fn generate(sizes: impl IntoIterator<Item = usize>) -> Self {
        let inputs = sizes
            .into_iter()
            .map(|size| (size, vec![T::default(); size]))
            .collect();

        Self { inputs }
    }
}

impl<T> Candidates<T> {
    /// Returns the candidate of the given size, if one was generated.
    #[must_use]
    pub fn get(&self, size: usize) -> Option<&[T]> {
        self.inputs.get(&size).map(Vec::as_slice)
    }

    /// Returns the generated sizes in ascending order.
    pub fn sizes(&self) -> impl Iterator<Item = usize> + '_ {
        self.inputs.keys().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

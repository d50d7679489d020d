use rand::Rng;

/// Source of uniformly distributed indexes for catalog draws.
///
/// Abstracted behind a trait so tests can substitute a deterministic
/// source for the thread-local generator.
pub trait RandomSource {
    /// Return an index uniformly distributed over `[0, len)`.
    ///
    /// `len` must be non-zero.
    fn pick_index(&mut self, len: usize) -> usize;
}

/// Default source backed by the thread-local generator
#[derive(Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick_index(&mut self, len: usize) -> usize {
        rand::rng().random_range(0..len)
    }
}

/// Pinned source for deterministic tests: always returns the same index
#[cfg(test)]
pub struct FixedIndex(pub usize);

#[cfg(test)]
impl RandomSource for FixedIndex {
    fn pick_index(&mut self, _len: usize) -> usize {
        self.0
    }
}

/// Statistics produced by a fit run.
///
/// This type keeps fields private to allow evolving the internal counters
/// without breaking the public API.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FitStats {
    epochs: usize,
    samples: usize,
}

impl FitStats {
    /// Creates a new `FitStats`.
    ///
    /// # Args
    /// * `epochs` - Number of passes made over the dataset.
    /// * `samples` - Total number of training steps taken across all passes.
    pub fn new(epochs: usize, samples: usize) -> Self {
        Self { epochs, samples }
    }

    /// Returns the number of passes made over the dataset.
    pub fn epochs(&self) -> usize {
        self.epochs
    }

    /// Returns the number of training steps taken.
    pub fn samples(&self) -> usize {
        self.samples
    }
}

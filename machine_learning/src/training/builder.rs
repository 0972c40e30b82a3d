use std::num::NonZeroUsize;

use ml_core::MlError;
use rand::{SeedableRng, rngs::StdRng};

use super::Trainer;
use crate::Result;

/// Builds `Trainer`s out of plain training settings.
#[derive(Debug, Clone)]
pub struct TrainerBuilder {
    learning_rate: f32,
    epochs: NonZeroUsize,
    shuffle: bool,
    seed: Option<u64>,
}

impl Default for TrainerBuilder {
    fn default() -> Self {
        Self {
            learning_rate: 0.1,
            epochs: NonZeroUsize::MIN,
            shuffle: false,
            seed: None,
        }
    }
}

impl TrainerBuilder {
    /// Creates a new `TrainerBuilder` with a `0.1` learning rate, a single
    /// epoch and no shuffling.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    pub fn epochs(mut self, epochs: NonZeroUsize) -> Self {
        self.epochs = epochs;
        self
    }

    pub fn shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    /// Fixes the seed used for shuffling, making fits reproducible.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Builds a new `Trainer` following the settings.
    ///
    /// # Errors
    /// Returns `MlError::InvalidInput` if the learning rate is not a finite,
    /// positive number.
    pub fn build(&self) -> Result<Trainer<StdRng>> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(MlError::InvalidInput(
                "learning rate must be a finite positive number",
            ));
        }

        let rng = self.generate_rng();
        Ok(Trainer::new(self.learning_rate, self.epochs, self.shuffle, rng))
    }

    fn generate_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

use ml_core::{Dataset, FitStats, Model};
use ndarray::{Array1, ArrayView1};
use rand::Rng;

use crate::{
    Result,
    arch::WeightModel,
    classifier::Classifier,
    dataset::LabeledSample,
    features::extract_features,
    labels::LabelRegistry,
    training::{Trainer, train_one},
};

/// A language identification network: one weight row per language, addressed
/// through the registry of language names.
///
/// The lifecycle is construct, register every label, train, classify. Labels
/// may also be registered interleaved with training as long as each one is
/// registered before its first use.
#[derive(Debug, Clone)]
pub struct LanguageNet {
    model: WeightModel,
    labels: LabelRegistry,
}

impl LanguageNet {
    /// Creates a new `LanguageNet` with zeroed weights and no labels.
    ///
    /// # Arguments
    /// * `input_size` - The dimensionality of the feature vectors.
    /// * `num_classes` - The amount of languages the network can tell apart.
    pub fn new(input_size: usize, num_classes: usize) -> Self {
        Self {
            model: WeightModel::new(input_size, num_classes),
            labels: LabelRegistry::new(num_classes),
        }
    }

    /// Registers a language, see `LabelRegistry::register`.
    pub fn register(&mut self, label: &str) -> Result<usize> {
        self.labels.register(label)
    }

    /// Takes a single training step, see `training::train_one`.
    pub fn train_one(
        &mut self,
        input: ArrayView1<f32>,
        label: &str,
        learning_rate: f32,
    ) -> Result<()> {
        train_one(&mut self.model, &self.labels, input, label, learning_rate)
    }

    /// Trains on a whole dataset, see `Trainer::fit`.
    pub fn fit<R, D>(&mut self, trainer: &mut Trainer<R>, dataset: &D) -> Result<FitStats>
    where
        R: Rng,
        D: Dataset<Sample = LabeledSample>,
    {
        trainer.fit(&mut self.model, &self.labels, dataset)
    }

    /// Returns the score of every class for `input`.
    pub fn scores(&self, input: ArrayView1<f32>) -> Result<Array1<f32>> {
        self.model.scores(input)
    }

    /// Returns the language whose row scores highest on `input`.
    pub fn classify(&self, input: ArrayView1<f32>) -> Result<&str> {
        self.classifier().classify(input)
    }

    /// Extracts the features of `text` and classifies them.
    pub fn classify_text(&self, text: &str) -> Result<&str> {
        self.classify(extract_features(text).view())
    }

    pub fn classifier(&self) -> Classifier<'_, WeightModel> {
        Classifier::new(&self.model, &self.labels)
    }

    pub fn model(&self) -> &WeightModel {
        &self.model
    }

    pub fn labels(&self) -> &LabelRegistry {
        &self.labels
    }
}

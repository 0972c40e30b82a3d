use std::num::NonZeroUsize;

use log::{debug, trace};
use ml_core::{Dataset, FitStats, MlError, Model};
use ndarray::{Array1, ArrayView1};
use rand::{Rng, seq::SliceRandom};

use crate::{Result, dataset::LabeledSample, labels::LabelRegistry};

/// Takes a single perceptron step on a labeled feature vector.
///
/// Every class row moves by `learning_rate * (t - score) * input`, where `t`
/// is `1` for the class of `label` and `0` for the rest, and the scores are
/// the ones of the weights *before* the step. Afterwards the target row (and
/// only that row) is scaled to unit length.
///
/// All rows are computed first and written back only once every check has
/// passed, so on error the model is left untouched.
///
/// # Arguments
/// * `model` - The model whose rows are updated.
/// * `labels` - The registry resolving `label` to a row.
/// * `input` - The feature vector, of the model's input size.
/// * `label` - The class the input belongs to.
/// * `learning_rate` - The step length.
///
/// # Errors
/// * `MlError::UnknownLabel` if `label` isn't registered.
/// * `MlError::IndexOutOfRange` if the label's index has no row in the model.
/// * `MlError::DimensionMismatch` if `input` has the wrong length.
/// * `MlError::DegenerateNormalization` if the updated target row has no
///   finite, positive magnitude.
/// * `MlError::NonFiniteWeights` if another updated row overflows. Non-target
///   rows aren't rescaled, so they stay bounded only while
///   `learning_rate * |input|^2 < 2`.
pub fn train_one<M: Model>(
    model: &mut M,
    labels: &LabelRegistry,
    input: ArrayView1<f32>,
    label: &str,
    learning_rate: f32,
) -> Result<()> {
    let target = labels.index_of(label)?;
    let num_classes = model.num_classes();
    if target >= num_classes {
        return Err(MlError::IndexOutOfRange {
            what: "class",
            index: target,
            len: num_classes,
        });
    }

    let scores = model.scores(input)?;
    trace!("training step on class {target}, scores {scores}");

    let mut rows = Vec::with_capacity(num_classes);
    for (class, &score) in scores.iter().enumerate() {
        let t = if class == target { 1.0 } else { 0.0 };

        let mut row = model.row(class)?.to_owned();
        row.scaled_add(learning_rate * (t - score), &input);

        if class == target {
            normalize(&mut row).ok_or(MlError::DegenerateNormalization { class })?;
        } else if !row.iter().all(|w| w.is_finite()) {
            return Err(MlError::NonFiniteWeights { class });
        }

        rows.push(row);
    }

    for (class, row) in rows.iter().enumerate() {
        model.update_row(class, row.view())?;
    }

    Ok(())
}

/// Scales `v` to unit euclidean length in place.
///
/// Returns `None`, leaving `v` as is, if its magnitude is zero or not finite.
fn normalize(v: &mut Array1<f32>) -> Option<()> {
    let magnitude = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if !magnitude.is_finite() || magnitude == 0.0 {
        return None;
    }

    *v /= magnitude;
    Some(())
}

/// Drives `train_one` over whole datasets.
///
/// Samples are visited in dataset order, or in a fresh random permutation on
/// every epoch when shuffling is enabled.
pub struct Trainer<R: Rng> {
    learning_rate: f32,
    epochs: NonZeroUsize,
    shuffle: bool,
    rng: R,
}

impl<R: Rng> Trainer<R> {
    /// Returns a new `Trainer`.
    ///
    /// # Arguments
    /// * `learning_rate` - The step length of every `train_one` call.
    /// * `epochs` - The amount of passes over the dataset per `fit` call.
    /// * `shuffle` - Whether to permute the samples on every epoch.
    /// * `rng` - The random number generator used for shuffling.
    pub fn new(learning_rate: f32, epochs: NonZeroUsize, shuffle: bool, rng: R) -> Self {
        Self {
            learning_rate,
            epochs,
            shuffle,
            rng,
        }
    }

    pub fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    pub fn epochs(&self) -> usize {
        self.epochs.get()
    }

    /// Trains `model` on every sample of `dataset`, `epochs` times.
    ///
    /// # Returns
    /// The amount of epochs run and training steps taken.
    ///
    /// # Errors
    /// Stops at the first failing step and returns its error. Datasets of
    /// unknown length are rejected with `MlError::InvalidInput`.
    pub fn fit<M, D>(
        &mut self,
        model: &mut M,
        labels: &LabelRegistry,
        dataset: &D,
    ) -> Result<FitStats>
    where
        M: Model,
        D: Dataset<Sample = LabeledSample>,
    {
        let len = dataset
            .len()
            .ok_or(MlError::InvalidInput("cannot fit on a dataset of unknown length"))?;

        let mut order: Vec<usize> = (0..len).collect();
        let mut steps = 0;

        for epoch in 0..self.epochs.get() {
            if self.shuffle {
                order.shuffle(&mut self.rng);
            }

            for &index in &order {
                let sample = dataset.get(index)?;
                train_one(
                    model,
                    labels,
                    sample.features.view(),
                    &sample.label,
                    self.learning_rate,
                )?;
                steps += 1;
            }

            debug!("epoch {epoch} finished after {steps} steps");
        }

        Ok(FitStats::new(self.epochs.get(), steps))
    }
}

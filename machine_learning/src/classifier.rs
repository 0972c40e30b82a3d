use ml_core::{Dataset, MlError, Model};
use ndarray::ArrayView1;

use crate::{Result, dataset::LabeledSample, labels::LabelRegistry};

/// Returns the index of the highest score, the lowest index winning ties.
pub fn argmax(scores: ArrayView1<f32>) -> Option<usize> {
    let first = *scores.first()?;
    let (best, _) = scores
        .iter()
        .enumerate()
        .skip(1)
        .fold((0, first), |(best, top), (i, &score)| {
            if score > top { (i, score) } else { (best, top) }
        });

    Some(best)
}

/// Picks the best scoring class of a model and names it through a registry.
pub struct Classifier<'a, M: Model> {
    model: &'a M,
    labels: &'a LabelRegistry,
}

impl<'a, M: Model> Classifier<'a, M> {
    pub fn new(model: &'a M, labels: &'a LabelRegistry) -> Self {
        Self { model, labels }
    }

    /// Returns the index of the class scoring highest on `input`.
    ///
    /// # Errors
    /// Returns `MlError::DimensionMismatch` if `input` has the wrong length and
    /// `MlError::IndexOutOfRange` if the model has no classes.
    pub fn predict(&self, input: ArrayView1<f32>) -> Result<usize> {
        let scores = self.model.scores(input)?;
        argmax(scores.view()).ok_or(MlError::IndexOutOfRange {
            what: "class",
            index: 0,
            len: 0,
        })
    }

    /// Returns the label of the class scoring highest on `input`.
    ///
    /// # Errors
    /// Same as `predict`, plus `MlError::IndexOutOfRange` if the winning row
    /// has no registered label.
    pub fn classify(&self, input: ArrayView1<f32>) -> Result<&'a str> {
        let index = self.predict(input)?;
        self.labels.label_at(index)
    }

    /// Returns the fraction of samples of `dataset` classified as their own label.
    ///
    /// # Errors
    /// Returns `MlError::InvalidInput` on empty datasets or datasets of unknown
    /// length, and forwards classification failures.
    pub fn accuracy<D>(&self, dataset: &D) -> Result<f32>
    where
        D: Dataset<Sample = LabeledSample>,
    {
        let len = match dataset.len() {
            Some(0) => return Err(MlError::InvalidInput("cannot measure accuracy on no samples")),
            Some(len) => len,
            None => {
                return Err(MlError::InvalidInput(
                    "cannot measure accuracy on a dataset of unknown length",
                ));
            }
        };

        let mut hits = 0usize;
        for index in 0..len {
            let sample = dataset.get(index)?;
            if self.classify(sample.features.view())? == sample.label {
                hits += 1;
            }
        }

        Ok(hits as f32 / len as f32)
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;
    use crate::{arch::WeightModel, dataset::Corpus};

    fn registry(labels: &[&str]) -> LabelRegistry {
        let mut registry = LabelRegistry::new(labels.len());
        for label in labels {
            registry.register(label).unwrap();
        }
        registry
    }

    #[test]
    fn argmax_prefers_lowest_index_on_ties() {
        assert_eq!(argmax(array![0.0_f32, 0.0, 0.0].view()), Some(0));
        assert_eq!(argmax(array![0.1_f32, 0.7, 0.7].view()), Some(1));
        assert_eq!(argmax(array![-1.0_f32, -0.5, -2.0].view()), Some(1));
        assert_eq!(argmax(ndarray::Array1::<f32>::zeros(0).view()), None);
    }

    #[test]
    fn untrained_model_picks_first_registered_label() {
        let labels = registry(&["en", "fr", "de"]);
        let model = WeightModel::new(2, 3);
        let classifier = Classifier::new(&model, &labels);

        assert_eq!(classifier.classify(array![0.4, 0.6].view()).unwrap(), "en");
    }

    #[test]
    fn identical_scores_resolve_to_lower_index() {
        let labels = registry(&["en", "fr", "de"]);
        let mut model = WeightModel::new(2, 3);
        model.update_row(1, array![0.0, 1.0].view()).unwrap();
        model.update_row(2, array![0.0, 1.0].view()).unwrap();
        let classifier = Classifier::new(&model, &labels);

        assert_eq!(classifier.predict(array![0.5, 0.5].view()).unwrap(), 1);
        assert_eq!(classifier.classify(array![0.5, 0.5].view()).unwrap(), "fr");
    }

    #[test]
    fn classify_rejects_wrong_dimension() {
        let labels = registry(&["en"]);
        let model = WeightModel::new(26, 1);
        let classifier = Classifier::new(&model, &labels);

        let err = classifier.classify(array![1.0].view()).unwrap_err();
        assert!(matches!(
            err,
            MlError::DimensionMismatch {
                got: 1,
                expected: 26,
                ..
            }
        ));
    }

    #[test]
    fn winning_row_without_label_is_out_of_range() {
        let labels = registry(&["en"]);
        let mut model = WeightModel::new(1, 2);
        model.update_row(1, array![1.0].view()).unwrap();
        let classifier = Classifier::new(&model, &labels);

        let err = classifier.classify(array![1.0].view()).unwrap_err();
        assert!(matches!(err, MlError::IndexOutOfRange { index: 1, .. }));
    }

    #[test]
    fn accuracy_counts_hits() {
        let labels = registry(&["en", "fr"]);
        let mut model = WeightModel::new(26, 2);
        let mut a = ndarray::Array1::<f32>::zeros(26);
        a[0] = 1.0;
        model.update_row(0, a.view()).unwrap();
        let classifier = Classifier::new(&model, &labels);

        // "aaa" scores 1 for "en", "zzz" scores 0 everywhere and falls back to "en".
        let corpus = Corpus::from_texts([("en", "aaa"), ("fr", "zzz")]);
        assert_eq!(classifier.accuracy(&corpus).unwrap(), 0.5);

        assert!(matches!(
            classifier.accuracy(&Corpus::new()),
            Err(MlError::InvalidInput(_))
        ));
    }
}

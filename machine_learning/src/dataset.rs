use ml_core::{DataError, Dataset};
use ndarray::Array1;

use crate::features::extract_features;

/// A single supervised sample: a feature vector and the label it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledSample {
    pub features: Array1<f32>,
    pub label: String,
}

/// An in-memory collection of labeled samples.
///
/// Samples keep their insertion order, so a corpus built one label at a time
/// stays grouped by label.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    samples: Vec<LabeledSample>,
}

impl Corpus {
    /// Creates an empty `Corpus`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a corpus out of raw `(label, text)` documents by extracting the
    /// features of every text.
    pub fn from_texts<I, L, T>(documents: I) -> Self
    where
        I: IntoIterator<Item = (L, T)>,
        L: Into<String>,
        T: AsRef<str>,
    {
        let samples = documents
            .into_iter()
            .map(|(label, text)| LabeledSample {
                features: extract_features(text.as_ref()),
                label: label.into(),
            })
            .collect();

        Self { samples }
    }

    /// Appends a sample.
    pub fn push(&mut self, features: Array1<f32>, label: impl Into<String>) {
        self.samples.push(LabeledSample {
            features,
            label: label.into(),
        });
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabeledSample> {
        self.samples.iter()
    }

    /// Returns the distinct labels of the corpus in first-seen order.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        for sample in self.iter() {
            if !labels.contains(&sample.label.as_str()) {
                labels.push(&sample.label);
            }
        }

        labels
    }
}

impl Dataset for Corpus {
    type Sample = LabeledSample;

    fn len(&self) -> Option<usize> {
        Some(self.samples.len())
    }

    fn get(&self, index: usize) -> Result<LabeledSample, DataError> {
        self.samples
            .get(index)
            .cloned()
            .ok_or(DataError::OutOfBounds { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_texts_extracts_features() {
        let corpus = Corpus::from_texts([("en", "aaa"), ("fr", "bb")]);

        assert_eq!(corpus.len(), 2);
        let first = Dataset::get(&corpus, 0).unwrap();
        assert_eq!(first.label, "en");
        assert_eq!(first.features[0], 1.0);
        assert_eq!(first.features.len(), 26);
    }

    #[test]
    fn labels_keep_first_seen_order() {
        let corpus = Corpus::from_texts([
            ("fr", "bonjour"),
            ("en", "hello"),
            ("fr", "salut"),
            ("de", "hallo"),
        ]);

        assert_eq!(corpus.labels(), ["fr", "en", "de"]);
    }

    #[test]
    fn get_out_of_bounds_fails() {
        let corpus = Corpus::from_texts([("en", "hello")]);

        assert_eq!(Dataset::len(&corpus), Some(1));
        assert!(matches!(
            Dataset::get(&corpus, 1),
            Err(DataError::OutOfBounds { index: 1 })
        ));
    }

    #[test]
    fn empty_corpus() {
        let corpus = Corpus::new();

        assert!(corpus.is_empty());
        assert!(Dataset::is_empty(&corpus));
        assert!(corpus.labels().is_empty());
    }
}

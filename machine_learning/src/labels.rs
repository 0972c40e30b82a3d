use std::collections::HashMap;

use log::debug;

use crate::{MlError, Result};

/// Bidirectional mapping between class labels and dense row indices.
///
/// Indices are handed out in first-seen order starting at `0` and are never
/// renumbered. The registry never grows past `capacity`, which must match the
/// amount of rows of the model it indexes into.
#[derive(Debug, Clone)]
pub struct LabelRegistry {
    capacity: usize,
    labels: Vec<String>,
    indices: HashMap<String, usize>,
}

impl LabelRegistry {
    /// Creates an empty `LabelRegistry`.
    ///
    /// # Arguments
    /// * `capacity` - The maximum amount of labels, i.e. the model's class count.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            labels: Vec::with_capacity(capacity),
            indices: HashMap::with_capacity(capacity),
        }
    }

    /// Registers `label`, assigning it the next unused index if it wasn't seen before.
    ///
    /// # Returns
    /// The index of `label`, new or previously assigned.
    ///
    /// # Errors
    /// Returns `MlError::RegistryFull` if a new label doesn't fit anymore.
    pub fn register(&mut self, label: &str) -> Result<usize> {
        if let Some(&index) = self.indices.get(label) {
            return Ok(index);
        }

        if self.labels.len() == self.capacity {
            return Err(MlError::RegistryFull {
                capacity: self.capacity,
            });
        }

        let index = self.labels.len();
        self.labels.push(label.to_string());
        self.indices.insert(label.to_string(), index);
        debug!("registered label {label:?} at index {index}");

        Ok(index)
    }

    /// Returns the index previously assigned to `label`.
    ///
    /// # Errors
    /// Returns `MlError::UnknownLabel` if `label` was never registered.
    pub fn index_of(&self, label: &str) -> Result<usize> {
        self.indices
            .get(label)
            .copied()
            .ok_or_else(|| MlError::UnknownLabel {
                label: label.to_string(),
            })
    }

    /// Returns the label at `index`.
    ///
    /// # Errors
    /// Returns `MlError::IndexOutOfRange` if `index` is not assigned.
    pub fn label_at(&self, index: usize) -> Result<&str> {
        self.labels
            .get(index)
            .map(String::as_str)
            .ok_or(MlError::IndexOutOfRange {
                what: "label",
                index,
                len: self.labels.len(),
            })
    }

    /// Returns the amount of registered labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Iterates over the labels in index order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

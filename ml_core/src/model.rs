use ndarray::{Array1, ArrayView1};

use crate::MlError;

/// A linear multi-class scoring model.
///
/// A `Model` holds one weight row per class and scores an input as the dot
/// product of every row with it. It does not:
/// - know about labels,
/// - decide how rows are updated,
/// - pick a winning class.
pub trait Model {
    /// Returns the dimensionality of the inputs (and of every row).
    fn input_size(&self) -> usize;

    /// Returns the number of class rows.
    fn num_classes(&self) -> usize;

    /// Computes one score per class for `input`. Never mutates the model.
    ///
    /// # Errors
    /// Returns `MlError::DimensionMismatch` if `input.len() != input_size()`.
    fn scores(&self, input: ArrayView1<f32>) -> Result<Array1<f32>, MlError>;

    /// Returns a read-only view of the weight row of `class`.
    ///
    /// # Errors
    /// Returns `MlError::IndexOutOfRange` if `class` is not a valid row.
    fn row(&self, class: usize) -> Result<ArrayView1<'_, f32>, MlError>;

    /// Replaces the weight row of `class` in place.
    ///
    /// # Errors
    /// Returns `MlError::IndexOutOfRange` if `class` is not a valid row and
    /// `MlError::DimensionMismatch` if `weights` has the wrong length.
    fn update_row(&mut self, class: usize, weights: ArrayView1<f32>) -> Result<(), MlError>;
}

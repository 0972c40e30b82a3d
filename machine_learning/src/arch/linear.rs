use ml_core::{MlError, Model};
use ndarray::{Array1, Array2, ArrayView1};

/// A linear model with one weight row per class, stored as a dense
/// `num_classes x input_size` matrix.
///
/// Every row starts at zero. The model only computes scores and swaps rows,
/// deciding *how* rows change is up to the trainer.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightModel {
    weights: Array2<f32>,
}

impl WeightModel {
    /// Creates a new zero-initialized `WeightModel`.
    ///
    /// # Arguments
    /// * `input_size` - The dimensionality of the feature vectors.
    /// * `num_classes` - The amount of rows, fixed for the model's lifetime.
    pub fn new(input_size: usize, num_classes: usize) -> Self {
        Self {
            weights: Array2::zeros((num_classes, input_size)),
        }
    }

    /// Returns the whole weight matrix, one row per class.
    pub fn weights(&self) -> &Array2<f32> {
        &self.weights
    }

    fn check_class(&self, class: usize) -> Result<(), MlError> {
        let len = self.num_classes();
        if class >= len {
            return Err(MlError::IndexOutOfRange {
                what: "class",
                index: class,
                len,
            });
        }

        Ok(())
    }

    fn check_dim(&self, what: &'static str, got: usize) -> Result<(), MlError> {
        let expected = self.input_size();
        if got != expected {
            return Err(MlError::DimensionMismatch {
                what,
                got,
                expected,
            });
        }

        Ok(())
    }
}

impl Model for WeightModel {
    fn input_size(&self) -> usize {
        self.weights.ncols()
    }

    fn num_classes(&self) -> usize {
        self.weights.nrows()
    }

    fn scores(&self, input: ArrayView1<f32>) -> Result<Array1<f32>, MlError> {
        self.check_dim("features", input.len())?;
        Ok(self.weights.dot(&input))
    }

    fn row(&self, class: usize) -> Result<ArrayView1<'_, f32>, MlError> {
        self.check_class(class)?;
        Ok(self.weights.row(class))
    }

    fn update_row(&mut self, class: usize, weights: ArrayView1<f32>) -> Result<(), MlError> {
        self.check_class(class)?;
        self.check_dim("row", weights.len())?;
        self.weights.row_mut(class).assign(&weights);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn starts_at_zero() {
        let model = WeightModel::new(26, 3);

        assert_eq!(model.input_size(), 26);
        assert_eq!(model.num_classes(), 3);
        assert!(model.weights().iter().all(|&w| w == 0.0));
    }

    #[test]
    fn scores_are_row_dot_products() {
        let mut model = WeightModel::new(3, 2);
        model.update_row(0, array![1.0, 2.0, 3.0].view()).unwrap();
        model.update_row(1, array![0.0, -1.0, 0.5].view()).unwrap();

        let scores = model.scores(array![1.0, 1.0, 2.0].view()).unwrap();

        assert_eq!(scores, array![9.0_f32, 0.0]);
    }

    #[test]
    fn scores_reject_wrong_dimension() {
        let model = WeightModel::new(3, 2);

        let err = model.scores(array![1.0, 2.0].view()).unwrap_err();
        assert!(matches!(
            err,
            MlError::DimensionMismatch {
                got: 2,
                expected: 3,
                ..
            }
        ));
    }

    #[test]
    fn update_row_replaces_only_that_row() {
        let mut model = WeightModel::new(2, 2);
        model.update_row(1, array![0.5, 0.25].view()).unwrap();

        assert_eq!(model.row(0).unwrap(), array![0.0_f32, 0.0]);
        assert_eq!(model.row(1).unwrap(), array![0.5_f32, 0.25]);
    }

    #[test]
    fn update_row_rejects_invalid_class() {
        let mut model = WeightModel::new(2, 2);

        let err = model.update_row(2, array![1.0, 1.0].view()).unwrap_err();
        assert!(matches!(
            err,
            MlError::IndexOutOfRange {
                index: 2,
                len: 2,
                ..
            }
        ));
        assert!(model.row(2).is_err());
    }

    #[test]
    fn update_row_rejects_wrong_length() {
        let mut model = WeightModel::new(2, 2);

        let err = model.update_row(0, array![1.0].view()).unwrap_err();
        assert!(matches!(err, MlError::DimensionMismatch { what: "row", .. }));
        assert_eq!(model.row(0).unwrap(), array![0.0_f32, 0.0]);
    }
}

use std::fmt;

use crate::DataError;

/// Errors produced by the learning and inference engine.
#[derive(Debug)]
pub enum MlError {
    /// A label was used before being registered.
    UnknownLabel { label: String },

    /// A class index (or any other dense index) fell outside its valid range.
    IndexOutOfRange {
        /// Human-readable context for the index (e.g. "class", "label").
        what: &'static str,
        /// Offending index.
        index: usize,
        /// Number of valid entries.
        len: usize,
    },

    /// A vector length did not match the model's dimensionality.
    DimensionMismatch {
        /// Human-readable context for the mismatch (e.g. "features", "row").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },

    /// The updated target row has zero (or non-finite) magnitude and can't be
    /// scaled to unit length.
    DegenerateNormalization { class: usize },

    /// An update would leave a weight row with infinite or NaN components.
    NonFiniteWeights { class: usize },

    /// Registering one more label would exceed the model's class count.
    RegistryFull { capacity: usize },

    /// An input is invalid for semantic or domain reasons.
    InvalidInput(&'static str),

    /// A dataset could not provide a sample.
    Data(DataError),
}

impl fmt::Display for MlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MlError::UnknownLabel { label } => write!(f, "unknown label: {label:?}"),
            MlError::IndexOutOfRange { what, index, len } => {
                write!(f, "{what} index {index} is out of range for length {len}")
            }
            MlError::DimensionMismatch {
                what,
                got,
                expected,
            } => write!(
                f,
                "dimension mismatch for {what}: got {got}, expected {expected}"
            ),
            MlError::DegenerateNormalization { class } => write!(
                f,
                "weight row of class {class} has zero magnitude and cannot be normalized"
            ),
            MlError::NonFiniteWeights { class } => {
                write!(f, "weight row of class {class} would hold non-finite values")
            }
            MlError::RegistryFull { capacity } => {
                write!(f, "label registry is full, the model holds {capacity} classes")
            }
            MlError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            MlError::Data(e) => write!(f, "dataset error: {e}"),
        }
    }
}

impl std::error::Error for MlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MlError::Data(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DataError> for MlError {
    fn from(value: DataError) -> Self {
        Self::Data(value)
    }
}

mod data;
mod error;
mod model;
mod stats;

pub use data::{DataError, Dataset};
pub use error::MlError;
pub use model::Model;
pub use stats::FitStats;

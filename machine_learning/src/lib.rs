pub mod arch;
pub mod classifier;
pub mod dataset;
pub mod features;
pub mod labels;
pub mod net;
pub mod training;

pub use ml_core::MlError;

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlError>;

pub use classifier::Classifier;
pub use dataset::{Corpus, LabeledSample};
pub use features::{ALPHABET_SIZE, extract_features};
pub use labels::LabelRegistry;
pub use net::LanguageNet;
pub use training::{Trainer, TrainerBuilder};

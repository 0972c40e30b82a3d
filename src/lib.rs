pub mod config;
pub mod corpus;
pub mod error;
pub mod prompt;

use log::info;
use machine_learning::{ALPHABET_SIZE, Corpus, LanguageNet};

pub use config::AppConfig;
pub use error::{AppErr, Result};

/// Builds a network for the languages of `corpus` and trains it on it.
///
/// Languages are registered in the order the corpus first mentions them. The
/// network holds `config.num_classes` rows, or one per language when unset.
///
/// # Errors
/// Returns `AppErr::Ml` if the languages don't fit in the configured class
/// count or a training step fails.
pub fn train(config: &AppConfig, corpus: &Corpus) -> Result<LanguageNet> {
    let labels = corpus.labels();
    let num_classes = config.num_classes.map_or(labels.len(), |n| n.get());

    let mut net = LanguageNet::new(ALPHABET_SIZE, num_classes);
    for label in &labels {
        net.register(label)?;
    }

    let registry = net.labels();
    if registry.len() < registry.capacity() {
        info!(
            "{} class row(s) have no language and stay untrained",
            registry.capacity() - registry.len()
        );
    }

    let mut trainer = config.trainer_builder().build()?;
    info!(
        "training {num_classes} class(es) on {} document(s), learning rate {}, {} epoch(s)",
        corpus.len(),
        trainer.learning_rate(),
        trainer.epochs()
    );

    let stats = net.fit(&mut trainer, corpus)?;
    let accuracy = net.classifier().accuracy(corpus)?;
    info!(
        "trained for {} epoch(s), {} step(s), training accuracy {:.1}%",
        stats.epochs(),
        stats.samples(),
        accuracy * 100.0
    );

    Ok(net)
}

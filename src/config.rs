use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use machine_learning::TrainerBuilder;
use serde::Deserialize;

use crate::error::{AppErr, Result};

/// Environment variable naming a JSON settings file.
pub const CONFIG_ENV: &str = "LANGID_CONFIG";

/// Settings of a training + classification session.
///
/// Every field has a default, so a settings file only needs to list the ones
/// it changes.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Root of the corpus, one subdirectory per language.
    pub corpus_dir: PathBuf,
    /// Amount of languages the network holds, defaults to the ones found in the corpus.
    pub num_classes: Option<NonZeroUsize>,
    pub learning_rate: f32,
    pub epochs: NonZeroUsize,
    /// Visit the corpus in a random order on every epoch.
    pub shuffle: bool,
    pub seed: Option<u64>,
    /// Line that ends the interactive prompt.
    pub quit_token: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from("languages"),
            num_classes: None,
            learning_rate: 0.1,
            epochs: NonZeroUsize::MIN,
            shuffle: false,
            seed: None,
            quit_token: "q".to_string(),
        }
    }
}

impl AppConfig {
    /// Parses settings out of a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads settings from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| AppErr::io(path, e))?;
        Self::from_json(&content)
    }

    /// Resolves the settings of a run.
    ///
    /// Defaults are overridden by the settings file (`--config <path>`, or
    /// `env_config` when the flag is absent), which is in turn overridden by
    /// the positional corpus directory.
    ///
    /// # Arguments
    /// * `args` - The command line arguments, without the program name.
    /// * `env_config` - The settings file named by the environment, if any.
    ///
    /// # Errors
    /// Returns `AppErr::Config` on unknown flags, extra arguments or invalid
    /// values, and forwards file and JSON errors.
    pub fn load<I>(args: I, env_config: Option<PathBuf>) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config_path = None;
        let mut corpus_dir = None;

        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    let path = args
                        .next()
                        .ok_or_else(|| AppErr::Config("--config expects a path".into()))?;
                    config_path = Some(PathBuf::from(path));
                }
                flag if flag.starts_with("--") => {
                    return Err(AppErr::Config(format!("unknown flag: {flag}")));
                }
                _ if corpus_dir.is_some() => {
                    return Err(AppErr::Config(format!("unexpected argument: {arg}")));
                }
                _ => corpus_dir = Some(PathBuf::from(&arg)),
            }
        }

        let mut config = match config_path.or(env_config) {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        if let Some(dir) = corpus_dir {
            config.corpus_dir = dir;
        }

        config.validate()?;
        Ok(config)
    }

    /// Checks the value ranges serde can't express.
    pub fn validate(&self) -> Result<()> {
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(AppErr::Config(format!(
                "learning_rate must be a finite positive number, got {}",
                self.learning_rate
            )));
        }

        if self.quit_token.is_empty() {
            return Err(AppErr::Config("quit_token must not be empty".into()));
        }

        Ok(())
    }

    /// Returns a `TrainerBuilder` carrying the training settings.
    pub fn trainer_builder(&self) -> TrainerBuilder {
        TrainerBuilder::new()
            .learning_rate(self.learning_rate)
            .epochs(self.epochs)
            .shuffle(self.shuffle)
            .seed(self.seed)
    }
}

use std::{error::Error, fmt, io, path::PathBuf};

use ml_core::MlError;

/// The result type of the command line front end.
pub type Result<T> = std::result::Result<T, AppErr>;

/// Failures of the command line front end: loading settings and corpora,
/// talking to the user, and anything the engine reports.
#[derive(Debug)]
pub enum AppErr {
    /// Reading or writing `path` failed.
    Io { path: PathBuf, source: io::Error },
    /// The settings are malformed or out of range.
    Config(String),
    /// A settings file is not valid JSON for `AppConfig`.
    Json(serde_json::Error),
    /// The corpus directory holds no documents.
    EmptyCorpus { path: PathBuf },
    /// The learning engine rejected an operation.
    Ml(MlError),
}

impl AppErr {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for AppErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErr::Io { path, source } => write!(f, "io error on '{}': {source}", path.display()),
            AppErr::Config(msg) => write!(f, "invalid config: {msg}"),
            AppErr::Json(e) => write!(f, "invalid config file: {e}"),
            AppErr::EmptyCorpus { path } => {
                write!(f, "no documents found under '{}'", path.display())
            }
            AppErr::Ml(e) => write!(f, "{e}"),
        }
    }
}

impl Error for AppErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppErr::Io { source, .. } => Some(source),
            AppErr::Json(e) => Some(e),
            AppErr::Ml(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MlError> for AppErr {
    fn from(value: MlError) -> Self {
        Self::Ml(value)
    }
}

impl From<serde_json::Error> for AppErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating `siteaudit.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("failed to parse config file")]
    Toml(#[from] toml::de::Error),

    #[error("content directory `{0}` not found; run from the project root or pass --root")]
    MissingContentRoot(PathBuf),

    #[error("invalid stylesheet pattern")]
    StylesheetPattern(#[from] regex::Error),
}

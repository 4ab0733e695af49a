//! Configuration loading errors.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors returned while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but cannot be read.
    #[error("failed to read trello configuration {path}: {source}")]
    Io {
        /// File that failed to load.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for the expected shape.
    #[error("failed to parse trello configuration {path}: {message}")]
    Parse {
        /// File that failed to parse.
        path: Utf8PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// Configuration leaves no list that counts as complete.
    #[error("at least one completed list name is required")]
    EmptyCompletedLists,
}

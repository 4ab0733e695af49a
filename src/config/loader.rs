//! Configuration file parsing and override merging.

use super::ConfigError;
use crate::gate::domain::CompletionSet;
use crate::tracker::adapters::RestCardStoreConfig;
use crate::tracker::adapters::rest::DEFAULT_TRELLO_BASE_URL;
use crate::tracker::services::RetryPolicy;
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Configuration file looked up when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "trello.yml";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// On-disk configuration shape.
///
/// Unknown keys are ignored so the file can be shared with other tools.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    /// Trello API key.
    #[serde(default)]
    pub key: Option<String>,
    /// Trello API token.
    #[serde(default)]
    pub token: Option<String>,
    /// List names considered complete.
    #[serde(default)]
    pub completed: Option<Vec<String>>,
    /// API root, mainly for testing against a local server.
    #[serde(default)]
    pub base_url: Option<String>,
    /// Attempts per request for transient failures.
    #[serde(default)]
    pub retry_attempts: Option<u32>,
    /// Per-request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for ConfigFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigFile")
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("completed", &self.completed)
            .field("base_url", &self.base_url)
            .field("retry_attempts", &self.retry_attempts)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ConfigFile {
    /// Parses YAML file contents. Blank contents yield an empty file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the contents are not valid.
    pub fn parse(path: &Utf8Path, contents: &str) -> Result<Self, ConfigError> {
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(contents).map_err(|err| ConfigError::Parse {
            path: path.to_owned(),
            message: err.to_string(),
        })
    }
}

/// Explicit settings supplied by the host, typically from the command line
/// (`--trello-cfg`, `--trello-api-key`, `--trello-api-token`, repeated
/// `--trello-completed`).
#[derive(Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    config_path: Utf8PathBuf,
    api_key: Option<String>,
    api_token: Option<String>,
    completed: Vec<String>,
}

impl ConfigOverrides {
    /// Creates overrides that read `trello.yml` and set nothing else.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_path: Utf8PathBuf::from(DEFAULT_CONFIG_FILE),
            api_key: None,
            api_token: None,
            completed: Vec::new(),
        }
    }

    /// Sets the configuration file path.
    #[must_use]
    pub fn with_config_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.config_path = path.into();
        self
    }

    /// Sets the API key, taking precedence over the file.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the API token, taking precedence over the file.
    #[must_use]
    pub fn with_api_token(mut self, api_token: impl Into<String>) -> Self {
        self.api_token = Some(api_token.into());
        self
    }

    /// Appends a completed list name. Any appended name replaces the file
    /// and default values entirely.
    #[must_use]
    pub fn with_completed(mut self, list_name: impl Into<String>) -> Self {
        self.completed.push(list_name.into());
        self
    }

    /// Returns the configuration file path.
    #[must_use]
    pub fn config_path(&self) -> &Utf8Path {
        &self.config_path
    }
}

impl Default for ConfigOverrides {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigOverrides {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigOverrides")
            .field("config_path", &self.config_path)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("completed", &self.completed)
            .finish()
    }
}

/// Resolved configuration consumed by the gate.
#[derive(Clone, PartialEq, Eq)]
pub struct TrelloConfig {
    api_key: Option<String>,
    api_token: Option<String>,
    completed: CompletionSet,
    base_url: String,
    retry: RetryPolicy,
    timeout: Duration,
}

impl TrelloConfig {
    /// Creates a configuration with defaults and no credentials.
    #[must_use]
    pub fn new() -> Self {
        Self {
            api_key: None,
            api_token: None,
            completed: CompletionSet::default(),
            base_url: DEFAULT_TRELLO_BASE_URL.to_owned(),
            retry: RetryPolicy::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Returns the API token, if configured.
    #[must_use]
    pub fn api_token(&self) -> Option<&str> {
        self.api_token.as_deref()
    }

    /// Returns the list names that count as complete.
    #[must_use]
    pub const fn completed(&self) -> &CompletionSet {
        &self.completed
    }

    /// Returns the retry policy for transient failures.
    #[must_use]
    pub const fn retry(&self) -> RetryPolicy {
        self.retry
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds REST adapter settings from this configuration.
    #[must_use]
    pub fn rest_store_config(&self) -> RestCardStoreConfig {
        let mut config = RestCardStoreConfig::new()
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout);
        if let Some(key) = &self.api_key {
            config = config.with_api_key(key.clone());
        }
        if let Some(token) = &self.api_token {
            config = config.with_api_token(token.clone());
        }
        config
    }

    /// Merges a parsed file with host overrides.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyCompletedLists`] when the merged
    /// completion set is empty.
    pub fn merge(file: ConfigFile, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let defaults = Self::new();
        let completed = if overrides.completed.is_empty() {
            file.completed
                .map_or_else(CompletionSet::default, CompletionSet::new)
        } else {
            CompletionSet::new(overrides.completed.iter().cloned())
        };
        if completed.is_empty() {
            return Err(ConfigError::EmptyCompletedLists);
        }

        let retry = file.retry_attempts.map_or(defaults.retry, |attempts| {
            RetryPolicy::new(attempts, defaults.retry.backoff())
        });

        Ok(Self {
            api_key: overrides.api_key.clone().or(file.key),
            api_token: overrides.api_token.clone().or(file.token),
            completed,
            base_url: file.base_url.unwrap_or(defaults.base_url),
            retry,
            timeout: file
                .timeout_secs
                .map_or(defaults.timeout, Duration::from_secs),
        })
    }
}

impl Default for TrelloConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TrelloConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrelloConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .field("completed", &self.completed)
            .field("base_url", &self.base_url)
            .field("retry", &self.retry)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Loads the configuration file named by `overrides` and merges it.
///
/// # Errors
///
/// Returns [`ConfigError`] when the file exists but cannot be read or
/// parsed, or when the result has no completed list names.
pub fn load(overrides: &ConfigOverrides) -> Result<TrelloConfig, ConfigError> {
    let path = overrides.config_path();
    let file = match read_config_file(path)? {
        Some(contents) => ConfigFile::parse(path, &contents)?,
        None => ConfigFile::default(),
    };
    TrelloConfig::merge(file, overrides)
}

/// Reads the file, returning `None` when it or its directory is missing.
fn read_config_file(path: &Utf8Path) -> Result<Option<String>, ConfigError> {
    let io_error = |source: std::io::Error| ConfigError::Io {
        path: path.to_owned(),
        source,
    };
    let Some(file_name) = path.file_name() else {
        return Err(io_error(std::io::Error::other(
            "configuration path must include a file name",
        )));
    };
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let dir = match Dir::open_ambient_dir(parent, ambient_authority()) {
        Ok(dir) => dir,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(io_error(err)),
    };
    match dir.read_to_string(file_name) {
        Ok(contents) => Ok(Some(contents)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_error(err)),
    }
}

//! The `trello` marker as declared on a test item.

use super::GateDomainError;
use serde::Deserialize;
use serde_json::{Map, Value};

/// Marker name recognised on test items.
pub const MARKER_NAME: &str = "trello";

/// Marker documentation registered with the host at configure time.
pub const MARKER_DOC: &str = "trello(*cards): Trello card integration";

/// Raw marker data as exposed by the host framework.
///
/// Positional arguments are card URLs or identifiers; keyword options are
/// kept untyped until [`MarkerOptions::from_kwargs`] validates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrelloMarker {
    args: Vec<String>,
    kwargs: Map<String, Value>,
}

impl TrelloMarker {
    /// Creates a marker from positional card references.
    #[must_use]
    pub fn new<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            kwargs: Map::new(),
        }
    }

    /// Adds a keyword option.
    #[must_use]
    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.kwargs.insert(key.into(), value.into());
        self
    }

    /// Returns positional card references in declaration order.
    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Returns raw keyword options.
    #[must_use]
    pub const fn kwargs(&self) -> &Map<String, Value> {
        &self.kwargs
    }
}

/// Typed marker keyword options.
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct MarkerOptions {
    /// Skip instead of xfail when a card is incomplete.
    #[serde(default)]
    pub skip: bool,
    /// Legacy switch; `false` behaves like `skip = true`.
    #[serde(default)]
    pub xfail: Option<bool>,
}

impl MarkerOptions {
    /// Validates raw keyword options.
    ///
    /// # Errors
    ///
    /// Returns [`GateDomainError::InvalidOptions`] when a known option has
    /// the wrong type.
    pub fn from_kwargs(kwargs: &Map<String, Value>) -> Result<Self, GateDomainError> {
        serde_json::from_value(Value::Object(kwargs.clone()))
            .map_err(|err| GateDomainError::InvalidOptions(err.to_string()))
    }

    /// Selects a policy from options that failed validation.
    ///
    /// Any `skip` value other than `false` selects [`CompletionPolicy::Skip`],
    /// as does `xfail = false`; everything else keeps the default.
    #[must_use]
    pub fn fallback_policy(kwargs: &Map<String, Value>) -> CompletionPolicy {
        let skip_requested = kwargs
            .get("skip")
            .is_some_and(|value| value != &Value::Bool(false));
        let xfail_disabled = kwargs.get("xfail") == Some(&Value::Bool(false));
        if skip_requested || xfail_disabled {
            CompletionPolicy::Skip
        } else {
            CompletionPolicy::Xfail
        }
    }

    /// Returns the completion policy these options select.
    #[must_use]
    pub const fn policy(self) -> CompletionPolicy {
        if self.skip || matches!(self.xfail, Some(false)) {
            CompletionPolicy::Skip
        } else {
            CompletionPolicy::Xfail
        }
    }
}

/// What happens to a test whose cards are incomplete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CompletionPolicy {
    /// Run the test and expect it to fail.
    #[default]
    Xfail,
    /// Do not run the test.
    Skip,
}

impl CompletionPolicy {
    /// Returns the policy name in canonical form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xfail => "xfail",
            Self::Skip => "skip",
        }
    }
}

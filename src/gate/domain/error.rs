//! Error types for marker validation.

use crate::tracker::domain::TrackerDomainError;
use thiserror::Error;

/// Errors returned while turning a marker into a card group.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateDomainError {
    /// The marker declares no card references.
    #[error("trello marker declares no card references")]
    EmptyMarker,

    /// A declared card reference is unusable.
    #[error(transparent)]
    InvalidCardReference(#[from] TrackerDomainError),

    /// Keyword options have the wrong shape.
    #[error("invalid trello marker options: {0}")]
    InvalidOptions(String),
}

/// Errors surfaced to the host from gate hooks.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GateError {
    /// A test item carries a marker that cannot be interpreted.
    #[error("invalid trello marker on {node_id}: {source}")]
    InvalidMarker {
        /// Host identifier of the offending item.
        node_id: String,
        /// Validation failure.
        source: GateDomainError,
    },
}

/// Result type for gate hook operations.
pub type GateResult<T> = Result<T, GateError>;

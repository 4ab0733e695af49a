//! Error types for tracker domain validation.

use thiserror::Error;

/// Errors returned while constructing tracker domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerDomainError {
    /// The card identifier is empty after trimming.
    #[error("card identifier must not be empty")]
    EmptyCardId,

    /// The list identifier is empty after trimming.
    #[error("list identifier must not be empty")]
    EmptyListId,

    /// The card reference does not end in a usable identifier segment.
    #[error("card reference '{0}' does not contain a card identifier")]
    InvalidCardReference(String),
}

//! Read-only port onto the remote card board.

use crate::tracker::domain::{CardId, CardRecord, ListId, ListRecord};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for card store operations.
pub type CardStoreResult<T> = Result<T, CardStoreError>;

/// Remote card board contract.
///
/// Both operations are reads; implementations must not cache; the
/// resolver owns memoization for the run.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardStore: Send + Sync {
    /// Fetches a card by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`CardStoreError::NotFound`] for unknown cards,
    /// [`CardStoreError::Auth`] for rejected credentials and
    /// [`CardStoreError::Transport`] for network or protocol failures.
    async fn get_card(&self, card_id: &CardId) -> CardStoreResult<CardRecord>;

    /// Fetches a list by identifier.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`CardStore::get_card`].
    async fn get_list(&self, list_id: &ListId) -> CardStoreResult<ListRecord>;
}

/// Errors returned by card store implementations.
#[derive(Debug, Clone, Error)]
pub enum CardStoreError {
    /// The card or list does not exist or is not visible.
    #[error("not found: {0}")]
    NotFound(String),

    /// The board rejected the configured credentials.
    #[error("authorization failed: {0}")]
    Auth(String),

    /// Network, protocol or decoding failure.
    #[error("transport error: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl CardStoreError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }

    /// Returns `true` when retrying the same request may succeed.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}

//! In-memory card store for tests and offline runs.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::tracker::{
    domain::{CardId, CardRecord, ListId, ListRecord},
    ports::{CardStore, CardStoreError, CardStoreResult},
};

/// Thread-safe in-memory card board.
///
/// Besides serving fixed records, the store counts calls per identifier and
/// can be primed to fail, either permanently or for a number of attempts.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCardStore {
    state: Arc<RwLock<InMemoryBoardState>>,
}

#[derive(Debug, Default)]
struct InMemoryBoardState {
    cards: HashMap<CardId, CardRecord>,
    lists: HashMap<ListId, ListRecord>,
    card_failures: HashMap<CardId, ScriptedFailure>,
    list_failures: HashMap<ListId, ScriptedFailure>,
    card_calls: HashMap<CardId, usize>,
    list_calls: HashMap<ListId, usize>,
}

#[derive(Debug)]
struct ScriptedFailure {
    error: CardStoreError,
    remaining: Option<usize>,
}

impl ScriptedFailure {
    /// Consumes one failure, returning the error while any remain.
    fn take(&mut self) -> Option<CardStoreError> {
        match &mut self.remaining {
            None => Some(self.error.clone()),
            Some(0) => None,
            Some(count) => {
                *count -= 1;
                Some(self.error.clone())
            }
        }
    }
}

impl InMemoryCardStore {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a list.
    pub fn insert_list(&self, list: ListRecord) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.lists.insert(list.id().clone(), list);
    }

    /// Adds or replaces a card.
    pub fn insert_card(&self, card: CardRecord) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.cards.insert(card.id().clone(), card);
    }

    /// Makes every fetch of the card fail with `error`.
    pub fn fail_card(&self, card_id: CardId, error: CardStoreError) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.card_failures.insert(
            card_id,
            ScriptedFailure {
                error,
                remaining: None,
            },
        );
    }

    /// Makes the next `times` fetches of the card fail with `error`.
    pub fn fail_card_times(&self, card_id: CardId, times: usize, error: CardStoreError) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.card_failures.insert(
            card_id,
            ScriptedFailure {
                error,
                remaining: Some(times),
            },
        );
    }

    /// Makes every fetch of the list fail with `error`.
    pub fn fail_list(&self, list_id: ListId, error: CardStoreError) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.list_failures.insert(
            list_id,
            ScriptedFailure {
                error,
                remaining: None,
            },
        );
    }

    /// Returns how many times `get_card` was called for the identifier.
    #[must_use]
    pub fn card_calls(&self, card_id: &CardId) -> usize {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.card_calls.get(card_id).copied().unwrap_or_default()
    }

    /// Returns how many times `get_list` was called for the identifier.
    #[must_use]
    pub fn list_calls(&self, list_id: &ListId) -> usize {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.list_calls.get(list_id).copied().unwrap_or_default()
    }

    /// Returns the total number of remote calls of either kind.
    #[must_use]
    pub fn total_calls(&self) -> usize {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.card_calls.values().sum::<usize>() + state.list_calls.values().sum::<usize>()
    }
}

#[async_trait]
impl CardStore for InMemoryCardStore {
    async fn get_card(&self, card_id: &CardId) -> CardStoreResult<CardRecord> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state.card_calls.entry(card_id.clone()).or_default() += 1;

        if let Some(error) = state
            .card_failures
            .get_mut(card_id)
            .and_then(ScriptedFailure::take)
        {
            return Err(error);
        }

        state
            .cards
            .get(card_id)
            .cloned()
            .ok_or_else(|| CardStoreError::NotFound(format!("card {card_id}")))
    }

    async fn get_list(&self, list_id: &ListId) -> CardStoreResult<ListRecord> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        *state.list_calls.entry(list_id.clone()).or_default() += 1;

        if let Some(error) = state
            .list_failures
            .get_mut(list_id)
            .and_then(ScriptedFailure::take)
        {
            return Err(error);
        }

        state
            .lists
            .get(list_id)
            .cloned()
            .ok_or_else(|| CardStoreError::NotFound(format!("list {list_id}")))
    }
}

//! Run-scoped, memoizing card resolver.
//!
//! Cards are fetched once per identifier and lists once per list identifier.
//! List lookups are deferred until a caller asks for the list name, so cards
//! that are never evaluated cost no list request. Remote failures never
//! escape: they are logged and cached as [`CardLookup::Unknown`] or
//! [`ListLookup::Unknown`].

use crate::tracker::{
    domain::{CardId, CardLookup, CardStatus, ListId, ListLookup, ResolvedCard},
    ports::{CardStore, CardStoreResult},
};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::time::Duration;
use tracing::{debug, warn};

/// Bounded retry for transient card store failures.
///
/// Only [`CardStoreError::is_transient`](crate::tracker::ports::CardStoreError::is_transient)
/// failures are retried. `max_attempts` counts the first attempt and is
/// never below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    backoff: Duration,
}

impl RetryPolicy {
    /// Creates a retry policy.
    #[must_use]
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    /// A policy that performs exactly one attempt.
    #[must_use]
    pub const fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            backoff: Duration::ZERO,
        }
    }

    /// Returns the attempt ceiling.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the delay between attempts.
    #[must_use]
    pub const fn backoff(&self) -> Duration {
        self.backoff
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_millis(250))
    }
}

#[derive(Debug, Default)]
struct ResolverCache {
    cards: HashMap<CardId, ResolvedCard>,
    lists: HashMap<ListId, ListLookup>,
}

/// Memoizing view over a [`CardStore`] for the lifetime of one run.
///
/// Construct one resolver per run (or per worker) and share it by reference.
#[derive(Debug)]
pub struct CardResolver<S>
where
    S: CardStore,
{
    store: Arc<S>,
    retry: RetryPolicy,
    cache: RwLock<ResolverCache>,
}

impl<S> CardResolver<S>
where
    S: CardStore,
{
    /// Creates a resolver with the default retry policy.
    #[must_use]
    pub fn new(store: Arc<S>) -> Self {
        Self::with_retry_policy(store, RetryPolicy::default())
    }

    /// Creates a resolver with an explicit retry policy.
    #[must_use]
    pub fn with_retry_policy(store: Arc<S>, retry: RetryPolicy) -> Self {
        Self {
            store,
            retry,
            cache: RwLock::new(ResolverCache::default()),
        }
    }

    /// Resolves a card, fetching it on first reference.
    ///
    /// Repeated calls for the same identifier return the same entry and do
    /// not contact the store again.
    pub async fn resolve(&self, card_id: &CardId) -> ResolvedCard {
        let cached = self.read_cache().cards.get(card_id).cloned();
        if let Some(hit) = cached {
            return hit;
        }

        debug!(card_id = %card_id, "fetching trello card");
        let lookup = match self
            .with_retry("card", card_id.as_str(), || self.store.get_card(card_id))
            .await
        {
            Ok(record) => CardLookup::Found(record),
            Err(err) => {
                warn!(card_id = %card_id, error = %err, "unable to fetch trello card, status unknown");
                CardLookup::Unknown(err.to_string())
            }
        };

        self.write_cache()
            .cards
            .entry(card_id.clone())
            .or_insert_with(|| ResolvedCard::new(card_id.clone(), lookup))
            .clone()
    }

    /// Returns the name of the list holding a resolved card.
    ///
    /// The list is fetched on first access and memoized by list identifier.
    /// Returns `None` when the card itself is unknown or the list cannot be
    /// fetched.
    pub async fn list_name(&self, resolved: &ResolvedCard) -> Option<String> {
        let record = resolved.record()?;
        self.resolve_list(record.list_id())
            .await
            .name()
            .map(str::to_owned)
    }

    /// Resolves a card and its list name into a [`CardStatus`].
    pub async fn status(&self, card_id: &CardId) -> CardStatus {
        let resolved = self.resolve(card_id).await;
        let list_name = self.list_name(&resolved).await;
        let card_name = resolved.record().map(|record| record.name().to_owned());
        CardStatus::new(card_id.clone(), card_name, list_name)
    }

    /// Returns `true` when the card already has a cache entry.
    #[must_use]
    pub fn is_cached(&self, card_id: &CardId) -> bool {
        self.read_cache().cards.contains_key(card_id)
    }

    /// Returns the number of distinct cards resolved so far.
    #[must_use]
    pub fn cached_card_count(&self) -> usize {
        self.read_cache().cards.len()
    }

    async fn resolve_list(&self, list_id: &ListId) -> ListLookup {
        let cached = self.read_cache().lists.get(list_id).cloned();
        if let Some(hit) = cached {
            return hit;
        }

        debug!(list_id = %list_id, "fetching trello list");
        let lookup = match self
            .with_retry("list", list_id.as_str(), || self.store.get_list(list_id))
            .await
        {
            Ok(record) => ListLookup::Found(record),
            Err(err) => {
                warn!(list_id = %list_id, error = %err, "unable to fetch trello list, status unknown");
                ListLookup::Unknown(err.to_string())
            }
        };

        self.write_cache()
            .lists
            .entry(list_id.clone())
            .or_insert(lookup)
            .clone()
    }

    async fn with_retry<T, F, Fut>(&self, kind: &str, id: &str, mut op: F) -> CardStoreResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = CardStoreResult<T>>,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Err(err) if err.is_transient() && attempt < self.retry.max_attempts => {
                    debug!(kind, id, attempt, error = %err, "retrying trello request");
                    tokio::time::sleep(self.retry.backoff).await;
                    attempt += 1;
                }
                result => return result,
            }
        }
    }

    fn read_cache(&self) -> RwLockReadGuard<'_, ResolverCache> {
        self.cache.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_cache(&self) -> RwLockWriteGuard<'_, ResolverCache> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }
}

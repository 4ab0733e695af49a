//! The gate's implementation of the host hook surface.

use super::{CollectionSummary, MarkerCollector, OutcomeDecisionEngine};
use crate::config::TrelloConfig;
use crate::gate::{
    domain::{CompletionSet, GateDecision, GateResult, MARKER_DOC, TestItem},
    ports::{HostHooks, MarkerRegistry, Reporter},
};
use crate::tracker::{
    adapters::TrelloRestCardStore,
    ports::{CardStore, CardStoreResult},
    services::{CardResolver, RetryPolicy},
};
use async_trait::async_trait;
use std::sync::{Arc, Mutex, PoisonError};

/// Trello gate plugin: one instance per run.
///
/// Builds one resolver per run and shares it between the collector and the
/// decision engine, so cards warmed during collection are not fetched again
/// during setup.
pub struct TrelloGatePlugin<S, R>
where
    S: CardStore,
    R: Reporter,
{
    collector: MarkerCollector<S, R>,
    engine: OutcomeDecisionEngine<S>,
    last_summary: Mutex<Option<CollectionSummary>>,
}

impl<S, R> TrelloGatePlugin<S, R>
where
    S: CardStore,
    R: Reporter,
{
    /// Creates a plugin from its collaborators.
    #[must_use]
    pub fn new(
        store: Arc<S>,
        reporter: Arc<R>,
        completed: CompletionSet,
        retry: RetryPolicy,
    ) -> Self {
        let resolver = Arc::new(CardResolver::with_retry_policy(store, retry));
        Self {
            collector: MarkerCollector::new(Arc::clone(&resolver), reporter),
            engine: OutcomeDecisionEngine::new(resolver, completed),
            last_summary: Mutex::new(None),
        }
    }

    /// Creates a plugin using the completion set and retry policy from
    /// configuration.
    #[must_use]
    pub fn from_config(config: &TrelloConfig, store: Arc<S>, reporter: Arc<R>) -> Self {
        Self::new(store, reporter, config.completed().clone(), config.retry())
    }

    /// Returns the summary of the last collection pass, if one ran.
    #[must_use]
    pub fn last_summary(&self) -> Option<CollectionSummary> {
        *self
            .last_summary
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<R> TrelloGatePlugin<TrelloRestCardStore, R>
where
    R: Reporter,
{
    /// Creates a plugin talking to the Trello REST API.
    ///
    /// # Errors
    ///
    /// Returns a card store error when the HTTP client cannot be built.
    pub fn connect(config: &TrelloConfig, reporter: Arc<R>) -> CardStoreResult<Self> {
        let store = TrelloRestCardStore::new(config.rest_store_config())?;
        Ok(Self::from_config(config, Arc::new(store), reporter))
    }
}

#[async_trait]
impl<S, R> HostHooks for TrelloGatePlugin<S, R>
where
    S: CardStore,
    R: Reporter,
{
    fn on_configure(&self, markers: &mut MarkerRegistry) {
        markers.register(MARKER_DOC);
    }

    async fn on_collection_modify(&self, items: &mut [TestItem]) -> GateResult<()> {
        let summary = self.collector.collect(items).await?;
        *self
            .last_summary
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(summary);
        Ok(())
    }

    async fn on_test_setup(&self, item: &TestItem) -> GateDecision {
        self.engine.decide(item).await
    }
}

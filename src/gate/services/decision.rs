//! Setup-phase outcome decisions.

use crate::gate::domain::{
    CardGroup, CompletionPolicy, CompletionSet, GateDecision, IncompleteCard, SKIP_HEADER,
    TestItem, XFAIL_HEADER, render_reason,
};
use crate::tracker::{ports::CardStore, services::CardResolver};
use std::sync::Arc;
use tracing::debug;

/// Turns card state into an outcome override for one item.
///
/// A card is incomplete when its list name is unknown or not in the
/// completion set. Unknown status is never treated as complete.
pub struct OutcomeDecisionEngine<S>
where
    S: CardStore,
{
    resolver: Arc<CardResolver<S>>,
    completed: CompletionSet,
}

impl<S> OutcomeDecisionEngine<S>
where
    S: CardStore,
{
    /// Creates an engine sharing the run's resolver.
    #[must_use]
    pub const fn new(resolver: Arc<CardResolver<S>>, completed: CompletionSet) -> Self {
        Self {
            resolver,
            completed,
        }
    }

    /// Returns the completion set in use.
    #[must_use]
    pub const fn completed(&self) -> &CompletionSet {
        &self.completed
    }

    /// Lists the group's incomplete cards in canonical order.
    pub async fn incomplete_cards(&self, group: &CardGroup) -> Vec<IncompleteCard> {
        let mut incomplete = Vec::new();
        for card in group.cards() {
            let status = self.resolver.status(card.id()).await;
            let is_complete = status
                .list_name()
                .is_some_and(|list_name| self.completed.contains(list_name));
            if !is_complete {
                incomplete.push(IncompleteCard::new(
                    card,
                    status.list_name().map(str::to_owned),
                    status.card_name().map(str::to_owned),
                ));
            }
        }
        incomplete
    }

    /// Decides the override for an item about to run.
    pub async fn decide(&self, item: &TestItem) -> GateDecision {
        let Some(group) = item.card_group() else {
            return GateDecision::Unmarked;
        };

        let incomplete = self.incomplete_cards(group).await;
        if incomplete.is_empty() {
            return GateDecision::Complete;
        }

        debug!(
            node_id = item.node_id(),
            incomplete = incomplete.len(),
            policy = group.policy().as_str(),
            "trello cards incomplete"
        );
        match group.policy() {
            CompletionPolicy::Xfail => GateDecision::Xfail {
                reason: render_reason(XFAIL_HEADER, &incomplete),
            },
            CompletionPolicy::Skip => GateDecision::Skip {
                reason: render_reason(SKIP_HEADER, &incomplete),
            },
        }
    }
}

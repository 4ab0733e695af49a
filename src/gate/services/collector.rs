//! Collection-phase marker scan.

use crate::gate::{
    domain::{
        CardGroup, GateDomainError, GateError, GateResult, MARKER_NAME, MarkerOptions, TestItem,
    },
    ports::{Emphasis, Reporter},
};
use crate::tracker::{ports::CardStore, services::CardResolver};
use std::sync::Arc;
use tracing::{info, warn};

/// Counts gathered while scanning collected items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionSummary {
    /// Items that received a card group.
    pub marked_items: usize,
    /// Card references across all groups, after per-item de-duplication.
    pub total_references: usize,
    /// Distinct cards known to the resolver once collection finished.
    pub distinct_cards: usize,
}

/// Scans collected items once, attaches card groups and warms the resolver.
///
/// Progress goes to the reporter: a bold `collecting trello markers ` prefix,
/// one `.` per newly seen card, then a bold `collected <N> trello markers`
/// line.
pub struct MarkerCollector<S, R>
where
    S: CardStore,
    R: Reporter,
{
    resolver: Arc<CardResolver<S>>,
    reporter: Arc<R>,
}

impl<S, R> MarkerCollector<S, R>
where
    S: CardStore,
    R: Reporter,
{
    /// Creates a collector sharing the run's resolver.
    #[must_use]
    pub const fn new(resolver: Arc<CardResolver<S>>, reporter: Arc<R>) -> Self {
        Self { resolver, reporter }
    }

    /// Attaches a [`CardGroup`] to every marked item.
    ///
    /// Markers without arguments are ignored with a warning and leave the
    /// item ungated. Malformed keyword options are logged and replaced by
    /// [`MarkerOptions::fallback_policy`].
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidMarker`] for a marker with an unusable
    /// reference. Items before it keep their groups.
    pub async fn collect(&self, items: &mut [TestItem]) -> GateResult<CollectionSummary> {
        self.reporter
            .write("collecting trello markers ", Emphasis::Bold);

        let mut summary = CollectionSummary::default();
        for item in items.iter_mut() {
            let Some(marker) = item.marker() else {
                continue;
            };
            let parsed = match CardGroup::from_marker(marker) {
                Err(GateDomainError::InvalidOptions(message)) => {
                    let policy = MarkerOptions::fallback_policy(marker.kwargs());
                    warn!(
                        node_id = item.node_id(),
                        error = %message,
                        policy = policy.as_str(),
                        "malformed marker options, falling back"
                    );
                    CardGroup::with_policy(marker, policy)
                }
                other => other,
            };
            let group = match parsed {
                Ok(group) => group,
                Err(GateDomainError::EmptyMarker) => {
                    warn!(
                        node_id = item.node_id(),
                        marker = MARKER_NAME,
                        "marker without card references ignored"
                    );
                    continue;
                }
                Err(source) => {
                    return Err(GateError::InvalidMarker {
                        node_id: item.node_id().to_owned(),
                        source,
                    });
                }
            };

            for card in group.cards() {
                if !self.resolver.is_cached(card.id()) {
                    self.reporter.write(".", Emphasis::Plain);
                    self.resolver.resolve(card.id()).await;
                }
            }

            summary.marked_items += 1;
            summary.total_references += group.cards().len();
            item.attach_card_group(group);
        }
        summary.distinct_cards = self.resolver.cached_card_count();

        self.reporter.write(
            &format!("\ncollected {} trello markers\n", summary.distinct_cards),
            Emphasis::Bold,
        );
        info!(
            marked_items = summary.marked_items,
            distinct_cards = summary.distinct_cards,
            "trello marker collection finished"
        );
        Ok(summary)
    }
}

//! Host test items as seen by the gate.

use super::{CardGroup, TrelloMarker};

/// A collected test item.
///
/// Host adapters build one per collected test, copying the `trello` marker
/// if present. The collector attaches a [`CardGroup`] to marked items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestItem {
    node_id: String,
    marker: Option<TrelloMarker>,
    card_group: Option<CardGroup>,
}

impl TestItem {
    /// Creates an unmarked item.
    #[must_use]
    pub fn new(node_id: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            marker: None,
            card_group: None,
        }
    }

    /// Sets the item's trello marker.
    #[must_use]
    pub fn with_marker(mut self, marker: TrelloMarker) -> Self {
        self.marker = Some(marker);
        self
    }

    /// Returns the host's identifier for the item.
    #[must_use]
    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Returns the declared marker, if any.
    #[must_use]
    pub const fn marker(&self) -> Option<&TrelloMarker> {
        self.marker.as_ref()
    }

    /// Returns the attached card group, if any.
    #[must_use]
    pub const fn card_group(&self) -> Option<&CardGroup> {
        self.card_group.as_ref()
    }

    /// Attaches the resolved card group.
    pub fn attach_card_group(&mut self, group: CardGroup) {
        self.card_group = Some(group);
    }
}

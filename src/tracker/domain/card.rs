//! Card and list snapshots plus the resolver's tagged lookup results.

use super::{CardId, ListId};

/// A card as returned by the remote board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRecord {
    id: CardId,
    name: String,
    list_id: ListId,
}

impl CardRecord {
    /// Creates a card snapshot.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, list_id: ListId) -> Self {
        Self {
            id,
            name: name.into(),
            list_id,
        }
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn id(&self) -> &CardId {
        &self.id
    }

    /// Returns the card title.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the identifier of the list holding the card.
    #[must_use]
    pub const fn list_id(&self) -> &ListId {
        &self.list_id
    }
}

/// A list as returned by the remote board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRecord {
    id: ListId,
    name: String,
}

impl ListRecord {
    /// Creates a list snapshot.
    #[must_use]
    pub fn new(id: ListId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Returns the list identifier.
    #[must_use]
    pub const fn id(&self) -> &ListId {
        &self.id
    }

    /// Returns the list name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Outcome of fetching a card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardLookup {
    /// The card was fetched.
    Found(CardRecord),
    /// The card could not be fetched; the reason is kept for diagnostics.
    Unknown(String),
}

/// Outcome of fetching a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListLookup {
    /// The list was fetched.
    Found(ListRecord),
    /// The list could not be fetched; the reason is kept for diagnostics.
    Unknown(String),
}

impl ListLookup {
    /// Returns the list name when the lookup succeeded.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Found(record) => Some(record.name()),
            Self::Unknown(_) => None,
        }
    }
}

/// The resolver's cached view of a single card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCard {
    card_id: CardId,
    lookup: CardLookup,
}

impl ResolvedCard {
    /// Creates a resolved card entry.
    #[must_use]
    pub const fn new(card_id: CardId, lookup: CardLookup) -> Self {
        Self { card_id, lookup }
    }

    /// Returns the card identifier this entry is keyed by.
    #[must_use]
    pub const fn card_id(&self) -> &CardId {
        &self.card_id
    }

    /// Returns the tagged lookup result.
    #[must_use]
    pub const fn lookup(&self) -> &CardLookup {
        &self.lookup
    }

    /// Returns the fetched record, if any.
    #[must_use]
    pub const fn record(&self) -> Option<&CardRecord> {
        match &self.lookup {
            CardLookup::Found(record) => Some(record),
            CardLookup::Unknown(_) => None,
        }
    }
}

/// Name-level status of a card, as consumed by outcome decisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStatus {
    card_id: CardId,
    card_name: Option<String>,
    list_name: Option<String>,
}

impl CardStatus {
    /// Creates a card status.
    #[must_use]
    pub const fn new(card_id: CardId, card_name: Option<String>, list_name: Option<String>) -> Self {
        Self {
            card_id,
            card_name,
            list_name,
        }
    }

    /// Returns the card identifier.
    #[must_use]
    pub const fn card_id(&self) -> &CardId {
        &self.card_id
    }

    /// Returns the card title when known.
    #[must_use]
    pub fn card_name(&self) -> Option<&str> {
        self.card_name.as_deref()
    }

    /// Returns the name of the containing list when known.
    #[must_use]
    pub fn list_name(&self) -> Option<&str> {
        self.list_name.as_deref()
    }
}

//! Canonical card groups attached to marked test items.

use super::{CompletionPolicy, GateDomainError, MarkerOptions, TrelloMarker};
use crate::tracker::domain::CardRef;

/// Cards referenced by one test item, in canonical order, plus the policy
/// applied when any of them is incomplete.
///
/// Cards are sorted by identifier and de-duplicated, so items declaring the
/// same references in a different order produce identical groups. A group is
/// never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGroup {
    cards: Vec<CardRef>,
    policy: CompletionPolicy,
}

impl CardGroup {
    /// Builds a group from a marker.
    ///
    /// When two references share an identifier the first declared spelling
    /// is kept.
    ///
    /// # Errors
    ///
    /// Returns [`GateDomainError::EmptyMarker`] when the marker has no
    /// arguments, and other [`GateDomainError`] variants for unusable
    /// references or options.
    pub fn from_marker(marker: &TrelloMarker) -> Result<Self, GateDomainError> {
        if marker.args().is_empty() {
            return Err(GateDomainError::EmptyMarker);
        }
        let options = MarkerOptions::from_kwargs(marker.kwargs())?;
        Self::with_policy(marker, options.policy())
    }

    /// Builds a group from a marker's references with an explicit policy,
    /// ignoring its keyword options.
    ///
    /// # Errors
    ///
    /// Returns [`GateDomainError::EmptyMarker`] when the marker has no
    /// arguments, or [`GateDomainError::InvalidCardReference`] for an
    /// unusable reference.
    pub fn with_policy(
        marker: &TrelloMarker,
        policy: CompletionPolicy,
    ) -> Result<Self, GateDomainError> {
        if marker.args().is_empty() {
            return Err(GateDomainError::EmptyMarker);
        }

        let mut cards = marker
            .args()
            .iter()
            .map(CardRef::parse)
            .collect::<Result<Vec<_>, _>>()?;
        cards.sort();
        cards.dedup();

        Ok(Self { cards, policy })
    }

    /// Returns the cards in canonical order.
    #[must_use]
    pub fn cards(&self) -> &[CardRef] {
        &self.cards
    }

    /// Returns the completion policy.
    #[must_use]
    pub const fn policy(&self) -> CompletionPolicy {
        self.policy
    }
}

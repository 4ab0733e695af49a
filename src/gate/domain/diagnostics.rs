//! Diagnostic messages for incomplete cards.

use crate::tracker::domain::CardRef;
use std::fmt;

/// Header used when a test is marked as an expected failure.
pub const XFAIL_HEADER: &str = "Xfailing due to incomplete trello cards:";

/// Header used when a test is skipped.
pub const SKIP_HEADER: &str = "Skipping due to incomplete trello cards:";

const UNKNOWN: &str = "unknown";

/// One incomplete card, rendered as `<reference> [<list>] <name>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncompleteCard {
    reference: String,
    list_name: Option<String>,
    card_name: Option<String>,
}

impl IncompleteCard {
    /// Creates a diagnostic entry.
    #[must_use]
    pub fn new(card_ref: &CardRef, list_name: Option<String>, card_name: Option<String>) -> Self {
        Self {
            reference: card_ref.reference().to_owned(),
            list_name,
            card_name,
        }
    }

    /// Returns the reference as declared on the marker.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// Returns the containing list name when known.
    #[must_use]
    pub fn list_name(&self) -> Option<&str> {
        self.list_name.as_deref()
    }

    /// Returns the card title when known.
    #[must_use]
    pub fn card_name(&self) -> Option<&str> {
        self.card_name.as_deref()
    }
}

impl fmt::Display for IncompleteCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.reference,
            self.list_name.as_deref().unwrap_or(UNKNOWN),
            self.card_name.as_deref().unwrap_or(UNKNOWN)
        )
    }
}

/// Renders the header followed by one line per incomplete card.
#[must_use]
pub fn render_reason(header: &str, cards: &[IncompleteCard]) -> String {
    let mut reason = header.to_owned();
    for card in cards {
        reason.push('\n');
        reason.push_str(&card.to_string());
    }
    reason
}

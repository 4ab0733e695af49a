//! Per-item gate decisions.

/// Result of evaluating one test item before it runs.
///
/// Only `Xfail` and `Skip` change what the host does with the item; the gate
/// never forces a pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The item carries no trello marker.
    Unmarked,
    /// Every referenced card is in a completed list.
    Complete,
    /// Run the item and expect it to fail.
    Xfail {
        /// Diagnostic listing the incomplete cards.
        reason: String,
    },
    /// Do not run the item.
    Skip {
        /// Diagnostic listing the incomplete cards.
        reason: String,
    },
}

impl GateDecision {
    /// Returns the diagnostic for overriding decisions.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Xfail { reason } | Self::Skip { reason } => Some(reason),
            Self::Unmarked | Self::Complete => None,
        }
    }

    /// Returns `true` when the decision overrides the natural outcome.
    #[must_use]
    pub const fn is_override(&self) -> bool {
        matches!(self, Self::Xfail { .. } | Self::Skip { .. })
    }
}

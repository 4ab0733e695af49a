//! Domain model for card-gated test outcomes.

mod completion;
mod diagnostics;
mod error;
mod group;
mod item;
mod marker;
mod outcome;

pub use completion::{CompletionSet, DEFAULT_COMPLETED_LISTS};
pub use diagnostics::{IncompleteCard, SKIP_HEADER, XFAIL_HEADER, render_reason};
pub use error::{GateDomainError, GateError, GateResult};
pub use group::CardGroup;
pub use item::TestItem;
pub use marker::{CompletionPolicy, MARKER_DOC, MARKER_NAME, MarkerOptions, TrelloMarker};
pub use outcome::GateDecision;

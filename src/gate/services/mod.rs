//! Application services for card-gated test outcomes.

mod collector;
mod decision;
mod plugin;

pub use collector::{CollectionSummary, MarkerCollector};
pub use decision::OutcomeDecisionEngine;
pub use plugin::TrelloGatePlugin;

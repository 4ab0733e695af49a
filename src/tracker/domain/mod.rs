//! Domain model for Trello card and list state.
//!
//! Cards and lists are read-only snapshots owned by the remote board. The
//! domain only captures what a run needs to decide completion: a card's name
//! and the name of the list that currently holds it.

mod card;
mod error;
mod ids;

pub use card::{CardLookup, CardRecord, CardStatus, ListLookup, ListRecord, ResolvedCard};
pub use error::TrackerDomainError;
pub use ids::{CardId, CardRef, ListId};

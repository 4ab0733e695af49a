//! Shared board fixtures for gate tests.

use std::sync::Arc;
use std::time::Duration;

use crate::gate::adapters::InMemoryReporter;
use crate::tracker::{
    adapters::InMemoryCardStore,
    domain::{CardId, CardRecord, ListId, ListRecord},
    services::{CardResolver, RetryPolicy},
};
use rstest::fixture;

pub const OPEN_CARD: &str = "https://trello.com/c/NIRpzVDM";
pub const OPEN_CARD_2: &str = "https://trello.com/c/VWrInnH8";
pub const CLOSED_CARD: &str = "https://trello.com/c/OlTKlSQE";
pub const CLOSED_CARD_2: &str = "https://trello.com/c/BLxoci6b";

pub fn card_id(value: &str) -> CardId {
    CardId::new(value).expect("valid card id")
}

pub fn list_id(value: &str) -> ListId {
    ListId::new(value).expect("valid list id")
}

/// Board with two cards in "Not Done" and two in "Done".
#[fixture]
pub fn board() -> Arc<InMemoryCardStore> {
    let store = InMemoryCardStore::new();
    store.insert_list(ListRecord::new(list_id("list-open"), "Not Done"));
    store.insert_list(ListRecord::new(list_id("list-done"), "Done"));
    for (id, name, list) in [
        ("NIRpzVDM", "Open card one", "list-open"),
        ("VWrInnH8", "Open card two", "list-open"),
        ("OlTKlSQE", "Closed card one", "list-done"),
        ("BLxoci6b", "Closed card two", "list-done"),
    ] {
        store.insert_card(CardRecord::new(card_id(id), name, list_id(list)));
    }
    Arc::new(store)
}

#[fixture]
pub fn reporter() -> Arc<InMemoryReporter> {
    Arc::new(InMemoryReporter::new())
}

pub fn resolver(store: &Arc<InMemoryCardStore>) -> Arc<CardResolver<InMemoryCardStore>> {
    Arc::new(CardResolver::with_retry_policy(
        Arc::clone(store),
        RetryPolicy::new(2, Duration::ZERO),
    ))
}

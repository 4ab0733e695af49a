//! Adapter implementations for the card store port.

pub mod memory;
pub mod rest;

pub use memory::InMemoryCardStore;
pub use rest::{RestCardStoreConfig, TrelloRestCardStore};

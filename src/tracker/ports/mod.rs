//! Port contracts for card status resolution.
//!
//! Ports define infrastructure-agnostic interfaces used by tracker services.

pub mod card_store;

#[cfg(test)]
pub use card_store::MockCardStore;
pub use card_store::{CardStore, CardStoreError, CardStoreResult};

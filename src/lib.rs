//! Trello gate: card-status driven test outcomes.
//!
//! This crate lets a host test framework mark tests as expected failures or
//! skip them while the Trello cards they reference are still open. A test
//! declares its cards with a `trello` marker; once per run the gate resolves
//! every referenced card, and before each test it checks whether all of them
//! sit in a list that counts as complete.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (REST, in-memory, etc.)
//!
//! # Modules
//!
//! - [`tracker`]: Card and list resolution with run-scoped caching
//! - [`gate`]: Marker collection, outcome decisions and host hooks
//! - [`config`]: Configuration file loading and overrides

pub mod config;
pub mod gate;
pub mod tracker;

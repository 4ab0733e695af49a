//! Test-outcome gating driven by Trello card status.
//!
//! A host test framework hands collected items to the gate once, before any
//! test runs, and asks for a decision before each test executes. Items whose
//! referenced cards are not all in a completed list are marked as expected
//! failures or skipped. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Host-facing port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Collector, decision engine and plugin hooks in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;

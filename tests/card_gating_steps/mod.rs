//! Step definitions for card gating scenarios.

mod given;
mod then;
mod when;
pub mod world;

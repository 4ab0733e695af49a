//! Port contracts between the gate and its host test framework.
//!
//! [`HostHooks`] is implemented by the gate and driven by host adapters;
//! [`Reporter`] is implemented by host adapters and driven by the gate.

pub mod hooks;
pub mod reporter;

pub use hooks::{HostHooks, MarkerRegistry};
pub use reporter::{Emphasis, Reporter};

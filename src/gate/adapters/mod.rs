//! Adapter implementations for gate ports.

pub mod harness;
pub mod reporter;

pub use harness::{
    CaseReport, HarnessCase, OutcomeKind, RunReport, SequentialHarness, TestBody, TestOutcome,
};
pub use reporter::{InMemoryReporter, WriterReporter};

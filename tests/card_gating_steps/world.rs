//! Shared world state for card gating BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use trello_gate::{
    gate::{
        adapters::{HarnessCase, InMemoryReporter, RunReport},
        domain::GateError,
    },
    tracker::adapters::InMemoryCardStore,
};

/// Scenario world for card gating behaviour tests.
pub struct CardGateWorld {
    pub board: Arc<InMemoryCardStore>,
    pub reporter: Arc<InMemoryReporter>,
    pub pending_cases: Vec<HarnessCase>,
    pub last_run: Option<Result<RunReport, GateError>>,
}

impl CardGateWorld {
    /// Creates a world with an empty board and no pending tests.
    #[must_use]
    pub fn new() -> Self {
        Self {
            board: Arc::new(InMemoryCardStore::new()),
            reporter: Arc::new(InMemoryReporter::new()),
            pending_cases: Vec::new(),
            last_run: None,
        }
    }

    /// Returns the last run report or an error when no run happened.
    pub fn report(&self) -> Result<&RunReport, eyre::Report> {
        match self.last_run.as_ref() {
            Some(Ok(report)) => Ok(report),
            Some(Err(err)) => Err(eyre::eyre!("test run failed during collection: {err}")),
            None => Err(eyre::eyre!("missing run result in scenario world")),
        }
    }
}

impl Default for CardGateWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> CardGateWorld {
    CardGateWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}

//! Sequential host harness.
//!
//! Drives [`HostHooks`] the way a host test framework would: configure,
//! collect, then for each item run setup, execute the body unless skipped,
//! and fold the gate decision into a final outcome. Bodies run inline on the
//! calling task; there is no parallelism.

use crate::gate::{
    domain::{GateDecision, GateResult, TestItem},
    ports::{HostHooks, MarkerRegistry},
};
use std::fmt;
use std::sync::Arc;

/// A test body: `Ok(())` passes, `Err(message)` fails.
pub type TestBody = Box<dyn Fn() -> Result<(), String> + Send + Sync>;

/// One test to run: the collected item plus its body.
pub struct HarnessCase {
    item: TestItem,
    body: TestBody,
}

impl HarnessCase {
    /// Creates a case.
    pub fn new<F>(item: TestItem, body: F) -> Self
    where
        F: Fn() -> Result<(), String> + Send + Sync + 'static,
    {
        Self {
            item,
            body: Box::new(body),
        }
    }
}

impl fmt::Debug for HarnessCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HarnessCase")
            .field("item", &self.item)
            .finish_non_exhaustive()
    }
}

/// Final outcome of one test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TestOutcome {
    /// The body succeeded without an override.
    Passed,
    /// The body failed without an override.
    Failed {
        /// Failure message from the body.
        message: String,
    },
    /// The body failed as expected.
    Xfailed {
        /// Gate diagnostic.
        reason: String,
    },
    /// The body succeeded although it was expected to fail.
    Xpassed {
        /// Gate diagnostic.
        reason: String,
    },
    /// The body never ran.
    Skipped {
        /// Gate diagnostic.
        reason: String,
    },
}

/// Outcome discriminant used for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    /// See [`TestOutcome::Passed`].
    Passed,
    /// See [`TestOutcome::Failed`].
    Failed,
    /// See [`TestOutcome::Xfailed`].
    Xfailed,
    /// See [`TestOutcome::Xpassed`].
    Xpassed,
    /// See [`TestOutcome::Skipped`].
    Skipped,
}

impl TestOutcome {
    /// Returns the outcome discriminant.
    #[must_use]
    pub const fn kind(&self) -> OutcomeKind {
        match self {
            Self::Passed => OutcomeKind::Passed,
            Self::Failed { .. } => OutcomeKind::Failed,
            Self::Xfailed { .. } => OutcomeKind::Xfailed,
            Self::Xpassed { .. } => OutcomeKind::Xpassed,
            Self::Skipped { .. } => OutcomeKind::Skipped,
        }
    }

    fn from_run(decision: GateDecision, result: Result<(), String>) -> Self {
        match (decision, result) {
            (GateDecision::Xfail { reason }, Err(_)) => Self::Xfailed { reason },
            (GateDecision::Xfail { reason }, Ok(())) => Self::Xpassed { reason },
            (GateDecision::Skip { reason }, _) => Self::Skipped { reason },
            (GateDecision::Unmarked | GateDecision::Complete, Err(message)) => {
                Self::Failed { message }
            }
            (GateDecision::Unmarked | GateDecision::Complete, Ok(())) => Self::Passed,
        }
    }
}

/// Outcome of one test plus whether its body executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    /// Host identifier of the item.
    pub node_id: String,
    /// Gate decision taken at setup.
    pub decision: GateDecision,
    /// Final outcome.
    pub outcome: TestOutcome,
    /// Whether the body ran.
    pub body_executed: bool,
}

/// Result of a harness run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Markers registered during configuration.
    pub markers: MarkerRegistry,
    /// Per-case results in execution order.
    pub cases: Vec<CaseReport>,
}

impl RunReport {
    /// Counts cases with the given outcome.
    #[must_use]
    pub fn count(&self, kind: OutcomeKind) -> usize {
        self.cases
            .iter()
            .filter(|case| case.outcome.kind() == kind)
            .count()
    }

    /// Finds a case by node identifier.
    #[must_use]
    pub fn case(&self, node_id: &str) -> Option<&CaseReport> {
        self.cases.iter().find(|case| case.node_id == node_id)
    }

    /// Returns `true` when no case failed. Unexpected passes do not fail a
    /// run.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.count(OutcomeKind::Failed) == 0
    }
}

/// Host harness running cases strictly in order.
pub struct SequentialHarness<H>
where
    H: HostHooks,
{
    hooks: Arc<H>,
}

impl<H> SequentialHarness<H>
where
    H: HostHooks,
{
    /// Creates a harness over the given hooks.
    #[must_use]
    pub const fn new(hooks: Arc<H>) -> Self {
        Self { hooks }
    }

    /// Runs all cases through configure, collection and per-item setup.
    ///
    /// # Errors
    ///
    /// Returns a [`GateError`](crate::gate::domain::GateError) when
    /// collection fails; no body runs in that case.
    pub async fn run(&self, cases: Vec<HarnessCase>) -> GateResult<RunReport> {
        let mut report = RunReport::default();
        self.hooks.on_configure(&mut report.markers);

        let (mut items, bodies): (Vec<TestItem>, Vec<TestBody>) =
            cases.into_iter().map(|case| (case.item, case.body)).unzip();
        self.hooks.on_collection_modify(&mut items).await?;

        for (item, body) in items.iter().zip(bodies) {
            let decision = self.hooks.on_test_setup(item).await;
            let (outcome, body_executed) = if let GateDecision::Skip { reason } = &decision {
                (
                    TestOutcome::Skipped {
                        reason: reason.clone(),
                    },
                    false,
                )
            } else {
                (TestOutcome::from_run(decision.clone(), body()), true)
            };
            report.cases.push(CaseReport {
                node_id: item.node_id().to_owned(),
                decision,
                outcome,
                body_executed,
            });
        }
        Ok(report)
    }
}

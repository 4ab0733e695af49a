//! When steps for card gating BDD scenarios.

use std::sync::Arc;

use super::world::{CardGateWorld, run_async};
use rstest_bdd_macros::when;
use trello_gate::{
    gate::{adapters::SequentialHarness, domain::CompletionSet, services::TrelloGatePlugin},
    tracker::services::RetryPolicy,
};

#[when("the test run executes")]
fn run_tests(world: &mut CardGateWorld) {
    let plugin = TrelloGatePlugin::new(
        Arc::clone(&world.board),
        Arc::clone(&world.reporter),
        CompletionSet::default(),
        RetryPolicy::no_retry(),
    );
    let harness = SequentialHarness::new(Arc::new(plugin));
    let cases = std::mem::take(&mut world.pending_cases);
    world.last_run = Some(run_async(harness.run(cases)));
}

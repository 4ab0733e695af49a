//! Then steps for card gating BDD scenarios.

use super::world::CardGateWorld;
use rstest_bdd_macros::then;
use trello_gate::{
    gate::adapters::{CaseReport, OutcomeKind},
    tracker::domain::CardId,
};

fn case<'a>(world: &'a CardGateWorld, name: &str) -> Result<&'a CaseReport, eyre::Report> {
    world
        .report()?
        .case(name)
        .ok_or_else(|| eyre::eyre!("no result recorded for {name}"))
}

fn outcome_name(kind: OutcomeKind) -> &'static str {
    match kind {
        OutcomeKind::Passed => "passed",
        OutcomeKind::Failed => "failed",
        OutcomeKind::Xfailed => "xfailed",
        OutcomeKind::Xpassed => "xpassed",
        OutcomeKind::Skipped => "skipped",
    }
}

#[then(r#"the outcome of "{name}" is "{expected}""#)]
fn outcome_is(world: &CardGateWorld, name: String, expected: String) -> Result<(), eyre::Report> {
    let actual = outcome_name(case(world, &name)?.outcome.kind());
    if actual != expected {
        return Err(eyre::eyre!("expected {name} to be {expected}, got {actual}"));
    }
    Ok(())
}

#[then(r#"the body of "{name}" did not run"#)]
fn body_did_not_run(world: &CardGateWorld, name: String) -> Result<(), eyre::Report> {
    if case(world, &name)?.body_executed {
        return Err(eyre::eyre!("expected body of {name} not to run"));
    }
    Ok(())
}

#[then(r#"the diagnostic of "{name}" mentions "{text}""#)]
fn diagnostic_mentions(world: &CardGateWorld, name: String, text: String) -> Result<(), eyre::Report> {
    let reason = case(world, &name)?.decision.reason().unwrap_or_default();
    if !reason.lines().any(|line| line == text) {
        return Err(eyre::eyre!("diagnostic for {name} lacks line '{text}': {reason}"));
    }
    Ok(())
}

#[then(r#"the diagnostic of "{name}" does not mention "{text}""#)]
fn diagnostic_omits(world: &CardGateWorld, name: String, text: String) -> Result<(), eyre::Report> {
    let reason = case(world, &name)?.decision.reason().unwrap_or_default();
    if reason.contains(&text) {
        return Err(eyre::eyre!("diagnostic for {name} unexpectedly mentions '{text}'"));
    }
    Ok(())
}

#[then(r#"card "{card}" was fetched {count:usize} times"#)]
fn card_fetch_count(world: &CardGateWorld, card: String, count: usize) -> Result<(), eyre::Report> {
    let card_id = CardId::new(card).map_err(|err| eyre::eyre!("invalid card id: {err}"))?;
    let calls = world.board.card_calls(&card_id);
    if calls != count {
        return Err(eyre::eyre!("expected {count} fetches of {card_id}, got {calls}"));
    }
    Ok(())
}

#[then(r#"the report contains the line "{line}""#)]
fn report_contains_line(world: &CardGateWorld, line: String) -> Result<(), eyre::Report> {
    if !world.reporter.lines().contains(&line) {
        return Err(eyre::eyre!(
            "report lacks line '{line}': {:?}",
            world.reporter.output()
        ));
    }
    Ok(())
}

#[then(r#"the registered markers include "{line}""#)]
fn markers_include(world: &CardGateWorld, line: String) -> Result<(), eyre::Report> {
    let markers = world.report()?.markers.lines();
    if !markers.contains(&line) {
        return Err(eyre::eyre!("marker '{line}' not registered: {markers:?}"));
    }
    Ok(())
}

#[then("the run succeeds")]
fn run_succeeds(world: &CardGateWorld) -> Result<(), eyre::Report> {
    if !world.report()?.is_success() {
        return Err(eyre::eyre!("expected the run to succeed"));
    }
    Ok(())
}

#[then("the run fails")]
fn run_fails(world: &CardGateWorld) -> Result<(), eyre::Report> {
    if world.report()?.is_success() {
        return Err(eyre::eyre!("expected the run to fail"));
    }
    Ok(())
}

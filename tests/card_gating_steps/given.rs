//! Given steps for card gating BDD scenarios.

use super::world::CardGateWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use trello_gate::{
    gate::{
        adapters::HarnessCase,
        domain::{TestItem, TrelloMarker},
    },
    tracker::{
        domain::{CardId, CardRecord, ListId, ListRecord},
        ports::CardStoreError,
    },
};

fn body_for(result: &str) -> Result<fn() -> Result<(), String>, eyre::Report> {
    match result {
        "passes" => Ok(|| Ok(())),
        "fails" => Ok(|| Err("assert False".to_owned())),
        other => Err(eyre::eyre!("unknown test result '{other}'")),
    }
}

fn marker_for(cards: &str) -> TrelloMarker {
    TrelloMarker::new(cards.split(','))
}

#[given(r#"card "{card}" is in list "{list}""#)]
fn card_in_list(world: &mut CardGateWorld, card: String, list: String) -> Result<(), eyre::Report> {
    let list_id = ListId::new(format!("list-{}", list.to_lowercase().replace(' ', "-")))
        .wrap_err("construct list id")?;
    let card_id = CardId::new(card.clone()).wrap_err("construct card id")?;
    world.board.insert_list(ListRecord::new(list_id.clone(), list));
    world
        .board
        .insert_card(CardRecord::new(card_id, format!("Card {card}"), list_id));
    Ok(())
}

#[given(r#"card "{card}" cannot be fetched"#)]
fn card_cannot_be_fetched(world: &mut CardGateWorld, card: String) -> Result<(), eyre::Report> {
    let card_id = CardId::new(card).wrap_err("construct card id")?;
    world.board.fail_card(
        card_id,
        CardStoreError::transport(std::io::Error::other("connection refused")),
    );
    Ok(())
}

#[given(r#"a test "{name}" marked with "{cards}" that {result}"#)]
fn marked_test(
    world: &mut CardGateWorld,
    name: String,
    cards: String,
    result: String,
) -> Result<(), eyre::Report> {
    let body = body_for(&result)?;
    let item = TestItem::new(name).with_marker(marker_for(&cards));
    world.pending_cases.push(HarnessCase::new(item, body));
    Ok(())
}

#[given(r#"a skipping test "{name}" marked with "{cards}" that {result}"#)]
fn skipping_test(
    world: &mut CardGateWorld,
    name: String,
    cards: String,
    result: String,
) -> Result<(), eyre::Report> {
    let body = body_for(&result)?;
    let item = TestItem::new(name).with_marker(marker_for(&cards).with_option("skip", true));
    world.pending_cases.push(HarnessCase::new(item, body));
    Ok(())
}

#[given(r#"an unmarked test "{name}" that {result}"#)]
fn unmarked_test(world: &mut CardGateWorld, name: String, result: String) -> Result<(), eyre::Report> {
    let body = body_for(&result)?;
    world
        .pending_cases
        .push(HarnessCase::new(TestItem::new(name), body));
    Ok(())
}

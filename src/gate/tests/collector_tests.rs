//! Collection-phase tests: card groups, cache warming and progress output.

use std::sync::Arc;

use super::fixtures::{
    CLOSED_CARD, CLOSED_CARD_2, OPEN_CARD, OPEN_CARD_2, board, card_id, reporter, resolver,
};
use crate::gate::{
    adapters::InMemoryReporter,
    domain::{CardGroup, CompletionPolicy, GateDomainError, GateError, TestItem, TrelloMarker},
    services::{CollectionSummary, MarkerCollector},
};
use crate::tracker::adapters::InMemoryCardStore;
use rstest::rstest;
use serde_json::{Value, json};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn collect_attaches_groups_only_to_marked_items(
    board: Arc<InMemoryCardStore>,
    reporter: Arc<InMemoryReporter>,
) {
    let collector = MarkerCollector::new(resolver(&board), reporter);
    let mut items = vec![
        TestItem::new("test_plain"),
        TestItem::new("test_marked").with_marker(TrelloMarker::new([OPEN_CARD])),
    ];

    collector.collect(&mut items).await.expect("collection succeeds");

    assert!(items.first().and_then(TestItem::card_group).is_none());
    assert!(items.get(1).and_then(TestItem::card_group).is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn collect_reports_ticks_and_distinct_total(
    board: Arc<InMemoryCardStore>,
    reporter: Arc<InMemoryReporter>,
) {
    let collector = MarkerCollector::new(resolver(&board), Arc::clone(&reporter));
    let mut items = vec![
        TestItem::new("test_foo").with_marker(TrelloMarker::new([CLOSED_CARD, CLOSED_CARD_2])),
        TestItem::new("test_bar").with_marker(TrelloMarker::new([OPEN_CARD, OPEN_CARD_2])),
        TestItem::new("test_baz").with_marker(TrelloMarker::new([OPEN_CARD_2, CLOSED_CARD])),
    ];

    let summary = collector.collect(&mut items).await.expect("collection succeeds");

    assert_eq!(
        reporter.output(),
        "collecting trello markers ....\ncollected 4 trello markers\n"
    );
    assert_eq!(
        summary,
        CollectionSummary {
            marked_items: 3,
            total_references: 6,
            distinct_cards: 4,
        }
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn collect_fetches_each_card_once_and_no_lists(
    board: Arc<InMemoryCardStore>,
    reporter: Arc<InMemoryReporter>,
) {
    let collector = MarkerCollector::new(resolver(&board), reporter);
    let mut items = vec![
        TestItem::new("test_one").with_marker(TrelloMarker::new([OPEN_CARD])),
        TestItem::new("test_two").with_marker(TrelloMarker::new(["NIRpzVDM"])),
    ];

    collector.collect(&mut items).await.expect("collection succeeds");

    assert_eq!(board.card_calls(&card_id("NIRpzVDM")), 1);
    assert_eq!(board.total_calls(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn collect_ignores_markers_without_references(
    board: Arc<InMemoryCardStore>,
    reporter: Arc<InMemoryReporter>,
) {
    let collector = MarkerCollector::new(resolver(&board), Arc::clone(&reporter));
    let empty: [&str; 0] = [];
    let mut items = vec![TestItem::new("test_empty").with_marker(TrelloMarker::new(empty))];

    let summary = collector.collect(&mut items).await.expect("collection succeeds");

    assert_eq!(summary.marked_items, 0);
    assert!(items.first().and_then(TestItem::card_group).is_none());
    assert_eq!(
        reporter.lines().last().map(String::as_str),
        Some("collected 0 trello markers")
    );
}

#[rstest]
#[case(json!("sometimes"), CompletionPolicy::Skip)]
#[case(json!(null), CompletionPolicy::Skip)]
#[case(json!(1), CompletionPolicy::Skip)]
#[tokio::test(flavor = "multi_thread")]
async fn collect_falls_back_to_skip_for_malformed_skip_option(
    board: Arc<InMemoryCardStore>,
    reporter: Arc<InMemoryReporter>,
    #[case] skip: Value,
    #[case] expected: CompletionPolicy,
) {
    let collector = MarkerCollector::new(resolver(&board), reporter);
    let mut items = vec![
        TestItem::new("test_odd_option")
            .with_marker(TrelloMarker::new([OPEN_CARD]).with_option("skip", skip)),
        TestItem::new("test_after").with_marker(TrelloMarker::new([CLOSED_CARD])),
    ];

    let summary = collector.collect(&mut items).await.expect("collection succeeds");

    assert_eq!(summary.marked_items, 2);
    assert_eq!(
        items
            .first()
            .and_then(TestItem::card_group)
            .map(CardGroup::policy),
        Some(expected)
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn collect_rejects_unusable_references(
    board: Arc<InMemoryCardStore>,
    reporter: Arc<InMemoryReporter>,
) {
    let collector = MarkerCollector::new(resolver(&board), reporter);
    let mut items = vec![TestItem::new("test_bad").with_marker(TrelloMarker::new(["///"]))];

    let result = collector.collect(&mut items).await;

    assert!(matches!(
        result,
        Err(GateError::InvalidMarker {
            ref node_id,
            source: GateDomainError::InvalidCardReference(_),
        }) if node_id == "test_bad"
    ));
}

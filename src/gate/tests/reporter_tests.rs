//! Reporter adapter tests.

use crate::gate::{
    adapters::WriterReporter,
    ports::{Emphasis, Reporter},
};
use rstest::rstest;

#[rstest]
#[case(false, "collecting done")]
#[case(true, "\u{1b}[1mcollecting\u{1b}[0m done")]
fn writer_reporter_applies_emphasis(#[case] ansi: bool, #[case] expected: &str) {
    let reporter = WriterReporter::new(Vec::new(), ansi);

    reporter.write("collecting", Emphasis::Bold);
    reporter.write(" done", Emphasis::Plain);

    let written = String::from_utf8(reporter.into_inner()).expect("reporter writes UTF-8");
    assert_eq!(written, expected);
}

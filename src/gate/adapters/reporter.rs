//! Reporter adapters.

use crate::gate::ports::{Emphasis, Reporter};
use std::io::Write;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

const BOLD_ON: &str = "\u{1b}[1m";
const BOLD_OFF: &str = "\u{1b}[0m";

/// Reporter that keeps everything written in memory.
#[derive(Debug, Default)]
pub struct InMemoryReporter {
    output: Mutex<String>,
}

impl InMemoryReporter {
    /// Creates an empty reporter.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far, without emphasis markup.
    #[must_use]
    pub fn output(&self) -> String {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the written text split into lines.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.output().lines().map(str::to_owned).collect()
    }
}

impl Reporter for InMemoryReporter {
    fn write(&self, text: &str, _emphasis: Emphasis) {
        self.output
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_str(text);
    }
}

/// Reporter writing to any [`Write`] sink, e.g. a terminal.
///
/// Bold text is wrapped in ANSI escapes when `ansi` is enabled. Write errors
/// are logged and otherwise ignored.
#[derive(Debug)]
pub struct WriterReporter<W>
where
    W: Write + Send,
{
    sink: Mutex<W>,
    ansi: bool,
}

impl<W> WriterReporter<W>
where
    W: Write + Send,
{
    /// Creates a reporter over `sink`.
    #[must_use]
    pub const fn new(sink: W, ansi: bool) -> Self {
        Self {
            sink: Mutex::new(sink),
            ansi,
        }
    }

    /// Returns the sink, consuming the reporter.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.sink.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W> Reporter for WriterReporter<W>
where
    W: Write + Send,
{
    fn write(&self, text: &str, emphasis: Emphasis) {
        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        let result = if self.ansi && emphasis == Emphasis::Bold {
            write!(sink, "{BOLD_ON}{text}{BOLD_OFF}")
        } else {
            sink.write_all(text.as_bytes())
        }
        .and_then(|()| sink.flush());
        if let Err(err) = result {
            debug!(error = %err, "dropping report output");
        }
    }
}

//! Human-readable run report output.

/// Text emphasis requested by the gate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Emphasis {
    /// Ordinary text.
    #[default]
    Plain,
    /// Highlighted text.
    Bold,
}

/// The host's terminal report stream.
///
/// Writes are fire-and-forget; a reporter that cannot write drops the text.
pub trait Reporter: Send + Sync {
    /// Appends text to the report without adding a newline.
    fn write(&self, text: &str, emphasis: Emphasis);
}

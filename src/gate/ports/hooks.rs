//! Lifecycle hooks invoked by the host framework.

use crate::gate::domain::{GateDecision, GateResult, TestItem};
use async_trait::async_trait;

/// Marker documentation collected during configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerRegistry {
    lines: Vec<String>,
}

impl MarkerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a marker description line, ignoring duplicates.
    pub fn register(&mut self, line: impl Into<String>) {
        let value = line.into();
        if !self.lines.contains(&value) {
            self.lines.push(value);
        }
    }

    /// Returns registered marker lines in registration order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Hook surface a host adapter drives, in phase order: configure once,
/// collection once, then setup once per item.
#[async_trait]
pub trait HostHooks: Send + Sync {
    /// Registers markers and other static metadata.
    fn on_configure(&self, markers: &mut MarkerRegistry);

    /// Adjusts collected items before any of them runs.
    ///
    /// # Errors
    ///
    /// Returns a [`GateError`](crate::gate::domain::GateError) when an item
    /// carries a malformed marker.
    async fn on_collection_modify(&self, items: &mut [TestItem]) -> GateResult<()>;

    /// Decides how the host treats one item immediately before it runs.
    async fn on_test_setup(&self, item: &TestItem) -> GateDecision;
}

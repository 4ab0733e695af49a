//! The set of list names that count as finished work.

/// List names treated as complete when no configuration overrides them.
pub const DEFAULT_COMPLETED_LISTS: [&str; 2] = ["Done", "Archived"];

/// Ordered, de-duplicated set of completed list names.
///
/// Names are matched exactly; `"done"` does not match `"Done"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionSet {
    names: Vec<String>,
}

impl CompletionSet {
    /// Creates a completion set, keeping the first occurrence of each name.
    ///
    /// Blank names are dropped.
    #[must_use]
    pub fn new<I, T>(names: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let value = name.into();
            let normalized = value.trim();
            if !normalized.is_empty() && !unique.iter().any(|existing| existing == normalized) {
                unique.push(normalized.to_owned());
            }
        }
        Self { names: unique }
    }

    /// Returns `true` when the list name counts as complete.
    #[must_use]
    pub fn contains(&self, list_name: &str) -> bool {
        self.names.iter().any(|name| name == list_name)
    }

    /// Returns the names in configuration order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Returns `true` when no list counts as complete.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for CompletionSet {
    fn default() -> Self {
        Self::new(DEFAULT_COMPLETED_LISTS)
    }
}

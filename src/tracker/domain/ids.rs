//! Identifier types for cards and lists.

use super::TrackerDomainError;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stable Trello card identifier (short link or long id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(String);

impl CardId {
    /// Creates a validated card identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::EmptyCardId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TrackerDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TrackerDomainError::EmptyCardId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CardId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for CardId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trello list identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListId(String);

impl ListId {
    /// Creates a validated list identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::EmptyListId`] when the value is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, TrackerDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if normalized.is_empty() {
            return Err(TrackerDomainError::EmptyListId);
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A card reference as written in a test marker.
///
/// The reference may be a full card URL or a bare identifier. Only the final
/// path segment is significant, so `https://trello.com/c/NIRpzVDM` and
/// `NIRpzVDM` name the same card. Equality, hashing and ordering use the
/// extracted [`CardId`] and ignore the original spelling.
#[derive(Debug, Clone)]
pub struct CardRef {
    id: CardId,
    reference: String,
}

impl CardRef {
    /// Parses a marker argument into a card reference.
    ///
    /// Query strings, fragments and trailing slashes are ignored when
    /// extracting the identifier segment.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerDomainError::InvalidCardReference`] when no
    /// identifier segment remains.
    pub fn parse(reference: impl Into<String>) -> Result<Self, TrackerDomainError> {
        let raw = reference.into();
        let trimmed = raw.trim();
        let without_suffix = trimmed
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        let segment = without_suffix.rsplit('/').next().unwrap_or_default();
        let id = CardId::new(segment)
            .map_err(|_| TrackerDomainError::InvalidCardReference(raw.clone()))?;

        Ok(Self {
            id,
            reference: trimmed.to_owned(),
        })
    }

    /// Returns the extracted card identifier.
    #[must_use]
    pub const fn id(&self) -> &CardId {
        &self.id
    }

    /// Returns the reference exactly as it was declared (trimmed).
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.reference
    }
}

impl PartialEq for CardRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CardRef {}

impl Hash for CardRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for CardRef {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CardRef {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl fmt::Display for CardRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.reference)
    }
}

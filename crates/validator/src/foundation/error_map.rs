//! Insertion-ordered mapping of error keys to messages

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

/// Error key → message mapping carried by a failed [`SchemaResult`](super::SchemaResult).
///
/// Entries keep the order they were first inserted in, which makes
/// [`first`](Self::first) deterministic. Inserting an existing key replaces its
/// message in place.
///
/// Serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorMap {
    entries: IndexMap<String, String>,
}

impl ErrorMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a map holding a single entry.
    pub fn single(key: impl Into<String>, message: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.insert(key, message);
        map
    }

    /// Inserts or replaces the message for `key`.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.entries.insert(key.into(), message.into());
    }

    /// Returns the message for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns the first-inserted entry.
    #[must_use]
    pub fn first(&self) -> Option<(&str, &str)> {
        self.entries
            .first()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns the first-inserted message.
    #[must_use]
    pub fn first_message(&self) -> Option<&str> {
        self.first().map(|(_, message)| message)
    }

    /// Returns true if `key` has a message.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for ErrorMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, message) in iter {
            map.insert(key, message);
        }
        map
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, message)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{key}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorMap {}

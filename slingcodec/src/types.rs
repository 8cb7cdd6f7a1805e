//! The canonical in-memory model shared by all readers and writers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A flat, sorted mapping of i18n keys to message strings for one language.
///
/// This is the common intermediate representation between all source and
/// output formats: every reader produces it, every writer consumes it.
/// Keys are kept in their original, unescaped dotted form; node-name
/// escaping is applied by the writers. The `BTreeMap` guarantees unique
/// keys and ascending lexicographic iteration, so all serialized output
/// is stable and reproducible.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct MessageMap {
    /// Language key, typically a locale code derived from the source
    /// file's base name (e.g. `en`, `de_DE`).
    pub language: String,

    /// All key/value pairs of this resource. Values are always plain
    /// strings; readers reject anything else.
    pub entries: BTreeMap<String, String>,
}

impl MessageMap {
    /// Builds a map from any key/value iterator. Duplicate keys keep the
    /// last occurrence.
    pub fn new(
        language: impl Into<String>,
        entries: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        MessageMap {
            language: language.into(),
            entries: entries.into_iter().collect(),
        }
    }

    /// Looks up the message for an (unescaped) key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

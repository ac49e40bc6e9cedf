//! Locale data trees and dotted-path lookup.
//!
//! A translation table is a JSON object whose leaves are strings:
//!
//! ```json
//! { "Common": { "save": "Save", "cancel": "Cancel" }, "title": "Hello" }
//! ```
//!
//! Keys address leaves by joining the nested object keys with `.`, so the
//! table above has the keys `Common.save`, `Common.cancel` and `title`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Separator between segments of a key path.
pub const KEY_SEPARATOR: char = '.';

/// A node of a translation table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Text(String),
    Nested(LocaleData),
}

impl From<&str> for Entry {
    fn from(text: &str) -> Self {
        Entry::Text(text.to_string())
    }
}

impl From<String> for Entry {
    fn from(text: String) -> Self {
        Entry::Text(text)
    }
}

impl From<LocaleData> for Entry {
    fn from(data: LocaleData) -> Self {
        Entry::Nested(data)
    }
}

/// One locale's full translation table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleData(BTreeMap<String, Entry>);

impl LocaleData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a JSON value. Only objects of strings and objects
    /// are accepted.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    pub fn insert(&mut self, key: impl Into<String>, entry: impl Into<Entry>) {
        self.0.insert(key.into(), entry.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, entry: impl Into<Entry>) -> Self {
        self.insert(key, entry);
        self
    }

    /// Walk `path` segment by segment. Any missing segment, or a segment
    /// that runs into a string before the path ends, yields `None`.
    pub fn get(&self, path: &str) -> Option<&Entry> {
        let mut segments = path.split(KEY_SEPARATOR);
        let first = segments.next()?;
        let mut entry = self.0.get(first)?;
        for segment in segments {
            match entry {
                Entry::Nested(data) => entry = data.0.get(segment)?,
                Entry::Text(_) => return None,
            }
        }
        Some(entry)
    }

    /// Resolve `path` to a translatable string.
    ///
    /// Branch nodes and empty strings are not translations, so both resolve
    /// to `None`.
    pub fn lookup(&self, path: &str) -> Option<&str> {
        match self.get(path)? {
            Entry::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Every leaf key path, in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        collect_keys(self, "", &mut keys);
        keys
    }

    /// Number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, E: Into<Entry>> FromIterator<(K, E)> for LocaleData {
    fn from_iter<T: IntoIterator<Item = (K, E)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, entry)| (key.into(), entry.into()))
                .collect(),
        )
    }
}

fn collect_keys(data: &LocaleData, prefix: &str, keys: &mut Vec<String>) {
    for (key, entry) in &data.0 {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}{}{}", prefix, KEY_SEPARATOR, key)
        };
        match entry {
            Entry::Text(_) => keys.push(path),
            Entry::Nested(nested) => collect_keys(nested, &path, keys),
        }
    }
}

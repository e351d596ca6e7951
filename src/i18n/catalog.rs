//! Message catalogs: the JSON documents served under `locales/{code}.json`.
//!
//! A catalog maps keys to translated strings or to nested sections of the
//! same shape. Keys may themselves contain dots (`"label.action.save"`), so
//! lookups try the literal key before walking nested sections.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single catalog value: either a message or a nested section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CatalogEntry {
    Message(String),
    Section(BTreeMap<String, CatalogEntry>),
}

/// Mapping from translation key to message or nested section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCatalog {
    entries: BTreeMap<String, CatalogEntry>,
}

impl MessageCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a catalog from a JSON byte slice.
    ///
    /// Anything other than an object whose leaves are all strings is rejected.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Insert a top-level entry, replacing any previous one under the same key.
    pub fn insert(&mut self, key: impl Into<String>, entry: CatalogEntry) {
        self.entries.insert(key.into(), entry);
    }

    /// Number of top-level entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Top-level entries in key order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &CatalogEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Look up the entry for a key.
    ///
    /// The literal key is tried first; if absent, the key is split on `.` and
    /// nested sections are walked.
    pub fn entry(&self, key: &str) -> Option<&CatalogEntry> {
        if let Some(entry) = self.entries.get(key) {
            return Some(entry);
        }

        let mut segments = key.split('.');
        let mut current = self.entries.get(segments.next()?)?;
        for segment in segments {
            match current {
                CatalogEntry::Section(children) => current = children.get(segment)?,
                CatalogEntry::Message(_) => return None,
            }
        }
        Some(current)
    }

    /// Look up a message. Sections are not messages and yield `None`.
    pub fn message(&self, key: &str) -> Option<&str> {
        match self.entry(key)? {
            CatalogEntry::Message(text) => Some(text),
            CatalogEntry::Section(_) => None,
        }
    }

    /// Every message in the catalog, keyed by its dotted path.
    pub fn flatten(&self) -> BTreeMap<String, &str> {
        let mut out = BTreeMap::new();
        for (key, entry) in &self.entries {
            flatten_into(key.clone(), entry, &mut out);
        }
        out
    }

    /// Total number of messages, counting nested ones.
    pub fn message_count(&self) -> usize {
        self.entries.values().map(count_messages).sum()
    }
}

fn flatten_into<'a>(path: String, entry: &'a CatalogEntry, out: &mut BTreeMap<String, &'a str>) {
    match entry {
        CatalogEntry::Message(text) => {
            out.insert(path, text.as_str());
        }
        CatalogEntry::Section(children) => {
            for (key, child) in children {
                flatten_into(format!("{}.{}", path, key), child, out);
            }
        }
    }
}

fn count_messages(entry: &CatalogEntry) -> usize {
    match entry {
        CatalogEntry::Message(_) => 1,
        CatalogEntry::Section(children) => children.values().map(count_messages).sum(),
    }
}

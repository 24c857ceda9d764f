//! Bibliographic entry types.

use indexmap::IndexMap;
use serde::Serialize;

/// One `@type{key, field = {value}, ...}` record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Entry type as written after `@` (e.g. `article`)
    #[serde(rename = "type")]
    pub entry_type: String,

    /// Field values by field name, in source order
    pub fields: IndexMap<String, String>,
}

impl Entry {
    /// Create an entry with no fields.
    pub fn new(entry_type: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into(),
            fields: IndexMap::new(),
        }
    }

    /// Get a field value.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

/// Entries keyed by citation key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BibliographicDocument {
    /// Entries by citation key
    pub entries: IndexMap<String, Entry>,
}

impl BibliographicDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, replacing any earlier entry with the same key.
    pub fn insert(&mut self, key: impl Into<String>, entry: Entry) {
        self.entries.insert(key.into(), entry);
    }

    /// Get an entry by citation key.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        self.entries.get(key)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the document has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_type_key() {
        let mut entry = Entry::new("article");
        entry.fields.insert("title".into(), "T".into());

        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"type":"article","fields":{"title":"T"}}"#);
    }
}

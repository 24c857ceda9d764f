//! Key/value documents scraped from object notation.

use indexmap::IndexMap;
use serde::Serialize;

/// A flat mapping from key to textual value.
///
/// Keys keep the order of their first appearance; a repeated key overwrites
/// the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ObjectDocument {
    /// Key/value pairs in source order
    pub pairs: IndexMap<String, String>,
}

impl ObjectDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pair, overwriting any earlier value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.insert(key.into(), value.into());
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the document has no pairs.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in source order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ObjectDocument {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = Self::new();
        for (key, value) in iter {
            doc.insert(key, value);
        }
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_key_keeps_first_position() {
        let doc: ObjectDocument = [("a", "1"), ("b", "2"), ("a", "3")].into_iter().collect();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get("a"), Some("3"));
        let keys: Vec<_> = doc.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
    }
}

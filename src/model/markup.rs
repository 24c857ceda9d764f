//! Markup element types.

use indexmap::IndexMap;
use serde::Serialize;

/// A matched markup element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    /// Inline `name="value"` attributes, in source order
    pub attributes: IndexMap<String, String>,

    /// Trimmed text between the opening and closing tag (empty when self-closing)
    pub content: String,
}

impl Element {
    /// Create an element with content and no attributes.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            attributes: IndexMap::new(),
            content: content.into(),
        }
    }

    /// Get an attribute value.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Check if the element carried no content.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// Elements keyed by tag name.
///
/// Only one element is kept per tag name: a later occurrence replaces the
/// earlier record but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MarkupDocument {
    /// Elements by tag name
    pub elements: IndexMap<String, Element>,
}

impl MarkupDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element, replacing any earlier element with the same tag.
    pub fn insert(&mut self, tag: impl Into<String>, element: Element) {
        self.elements.insert(tag.into(), element);
    }

    /// Get an element by tag name.
    pub fn get(&self, tag: &str) -> Option<&Element> {
        self.elements.get(tag)
    }

    /// Number of distinct tag names.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the document has no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

//! Document-level types.

use super::{
    BibliographicDocument, MarkdownDocument, MarkupDocument, ObjectDocument, TabularDocument,
    Warning,
};
use crate::detect::Format;
use serde::Serialize;

/// The result shape of one extraction, one variant per notation.
///
/// Serializes as the inner document alone, without a variant tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Document {
    /// Key/value pairs from object notation
    Object(ObjectDocument),
    /// Elements from markup
    Markup(MarkupDocument),
    /// Rows from tabular text
    Tabular(TabularDocument),
    /// Entries from bibliographic text
    Bibliographic(BibliographicDocument),
    /// Headers and links from lightweight markup
    Markdown(MarkdownDocument),
}

impl Document {
    /// The notation this document was extracted from.
    pub fn format(&self) -> Format {
        match self {
            Document::Object(_) => Format::Json,
            Document::Markup(_) => Format::Xml,
            Document::Tabular(_) => Format::Csv,
            Document::Bibliographic(_) => Format::Bib,
            Document::Markdown(_) => Format::Md,
        }
    }

    /// Number of top-level items (pairs, elements, rows, entries, or headers plus links).
    pub fn len(&self) -> usize {
        match self {
            Document::Object(doc) => doc.len(),
            Document::Markup(doc) => doc.len(),
            Document::Tabular(doc) => doc.row_count(),
            Document::Bibliographic(doc) => doc.len(),
            Document::Markdown(doc) => doc.headers.len() + doc.links.len(),
        }
    }

    /// Check if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get the key/value document, if this is one.
    pub fn as_object(&self) -> Option<&ObjectDocument> {
        match self {
            Document::Object(doc) => Some(doc),
            _ => None,
        }
    }

    /// Get the markup document, if this is one.
    pub fn as_markup(&self) -> Option<&MarkupDocument> {
        match self {
            Document::Markup(doc) => Some(doc),
            _ => None,
        }
    }

    /// Get the tabular document, if this is one.
    pub fn as_tabular(&self) -> Option<&TabularDocument> {
        match self {
            Document::Tabular(doc) => Some(doc),
            _ => None,
        }
    }

    /// Get the bibliographic document, if this is one.
    pub fn as_bibliographic(&self) -> Option<&BibliographicDocument> {
        match self {
            Document::Bibliographic(doc) => Some(doc),
            _ => None,
        }
    }

    /// Get the header/link document, if this is one.
    pub fn as_markdown(&self) -> Option<&MarkdownDocument> {
        match self {
            Document::Markdown(doc) => Some(doc),
            _ => None,
        }
    }
}

impl From<ObjectDocument> for Document {
    fn from(doc: ObjectDocument) -> Self {
        Document::Object(doc)
    }
}

impl From<MarkupDocument> for Document {
    fn from(doc: MarkupDocument) -> Self {
        Document::Markup(doc)
    }
}

impl From<TabularDocument> for Document {
    fn from(doc: TabularDocument) -> Self {
        Document::Tabular(doc)
    }
}

impl From<BibliographicDocument> for Document {
    fn from(doc: BibliographicDocument) -> Self {
        Document::Bibliographic(doc)
    }
}

impl From<MarkdownDocument> for Document {
    fn from(doc: MarkdownDocument) -> Self {
        Document::Markdown(doc)
    }
}

/// A document together with the warnings raised while extracting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Extraction {
    /// The extracted document
    pub document: Document,

    /// Malformation warnings, in detection order
    pub warnings: Vec<Warning>,
}

impl Extraction {
    /// Create an extraction without warnings.
    pub fn new(document: impl Into<Document>) -> Self {
        Self {
            document: document.into(),
            warnings: Vec::new(),
        }
    }

    /// Attach a warning.
    pub fn with_warning(mut self, warning: Warning) -> Self {
        self.warnings.push(warning);
        self
    }

    /// Check if any warning was raised.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Split into the document and its warnings.
    pub fn into_parts(self) -> (Document, Vec<Warning>) {
        (self.document, self.warnings)
    }
}

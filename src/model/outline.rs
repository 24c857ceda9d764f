//! Header and link types scraped from lightweight markup.

use serde::Serialize;

/// A `#`-prefixed header line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Header level (1-6), the number of leading `#` marks
    pub level: u8,

    /// Trimmed header text
    pub title: String,
}

impl Heading {
    /// Create a new heading.
    pub fn new(level: u8, title: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
        }
    }
}

/// A `[text](target)` link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Bracketed link text
    pub text: String,

    /// Parenthesized target
    pub target: String,
}

impl Link {
    /// Create a new link.
    pub fn new(text: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            target: target.into(),
        }
    }
}

/// Headers and links, each in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkdownDocument {
    /// Headers in source order
    pub headers: Vec<Heading>,

    /// Links in source order
    pub links: Vec<Link>,
}

impl MarkdownDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no headers or links were found.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.links.is_empty()
    }

    /// Headers at the given level.
    pub fn headers_at(&self, level: u8) -> impl Iterator<Item = &Heading> {
        self.headers.iter().filter(move |h| h.level == level)
    }
}

//! Header and link scraping for lightweight markup.

use std::sync::LazyLock;

use regex::Regex;

use crate::detect::Format;
use crate::error::Result;
use crate::model::{Extraction, Heading, Link, MarkdownDocument};

use super::Extractor;

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{1,6})\s+(.+)$").expect("valid header pattern"));

static LINK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link pattern"));

/// Lightweight-markup extractor. Never fails and never warns.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownExtractor;

impl MarkdownExtractor {
    /// Create a new lightweight-markup extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for MarkdownExtractor {
    fn format(&self) -> Format {
        Format::Md
    }

    fn extract(&self, text: &str) -> Result<Extraction> {
        let headers = HEADER
            .captures_iter(text)
            .map(|caps| Heading::new(caps[1].len() as u8, caps[2].trim()))
            .collect();

        let links = LINK
            .captures_iter(text)
            .map(|caps| Link::new(&caps[1], &caps[2]))
            .collect();

        let document = MarkdownDocument { headers, links };
        log::debug!(
            "MarkdownExtractor: {} headers, {} links",
            document.headers.len(),
            document.links.len()
        );

        Ok(Extraction::new(document))
    }
}

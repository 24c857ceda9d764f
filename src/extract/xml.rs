//! Tag and attribute scraping for markup.
//!
//! An element is an opening `<name`, a lazily extended attribute run, and
//! then either `>content</name>` (closed by the first matching end tag) or
//! `/>`. Matches do not overlap, so elements nested inside a matched element
//! stay part of its content. The engine has no backreferences, so the end tag
//! search runs per candidate instead of inside the pattern, retrying shorter
//! tag names when the full name never closes.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::detect::Format;
use crate::error::Result;
use crate::model::{Element, Extraction, MarkupDocument, Warning};

use super::Extractor;

static OPEN_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<(\w+)\s*").expect("valid open tag pattern"));

static ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+)="([^"]*)""#).expect("valid attribute pattern"));

/// An opening tag whose `>` is not preceded by `/`.
static UNCLOSED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<\w+[^>]*>").expect("valid unclosed tag pattern"));

/// Markup extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlExtractor;

impl XmlExtractor {
    /// Create a new markup extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for XmlExtractor {
    fn format(&self) -> Format {
        Format::Xml
    }

    fn extract(&self, text: &str) -> Result<Extraction> {
        let matches = scan_elements(text);
        log::debug!("XmlExtractor: matched {} elements", matches.len());

        let mut document = MarkupDocument::new();
        for m in &matches {
            let attributes = ATTRIBUTE
                .captures_iter(&text[m.attributes.clone()])
                .map(|caps| (caps[1].to_string(), caps[2].to_string()))
                .collect();
            let content = m
                .content
                .clone()
                .map(|range| text[range].trim().to_string())
                .unwrap_or_default();

            document.insert(
                m.name.clone(),
                Element {
                    attributes,
                    content,
                },
            );
        }

        let mut extraction = Extraction::new(document);
        if has_unclosed_tag(text, &matches) {
            extraction = extraction.with_warning(Warning::UnclosedTag);
        }

        Ok(extraction)
    }
}

/// Byte ranges of one matched element.
#[derive(Debug, Clone)]
struct ElementMatch {
    name: String,
    attributes: Range<usize>,
    content: Option<Range<usize>>,
    span: Range<usize>,
}

/// Find all non-overlapping elements, leftmost first.
fn scan_elements(text: &str) -> Vec<ElementMatch> {
    let mut matches = Vec::new();
    let mut pos = 0;

    while let Some(caps) = OPEN_TAG.captures_at(text, pos) {
        let whole = caps.get(0).map_or(pos..pos, |m| m.range());
        let name = caps.get(1).map_or("", |m| m.as_str());
        let name_start = whole.start + 1;

        // Longest name first. A shorter name leaves the rest of the word in
        // the attribute run, as in `<ab>x</a>`.
        let found = name_prefixes(name).find_map(|prefix| {
            let attrs_start = if prefix.len() == name.len() {
                whole.end
            } else {
                name_start + prefix.len()
            };
            match_element(text, prefix, whole.start, attrs_start)
        });

        match found {
            Some(found) => {
                pos = found.span.end;
                matches.push(found);
            }
            // '<' is one byte, so start + 1 stays on a char boundary.
            None => pos = whole.start + 1,
        }

        if pos >= text.len() {
            break;
        }
    }

    matches
}

/// Non-empty prefixes of a tag name, longest first.
fn name_prefixes(name: &str) -> impl Iterator<Item = &str> {
    name.char_indices()
        .rev()
        .map(move |(i, c)| &name[..i + c.len_utf8()])
}

/// Extend the attribute run from `attrs_start` until the element can be closed.
fn match_element(
    text: &str,
    name: &str,
    start: usize,
    attrs_start: usize,
) -> Option<ElementMatch> {
    let end_tag = format!("</{}>", name);
    let bytes = text.as_bytes();
    let mut end_tag_missing = false;

    for p in attrs_start..bytes.len() {
        if bytes[p] == b'>' && !end_tag_missing {
            match text[p + 1..].find(&end_tag) {
                Some(offset) => {
                    let content_end = p + 1 + offset;
                    return Some(ElementMatch {
                        name: name.to_string(),
                        attributes: attrs_start..p,
                        content: Some(p + 1..content_end),
                        span: start..content_end + end_tag.len(),
                    });
                }
                // No later '>' can find an end tag either.
                None => end_tag_missing = true,
            }
        }

        if bytes[p..].starts_with(b"/>") {
            return Some(ElementMatch {
                name: name.to_string(),
                attributes: attrs_start..p,
                content: None,
                span: start..p + 2,
            });
        }
    }

    None
}

/// Look for an opening tag outside every matched element, then inside each
/// matched element's content.
fn has_unclosed_tag(text: &str, matches: &[ElementMatch]) -> bool {
    let mut gap_start = 0;
    for m in matches {
        if gap_has_open_tag(&text[gap_start..m.span.start]) {
            return true;
        }
        if let Some(range) = &m.content {
            let inner = &text[range.clone()];
            if has_unclosed_tag(inner, &scan_elements(inner)) {
                return true;
            }
        }
        gap_start = m.span.end;
    }

    gap_has_open_tag(&text[gap_start..])
}

fn gap_has_open_tag(gap: &str) -> bool {
    UNCLOSED_TAG
        .find_iter(gap)
        .any(|m| !m.as_str().ends_with("/>"))
}

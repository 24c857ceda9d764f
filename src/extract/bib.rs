//! Entry scraping for bibliographic text.
//!
//! An entry runs from `@type{key,` to the first `}` that is followed only by
//! whitespace and then another `@` or the end of input. Field values are
//! taken up to their first `}`, so nested braces truncate the value.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::detect::Format;
use crate::error::Result;
use crate::model::{BibliographicDocument, Entry, Extraction, Warning};

use super::Extractor;

static ENTRY_HEAD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@(\w+)\{([^,]+),").expect("valid entry pattern"));

static FIELD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)(\w+)\s*=\s*\{(.*?)\}").expect("valid field pattern"));

/// An entry opening with no `}` anywhere after it.
static INCOMPLETE_ENTRY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"@\w+\{[^}]*$").expect("valid incomplete entry pattern"));

/// Bibliographic extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct BibExtractor;

impl BibExtractor {
    /// Create a new bibliographic extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for BibExtractor {
    fn format(&self) -> Format {
        Format::Bib
    }

    fn extract(&self, text: &str) -> Result<Extraction> {
        let mut document = BibliographicDocument::new();
        let mut pos = 0;

        while let Some(caps) = ENTRY_HEAD.captures_at(text, pos) {
            let (start, head_end) = caps.get(0).map_or((pos, pos), |m| (m.start(), m.end()));

            match find_entry_body(text, head_end) {
                Some((body, entry_end)) => {
                    let mut entry = Entry::new(&caps[1]);
                    for field in FIELD.captures_iter(&text[body]) {
                        entry.fields.insert(field[1].to_string(), field[2].to_string());
                    }
                    document.insert(caps[2].trim(), entry);
                    pos = entry_end;
                }
                // '@' is one byte.
                None => pos = start + 1,
            }

            if pos >= text.len() {
                break;
            }
        }

        log::debug!("BibExtractor: {} entries", document.len());

        let mut extraction = Extraction::new(document);
        if INCOMPLETE_ENTRY.is_match(text) {
            extraction = extraction.with_warning(Warning::IncompleteEntry);
        }

        Ok(extraction)
    }
}

/// Locate the field block of an entry whose head ends at `head_end`.
///
/// The block normally starts after the whitespace following the head. When
/// no closing brace fits from there, shorter whitespace runs are tried, so an
/// entry without fields (`@misc{k,\n}`) still closes on its only brace.
fn find_entry_body(text: &str, head_end: usize) -> Option<(Range<usize>, usize)> {
    let padding = text.get(head_end..)?;
    let ws_end = head_end + padding.len() - padding.trim_start().len();

    std::iter::once(ws_end)
        .chain(
            text[head_end..ws_end]
                .char_indices()
                .rev()
                .map(|(i, _)| head_end + i),
        )
        .find_map(|body_start| {
            find_entry_end(text, body_start)
                .map(|(body_end, entry_end)| (body_start..body_end, entry_end))
        })
}

/// Find the closing brace of an entry whose field block starts at `body_start`.
///
/// Returns the end of the field block (the brace position) and the position
/// after the trailing whitespace, where the next entry may begin. The field
/// block holds at least one character.
fn find_entry_end(text: &str, body_start: usize) -> Option<(usize, usize)> {
    let first = body_start + text.get(body_start..)?.chars().next()?.len_utf8();

    for (offset, _) in text[first..].match_indices('}') {
        let brace = first + offset;
        let after = &text[brace + 1..];
        let rest = after.trim_start();
        if rest.is_empty() || rest.starts_with('@') {
            return Some((brace, text.len() - rest.len()));
        }
    }

    None
}

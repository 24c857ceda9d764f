//! Key/value scraping for object notation.
//!
//! Keys and values are found by two independent scans and then paired by
//! position. This only holds for flat documents: in nested input the n-th key
//! is not necessarily the owner of the n-th value. The pairing is kept as is
//! rather than upgraded to a nesting-aware parser.

use std::sync::LazyLock;

use regex::Regex;

use crate::detect::Format;
use crate::error::{Error, Result};
use crate::model::{Extraction, ObjectDocument, Warning};

use super::Extractor;

/// A quoted key (backslash escapes allowed) followed by `:`.
static KEY_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"\\]*(?:\\.[^"\\]*)*)"\s*:"#).expect("valid key pattern"));

/// A quoted string after `:`, a numeric literal anywhere, or a reserved literal after `:`.
static VALUE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#":\s*"([^"\\]*(?:\\.[^"\\]*)*)"|:?\s*([-+]?\d*\.?\d+(?:[eE][-+]?\d+)?)|:\s*(true|false|null)\b"#,
    )
    .expect("valid value pattern")
});

/// Object-notation extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonExtractor;

impl JsonExtractor {
    /// Create a new object-notation extractor.
    pub fn new() -> Self {
        Self
    }
}

impl Extractor for JsonExtractor {
    fn format(&self) -> Format {
        Format::Json
    }

    fn extract(&self, text: &str) -> Result<Extraction> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput(Format::Json));
        }

        let keys: Vec<&str> = KEY_PATTERN
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();

        // Each match fills exactly one of the three groups; an empty quoted
        // string fills none with text and yields "".
        let values: Vec<&str> = VALUE_PATTERN
            .captures_iter(text)
            .map(|caps| {
                (1..=3)
                    .filter_map(|i| caps.get(i))
                    .map(|m| m.as_str())
                    .find(|s| !s.is_empty())
                    .unwrap_or_default()
            })
            .collect();

        log::debug!(
            "JsonExtractor: {} keys, {} values",
            keys.len(),
            values.len()
        );

        let document: ObjectDocument = keys.iter().copied().zip(values.iter().copied()).collect();
        let mut extraction = Extraction::new(document);

        if keys.len() != values.len() {
            extraction = extraction.with_warning(Warning::KeyValueMismatch {
                keys: keys.len(),
                values: values.len(),
            });
        }

        Ok(extraction)
    }
}

//! # scrapedoc
//!
//! Lenient, pattern-based extraction of semi-structured text.
//!
//! This library scrapes JSON, XML, CSV, BibTeX and Markdown text into
//! structured documents using regular expressions instead of full grammars.
//! It recognizes common surface syntax and reports deviations as warnings
//! rather than failing.
//!
//! ## Quick Start
//!
//! ```
//! use scrapedoc::{extract, render, Format};
//!
//! fn main() -> scrapedoc::Result<()> {
//!     let extraction = extract(r#"<x attr="1">hi</x>"#, Format::Xml)?;
//!     for warning in &extraction.warnings {
//!         eprintln!("warning: {}", warning);
//!     }
//!
//!     let output = render::render(&extraction.document, &render::RenderOptions::default())?;
//!     println!("{}", output);
//!     Ok(())
//! }
//! ```
//!
//! ## Supported notations
//!
//! - **JSON**: flat key/value pairs (values kept as text)
//! - **XML**: elements with attributes and trimmed content
//! - **CSV**: rows with quoted fields and a configurable delimiter
//! - **BibTeX**: entries with braced field values
//! - **Markdown**: headers and links
//!
//! None of these are conformant parsers: nested JSON objects, nested XML
//! elements and nested BibTeX braces are not resolved.

pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_path, Format};
pub use error::{Error, Result};
pub use extract::{
    extract, extract_file, extract_file_auto, extract_with_options, ErrorMode, ExtractOptions,
    Extractor, ExtractorRegistry,
};
pub use model::{
    BibliographicDocument, Document, Element, Entry, Extraction, Heading, Link, MarkdownDocument,
    MarkupDocument, ObjectDocument, TabularDocument, Warning,
};
pub use render::{JsonFormat, RenderOptions};

use std::path::Path;

/// Builder for extracting and rendering documents.
///
/// # Example
///
/// ```
/// use scrapedoc::{Format, Scraper};
///
/// let result = Scraper::new()
///     .with_delimiter(';')
///     .force_json()
///     .compact()
///     .extract("a;b", Format::Csv)?;
///
/// assert_eq!(result.render()?, r#"[["a","b"]]"#);
/// # Ok::<(), scrapedoc::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scraper {
    extract_options: ExtractOptions,
    render_options: RenderOptions,
}

impl Scraper {
    /// Create a new Scraper builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on the first malformation warning.
    pub fn strict(mut self) -> Self {
        self.extract_options = self.extract_options.strict();
        self
    }

    /// Set the tabular field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.extract_options = self.extract_options.with_delimiter(delimiter);
        self
    }

    /// Render tabular documents as JSON too.
    pub fn force_json(mut self) -> Self {
        self.render_options = self.render_options.with_force_json(true);
        self
    }

    /// Render JSON without indentation.
    pub fn compact(mut self) -> Self {
        self.render_options = self.render_options.with_json_format(JsonFormat::Compact);
        self
    }

    /// Set the table column separator.
    pub fn with_column_separator(mut self, separator: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_column_separator(separator);
        self
    }

    /// Extract a document from text.
    pub fn extract(self, text: &str, format: Format) -> Result<ScrapeResult> {
        let extraction = extract_with_options(text, format, &self.extract_options)?;
        Ok(ScrapeResult {
            extraction,
            render_options: self.render_options,
        })
    }

    /// Read and extract a UTF-8 file.
    pub fn extract_file<P: AsRef<Path>>(self, path: P, format: Format) -> Result<ScrapeResult> {
        let extraction = extract_file(path, format, &self.extract_options)?;
        Ok(ScrapeResult {
            extraction,
            render_options: self.render_options,
        })
    }
}

/// Result of one extraction, ready for rendering.
pub struct ScrapeResult {
    /// The document and its warnings
    pub extraction: Extraction,
    /// Render options to use
    render_options: RenderOptions,
}

impl ScrapeResult {
    /// Render the document for display.
    pub fn render(&self) -> Result<String> {
        render::render(&self.extraction.document, &self.render_options)
    }

    /// Convert the document to JSON regardless of its shape.
    pub fn to_json(&self) -> Result<String> {
        render::to_json(&self.extraction.document, self.render_options.json_format)
    }

    /// Warnings raised during extraction.
    pub fn warnings(&self) -> &[Warning] {
        &self.extraction.warnings
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.extraction.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scraper_builder() {
        let scraper = Scraper::new().strict().with_delimiter('\t').force_json();

        assert_eq!(scraper.extract_options.error_mode, ErrorMode::Strict);
        assert_eq!(scraper.extract_options.delimiter, '\t');
        assert!(scraper.render_options.force_json);
    }

    #[test]
    fn test_scraper_builder_default() {
        let scraper = Scraper::default();
        assert_eq!(scraper.extract_options.error_mode, ErrorMode::Lenient);
        assert!(!scraper.render_options.force_json);
        assert_eq!(scraper.render_options.json_format, JsonFormat::Pretty);
    }

    #[test]
    fn test_scrape_result_renders_table_text() {
        let result = Scraper::new()
            .with_column_separator(",")
            .extract("a,\"b,c\",d", Format::Csv)
            .unwrap();

        assert!(result.warnings().is_empty());
        assert_eq!(result.render().unwrap(), "a,b,c,d");
        assert_eq!(result.to_json().unwrap().matches('\n').count(), 6);
    }

    #[test]
    fn test_scraper_empty_input_errors() {
        let result = Scraper::new().extract("  ", Format::Json);
        assert!(matches!(result, Err(Error::EmptyInput(Format::Json))));
    }

    #[test]
    fn test_scraper_strict_surfaces_warning() {
        let result = Scraper::new().strict().extract("<a>open", Format::Xml);
        assert!(matches!(result, Err(Error::Malformed(Warning::UnclosedTag))));
    }
}

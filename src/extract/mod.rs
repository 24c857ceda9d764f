//! Extractors and the dispatcher that routes text to them.
//!
//! Each supported notation has one stateless extractor implementing
//! [`Extractor`]. The free functions [`extract`] and [`extract_with_options`]
//! route by [`Format`]; [`ExtractorRegistry`] adds lookup by name and file
//! extension, and accepts custom extractors.
//!
//! # Example
//!
//! ```
//! use scrapedoc::extract::{ExtractOptions, ExtractorRegistry};
//!
//! fn main() -> scrapedoc::Result<()> {
//!     let registry = ExtractorRegistry::with_defaults(&ExtractOptions::default())?;
//!
//!     let extraction = registry.extract_named("csv", "a,\"b,c\",d")?;
//!     assert_eq!(extraction.document.len(), 1);
//!     Ok(())
//! }
//! ```

mod bib;
mod csv;
mod json;
mod markdown;
mod options;
mod xml;

pub use bib::BibExtractor;
pub use csv::CsvExtractor;
pub use json::JsonExtractor;
pub use markdown::MarkdownExtractor;
pub use options::{ErrorMode, ExtractOptions, DEFAULT_DELIMITER};
pub use xml::XmlExtractor;

use crate::detect::{detect_format_from_path, Format};
use crate::error::{Error, Result};
use crate::model::Extraction;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Trait for notation extractors.
///
/// Implementations hold no per-call state: the same input always yields the
/// same document and warnings.
pub trait Extractor: Send + Sync {
    /// The notation this extractor reads.
    fn format(&self) -> Format;

    /// Get the name of this extractor.
    fn name(&self) -> &str {
        self.format().name()
    }

    /// Get the supported file extensions for this extractor.
    ///
    /// Extensions should be lowercase without the leading dot (e.g., `["csv"]`).
    fn supported_extensions(&self) -> &[&str] {
        self.format().extensions()
    }

    /// Extract a document from raw text.
    fn extract(&self, text: &str) -> Result<Extraction>;

    /// Check if this extractor supports the given extension.
    fn supports_extension(&self, ext: &str) -> bool {
        let ext_lower = ext.to_lowercase();
        self.supported_extensions().iter().any(|e| *e == ext_lower)
    }
}

/// Build the built-in extractor for a format.
pub fn extractor_for(format: Format, options: &ExtractOptions) -> Result<Arc<dyn Extractor>> {
    options.validate()?;

    let extractor: Arc<dyn Extractor> = match format {
        Format::Json => Arc::new(JsonExtractor::new()),
        Format::Xml => Arc::new(XmlExtractor::new()),
        Format::Csv => Arc::new(CsvExtractor::with_delimiter(options.delimiter)?),
        Format::Bib => Arc::new(BibExtractor::new()),
        Format::Md => Arc::new(MarkdownExtractor::new()),
    };
    Ok(extractor)
}

/// Extract a document from text with default options.
///
/// # Example
///
/// ```
/// use scrapedoc::{extract, Format};
///
/// let extraction = extract("# Title\n[text](url)", Format::Md).unwrap();
/// let doc = extraction.document.as_markdown().unwrap();
/// assert_eq!(doc.headers[0].title, "Title");
/// ```
pub fn extract(text: &str, format: Format) -> Result<Extraction> {
    extract_with_options(text, format, &ExtractOptions::default())
}

/// Extract a document from text with custom options.
pub fn extract_with_options(
    text: &str,
    format: Format,
    options: &ExtractOptions,
) -> Result<Extraction> {
    options.validate()?;

    let extraction = match format {
        Format::Json => JsonExtractor::new().extract(text),
        Format::Xml => XmlExtractor::new().extract(text),
        Format::Csv => CsvExtractor::with_delimiter(options.delimiter)?.extract(text),
        Format::Bib => BibExtractor::new().extract(text),
        Format::Md => MarkdownExtractor::new().extract(text),
    }?;

    options.error_mode.apply(extraction)
}

/// Registry for extractors.
///
/// The registry maps names and file extensions to extractors and applies
/// one [`ErrorMode`] to every extraction it runs.
pub struct ExtractorRegistry {
    extractors: HashMap<String, Arc<dyn Extractor>>,
    by_name: HashMap<String, Arc<dyn Extractor>>,
    error_mode: ErrorMode,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            by_name: HashMap::new(),
            error_mode: ErrorMode::default(),
        }
    }

    /// Create a registry holding the five built-in extractors.
    pub fn with_defaults(options: &ExtractOptions) -> Result<Self> {
        let mut registry = Self::new().with_error_mode(options.error_mode);
        for format in Format::ALL {
            registry.register(extractor_for(format, options)?);
        }
        Ok(registry)
    }

    /// Set the error mode applied to every extraction.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Register an extractor.
    ///
    /// The extractor will be registered for all its supported extensions.
    pub fn register(&mut self, extractor: Arc<dyn Extractor>) {
        for ext in extractor.supported_extensions() {
            self.extractors
                .insert(ext.to_lowercase(), extractor.clone());
        }
        self.by_name
            .insert(extractor.name().to_lowercase(), extractor);
    }

    /// Get an extractor by file extension.
    pub fn get_by_extension(&self, ext: &str) -> Option<Arc<dyn Extractor>> {
        self.extractors.get(&ext.to_lowercase()).cloned()
    }

    /// Get an extractor by name.
    pub fn get_by_name(&self, name: &str) -> Option<Arc<dyn Extractor>> {
        self.by_name.get(&name.to_lowercase()).cloned()
    }

    /// Check if an extension is supported.
    pub fn supports(&self, ext: &str) -> bool {
        self.extractors.contains_key(&ext.to_lowercase())
    }

    /// Get all supported extensions.
    pub fn supported_extensions(&self) -> Vec<&str> {
        self.extractors.keys().map(|s| s.as_str()).collect()
    }

    /// Extract text with the extractor registered under `name`.
    pub fn extract_named(&self, name: &str, text: &str) -> Result<Extraction> {
        let extractor = self
            .get_by_name(name)
            .ok_or_else(|| Error::UnknownFormat(name.to_string()))?;

        self.error_mode.apply(extractor.extract(text)?)
    }

    /// Extract a file using the extractor registered for its extension.
    pub fn extract_file(&self, path: &Path) -> Result<Extraction> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| Error::UnknownFormat(format!("{} has no extension", path.display())))?;

        let extractor = self
            .get_by_extension(ext)
            .ok_or_else(|| Error::UnknownFormat(ext.to_string()))?;

        let text = std::fs::read_to_string(path)?;
        self.error_mode.apply(extractor.extract(&text)?)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a UTF-8 file and extract it as the given format.
pub fn extract_file<P: AsRef<Path>>(
    path: P,
    format: Format,
    options: &ExtractOptions,
) -> Result<Extraction> {
    let text = std::fs::read_to_string(path)?;
    extract_with_options(&text, format, options)
}

/// Read a UTF-8 file and extract it, detecting the format from its extension.
pub fn extract_file_auto<P: AsRef<Path>>(path: P, options: &ExtractOptions) -> Result<Extraction> {
    let path = path.as_ref();
    let format = detect_format_from_path(path)?;
    extract_file(path, format, options)
}

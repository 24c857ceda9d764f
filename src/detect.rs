//! Source notation identification.

use crate::error::{Error, Result};
use serde::Serialize;
use std::path::Path;
use std::str::FromStr;

/// Supported source notations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Object notation (key/value scraping)
    Json,
    /// Markup (tag/attribute scraping)
    Xml,
    /// Tabular rows with quoted fields
    Csv,
    /// Bibliographic entries
    Bib,
    /// Lightweight markup (headers and links)
    Md,
}

impl Format {
    /// All formats, in dispatch order.
    pub const ALL: [Format; 5] = [Format::Json, Format::Xml, Format::Csv, Format::Bib, Format::Md];

    /// Canonical short name (the CLI `--type` value).
    pub fn name(&self) -> &'static str {
        match self {
            Format::Json => "json",
            Format::Xml => "xml",
            Format::Csv => "csv",
            Format::Bib => "bib",
            Format::Md => "md",
        }
    }

    /// File extensions associated with this format, lowercase, without the dot.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Format::Json => &["json"],
            Format::Xml => &["xml"],
            Format::Csv => &["csv"],
            Format::Bib => &["bib"],
            Format::Md => &["md", "markdown"],
        }
    }

    /// Look up a format by file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Format> {
        let ext = ext.to_lowercase();
        Format::ALL
            .into_iter()
            .find(|format| format.extensions().contains(&ext.as_str()))
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "xml" => Ok(Format::Xml),
            "csv" => Ok(Format::Csv),
            "bib" | "bibtex" => Ok(Format::Bib),
            "md" | "markdown" => Ok(Format::Md),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

/// Detect the source format from a file path's extension.
///
/// # Example
/// ```
/// use scrapedoc::detect::{detect_format_from_path, Format};
///
/// let format = detect_format_from_path("refs.BIB").unwrap();
/// assert_eq!(format, Format::Bib);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<Format> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| Error::UnknownFormat(format!("{} has no extension", path.display())))?;

    Format::from_extension(ext).ok_or_else(|| Error::UnknownFormat(ext.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_names_and_aliases() {
        assert_eq!("json".parse::<Format>().unwrap(), Format::Json);
        assert_eq!("XML".parse::<Format>().unwrap(), Format::Xml);
        assert_eq!("bibtex".parse::<Format>().unwrap(), Format::Bib);
        assert_eq!("Markdown".parse::<Format>().unwrap(), Format::Md);
        assert!(matches!(
            "yaml".parse::<Format>(),
            Err(Error::UnknownFormat(_))
        ));
    }

    #[test]
    fn test_name_round_trips_through_from_str() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().unwrap(), format);
        }
    }

    #[test]
    fn test_serializes_as_name() {
        for format in Format::ALL {
            let json = serde_json::to_string(&format).unwrap();
            assert_eq!(json, format!("\"{}\"", format.name()));
        }
    }

    #[test]
    fn test_detect_from_path() {
        assert_eq!(detect_format_from_path("a/b/data.csv").unwrap(), Format::Csv);
        assert_eq!(detect_format_from_path("README.markdown").unwrap(), Format::Md);
        assert_eq!(detect_format_from_path("feed.XML").unwrap(), Format::Xml);
    }

    #[test]
    fn test_detect_unknown_extension() {
        assert!(matches!(
            detect_format_from_path("notes.txt"),
            Err(Error::UnknownFormat(_))
        ));
        assert!(matches!(
            detect_format_from_path("Makefile"),
            Err(Error::UnknownFormat(_))
        ));
    }
}

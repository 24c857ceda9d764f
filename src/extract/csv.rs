//! Row scraping for delimiter-separated text.

use regex::Regex;

use crate::detect::Format;
use crate::error::{Error, Result};
use crate::model::{Extraction, TabularDocument, Warning};

use super::options::{validate_delimiter, DEFAULT_DELIMITER};
use super::Extractor;

/// Tabular extractor.
///
/// Each non-blank line is one row. A field is either quoted (a doubled quote
/// stands for one literal quote) or runs up to the next delimiter.
#[derive(Debug, Clone)]
pub struct CsvExtractor {
    delimiter: char,
    field_pattern: Regex,
}

impl CsvExtractor {
    /// Create a tabular extractor with the default `,` delimiter.
    pub fn new() -> Result<Self> {
        Self::with_delimiter(DEFAULT_DELIMITER)
    }

    /// Create a tabular extractor with a custom delimiter.
    pub fn with_delimiter(delimiter: char) -> Result<Self> {
        validate_delimiter(delimiter)?;

        let d = regex::escape(&delimiter.to_string());
        let field_pattern = Regex::new(&format!(
            r#"^(?:"([^"]*(?:""[^"]*)*)"|([^{d}]*))({d}|$)"#
        ))?;

        Ok(Self {
            delimiter,
            field_pattern,
        })
    }

    /// The field delimiter in use.
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Split one line into fields.
    fn split_line(&self, line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut rest = line;

        while let Some(caps) = self.field_pattern.captures(rest) {
            let field = match caps.get(1) {
                Some(quoted) => quoted.as_str().replace("\"\"", "\""),
                None => caps.get(2).map_or("", |m| m.as_str()).to_string(),
            };
            fields.push(field);

            let consumed = caps.get(0).map_or(rest.len(), |m| m.end());
            let delimited = caps.get(3).is_some_and(|m| !m.is_empty());
            if !delimited {
                break;
            }
            rest = &rest[consumed..];
        }

        fields
    }
}

impl Extractor for CsvExtractor {
    fn format(&self) -> Format {
        Format::Csv
    }

    fn extract(&self, text: &str) -> Result<Extraction> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput(Format::Csv));
        }

        let mut document = TabularDocument::new();
        for line in text.lines().filter(|line| !line.trim().is_empty()) {
            document.add_row(self.split_line(line));
        }

        log::debug!(
            "CsvExtractor: {} rows with delimiter {:?}",
            document.row_count(),
            self.delimiter
        );

        let lengths = document.row_lengths();
        let mut extraction = Extraction::new(document);
        if lengths.len() > 1 {
            extraction = extraction.with_warning(Warning::InconsistentColumns(lengths));
        }

        Ok(extraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn rows(extraction: &Extraction) -> &[Vec<String>] {
        &extraction.document.as_tabular().unwrap().rows
    }

    fn extract(text: &str) -> Extraction {
        CsvExtractor::new().unwrap().extract(text).unwrap()
    }

    #[test]
    fn test_quoted_field_keeps_delimiter() {
        let extraction = extract(r#"a,"b,c",d"#);
        assert_eq!(rows(&extraction), &[vec!["a", "b,c", "d"]]);
        assert!(!extraction.has_warnings());
    }

    #[test]
    fn test_doubled_quote_unescaped() {
        let extraction = extract(r#""say ""hi""",x"#);
        assert_eq!(rows(&extraction), &[vec![r#"say "hi""#, "x"]]);
    }

    #[test]
    fn test_empty_fields() {
        let extraction = extract("a,,c\nx,y,");
        assert_eq!(
            rows(&extraction),
            &[vec!["a", "", "c"], vec!["x", "y", ""]]
        );
        assert!(!extraction.has_warnings());
    }

    #[test]
    fn test_blank_lines_skipped() {
        let extraction = extract("a,b\n\n   \nc,d\r\n");
        assert_eq!(rows(&extraction), &[vec!["a", "b"], vec!["c", "d"]]);
    }

    #[test]
    fn test_inconsistent_row_lengths_warn() {
        let extraction = extract("a,b\na,b,c");
        assert_eq!(rows(&extraction).len(), 2);
        assert_eq!(
            extraction.warnings,
            vec![Warning::InconsistentColumns(BTreeSet::from([2, 3]))]
        );
        assert_eq!(
            extraction.warnings[0].to_string(),
            "inconsistent number of columns: {2, 3}"
        );
    }

    #[test]
    fn test_custom_delimiter() {
        let extractor = CsvExtractor::with_delimiter(';').unwrap();
        let extraction = extractor.extract("a;\"b;c\";d\n1,5;2").unwrap();
        assert_eq!(
            rows(&extraction),
            &[vec!["a", "b;c", "d"], vec!["1,5", "2"]]
        );
    }

    #[test]
    fn test_regex_metacharacter_delimiter() {
        let extractor = CsvExtractor::with_delimiter('|').unwrap();
        let extraction = extractor.extract("a|b|c").unwrap();
        assert_eq!(rows(&extraction), &[vec!["a", "b", "c"]]);
    }

    #[test]
    fn test_invalid_delimiter() {
        assert!(matches!(
            CsvExtractor::with_delimiter('"'),
            Err(Error::InvalidOption(_))
        ));
    }

    #[test]
    fn test_empty_input() {
        let extractor = CsvExtractor::new().unwrap();
        assert!(matches!(
            extractor.extract(""),
            Err(Error::EmptyInput(Format::Csv))
        ));
        assert!(matches!(
            extractor.extract("\n  \n"),
            Err(Error::EmptyInput(Format::Csv))
        ));
    }
}

//! Extraction options and configuration.

use crate::error::{Error, Result};
use crate::model::Extraction;

/// Default tabular field delimiter.
pub const DEFAULT_DELIMITER: char = ',';

/// Options for extracting documents.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Warning handling mode
    pub error_mode: ErrorMode,

    /// Field delimiter for tabular input
    pub delimiter: char,
}

impl ExtractOptions {
    /// Create new extract options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Treat the first malformation warning as an error.
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Set the tabular field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Check that the options can drive an extractor.
    pub fn validate(&self) -> Result<()> {
        validate_delimiter(self.delimiter)
    }
}

/// Reject delimiters that collide with quoting or line splitting.
pub(crate) fn validate_delimiter(delimiter: char) -> Result<()> {
    if matches!(delimiter, '"' | '\n' | '\r') {
        return Err(Error::InvalidOption(format!(
            "{:?} cannot be used as a field delimiter",
            delimiter
        )));
    }
    Ok(())
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

/// How malformation warnings are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Return the document with its warnings
    #[default]
    Lenient,
    /// Fail with the first warning
    Strict,
}

impl ErrorMode {
    /// Apply this mode to a finished extraction.
    pub fn apply(self, extraction: Extraction) -> Result<Extraction> {
        match self {
            ErrorMode::Lenient => Ok(extraction),
            ErrorMode::Strict => match extraction.warnings.into_iter().next() {
                Some(warning) => Err(Error::Malformed(warning)),
                None => Ok(Extraction::new(extraction.document)),
            },
        }
    }
}

//! Error types for scrapedoc library.

use std::io;
use thiserror::Error;

use crate::detect::Format;
use crate::model::Warning;

/// Result type alias for scrapedoc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading source files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The input is empty or contains only whitespace.
    #[error("empty or invalid {0} input")]
    EmptyInput(Format),

    /// The format name or file extension is not recognized.
    #[error("Unknown format: {0}")]
    UnknownFormat(String),

    /// An extraction option has an unusable value.
    #[error("Invalid option: {0}")]
    InvalidOption(String),

    /// A malformation warning raised in strict mode.
    #[error("Malformed input: {0}")]
    Malformed(Warning),

    /// A pattern failed to compile.
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Error during rendering (JSON, table text).
    #[error("Rendering error: {0}")]
    Render(String),
}

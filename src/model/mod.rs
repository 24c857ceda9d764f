//! Document model types for extracted content.
//!
//! Every extractor produces one of the document shapes defined here. The
//! values own their text: nothing borrows from the input buffer once an
//! extraction call returns.

mod document;
mod entry;
mod markup;
mod object;
mod outline;
mod table;
mod warning;

pub use document::{Document, Extraction};
pub use entry::{BibliographicDocument, Entry};
pub use markup::{Element, MarkupDocument};
pub use object::ObjectDocument;
pub use outline::{Heading, Link, MarkdownDocument};
pub use table::TabularDocument;
pub use warning::Warning;

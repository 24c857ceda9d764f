//! Malformation warnings.

use serde::{Serialize, Serializer};
use std::collections::BTreeSet;
use std::fmt;

/// A non-fatal diagnostic describing a structural anomaly in the input.
///
/// Warnings never abort extraction; they travel next to the document in
/// [`Extraction`](super::Extraction).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// Object notation produced a different number of keys and values.
    KeyValueMismatch {
        /// Number of keys found
        keys: usize,
        /// Number of values found
        values: usize,
    },

    /// Markup contains an opening tag with no close.
    UnclosedTag,

    /// Tabular rows do not all have the same number of fields.
    InconsistentColumns(BTreeSet<usize>),

    /// A bibliographic entry is missing its closing brace.
    IncompleteEntry,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::KeyValueMismatch { keys, values } => write!(
                f,
                "possible malformation: found {} keys but {} values",
                keys, values
            ),
            Warning::UnclosedTag => f.write_str("some tags are not closed properly"),
            Warning::InconsistentColumns(lengths) => {
                let lengths = lengths
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "inconsistent number of columns: {{{}}}", lengths)
            }
            Warning::IncompleteEntry => f.write_str("incomplete entry: missing closing brace"),
        }
    }
}

impl Serialize for Warning {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

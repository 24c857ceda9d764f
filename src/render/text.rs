//! Plain text rendering for tabular documents.

use crate::model::TabularDocument;

/// Render rows as lines of fields joined by `separator`.
pub fn to_table(table: &TabularDocument, separator: &str) -> String {
    table
        .rows
        .iter()
        .map(|row| row.join(separator))
        .collect::<Vec<_>>()
        .join("\n")
}

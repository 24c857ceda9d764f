//! Tabular documents.

use serde::Serialize;
use std::collections::BTreeSet;

/// Rows of fields, one row per non-blank source line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TabularDocument {
    /// Rows in source order
    pub rows: Vec<Vec<String>>,
}

impl TabularDocument {
    /// Create a new empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct lengths of the non-empty rows.
    pub fn row_lengths(&self) -> BTreeSet<usize> {
        self.rows
            .iter()
            .filter(|row| !row.is_empty())
            .map(Vec::len)
            .collect()
    }

    /// Check if every non-empty row has the same number of fields.
    pub fn is_rectangular(&self) -> bool {
        self.row_lengths().len() <= 1
    }
}

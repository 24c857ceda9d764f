//! Rendering module for converting documents to output text.

mod json;
mod options;
mod text;

pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_COLUMN_SEPARATOR};
pub use text::to_table;

use crate::error::Result;
use crate::model::Document;

/// Render a document for display.
///
/// Tabular documents become table text unless `force_json` is set; all other
/// documents become JSON.
pub fn render(doc: &Document, options: &RenderOptions) -> Result<String> {
    match doc {
        Document::Tabular(table) if !options.force_json => {
            Ok(to_table(table, &options.column_separator))
        }
        _ => to_json(doc, options.json_format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TabularDocument;

    fn table() -> Document {
        let mut table = TabularDocument::new();
        table.add_row(vec!["a".into(), "b".into()]);
        table.into()
    }

    #[test]
    fn test_render_table_as_text() {
        let output = render(&table(), &RenderOptions::default()).unwrap();
        assert_eq!(output, "a | b");
    }

    #[test]
    fn test_render_table_as_json_when_forced() {
        let options = RenderOptions::new()
            .with_force_json(true)
            .with_json_format(JsonFormat::Compact);
        let output = render(&table(), &options).unwrap();
        assert_eq!(output, r#"[["a","b"]]"#);
    }
}

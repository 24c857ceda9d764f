//! Rendering options and configuration.

use super::JsonFormat;

/// Default separator placed between fields of a rendered table row.
pub const DEFAULT_COLUMN_SEPARATOR: &str = " | ";

/// Options for rendering extracted documents.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Render tabular documents as JSON instead of table text
    pub force_json: bool,

    /// JSON layout
    pub json_format: JsonFormat,

    /// Separator placed between fields of a table row
    pub column_separator: String,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render every document as JSON, tables included.
    pub fn with_force_json(mut self, force: bool) -> Self {
        self.force_json = force;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Set the table column separator.
    pub fn with_column_separator(mut self, separator: impl Into<String>) -> Self {
        self.column_separator = separator.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            force_json: false,
            json_format: JsonFormat::Pretty,
            column_separator: DEFAULT_COLUMN_SEPARATOR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_force_json(true)
            .with_json_format(JsonFormat::Compact)
            .with_column_separator(",");

        assert!(options.force_json);
        assert_eq!(options.json_format, JsonFormat::Compact);
        assert_eq!(options.column_separator, ",");
    }

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert!(!options.force_json);
        assert_eq!(options.json_format, JsonFormat::Pretty);
        assert_eq!(options.column_separator, " | ");
    }
}

//! Formatter configuration, as found in `.prettierrc` or the `prettierConfig`
//! key of a config layer.
//!
//! Only the options the markdown formatter honours are modelled; any other
//! prettier option in the file is ignored.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FormatterConfig {
    /// Columns per indentation level.
    pub tab_width: usize,
    /// Indent with tabs instead of spaces.
    pub use_tabs: bool,
    pub end_of_line: EndOfLine,
}

impl Default for FormatterConfig {
    fn default() -> Self {
        Self {
            tab_width: 2,
            use_tabs: false,
            end_of_line: EndOfLine::Lf,
        }
    }
}

/// Line terminator written by the formatter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    #[default]
    Lf,
    Crlf,
    /// Keep whatever the first line of the input uses.
    Auto,
}

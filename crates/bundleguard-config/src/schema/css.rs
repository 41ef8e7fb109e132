use serde::{Deserialize, Serialize};

/// CSS reformatter options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CssConfig {
    /// One indentation level. Spaces or tabs only, at most 8 characters.
    pub indent: String,
}

impl Default for CssConfig {
    fn default() -> Self {
        Self {
            indent: "  ".into(),
        }
    }
}

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;

/// How the cursor setters treat indices that do not address an existing answer group or rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CursorPolicy {
    /// Any integer is accepted and read back unchanged. Lets the UI point at a
    /// group that is about to be created.
    #[default]
    Permissive,
    /// Only `-1` or an existing index is accepted.
    Strict,
}

/// Behavioural settings for a [`ResponsesEditor`](crate::editor::ResponsesEditor).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    #[serde(alias = "cursorPolicy")]
    pub cursor_policy: CursorPolicy,
}

impl EditorConfig {
    pub fn strict() -> Self {
        Self {
            cursor_policy: CursorPolicy::Strict,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::JsonParseError(e.to_string()))
    }

    /// Load the configuration from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&content)
    }
}

use crate::error::ConfigError;
use ahash::AHashMap;
use serde::Deserialize;
use std::fs;

/// How an interaction is laid out relative to the state content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayMode {
    Inline,
    Supplemental,
}

/// Per-interaction-type metadata consumed by rendering collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InteractionSpec {
    pub display_mode: DisplayMode,
    #[serde(default)]
    pub is_terminal: bool,
}

/// Metadata for every known interaction type, keyed by interaction id (e.g. `"TextInput"`).
#[derive(Debug, Clone, Default)]
pub struct InteractionRegistry {
    specs: AHashMap<String, InteractionSpec>,
}

impl InteractionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let specs =
            serde_json::from_str(json).map_err(|e| ConfigError::JsonParseError(e.to_string()))?;
        Ok(Self { specs })
    }

    /// Load the registry from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    pub fn register(&mut self, interaction_id: impl Into<String>, spec: InteractionSpec) {
        self.specs.insert(interaction_id.into(), spec);
    }

    pub fn get(&self, interaction_id: &str) -> Option<&InteractionSpec> {
        self.specs.get(interaction_id)
    }

    /// Unknown interactions are treated as non-terminal.
    pub fn is_terminal(&self, interaction_id: &str) -> bool {
        self.get(interaction_id).is_some_and(|spec| spec.is_terminal)
    }

    pub fn len(&self) -> usize {
        self.specs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}

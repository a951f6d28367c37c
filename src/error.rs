use thiserror::Error;

/// Errors raised by the responses editor when a caller addresses state that does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("Answer group index {index} is out of range for {len} answer group(s)")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Rule index {index} is out of range for {len} rule(s) in the active answer group")]
    RuleIndexOutOfRange { index: i64, len: usize },

    #[error("No answer group is currently active")]
    NoActiveSelection,
}

/// Errors that can occur while loading a content snapshot or converting it into editor state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("Failed to parse states JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to read states file: {0}")]
    Io(String),

    #[error("State '{0}' not found in the loaded content")]
    StateNotFound(String),

    #[error("State '{state_name}' has no default outcome and cannot be edited")]
    MissingDefaultOutcome { state_name: String },
}

/// Errors that can occur while loading editor or registry configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse configuration JSON: {0}")]
    JsonParseError(String),

    #[error("Failed to read configuration file: {0}")]
    Io(String),
}

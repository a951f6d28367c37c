//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the kaito crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use kaito::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let states = ExplorationStates::from_file("path/to/states.json")?;
//! let registry = InteractionRegistry::from_file("path/to/interaction_specs.json")?;
//!
//! let mut session = EditorSession::new(
//!     states,
//!     registry,
//!     EditorConfig::default(),
//!     ChangeList::default(),
//!     "Introduction",
//! )?;
//!
//! session.responses_mut().change_active_answer_group_index(0)?;
//! session
//!     .responses_mut()
//!     .update_active_answer_group(AnswerGroupPatch::new().dest("End"))?;
//!
//! println!("{}", session.responses().autosave().to_json()?);
//! # Ok(())
//! # }
//! ```

// Editor state
pub use crate::config::{CursorPolicy, EditorConfig};
pub use crate::editor::{EditorCursor, NO_ACTIVE_ANSWER_GROUP, ResponsesEditor};
pub use crate::session::EditorSession;

// Content model
pub use crate::interaction::{
    AnswerChoice, AnswerGroup, AnswerGroupPatch, Outcome, OutcomePatch, ParamChange, Rule,
    SubtitledHtml,
};
pub use crate::snapshot::{ExplorationStates, IntoSnapshot, ResponsesSnapshot, State};

// Collaborators
pub use crate::autosave::{AutosaveSink, ChangeList, ChangeListEntry, NoopAutosave, ResponsesChange};
pub use crate::registry::{DisplayMode, InteractionRegistry, InteractionSpec};

// Error types
pub use crate::error::{ConfigError, EditorError, SnapshotError};

// Formatting
pub use crate::summary::ResponsesFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

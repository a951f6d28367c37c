//! The seam between the responses editor and whoever persists its edits.
//!
//! Every content mutation in [`ResponsesEditor`](crate::editor::ResponsesEditor)
//! hands a [`ResponsesChange`] to an [`AutosaveSink`]. The sink decides what
//! "dirty" means: [`ChangeList`] accumulates `edit_state_property` commands the
//! way the exploration autosave endpoint expects them, [`NoopAutosave`] drops
//! them, and any `FnMut(&ResponsesChange)` closure can observe them directly.

use crate::interaction::{AnswerGroup, Outcome};
use serde::Serialize;
use serde_json::Value;

/// The new value of one edited state property.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "property_name", content = "new_value", rename_all = "snake_case")]
pub enum ResponsesChange {
    AnswerGroups(Vec<AnswerGroup>),
    DefaultOutcome(Outcome),
    ConfirmedUnclassifiedAnswers(Vec<Value>),
}

impl ResponsesChange {
    /// The state property this change rewrites.
    pub fn property_name(&self) -> &'static str {
        match self {
            ResponsesChange::AnswerGroups(_) => "answer_groups",
            ResponsesChange::DefaultOutcome(_) => "default_outcome",
            ResponsesChange::ConfirmedUnclassifiedAnswers(_) => "confirmed_unclassified_answers",
        }
    }
}

/// Receives a notification each time the edited content changes.
pub trait AutosaveSink {
    fn autosave_change_list(&mut self, change: &ResponsesChange);

    /// Called when the session starts editing a different state.
    fn active_state_changed(&mut self, _state_name: &str) {}
}

impl<F> AutosaveSink for F
where
    F: FnMut(&ResponsesChange),
{
    fn autosave_change_list(&mut self, change: &ResponsesChange) {
        self(change)
    }
}

/// A sink that ignores every change.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopAutosave;

impl AutosaveSink for NoopAutosave {
    fn autosave_change_list(&mut self, _change: &ResponsesChange) {}
}

/// One `edit_state_property` command, ready to be sent to the autosave endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeListEntry {
    pub cmd: &'static str,
    pub state_name: String,
    #[serde(flatten)]
    pub change: ResponsesChange,
}

/// Accumulates the change list of the content unit currently being edited.
#[derive(Debug, Clone, Default)]
pub struct ChangeList {
    state_name: String,
    entries: Vec<ChangeListEntry>,
}

impl ChangeList {
    pub fn for_state(state_name: impl Into<String>) -> Self {
        Self {
            state_name: state_name.into(),
            entries: Vec::new(),
        }
    }

    /// Changes recorded from now on are attributed to `state_name`.
    pub fn set_state_name(&mut self, state_name: impl Into<String>) {
        self.state_name = state_name.into();
    }

    pub fn state_name(&self) -> &str {
        &self.state_name
    }

    pub fn entries(&self) -> &[ChangeListEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hands over the accumulated entries, e.g. once they have been persisted.
    pub fn take(&mut self) -> Vec<ChangeListEntry> {
        std::mem::take(&mut self.entries)
    }

    /// Serializes the accumulated entries as a JSON array.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&self.entries)
    }
}

impl AutosaveSink for ChangeList {
    fn autosave_change_list(&mut self, change: &ResponsesChange) {
        self.entries.push(ChangeListEntry {
            cmd: "edit_state_property",
            state_name: self.state_name.clone(),
            change: change.clone(),
        });
    }

    fn active_state_changed(&mut self, state_name: &str) {
        self.set_state_name(state_name);
    }
}

use super::conversion::ResponsesSnapshot;
use crate::error::SnapshotError;
use crate::interaction::{AnswerGroup, Outcome, ParamChange, SubtitledHtml};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;

/// The interaction attached to a state, in the content store's JSON shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Interaction {
    pub id: Option<String>,
    #[serde(default)]
    pub answer_groups: Vec<AnswerGroup>,
    #[serde(default)]
    pub default_outcome: Option<Outcome>,
    #[serde(default)]
    pub hints: Vec<Value>,
    #[serde(default)]
    pub confirmed_unclassified_answers: Vec<Value>,
}

/// One content unit of an exploration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct State {
    /// Filled in from the key the state is stored under.
    #[serde(skip)]
    pub name: String,
    pub content: SubtitledHtml,
    pub interaction: Interaction,
    #[serde(default)]
    pub param_changes: Vec<ParamChange>,
}

/// All states of an exploration, keyed by state name.
#[derive(Debug, Clone, Default)]
pub struct ExplorationStates {
    states: AHashMap<String, State>,
}

impl ExplorationStates {
    /// Parses a `{ "<state name>": { ... } }` JSON document.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let raw: AHashMap<String, State> =
            serde_json::from_str(json).map_err(|e| SnapshotError::JsonParseError(e.to_string()))?;

        let states = raw
            .into_iter()
            .map(|(name, mut state)| {
                state.name = name.clone();
                (name, state)
            })
            .collect();
        Ok(Self { states })
    }

    /// Load the states from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, SnapshotError> {
        let content = fs::read_to_string(path).map_err(|e| SnapshotError::Io(e.to_string()))?;
        Self::from_json(&content)
    }

    pub fn state(&self, name: &str) -> Result<&State, SnapshotError> {
        self.states
            .get(name)
            .ok_or_else(|| SnapshotError::StateNotFound(name.to_string()))
    }

    /// Writes edited responses back into the named state.
    pub fn store_responses(
        &mut self,
        name: &str,
        responses: ResponsesSnapshot,
    ) -> Result<(), SnapshotError> {
        let state = self
            .states
            .get_mut(name)
            .ok_or_else(|| SnapshotError::StateNotFound(name.to_string()))?;

        state.interaction.answer_groups = responses.answer_groups;
        state.interaction.default_outcome = Some(responses.default_outcome);
        state.interaction.confirmed_unclassified_answers = responses.confirmed_unclassified_answers;
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// State names in alphabetical order.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.states.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

use super::states::State;
use crate::error::SnapshotError;
use crate::interaction::{AnswerGroup, Outcome};
use serde_json::Value;

/// Everything the responses editor is seeded with when a content unit becomes active.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponsesSnapshot {
    pub answer_groups: Vec<AnswerGroup>,
    pub default_outcome: Outcome,
    pub confirmed_unclassified_answers: Vec<Value>,
}

impl ResponsesSnapshot {
    pub fn new(
        answer_groups: Vec<AnswerGroup>,
        default_outcome: Outcome,
        confirmed_unclassified_answers: Vec<Value>,
    ) -> Self {
        Self {
            answer_groups,
            default_outcome,
            confirmed_unclassified_answers,
        }
    }
}

/// A trait for content models that can seed a [`ResponsesEditor`](crate::editor::ResponsesEditor).
///
/// Implement it on your own loaded state representation to plug a different
/// content store into the editor.
pub trait IntoSnapshot {
    fn into_snapshot(self) -> Result<ResponsesSnapshot, SnapshotError>;
}

impl IntoSnapshot for ResponsesSnapshot {
    fn into_snapshot(self) -> Result<ResponsesSnapshot, SnapshotError> {
        Ok(self)
    }
}

impl IntoSnapshot for &State {
    fn into_snapshot(self) -> Result<ResponsesSnapshot, SnapshotError> {
        let default_outcome = self.interaction.default_outcome.clone().ok_or_else(|| {
            SnapshotError::MissingDefaultOutcome {
                state_name: self.name.clone(),
            }
        })?;

        Ok(ResponsesSnapshot {
            answer_groups: self.interaction.answer_groups.clone(),
            default_outcome,
            confirmed_unclassified_answers: self.interaction.confirmed_unclassified_answers.clone(),
        })
    }
}

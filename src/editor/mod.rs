use crate::autosave::{AutosaveSink, NoopAutosave, ResponsesChange};
use crate::config::{CursorPolicy, EditorConfig};
use crate::error::EditorError;
use crate::interaction::{AnswerChoice, AnswerGroup, AnswerGroupPatch, Outcome, OutcomePatch};
use crate::snapshot::ResponsesSnapshot;
use serde_json::Value;
use tracing::debug;

mod cursor;

pub use cursor::{EditorCursor, NO_ACTIVE_ANSWER_GROUP};

/// Editable responses of one content unit: its answer groups, default outcome,
/// confirmed unclassified answers, and the UI cursor over them.
///
/// A `ResponsesEditor` is an ordinary owned value. Create one per editing
/// session and pass it by reference to whatever renders or persists it.
///
/// Every operation that changes content notifies the [`AutosaveSink`] exactly
/// once, after the change is applied. Cursor moves and answer-choice updates
/// are UI state and never notify. Failed operations leave the state untouched
/// and do not notify.
///
/// # Example
///
/// ```rust
/// use kaito::prelude::*;
///
/// let snapshot = ResponsesSnapshot::new(
///     vec![AnswerGroup::new(
///         vec![Rule::new("Contains").with_input("x", "Answer")],
///         Outcome::new("Test", SubtitledHtml::new("feedback_1", "Feedback")),
///     )],
///     Outcome::new("Test", SubtitledHtml::new("default_outcome", "Default outcome")),
///     vec![],
/// );
///
/// let mut editor = ResponsesEditor::new(snapshot, EditorConfig::default(), ChangeList::for_state("Test"));
/// assert_eq!(editor.active_answer_group_index(), -1);
///
/// editor.update_answer_group(0, AnswerGroupPatch::new().dest("End"))?;
/// assert_eq!(editor.answer_group(0)?.outcome.dest, "End");
/// assert_eq!(editor.autosave().len(), 1);
/// # Ok::<(), kaito::error::EditorError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ResponsesEditor<S: AutosaveSink = NoopAutosave> {
    config: EditorConfig,
    answer_groups: Vec<AnswerGroup>,
    default_outcome: Outcome,
    confirmed_unclassified_answers: Vec<Value>,
    answer_choices: Option<Vec<AnswerChoice>>,
    cursor: EditorCursor,
    autosave: S,
}

impl<S: AutosaveSink> ResponsesEditor<S> {
    pub fn new(snapshot: ResponsesSnapshot, config: EditorConfig, autosave: S) -> Self {
        let mut editor = Self {
            config,
            answer_groups: Vec::new(),
            default_outcome: Outcome::default(),
            confirmed_unclassified_answers: Vec::new(),
            answer_choices: None,
            cursor: EditorCursor::default(),
            autosave,
        };
        editor.init(snapshot);
        editor
    }

    /// Replaces all state with `snapshot`, clears the answer choices and resets the cursor.
    pub fn init(&mut self, snapshot: ResponsesSnapshot) {
        debug!(
            answer_groups = snapshot.answer_groups.len(),
            "Initialising responses editor"
        );
        self.answer_groups = snapshot.answer_groups;
        self.default_outcome = snapshot.default_outcome;
        self.confirmed_unclassified_answers = snapshot.confirmed_unclassified_answers;
        self.answer_choices = None;
        self.cursor.reset();
    }

    /// The current content, in the shape it was seeded with.
    pub fn snapshot(&self) -> ResponsesSnapshot {
        ResponsesSnapshot {
            answer_groups: self.answer_groups.clone(),
            default_outcome: self.default_outcome.clone(),
            confirmed_unclassified_answers: self.confirmed_unclassified_answers.clone(),
        }
    }

    pub fn config(&self) -> EditorConfig {
        self.config
    }

    pub fn cursor(&self) -> EditorCursor {
        self.cursor
    }

    // --- Cursor ---

    pub fn active_answer_group_index(&self) -> i32 {
        self.cursor.active_answer_group_index
    }

    /// Moves the answer-group cursor.
    ///
    /// Under [`CursorPolicy::Permissive`] any value is accepted. Under
    /// [`CursorPolicy::Strict`] only `-1` or an existing index is, and a rule
    /// index the newly active group does not have is reset to `0`.
    pub fn change_active_answer_group_index(&mut self, index: i32) -> Result<(), EditorError> {
        if self.config.cursor_policy == CursorPolicy::Strict
            && index != NO_ACTIVE_ANSWER_GROUP
            && !self.is_valid_group_index(index)
        {
            return Err(EditorError::IndexOutOfRange {
                index: i64::from(index),
                len: self.answer_groups.len(),
            });
        }

        self.cursor.active_answer_group_index = index;
        self.clamp_rule_index();
        Ok(())
    }

    pub fn active_rule_index(&self) -> i32 {
        self.cursor.active_rule_index
    }

    /// Moves the rule cursor.
    ///
    /// Under [`CursorPolicy::Strict`] the index must be non-negative and, when an
    /// answer group is active, address one of its rules.
    pub fn change_active_rule_index(&mut self, index: i32) -> Result<(), EditorError> {
        if self.config.cursor_policy == CursorPolicy::Strict {
            let rule_count = self.active_answer_group().map(|group| group.rules.len());
            let in_range = match (usize::try_from(index), rule_count) {
                (Err(_), _) => false,
                (Ok(i), Some(count)) => i < count,
                (Ok(_), None) => true,
            };
            if !in_range {
                return Err(EditorError::RuleIndexOutOfRange {
                    index: i64::from(index),
                    len: rule_count.unwrap_or(0),
                });
            }
        }

        self.cursor.active_rule_index = index;
        Ok(())
    }

    /// The answer group under the cursor, if the cursor addresses one that exists.
    pub fn active_answer_group(&self) -> Option<&AnswerGroup> {
        self.cursor
            .selected_answer_group()
            .and_then(|index| self.answer_groups.get(index))
    }

    // --- Answer groups ---

    pub fn answer_groups(&self) -> &[AnswerGroup] {
        &self.answer_groups
    }

    pub fn answer_group_count(&self) -> usize {
        self.answer_groups.len()
    }

    pub fn answer_group(&self, index: usize) -> Result<&AnswerGroup, EditorError> {
        self.answer_groups
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Merges `patch` into the answer group at `index`.
    ///
    /// An empty patch changes nothing and does not notify the autosave sink.
    pub fn update_answer_group(
        &mut self,
        index: usize,
        patch: AnswerGroupPatch,
    ) -> Result<(), EditorError> {
        let len = self.answer_groups.len();
        let group = self
            .answer_groups
            .get_mut(index)
            .ok_or(EditorError::IndexOutOfRange {
                index: index as i64,
                len,
            })?;

        if patch.is_empty() {
            return Ok(());
        }

        patch.apply(group);
        self.clamp_rule_index();
        debug!(index, "Updated answer group");
        self.save_answer_groups();
        Ok(())
    }

    /// Merges `patch` into the answer group under the cursor.
    pub fn update_active_answer_group(&mut self, patch: AnswerGroupPatch) -> Result<(), EditorError> {
        let index = self
            .cursor
            .selected_answer_group()
            .ok_or(EditorError::NoActiveSelection)?;
        if index >= self.answer_groups.len() {
            return Err(EditorError::IndexOutOfRange {
                index: i64::from(self.cursor.active_answer_group_index),
                len: self.answer_groups.len(),
            });
        }
        self.update_answer_group(index, patch)
    }

    /// Appends `group` after the existing answer groups and returns its index.
    pub fn add_answer_group(&mut self, group: AnswerGroup) -> usize {
        self.answer_groups.push(group);
        let index = self.answer_groups.len() - 1;
        debug!(index, "Added answer group");
        self.save_answer_groups();
        index
    }

    /// Removes the answer group at `index`, shifting later groups down by one.
    ///
    /// Deleting the active group resets the cursor; deleting a group before it
    /// moves the cursor along with the group it pointed at.
    pub fn delete_answer_group(&mut self, index: usize) -> Result<AnswerGroup, EditorError> {
        if index >= self.answer_groups.len() {
            return Err(self.out_of_range(index));
        }

        let removed = self.answer_groups.remove(index);
        self.cursor
            .shift_after_deletion(index, self.answer_groups.len());
        self.clamp_rule_index();
        debug!(
            index,
            remaining = self.answer_groups.len(),
            "Deleted answer group"
        );
        self.save_answer_groups();
        Ok(removed)
    }

    // --- Default outcome ---

    pub fn default_outcome(&self) -> &Outcome {
        &self.default_outcome
    }

    /// Merges `patch` into the default outcome. An empty patch does not notify.
    pub fn update_default_outcome(&mut self, patch: OutcomePatch) {
        if patch.is_empty() {
            return;
        }
        patch.apply(&mut self.default_outcome);
        debug!("Updated default outcome");
        self.autosave
            .autosave_change_list(&ResponsesChange::DefaultOutcome(self.default_outcome.clone()));
    }

    // --- Confirmed unclassified answers ---

    pub fn confirmed_unclassified_answers(&self) -> &[Value] {
        &self.confirmed_unclassified_answers
    }

    pub fn update_confirmed_unclassified_answers(&mut self, answers: Vec<Value>) {
        self.confirmed_unclassified_answers = answers;
        debug!(
            count = self.confirmed_unclassified_answers.len(),
            "Updated confirmed unclassified answers"
        );
        self.autosave
            .autosave_change_list(&ResponsesChange::ConfirmedUnclassifiedAnswers(
                self.confirmed_unclassified_answers.clone(),
            ));
    }

    // --- Answer choices ---

    /// The answer options of a choice-based interaction, `None` until set.
    pub fn answer_choices(&self) -> Option<&[AnswerChoice]> {
        self.answer_choices.as_deref()
    }

    pub fn update_answer_choices(&mut self, choices: Option<Vec<AnswerChoice>>) {
        self.answer_choices = choices;
    }

    // --- Autosave ---

    pub fn autosave(&self) -> &S {
        &self.autosave
    }

    pub fn autosave_mut(&mut self) -> &mut S {
        &mut self.autosave
    }

    pub fn into_autosave(self) -> S {
        self.autosave
    }

    fn save_answer_groups(&mut self) {
        self.autosave
            .autosave_change_list(&ResponsesChange::AnswerGroups(self.answer_groups.clone()));
    }

    /// Under the strict policy, resets a rule index the active group does not have.
    fn clamp_rule_index(&mut self) {
        if self.config.cursor_policy != CursorPolicy::Strict {
            return;
        }
        let Some(rule_count) = self.active_answer_group().map(|group| group.rules.len()) else {
            return;
        };
        let in_range =
            usize::try_from(self.cursor.active_rule_index).is_ok_and(|i| i < rule_count);
        if !in_range {
            debug!(
                rule_index = self.cursor.active_rule_index,
                rule_count, "Reset stale rule index"
            );
            self.cursor.active_rule_index = 0;
        }
    }

    fn is_valid_group_index(&self, index: i32) -> bool {
        usize::try_from(index).is_ok_and(|i| i < self.answer_groups.len())
    }

    fn out_of_range(&self, index: usize) -> EditorError {
        EditorError::IndexOutOfRange {
            index: index as i64,
            len: self.answer_groups.len(),
        }
    }
}

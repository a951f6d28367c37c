use super::definition::{AnswerGroup, Outcome, ParamChange, Rule, SubtitledHtml};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Distinguishes an absent field (`None`) from an explicit `null` (`Some(None)`).
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A partial update to an [`Outcome`]. Only the fields that are `Some` are applied.
///
/// Nullable outcome fields use `Option<Option<_>>`: `Some(None)` clears the value,
/// `None` leaves it untouched.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct OutcomePatch {
    pub dest: Option<String>,
    pub feedback: Option<SubtitledHtml>,
    #[serde(alias = "labelledAsCorrect")]
    pub labelled_as_correct: Option<bool>,
    #[serde(alias = "paramChanges")]
    pub param_changes: Option<Vec<ParamChange>>,
    #[serde(alias = "refresherExplorationId", deserialize_with = "nullable")]
    pub refresher_exploration_id: Option<Option<String>>,
    #[serde(alias = "missingPrerequisiteSkillId", deserialize_with = "nullable")]
    pub missing_prerequisite_skill_id: Option<Option<String>>,
}

impl OutcomePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn dest(mut self, dest: impl Into<String>) -> Self {
        self.dest = Some(dest.into());
        self
    }

    pub fn feedback(mut self, feedback: SubtitledHtml) -> Self {
        self.feedback = Some(feedback);
        self
    }

    pub fn labelled_as_correct(mut self, correct: bool) -> Self {
        self.labelled_as_correct = Some(correct);
        self
    }

    pub fn param_changes(mut self, changes: Vec<ParamChange>) -> Self {
        self.param_changes = Some(changes);
        self
    }

    pub fn refresher_exploration_id(mut self, id: Option<String>) -> Self {
        self.refresher_exploration_id = Some(id);
        self
    }

    pub fn missing_prerequisite_skill_id(mut self, id: Option<String>) -> Self {
        self.missing_prerequisite_skill_id = Some(id);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Fields present in `self` win over those in `base`.
    fn or(self, base: OutcomePatch) -> OutcomePatch {
        OutcomePatch {
            dest: self.dest.or(base.dest),
            feedback: self.feedback.or(base.feedback),
            labelled_as_correct: self.labelled_as_correct.or(base.labelled_as_correct),
            param_changes: self.param_changes.or(base.param_changes),
            refresher_exploration_id: self
                .refresher_exploration_id
                .or(base.refresher_exploration_id),
            missing_prerequisite_skill_id: self
                .missing_prerequisite_skill_id
                .or(base.missing_prerequisite_skill_id),
        }
    }

    /// Merges the present fields into `outcome`, leaving every other field as-is.
    pub fn apply(self, outcome: &mut Outcome) {
        if let Some(dest) = self.dest {
            outcome.dest = dest;
        }
        if let Some(feedback) = self.feedback {
            outcome.feedback = feedback;
        }
        if let Some(correct) = self.labelled_as_correct {
            outcome.labelled_as_correct = correct;
        }
        if let Some(changes) = self.param_changes {
            outcome.param_changes = changes;
        }
        if let Some(id) = self.refresher_exploration_id {
            outcome.refresher_exploration_id = id;
        }
        if let Some(id) = self.missing_prerequisite_skill_id {
            outcome.missing_prerequisite_skill_id = id;
        }
    }
}

/// A partial update to an [`AnswerGroup`].
///
/// Outcome-level fields (feedback, destination, ...) live in the nested
/// [`OutcomePatch`], but the builder exposes them directly for convenience.
///
/// In JSON the outcome fields may be given either at the top level, as the
/// editor UI sends them, or under an `outcome` object. Top-level fields win
/// when both are present. camelCase field names are accepted as aliases.
///
/// ```rust
/// use kaito::interaction::{AnswerGroupPatch, Rule, SubtitledHtml};
///
/// let patch = AnswerGroupPatch::new()
///     .rules(vec![Rule::new("Equals").with_input("x", "New answer")])
///     .feedback(SubtitledHtml::new("feedback_1", "New feedback"));
/// assert!(!patch.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnswerGroupPatch {
    pub rules: Option<Vec<Rule>>,
    pub training_data: Option<Vec<Value>>,
    pub tagged_misconception_id: Option<Option<String>>,
    pub outcome: OutcomePatch,
}

/// JSON shape of an [`AnswerGroupPatch`].
#[derive(Default, Deserialize)]
#[serde(default)]
struct AnswerGroupPatchFields {
    #[serde(alias = "rule_specs")]
    rules: Option<Vec<Rule>>,
    #[serde(alias = "trainingData")]
    training_data: Option<Vec<Value>>,
    #[serde(alias = "taggedMisconceptionId", deserialize_with = "nullable")]
    tagged_misconception_id: Option<Option<String>>,
    outcome: Option<OutcomePatch>,
    dest: Option<String>,
    feedback: Option<SubtitledHtml>,
    #[serde(alias = "labelledAsCorrect")]
    labelled_as_correct: Option<bool>,
    #[serde(alias = "paramChanges")]
    param_changes: Option<Vec<ParamChange>>,
    #[serde(alias = "refresherExplorationId", deserialize_with = "nullable")]
    refresher_exploration_id: Option<Option<String>>,
    #[serde(alias = "missingPrerequisiteSkillId", deserialize_with = "nullable")]
    missing_prerequisite_skill_id: Option<Option<String>>,
}

impl<'de> Deserialize<'de> for AnswerGroupPatch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fields = AnswerGroupPatchFields::deserialize(deserializer)?;
        let top_level = OutcomePatch {
            dest: fields.dest,
            feedback: fields.feedback,
            labelled_as_correct: fields.labelled_as_correct,
            param_changes: fields.param_changes,
            refresher_exploration_id: fields.refresher_exploration_id,
            missing_prerequisite_skill_id: fields.missing_prerequisite_skill_id,
        };

        Ok(Self {
            rules: fields.rules,
            training_data: fields.training_data,
            tagged_misconception_id: fields.tagged_misconception_id,
            outcome: top_level.or(fields.outcome.unwrap_or_default()),
        })
    }
}

impl AnswerGroupPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rules(mut self, rules: Vec<Rule>) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn training_data(mut self, data: Vec<Value>) -> Self {
        self.training_data = Some(data);
        self
    }

    pub fn tagged_misconception_id(mut self, id: Option<String>) -> Self {
        self.tagged_misconception_id = Some(id);
        self
    }

    pub fn feedback(mut self, feedback: SubtitledHtml) -> Self {
        self.outcome = self.outcome.feedback(feedback);
        self
    }

    pub fn dest(mut self, dest: impl Into<String>) -> Self {
        self.outcome = self.outcome.dest(dest);
        self
    }

    pub fn labelled_as_correct(mut self, correct: bool) -> Self {
        self.outcome = self.outcome.labelled_as_correct(correct);
        self
    }

    pub fn refresher_exploration_id(mut self, id: Option<String>) -> Self {
        self.outcome = self.outcome.refresher_exploration_id(id);
        self
    }

    pub fn missing_prerequisite_skill_id(mut self, id: Option<String>) -> Self {
        self.outcome = self.outcome.missing_prerequisite_skill_id(id);
        self
    }

    pub fn outcome(mut self, outcome: OutcomePatch) -> Self {
        self.outcome = outcome;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the present fields into `group`, leaving every other field as-is.
    pub fn apply(self, group: &mut AnswerGroup) {
        if let Some(rules) = self.rules {
            group.rules = rules;
        }
        if let Some(data) = self.training_data {
            group.training_data = data;
        }
        if let Some(id) = self.tagged_misconception_id {
            group.tagged_misconception_id = id;
        }
        self.outcome.apply(&mut group.outcome);
    }
}

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A piece of translatable HTML content, such as the feedback shown for an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubtitledHtml {
    #[serde(alias = "contentId")]
    pub content_id: String,
    pub html: String,
}

impl SubtitledHtml {
    pub fn new(content_id: impl Into<String>, html: impl Into<String>) -> Self {
        Self {
            content_id: content_id.into(),
            html: html.into(),
        }
    }
}

/// A single matching predicate of an answer group.
///
/// The shape of `inputs` depends on `rule_type` and is never interpreted here.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Rule {
    #[serde(alias = "type")]
    pub rule_type: String,
    #[serde(default)]
    pub inputs: AHashMap<String, Value>,
}

impl Rule {
    pub fn new(rule_type: impl Into<String>) -> Self {
        Self {
            rule_type: rule_type.into(),
            inputs: AHashMap::new(),
        }
    }

    /// Adds (or replaces) a named input parameter.
    pub fn with_input(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.inputs.insert(name.into(), value.into());
        self
    }
}

/// A directive that mutates a learner parameter when an outcome is taken.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParamChange {
    pub name: String,
    pub generator_id: String,
    #[serde(default)]
    pub customization_args: AHashMap<String, Value>,
}

/// Where the learner goes next and what they are told.
///
/// Answer groups and the default outcome share this shape.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Outcome {
    pub dest: String,
    pub feedback: SubtitledHtml,
    #[serde(default)]
    pub labelled_as_correct: bool,
    #[serde(default)]
    pub param_changes: Vec<ParamChange>,
    #[serde(default)]
    pub refresher_exploration_id: Option<String>,
    #[serde(default)]
    pub missing_prerequisite_skill_id: Option<String>,
}

impl Outcome {
    pub fn new(dest: impl Into<String>, feedback: SubtitledHtml) -> Self {
        Self {
            dest: dest.into(),
            feedback,
            ..Default::default()
        }
    }
}

/// One branch of response logic: an ordered rule list and the outcome it leads to.
///
/// Rules are evaluated in order and the first match wins, so the order of
/// both the rules and the groups themselves is significant.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnswerGroup {
    #[serde(rename = "rule_specs", alias = "rules")]
    pub rules: Vec<Rule>,
    pub outcome: Outcome,
    #[serde(default)]
    pub training_data: Vec<Value>,
    #[serde(default)]
    pub tagged_misconception_id: Option<String>,
}

impl AnswerGroup {
    pub fn new(rules: Vec<Rule>, outcome: Outcome) -> Self {
        Self {
            rules,
            outcome,
            training_data: Vec::new(),
            tagged_misconception_id: None,
        }
    }
}

/// A selectable option offered by choice-based interactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerChoice {
    pub val: Value,
    pub label: String,
}

impl AnswerChoice {
    pub fn new(val: impl Into<Value>, label: impl Into<String>) -> Self {
        Self {
            val: val.into(),
            label: label.into(),
        }
    }
}

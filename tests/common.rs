//! Common test fixtures for building response editor state.
use kaito::prelude::*;

/// A single `Test` state with one `Contains` answer group, both outcomes looping back to `Test`.
#[allow(dead_code)]
pub const TEST_STATES_JSON: &str = r#"
{
  "Test": {
    "content": { "content_id": "content", "html": "Sample" },
    "content_ids_to_audio_translations": {
      "content": {},
      "default_outcome": {},
      "feedback_1": {}
    },
    "interaction": {
      "id": "TextInput",
      "answer_groups": [{
        "rule_specs": [{ "rule_type": "Contains", "inputs": { "x": "Answer" } }],
        "outcome": {
          "dest": "Test",
          "feedback": { "content_id": "feedback_1", "html": "Feedback" },
          "labelled_as_correct": false,
          "param_changes": [],
          "refresher_exploration_id": null,
          "missing_prerequisite_skill_id": null
        },
        "training_data": [],
        "tagged_misconception_id": null
      }],
      "default_outcome": {
        "dest": "Test",
        "feedback": { "content_id": "default_outcome", "html": "Default outcome" },
        "labelled_as_correct": false,
        "param_changes": [],
        "refresher_exploration_id": null,
        "missing_prerequisite_skill_id": null
      },
      "hints": [],
      "confirmed_unclassified_answers": []
    },
    "param_changes": []
  },
  "End": {
    "content": { "content_id": "content", "html": "Congratulations!" },
    "interaction": {
      "id": "EndExploration",
      "answer_groups": [],
      "default_outcome": null
    }
  },
  "Second": {
    "content": { "content_id": "content", "html": "Pick one" },
    "interaction": {
      "id": "MultipleChoiceInput",
      "answer_groups": [{
        "rule_specs": [{ "rule_type": "Equals", "inputs": { "x": 1 } }],
        "outcome": {
          "dest": "End",
          "feedback": { "content_id": "feedback_1", "html": "Right" },
          "labelled_as_correct": true
        }
      }],
      "default_outcome": {
        "dest": "Second",
        "feedback": { "content_id": "default_outcome", "html": "Try again" }
      },
      "confirmed_unclassified_answers": ["maybe"]
    }
  }
}
"#;

/// Interaction metadata matching the fixture states.
#[allow(dead_code)]
pub const INTERACTION_SPECS_JSON: &str = r#"
{
  "TextInput": { "display_mode": "inline", "is_terminal": false },
  "MultipleChoiceInput": { "display_mode": "inline", "is_terminal": false },
  "EndExploration": { "display_mode": "inline", "is_terminal": true }
}
"#;

/// An answer group with a single `Contains` rule whose outcome loops back to `dest`.
#[allow(dead_code)]
pub fn contains_group(answer: &str, dest: &str, feedback: &str) -> AnswerGroup {
    AnswerGroup::new(
        vec![Rule::new("Contains").with_input("x", answer)],
        Outcome::new(dest, SubtitledHtml::new("feedback_1", feedback)),
    )
}

/// The default outcome of the `Test` state.
#[allow(dead_code)]
pub fn default_outcome() -> Outcome {
    Outcome::new("Test", SubtitledHtml::new("default_outcome", "Default outcome"))
}

/// The responses of the `Test` state, built in code.
#[allow(dead_code)]
pub fn test_snapshot() -> ResponsesSnapshot {
    ResponsesSnapshot::new(
        vec![contains_group("Answer", "Test", "Feedback")],
        default_outcome(),
        vec![],
    )
}

/// A snapshot with `count` distinct answer groups, `answer 0` .. `answer {count-1}`.
#[allow(dead_code)]
pub fn numbered_snapshot(count: usize) -> ResponsesSnapshot {
    let groups = (0..count)
        .map(|i| contains_group(&format!("answer {}", i), "Test", &format!("feedback {}", i)))
        .collect();
    ResponsesSnapshot::new(groups, default_outcome(), vec![])
}

/// An editor over the `Test` state that records its change list.
#[allow(dead_code)]
pub fn test_editor() -> ResponsesEditor<ChangeList> {
    ResponsesEditor::new(
        test_snapshot(),
        EditorConfig::default(),
        ChangeList::for_state("Test"),
    )
}

/// An editor over `count` numbered groups with the given cursor policy.
#[allow(dead_code)]
pub fn numbered_editor(count: usize, config: EditorConfig) -> ResponsesEditor<ChangeList> {
    ResponsesEditor::new(numbered_snapshot(count), config, ChangeList::for_state("Test"))
}

/// The `x` input of the first rule of each group, in order.
#[allow(dead_code)]
pub fn first_answers<S: AutosaveSink>(editor: &ResponsesEditor<S>) -> Vec<String> {
    editor
        .answer_groups()
        .iter()
        .map(|group| {
            group.rules[0]
                .inputs
                .get("x")
                .and_then(|value| value.as_str())
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}

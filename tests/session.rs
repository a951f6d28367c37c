//! Tests for loading content snapshots and driving an editing session across states.
mod common;
use common::*;
use kaito::prelude::*;

fn open_session(initial_state: &str) -> EditorSession<ChangeList> {
    let states = ExplorationStates::from_json(TEST_STATES_JSON).expect("Failed to parse states");
    let registry =
        InteractionRegistry::from_json(INTERACTION_SPECS_JSON).expect("Failed to parse specs");
    EditorSession::new(
        states,
        registry,
        EditorConfig::default(),
        ChangeList::default(),
        initial_state,
    )
    .expect("Failed to open session")
}

#[cfg(test)]
mod snapshot_tests {
    use super::*;

    #[test]
    fn test_states_json_loads() {
        let states = ExplorationStates::from_json(TEST_STATES_JSON).unwrap();
        assert_eq!(states.len(), 3);
        assert_eq!(states.names(), vec!["End", "Second", "Test"]);

        let test = states.state("Test").unwrap();
        assert_eq!(test.name, "Test");
        assert_eq!(test.content.html, "Sample");
        assert_eq!(test.interaction.id.as_deref(), Some("TextInput"));
    }

    #[test]
    fn test_state_converts_to_snapshot() {
        let states = ExplorationStates::from_json(TEST_STATES_JSON).unwrap();
        let snapshot = states.state("Test").unwrap().into_snapshot().unwrap();
        assert_eq!(snapshot, test_snapshot());
    }

    #[test]
    fn test_unknown_state() {
        let states = ExplorationStates::from_json(TEST_STATES_JSON).unwrap();
        assert_eq!(
            states.state("Missing").unwrap_err(),
            SnapshotError::StateNotFound("Missing".to_string())
        );
    }

    #[test]
    fn test_terminal_state_has_no_snapshot() {
        let states = ExplorationStates::from_json(TEST_STATES_JSON).unwrap();
        let err = states.state("End").unwrap().into_snapshot().unwrap_err();
        assert_eq!(
            err,
            SnapshotError::MissingDefaultOutcome {
                state_name: "End".to_string()
            }
        );
    }

    #[test]
    fn test_invalid_json() {
        let err = ExplorationStates::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SnapshotError::JsonParseError(_)));
    }

    #[test]
    fn test_rule_type_alias() {
        let rule: Rule =
            serde_json::from_str(r#"{ "type": "Equals", "inputs": { "x": "New answer" } }"#)
                .unwrap();
        assert_eq!(rule, Rule::new("Equals").with_input("x", "New answer"));
    }

    #[test]
    fn test_answer_group_patch_from_json() {
        let patch: AnswerGroupPatch = serde_json::from_str(
            r#"{
                "rules": [{ "type": "Equals", "inputs": { "x": "New answer" } }],
                "outcome": { "dest": "End", "refresher_exploration_id": null }
            }"#,
        )
        .unwrap();

        assert_eq!(
            patch.rules,
            Some(vec![Rule::new("Equals").with_input("x", "New answer")])
        );
        assert_eq!(patch.outcome.dest.as_deref(), Some("End"));
        assert_eq!(patch.outcome.refresher_exploration_id, Some(None));
        assert_eq!(patch.outcome.missing_prerequisite_skill_id, None);
        assert_eq!(patch.tagged_misconception_id, None);
    }

    #[test]
    fn test_flat_answer_group_patch_from_json() {
        let patch: AnswerGroupPatch = serde_json::from_str(
            r#"{
                "dest": "End",
                "refresherExplorationId": null,
                "missingPrerequisiteSkillId": "skill_1",
                "labelledAsCorrect": true,
                "feedback": { "contentId": "feedback_1", "html": "New feedback" }
            }"#,
        )
        .unwrap();
        assert!(!patch.is_empty());

        let states = ExplorationStates::from_json(TEST_STATES_JSON).unwrap();
        let snapshot = states.state("Test").unwrap().into_snapshot().unwrap();
        let mut editor =
            ResponsesEditor::new(snapshot, EditorConfig::default(), ChangeList::for_state("Test"));
        editor.update_answer_group(0, patch).unwrap();

        let outcome = &editor.answer_group(0).unwrap().outcome;
        assert_eq!(outcome.dest, "End");
        assert_eq!(outcome.feedback, SubtitledHtml::new("feedback_1", "New feedback"));
        assert_eq!(outcome.refresher_exploration_id, None);
        assert_eq!(outcome.missing_prerequisite_skill_id.as_deref(), Some("skill_1"));
        assert!(outcome.labelled_as_correct);
        assert_eq!(editor.autosave().len(), 1);
    }

    #[test]
    fn test_top_level_outcome_fields_override_nested() {
        let patch: AnswerGroupPatch = serde_json::from_str(
            r#"{
                "dest": "End",
                "trainingData": ["sample"],
                "taggedMisconceptionId": null,
                "outcome": { "dest": "Second", "labelled_as_correct": true }
            }"#,
        )
        .unwrap();

        assert_eq!(patch.outcome.dest.as_deref(), Some("End"));
        assert_eq!(patch.outcome.labelled_as_correct, Some(true));
        assert_eq!(patch.training_data, Some(vec![serde_json::json!("sample")]));
        assert_eq!(patch.tagged_misconception_id, Some(None));
    }

    #[test]
    fn test_empty_patch_leaves_group_untouched() {
        let patch: AnswerGroupPatch = serde_json::from_str("{}").unwrap();
        assert!(patch.is_empty());

        let mut group = contains_group("Answer", "Test", "Feedback");
        let before = group.clone();
        patch.apply(&mut group);
        assert_eq!(group, before);
    }

    #[test]
    fn test_editor_config_from_json() {
        assert_eq!(
            EditorConfig::from_json(r#"{ "cursor_policy": "strict" }"#).unwrap(),
            EditorConfig::strict()
        );
        assert_eq!(
            EditorConfig::from_json("{}").unwrap().cursor_policy,
            CursorPolicy::Permissive
        );
        assert!(matches!(
            EditorConfig::from_json(r#"{ "cursor_policy": "loose" }"#),
            Err(ConfigError::JsonParseError(_))
        ));
    }

    #[test]
    fn test_registry() {
        let registry = InteractionRegistry::from_json(INTERACTION_SPECS_JSON).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(
            registry.get("TextInput"),
            Some(&InteractionSpec {
                display_mode: DisplayMode::Inline,
                is_terminal: false,
            })
        );
        assert!(registry.is_terminal("EndExploration"));
        assert!(!registry.is_terminal("Unknown"));
    }
}

#[cfg(test)]
mod session_tests {
    use super::*;

    #[test]
    fn test_session_opens_on_initial_state() {
        let session = open_session("Test");
        assert_eq!(session.active_state_name(), "Test");
        assert_eq!(session.responses().active_answer_group_index(), -1);
        assert_eq!(session.responses().answer_group_count(), 1);
        assert_eq!(session.responses().autosave().state_name(), "Test");
        assert_eq!(
            session.active_interaction_spec().map(|s| s.display_mode),
            Some(DisplayMode::Inline)
        );
    }

    #[test]
    fn test_session_rejects_uneditable_initial_state() {
        let states = ExplorationStates::from_json(TEST_STATES_JSON).unwrap();
        let result = EditorSession::new(
            states,
            InteractionRegistry::new(),
            EditorConfig::default(),
            NoopAutosave,
            "End",
        );
        assert!(matches!(
            result,
            Err(SnapshotError::MissingDefaultOutcome { .. })
        ));
    }

    #[test]
    fn test_switching_state_reseeds_editor() {
        let mut session = open_session("Test");
        let responses = session.responses_mut();
        responses.change_active_answer_group_index(0).unwrap();
        responses.update_answer_choices(Some(vec![AnswerChoice::new(1, "one")]));

        session.set_active_state("Second").unwrap();

        let responses = session.responses();
        assert_eq!(session.active_state_name(), "Second");
        assert_eq!(responses.active_answer_group_index(), -1);
        assert_eq!(responses.active_rule_index(), 0);
        assert!(responses.answer_choices().is_none());
        assert_eq!(responses.default_outcome().dest, "Second");
        assert_eq!(
            responses.confirmed_unclassified_answers(),
            &[serde_json::json!("maybe")]
        );
    }

    #[test]
    fn test_edits_survive_navigation() {
        let mut session = open_session("Test");
        session
            .responses_mut()
            .update_answer_group(0, AnswerGroupPatch::new().dest("Second"))
            .unwrap();

        session.set_active_state("Second").unwrap();
        session
            .responses_mut()
            .update_default_outcome(OutcomePatch::new().dest("End"));
        session.set_active_state("Test").unwrap();

        assert_eq!(session.responses().answer_group(0).unwrap().outcome.dest, "Second");

        let entries = session.responses().autosave().entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].state_name, "Test");
        assert_eq!(entries[1].state_name, "Second");

        let states = session.into_states().unwrap();
        let second = states.state("Second").unwrap();
        assert_eq!(
            second.interaction.default_outcome.as_ref().map(|o| o.dest.as_str()),
            Some("End")
        );
    }

    #[test]
    fn test_switching_to_unknown_state_keeps_session() {
        let mut session = open_session("Test");
        session.responses_mut().change_active_answer_group_index(0).unwrap();

        let err = session.set_active_state("Missing").unwrap_err();
        assert_eq!(err, SnapshotError::StateNotFound("Missing".to_string()));
        assert_eq!(session.active_state_name(), "Test");
        assert_eq!(session.responses().active_answer_group_index(), 0);
    }

    #[test]
    fn test_reactivating_same_state_keeps_cursor() {
        let mut session = open_session("Test");
        session.responses_mut().change_active_answer_group_index(0).unwrap();
        session.set_active_state("Test").unwrap();
        assert_eq!(session.responses().active_answer_group_index(), 0);
    }

    #[test]
    fn test_independent_sessions() {
        let mut first = open_session("Test");
        let second = open_session("Test");

        first.responses_mut().change_active_answer_group_index(0).unwrap();
        first
            .responses_mut()
            .update_active_answer_group(AnswerGroupPatch::new().dest("End"))
            .unwrap();

        assert_eq!(second.responses().active_answer_group_index(), -1);
        assert_eq!(second.responses().answer_group(0).unwrap().outcome.dest, "Test");
        assert!(second.responses().autosave().is_empty());
    }

    #[test]
    fn test_summary_marks_active_group() {
        let mut session = open_session("Second");
        session.responses_mut().change_active_answer_group_index(0).unwrap();

        let summary = ResponsesFormatter::format(session.responses());
        assert_eq!(
            summary,
            "Answer groups (1):\n *[0] Equals(x=1) -> End \"Right\" [correct]\nDefault -> Second \"Try again\""
        );
    }

    #[test]
    fn test_format_rule_orders_inputs() {
        let rule = Rule::new("IsInRange")
            .with_input("ub", 10)
            .with_input("lb", 1)
            .with_input("label", "range");
        assert_eq!(
            ResponsesFormatter::format_rule(&rule),
            "IsInRange(label=\"range\", lb=1, ub=10)"
        );
    }
}

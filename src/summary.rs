use crate::autosave::AutosaveSink;
use crate::editor::ResponsesEditor;
use crate::interaction::{Outcome, Rule};
use itertools::Itertools;
use serde_json::Value;

/// Formats the responses of a state into a short human-readable listing.
pub struct ResponsesFormatter;

impl ResponsesFormatter {
    /// One line per answer group, the active one marked with `*`, followed by the default outcome.
    pub fn format<S: AutosaveSink>(editor: &ResponsesEditor<S>) -> String {
        let active = editor.cursor().selected_answer_group();
        let mut lines = Vec::with_capacity(editor.answer_group_count() + 2);
        lines.push(format!("Answer groups ({}):", editor.answer_group_count()));

        for (index, group) in editor.answer_groups().iter().enumerate() {
            let marker = if active == Some(index) {
                "*"
            } else {
                " "
            };
            let rules = if group.rules.is_empty() {
                "(no rules)".to_string()
            } else {
                group.rules.iter().map(Self::format_rule).join(" OR ")
            };
            lines.push(format!(
                " {}[{}] {} -> {}",
                marker,
                index,
                rules,
                Self::format_outcome(&group.outcome)
            ));
        }

        lines.push(format!(
            "Default -> {}",
            Self::format_outcome(editor.default_outcome())
        ));
        lines.join("\n")
    }

    /// Formats a rule as `Type(name=value, ...)` with inputs in name order.
    pub fn format_rule(rule: &Rule) -> String {
        let inputs = rule
            .inputs
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(name, value)| format!("{}={}", name, Self::format_value(value)))
            .join(", ");
        format!("{}({})", rule.rule_type, inputs)
    }

    fn format_outcome(outcome: &Outcome) -> String {
        let mut text = format!("{} \"{}\"", outcome.dest, outcome.feedback.html);
        if outcome.labelled_as_correct {
            text.push_str(" [correct]");
        }
        text
    }

    fn format_value(value: &Value) -> String {
        match value {
            Value::String(s) => format!("\"{}\"", s),
            other => other.to_string(),
        }
    }
}

use clap::Parser;
use kaito::prelude::*;
use std::fs;
use tracing_subscriber::EnvFilter;

/// Load a state's responses, apply edits, and print the resulting change list
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the exploration states JSON file
    states_path: String,

    /// Name of the state whose responses are edited
    #[arg(short, long)]
    state: String,

    /// Optional path to the interaction specs JSON file
    #[arg(long)]
    specs: Option<String>,

    /// Optional path to the editor configuration JSON file
    #[arg(long)]
    config: Option<String>,

    /// Make the answer group at this index active before applying edits
    #[arg(long)]
    select: Option<i32>,

    /// Apply `<index>=<patch.json>` to an answer group (repeatable)
    #[arg(long = "patch", value_name = "INDEX=PATH")]
    patches: Vec<String>,

    /// Set the destination of an answer group, as `<index>=<state>` (repeatable)
    #[arg(long = "dest", value_name = "INDEX=STATE")]
    dests: Vec<String>,

    /// Set the feedback HTML of an answer group, as `<index>=<html>` (repeatable)
    #[arg(long = "feedback", value_name = "INDEX=HTML")]
    feedbacks: Vec<String>,

    /// Delete the answer group at this index (repeatable, applied last, in order)
    #[arg(long = "delete", value_name = "INDEX")]
    deletes: Vec<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let states = ExplorationStates::from_file(&cli.states_path)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to load states: {}", e)));
    let registry = match &cli.specs {
        Some(path) => InteractionRegistry::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load specs: {}", e))),
        None => InteractionRegistry::new(),
    };
    let config = match &cli.config {
        Some(path) => EditorConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EditorConfig::default(),
    };

    let mut session = EditorSession::new(states, registry, config, ChangeList::default(), &cli.state)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to open state '{}': {}", cli.state, e)));

    if let Some(spec) = session.active_interaction_spec() {
        println!(
            "Interaction: {:?} display, terminal: {}",
            spec.display_mode, spec.is_terminal
        );
    }

    let responses = session.responses_mut();

    if let Some(index) = cli.select {
        responses
            .change_active_answer_group_index(index)
            .unwrap_or_else(|e| exit_with_error(&format!("Cannot select answer group: {}", e)));
    }

    for arg in &cli.patches {
        let (index, path) = split_indexed(arg);
        let json = fs::read_to_string(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to read patch '{}': {}", path, e)));
        let patch: AnswerGroupPatch = serde_json::from_str(&json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse patch '{}': {}", path, e)));
        apply(responses, index, patch);
    }

    for arg in &cli.dests {
        let (index, dest) = split_indexed(arg);
        apply(responses, index, AnswerGroupPatch::new().dest(dest));
    }

    for arg in &cli.feedbacks {
        let (index, html) = split_indexed(arg);
        let content_id = responses
            .answer_group(index)
            .map(|group| group.outcome.feedback.content_id.clone())
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        apply(
            responses,
            index,
            AnswerGroupPatch::new().feedback(SubtitledHtml::new(content_id, html)),
        );
    }

    for index in &cli.deletes {
        responses
            .delete_answer_group(*index)
            .unwrap_or_else(|e| exit_with_error(&format!("Cannot delete answer group: {}", e)));
    }

    println!("\n{}", ResponsesFormatter::format(responses));

    let change_list = responses
        .autosave()
        .to_json()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize change list: {}", e)));
    println!("\n--- Change List ({} entries) ---", responses.autosave().len());
    println!("{}", change_list);
}

fn apply(responses: &mut ResponsesEditor<ChangeList>, index: usize, patch: AnswerGroupPatch) {
    responses
        .update_answer_group(index, patch)
        .unwrap_or_else(|e| exit_with_error(&format!("Cannot update answer group: {}", e)));
}

/// Splits an `<index>=<value>` argument.
fn split_indexed(arg: &str) -> (usize, &str) {
    let (index, value) = arg
        .split_once('=')
        .unwrap_or_else(|| exit_with_error(&format!("Expected INDEX=VALUE, got '{}'", arg)));
    let index = index
        .trim()
        .parse()
        .unwrap_or_else(|_| exit_with_error(&format!("Invalid answer group index '{}'", index)));
    (index, value)
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}

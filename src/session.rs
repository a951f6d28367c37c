use crate::autosave::{AutosaveSink, NoopAutosave};
use crate::config::EditorConfig;
use crate::editor::ResponsesEditor;
use crate::error::SnapshotError;
use crate::registry::{InteractionRegistry, InteractionSpec};
use crate::snapshot::{ExplorationStates, IntoSnapshot, State};
use tracing::info;

/// The context of one editing session: the loaded states, the interaction
/// registry, and the responses editor of the state currently being edited.
///
/// Sessions are independent values; several can live side by side.
#[derive(Debug)]
pub struct EditorSession<S: AutosaveSink = NoopAutosave> {
    states: ExplorationStates,
    registry: InteractionRegistry,
    active_state_name: String,
    responses: ResponsesEditor<S>,
}

impl<S: AutosaveSink> EditorSession<S> {
    /// Opens a session with `initial_state` active.
    pub fn new(
        states: ExplorationStates,
        registry: InteractionRegistry,
        config: EditorConfig,
        mut autosave: S,
        initial_state: &str,
    ) -> Result<Self, SnapshotError> {
        let snapshot = states.state(initial_state)?.into_snapshot()?;
        autosave.active_state_changed(initial_state);
        info!(state = initial_state, "Opened editor session");

        Ok(Self {
            states,
            registry,
            active_state_name: initial_state.to_string(),
            responses: ResponsesEditor::new(snapshot, config, autosave),
        })
    }

    pub fn active_state_name(&self) -> &str {
        &self.active_state_name
    }

    pub fn active_state(&self) -> Result<&State, SnapshotError> {
        self.states.state(&self.active_state_name)
    }

    /// Switches editing to `name`.
    ///
    /// The edits made to the current state are written back first; the
    /// responses editor is then re-seeded from the new state, which discards
    /// its cursor and answer choices. An unknown or uneditable state leaves the
    /// session untouched.
    pub fn set_active_state(&mut self, name: &str) -> Result<(), SnapshotError> {
        if name == self.active_state_name {
            return Ok(());
        }

        let snapshot = self.states.state(name)?.into_snapshot()?;
        self.commit()?;

        self.responses.init(snapshot);
        self.responses.autosave_mut().active_state_changed(name);
        info!(from = %self.active_state_name, to = name, "Switched active state");
        self.active_state_name = name.to_string();
        Ok(())
    }

    /// Writes the current responses back into the active state.
    pub fn commit(&mut self) -> Result<(), SnapshotError> {
        self.states
            .store_responses(&self.active_state_name, self.responses.snapshot())
    }

    pub fn responses(&self) -> &ResponsesEditor<S> {
        &self.responses
    }

    pub fn responses_mut(&mut self) -> &mut ResponsesEditor<S> {
        &mut self.responses
    }

    pub fn states(&self) -> &ExplorationStates {
        &self.states
    }

    pub fn registry(&self) -> &InteractionRegistry {
        &self.registry
    }

    /// Registry metadata for the active state's interaction, if it has a known one.
    pub fn active_interaction_spec(&self) -> Option<&InteractionSpec> {
        let state = self.states.state(&self.active_state_name).ok()?;
        let interaction_id = state.interaction.id.as_deref()?;
        self.registry.get(interaction_id)
    }

    /// Ends the session, handing back the states with the latest edits applied.
    pub fn into_states(mut self) -> Result<ExplorationStates, SnapshotError> {
        self.commit()?;
        Ok(self.states)
    }
}

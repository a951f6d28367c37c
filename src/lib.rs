//! # Kaito - Response Editor State
//!
//! **Kaito** holds the editable responses of one content unit ("state") of an
//! interactive lesson: the ordered, rule-based answer groups, the default
//! outcome taken when no group matches, and the transient cursor that tracks
//! which answer group and rule the author is editing.
//!
//! ## Core Workflow
//!
//! 1.  **Load the content**: Parse the exploration states with `ExplorationStates::from_json`,
//!     or implement `IntoSnapshot` on your own content model.
//! 2.  **Open a session**: `EditorSession::new` seeds a `ResponsesEditor` from the
//!     initial state and wires it to an `AutosaveSink`.
//! 3.  **Edit**: Move the cursor and apply typed patches (`AnswerGroupPatch`,
//!     `OutcomePatch`). Every content change notifies the autosave sink.
//! 4.  **Navigate**: `EditorSession::set_active_state` writes the edits back and
//!     re-seeds the editor from the next state.
//!
//! ## Quick Start
//!
//! ```rust
//! use kaito::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let states = ExplorationStates::from_json(
//!         r#"{
//!             "Test": {
//!                 "content": { "content_id": "content", "html": "Sample" },
//!                 "interaction": {
//!                     "id": "TextInput",
//!                     "answer_groups": [{
//!                         "rule_specs": [{ "rule_type": "Contains", "inputs": { "x": "Answer" } }],
//!                         "outcome": {
//!                             "dest": "Test",
//!                             "feedback": { "content_id": "feedback_1", "html": "Feedback" }
//!                         }
//!                     }],
//!                     "default_outcome": {
//!                         "dest": "Test",
//!                         "feedback": { "content_id": "default_outcome", "html": "Default outcome" }
//!                     }
//!                 }
//!             }
//!         }"#,
//!     )?;
//!
//!     let mut session = EditorSession::new(
//!         states,
//!         InteractionRegistry::new(),
//!         EditorConfig::default(),
//!         ChangeList::default(),
//!         "Test",
//!     )?;
//!
//!     let responses = session.responses_mut();
//!     assert_eq!(responses.active_answer_group_index(), -1);
//!
//!     responses.update_answer_group(
//!         0,
//!         AnswerGroupPatch::new().rules(vec![Rule::new("Equals").with_input("x", "New answer")]),
//!     )?;
//!
//!     println!("{}", ResponsesFormatter::format(responses));
//!     println!("{}", responses.autosave().to_json()?);
//!     Ok(())
//! }
//! ```

pub mod autosave;
pub mod config;
pub mod editor;
pub mod error;
pub mod interaction;
pub mod prelude;
pub mod registry;
pub mod session;
pub mod snapshot;
pub mod summary;

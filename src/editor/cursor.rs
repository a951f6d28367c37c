/// The sentinel value of the active answer group index when nothing is selected.
pub const NO_ACTIVE_ANSWER_GROUP: i32 = -1;

/// Transient UI selection: which answer group and which of its rules are being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorCursor {
    pub active_answer_group_index: i32,
    pub active_rule_index: i32,
}

impl Default for EditorCursor {
    fn default() -> Self {
        Self {
            active_answer_group_index: NO_ACTIVE_ANSWER_GROUP,
            active_rule_index: 0,
        }
    }
}

impl EditorCursor {
    /// The selected answer group as a position, or `None` when nothing is selected.
    ///
    /// The position is not guaranteed to exist under the permissive cursor policy.
    pub fn selected_answer_group(&self) -> Option<usize> {
        usize::try_from(self.active_answer_group_index).ok()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Re-anchors the cursor after the answer group at `deleted` was removed,
    /// leaving `remaining` groups.
    pub(crate) fn shift_after_deletion(&mut self, deleted: usize, remaining: usize) {
        let Some(active) = self.selected_answer_group() else {
            return;
        };

        if active == deleted {
            self.reset();
        } else if active > deleted {
            let shifted = active - 1;
            if shifted < remaining {
                self.active_answer_group_index = shifted as i32;
            } else {
                self.reset();
            }
        }
    }
}

//! Focus registry: at most one focused field at any time.
//!
//! This is the only place that writes a field's `has_focus` flag. Moving focus
//! away from a field also drops any pending activation on it.

use crate::directory::FieldDirectory;
use crate::field::FieldId;

#[derive(Debug, Default)]
pub struct FocusRegistry {
    focused: Option<FieldId>,
}

impl FocusRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<FieldId> {
        self.focused
    }

    /// Move focus to `target`, or clear it with `None`.
    ///
    /// Fails (returns false, nothing changes) if `target` is unknown or
    /// disabled. Clearing always succeeds.
    pub fn set_focus(&mut self, fields: &mut FieldDirectory, target: Option<FieldId>) -> bool {
        if let Some(id) = target {
            match fields.find_by_id(id) {
                Some(field) if field.is_enabled() => {}
                Some(_) => {
                    tracing::debug!(field = %id, "focus refused: field disabled");
                    return false;
                }
                None => {
                    tracing::debug!(field = %id, "focus refused: unknown field");
                    return false;
                }
            }
        }

        let previous = self.focused;
        if previous == target {
            return true;
        }

        if let Some(previous) = previous {
            if let Some(field) = fields.find_by_id_mut(previous) {
                field.set_focus_flag(false);
                field.set_activated(false);
            }
        }

        if let Some(id) = target {
            if let Some(field) = fields.find_by_id_mut(id) {
                field.set_focus_flag(true);
            }
        }

        tracing::debug!(from = ?previous, to = ?target, "focus changed");
        self.focused = target;
        true
    }
}

//! Input dispatcher: the public surface hosts drive text fields through.
//!
//! [`TextFields`] is the explicitly constructed context holding everything
//! that is process-wide for text fields: the configuration, the field
//! directory, the focus registry and the blink counter. The host creates one
//! at startup, forwards key presses and clicks to it one at a time, and
//! queries it when rendering.

use crate::config::FieldConfig;
use crate::directory::FieldDirectory;
use crate::editable::caret;
use crate::editable::TextEditMsg;
use crate::error::FieldError;
use crate::field::{Field, FieldId};
use crate::focus::FocusRegistry;
use crate::host::{ControlId, DisplayControl, TextMetrics};
use crate::input::{KeyCode, MouseClick};
use crate::tracing::FieldSnapshot;

pub struct TextFields<M: TextMetrics> {
    config: FieldConfig,
    metrics: M,
    fields: FieldDirectory,
    focus: FocusRegistry,
    /// Host ticks since the caret blink phase last restarted
    blink_ticks: u32,
}

impl<M: TextMetrics> TextFields<M> {
    pub fn new(config: FieldConfig, metrics: M) -> Self {
        tracing::debug!(?config, "text fields initialized");
        Self {
            config,
            metrics,
            fields: FieldDirectory::new(),
            focus: FocusRegistry::new(),
            blink_ticks: 0,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn metrics(&self) -> &M {
        &self.metrics
    }

    /// Host ticks between caret visibility toggles (0 = never blink)
    pub fn set_blink_delay(&mut self, ticks: u32) {
        self.config.blink_delay = ticks;
    }

    /// Whether focused fields consume Return and raise their activation flag
    pub fn set_handles_return(&mut self, handles: bool) {
        self.config.handles_return = handles;
    }

    pub fn set_caret_offset(&mut self, offset: f32) {
        self.config.caret_offset = offset;
    }

    // =========================================================================
    // Fields
    // =========================================================================

    /// Bind a new field to `control`. See [`FieldDirectory::create`].
    pub fn create(
        &mut self,
        control: &dyn DisplayControl,
        initial_text: Option<&str>,
        padding_left: f32,
        padding_top: f32,
    ) -> Result<FieldId, FieldError> {
        self.fields
            .create(control, initial_text, padding_left, padding_top)
    }

    pub fn field(&self, id: FieldId) -> Option<&Field> {
        self.fields.find_by_id(id)
    }

    /// Mutable access for attribute setters (text, caret, font, max length, ...)
    pub fn field_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.find_by_id_mut(id)
    }

    pub fn field_by_control(&self, control: ControlId) -> Option<&Field> {
        self.fields.find_by_control(control)
    }

    pub fn fields(&self) -> &FieldDirectory {
        &self.fields
    }

    /// Enable or disable a field. Disabling the focused field clears focus.
    ///
    /// Returns false if the field does not exist.
    pub fn set_enabled(&mut self, id: FieldId, enabled: bool) -> bool {
        let Some(field) = self.fields.find_by_id_mut(id) else {
            return false;
        };
        field.set_enabled_flag(enabled);
        if !enabled && self.focus.focused() == Some(id) {
            self.focus.set_focus(&mut self.fields, None);
        }
        true
    }

    // =========================================================================
    // Focus
    // =========================================================================

    pub fn focused(&self) -> Option<FieldId> {
        self.focus.focused()
    }

    /// Focus `target` (or nothing). Fails for disabled or unknown fields.
    pub fn set_focus(&mut self, target: Option<FieldId>) -> bool {
        let ok = self.focus.set_focus(&mut self.fields, target);
        if ok {
            self.blink_ticks = 0;
        }
        ok
    }

    // =========================================================================
    // Events
    // =========================================================================

    /// Apply a key press to `id`.
    ///
    /// Only the focused, enabled field reacts. Returns true if the key was
    /// consumed; false leaves it to the host.
    pub fn handle_key_press(&mut self, id: FieldId, key: KeyCode) -> bool {
        if self.focus.focused() != Some(id) {
            return false;
        }
        let Some(field) = self.fields.find_by_id_mut(id) else {
            return false;
        };
        if !field.is_enabled() {
            return false;
        }

        let Some(msg) = key.edit_msg() else {
            tracing::trace!(field = %id, %key, "key not handled");
            return false;
        };
        if msg == TextEditMsg::Activate && !self.config.handles_return {
            return false;
        }

        let before = FieldSnapshot::from_field(field);
        apply_text_edit_msg(field, msg);
        if let Some(diff) = before.diff(&FieldSnapshot::from_field(field)) {
            tracing::trace!(field = %id, %key, "{}", diff);
        }

        self.blink_ticks = 0;
        true
    }

    /// Apply a mouse press to `id`: focus it and, if the press lies inside the
    /// field, move the caret to the closest character boundary.
    ///
    /// Returns false only for unknown or disabled fields.
    pub fn handle_mouse_click(&mut self, id: FieldId, click: MouseClick) -> bool {
        match self.fields.find_by_id(id) {
            Some(field) if field.is_enabled() => {}
            _ => return false,
        }
        if !self.focus.set_focus(&mut self.fields, Some(id)) {
            return false;
        }

        if let Some(field) = self.fields.find_by_id_mut(id) {
            let style = *field.style();
            if style.bounds.contains(click.x, click.y) {
                let index = caret::caret_index_from_pixel(
                    field.text(),
                    &self.metrics,
                    style.font,
                    click.x - style.text_origin_x(),
                    self.config.caret_offset,
                );
                tracing::trace!(field = %id, ?click, index, "caret placed by click");
                field.set_caret(index);
            }
        }

        self.blink_ticks = 0;
        true
    }

    /// Route a click on any host control. Clicks on controls without a field
    /// return false and change nothing.
    pub fn handle_mouse_click_any(&mut self, control: ControlId, click: MouseClick) -> bool {
        match self.fields.id_for_control(control) {
            Some(id) => self.handle_mouse_click(id, click),
            None => false,
        }
    }

    /// Read and clear the activation flag of `id` (true once per Return)
    pub fn activated(&mut self, id: FieldId) -> bool {
        self.fields
            .find_by_id_mut(id)
            .is_some_and(|field| field.take_activated())
    }

    // =========================================================================
    // Caret blink
    // =========================================================================

    /// Advance the blink timer by one host tick
    pub fn tick(&mut self) {
        self.blink_ticks = self.blink_ticks.wrapping_add(1);
    }

    /// Whether the caret of `id` should be drawn this tick
    pub fn caret_visible(&self, id: FieldId) -> bool {
        if self.focus.focused() != Some(id) {
            return false;
        }
        match self.config.blink_delay {
            0 => true,
            delay => (self.blink_ticks / delay) % 2 == 0,
        }
    }
}

/// Apply one editing message to a field. Returns true if the field changed.
fn apply_text_edit_msg(field: &mut Field, msg: TextEditMsg) -> bool {
    let id = field.id();
    match msg {
        TextEditMsg::InsertChar(ch) => {
            let (text, index, constraints) = field.edit_parts();
            if !caret::insert_at(text, *index, ch, constraints) {
                tracing::debug!(field = %id, ?ch, "insertion rejected by constraints");
                return false;
            }
            *index += 1;
            true
        }
        TextEditMsg::DeleteBackward => {
            let (text, index, _) = field.edit_parts();
            let before = *index;
            *index = caret::delete_backward(text, before);
            *index != before
        }
        TextEditMsg::DeleteForward => {
            let (text, index, _) = field.edit_parts();
            let len = caret::char_len(text);
            *index = caret::delete_forward(text, *index);
            caret::char_len(text) != len
        }
        TextEditMsg::Move(target) => {
            let (text, index, _) = field.edit_parts();
            let before = *index;
            *index = caret::move_caret(text, before, target);
            *index != before
        }
        TextEditMsg::Activate => {
            field.set_activated(true);
            true
        }
    }
}

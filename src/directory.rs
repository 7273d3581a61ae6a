//! Field directory: owns every field and indexes it by id and by control.
//!
//! Fields live in a single arena keyed by [`FieldId`]; the control index only
//! stores ids, so no field is ever duplicated.

use std::collections::HashMap;

use crate::error::FieldError;
use crate::field::{Field, FieldId, FieldStyle};
use crate::host::{ControlId, DisplayControl};

#[derive(Debug, Default)]
pub struct FieldDirectory {
    fields: HashMap<FieldId, Field>,
    by_control: HashMap<ControlId, FieldId>,
    next_id: u64,
}

impl FieldDirectory {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
            by_control: HashMap::new(),
            next_id: 1,
        }
    }

    /// Bind a new field to `control`.
    ///
    /// Captures the control's bounds, font and text color. With no
    /// `initial_text` the control's current label becomes the text.
    pub fn create(
        &mut self,
        control: &dyn DisplayControl,
        initial_text: Option<&str>,
        padding_left: f32,
        padding_top: f32,
    ) -> Result<FieldId, FieldError> {
        let control_id = control.control_id();
        if control_id.is_null() {
            tracing::warn!("refusing to bind a field to the null control");
            return Err(FieldError::NullControl);
        }
        if self.by_control.contains_key(&control_id) {
            tracing::warn!(control = %control_id, "control already bound");
            return Err(FieldError::AlreadyBound(control_id));
        }

        // Ids start at 1 even for a Default-constructed directory
        let id = FieldId::from_raw(self.next_id.max(1));
        self.next_id = id.as_raw() + 1;

        let text = match initial_text {
            Some(text) => text.to_string(),
            None => control.label(),
        };
        let style = FieldStyle {
            font: control.font(),
            text_color: control.text_color(),
            border_alpha: 1.0,
            padding_left,
            padding_top,
            bounds: control.bounds(),
        };

        self.fields
            .insert(id, Field::new(id, control_id, text, style));
        self.by_control.insert(control_id, id);
        tracing::debug!(field = %id, control = %control_id, "field created");
        Ok(id)
    }

    pub fn find_by_id(&self, id: FieldId) -> Option<&Field> {
        self.fields.get(&id)
    }

    pub fn find_by_id_mut(&mut self, id: FieldId) -> Option<&mut Field> {
        self.fields.get_mut(&id)
    }

    /// Id of the field bound to `control`, if any
    pub fn id_for_control(&self, control: ControlId) -> Option<FieldId> {
        self.by_control.get(&control).copied()
    }

    pub fn find_by_control(&self, control: ControlId) -> Option<&Field> {
        self.id_for_control(control)
            .and_then(|id| self.fields.get(&id))
    }

    pub fn find_by_control_mut(&mut self, control: ControlId) -> Option<&mut Field> {
        let id = self.id_for_control(control)?;
        self.fields.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// All fields, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.fields.values()
    }
}

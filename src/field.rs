//! Per-field state.
//!
//! A `Field` is one text input bound to exactly one host display control. Its
//! setters keep the field invariants:
//! - caret is always in `[0, char_len(text)]`
//! - text never exceeds the max length when one is set
//!
//! Focus and activation flags are owned by [`FocusRegistry`](crate::focus::FocusRegistry)
//! and [`TextFields`](crate::TextFields); fields never set them on their own.

use crate::editable::caret::{self, char_len};
use crate::editable::{CharFilter, EditConstraints};
use crate::host::{Color, ControlId, FontId, Rect};

/// Stable identifier of a field, unique for the lifetime of its `TextFields`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FieldId(u64);

impl FieldId {
    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "field#{}", self.0)
    }
}

/// Visual parameters of a field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldStyle {
    pub font: FontId,
    pub text_color: Color,
    /// Border opacity, 0.0 (invisible) to 1.0 (opaque)
    pub border_alpha: f32,
    pub padding_left: f32,
    pub padding_top: f32,
    /// Control geometry captured at creation
    pub bounds: Rect,
}

impl FieldStyle {
    /// Left edge of the text in window pixels
    pub fn text_origin_x(&self) -> f32 {
        self.bounds.x + self.padding_left
    }

    /// Top edge of the text in window pixels
    pub fn text_origin_y(&self) -> f32 {
        self.bounds.y + self.padding_top
    }
}

#[derive(Debug, Clone)]
pub struct Field {
    id: FieldId,
    control: ControlId,
    text: String,
    caret: usize,
    enabled: bool,
    has_focus: bool,
    activated: bool,
    style: FieldStyle,
    constraints: EditConstraints,
}

impl Field {
    pub(crate) fn new(id: FieldId, control: ControlId, text: String, style: FieldStyle) -> Self {
        let caret = char_len(&text);
        Self {
            id,
            control,
            text,
            caret,
            enabled: true,
            has_focus: false,
            activated: false,
            style,
            constraints: EditConstraints::unbounded(),
        }
    }

    pub fn id(&self) -> FieldId {
        self.id
    }

    /// The display control this field is bound to (never changes)
    pub fn control(&self) -> ControlId {
        self.control
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret position as a character index
    pub fn caret(&self) -> usize {
        self.caret
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn has_focus(&self) -> bool {
        self.has_focus
    }

    /// Peek at the activation flag without clearing it
    pub fn is_activated(&self) -> bool {
        self.activated
    }

    pub fn style(&self) -> &FieldStyle {
        &self.style
    }

    pub fn constraints(&self) -> &EditConstraints {
        &self.constraints
    }

    /// Max length in characters, 0 = unlimited
    pub fn max_length(&self) -> usize {
        self.constraints.max_length_raw()
    }

    /// Replace the text. Truncated to max length; caret clamped.
    pub fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        if self.constraints.truncate(&mut self.text) {
            tracing::debug!(field = %self.id, max = self.max_length(), "text truncated");
        }
        self.clamp_caret();
    }

    /// Move the caret; out-of-range indices clamp to the end
    pub fn set_caret(&mut self, index: usize) {
        self.caret = caret::clamp_index(&self.text, index);
    }

    /// Set max length (0 = unlimited). Existing text is truncated to fit.
    pub fn set_max_length(&mut self, max: usize) {
        self.constraints.max_length = EditConstraints::with_max_length(max).max_length;
        if self.constraints.truncate(&mut self.text) {
            tracing::debug!(field = %self.id, max, "text truncated to new max length");
        }
        self.clamp_caret();
    }

    /// Restrict which characters typing may insert. Existing text is kept.
    pub fn set_char_filter(&mut self, filter: Option<CharFilter>) {
        self.constraints.char_filter = filter;
    }

    pub fn set_font(&mut self, font: FontId) {
        self.style.font = font;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.style.text_color = color;
    }

    /// Border opacity, clamped to `0.0..=1.0`
    pub fn set_border_alpha(&mut self, alpha: f32) {
        self.style.border_alpha = if alpha.is_nan() {
            1.0
        } else {
            alpha.clamp(0.0, 1.0)
        };
    }

    pub fn set_padding(&mut self, left: f32, top: f32) {
        self.style.padding_left = left;
        self.style.padding_top = top;
    }

    fn clamp_caret(&mut self) {
        self.caret = caret::clamp_index(&self.text, self.caret);
    }

    // Crate-internal mutators used by the focus registry and dispatcher

    pub(crate) fn set_enabled_flag(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_focus_flag(&mut self, focused: bool) {
        self.has_focus = focused;
    }

    pub(crate) fn set_activated(&mut self, activated: bool) {
        self.activated = activated;
    }

    /// Read and clear the activation flag
    pub(crate) fn take_activated(&mut self) -> bool {
        std::mem::take(&mut self.activated)
    }

    pub(crate) fn edit_parts(&mut self) -> (&mut String, &mut usize, &EditConstraints) {
        (&mut self.text, &mut self.caret, &self.constraints)
    }
}

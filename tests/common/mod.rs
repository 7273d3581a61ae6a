//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use token_field::host::{Canvas, Color, ControlId, DisplayControl, FontId, Rect};
use token_field::metrics::MonospaceMetrics;
use token_field::{FieldConfig, FieldId, TextFields};

/// Character width used by every test context
pub const CHAR_WIDTH: f32 = 10.0;

/// A host label control with fixed geometry
#[derive(Debug, Clone)]
pub struct FakeControl {
    pub id: ControlId,
    pub bounds: Rect,
    pub label: String,
}

impl FakeControl {
    /// Control `raw` laid out in its own row: x = 0, y = raw * 30, 200x20
    pub fn new(raw: u64) -> Self {
        Self {
            id: ControlId::from_raw(raw),
            bounds: Rect::new(0.0, raw as f32 * 30.0, 200.0, 20.0),
            label: String::new(),
        }
    }
}

impl DisplayControl for FakeControl {
    fn control_id(&self) -> ControlId {
        self.id
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn font(&self) -> FontId {
        FontId(0)
    }

    fn text_color(&self) -> Color {
        Color::BLACK
    }

    fn label(&self) -> String {
        self.label.clone()
    }

    fn set_label(&mut self, label: &str) {
        self.label = label.to_string();
    }
}

/// Canvas that records every filled rectangle
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub rects: Vec<(Rect, Color)>,
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.rects.push((rect, color));
    }
}

/// Config with no caret offset and no blinking, so pixel math stays simple
pub fn test_config() -> FieldConfig {
    FieldConfig {
        blink_delay: 0,
        handles_return: true,
        caret_offset: 0.0,
    }
}

/// Empty context with monospace metrics (CHAR_WIDTH px per char)
pub fn test_fields() -> TextFields<MonospaceMetrics> {
    TextFields::new(test_config(), MonospaceMetrics::new(CHAR_WIDTH, 16.0))
}

/// Context with one field bound to control 1, holding `text` with the caret at `caret`
pub fn test_field(text: &str, caret: usize) -> (TextFields<MonospaceMetrics>, FieldId) {
    let mut fields = test_fields();
    let id = fields
        .create(&FakeControl::new(1), Some(text), 0.0, 0.0)
        .unwrap();
    fields.field_mut(id).unwrap().set_caret(caret);
    (fields, id)
}

/// Same as `test_field`, with the field focused
pub fn focused_field(text: &str, caret: usize) -> (TextFields<MonospaceMetrics>, FieldId) {
    let (mut fields, id) = test_field(text, caret);
    assert!(fields.set_focus(Some(id)));
    (fields, id)
}

/// Current text of a field
pub fn text_of(fields: &TextFields<MonospaceMetrics>, id: FieldId) -> String {
    fields.field(id).unwrap().text().to_string()
}

/// Current caret of a field
pub fn caret_of(fields: &TextFields<MonospaceMetrics>, id: FieldId) -> usize {
    fields.field(id).unwrap().caret()
}

/// Number of fields reporting focus
pub fn focused_count(fields: &TextFields<MonospaceMetrics>) -> usize {
    fields.fields().iter().filter(|f| f.has_focus()).count()
}

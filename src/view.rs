//! Text field rendering helpers.
//!
//! The host draws the label text itself through its control. What the field
//! adds on top is kept in sync here:
//! - the control's label mirrors the field text
//! - the caret bar, drawn through [`Canvas`] while the blink phase is "on"
//! - the border, faded by the field's border alpha

use crate::dispatch::TextFields;
use crate::editable::caret;
use crate::field::{Field, FieldId};
use crate::host::{Canvas, DisplayControl, Rect, TextMetrics};

/// Width of the caret bar in pixels
pub const CARET_WIDTH: f32 = 2.0;

/// Stateless renderer for fields.
pub struct FieldRenderer;

impl FieldRenderer {
    /// Write the field text into the control's label if it differs.
    ///
    /// Returns true if the label was updated.
    pub fn sync_label(field: &Field, control: &mut dyn DisplayControl) -> bool {
        if control.label() == field.text() {
            return false;
        }
        control.set_label(field.text());
        true
    }

    /// Caret bar rectangle in window pixels, clipped to the field's height
    pub fn caret_rect(field: &Field, metrics: &dyn TextMetrics, caret_offset: f32) -> Rect {
        let style = field.style();
        let x = style.text_origin_x()
            + caret::pixel_from_caret_index(
                field.text(),
                metrics,
                style.font,
                field.caret(),
                caret_offset,
            );
        let y = style.text_origin_y();
        let available = (style.bounds.y + style.bounds.height - y).max(0.0);
        let height = metrics.line_height(style.font).min(available);
        Rect::new(x, y, CARET_WIDTH, height)
    }

    /// Draw a 1px border around the field, faded by its border alpha.
    ///
    /// Nothing is drawn for a fully transparent border.
    pub fn draw_border(field: &Field, canvas: &mut dyn Canvas) -> bool {
        let style = field.style();
        let alpha = (style.border_alpha * style.text_color.alpha() as f32).round() as u8;
        if alpha == 0 {
            return false;
        }
        let color = style.text_color.with_alpha(alpha);
        let b = style.bounds;
        canvas.fill_rect(Rect::new(b.x, b.y, b.width, 1.0), color);
        canvas.fill_rect(Rect::new(b.x, b.y + b.height - 1.0, b.width, 1.0), color);
        canvas.fill_rect(Rect::new(b.x, b.y, 1.0, b.height), color);
        canvas.fill_rect(Rect::new(b.x + b.width - 1.0, b.y, 1.0, b.height), color);
        true
    }
}

impl<M: TextMetrics> TextFields<M> {
    /// Render field `id`: sync its control's label, draw the border and, when
    /// visible this tick, the caret.
    ///
    /// Returns false if the field does not exist or `control` is not its control.
    pub fn render(
        &self,
        id: FieldId,
        control: &mut dyn DisplayControl,
        canvas: &mut dyn Canvas,
    ) -> bool {
        let Some(field) = self.field(id) else {
            return false;
        };
        if field.control() != control.control_id() {
            tracing::warn!(
                field = %id,
                control = %control.control_id(),
                "render with foreign control"
            );
            return false;
        }

        FieldRenderer::sync_label(field, control);
        FieldRenderer::draw_border(field, canvas);
        if self.caret_visible(id) {
            let rect = FieldRenderer::caret_rect(field, self.metrics(), self.config().caret_offset);
            canvas.fill_rect(rect, field.style().text_color);
        }
        true
    }
}

//! Contracts between the text field core and the host UI toolkit.
//!
//! The core never draws or measures text on its own. The host supplies:
//! - [`DisplayControl`]: the clickable label a field is bound to
//! - [`TextMetrics`]: pixel widths of strings in a given font
//! - [`Canvas`]: a surface to fill caret rectangles on

/// Opaque handle of a host display control.
///
/// `ControlId::NULL` (raw value 0) is the host's "no control" handle and can
/// never be bound to a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ControlId(u64);

impl ControlId {
    pub const NULL: ControlId = ControlId(0);

    #[inline]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for ControlId {
    fn from(raw: u64) -> Self {
        Self::from_raw(raw)
    }
}

impl std::fmt::Display for ControlId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "control#{}", self.0)
    }
}

/// Handle of a host font. Meaning is defined by the [`TextMetrics`] backend.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FontId(pub u32);

/// ARGB color, `0xAARRGGBB`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF000000);
    pub const WHITE: Color = Color(0xFFFFFFFF);

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Same color with alpha replaced
    pub const fn with_alpha(self, alpha: u8) -> Color {
        Color((self.0 & 0x00FFFFFF) | ((alpha as u32) << 24))
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// Axis-aligned rectangle in window pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside this rectangle (right/bottom edges exclusive)
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Text measurement provided by the host's font renderer.
pub trait TextMetrics {
    /// Width in pixels of `text` rendered in `font`
    fn measure(&self, font: FontId, text: &str) -> f32;

    /// Line height in pixels, used for the caret bar
    fn line_height(&self, font: FontId) -> f32;
}

/// The host's clickable label a field is layered on.
///
/// Changing the control's geometry, font or color behind the field's back
/// after binding is not supported: the field keeps what it captured.
pub trait DisplayControl {
    fn control_id(&self) -> ControlId;

    fn bounds(&self) -> Rect;

    fn font(&self) -> FontId;

    fn text_color(&self) -> Color;

    fn label(&self) -> String;

    fn set_label(&mut self, label: &str);
}

/// Drawing surface for the caret
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

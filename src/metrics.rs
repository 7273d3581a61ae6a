//! Text measurement backends.
//!
//! `MonospaceMetrics` mirrors the editor's fixed `char_width` model and is what
//! tests use. `FontdueMetrics` measures real glyph advances.

use anyhow::Result;
use fontdue::{Font, FontSettings};

use crate::host::{FontId, TextMetrics};

/// Fixed advance per character, the same for every font handle.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceMetrics {
    pub char_width: f32,
    pub line_height: f32,
}

impl MonospaceMetrics {
    pub const fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::new(8.0, 16.0)
    }
}

impl TextMetrics for MonospaceMetrics {
    fn measure(&self, _font: FontId, text: &str) -> f32 {
        text.chars().count() as f32 * self.char_width
    }

    fn line_height(&self, _font: FontId) -> f32 {
        self.line_height
    }
}

/// A font loaded into [`FontdueMetrics`] together with its pixel size
struct LoadedFont {
    font: Font,
    size: f32,
}

/// Glyph-advance metrics backed by `fontdue`.
///
/// `FontId(n)` refers to the n-th font added with [`FontdueMetrics::add_font`].
/// Unknown handles measure as zero width.
#[derive(Default)]
pub struct FontdueMetrics {
    fonts: Vec<LoadedFont>,
}

impl FontdueMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TTF/OTF font and register it at `size` pixels
    pub fn add_font(&mut self, bytes: &[u8], size: f32) -> Result<FontId> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|e| anyhow::anyhow!("Failed to load font: {}", e))?;
        let id = FontId(self.fonts.len() as u32);
        self.fonts.push(LoadedFont { font, size });
        tracing::debug!(?id, size, "registered font");
        Ok(id)
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    fn get(&self, font: FontId) -> Option<&LoadedFont> {
        self.fonts.get(font.0 as usize)
    }
}

impl TextMetrics for FontdueMetrics {
    fn measure(&self, font: FontId, text: &str) -> f32 {
        let Some(loaded) = self.get(font) else {
            return 0.0;
        };
        text.chars()
            .map(|ch| loaded.font.metrics(ch, loaded.size).advance_width)
            .sum()
    }

    fn line_height(&self, font: FontId) -> f32 {
        let Some(loaded) = self.get(font) else {
            return 0.0;
        };
        loaded
            .font
            .horizontal_line_metrics(loaded.size)
            .map(|m| m.new_line_size.ceil())
            .unwrap_or(loaded.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monospace_measure_counts_chars_not_bytes() {
        let m = MonospaceMetrics::new(10.0, 20.0);
        assert_eq!(m.measure(FontId(0), ""), 0.0);
        assert_eq!(m.measure(FontId(0), "abc"), 30.0);
        assert_eq!(m.measure(FontId(3), "åäö"), 30.0);
        assert_eq!(m.line_height(FontId(0)), 20.0);
    }

    #[test]
    fn test_fontdue_rejects_garbage_bytes() {
        let mut m = FontdueMetrics::new();
        assert!(m.add_font(b"not a font", 14.0).is_err());
        assert_eq!(m.font_count(), 0);
    }

    #[test]
    fn test_fontdue_unknown_font_measures_zero() {
        let m = FontdueMetrics::new();
        assert_eq!(m.measure(FontId(0), "hello"), 0.0);
        assert_eq!(m.line_height(FontId(0)), 0.0);
    }
}

//! Caret engine: pure caret/text transformations.
//!
//! All indices are character indices into a single line of text, never byte
//! offsets. Every function clamps its index argument to `[0, char_len(text)]`.
//!
//! Pixel positions are relative to the text origin (the field's left edge
//! plus its left padding). `caret_offset` nudges the caret bar between glyphs;
//! both directions apply it so that index → pixel → index is lossless.

use crate::host::{FontId, TextMetrics};

use super::constraints::EditConstraints;
use super::messages::MoveTarget;

/// Number of characters in `text`
#[inline]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Convert char index to byte offset (end of string if out of range)
pub fn char_to_byte(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

/// Clamp a caret index to `[0, char_len(text)]`
#[inline]
pub fn clamp_index(text: &str, index: usize) -> usize {
    index.min(char_len(text))
}

/// Caret boundary closest to `pixel_x`.
///
/// Boundary `k` sits at `measure(text[..k]) + caret_offset`. Ties resolve to
/// the left boundary. Positions before the first boundary give 0, positions
/// past the last give `char_len(text)`.
pub fn caret_index_from_pixel(
    text: &str,
    metrics: &dyn TextMetrics,
    font: FontId,
    pixel_x: f32,
    caret_offset: f32,
) -> usize {
    let x = pixel_x - caret_offset;
    if x <= 0.0 {
        return 0;
    }

    let mut prev_width = 0.0;
    for (index, (byte, _)) in text.char_indices().enumerate().skip(1) {
        let width = metrics.measure(font, &text[..byte]);
        if x < width {
            // Between boundary index-1 and index
            return if x - prev_width <= width - x {
                index - 1
            } else {
                index
            };
        }
        prev_width = width;
    }

    let len = char_len(text);
    if len == 0 {
        return 0;
    }
    let full = metrics.measure(font, text);
    if x >= full {
        len
    } else if x - prev_width <= full - x {
        len - 1
    } else {
        len
    }
}

/// Pixel x of the caret drawn before character `index`
pub fn pixel_from_caret_index(
    text: &str,
    metrics: &dyn TextMetrics,
    font: FontId,
    index: usize,
    caret_offset: f32,
) -> f32 {
    let byte = char_to_byte(text, clamp_index(text, index));
    metrics.measure(font, &text[..byte]) + caret_offset
}

/// Insert `ch` before `index`.
///
/// Rejected without touching `text` if the constraints refuse the character or
/// the insertion would exceed max length. Returns true if inserted.
pub fn insert_at(text: &mut String, index: usize, ch: char, constraints: &EditConstraints) -> bool {
    if !constraints.is_char_allowed(ch) {
        return false;
    }
    if constraints.would_exceed_max_length(char_len(text), 1) {
        return false;
    }
    let byte = char_to_byte(text, clamp_index(text, index));
    text.insert(byte, ch);
    true
}

/// Remove the character before `index` (Backspace). Returns the new caret index.
pub fn delete_backward(text: &mut String, index: usize) -> usize {
    let index = clamp_index(text, index);
    if index == 0 {
        return 0;
    }
    let start = char_to_byte(text, index - 1);
    let end = char_to_byte(text, index);
    text.replace_range(start..end, "");
    index - 1
}

/// Remove the character at `index` (Delete). Returns the new caret index.
pub fn delete_forward(text: &mut String, index: usize) -> usize {
    let index = clamp_index(text, index);
    if index == char_len(text) {
        return index;
    }
    let start = char_to_byte(text, index);
    let end = char_to_byte(text, index + 1);
    text.replace_range(start..end, "");
    index
}

/// Caret index after moving towards `target`
pub fn move_caret(text: &str, index: usize, target: MoveTarget) -> usize {
    let len = char_len(text);
    let index = index.min(len);
    match target {
        MoveTarget::Left => index.saturating_sub(1),
        MoveTarget::Right => (index + 1).min(len),
        MoveTarget::LineStart => 0,
        MoveTarget::LineEnd => len,
    }
}

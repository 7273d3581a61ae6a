//! Adapter to convert winit key and mouse events to our input types

use winit::event::MouseButton as WinitMouseButton;
use winit::keyboard::{Key, NamedKey};

use super::types::{KeyCode, MouseButton};

/// Convert a winit logical key to our KeyCode
///
/// Returns None for keys text fields never look at (function keys, dead keys,
/// unidentified keys); the host keeps handling those itself.
pub fn key_from_winit(logical_key: &Key) -> Option<KeyCode> {
    match logical_key {
        Key::Named(named) => Some(match named {
            NamedKey::Enter => KeyCode::Return,
            NamedKey::Escape => KeyCode::Escape,
            NamedKey::Tab => KeyCode::Tab,
            NamedKey::Backspace => KeyCode::Backspace,
            NamedKey::Delete => KeyCode::Delete,
            NamedKey::Space => KeyCode::Char(' '),

            // Arrows
            NamedKey::ArrowUp => KeyCode::Up,
            NamedKey::ArrowDown => KeyCode::Down,
            NamedKey::ArrowLeft => KeyCode::Left,
            NamedKey::ArrowRight => KeyCode::Right,

            // Navigation
            NamedKey::Home => KeyCode::Home,
            NamedKey::End => KeyCode::End,

            _ => return None,
        }),

        // Character keys keep their case: they are text, not shortcuts
        Key::Character(s) => {
            let mut chars = s.chars();
            let c = chars.next()?;
            // Multi-char sequences come from composition, which fields don't handle
            if chars.next().is_some() {
                return None;
            }
            Some(KeyCode::Char(c))
        }

        _ => None,
    }
}

/// Convert a winit mouse button
pub fn mouse_button_from_winit(button: WinitMouseButton) -> MouseButton {
    match button {
        WinitMouseButton::Left => MouseButton::Left,
        WinitMouseButton::Right => MouseButton::Right,
        WinitMouseButton::Middle => MouseButton::Middle,
        WinitMouseButton::Back => MouseButton::Other(3),
        WinitMouseButton::Forward => MouseButton::Other(4),
        WinitMouseButton::Other(n) => MouseButton::Other(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_keys() {
        assert_eq!(
            key_from_winit(&Key::Named(NamedKey::Enter)),
            Some(KeyCode::Return)
        );
        assert_eq!(
            key_from_winit(&Key::Named(NamedKey::Backspace)),
            Some(KeyCode::Backspace)
        );
        assert_eq!(
            key_from_winit(&Key::Named(NamedKey::ArrowLeft)),
            Some(KeyCode::Left)
        );
        assert_eq!(
            key_from_winit(&Key::Named(NamedKey::Space)),
            Some(KeyCode::Char(' '))
        );
        assert_eq!(key_from_winit(&Key::Named(NamedKey::F5)), None);
    }

    #[test]
    fn test_character_keys_keep_case() {
        assert_eq!(
            key_from_winit(&Key::Character("A".into())),
            Some(KeyCode::Char('A'))
        );
        assert_eq!(
            key_from_winit(&Key::Character("ø".into())),
            Some(KeyCode::Char('ø'))
        );
        assert_eq!(key_from_winit(&Key::Character("ab".into())), None);
    }

    #[test]
    fn test_mouse_buttons() {
        assert_eq!(
            mouse_button_from_winit(WinitMouseButton::Left),
            MouseButton::Left
        );
        assert_eq!(
            mouse_button_from_winit(WinitMouseButton::Other(9)),
            MouseButton::Other(9)
        );
    }
}

//! Core input types: KeyCode, MouseButton, MouseClick

use std::fmt;

use crate::editable::{MoveTarget, TextEditMsg};

/// A key as delivered by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key, as typed (case preserved, space included)
    Char(char),

    // Named keys
    Return,
    Escape,
    Tab,
    Backspace,
    Delete,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,

    /// Host keycode with no meaning to text fields
    Other(u32),
}

impl KeyCode {
    /// Editing intent of this key, if text fields understand it.
    ///
    /// Control characters are not printable and decode to nothing.
    pub fn edit_msg(self) -> Option<TextEditMsg> {
        match self {
            KeyCode::Char(c) if !c.is_control() => Some(TextEditMsg::InsertChar(c)),
            KeyCode::Backspace => Some(TextEditMsg::DeleteBackward),
            KeyCode::Delete => Some(TextEditMsg::DeleteForward),
            KeyCode::Left => Some(TextEditMsg::Move(MoveTarget::Left)),
            KeyCode::Right => Some(TextEditMsg::Move(MoveTarget::Right)),
            KeyCode::Home => Some(TextEditMsg::Move(MoveTarget::LineStart)),
            KeyCode::End => Some(TextEditMsg::Move(MoveTarget::LineEnd)),
            KeyCode::Return => Some(TextEditMsg::Activate),
            _ => None,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Char(' ') => write!(f, "Space"),
            KeyCode::Char(c) => write!(f, "{}", c),
            KeyCode::Return => write!(f, "Return"),
            KeyCode::Escape => write!(f, "Escape"),
            KeyCode::Tab => write!(f, "Tab"),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Up => write!(f, "↑"),
            KeyCode::Down => write!(f, "↓"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Home => write!(f, "Home"),
            KeyCode::End => write!(f, "End"),
            KeyCode::Other(code) => write!(f, "Key({})", code),
        }
    }
}

/// Mouse button of a click
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// A mouse press at a window position (physical pixels)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MouseClick {
    pub button: MouseButton,
    pub x: f32,
    pub y: f32,
}

impl MouseClick {
    pub const fn new(button: MouseButton, x: f32, y: f32) -> Self {
        Self { button, x, y }
    }

    pub const fn left(x: f32, y: f32) -> Self {
        Self::new(MouseButton::Left, x, y)
    }
}

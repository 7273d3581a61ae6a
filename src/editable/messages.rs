//! Message types for field editing.

/// Target for caret movement operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveTarget {
    /// Move one character left
    Left,
    /// Move one character right
    Right,
    /// Move to start of line (Home)
    LineStart,
    /// Move to end of line (End)
    LineEnd,
}

/// Editing operation a key press resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEditMsg {
    /// Move caret
    Move(MoveTarget),
    /// Insert a single character before the caret
    InsertChar(char),
    /// Delete character before caret (Backspace)
    DeleteBackward,
    /// Delete character at caret (Delete)
    DeleteForward,
    /// Commit (Return)
    Activate,
}

impl TextEditMsg {
    /// Check if this message modifies the text
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            TextEditMsg::InsertChar(_) | TextEditMsg::DeleteBackward | TextEditMsg::DeleteForward
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_editing() {
        assert!(TextEditMsg::InsertChar('a').is_editing());
        assert!(TextEditMsg::DeleteBackward.is_editing());
        assert!(TextEditMsg::DeleteForward.is_editing());
        assert!(!TextEditMsg::Move(MoveTarget::Left).is_editing());
        assert!(!TextEditMsg::Activate.is_editing());
    }
}

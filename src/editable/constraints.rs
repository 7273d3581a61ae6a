//! Edit constraints for text fields.
//!
//! Constraints define which insertions a field accepts.

/// Character filter function type
pub type CharFilter = fn(char) -> bool;

/// Constraints that limit what a field accepts.
#[derive(Debug, Clone, Copy, Default)]
pub struct EditConstraints {
    /// Maximum length in characters (None = unlimited)
    pub max_length: Option<usize>,

    /// Character filter (None = all printable characters allowed)
    /// Returns true if character is allowed
    pub char_filter: Option<CharFilter>,
}

impl EditConstraints {
    /// No length limit, no filter
    pub const fn unbounded() -> Self {
        Self {
            max_length: None,
            char_filter: None,
        }
    }

    /// Limit to `max` characters; 0 means unlimited
    pub const fn with_max_length(max: usize) -> Self {
        Self {
            max_length: if max == 0 { None } else { Some(max) },
            char_filter: None,
        }
    }

    /// Numeric input (digits only)
    pub fn numeric() -> Self {
        Self {
            max_length: None,
            char_filter: Some(|c| c.is_ascii_digit()),
        }
    }

    /// Max length as the host sees it: 0 = unlimited
    pub fn max_length_raw(&self) -> usize {
        self.max_length.unwrap_or(0)
    }

    /// Check if a character passes the filter (if any)
    pub fn is_char_allowed(&self, ch: char) -> bool {
        match self.char_filter {
            Some(filter) => filter(ch),
            None => true,
        }
    }

    /// Check if inserting text would exceed max length
    pub fn would_exceed_max_length(&self, current_len: usize, insert_len: usize) -> bool {
        if let Some(max) = self.max_length {
            current_len + insert_len > max
        } else {
            false
        }
    }

    /// Truncate `text` in place to the max length. Returns true if anything was cut.
    pub fn truncate(&self, text: &mut String) -> bool {
        let Some(max) = self.max_length else {
            return false;
        };
        match text.char_indices().nth(max) {
            Some((byte, _)) => {
                text.truncate(byte);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_means_unbounded() {
        let c = EditConstraints::with_max_length(0);
        assert_eq!(c.max_length, None);
        assert_eq!(c.max_length_raw(), 0);
        assert!(!c.would_exceed_max_length(10_000, 1));
    }

    #[test]
    fn test_max_length() {
        let c = EditConstraints::with_max_length(10);
        assert!(!c.would_exceed_max_length(5, 3));
        assert!(!c.would_exceed_max_length(9, 1));
        assert!(c.would_exceed_max_length(10, 1));
    }

    #[test]
    fn test_numeric_constraints() {
        let c = EditConstraints::numeric();
        assert!(c.is_char_allowed('0'));
        assert!(c.is_char_allowed('9'));
        assert!(!c.is_char_allowed('a'));
        assert!(!c.is_char_allowed('-'));
    }

    #[test]
    fn test_truncate_counts_chars() {
        let c = EditConstraints::with_max_length(3);
        let mut text = "åbcdef".to_string();
        assert!(c.truncate(&mut text));
        assert_eq!(text, "åbc");

        let mut short = "ab".to_string();
        assert!(!c.truncate(&mut short));
        assert_eq!(short, "ab");
    }

    #[test]
    fn test_truncate_unbounded_is_noop() {
        let mut text = "hello".to_string();
        assert!(!EditConstraints::unbounded().truncate(&mut text));
        assert_eq!(text, "hello");
    }
}

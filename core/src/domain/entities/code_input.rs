//! Entered-code buffer with digit filtering and completion tracking.

/// Outcome of applying text to the code buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeChange {
    /// The corrected text the widget should display, present only when the
    /// stored value differs from what was provided (non-digits stripped or
    /// overflow cut)
    pub corrected: Option<String>,
    /// True when this change moved the buffer from incomplete to complete
    pub newly_complete: bool,
}

/// The user's in-progress code entry.
///
/// Holds only ASCII digits and never more than the expected length. The
/// completion signal is edge-triggered: applying the same complete code
/// twice reports `newly_complete` only the first time, and it arms again
/// once the buffer drops below the expected length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeInput {
    digits: String,
    expected_len: usize,
}

impl CodeInput {
    /// Creates an empty buffer expecting `expected_len` digits.
    pub fn new(expected_len: usize) -> Self {
        Self {
            digits: String::new(),
            expected_len,
        }
    }

    /// Drops every character that is not an ASCII digit, preserving order.
    pub fn filter_digits(text: &str) -> String {
        text.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Replaces the buffer with the digits of `text`, clamped to the
    /// expected length.
    pub fn set(&mut self, text: &str) -> CodeChange {
        let mut stored = Self::filter_digits(text);
        if stored.len() > self.expected_len {
            stored.truncate(self.expected_len);
        }

        let was_complete = self.is_complete();
        let corrected = if stored != text {
            Some(stored.clone())
        } else {
            None
        };
        self.digits = stored;

        CodeChange {
            corrected,
            newly_complete: self.is_complete() && !was_complete,
        }
    }

    /// Empties the buffer without touching the expected length.
    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Empties the buffer and adopts a new expected length.
    pub fn reset(&mut self, expected_len: usize) {
        self.digits.clear();
        self.expected_len = expected_len;
    }

    pub fn as_str(&self) -> &str {
        &self.digits
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// True once the buffer holds exactly the expected number of digits.
    pub fn is_complete(&self) -> bool {
        self.digits.len() == self.expected_len
    }

    pub fn expected_len(&self) -> usize {
        self.expected_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_strips_non_digits() {
        let mut input = CodeInput::new(5);
        let change = input.set("1a2b3");

        assert_eq!(input.as_str(), "123");
        assert_eq!(change.corrected, Some("123".to_string()));
        assert!(!change.newly_complete);
    }

    #[test]
    fn test_set_clamps_to_expected_length() {
        let mut input = CodeInput::new(4);
        let change = input.set("123456");

        assert_eq!(input.as_str(), "1234");
        assert_eq!(change.corrected, Some("1234".to_string()));
        assert!(change.newly_complete);
    }

    #[test]
    fn test_clean_digit_input_needs_no_correction() {
        let mut input = CodeInput::new(5);
        let change = input.set("12345");

        assert_eq!(change.corrected, None);
        assert!(change.newly_complete);
    }

    #[test]
    fn test_completion_is_edge_triggered() {
        let mut input = CodeInput::new(4);

        assert!(input.set("1234").newly_complete);
        // Same complete code again must not re-fire.
        assert!(!input.set("1234").newly_complete);

        // Dropping below the expected length re-arms the signal.
        assert!(!input.set("123").newly_complete);
        assert!(input.set("1234").newly_complete);
    }

    #[test]
    fn test_clear_keeps_expected_length() {
        let mut input = CodeInput::new(4);
        input.set("1234");
        input.clear();

        assert!(input.is_empty());
        assert_eq!(input.expected_len(), 4);
        assert!(input.set("9876").newly_complete);
    }

    #[test]
    fn test_reset_adopts_new_length() {
        let mut input = CodeInput::new(4);
        input.set("1234");
        input.reset(6);

        assert!(input.is_empty());
        assert_eq!(input.expected_len(), 6);
        assert!(!input.set("1234").newly_complete);
        assert!(input.set("123456").newly_complete);
    }

    #[test]
    fn test_filter_digits_preserves_order() {
        assert_eq!(CodeInput::filter_digits("a1b2c3"), "123");
        assert_eq!(CodeInput::filter_digits("no digits"), "");
        assert_eq!(CodeInput::filter_digits("98-76"), "9876");
    }
}

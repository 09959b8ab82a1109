// ============================================================================
// Digit Editor
// Incremental string-based number entry state machine
// ============================================================================

use crate::numeric::{digit_to_char, Radix, RadixError, RadixResult, DELIMITER};

/// Canonical display text for an empty buffer.
const ZERO: &str = "0";

// Command codes consumed by [`DigitEditor::dispatch`]. Codes 0..=15 append
// the corresponding digit.

/// Append the integer/fraction delimiter
pub const CMD_DELIMITER: u8 = 16;
/// Remove the last character
pub const CMD_BACKSPACE: u8 = 17;
/// Clear the buffer
pub const CMD_CLEAR: u8 = 18;

/// A numeral string under construction, mutated one command at a time.
///
/// Operates purely on strings; no base-aware arithmetic. The buffer is
/// internally empty at start and reads as `"0"`.
///
/// Invariants: at most one delimiter ever appears, and the display text is
/// never the empty string.
///
/// # Example
/// ```
/// use numeral_engine::domain::DigitEditor;
/// use numeral_engine::numeric::Radix;
///
/// let mut editor = DigitEditor::new();
/// let dec = Radix::new(10).unwrap();
/// editor.append_digit(1, dec);
/// editor.append_digit(0, dec);
/// editor.append_delimiter();
/// assert_eq!(editor.append_digit(5, dec), "10.5");
/// ```
#[derive(Debug, Clone, Default)]
pub struct DigitEditor {
    buffer: String,
    has_delimiter: bool,
}

impl DigitEditor {
    /// Create an editor with an empty buffer (reads as `"0"`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Current display text; `"0"` while the buffer is empty.
    #[inline]
    pub fn current_text(&self) -> &str {
        if self.buffer.is_empty() {
            ZERO
        } else {
            &self.buffer
        }
    }

    /// Whether nothing meaningful has been entered yet.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.buffer.is_empty() || self.buffer == ZERO
    }

    /// Append a digit, validated against `base`. Invalid digits and a
    /// second leading zero are no-ops.
    pub fn append_digit(&mut self, digit: u8, base: Radix) -> &str {
        if !base.contains_digit(digit) {
            return self.current_text();
        }

        // Suppress a redundant leading zero
        if self.buffer == ZERO && digit == 0 {
            return self.current_text();
        }

        if self.buffer.is_empty() && digit == 0 {
            self.buffer.push_str(ZERO);
            return self.current_text();
        }

        // Digits are pre-validated, so conversion cannot fail
        if let Ok(ch) = digit_to_char(digit) {
            self.buffer.push(ch);
        }
        self.current_text()
    }

    /// Append the delimiter. Seeds an empty buffer with `"0"` first;
    /// idempotent once a delimiter is present.
    pub fn append_delimiter(&mut self) -> &str {
        if self.buffer.is_empty() {
            self.buffer.push_str(ZERO);
        }
        if !self.has_delimiter {
            self.buffer.push(DELIMITER);
            self.has_delimiter = true;
        }
        self.current_text()
    }

    /// Remove the last character; no-op on an empty buffer.
    pub fn backspace(&mut self) -> &str {
        if let Some(removed) = self.buffer.pop() {
            if removed == DELIMITER {
                self.has_delimiter = false;
            }
        }
        self.current_text()
    }

    /// Reset to the empty buffer.
    pub fn clear(&mut self) -> &str {
        self.buffer.clear();
        self.has_delimiter = false;
        self.current_text()
    }

    /// Number of digits after the delimiter; 0 when no delimiter is present.
    pub fn fraction_digit_count(&self) -> usize {
        match self.buffer.find(DELIMITER) {
            Some(pos) => self.buffer.len() - pos - 1,
            None => 0,
        }
    }

    /// Apply a command by code: `0..=15` append that digit, then the
    /// dedicated delimiter/backspace/clear codes.
    ///
    /// # Errors
    /// Returns `UnknownCommand` for any unmapped code.
    pub fn dispatch(&mut self, command: u8, base: Radix) -> RadixResult<&str> {
        match command {
            0..=15 => Ok(self.append_digit(command, base)),
            CMD_DELIMITER => Ok(self.append_delimiter()),
            CMD_BACKSPACE => Ok(self.backspace()),
            CMD_CLEAR => Ok(self.clear()),
            _ => Err(RadixError::UnknownCommand(command)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec() -> Radix {
        Radix::new(10).unwrap()
    }

    #[test]
    fn test_starts_as_zero() {
        let editor = DigitEditor::new();
        assert_eq!(editor.current_text(), "0");
        assert!(editor.is_zero());
    }

    #[test]
    fn test_reference_entry_sequence() {
        let mut editor = DigitEditor::new();
        editor.append_digit(1, dec());
        editor.append_digit(0, dec());
        editor.append_delimiter();
        assert_eq!(editor.append_digit(5, dec()), "10.5");
        assert_eq!(editor.fraction_digit_count(), 1);

        assert_eq!(editor.backspace(), "10.");
        assert_eq!(editor.fraction_digit_count(), 0);
    }

    #[test]
    fn test_leading_zero_suppression() {
        let mut editor = DigitEditor::new();
        assert_eq!(editor.append_digit(0, dec()), "0");
        assert_eq!(editor.append_digit(0, dec()), "0");
        // After the delimiter, zeros are ordinary fraction digits
        editor.append_delimiter();
        assert_eq!(editor.append_digit(0, dec()), "0.0");
    }

    #[test]
    fn test_digit_rejected_for_base() {
        let mut editor = DigitEditor::new();
        let binary = Radix::new(2).unwrap();
        editor.append_digit(1, binary);
        assert_eq!(editor.append_digit(2, binary), "1");
        assert_eq!(editor.append_digit(15, binary), "1");
    }

    #[test]
    fn test_delimiter_idempotent() {
        let mut editor = DigitEditor::new();
        editor.append_delimiter();
        assert_eq!(editor.current_text(), "0.");
        assert_eq!(editor.append_delimiter(), "0.");
        assert!(editor.current_text().matches('.').count() <= 1);
    }

    #[test]
    fn test_backspace_restores_delimiter_slot() {
        let mut editor = DigitEditor::new();
        editor.append_digit(7, dec());
        editor.append_delimiter();
        editor.backspace();
        // The delimiter may be placed again after being removed
        assert_eq!(editor.append_delimiter(), "7.");
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut editor = DigitEditor::new();
        assert_eq!(editor.backspace(), "0");
    }

    #[test]
    fn test_clear() {
        let mut editor = DigitEditor::new();
        editor.append_digit(9, dec());
        editor.append_delimiter();
        editor.append_digit(5, dec());
        assert_eq!(editor.clear(), "0");
        assert_eq!(editor.fraction_digit_count(), 0);
    }

    #[test]
    fn test_dispatch() {
        let mut editor = DigitEditor::new();
        editor.dispatch(4, dec()).unwrap();
        editor.dispatch(CMD_DELIMITER, dec()).unwrap();
        editor.dispatch(2, dec()).unwrap();
        assert_eq!(editor.current_text(), "4.2");

        editor.dispatch(CMD_BACKSPACE, dec()).unwrap();
        assert_eq!(editor.current_text(), "4.");

        editor.dispatch(CMD_CLEAR, dec()).unwrap();
        assert_eq!(editor.current_text(), "0");

        assert_eq!(
            editor.dispatch(99, dec()),
            Err(RadixError::UnknownCommand(99))
        );
    }

    #[test]
    fn test_display_never_empty() {
        let mut editor = DigitEditor::new();
        for command in [5, CMD_BACKSPACE, CMD_BACKSPACE, CMD_CLEAR, 0, CMD_DELIMITER] {
            let text = editor.dispatch(command, dec()).unwrap().to_string();
            assert!(!text.is_empty());
        }
    }
}

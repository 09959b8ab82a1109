// ============================================================================
// Conversion Session
// Orchestration state machine binding editor, converter, and history
// ============================================================================

use crate::domain::{ConversionHistory, ConversionRecord, DigitEditor};
use crate::numeric::{
    radix_to_real, real_to_radix, required_fraction_digits, Radix, RadixResult,
};

/// Command code that triggers a conversion; all lower codes are editor
/// commands (see [`crate::domain::editor`]).
pub const CMD_EXECUTE: u8 = 19;

/// Session lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting editing commands
    Editing,
    /// A result was just produced; the next edit starts a fresh number
    Converted,
}

/// "Convert once, then re-edit" workflow over a [`DigitEditor`].
///
/// Editing commands received while in [`SessionState::Converted`] first
/// clear the editor, so a result is never reused as the next input.
///
/// # Example
/// ```
/// use numeral_engine::engine::{ConversionSession, CMD_EXECUTE};
///
/// let mut session = ConversionSession::new();
/// session.dispatch(2).unwrap();
/// session.dispatch(5).unwrap();
/// session.dispatch(5).unwrap();
/// assert_eq!(session.dispatch(CMD_EXECUTE).unwrap(), "FF");
/// ```
#[derive(Debug, Clone)]
pub struct ConversionSession {
    editor: DigitEditor,
    history: ConversionHistory,
    source_base: Radix,
    target_base: Radix,
    state: SessionState,
}

impl ConversionSession {
    /// Create a session converting decimal to hexadecimal by default.
    pub fn new() -> Self {
        Self {
            editor: DigitEditor::new(),
            history: ConversionHistory::new(),
            source_base: Radix::DECIMAL,
            target_base: Radix::HEXADECIMAL,
            state: SessionState::Editing,
        }
    }

    /// Base the input is typed in. Does not trigger reconversion.
    ///
    /// # Errors
    /// Returns `InvalidBase` outside `[2, 16]`.
    pub fn set_source_base(&mut self, base: u32) -> RadixResult<()> {
        self.source_base = Radix::new(base)?;
        Ok(())
    }

    /// Base the result is rendered in. Does not trigger reconversion.
    ///
    /// # Errors
    /// Returns `InvalidBase` outside `[2, 16]`.
    pub fn set_target_base(&mut self, base: u32) -> RadixResult<()> {
        self.target_base = Radix::new(base)?;
        Ok(())
    }

    pub fn source_base(&self) -> Radix {
        self.source_base
    }

    pub fn target_base(&self) -> Radix {
        self.target_base
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Text currently held by the editor.
    pub fn current_text(&self) -> &str {
        self.editor.current_text()
    }

    /// Completed conversions, oldest first.
    pub fn history(&self) -> &ConversionHistory {
        &self.history
    }

    /// Discard all completed conversions.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Apply a command: [`CMD_EXECUTE`] converts, everything else edits.
    ///
    /// An editing command arriving in the `Converted` state discards the
    /// prior result and starts from a cleared editor.
    ///
    /// # Errors
    /// Returns `UnknownCommand` for codes the editor does not map.
    /// Conversion failures never surface here; see [`Self::execute`].
    pub fn dispatch(&mut self, command: u8) -> RadixResult<String> {
        if command == CMD_EXECUTE {
            return Ok(self.execute());
        }

        if self.state == SessionState::Converted {
            self.editor.clear();
            self.state = SessionState::Editing;
        }

        self.editor
            .dispatch(command, self.source_base)
            .map(str::to_string)
    }

    /// Convert the edited number into the target base.
    ///
    /// Short-circuits with `"0"` for an empty/zero editor without touching
    /// state or history. On success the session moves to `Converted` and a
    /// record is appended. Conversion failures are swallowed by contract:
    /// the session reverts to `Editing` and the unconverted editor text is
    /// returned unchanged.
    pub fn execute(&mut self) -> String {
        if self.editor.is_zero() {
            return "0".to_string();
        }

        match self.try_convert() {
            Ok(result) => {
                self.state = SessionState::Converted;
                self.history.push(ConversionRecord::new(
                    self.source_base,
                    self.target_base,
                    self.editor.current_text().to_string(),
                    result.clone(),
                ));
                tracing::debug!(
                    source = %self.source_base,
                    target = %self.target_base,
                    input = self.editor.current_text(),
                    result = %result,
                    "conversion executed"
                );
                result
            },
            Err(error) => {
                tracing::debug!(%error, "conversion error swallowed, returning input");
                self.state = SessionState::Editing;
                self.editor.current_text().to_string()
            },
        }
    }

    /// Clear the editor and force the state back to `Editing`.
    pub fn reset(&mut self) {
        self.editor.clear();
        self.state = SessionState::Editing;
    }

    fn try_convert(&self) -> RadixResult<String> {
        let value = radix_to_real(self.editor.current_text(), self.source_base)?;
        let precision = required_fraction_digits(
            self.editor.fraction_digit_count(),
            self.source_base,
            self.target_base,
        );
        real_to_radix(value, self.target_base, precision)
    }
}

impl Default for ConversionSession {
    fn default() -> Self {
        Self::new()
    }
}

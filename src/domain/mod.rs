// ============================================================================
// Domain Module
// Digit entry and conversion history models
// ============================================================================

pub mod editor;
pub mod history;

pub use editor::{DigitEditor, CMD_BACKSPACE, CMD_CLEAR, CMD_DELIMITER};
pub use history::{ConversionHistory, ConversionRecord};

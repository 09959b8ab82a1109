// ============================================================================
// Engine Module
// Conversion session and calculator state machines
// ============================================================================

mod calculator;
mod session;

pub use calculator::{BinaryOp, CalculatorEngine, CalculatorMode};
pub use session::{ConversionSession, SessionState, CMD_EXECUTE};

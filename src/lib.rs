// ============================================================================
// Numeral Engine Library
// Multi-radix conversion and four-function calculator core
// ============================================================================

//! # Numeral Engine
//!
//! A multi-radix numeral conversion and arithmetic engine for positional
//! numeral systems with bases 2 through 16.
//!
//! ## Features
//!
//! - **Exact digit-by-digit conversion** between numeral strings and reals
//! - **Precision propagation**: fractional digit counts carried faithfully
//!   across base changes
//! - **Incremental digit entry** via a string-based editor state machine
//! - **Chained four-function calculator** with deferred operator
//!   application, repeat-equals semantics, and memory
//! - **Conversion sessions** with an append-only, timestamped history
//!
//! The crate is a headless core: it is consumed as a library by a
//! presentation layer that translates input events into command codes and
//! renders the returned strings. Everything is single-threaded and
//! synchronous; every operation is O(digit count).
//!
//! ## Example
//!
//! ```rust
//! use numeral_engine::prelude::*;
//!
//! // Convert 255.5 from decimal to hexadecimal
//! let mut session = ConversionSession::new();
//! for command in [2, 5, 5, CMD_DELIMITER_CODE, 5] {
//!     session.dispatch(command).unwrap();
//! }
//! assert_eq!(session.dispatch(CMD_EXECUTE).unwrap(), "FF.8");
//!
//! // Chained calculator arithmetic in hexadecimal
//! let mut calc = CalculatorEngine::new();
//! calc.set_base(16).unwrap();
//! calc.digit('A').unwrap();
//! calc.operator(BinaryOp::Add).unwrap();
//! calc.digit('6').unwrap();
//! assert_eq!(calc.equals().unwrap(), "10");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ConversionHistory, ConversionRecord, DigitEditor};
    pub use crate::engine::{
        BinaryOp, CalculatorEngine, CalculatorMode, ConversionSession, SessionState, CMD_EXECUTE,
    };
    pub use crate::interfaces::{InMemoryStore, RecordStore, StoreError};
    pub use crate::numeric::{Radix, RadixError, RadixResult};

    /// Editor command code that appends the fraction delimiter.
    pub use crate::domain::CMD_DELIMITER as CMD_DELIMITER_CODE;
}

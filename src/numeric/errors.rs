// ============================================================================
// Numeric Errors
// Error types for radix conversion and calculator operations
// ============================================================================

use std::fmt;

/// Errors that can occur during radix conversion and calculator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RadixError {
    /// Base outside the supported range [2, 16]
    InvalidBase(u32),
    /// Digit value outside [0, 15] or outside the declared base's alphabet
    InvalidDigit(u8),
    /// Character is not a valid digit (0-9, A-F, a-f)
    InvalidCharacter(char),
    /// More than one delimiter, or structure an editor invariant should
    /// have prevented
    MalformedNumber,
    /// Empty input where a numeral string was required
    EmptyInput,
    /// Fractional argument outside [0, 1)
    InvalidFraction,
    /// Negative fractional digit count
    InvalidPrecision(i32),
    /// Division (or reciprocal) by a value within epsilon of zero
    DivisionByZero,
    /// Command code not mapped to any editor or session command
    UnknownCommand(u8),
}

impl fmt::Display for RadixError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RadixError::InvalidBase(base) => {
                write!(f, "invalid base {}: must be in range 2..=16", base)
            },
            RadixError::InvalidDigit(digit) => {
                write!(f, "invalid digit {}: outside the base's alphabet", digit)
            },
            RadixError::InvalidCharacter(ch) => {
                write!(f, "invalid character '{}': expected 0-9, A-F", ch)
            },
            RadixError::MalformedNumber => write!(f, "malformed numeral string"),
            RadixError::EmptyInput => write!(f, "empty input"),
            RadixError::InvalidFraction => {
                write!(f, "invalid fraction: value must be in [0, 1)")
            },
            RadixError::InvalidPrecision(digits) => {
                write!(
                    f,
                    "invalid precision {}: digit count cannot be negative",
                    digits
                )
            },
            RadixError::DivisionByZero => write!(f, "division by zero"),
            RadixError::UnknownCommand(code) => write!(f, "unknown command code {}", code),
        }
    }
}

impl std::error::Error for RadixError {}

/// Result type alias for conversion and calculator operations
pub type RadixResult<T> = Result<T, RadixError>;

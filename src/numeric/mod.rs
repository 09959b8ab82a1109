// ============================================================================
// Numeric Module
// Radix conversion primitives and precision propagation
// ============================================================================
//
// This module provides:
// - Radix: validated numeral-system base in [2, 16]
// - Conversion primitives between numeral strings and f64 values
// - required_fraction_digits: precision propagation across base changes
// - RadixError: error taxonomy for every conversion failure
//
// Design principles:
// - Pure functions, no shared state
// - All fallible operations return Result (no panics)
// - Base validity enforced once, at Radix construction
// - f64 arithmetic with a normative digit-generation order

mod convert;
mod errors;
mod precision;
mod radix;

pub use convert::{
    char_to_digit, digit_to_char, fraction_to_radix, integer_to_radix, radix_to_real,
    real_to_radix, DELIMITER,
};
pub use errors::{RadixError, RadixResult};
pub use precision::{required_fraction_digits, DEFAULT_PRECISION};
pub use radix::Radix;

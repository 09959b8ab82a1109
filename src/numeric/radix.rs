// ============================================================================
// Radix
// Validated numeral-system base in the range [2, 16]
// ============================================================================

use super::errors::{RadixError, RadixResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A positional numeral-system base in `[2, 16]`.
///
/// Constructed only through [`Radix::new`], so base validity is a type
/// invariant everywhere downstream: conversion code never re-validates.
///
/// # Example
/// ```
/// use numeral_engine::numeric::Radix;
///
/// let hex = Radix::new(16).unwrap();
/// assert_eq!(hex.value(), 16);
/// assert!(Radix::new(17).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
#[repr(transparent)]
pub struct Radix(u32);

impl Radix {
    /// Smallest supported base
    pub const MIN: u32 = 2;

    /// Largest supported base
    pub const MAX: u32 = 16;

    /// Binary
    pub const BINARY: Self = Self(2);

    /// Octal
    pub const OCTAL: Self = Self(8);

    /// Decimal
    pub const DECIMAL: Self = Self(10);

    /// Hexadecimal
    pub const HEXADECIMAL: Self = Self(16);

    /// Create a validated radix.
    ///
    /// # Errors
    /// Returns `InvalidBase` if `base` is outside `[2, 16]`.
    #[inline]
    pub fn new(base: u32) -> RadixResult<Self> {
        if (Self::MIN..=Self::MAX).contains(&base) {
            Ok(Self(base))
        } else {
            Err(RadixError::InvalidBase(base))
        }
    }

    /// Get the base value.
    #[inline]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Get the base as an `f64` for positional-weight arithmetic.
    #[inline]
    pub const fn as_f64(self) -> f64 {
        self.0 as f64
    }

    /// Check whether a digit value belongs to this base's alphabet.
    #[inline]
    pub const fn contains_digit(self, digit: u8) -> bool {
        (digit as u32) < self.0
    }
}

impl Default for Radix {
    #[inline]
    fn default() -> Self {
        Self::DECIMAL
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> u32 {
        radix.0
    }
}

impl TryFrom<u32> for Radix {
    type Error = RadixError;

    fn try_from(base: u32) -> RadixResult<Self> {
        Self::new(base)
    }
}

// ============================================================================
// Precision Model
// Fractional digit-count propagation across base changes
// ============================================================================

use super::radix::Radix;

/// Fallback fractional precision when the estimate cannot be computed.
pub const DEFAULT_PRECISION: i32 = 10;

/// Estimate how many fractional digits in `target_base` are needed to
/// preserve the information content of `source_digits` fractional digits
/// typed in `source_base`.
///
/// Formula: `round(source_digits * ln(source) / ln(target) + 0.5)`, a
/// ceiling via an ad hoc half offset. Rounding is half away from zero
/// (`f64::round`), the documented half-up rule, deliberately not
/// half-to-even. The result is floored at 1 once `source_digits > 0`;
/// zero source digits need zero target digits.
///
/// Falls back to [`DEFAULT_PRECISION`] if the intermediate value is not
/// finite.
///
/// # Example
/// ```
/// use numeral_engine::numeric::{required_fraction_digits, Radix};
///
/// let dec = Radix::new(10).unwrap();
/// let bin = Radix::new(2).unwrap();
/// // 3 decimal digits need ceil(3 * ln 10 / ln 2) ~ 10 binary digits
/// assert_eq!(required_fraction_digits(3, dec, bin), 10);
/// ```
pub fn required_fraction_digits(
    source_digits: usize,
    source_base: Radix,
    target_base: Radix,
) -> i32 {
    if source_digits == 0 {
        return 0;
    }

    let estimate =
        source_digits as f64 * source_base.as_f64().ln() / target_base.as_f64().ln() + 0.5;

    if !estimate.is_finite() {
        return DEFAULT_PRECISION;
    }

    (estimate.round() as i32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn radix(base: u32) -> Radix {
        Radix::new(base).unwrap()
    }

    #[test]
    fn test_zero_source_digits() {
        assert_eq!(required_fraction_digits(0, radix(10), radix(2)), 0);
        assert_eq!(required_fraction_digits(0, radix(2), radix(16)), 0);
    }

    #[test]
    fn test_decimal_to_binary() {
        // 1 decimal digit: round(3.32 + 0.5) = 4
        assert_eq!(required_fraction_digits(1, radix(10), radix(2)), 4);
        // 3 decimal digits: round(9.97 + 0.5) = 10
        assert_eq!(required_fraction_digits(3, radix(10), radix(2)), 10);
    }

    #[test]
    fn test_wide_base_needs_fewer_digits() {
        // 8 binary digits fit in round(2 + 0.5) = 3 hex digits (half-up)
        assert_eq!(required_fraction_digits(8, radix(2), radix(16)), 3);
        // 4 binary digits: exactly one hex digit plus the half offset
        assert_eq!(required_fraction_digits(4, radix(2), radix(16)), 2);
    }

    #[test]
    fn test_same_base_half_up() {
        // ratio is 1, so the estimate sits exactly on n + 0.5 and the
        // half-up rule pushes it to n + 1
        assert_eq!(required_fraction_digits(2, radix(10), radix(10)), 3);
        assert_eq!(required_fraction_digits(5, radix(7), radix(7)), 6);
    }

    #[test]
    fn test_minimum_one_digit() {
        // One digit of a narrow base in a wide one still yields at least 1
        assert_eq!(required_fraction_digits(1, radix(2), radix(16)), 1);
    }
}

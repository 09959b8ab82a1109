// ============================================================================
// Radix Converter
// Pure conversion primitives between numeral strings and f64 values
// ============================================================================
//
// All arithmetic is double-precision floating point. The fractional
// digit-generation order (multiply, truncate, subtract) is normative:
// downstream display strings depend on reproducing it exactly.

use super::errors::{RadixError, RadixResult};
use super::radix::Radix;
use smallvec::SmallVec;

/// Delimiter between the integer and fractional parts of a numeral string.
pub const DELIMITER: char = '.';

/// Convert a digit value to its canonical (uppercase) character.
///
/// # Errors
/// Returns `InvalidDigit` if `digit` is outside `[0, 15]`.
///
/// # Example
/// ```
/// use numeral_engine::numeric::digit_to_char;
///
/// assert_eq!(digit_to_char(7).unwrap(), '7');
/// assert_eq!(digit_to_char(14).unwrap(), 'E');
/// ```
#[inline]
pub fn digit_to_char(digit: u8) -> RadixResult<char> {
    match digit {
        0..=9 => Ok((b'0' + digit) as char),
        10..=15 => Ok((b'A' + digit - 10) as char),
        _ => Err(RadixError::InvalidDigit(digit)),
    }
}

/// Convert a digit character to its value. Case-insensitive.
///
/// # Errors
/// Returns `InvalidCharacter` for anything outside `0-9`, `A-F`, `a-f`.
#[inline]
pub fn char_to_digit(ch: char) -> RadixResult<u8> {
    match ch {
        '0'..='9' => Ok(ch as u8 - b'0'),
        'A'..='F' => Ok(ch as u8 - b'A' + 10),
        'a'..='f' => Ok(ch as u8 - b'a' + 10),
        _ => Err(RadixError::InvalidCharacter(ch)),
    }
}

/// Convert a signed integer to a numeral string in the given base.
///
/// Repeated divide-by-base, collecting remainders least-significant-first.
/// Zero converts to `"0"`; negative values convert by magnitude with a
/// leading `-`.
pub fn integer_to_radix(n: i64, base: Radix) -> String {
    if n == 0 {
        return "0".to_string();
    }

    let b = base.value() as u64;
    let mut magnitude = n.unsigned_abs();
    let mut digits: SmallVec<[char; 64]> = SmallVec::new();

    while magnitude > 0 {
        let digit = (magnitude % b) as u8;
        // Remainder of a division by a base in [2, 16] is always a valid digit
        digits.push(digit_to_char(digit).unwrap_or('0'));
        magnitude /= b;
    }

    let mut result = String::with_capacity(digits.len() + 1);
    if n < 0 {
        result.push('-');
    }
    result.extend(digits.iter().rev());
    result
}

/// Convert a fraction in `[0, 1)` to `digit_count` fractional digits in the
/// given base, with trailing zeros stripped.
///
/// Runs exactly `digit_count` iterations of the multiply-and-truncate loop
/// before stripping, so floating error accumulates in the same order as the
/// reference outputs. May return the empty string when every generated digit
/// was zero; the caller then omits the delimiter as well.
///
/// # Errors
/// - `InvalidFraction` if `fraction` is not in `[0, 1)` (NaN included)
/// - `InvalidPrecision` if `digit_count` is negative
pub fn fraction_to_radix(fraction: f64, base: Radix, digit_count: i32) -> RadixResult<String> {
    if !(0.0..1.0).contains(&fraction) {
        return Err(RadixError::InvalidFraction);
    }
    if digit_count < 0 {
        return Err(RadixError::InvalidPrecision(digit_count));
    }

    let b = base.as_f64();
    let mut remainder = fraction;
    let mut digits: SmallVec<[char; 16]> = SmallVec::new();

    for _ in 0..digit_count {
        remainder *= b;
        let digit = remainder.trunc();
        digits.push(digit_to_char(digit as u8)?);
        remainder -= digit;
    }

    while digits.last() == Some(&'0') {
        digits.pop();
    }

    Ok(digits.into_iter().collect())
}

/// Convert a real number to a numeral string in the given base with at most
/// `precision` fractional digits.
///
/// The integer part is truncated toward zero and converted with
/// [`integer_to_radix`]; the `|n - trunc(n)|` remainder is appended after
/// the delimiter only when it is nonzero, `precision > 0`, and the
/// trailing-zero-stripped fraction string is non-empty.
///
/// # Errors
/// Returns `InvalidPrecision` if `precision` is negative.
///
/// # Example
/// ```
/// use numeral_engine::numeric::{real_to_radix, Radix};
///
/// let hex = Radix::new(16).unwrap();
/// assert_eq!(real_to_radix(-17.875, hex, 3).unwrap(), "-11.E");
/// ```
pub fn real_to_radix(n: f64, base: Radix, precision: i32) -> RadixResult<String> {
    if precision < 0 {
        return Err(RadixError::InvalidPrecision(precision));
    }

    let integer_part = n.trunc();
    let remainder = (n - integer_part).abs();
    let integer_str = integer_to_radix(integer_part as i64, base);

    if remainder > 0.0 && precision > 0 {
        let fraction_str = fraction_to_radix(remainder, base, precision)?;
        if !fraction_str.is_empty() {
            return Ok(format!("{}{}{}", integer_str, DELIMITER, fraction_str));
        }
    }

    Ok(integer_str)
}

/// Parse a numeral string in the given base into its real value.
///
/// Accepts an optional leading `-`, a digit sequence, and at most one `.`
/// followed by fractional digits. Integer digits contribute with positional
/// weights descending from `base^(len-1)`; fractional digits from `base^-1`
/// downward, accumulated in that order.
///
/// # Errors
/// - `EmptyInput` if the string (after an optional sign) has no digits
/// - `MalformedNumber` if more than one delimiter is present
/// - `InvalidCharacter` for characters outside the digit alphabet
/// - `InvalidDigit` for digits at or above the base
///
/// # Example
/// ```
/// use numeral_engine::numeric::{radix_to_real, Radix};
///
/// let hex = Radix::new(16).unwrap();
/// assert_eq!(radix_to_real("A5.E", hex).unwrap(), 165.875);
/// ```
pub fn radix_to_real(text: &str, base: Radix) -> RadixResult<f64> {
    if text.is_empty() {
        return Err(RadixError::EmptyInput);
    }

    let (is_negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    if unsigned.is_empty() {
        return Err(RadixError::EmptyInput);
    }

    let mut parts = unsigned.split(DELIMITER);
    let integer_part = parts.next().unwrap_or("");
    let fraction_part = parts.next().unwrap_or("");
    if parts.next().is_some() {
        return Err(RadixError::MalformedNumber);
    }

    if integer_part.is_empty() && fraction_part.is_empty() {
        // A bare delimiter (or sign plus delimiter) carries no digits
        return Err(RadixError::EmptyInput);
    }

    let b = base.as_f64();
    let mut result = 0.0;

    if !integer_part.is_empty() {
        let weight = b.powi(integer_part.len() as i32 - 1);
        result += accumulate_digits(integer_part, base, weight)?;
    }
    if !fraction_part.is_empty() {
        result += accumulate_digits(fraction_part, base, 1.0 / b)?;
    }

    Ok(if is_negative { -result } else { result })
}

/// Sum `digit * weight` over a digit run, dividing the weight by the base
/// after each position.
fn accumulate_digits(digits: &str, base: Radix, start_weight: f64) -> RadixResult<f64> {
    let mut weight = start_weight;
    let mut sum = 0.0;

    for ch in digits.chars() {
        let digit = char_to_digit(ch)?;
        if !base.contains_digit(digit) {
            return Err(RadixError::InvalidDigit(digit));
        }
        sum += digit as f64 * weight;
        weight /= base.as_f64();
    }

    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn radix(base: u32) -> Radix {
        Radix::new(base).unwrap()
    }

    #[test]
    fn test_digit_to_char() {
        assert_eq!(digit_to_char(0).unwrap(), '0');
        assert_eq!(digit_to_char(9).unwrap(), '9');
        assert_eq!(digit_to_char(10).unwrap(), 'A');
        assert_eq!(digit_to_char(15).unwrap(), 'F');
        assert_eq!(digit_to_char(16), Err(RadixError::InvalidDigit(16)));
    }

    #[test]
    fn test_char_to_digit() {
        assert_eq!(char_to_digit('0').unwrap(), 0);
        assert_eq!(char_to_digit('A').unwrap(), 10);
        assert_eq!(char_to_digit('f').unwrap(), 15);
        assert_eq!(char_to_digit('g'), Err(RadixError::InvalidCharacter('g')));
        assert_eq!(char_to_digit('.'), Err(RadixError::InvalidCharacter('.')));
    }

    #[test]
    fn test_char_digit_inverses() {
        for d in 0..16u8 {
            let ch = digit_to_char(d).unwrap();
            assert_eq!(char_to_digit(ch).unwrap(), d);
            assert_eq!(char_to_digit(ch.to_ascii_lowercase()).unwrap(), d);
        }
    }

    #[test]
    fn test_integer_to_radix() {
        assert_eq!(integer_to_radix(161, radix(16)), "A1");
        assert_eq!(integer_to_radix(255, radix(16)), "FF");
        assert_eq!(integer_to_radix(10, radix(2)), "1010");
        assert_eq!(integer_to_radix(-17, radix(16)), "-11");
    }

    #[test]
    fn test_integer_to_radix_zero_every_base() {
        for base in 2..=16 {
            assert_eq!(integer_to_radix(0, radix(base)), "0");
        }
    }

    #[test]
    fn test_integer_to_radix_negative_symmetry() {
        for base in 2..=16 {
            for n in [1i64, 7, 100, 4095] {
                let positive = integer_to_radix(n, radix(base));
                assert_eq!(integer_to_radix(-n, radix(base)), format!("-{}", positive));
            }
        }
    }

    #[test]
    fn test_fraction_to_radix() {
        assert_eq!(fraction_to_radix(0.9375, radix(2), 4).unwrap(), "1111");
        assert_eq!(fraction_to_radix(0.625, radix(2), 4).unwrap(), "101");
        assert_eq!(fraction_to_radix(0.875, radix(16), 3).unwrap(), "E");
        // All-zero digits strip to the empty string
        assert_eq!(fraction_to_radix(0.0, radix(2), 4).unwrap(), "");
    }

    #[test]
    fn test_fraction_to_radix_errors() {
        assert_eq!(
            fraction_to_radix(-0.5, radix(2), 4),
            Err(RadixError::InvalidFraction)
        );
        assert_eq!(
            fraction_to_radix(1.0, radix(2), 4),
            Err(RadixError::InvalidFraction)
        );
        assert_eq!(
            fraction_to_radix(f64::NAN, radix(2), 4),
            Err(RadixError::InvalidFraction)
        );
        assert_eq!(
            fraction_to_radix(0.5, radix(2), -1),
            Err(RadixError::InvalidPrecision(-1))
        );
    }

    #[test]
    fn test_real_to_radix_reference_cases() {
        assert_eq!(real_to_radix(-17.875, radix(16), 3).unwrap(), "-11.E");
        assert_eq!(real_to_radix(10.625, radix(2), 10).unwrap(), "1010.101");
        assert_eq!(real_to_radix(255.9375, radix(16), 2).unwrap(), "FF.F");
    }

    #[test]
    fn test_real_to_radix_zero() {
        for base in 2..=16 {
            for precision in [0, 3, 10] {
                assert_eq!(real_to_radix(0.0, radix(base), precision).unwrap(), "0");
            }
        }
    }

    #[test]
    fn test_real_to_radix_omits_delimiter_without_fraction() {
        assert_eq!(real_to_radix(42.0, radix(10), 10).unwrap(), "42");
        // precision 0 suppresses the fractional part entirely
        assert_eq!(real_to_radix(10.625, radix(2), 0).unwrap(), "1010");
    }

    #[test]
    fn test_radix_to_real() {
        assert_eq!(radix_to_real("A5.E", radix(16)).unwrap(), 165.875);
        assert_eq!(radix_to_real("-A5.E", radix(16)).unwrap(), -165.875);
        assert_eq!(radix_to_real("1010.101", radix(2)).unwrap(), 10.625);
        assert_eq!(radix_to_real("FF", radix(16)).unwrap(), 255.0);
        assert_eq!(radix_to_real("10.", radix(10)).unwrap(), 10.0);
    }

    #[test]
    fn test_radix_to_real_errors() {
        assert_eq!(radix_to_real("", radix(10)), Err(RadixError::EmptyInput));
        assert_eq!(radix_to_real("-", radix(10)), Err(RadixError::EmptyInput));
        assert_eq!(
            radix_to_real("1.2.3", radix(10)),
            Err(RadixError::MalformedNumber)
        );
        assert_eq!(
            radix_to_real("1G", radix(16)),
            Err(RadixError::InvalidCharacter('G'))
        );
        // 'F' is a digit, but not one of base 10
        assert_eq!(
            radix_to_real("1F", radix(10)),
            Err(RadixError::InvalidDigit(15))
        );
    }

    #[test]
    fn test_radix_to_real_case_insensitive() {
        assert_eq!(
            radix_to_real("a5.e", radix(16)).unwrap(),
            radix_to_real("A5.E", radix(16)).unwrap()
        );
    }

    proptest! {
        #[test]
        fn prop_round_trip_within_tolerance(
            numerator in -4095i64..=4095,
            base in 2u32..=16,
        ) {
            // Values k/256 have short binary expansions, so conversion
            // error is dominated by the p-digit truncation
            let n = numerator as f64 / 256.0;
            let precision = 10;
            let b = radix(base);

            let text = real_to_radix(n, b, precision).unwrap();
            let back = radix_to_real(&text, b).unwrap();

            let tolerance = 2.0 * b.as_f64().powi(-precision);
            prop_assert!(
                (back - n).abs() <= tolerance,
                "{} -> {} -> {} (base {})", n, text, back, base
            );
        }

        #[test]
        fn prop_integer_round_trip_exact(n in -1_000_000i64..=1_000_000, base in 2u32..=16) {
            let b = radix(base);
            let text = integer_to_radix(n, b);
            let back = radix_to_real(&text, b).unwrap();
            prop_assert_eq!(back, n as f64);
        }
    }
}

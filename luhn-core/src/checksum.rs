//! Luhn checksum computation and validation
//!
//! Digits are consumed right to left with alternating weights. A weighted
//! digit above 9 is folded back by subtracting 9, and the number is valid
//! when the folded sum is divisible by 10.

use crate::{Error, Result};

/// Starting weight for the rightmost digit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplier {
    /// Weight 1 on the rightmost digit (check digit present)
    Single = 1,
    /// Weight 2 on the rightmost digit (check digit still to be appended)
    Double = 2,
}

/// Weighted Luhn digit sum of `number`
///
/// The loop body runs at least once, so `0` contributes its single digit.
/// Negative input is not rejected: truncating division ends the scan after
/// the rightmost digit and the result has no checksum meaning.
pub fn luhn_sum(mut number: i64, start: Multiplier) -> i64 {
    let mut multiplier = start as i64;
    let mut sum = 0;
    loop {
        let digit = number % 10;
        number /= 10;
        let product = digit * multiplier;
        sum += if product > 9 { product - 9 } else { product };
        multiplier = 3 - multiplier;
        if number <= 0 {
            break;
        }
    }
    sum
}

/// Check whether `number` passes the mod-10 check
pub fn is_valid(number: i64) -> bool {
    luhn_sum(number, Multiplier::Single) % 10 == 0
}

/// Parse `text` as a signed 64-bit integer and validate it
///
/// Accepts an optional leading `+` or `-`. Empty text, whitespace, any
/// other non-digit, or a value outside `i64` is a [`Error::MalformedNumber`].
pub fn is_valid_str(text: &str) -> Result<bool> {
    let number = text.parse::<i64>().map_err(|source| {
        tracing::debug!(input = text, error = %source, "Rejecting malformed number");
        Error::MalformedNumber {
            input: text.to_string(),
            source,
        }
    })?;
    Ok(is_valid(number))
}

/// Digit that makes `prefix` followed by it a valid number
pub fn check_digit(prefix: i64) -> i64 {
    let remainder = luhn_sum(prefix, Multiplier::Double) % 10;
    if remainder == 0 {
        0
    } else {
        10 - remainder
    }
}

/// Number of decimal digits in `number` (`0` has one digit)
pub fn digit_count(mut number: i64) -> u32 {
    let mut count = 1;
    while number >= 10 {
        number /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_even_length_is_valid() {
        assert!(is_valid(4716881992809921));
    }

    #[test]
    fn test_odd_length_is_valid() {
        assert!(is_valid(372095199917337));
    }

    #[test]
    fn test_invalid_number() {
        assert!(!is_valid(4444333322221112));
    }

    #[test]
    fn test_zero_is_valid() {
        assert_eq!(luhn_sum(0, Multiplier::Single), 0);
        assert!(is_valid(0));
    }

    #[test]
    fn test_doubled_digits_fold() {
        // 9 * 2 = 18 folds to 9
        assert_eq!(luhn_sum(90, Multiplier::Single), 9);
        assert_eq!(luhn_sum(9, Multiplier::Double), 9);
        assert!(is_valid(59));
        assert!(is_valid(18));
        assert!(!is_valid(19));
    }

    #[test]
    fn test_string_validation() {
        assert!(is_valid_str("4716881992809921").unwrap());
        assert!(!is_valid_str("4444333322221112").unwrap());
        assert!(is_valid_str("+4716881992809921").unwrap());
    }

    #[test]
    fn test_string_above_max_is_malformed() {
        let err = is_valid_str("9223372036854775808").unwrap_err();
        assert!(matches!(err, Error::MalformedNumber { .. }));
    }

    #[test]
    fn test_string_with_symbols_is_malformed() {
        for input in ["a/+@!", "", " 18", "18 ", "1_000", "4.5", "1,234"] {
            let err = is_valid_str(input).unwrap_err();
            assert!(
                matches!(err, Error::MalformedNumber { input: ref got, .. } if got == input),
                "expected malformed for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_negative_input_does_not_panic() {
        let _ = is_valid(-4716881992809921);
        let _ = is_valid(i64::MIN);
        assert!(is_valid_str("-9223372036854775808").is_ok());
    }

    #[test]
    fn test_check_digit() {
        assert_eq!(check_digit(7992739871), 3);
        assert_eq!(check_digit(471688199280992), 1);
        assert_eq!(check_digit(0), 0);
        assert!(is_valid(7992739871 * 10 + check_digit(7992739871)));
    }

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(111), 3);
        assert_eq!(digit_count(i64::MAX), 19);
    }
}

//! Random generation of Luhn-valid numbers
//!
//! Generation draws the leading `length - 1` digits once and then appends
//! the forced check digit, so there is no retry loop.
//!
//! Both bounds are first stretched (or cut) to `length - 1` digits: the
//! lower bound is padded with zeros and the upper bound with nines. When
//! the two bounds have different digit counts the resulting window is not
//! contained in `[lower, upper]`, and may come out reversed, in which case
//! its ends are swapped.

use crate::checksum::{check_digit, digit_count};
use crate::{Error, GeneratorConfig, Result, MAX_GENERATED_LENGTH};
use rand::Rng;

/// Which side of the window a bound sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Bound {
    /// Padded with trailing zeros
    Lower,
    /// Padded with trailing nines
    Upper,
}

/// Stretch or cut `number` to exactly `digits` decimal digits
///
/// Shorter numbers get trailing zeros (`Bound::Lower`) or nines
/// (`Bound::Upper`). Longer numbers keep their leading `digits` digits.
/// `digits` is clamped to `MAX_GENERATED_LENGTH - 1`, the widest prefix
/// that fits in `i64`. Callers pass non-negative numbers only.
pub(crate) fn normalise_bound(mut number: i64, bound: Bound, digits: u32) -> i64 {
    let digits = digits.min(MAX_GENERATED_LENGTH - 1);
    let count = digit_count(number);
    if count < digits {
        for _ in count..digits {
            number *= 10;
            if bound == Bound::Upper {
                number += 9;
            }
        }
    } else {
        for _ in digits..count {
            number /= 10;
        }
    }
    number
}

/// Generate a Luhn-valid number of `final_length` digits from `[lower, upper]`
///
/// Uses the thread-local RNG. See [`generate_luhn_from_range_with`].
pub fn generate_luhn_from_range(lower: i64, upper: i64, final_length: u32) -> Result<i64> {
    generate_luhn_from_range_with(&mut rand::thread_rng(), lower, upper, final_length)
}

/// Generate a Luhn-valid number using the supplied RNG
///
/// A length of 1 always yields `0`, the only valid single digit. A lower
/// bound of `0` may draw a prefix with leading zeros, giving a shorter
/// result.
pub fn generate_luhn_from_range_with<R: Rng + ?Sized>(
    rng: &mut R,
    lower: i64,
    upper: i64,
    final_length: u32,
) -> Result<i64> {
    check_length(final_length)?;
    if final_length == 1 {
        return Ok(0);
    }

    let (low, high) = window(lower, upper, final_length)?;
    tracing::debug!(lower = low, upper = high, final_length, "Normalised generation window");

    // Half-open draw; a collapsed window has exactly one prefix
    let prefix = if low == high {
        low
    } else {
        rng.gen_range(low..high)
    };

    let number = prefix * 10 + check_digit(prefix);
    tracing::trace!(number, "Generated Luhn number");
    Ok(number)
}

/// Generate a Luhn-valid number with unconstrained leading digits
pub fn generate_random_luhn(final_length: u32) -> Result<i64> {
    generate_luhn_from_range(0, 9, final_length)
}

/// [`generate_random_luhn`] with the supplied RNG
pub fn generate_random_luhn_with<R: Rng + ?Sized>(rng: &mut R, final_length: u32) -> Result<i64> {
    generate_luhn_from_range_with(rng, 0, 9, final_length)
}

pub(crate) fn check_length(final_length: u32) -> Result<()> {
    if final_length == 0 || final_length > MAX_GENERATED_LENGTH {
        return Err(Error::InvalidLength {
            length: final_length,
            max: MAX_GENERATED_LENGTH,
        });
    }
    Ok(())
}

/// Normalised `(low, high)` prefix window for `final_length > 1`
pub(crate) fn window(lower: i64, upper: i64, final_length: u32) -> Result<(i64, i64)> {
    if lower < 0 || upper < 0 || lower > upper {
        return Err(Error::InvalidBounds { lower, upper });
    }

    let digits = final_length - 1;
    let padded_lower = normalise_bound(lower, Bound::Lower, digits);
    let padded_upper = normalise_bound(upper, Bound::Upper, digits);

    // Ordered bounds of different lengths can pad into a reversed window
    let (low, high) = if padded_lower <= padded_upper {
        (padded_lower, padded_upper)
    } else {
        (padded_upper, padded_lower)
    };

    if high.checked_mul(10).and_then(|n| n.checked_add(9)).is_none() {
        return Err(Error::Overflow {
            lower,
            upper,
            length: final_length,
        });
    }
    Ok((low, high))
}

/// Generator bound to a validated [`GeneratorConfig`]
#[derive(Debug, Clone, Default)]
pub struct LuhnGenerator {
    config: GeneratorConfig,
}

impl LuhnGenerator {
    /// Create new generator
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a number with the thread-local RNG
    pub fn generate(&self) -> Result<i64> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate a number with the supplied RNG
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<i64> {
        generate_luhn_from_range_with(
            rng,
            self.config.lower_bound,
            self.config.upper_bound,
            self.config.length,
        )
    }
}

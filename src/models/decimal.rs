//! Arbitrary-precision decimal numbers.
//!
//! A small fixed-point type: a sign, an unsigned coefficient and a scale
//! (number of digits after the point). It exists so that exact decimal
//! literals such as `1.125` keep their value instead of being approximated
//! by an `f64`, and so that rounding to a number of places follows the
//! round-half-to-even policy.

use crate::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Maximum number of significant digits accepted when parsing.
///
/// Leaves headroom in a `u128` for rescaling by a few places.
const MAX_DIGITS: usize = 36;

/// Largest scale that [`Decimal::round_dp`] can widen to.
const MAX_SCALE: u32 = 36;

/// An exact decimal number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal {
    negative: bool,
    coefficient: u128,
    scale: u32,
}

impl Decimal {
    /// Creates a decimal from its parts: `(-1)^negative * coefficient * 10^-scale`.
    #[must_use]
    pub const fn from_parts(negative: bool, coefficient: u128, scale: u32) -> Self {
        Self {
            negative,
            coefficient,
            scale,
        }
    }

    /// Returns the unsigned coefficient.
    #[must_use]
    pub const fn coefficient(&self) -> u128 {
        self.coefficient
    }

    /// Rounds (or pads) to exactly `places` digits after the point.
    ///
    /// Ties round to the even neighbour. The sign is kept even when the
    /// result is zero, so `-0.001` becomes `-0.00`.
    #[must_use]
    pub fn round_dp(&self, places: u32) -> Self {
        let places = places.min(MAX_SCALE);
        if places >= self.scale {
            let widened = pow10(places - self.scale)
                .and_then(|factor| self.coefficient.checked_mul(factor));
            return match widened {
                Some(coefficient) => Self::from_parts(self.negative, coefficient, places),
                // Too many digits to pad; the value itself is unchanged.
                None => *self,
            };
        }

        let Some(divisor) = pow10(self.scale - places) else {
            // More than 38 dropped digits: everything rounds to zero.
            return Self::from_parts(self.negative, 0, places);
        };
        let quotient = self.coefficient / divisor;
        let remainder = self.coefficient % divisor;
        let half = divisor / 2;

        let round_up = match remainder.cmp(&half) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => quotient % 2 == 1,
        };
        let coefficient = if round_up { quotient + 1 } else { quotient };

        Self::from_parts(self.negative, coefficient, places)
    }
}

/// Returns `10^exp`, or `None` if it does not fit in a `u128`.
fn pow10(exp: u32) -> Option<u128> {
    10u128.checked_pow(exp)
}

impl FromStr for Decimal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(Error::InvalidInput(format!("invalid decimal literal: '{s}'")));
        }
        if !int_part.bytes().chain(frac_part.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(Error::InvalidInput(format!("invalid decimal literal: '{s}'")));
        }

        let digits: String = int_part.chars().chain(frac_part.chars()).collect();
        let significant = digits.trim_start_matches('0');
        if significant.len() > MAX_DIGITS {
            return Err(Error::InvalidInput(format!(
                "decimal literal has more than {MAX_DIGITS} significant digits: '{s}'"
            )));
        }

        let coefficient = if significant.is_empty() {
            0
        } else {
            significant
                .parse::<u128>()
                .map_err(|e| Error::InvalidInput(format!("invalid decimal literal '{s}': {e}")))?
        };
        let scale = u32::try_from(frac_part.len()).map_err(|_| {
            Error::InvalidInput(format!("decimal literal has too many fraction digits: '{s}'"))
        })?;

        Ok(Self::from_parts(negative, coefficient, scale))
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.coefficient.to_string();
        let scale = self.scale as usize;
        let sign = if self.negative { "-" } else { "" };

        if scale == 0 {
            return write!(f, "{sign}{digits}");
        }

        let padded = if digits.len() <= scale {
            format!("{}{digits}", "0".repeat(scale - digits.len() + 1))
        } else {
            digits
        };
        let (int_part, frac_part) = padded.split_at(padded.len() - scale);
        write!(f, "{sign}{int_part}.{frac_part}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(dec("1.125").to_string(), "1.125");
        assert_eq!(dec("-0.5").to_string(), "-0.5");
        assert_eq!(dec("42").to_string(), "42");
        assert_eq!(dec(".5").to_string(), "0.5");
        assert_eq!(dec("0.007").to_string(), "0.007");
        assert_eq!(dec("+3.10").to_string(), "3.10");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!("".parse::<Decimal>().is_err());
        assert!("-".parse::<Decimal>().is_err());
        assert!("1.2.3".parse::<Decimal>().is_err());
        assert!("1e5".parse::<Decimal>().is_err());
        assert!("abc".parse::<Decimal>().is_err());
        assert!("1234567890123456789012345678901234567".parse::<Decimal>().is_err());
    }

    #[test]
    fn test_round_half_even() {
        assert_eq!(dec("1.125").round_dp(2).to_string(), "1.12");
        assert_eq!(dec("1.135").round_dp(2).to_string(), "1.14");
        assert_eq!(dec("1.1251").round_dp(2).to_string(), "1.13");
        assert_eq!(dec("2.675").round_dp(2).to_string(), "2.68");
        assert_eq!(dec("0.994").round_dp(2).to_string(), "0.99");
        assert_eq!(dec("9.999").round_dp(2).to_string(), "10.00");
    }

    #[test]
    fn test_round_pads_short_scale() {
        assert_eq!(dec("2").round_dp(2).to_string(), "2.00");
        assert_eq!(dec("3.1").round_dp(2).to_string(), "3.10");
    }

    #[test]
    fn test_round_keeps_negative_zero() {
        assert_eq!(dec("-0.001").round_dp(2).to_string(), "-0.00");
    }
}

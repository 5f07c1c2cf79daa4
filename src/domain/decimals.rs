//! Token decimal places and exact decimal-string conversion.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::Amount;
use crate::error::SwapError;

/// Maximum supported decimal places.
const MAX_DECIMALS: u8 = 36;

/// Number of decimal places of a token (ERC-20 `decimals()`).
///
/// Valid range is `0..=36`.  Conversion between human-readable decimal
/// strings and raw [`Amount`]s is exact: no floating point is involved, so
/// the amount sent on chain is exactly the amount that was quoted.
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::{Amount, Decimals};
///
/// let usdc = Decimals::new(6).expect("6 is valid");
/// assert_eq!(usdc.parse_units("1.5").expect("valid"), Amount::new(1_500_000));
/// assert_eq!(usdc.format_units(Amount::new(1_500_000)), "1.5");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Decimals(u8);

impl Decimals {
    /// Zero decimal places.
    pub const ZERO: Self = Self(0);

    /// Decimals used by ETH and most ERC-20 tokens.
    pub const ETHER: Self = Self(18);

    /// Decimals used by USDC and USDT.
    pub const USD_STABLE: Self = Self(6);

    /// Creates a new `Decimals` value after validating the range.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidPrecision`] if `value` exceeds 36.
    pub const fn new(value: u8) -> Result<Self, SwapError> {
        if value > MAX_DECIMALS {
            return Err(SwapError::InvalidPrecision("decimals must be 0..=36"));
        }
        Ok(Self(value))
    }

    /// Returns the raw decimal count.
    #[must_use]
    pub const fn get(&self) -> u8 {
        self.0
    }

    /// Returns `10^decimals`.
    #[must_use]
    pub fn factor(&self) -> U256 {
        let ten = U256::from(10u8);
        (0..self.0).fold(U256::from(1u8), |acc, _| acc * ten)
    }

    /// Parses a decimal string such as `"1.25"` into raw units.
    ///
    /// Leading and trailing whitespace is ignored; `".5"` and `"1."` are
    /// accepted.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidAmount`] if the string is empty, negative,
    /// contains non-digit characters, has more fractional digits than the
    /// token supports, or does not fit in 256 bits.
    pub fn parse_units(&self, input: &str) -> crate::error::Result<Amount> {
        let s = input.trim();
        if s.starts_with('-') {
            return Err(SwapError::InvalidAmount("amount must not be negative"));
        }
        let (whole, frac) = match s.split_once('.') {
            Some((w, f)) => (w, f),
            None => (s, ""),
        };
        if whole.is_empty() && frac.is_empty() {
            return Err(SwapError::InvalidAmount("amount is empty"));
        }
        if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(SwapError::InvalidAmount("amount is not a decimal number"));
        }
        let frac = frac.trim_end_matches('0');
        if frac.len() > usize::from(self.0) {
            return Err(SwapError::InvalidAmount(
                "more fractional digits than the token supports",
            ));
        }

        let mut value = accumulate_digits(U256::ZERO, whole)?;
        value = value
            .checked_mul(self.factor())
            .ok_or(SwapError::InvalidAmount("amount too large"))?;
        let mut fraction = accumulate_digits(U256::ZERO, frac)?;
        for _ in frac.len()..usize::from(self.0) {
            fraction = fraction
                .checked_mul(U256::from(10u8))
                .ok_or(SwapError::InvalidAmount("amount too large"))?;
        }
        value
            .checked_add(fraction)
            .map(Amount::from_u256)
            .ok_or(SwapError::InvalidAmount("amount too large"))
    }

    /// Formats raw units as a decimal string.
    ///
    /// Trailing fractional zeros are removed but at least one fractional
    /// digit is kept, e.g. `"1.0"`, `"0.000001"`.
    #[must_use]
    pub fn format_units(&self, amount: Amount) -> String {
        let factor = self.factor();
        let raw = amount.get();
        let whole = raw / factor;
        let frac = raw % factor;
        if self.0 == 0 {
            return format!("{whole}.0");
        }
        let padded = format!("{:0>width$}", frac.to_string(), width = usize::from(self.0));
        let trimmed = padded.trim_end_matches('0');
        if trimmed.is_empty() {
            format!("{whole}.0")
        } else {
            format!("{whole}.{trimmed}")
        }
    }
}

fn accumulate_digits(start: U256, digits: &str) -> crate::error::Result<U256> {
    digits.bytes().try_fold(start, |acc, b| {
        acc.checked_mul(U256::from(10u8))
            .and_then(|v| v.checked_add(U256::from(b - b'0')))
            .ok_or(SwapError::InvalidAmount("amount too large"))
    })
}

impl TryFrom<u8> for Decimals {
    type Error = SwapError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Decimals> for u8 {
    fn from(value: Decimals) -> Self {
        value.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn dec(v: u8) -> Decimals {
        let Ok(d) = Decimals::new(v) else {
            panic!("valid decimals: {v}");
        };
        d
    }

    #[test]
    fn range_is_validated() {
        assert!(Decimals::new(36).is_ok());
        let Err(e) = Decimals::new(37) else {
            panic!("expected Err");
        };
        assert_eq!(e, SwapError::InvalidPrecision("decimals must be 0..=36"));
    }

    #[test]
    fn factor_eighteen() {
        assert_eq!(Decimals::ETHER.factor(), U256::from(1_000_000_000_000_000_000u128));
    }

    // -- parse_units --------------------------------------------------------

    #[test]
    fn parse_whole_usdc() {
        assert_eq!(dec(6).parse_units("5"), Ok(Amount::new(5_000_000)));
    }

    #[test]
    fn parse_fraction_eth() {
        assert_eq!(
            dec(18).parse_units("0.001"),
            Ok(Amount::new(1_000_000_000_000_000))
        );
    }

    #[test]
    fn parse_leading_and_trailing_dot() {
        assert_eq!(dec(6).parse_units(".5"), Ok(Amount::new(500_000)));
        assert_eq!(dec(6).parse_units("2."), Ok(Amount::new(2_000_000)));
    }

    #[test]
    fn parse_trailing_zeros_beyond_precision() {
        assert_eq!(dec(2).parse_units("1.2300"), Ok(Amount::new(123)));
    }

    #[test]
    fn parse_rejects_excess_precision() {
        assert!(matches!(
            dec(6).parse_units("0.0000001"),
            Err(SwapError::InvalidAmount(_))
        ));
    }

    #[test]
    fn parse_rejects_garbage() {
        for bad in ["", ".", "abc", "1e5", "-1", "1.2.3", "1,000"] {
            assert!(dec(6).parse_units(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn parse_rejects_overflow() {
        let huge = "9".repeat(80);
        assert!(dec(18).parse_units(&huge).is_err());
    }

    // -- format_units -------------------------------------------------------

    #[test]
    fn format_whole_keeps_one_decimal() {
        assert_eq!(dec(6).format_units(Amount::new(2_000_000)), "2.0");
    }

    #[test]
    fn format_small_fraction() {
        assert_eq!(dec(6).format_units(Amount::new(1)), "0.000001");
    }

    #[test]
    fn format_quote_output() {
        assert_eq!(dec(6).format_units(Amount::new(1_991)), "0.001991");
    }

    #[test]
    fn format_zero_decimals() {
        assert_eq!(Decimals::ZERO.format_units(Amount::new(42)), "42.0");
    }

    #[test]
    fn format_then_parse_is_exact() {
        let d = dec(18);
        let raw = Amount::new(123_456_789_000_000_000_001);
        assert_eq!(d.parse_units(&d.format_units(raw)), Ok(raw));
    }

    #[test]
    fn serde_rejects_out_of_range() {
        assert!(serde_json::from_str::<Decimals>("40").is_err());
        let Ok(d) = serde_json::from_str::<Decimals>("6") else {
            panic!("valid decimals");
        };
        assert_eq!(d.get(), 6);
    }
}

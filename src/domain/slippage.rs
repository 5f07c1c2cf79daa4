//! Slippage tolerance as an exact rational.

use core::fmt;

use alloy_primitives::U256;

use super::basis_points::MAX_BPS;
use super::{Amount, BasisPoints, Rounding};
use crate::error::SwapError;
use crate::math::mul_div;

/// Fractional digits accepted by [`Slippage::from_percent_str`].
const MAX_PERCENT_FRACTION_DIGITS: usize = 18;

/// Maximum acceptable fractional shortfall between a quoted output and the
/// output actually received.
///
/// Held as `numerator / denominator` with `numerator <= denominator`, so
/// `0.5%` is exactly `5 / 1000` and never a binary float.
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::{Amount, Slippage};
///
/// let tolerance = Slippage::from_percent_str("0.5").expect("valid");
/// assert_eq!(tolerance, Slippage::from_bps(50).expect("valid"));
/// assert_eq!(tolerance.minimum_output(Amount::new(1991)), Ok(Amount::new(1982)));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Slippage {
    numerator: u128,
    denominator: u128,
}

impl Slippage {
    /// No tolerance: the minimum output equals the quote.
    pub const ZERO: Self = Self {
        numerator: 0,
        denominator: 1,
    };

    /// 0.5%, the default tolerance.
    pub const DEFAULT: Self = Self {
        numerator: 50,
        denominator: MAX_BPS as u128,
    };

    /// Creates a tolerance from a ratio.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidSlippage`] if the denominator is zero or
    /// the ratio exceeds one.
    pub const fn new(numerator: u128, denominator: u128) -> Result<Self, SwapError> {
        if denominator == 0 {
            return Err(SwapError::InvalidSlippage("denominator must be non-zero"));
        }
        if numerator > denominator {
            return Err(SwapError::InvalidSlippage("tolerance exceeds 100%"));
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Creates a tolerance from basis points.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidSlippage`] above 10 000 bp.
    pub const fn from_bps(bps: u32) -> Result<Self, SwapError> {
        Self::new(bps as u128, MAX_BPS as u128)
    }

    /// Parses a percentage such as `"0.5"` or `"1"` exactly.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidSlippage`] if the string is not a plain
    /// non-negative decimal, has more than 18 fractional digits, or exceeds
    /// 100.
    pub fn from_percent_str(input: &str) -> Result<Self, SwapError> {
        let s = input.trim().trim_end_matches('%').trim_end();
        let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
        if whole.is_empty() && frac.is_empty() {
            return Err(SwapError::InvalidSlippage("tolerance is empty"));
        }
        if !whole.bytes().chain(frac.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(SwapError::InvalidSlippage("tolerance is not a decimal number"));
        }
        let frac = frac.trim_end_matches('0');
        if frac.len() > MAX_PERCENT_FRACTION_DIGITS {
            return Err(SwapError::InvalidSlippage("tolerance has too many digits"));
        }
        let whole = whole.trim_start_matches('0');
        if whole.len() > 3 {
            return Err(SwapError::InvalidSlippage("tolerance exceeds 100%"));
        }
        let digits = format!("{whole}{frac}");
        let numerator = if digits.is_empty() {
            0
        } else {
            digits
                .parse::<u128>()
                .map_err(|_| SwapError::InvalidSlippage("tolerance is not a decimal number"))?
        };
        let mut denominator: u128 = 100;
        for _ in 0..frac.len() {
            denominator *= 10;
        }
        Self::new(numerator, denominator)
    }

    /// Converts a floating-point percentage the way a UI slider reports it.
    ///
    /// The value is truncated to whole basis points (`floor(pct * 100)`)
    /// before any arithmetic, then held exactly.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidSlippage`] for NaN, negative values or
    /// values above 100.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_percent_f64(percent: f64) -> Result<Self, SwapError> {
        if !percent.is_finite() || percent < 0.0 {
            return Err(SwapError::InvalidSlippage("tolerance must be a non-negative number"));
        }
        if percent > 100.0 {
            return Err(SwapError::InvalidSlippage("tolerance exceeds 100%"));
        }
        // In range 0..=10_000 after the checks above.
        let bps = (percent * 100.0).floor() as u32;
        Self::from_bps(bps)
    }

    /// Returns the numerator of the ratio.
    #[must_use]
    pub const fn numerator(&self) -> u128 {
        self.numerator
    }

    /// Returns the denominator of the ratio.
    #[must_use]
    pub const fn denominator(&self) -> u128 {
        self.denominator
    }

    /// Returns the tolerance truncated to whole basis points.
    #[must_use]
    pub fn to_bps(&self) -> BasisPoints {
        let bps = self.numerator.saturating_mul(u128::from(MAX_BPS)) / self.denominator;
        BasisPoints::new(u32::try_from(bps).unwrap_or(MAX_BPS))
    }

    /// Returns `amount_out - floor(amount_out * tolerance)`.
    ///
    /// The deduction never exceeds `amount_out`, so the floor is clamped at
    /// zero; a zero floor is legal and means the trader accepts any output.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if `amount_out * numerator` exceeds
    /// 256 bits.
    pub fn minimum_output(&self, amount_out: Amount) -> Result<Amount, SwapError> {
        let deduction = mul_div(
            amount_out.get(),
            U256::from(self.numerator),
            U256::from(self.denominator),
            Rounding::Down,
        )
        .ok_or(SwapError::Overflow("slippage deduction overflow"))?;
        Ok(amount_out.saturating_sub(&Amount::from_u256(deduction)))
    }
}

impl Default for Slippage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl PartialEq for Slippage {
    fn eq(&self, other: &Self) -> bool {
        // Cross-multiplication; both products fit in 256 bits.
        U256::from(self.numerator) * U256::from(other.denominator)
            == U256::from(other.numerator) * U256::from(self.denominator)
    }
}

impl Eq for Slippage {}

impl fmt::Display for Slippage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bps = self.to_bps().get();
        let whole = bps / 100;
        let frac = bps % 100;
        if frac == 0 {
            write!(f, "{whole}%")
        } else if frac % 10 == 0 {
            write!(f, "{whole}.{}%", frac / 10)
        } else {
            write!(f, "{whole}.{frac:02}%")
        }
    }
}

impl TryFrom<BasisPoints> for Slippage {
    type Error = SwapError;

    fn try_from(value: BasisPoints) -> Result<Self, Self::Error> {
        Self::from_bps(value.get())
    }
}

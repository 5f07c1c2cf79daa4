//! Basis-point representation for percentages.

use core::fmt;

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use super::{Amount, Rounding};
use crate::error::SwapError;

/// Value that represents 100%.
pub(crate) const MAX_BPS: u32 = 10_000;

/// A percentage expressed in basis points (1 bp = 0.01%, 10 000 bp = 100%).
///
/// All `u32` values are representable, but values above 10 000 are
/// nonsensical as percentages and have no [`complement`](Self::complement).
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::BasisPoints;
///
/// let bp = BasisPoints::new(30);
/// assert_eq!(bp.get(), 30);
/// assert_eq!(bp.complement(), Some(BasisPoints::new(9_970)));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct BasisPoints(u32);

impl BasisPoints {
    /// Zero basis points (0%).
    pub const ZERO: Self = Self(0);

    /// 100% expressed in basis points.
    pub const MAX_PERCENT: Self = Self(MAX_BPS);

    /// Creates a new `BasisPoints` from a raw `u32` value.
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the underlying `u32` value.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Returns `10_000 - self`, the complement within 100%.
    ///
    /// Returns `None` for values above 100%.
    #[must_use]
    pub const fn complement(&self) -> Option<Self> {
        match MAX_BPS.checked_sub(self.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Computes `amount * self / 10_000` with explicit rounding.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if the intermediate multiplication overflows.
    pub fn apply(&self, amount: Amount, rounding: Rounding) -> crate::error::Result<Amount> {
        let product = amount
            .checked_mul(&Amount::from_u256(U256::from(self.0)))
            .ok_or(SwapError::Overflow("basis points apply overflow"))?;
        product
            .checked_div(&Amount::new(u128::from(MAX_BPS)), rounding)
            .ok_or(SwapError::DivisionByZero)
    }
}

impl fmt::Display for BasisPoints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}bp", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(BasisPoints::ZERO.get(), 0);
        assert_eq!(BasisPoints::MAX_PERCENT.get(), 10_000);
    }

    #[test]
    fn complement_of_fee() {
        assert_eq!(BasisPoints::new(30).complement(), Some(BasisPoints::new(9_970)));
        assert_eq!(BasisPoints::new(10_001).complement(), None);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", BasisPoints::new(30)), "30bp");
    }

    #[test]
    fn apply_round_down() {
        // 30bp of 1_000_000 = 3_000
        let Ok(result) = BasisPoints::new(30).apply(Amount::new(1_000_000), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::new(3_000));
    }

    #[test]
    fn apply_round_up_remainder() {
        // 30bp of 1 = 0.003 → ceil = 1
        let Ok(result) = BasisPoints::new(30).apply(Amount::new(1), Rounding::Up) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::new(1));
    }

    #[test]
    fn apply_half_percent_of_quote() {
        // 50bp of 1991 = 9.955 → floor = 9
        let Ok(result) = BasisPoints::new(50).apply(Amount::new(1_991), Rounding::Down) else {
            panic!("expected Ok");
        };
        assert_eq!(result, Amount::new(9));
    }

    #[test]
    fn apply_overflow() {
        let result = BasisPoints::new(u32::MAX).apply(Amount::MAX, Rounding::Down);
        assert!(matches!(result, Err(SwapError::Overflow(_))));
    }

    #[test]
    fn serde_is_transparent() {
        let Ok(json) = serde_json::to_string(&BasisPoints::new(50)) else {
            panic!("serializable");
        };
        assert_eq!(json, "50");
    }
}

//! Liquidity-provider fee built on [`BasisPoints`].

use core::fmt;

use serde::{Deserialize, Serialize};

use super::basis_points::MAX_BPS;
use super::{Amount, BasisPoints};
use crate::error::SwapError;

/// The LP fee charged by a constant-product pair on the input amount.
///
/// The pricing formula multiplies the input by
/// [`fee_numerator`](Self::fee_numerator) and the input reserve by
/// [`fee_denominator`](Self::fee_denominator).  For the Uniswap V2 fee of
/// 30 bp these are the router's constants `997` and `1000`.
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::{Amount, FeeTier};
///
/// let tier = FeeTier::UNISWAP_V2;
/// assert_eq!(tier.basis_points().get(), 30);
/// assert_eq!(tier.fee_numerator(), Amount::new(997));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeTier(BasisPoints);

impl FeeTier {
    /// 0.30% fee charged by every Uniswap V2 pair.
    pub const UNISWAP_V2: Self = Self(BasisPoints::new(30));

    /// No fee; used for spot-price quotes.
    pub const ZERO: Self = Self(BasisPoints::ZERO);

    /// Creates a new `FeeTier` from arbitrary [`BasisPoints`].
    pub const fn new(basis_points: BasisPoints) -> Self {
        Self(basis_points)
    }

    /// Creates a fee tier, rejecting fees of 100% or more.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if the fee would leave
    /// nothing of the input amount.
    pub fn checked(basis_points: BasisPoints) -> crate::error::Result<Self> {
        if basis_points.get() >= MAX_BPS {
            return Err(SwapError::InvalidConfiguration(format!(
                "fee tier {basis_points} leaves no input after fees"
            )));
        }
        Ok(Self(basis_points))
    }

    /// Returns the underlying [`BasisPoints`].
    #[must_use]
    pub const fn basis_points(&self) -> BasisPoints {
        self.0
    }

    /// Multiplier applied to the input amount, in lowest terms when the
    /// fee is a multiple of 10 bp (`997` for 30 bp).
    pub fn fee_numerator(&self) -> Amount {
        let (num, _) = self.ratio();
        Amount::new(u128::from(num))
    }

    /// Multiplier applied to the input reserve (`1000` for 30 bp).
    pub fn fee_denominator(&self) -> Amount {
        let (_, den) = self.ratio();
        Amount::new(u128::from(den))
    }

    fn ratio(&self) -> (u32, u32) {
        let keep = self.0.complement().map_or(0, |c| c.get());
        if keep % 10 == 0 {
            (keep / 10, MAX_BPS / 10)
        } else {
            (keep, MAX_BPS)
        }
    }
}

impl Default for FeeTier {
    fn default() -> Self {
        Self::UNISWAP_V2
    }
}

impl fmt::Display for FeeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FeeTier({})", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn uniswap_v2_is_997_over_1000() {
        let tier = FeeTier::UNISWAP_V2;
        assert_eq!(tier.fee_numerator(), Amount::new(997));
        assert_eq!(tier.fee_denominator(), Amount::new(1_000));
    }

    #[test]
    fn odd_fee_keeps_full_denominator() {
        let tier = FeeTier::new(BasisPoints::new(25));
        assert_eq!(tier.fee_numerator(), Amount::new(9_975));
        assert_eq!(tier.fee_denominator(), Amount::new(10_000));
    }

    #[test]
    fn zero_fee_is_identity() {
        assert_eq!(FeeTier::ZERO.fee_numerator(), FeeTier::ZERO.fee_denominator());
    }

    #[test]
    fn checked_rejects_full_fee() {
        assert!(FeeTier::checked(BasisPoints::MAX_PERCENT).is_err());
        assert!(FeeTier::checked(BasisPoints::new(30)).is_ok());
    }

    #[test]
    fn default_is_uniswap_v2() {
        assert_eq!(FeeTier::default(), FeeTier::UNISWAP_V2);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", FeeTier::UNISWAP_V2), "FeeTier(30bp)");
    }
}

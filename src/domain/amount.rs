//! Raw token amount with checked 256-bit arithmetic.

use core::fmt;

use alloy_primitives::U256;

use super::Rounding;

/// A raw token amount in the smallest unit (wei or equivalent).
///
/// `Amount` never interprets decimals; that is the job of
/// [`Decimals`](super::Decimals). Values are 256-bit so that 18-decimal
/// amounts multiplied by pool reserves never lose precision.
///
/// Arithmetic methods are checked: they return `None` on overflow,
/// underflow, or division by zero instead of panicking.
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::{Amount, Rounding};
///
/// let a = Amount::new(100);
/// let b = Amount::new(200);
/// assert_eq!(a.checked_add(&b), Some(Amount::new(300)));
/// assert_eq!(b.checked_sub(&a), Some(Amount::new(100)));
/// assert_eq!(b.checked_div(&Amount::new(3), Rounding::Down), Some(Amount::new(66)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(U256);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(U256::ZERO);

    /// Maximum representable amount (`2^256 - 1`).
    pub const MAX: Self = Self(U256::MAX);

    /// Creates a new `Amount` from a `u128` value.
    pub fn new(value: u128) -> Self {
        Self(U256::from(value))
    }

    /// Wraps a raw 256-bit value.
    pub const fn from_u256(value: U256) -> Self {
        Self(value)
    }

    /// Returns the underlying 256-bit value.
    #[must_use]
    pub const fn get(&self) -> U256 {
        self.0
    }

    /// Returns `true` if the amount is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Checked addition. Returns `None` on overflow.
    #[must_use]
    pub fn checked_add(&self, other: &Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction. Returns `None` on underflow.
    #[must_use]
    pub fn checked_sub(&self, other: &Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }

    /// Subtraction clamped at zero.
    pub fn saturating_sub(&self, other: &Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }

    /// Checked multiplication. Returns `None` on overflow.
    #[must_use]
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        self.0.checked_mul(other.0).map(Self)
    }

    /// Checked division with explicit rounding direction.
    ///
    /// - [`Rounding::Down`]: floor division.
    /// - [`Rounding::Up`]: ceiling division.
    ///
    /// Returns `None` if `divisor` is zero.
    #[must_use]
    pub fn checked_div(&self, divisor: &Self, rounding: Rounding) -> Option<Self> {
        if divisor.0.is_zero() {
            return None;
        }
        let q = self.0 / divisor.0;
        match rounding {
            Rounding::Down => Some(Self(q)),
            Rounding::Up => {
                if (self.0 % divisor.0).is_zero() {
                    Some(Self(q))
                } else {
                    // q < MAX whenever the remainder is non-zero and divisor > 1.
                    q.checked_add(U256::from(1u8)).map(Self)
                }
            }
        }
    }
}

impl From<U256> for Amount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl From<Amount> for U256 {
    fn from(value: Amount) -> Self {
        value.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    // -- Construction & accessors -------------------------------------------

    #[test]
    fn new_and_get() {
        let a = Amount::new(42);
        assert_eq!(a.get(), U256::from(42u64));
    }

    #[test]
    fn constants() {
        assert!(Amount::ZERO.is_zero());
        assert_eq!(Amount::MAX.get(), U256::MAX);
    }

    #[test]
    fn default_is_zero() {
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Amount::new(1_000_000)), "1000000");
    }

    #[test]
    fn exceeds_u128() {
        let big = Amount::new(u128::MAX);
        let Some(doubled) = big.checked_add(&big) else {
            panic!("fits in 256 bits");
        };
        assert!(doubled > big);
    }

    // -- checked arithmetic -------------------------------------------------

    #[test]
    fn add_overflow() {
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
    }

    #[test]
    fn saturating_sub_clamps() {
        assert_eq!(Amount::new(1).saturating_sub(&Amount::new(2)), Amount::ZERO);
        assert_eq!(Amount::new(5).saturating_sub(&Amount::new(2)), Amount::new(3));
    }

    #[test]
    fn mul_overflow() {
        assert_eq!(Amount::MAX.checked_mul(&Amount::new(2)), None);
    }

    #[test]
    fn mul_normal() {
        assert_eq!(
            Amount::new(997_000).checked_mul(&Amount::new(2_000_000)),
            Some(Amount::new(1_994_000_000_000))
        );
    }

    // -- checked_div --------------------------------------------------------

    #[test]
    fn div_remainder_round_down() {
        let r = Amount::new(10).checked_div(&Amount::new(3), Rounding::Down);
        assert_eq!(r, Some(Amount::new(3)));
    }

    #[test]
    fn div_remainder_round_up() {
        let r = Amount::new(10).checked_div(&Amount::new(3), Rounding::Up);
        assert_eq!(r, Some(Amount::new(4)));
    }

    #[test]
    fn div_exact_both_directions_agree() {
        let a = Amount::new(100);
        let d = Amount::new(10);
        assert_eq!(a.checked_div(&d, Rounding::Down), a.checked_div(&d, Rounding::Up));
    }

    #[test]
    fn div_by_zero() {
        assert_eq!(Amount::new(1).checked_div(&Amount::ZERO, Rounding::Down), None);
        assert_eq!(Amount::new(1).checked_div(&Amount::ZERO, Rounding::Up), None);
    }

    #[test]
    fn div_max_round_up() {
        let Some(ceil) = Amount::MAX.checked_div(&Amount::new(2), Rounding::Up) else {
            panic!("ceil of MAX/2 fits");
        };
        let Some(floor) = Amount::MAX.checked_div(&Amount::new(2), Rounding::Down) else {
            panic!("floor of MAX/2 fits");
        };
        assert_eq!(floor.checked_add(&Amount::new(1)), Some(ceil));
    }

    #[test]
    fn u256_round_trip() {
        let raw = U256::from(123_456_789u64);
        let back: U256 = Amount::from(raw).into();
        assert_eq!(back, raw);
    }
}

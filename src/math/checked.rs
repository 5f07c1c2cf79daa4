//! Checked arithmetic trait for [`Amount`].
//!
//! The [`CheckedArithmetic`] trait turns the `Option`-returning methods of
//! [`Amount`] into [`Result<Self, SwapError>`](crate::error::SwapError) so
//! the quote and planning code can chain them with `?`.
//!
//! # Examples
//!
//! ```
//! use hydra_swap::domain::{Amount, Rounding};
//! use hydra_swap::math::CheckedArithmetic;
//!
//! let with_fee = Amount::new(1_000).safe_mul(&Amount::new(997)).expect("fits");
//! assert_eq!(with_fee, Amount::new(997_000));
//! assert!(Amount::new(1).safe_sub(&Amount::new(2)).is_err());
//! ```

use crate::domain::{Amount, Rounding};
use crate::error::SwapError;

/// Fallible arithmetic with a specific error per failure mode.
///
/// # Contract
///
/// - **No panics**: every error condition produces `Err`.
/// - **No saturation**: a saturated reserve product would silently quote a
///   wrong price, so errors propagate instead.
pub trait CheckedArithmetic: Sized {
    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if the result exceeds 256 bits.
    fn safe_add(&self, other: &Self) -> Result<Self, SwapError>;

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Underflow`] if the result would be negative.
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError>;

    /// Checked multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::Overflow`] if the result exceeds 256 bits.
    fn safe_mul(&self, other: &Self) -> Result<Self, SwapError>;

    /// Checked division with explicit [`Rounding`] direction.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::DivisionByZero`] if `other` is zero.
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, SwapError>;
}

impl CheckedArithmetic for Amount {
    #[inline]
    fn safe_add(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_add(other)
            .ok_or(SwapError::Overflow("amount addition overflow"))
    }

    #[inline]
    fn safe_sub(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_sub(other)
            .ok_or(SwapError::Underflow("amount subtraction underflow"))
    }

    #[inline]
    fn safe_mul(&self, other: &Self) -> Result<Self, SwapError> {
        self.checked_mul(other)
            .ok_or(SwapError::Overflow("amount multiplication overflow"))
    }

    #[inline]
    fn safe_div(&self, other: &Self, rounding: Rounding) -> Result<Self, SwapError> {
        self.checked_div(other, rounding)
            .ok_or(SwapError::DivisionByZero)
    }
}

//! Rounding helpers for 256-bit integer division.
//!
//! [`div_round`] and [`mul_div`] are the low-level building blocks of the
//! quote engine and the slippage floor.  They operate on raw
//! [`U256`](alloy_primitives::U256) values so that the results match the
//! router contract's `uint256` arithmetic bit for bit.
//!
//! # Convention
//!
//! **Always round against the trader**, as the router does:
//!
//! | Quantity | Direction |
//! |----------|-----------|
//! | Output amount | [`Rounding::Down`] |
//! | Input amount (exact-out) | [`Rounding::Up`] |
//! | Slippage deduction | [`Rounding::Down`] |
//!
//! # Examples
//!
//! ```
//! use alloy_primitives::U256;
//! use hydra_swap::domain::Rounding;
//! use hydra_swap::math::div_round;
//!
//! let ten = U256::from(10u8);
//! let three = U256::from(3u8);
//! assert_eq!(div_round(ten, three, Rounding::Down), Some(U256::from(3u8)));
//! assert_eq!(div_round(ten, three, Rounding::Up), Some(U256::from(4u8)));
//! assert_eq!(div_round(ten, U256::ZERO, Rounding::Down), None);
//! ```

use alloy_primitives::U256;

use crate::domain::Rounding;

/// Integer division of `U256` values with explicit rounding direction.
///
/// Returns [`None`] if `denominator` is zero.
#[must_use]
pub fn div_round(numerator: U256, denominator: U256, rounding: Rounding) -> Option<U256> {
    if denominator.is_zero() {
        return None;
    }
    let q = numerator / denominator;
    match rounding {
        Rounding::Down => Some(q),
        Rounding::Up => {
            if (numerator % denominator).is_zero() {
                Some(q)
            } else {
                // A non-zero remainder implies q < U256::MAX.
                q.checked_add(U256::from(1u8))
            }
        }
    }
}

/// Computes `a * b / denominator` with explicit rounding.
///
/// Returns [`None`] if the product overflows 256 bits or the denominator is
/// zero.  The router performs the same multiplication in `uint256` and
/// reverts on overflow, so refusing here keeps the quote honest.
#[must_use]
pub fn mul_div(a: U256, b: U256, denominator: U256, rounding: Rounding) -> Option<U256> {
    let product = a.checked_mul(b)?;
    div_round(product, denominator, rounding)
}

//! Constant-product pricing with an input fee (Uniswap V2 router math).
//!
//! The invariant is `x × y = k` where `x` and `y` are the pair's reserves.
//! The LP fee is taken from the input before pricing and stays in the pool.
//!
//! # Exact-in (`getAmountOut`)
//!
//! 1. `amount_in_with_fee = amount_in × N`
//! 2. `numerator = amount_in_with_fee × reserve_out`
//! 3. `denominator = reserve_in × D + amount_in_with_fee`
//! 4. `amount_out = floor(numerator / denominator)`
//!
//! with `N / D = 997 / 1000` for the 0.30% fee.  Every step is 256-bit
//! integer arithmetic so the result equals what the router pays out.
//!
//! # Exact-out (`getAmountIn`)
//!
//! `amount_in = floor(reserve_in × amount_out × D / ((reserve_out − amount_out) × N)) + 1`

use alloy_primitives::U256;
use tracing::trace;

use crate::domain::{Amount, BasisPoints, FeeTier, OrientedReserves, Rounding};
use crate::error::{Result, SwapError};
use crate::math::{div_round, CheckedArithmetic};

const MAX_BPS: u32 = BasisPoints::MAX_PERCENT.get();

/// Output for an exact input against one pool.
///
/// # Errors
///
/// - [`SwapError::InvalidAmount`] if `amount_in` is zero.
/// - [`SwapError::NoLiquidity`] if either reserve is zero.
/// - [`SwapError::Overflow`] if an intermediate product exceeds 256 bits;
///   the router reverts on the same inputs.
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::{Amount, FeeTier};
/// use hydra_swap::quote::get_amount_out;
///
/// let out = get_amount_out(
///     Amount::new(1_000),
///     Amount::new(1_000_000),
///     Amount::new(2_000_000),
///     FeeTier::UNISWAP_V2,
/// );
/// assert_eq!(out, Ok(Amount::new(1991)));
/// ```
pub fn get_amount_out(
    amount_in: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount> {
    if amount_in.is_zero() {
        return Err(SwapError::InvalidAmount("amount must be positive"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(SwapError::NoLiquidity);
    }

    let amount_in_with_fee = amount_in.safe_mul(&fee.fee_numerator())?;
    let numerator = amount_in_with_fee.safe_mul(&reserve_out)?;
    let denominator = reserve_in
        .safe_mul(&fee.fee_denominator())?
        .safe_add(&amount_in_with_fee)?;
    let amount_out = numerator.safe_div(&denominator, Rounding::Down)?;

    trace!(%amount_in, %reserve_in, %reserve_out, %amount_out, "get_amount_out");
    Ok(amount_out)
}

/// Input required to receive exactly `amount_out` from one pool.
///
/// # Errors
///
/// - [`SwapError::InvalidAmount`] if `amount_out` is zero.
/// - [`SwapError::NoLiquidity`] if either reserve is zero.
/// - [`SwapError::InsufficientLiquidity`] if `amount_out >= reserve_out`.
/// - [`SwapError::Overflow`] on 256-bit overflow.
pub fn get_amount_in(
    amount_out: Amount,
    reserve_in: Amount,
    reserve_out: Amount,
    fee: FeeTier,
) -> Result<Amount> {
    if amount_out.is_zero() {
        return Err(SwapError::InvalidAmount("amount must be positive"));
    }
    if reserve_in.is_zero() || reserve_out.is_zero() {
        return Err(SwapError::NoLiquidity);
    }
    if amount_out >= reserve_out {
        return Err(SwapError::InsufficientLiquidity);
    }

    let numerator = reserve_in
        .safe_mul(&amount_out)?
        .safe_mul(&fee.fee_denominator())?;
    let denominator = reserve_out
        .safe_sub(&amount_out)?
        .safe_mul(&fee.fee_numerator())?;
    let amount_in = numerator
        .safe_div(&denominator, Rounding::Down)?
        .safe_add(&Amount::new(1))?;

    trace!(%amount_out, %reserve_in, %reserve_out, %amount_in, "get_amount_in");
    Ok(amount_in)
}

/// Chains [`get_amount_out`] over consecutive pools.
///
/// `hops` holds one [`OrientedReserves`] per leg of the path, in path
/// order.  The returned vector starts with `amount_in` and ends with the
/// final output, one entry per token on the path.
///
/// # Errors
///
/// Returns [`SwapError::InvalidToken`] unless there are one or two legs,
/// and any error of [`get_amount_out`] for a leg.
pub fn get_amounts_out(
    amount_in: Amount,
    hops: &[OrientedReserves],
    fee: FeeTier,
) -> Result<Vec<Amount>> {
    if !(1..=2).contains(&hops.len()) {
        return Err(SwapError::InvalidToken("path must have 2 or 3 hops"));
    }
    let mut amounts = Vec::with_capacity(hops.len() + 1);
    amounts.push(amount_in);
    let mut current = amount_in;
    for reserves in hops {
        current = get_amount_out(current, reserves.reserve_in(), reserves.reserve_out(), fee)?;
        amounts.push(current);
    }
    Ok(amounts)
}

/// Fee-less proportional value of `amount_a` at the pool's spot price:
/// `floor(amount_a × reserve_b / reserve_a)`.
///
/// # Errors
///
/// - [`SwapError::InvalidAmount`] if `amount_a` is zero.
/// - [`SwapError::NoLiquidity`] if either reserve is zero.
/// - [`SwapError::Overflow`] on 256-bit overflow.
pub fn quote_spot(amount_a: Amount, reserve_a: Amount, reserve_b: Amount) -> Result<Amount> {
    if amount_a.is_zero() {
        return Err(SwapError::InvalidAmount("amount must be positive"));
    }
    if reserve_a.is_zero() || reserve_b.is_zero() {
        return Err(SwapError::NoLiquidity);
    }
    amount_a
        .safe_mul(&reserve_b)?
        .safe_div(&reserve_a, Rounding::Down)
}

/// Shortfall of `amount_out` against the spot value of `amount_in` along
/// `hops`, rounded up to whole basis points.
///
/// Returns zero when the spot value rounds to zero or a leg is empty, and
/// [`BasisPoints::MAX_PERCENT`] when the spot value does not fit in 256 bits.
#[must_use]
pub fn price_impact(amount_in: Amount, amount_out: Amount, hops: &[OrientedReserves]) -> BasisPoints {
    let mut spot = amount_in;
    for reserves in hops {
        if spot.is_zero() || !reserves.has_liquidity() {
            return BasisPoints::ZERO;
        }
        spot = match quote_spot(spot, reserves.reserve_in(), reserves.reserve_out()) {
            Ok(v) => v,
            Err(_) => return BasisPoints::MAX_PERCENT,
        };
    }
    if spot.is_zero() || amount_out >= spot {
        return BasisPoints::ZERO;
    }
    // Scale both terms down so `shortfall × 10_000` stays within 256 bits.
    let shift = spot.get().bit_len().saturating_sub(U256::BITS - 14);
    let shortfall = spot.saturating_sub(&amount_out).get() >> shift;
    let spot = spot.get() >> shift;
    let bps = div_round(shortfall * U256::from(MAX_BPS), spot, Rounding::Up).unwrap_or(U256::from(MAX_BPS));
    // shortfall < spot, so the ratio is at most 10_000.
    BasisPoints::new(u32::try_from(bps).unwrap_or(MAX_BPS))
}

//! Property-based tests for the constant-product quote and slippage floor.
//!
//! 1. **Strict bound**: output is always below the output reserve.
//! 2. **Monotonicity**: a larger input never yields a smaller output.
//! 3. **Idempotence**: identical inputs give bit-identical output.
//! 4. **Slippage floor**: the minimum output never exceeds the quote.
//! 5. **Exact-out inverse**: `get_amount_in` buys at least the requested output.

use proptest::prelude::*;

use super::{get_amount_in, get_amount_out};
use crate::domain::{Amount, FeeTier, Slippage};

const FEE: FeeTier = FeeTier::UNISWAP_V2;

// ---------------------------------------------------------------------------
// Custom strategies
// ---------------------------------------------------------------------------

/// Reserves from dust up to 10^12 whole 18-decimal tokens.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000_000_000_000_000_000_000_000_000u128
}

/// Inputs spanning dust to amounts far larger than any pool.
fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=u128::MAX / 2
}

/// Tolerances across the whole 0..=100% range, in basis points.
fn bps_strategy() -> impl Strategy<Value = u32> {
    0u32..=10_000u32
}

// ---------------------------------------------------------------------------
// Property 1: Strict bound
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_output_below_reserve(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let Ok(out) = get_amount_out(Amount::new(amount), Amount::new(rin), Amount::new(rout), FEE) else {
            return Err(TestCaseError::fail("u128 inputs never overflow 256 bits"));
        };
        prop_assert!(out < Amount::new(rout), "out={} reserve_out={}", out, rout);
    }
}

// ---------------------------------------------------------------------------
// Property 2: Monotonicity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_monotonic_in_amount(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        a1 in amount_strategy(),
        a2 in amount_strategy(),
    ) {
        let (lo, hi) = if a1 <= a2 { (a1, a2) } else { (a2, a1) };
        let (Ok(out_lo), Ok(out_hi)) = (
            get_amount_out(Amount::new(lo), Amount::new(rin), Amount::new(rout), FEE),
            get_amount_out(Amount::new(hi), Amount::new(rin), Amount::new(rout), FEE),
        ) else {
            return Err(TestCaseError::fail("u128 inputs never overflow 256 bits"));
        };
        prop_assert!(out_lo <= out_hi, "lo={} -> {}, hi={} -> {}", lo, out_lo, hi, out_hi);
    }
}

// ---------------------------------------------------------------------------
// Property 3: Idempotence
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_quote_is_deterministic(
        rin in reserve_strategy(),
        rout in reserve_strategy(),
        amount in amount_strategy(),
    ) {
        let first = get_amount_out(Amount::new(amount), Amount::new(rin), Amount::new(rout), FEE);
        let second = get_amount_out(Amount::new(amount), Amount::new(rin), Amount::new(rout), FEE);
        prop_assert_eq!(first, second);
    }
}

// ---------------------------------------------------------------------------
// Property 4: Slippage floor
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_minimum_output_never_exceeds_quote(
        out in any::<u128>(),
        bps in bps_strategy(),
    ) {
        let Ok(tolerance) = Slippage::from_bps(bps) else {
            return Err(TestCaseError::fail("bps in range"));
        };
        let Ok(min) = tolerance.minimum_output(Amount::new(out)) else {
            return Err(TestCaseError::fail("u128 * u32 fits in 256 bits"));
        };
        prop_assert!(min <= Amount::new(out));
        if bps == 0 {
            prop_assert_eq!(min, Amount::new(out));
        }
    }
}

// ---------------------------------------------------------------------------
// Property 5: Exact-out inverse
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_amount_in_buys_requested_output(
        rin in 1_000u128..=1_000_000_000_000_000_000_000u128,
        rout in 1_000u128..=1_000_000_000_000_000_000_000u128,
        share in 1u32..=9_000u32,
    ) {
        // Request between 0.01% and 90% of the output reserve.
        let want = (rout / 10_000).saturating_mul(u128::from(share)).max(1);
        let Ok(needed) = get_amount_in(Amount::new(want), Amount::new(rin), Amount::new(rout), FEE) else {
            return Ok(());
        };
        let Ok(got) = get_amount_out(needed, Amount::new(rin), Amount::new(rout), FEE) else {
            return Err(TestCaseError::fail("needed input must be quotable"));
        };
        prop_assert!(got >= Amount::new(want), "want={} got={} needed={}", want, got, needed);
    }
}

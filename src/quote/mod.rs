//! Quote engine: deterministic constant-product pricing.
//!
//! The free functions mirror the Uniswap V2 library (`getAmountOut`,
//! `getAmountIn`, `getAmountsOut`, `quote`) over 256-bit integers.
//! [`QuoteEngine`] wraps them into a [`TradeQuote`](crate::domain::TradeQuote)
//! with a price-impact figure, and [`QuoteOutcome`] separates "no quote
//! available" from real failures.

mod constant_product;
mod engine;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::{get_amount_in, get_amount_out, get_amounts_out, price_impact, quote_spot};
pub use engine::{QuoteEngine, QuoteOutcome};

//! Fundamental domain value types used throughout the swap library.
//!
//! This module contains the value types that model a constant-product swap:
//! tokens and chains, raw amounts and decimals, pool reserves, slippage,
//! router paths, deadlines, and quotes.  All types use newtypes with
//! validated constructors to enforce invariants.

mod amount;
mod basis_points;
mod chain;
mod deadline;
mod decimals;
mod fee_tier;
mod reserves;
mod rounding;
mod slippage;
mod swap_path;
mod token;
mod token_address;
mod token_pair;
mod trade_quote;

pub use amount::Amount;
pub use basis_points::BasisPoints;
pub use chain::ChainId;
pub use deadline::{unix_now, Deadline};
pub use decimals::Decimals;
pub use fee_tier::FeeTier;
pub use reserves::{OrientedReserves, ReservePair};
pub use rounding::Rounding;
pub use slippage::Slippage;
pub use swap_path::SwapPath;
pub use token::Token;
pub use token_address::TokenAddress;
pub use token_pair::TokenPair;
pub use trade_quote::{TradeQuote, TradeRequest};

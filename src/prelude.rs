//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_swap::prelude::*;
//! ```

pub use crate::domain::{
    Amount, BasisPoints, ChainId, Deadline, Decimals, FeeTier, Rounding, Slippage, SwapPath, Token,
    TokenAddress, TokenPair, TradeQuote, TradeRequest,
};

pub use crate::traits::{ChainReader, TxReceipt, Wallet};

pub use crate::math::CheckedArithmetic;

pub use crate::config::{ChainConfig, SwapConfig, TokenList};

pub use crate::quote::{QuoteEngine, QuoteOutcome};

pub use crate::planner::{ApprovalPolicy, ExecutionPlan, ExecutionPlanner, SwapOperation};

pub use crate::controller::{SwapFailure, SwapSession, SwapState};

pub use crate::error::{Result, SwapError};

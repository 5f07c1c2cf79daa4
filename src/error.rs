//! Unified error types for the Hydra Swap library.
//!
//! All fallible operations across the crate return [`SwapError`] as their
//! error type.  The variants follow the swap lifecycle: quoting errors
//! (`NoLiquidity`, `InvalidAmount`, ...) mean "no quote available" and never
//! abort the surrounding flow, while execution errors (`UserRejected`,
//! `NetworkError`, `SubmissionReverted`) abort only the in-flight attempt.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, SwapError>;

/// Every error the quoting, planning and execution layers can produce.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SwapError {
    /// The pool for the requested pair has zero reserves or does not exist.
    #[error("no liquidity for the requested pair")]
    NoLiquidity,

    /// Reserves exist but cannot satisfy the requested trade.
    #[error("insufficient liquidity for this trade")]
    InsufficientLiquidity,

    /// The entered amount is zero, negative or unparseable.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),

    /// A 256-bit intermediate value overflowed.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A 256-bit subtraction went below zero.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// A division by zero was attempted.
    #[error("division by zero")]
    DivisionByZero,

    /// A token is unknown, duplicated or used in an invalid position.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// A decimal precision is out of the supported range.
    #[error("invalid precision: {0}")]
    InvalidPrecision(&'static str),

    /// A slippage tolerance is outside `0..=100%` or unparseable.
    #[error("invalid slippage tolerance: {0}")]
    InvalidSlippage(&'static str),

    /// The chain id is not one of the configured networks.
    #[error("unsupported chain id {0}")]
    UnsupportedChain(u64),

    /// Configuration failed validation or could not be loaded.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A swap-attempt state change that the state machine does not allow.
    #[error("illegal state transition {from} -> {to}")]
    InvalidTransition {
        /// State the attempt was in.
        from: &'static str,
        /// State that was requested.
        to: &'static str,
    },

    /// The router does not hold enough allowance for the input token.
    ///
    /// Resolved by the approval step; only surfaced if that step fails.
    #[error("router allowance is insufficient")]
    AllowanceInsufficient,

    /// The wallet declined to sign.
    #[error("transaction rejected by the wallet")]
    UserRejected,

    /// RPC or transport failure.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The transaction was mined but reverted on chain.
    #[error("transaction reverted: {0}")]
    SubmissionReverted(String),
}

impl SwapError {
    /// Returns `true` if the error only means "no quote available".
    ///
    /// Such errors are shown next to the output field and never block
    /// further input.
    #[must_use]
    pub const fn is_quote_unavailable(&self) -> bool {
        matches!(
            self,
            Self::NoLiquidity
                | Self::InsufficientLiquidity
                | Self::InvalidAmount(_)
                | Self::Overflow(_)
                | Self::Underflow(_)
                | Self::DivisionByZero
        )
    }

    /// Returns `true` if the error came from the chain or the wallet rather
    /// than from local validation.
    #[must_use]
    pub const fn is_external(&self) -> bool {
        matches!(
            self,
            Self::UserRejected | Self::NetworkError(_) | Self::SubmissionReverted(_)
        )
    }

    /// A short, user-facing suggestion for what to do next.
    #[must_use]
    pub const fn suggested_action(&self) -> &'static str {
        match self {
            Self::NoLiquidity => "This pair may not exist or has no liquidity on this network. Try a different token pair.",
            Self::InsufficientLiquidity => "Reduce the trade size.",
            Self::InvalidAmount(_) => "Enter a positive amount.",
            Self::Overflow(_) | Self::Underflow(_) | Self::DivisionByZero => {
                "Reduce the trade size."
            }
            Self::InvalidToken(_) => "Select two different tokens.",
            Self::InvalidPrecision(_) => "Check the token's decimal configuration.",
            Self::InvalidSlippage(_) => "Enter a slippage tolerance between 0 and 100%.",
            Self::UnsupportedChain(_) => "Switch the wallet to a supported network.",
            Self::InvalidConfiguration(_) => "Fix the swap configuration and reload.",
            Self::InvalidTransition { .. } => "Wait for the current swap to finish.",
            Self::AllowanceInsufficient => "Approve the router to spend the input token, then retry.",
            Self::UserRejected => "Confirm the transaction in your wallet to continue.",
            Self::NetworkError(_) => "Check your connection and try again.",
            Self::SubmissionReverted(_) => {
                "The price moved beyond your slippage tolerance. Increase the tolerance or retry."
            }
        }
    }
}

//! # Hydra Swap
//!
//! Uniswap V2 style swap quoting and slippage-bounded execution planning.
//!
//! The crate prices exact-input trades against constant-product pools with
//! the same integer arithmetic the on-chain router uses, turns a quote into
//! the exact approval and swap calls, and drives the whole flow from a
//! small event-driven controller over pluggable chain and wallet
//! collaborators.
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `rpc` | yes | [`JsonRpcChainReader`](rpc::JsonRpcChainReader) over HTTP JSON-RPC |
//!
//! # Quick Start
//!
//! ## Quote a trade and plan its execution
//!
//! ```rust
//! use alloy_primitives::Address;
//! use hydra_swap::domain::{
//!     Amount, ChainId, Deadline, Decimals, OrientedReserves, Slippage, Token,
//!     TokenAddress, TradeRequest,
//! };
//! use hydra_swap::planner::{select_path, ExecutionPlanner};
//! use hydra_swap::quote::QuoteEngine;
//!
//! // 1. Two tokens and the chain's wrapped native token
//! let usdc = Token::new(
//!     ChainId::Mainnet,
//!     TokenAddress::from_bytes([0xa0; 20]),
//!     Decimals::new(6).expect("valid decimals"),
//!     "USDC",
//!     "USD Coin",
//! );
//! let dai = Token::new(ChainId::Mainnet, TokenAddress::from_bytes([0x6b; 20]), Decimals::ETHER, "DAI", "Dai");
//! let weth = Token::new(ChainId::Mainnet, TokenAddress::from_bytes([0xc0; 20]), Decimals::ETHER, "WETH", "Wrapped Ether");
//!
//! // 2. A direct pool exists, so the path has two hops
//! let path = select_path(&usdc, &dai, &weth, true).expect("distinct tokens");
//!
//! // 3. Quote against the pool's reserves, oriented (reserve_in, reserve_out)
//! let request = TradeRequest::new(usdc, dai, Amount::new(1_000)).expect("valid request");
//! let reserves = [OrientedReserves::new(Amount::new(1_000_000), Amount::new(2_000_000))];
//! let quote = QuoteEngine::default().quote(request, path, &reserves).expect("liquid pool");
//! assert_eq!(quote.amount_out(), Amount::new(1991));
//!
//! // 4. Plan: 0.5% slippage, no allowance yet
//! let plan = ExecutionPlanner::new(Address::repeat_byte(0x7a))
//!     .plan(&quote, Slippage::DEFAULT, Deadline::at(2_000_000_000), Address::repeat_byte(0xee), Amount::ZERO)
//!     .expect("plannable");
//! assert!(plan.needs_approval());
//! assert_eq!(plan.swap_step.amount_out_min, Amount::new(1982));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐
//! │  Controller  │  SwapSession: form, state machine, stale-response guard
//! └──────┬───────┘
//!        │ ChainReader + Wallet traits
//!        ▼
//! ┌──────────────┐     ┌──────────────┐
//! │ Quote Engine │ ──▶ │   Planner    │  slippage floor, path, operation, approval
//! └──────┬───────┘     └──────┬───────┘
//!        │                    │ sol! calldata
//!        ▼                    ▼
//! ┌──────────────────────────────────┐
//! │  Domain: Amount, Token, Slippage │
//! └──────────────────────────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Token`](domain::Token), [`Slippage`](domain::Slippage), etc. |
//! | [`math`] | Checked 256-bit arithmetic with explicit rounding |
//! | [`quote`] | Constant-product pricing and the [`QuoteEngine`](quote::QuoteEngine) |
//! | [`planner`] | [`ExecutionPlanner`](planner::ExecutionPlanner): slippage floor, path and approval gating |
//! | [`router`] | ABI encoding for router, pair, factory and ERC-20 calls |
//! | [`traits`] | Collaborator seams: [`ChainReader`](traits::ChainReader), [`Wallet`](traits::Wallet) |
//! | [`controller`] | [`SwapSession`](controller::SwapSession), balance polling, request sequencing |
//! | [`config`] | [`SwapConfig`](config::SwapConfig), network presets and token list |
//! | [`units`] | Balance display formatting |
//! | [`error`] | [`SwapError`](error::SwapError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod controller;
pub mod domain;
pub mod error;
pub mod math;
pub mod planner;
pub mod prelude;
pub mod quote;
pub mod router;
#[cfg(feature = "rpc")]
pub mod rpc;
pub mod traits;
pub mod units;

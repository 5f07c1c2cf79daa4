//! Declarative configuration.
//!
//! [`SwapConfig`] is the top-level document: per-network deployments
//! ([`ChainConfig`]), the selectable tokens ([`TokenList`]) and the
//! session defaults.  It loads from TOML and validates on load.

mod chain;
mod swap_config;
mod token_list;

pub use chain::ChainConfig;
pub use swap_config::SwapConfig;
pub use token_list::TokenList;

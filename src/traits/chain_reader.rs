//! Read-only access to chain state.
//!
//! [`ChainReader`] is the seam between the swap flow and a node.  The
//! crate ships a JSON-RPC implementation behind the `rpc` feature; tests
//! use in-memory implementations.

use alloy_primitives::Address;
use async_trait::async_trait;

use crate::domain::{Amount, ReservePair, TokenAddress};
use crate::error::Result;

/// Chain queries the quote and execution flow depends on.
///
/// Every method is a single round-trip.  Transport failures surface as
/// [`SwapError::NetworkError`](crate::error::SwapError::NetworkError).
#[async_trait]
pub trait ChainReader: Send + Sync {
    /// Pair contract for two ERC-20 tokens, or `None` if the factory has
    /// none.
    ///
    /// # Errors
    ///
    /// Returns a network error if the query fails.
    async fn get_pair_address(
        &self,
        token_a: TokenAddress,
        token_b: TokenAddress,
    ) -> Result<Option<Address>>;

    /// Current reserves of a pair, in pair order.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::NoLiquidity`](crate::error::SwapError::NoLiquidity)
    /// if `pair` has no contract, or a network error.
    async fn get_reserves(&self, pair: Address) -> Result<ReservePair>;

    /// Allowance `owner` has granted `spender` over `token`.
    ///
    /// # Errors
    ///
    /// Returns a network error if the query fails.
    async fn get_allowance(
        &self,
        token: TokenAddress,
        owner: Address,
        spender: Address,
    ) -> Result<Amount>;

    /// Balance of `owner` in `token`; the native sentinel reads the
    /// account's native balance.
    ///
    /// # Errors
    ///
    /// Returns a network error if the query fails.
    async fn get_balance(&self, owner: Address, token: TokenAddress) -> Result<Amount>;
}

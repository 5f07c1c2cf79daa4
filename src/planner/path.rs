//! Path and slippage-floor selection.

use tracing::debug;

use crate::domain::{Amount, Slippage, SwapPath, Token};
use crate::error::{Result, SwapError};

/// Chooses the router path for `token_in -> token_out`.
///
/// The native currency never appears in a path; it is replaced by
/// `wrapped_native`.  Then:
///
/// - either endpoint native: the path is direct between the wrapped token
///   and the other endpoint;
/// - both ERC-20 and `direct_pool_exists`: direct two-hop path;
/// - both ERC-20 without a direct pool: routed through `wrapped_native`.
///
/// `wrapped_native` is the only intermediate ever considered.
///
/// # Errors
///
/// Returns [`SwapError::InvalidToken`] if the endpoints are the same asset,
/// both native, or the wrapped token itself is an endpoint of a routed
/// path.
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::{ChainId, Decimals, Token, TokenAddress};
/// use hydra_swap::planner::select_path;
///
/// let eth = Token::native(ChainId::Mainnet, "ETH", "Ether");
/// let weth = Token::new(ChainId::Mainnet, TokenAddress::from_bytes([0xc0; 20]), Decimals::ETHER, "WETH", "Wrapped Ether");
/// let usdc = Token::new(ChainId::Mainnet, TokenAddress::from_bytes([0xa0; 20]), Decimals::new(6).expect("valid"), "USDC", "USD Coin");
///
/// let path = select_path(&eth, &usdc, &weth, true).expect("valid");
/// assert_eq!(path.first(), weth.address());
/// assert_eq!(path.last(), usdc.address());
/// ```
pub fn select_path(
    token_in: &Token,
    token_out: &Token,
    wrapped_native: &Token,
    direct_pool_exists: bool,
) -> Result<SwapPath> {
    if token_in == token_out {
        return Err(SwapError::InvalidToken("input and output token are the same"));
    }
    let hop_in = token_in.or_wrapped(wrapped_native).address();
    let hop_out = token_out.or_wrapped(wrapped_native).address();

    let path = if token_in.is_native() || token_out.is_native() || direct_pool_exists {
        SwapPath::direct(hop_in, hop_out)?
    } else {
        SwapPath::via(hop_in, wrapped_native.address(), hop_out)?
    };
    debug!(%path, direct_pool_exists, "selected swap path");
    Ok(path)
}

/// `amount_out - floor(amount_out * slippage)`, clamped at zero.
///
/// A zero floor for a non-zero quote is legal: the trader accepted
/// unlimited slippage.
///
/// # Errors
///
/// Returns [`SwapError::Overflow`] if the deduction overflows 256 bits.
pub fn minimum_output(amount_out: Amount, slippage: Slippage) -> Result<Amount> {
    slippage.minimum_output(amount_out)
}

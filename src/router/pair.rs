//! Deterministic pair addresses (CREATE2).

use alloy_primitives::{b256, keccak256, Address, B256};

use crate::domain::TokenAddress;
use crate::error::SwapError;

/// `keccak256` of the Uniswap V2 pair creation code.
pub const INIT_CODE_HASH: B256 =
    b256!("96e8ac4277198ff8b6f785478aa9a39f403cb768dd02cbee326c3e7da348845f");

/// Address the factory deploys the `(token_a, token_b)` pair to.
///
/// `keccak256(0xff ++ factory ++ keccak256(token0 ++ token1) ++ init_code_hash)[12..]`,
/// with the tokens sorted by address.  The pair may not be deployed yet;
/// an address with no code simply has no liquidity.
///
/// # Errors
///
/// Returns [`SwapError::InvalidToken`] if the tokens are equal or one is
/// the native sentinel.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use hydra_swap::domain::TokenAddress;
/// use hydra_swap::router::{pair_address, INIT_CODE_HASH};
///
/// let factory = address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");
/// let usdc = TokenAddress::new(address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"));
/// let weth = TokenAddress::new(address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"));
///
/// let pair = pair_address(factory, weth, usdc, INIT_CODE_HASH).expect("distinct tokens");
/// assert_eq!(pair, address!("B4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc"));
/// ```
pub fn pair_address(
    factory: Address,
    token_a: TokenAddress,
    token_b: TokenAddress,
    init_code_hash: B256,
) -> Result<Address, SwapError> {
    if token_a.is_native() || token_b.is_native() {
        return Err(SwapError::InvalidToken("pairs hold ERC-20 tokens only"));
    }
    if token_a == token_b {
        return Err(SwapError::InvalidToken("tokens have the same address"));
    }
    let (token0, token1) = if token_a < token_b {
        (token_a, token_b)
    } else {
        (token_b, token_a)
    };
    let mut packed = [0u8; 40];
    packed[..20].copy_from_slice(token0.as_slice());
    packed[20..].copy_from_slice(token1.as_slice());
    let salt = keccak256(packed);
    Ok(factory.create2(salt, init_code_hash))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    const FACTORY: Address = address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");

    fn usdc() -> TokenAddress {
        TokenAddress::new(address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48"))
    }

    fn weth() -> TokenAddress {
        TokenAddress::new(address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"))
    }

    #[test]
    fn mainnet_usdc_weth_pair() {
        let Ok(pair) = pair_address(FACTORY, usdc(), weth(), INIT_CODE_HASH) else {
            panic!("distinct tokens");
        };
        assert_eq!(pair, address!("B4e16d0168e52d35CaCD2c6185b44281Ec28C9Dc"));
    }

    #[test]
    fn argument_order_does_not_matter() {
        assert_eq!(
            pair_address(FACTORY, usdc(), weth(), INIT_CODE_HASH),
            pair_address(FACTORY, weth(), usdc(), INIT_CODE_HASH)
        );
    }

    #[test]
    fn rejects_native_and_duplicates() {
        assert!(pair_address(FACTORY, TokenAddress::NATIVE, weth(), INIT_CODE_HASH).is_err());
        assert!(pair_address(FACTORY, weth(), weth(), INIT_CODE_HASH).is_err());
    }
}

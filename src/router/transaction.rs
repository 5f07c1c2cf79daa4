//! Unsigned transactions and view-call codecs.

use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use serde::{Deserialize, Serialize};

use super::abi::{IUniswapV2Factory, IUniswapV2Pair, IERC20};
use crate::domain::{Amount, ReservePair, TokenAddress};
use crate::error::{Result, SwapError};

/// An unsigned transaction for the wallet to sign and submit.
///
/// Serializes to the `eth_sendTransaction` parameter shape (`to`, `data`,
/// `value` as hex quantities).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// Contract called.
    pub to: Address,
    /// ABI-encoded calldata.
    pub data: Bytes,
    /// Native currency attached, in wei.
    pub value: U256,
}

impl TransactionRequest {
    /// Creates a call without attached value.
    #[must_use]
    pub fn call(to: Address, data: impl Into<Bytes>) -> Self {
        Self {
            to,
            data: data.into(),
            value: U256::ZERO,
        }
    }

    /// Attaches native currency.
    #[must_use]
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    /// Returns the 4-byte function selector, if the calldata has one.
    #[must_use]
    pub fn selector(&self) -> Option<[u8; 4]> {
        self.data.get(..4).and_then(|s| s.try_into().ok())
    }
}

/// Builds `token.approve(spender, amount)`.
#[must_use]
pub fn approve(token: TokenAddress, spender: Address, amount: Amount) -> TransactionRequest {
    let call = IERC20::approveCall {
        spender,
        amount: amount.get(),
    };
    TransactionRequest::call(token.address(), call.abi_encode())
}

// -- view calls ---------------------------------------------------------------

/// Calldata for `pair.getReserves()`.
#[must_use]
pub fn encode_get_reserves() -> Bytes {
    IUniswapV2Pair::getReservesCall {}.abi_encode().into()
}

/// Decodes a `getReserves()` return value.
///
/// # Errors
///
/// Returns [`SwapError::NetworkError`] if the data is not a valid ABI
/// encoding (a pair that does not exist returns empty data).
pub fn decode_get_reserves(data: &[u8]) -> Result<ReservePair> {
    let ret = IUniswapV2Pair::getReservesCall::abi_decode_returns(data)
        .map_err(|e| SwapError::NetworkError(format!("malformed getReserves result: {e}")))?;
    Ok(ReservePair::new(
        Amount::from_u256(U256::from(ret.reserve0)),
        Amount::from_u256(U256::from(ret.reserve1)),
        ret.blockTimestampLast,
    ))
}

/// Calldata for `factory.getPair(token_a, token_b)`.
#[must_use]
pub fn encode_get_pair(token_a: TokenAddress, token_b: TokenAddress) -> Bytes {
    IUniswapV2Factory::getPairCall {
        tokenA: token_a.address(),
        tokenB: token_b.address(),
    }
    .abi_encode()
    .into()
}

/// Decodes a `getPair` return value.
///
/// # Errors
///
/// Returns [`SwapError::NetworkError`] on malformed data.
pub fn decode_get_pair(data: &[u8]) -> Result<Address> {
    IUniswapV2Factory::getPairCall::abi_decode_returns(data)
        .map_err(|e| SwapError::NetworkError(format!("malformed getPair result: {e}")))
}

/// Calldata for `token.allowance(owner, spender)`.
#[must_use]
pub fn encode_allowance(owner: Address, spender: Address) -> Bytes {
    IERC20::allowanceCall { owner, spender }.abi_encode().into()
}

/// Decodes an `allowance` return value.
///
/// # Errors
///
/// Returns [`SwapError::NetworkError`] on malformed data.
pub fn decode_allowance(data: &[u8]) -> Result<Amount> {
    IERC20::allowanceCall::abi_decode_returns(data)
        .map(Amount::from_u256)
        .map_err(|e| SwapError::NetworkError(format!("malformed allowance result: {e}")))
}

/// Calldata for `token.balanceOf(account)`.
#[must_use]
pub fn encode_balance_of(account: Address) -> Bytes {
    IERC20::balanceOfCall { account }.abi_encode().into()
}

/// Decodes a `balanceOf` return value.
///
/// # Errors
///
/// Returns [`SwapError::NetworkError`] on malformed data.
pub fn decode_balance_of(data: &[u8]) -> Result<Amount> {
    IERC20::balanceOfCall::abi_decode_returns(data)
        .map(Amount::from_u256)
        .map_err(|e| SwapError::NetworkError(format!("malformed balanceOf result: {e}")))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use alloy_sol_types::SolValue;

    fn addr(b: u8) -> Address {
        Address::new([b; 20])
    }

    #[test]
    fn approve_targets_token_contract() {
        let tx = approve(TokenAddress::new(addr(7)), addr(9), Amount::new(1_000));
        assert_eq!(tx.to, addr(7));
        assert_eq!(tx.value, U256::ZERO);
        // keccak256("approve(address,uint256)")[..4]
        assert_eq!(tx.selector(), Some([0x09, 0x5e, 0xa7, 0xb3]));
        let Ok(decoded) = IERC20::approveCall::abi_decode(&tx.data) else {
            panic!("round-trips");
        };
        assert_eq!(decoded.spender, addr(9));
        assert_eq!(decoded.amount, U256::from(1_000u64));
    }

    #[test]
    fn reserves_decode_from_abi_words() {
        let encoded = (U256::from(1_000_000u64), U256::from(2_000_000u64), 1_700_000_000u32).abi_encode();
        let Ok(r) = decode_get_reserves(&encoded) else {
            panic!("valid encoding");
        };
        assert_eq!(r.reserve0(), Amount::new(1_000_000));
        assert_eq!(r.reserve1(), Amount::new(2_000_000));
        assert_eq!(r.block_timestamp_last(), 1_700_000_000);
    }

    #[test]
    fn empty_return_data_is_an_error() {
        let Err(SwapError::NetworkError(_)) = decode_get_reserves(&[]) else {
            panic!("expected NetworkError");
        };
    }

    #[test]
    fn get_pair_selector() {
        let data = encode_get_pair(TokenAddress::new(addr(1)), TokenAddress::new(addr(2)));
        // keccak256("getPair(address,address)")[..4]
        assert_eq!(&data[..4], &[0xe6, 0xa4, 0x39, 0x05]);
        assert_eq!(data.len(), 4 + 64);
    }

    #[test]
    fn uint_returns_decode() {
        let word = U256::from(42u64).abi_encode();
        assert_eq!(decode_allowance(&word), Ok(Amount::new(42)));
        assert_eq!(decode_balance_of(&word), Ok(Amount::new(42)));
        let Ok(pair) = decode_get_pair(&addr(5).abi_encode()) else {
            panic!("valid encoding");
        };
        assert_eq!(pair, addr(5));
    }
}

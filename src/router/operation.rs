//! The three exact-input router operations.

use core::fmt;

use alloy_primitives::Address;
use alloy_sol_types::SolCall;

use super::abi::IUniswapV2Router02;
use super::TransactionRequest;
use crate::domain::{Amount, Deadline, SwapPath, Token};
use crate::error::SwapError;

/// Which router entry point executes a swap.
///
/// Chosen purely from which endpoint is the native currency; there is no
/// other valid combination.
///
/// | Input | Output | Operation |
/// |-------|--------|-----------|
/// | ERC-20 | ERC-20 | [`ExactTokensForTokens`](Self::ExactTokensForTokens) |
/// | native | ERC-20 | [`ExactEthForTokens`](Self::ExactEthForTokens) |
/// | ERC-20 | native | [`ExactTokensForEth`](Self::ExactTokensForEth) |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SwapOperation {
    /// `swapExactTokensForTokens`
    ExactTokensForTokens,
    /// `swapExactETHForTokens`; the input travels as transaction value.
    ExactEthForTokens,
    /// `swapExactTokensForETH`
    ExactTokensForEth,
}

impl SwapOperation {
    /// Selects the operation for a trade from `token_in` to `token_out`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] if both endpoints are native.
    pub fn select(token_in: &Token, token_out: &Token) -> Result<Self, SwapError> {
        match (token_in.is_native(), token_out.is_native()) {
            (false, false) => Ok(Self::ExactTokensForTokens),
            (true, false) => Ok(Self::ExactEthForTokens),
            (false, true) => Ok(Self::ExactTokensForEth),
            (true, true) => Err(SwapError::InvalidToken("cannot swap native currency for itself")),
        }
    }

    /// Returns `true` if the input is spent through an ERC-20 allowance.
    #[must_use]
    pub const fn spends_allowance(&self) -> bool {
        !matches!(self, Self::ExactEthForTokens)
    }

    /// Solidity function name.
    #[must_use]
    pub const fn function_name(&self) -> &'static str {
        match self {
            Self::ExactTokensForTokens => IUniswapV2Router02::swapExactTokensForTokensCall::SIGNATURE,
            Self::ExactEthForTokens => IUniswapV2Router02::swapExactETHForTokensCall::SIGNATURE,
            Self::ExactTokensForEth => IUniswapV2Router02::swapExactTokensForETHCall::SIGNATURE,
        }
    }

    /// Encodes the router call.
    ///
    /// For [`ExactEthForTokens`](Self::ExactEthForTokens) `amountIn` is not
    /// an argument; it is attached as the transaction value instead.
    #[must_use]
    pub fn encode(
        &self,
        router: Address,
        amount_in: Amount,
        amount_out_min: Amount,
        path: &SwapPath,
        recipient: Address,
        deadline: Deadline,
    ) -> TransactionRequest {
        let path = path.to_addresses();
        match self {
            Self::ExactTokensForTokens => {
                let call = IUniswapV2Router02::swapExactTokensForTokensCall {
                    amountIn: amount_in.get(),
                    amountOutMin: amount_out_min.get(),
                    path,
                    to: recipient,
                    deadline: deadline.to_u256(),
                };
                TransactionRequest::call(router, call.abi_encode())
            }
            Self::ExactEthForTokens => {
                let call = IUniswapV2Router02::swapExactETHForTokensCall {
                    amountOutMin: amount_out_min.get(),
                    path,
                    to: recipient,
                    deadline: deadline.to_u256(),
                };
                TransactionRequest::call(router, call.abi_encode()).with_value(amount_in.get())
            }
            Self::ExactTokensForEth => {
                let call = IUniswapV2Router02::swapExactTokensForETHCall {
                    amountIn: amount_in.get(),
                    amountOutMin: amount_out_min.get(),
                    path,
                    to: recipient,
                    deadline: deadline.to_u256(),
                };
                TransactionRequest::call(router, call.abi_encode())
            }
        }
    }
}

impl fmt::Display for SwapOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.function_name();
        f.write_str(name.split('(').next().unwrap_or(name))
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{ChainId, Decimals, TokenAddress};
    use alloy_primitives::U256;

    fn erc20(b: u8) -> Token {
        Token::new(ChainId::Mainnet, TokenAddress::from_bytes([b; 20]), Decimals::ETHER, "T", "T")
    }

    fn eth() -> Token {
        Token::native(ChainId::Mainnet, "ETH", "Ether")
    }

    fn path() -> SwapPath {
        let Ok(p) = SwapPath::direct(TokenAddress::from_bytes([1; 20]), TokenAddress::from_bytes([2; 20])) else {
            panic!("valid path");
        };
        p
    }

    #[test]
    fn selection_is_closed() {
        assert_eq!(SwapOperation::select(&erc20(1), &erc20(2)), Ok(SwapOperation::ExactTokensForTokens));
        assert_eq!(SwapOperation::select(&eth(), &erc20(2)), Ok(SwapOperation::ExactEthForTokens));
        assert_eq!(SwapOperation::select(&erc20(1), &eth()), Ok(SwapOperation::ExactTokensForEth));
        assert!(SwapOperation::select(&eth(), &eth()).is_err());
    }

    #[test]
    fn only_native_input_skips_allowance() {
        assert!(!SwapOperation::ExactEthForTokens.spends_allowance());
        assert!(SwapOperation::ExactTokensForEth.spends_allowance());
        assert!(SwapOperation::ExactTokensForTokens.spends_allowance());
    }

    #[test]
    fn native_input_travels_as_value() {
        let tx = SwapOperation::ExactEthForTokens.encode(
            Address::new([0xaa; 20]),
            Amount::new(5_000),
            Amount::new(1),
            &path(),
            Address::new([0xbb; 20]),
            Deadline::at(100),
        );
        assert_eq!(tx.value, U256::from(5_000u64));
        let Ok(call) = IUniswapV2Router02::swapExactETHForTokensCall::abi_decode(&tx.data) else {
            panic!("decodes");
        };
        assert_eq!(call.amountOutMin, U256::from(1u64));
        assert_eq!(call.path.len(), 2);
        assert_eq!(call.deadline, U256::from(100u64));
    }

    #[test]
    fn token_input_carries_amount_in_argument() {
        let tx = SwapOperation::ExactTokensForTokens.encode(
            Address::new([0xaa; 20]),
            Amount::new(1_000),
            Amount::new(1982),
            &path(),
            Address::new([0xbb; 20]),
            Deadline::at(100),
        );
        assert_eq!(tx.to, Address::new([0xaa; 20]));
        assert_eq!(tx.value, U256::ZERO);
        let Ok(call) = IUniswapV2Router02::swapExactTokensForTokensCall::abi_decode(&tx.data) else {
            panic!("decodes");
        };
        assert_eq!(call.amountIn, U256::from(1_000u64));
        assert_eq!(call.amountOutMin, U256::from(1982u64));
        assert_eq!(call.to, Address::new([0xbb; 20]));
    }

    #[test]
    fn display_uses_function_name() {
        assert_eq!(SwapOperation::ExactTokensForEth.to_string(), "swapExactTokensForETH");
    }
}

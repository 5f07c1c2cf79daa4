//! Per-network contract addresses and endpoint.

use alloy_primitives::{address, Address, B256};
use serde::{Deserialize, Serialize};

use crate::domain::{ChainId, Decimals, Token, TokenAddress};
use crate::error::SwapError;
use crate::router::{pair_address, INIT_CODE_HASH};

const UNISWAP_V2_ROUTER: Address = address!("7a250d5630B4cF539739dF2C5dAcb4c659F2488D");
const UNISWAP_V2_FACTORY: Address = address!("5C69bEe701ef814a2B6a3EDD4B1652CB9cc5aA6f");
const MAINNET_WETH: Address = address!("C02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2");
const SEPOLIA_WETH: Address = address!("fFf9976782d46CC05630D1f6eBAb18b2324d6B14");

/// Static deployment data for one network.
///
/// # Validation
///
/// - Router, factory and wrapped-native addresses are non-zero.
/// - Router and factory differ.
/// - The RPC URL is `http://` or `https://`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Network.
    pub chain: ChainId,
    /// Router contract.
    pub router: Address,
    /// Pair factory contract.
    pub factory: Address,
    /// Wrapped native currency (WETH).
    pub wrapped_native: Address,
    /// `keccak256` of the pair creation code.
    #[serde(default = "default_init_code_hash")]
    pub init_code_hash: B256,
    /// JSON-RPC endpoint.
    pub rpc_url: String,
}

const fn default_init_code_hash() -> B256 {
    INIT_CODE_HASH
}

impl ChainConfig {
    /// Uniswap V2 on Ethereum mainnet.
    #[must_use]
    pub fn mainnet() -> Self {
        Self {
            chain: ChainId::Mainnet,
            router: UNISWAP_V2_ROUTER,
            factory: UNISWAP_V2_FACTORY,
            wrapped_native: MAINNET_WETH,
            init_code_hash: INIT_CODE_HASH,
            rpc_url: "https://eth.llamarpc.com/".to_owned(),
        }
    }

    /// Uniswap V2 on Sepolia.
    #[must_use]
    pub fn sepolia() -> Self {
        Self {
            chain: ChainId::Sepolia,
            router: UNISWAP_V2_ROUTER,
            factory: UNISWAP_V2_FACTORY,
            wrapped_native: SEPOLIA_WETH,
            init_code_hash: INIT_CODE_HASH,
            rpc_url: "https://ethereum-sepolia-rpc.publicnode.com/".to_owned(),
        }
    }

    /// Built-in preset for `chain`.
    #[must_use]
    pub fn preset(chain: ChainId) -> Self {
        match chain {
            ChainId::Mainnet => Self::mainnet(),
            ChainId::Sepolia => Self::sepolia(),
        }
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] naming the first
    /// violated invariant.
    pub fn validate(&self) -> Result<(), SwapError> {
        let chain = self.chain;
        for (name, addr) in [
            ("router", self.router),
            ("factory", self.factory),
            ("wrapped_native", self.wrapped_native),
        ] {
            if addr == Address::ZERO {
                return Err(SwapError::InvalidConfiguration(format!(
                    "{chain}: {name} address must be non-zero"
                )));
            }
        }
        if self.router == self.factory {
            return Err(SwapError::InvalidConfiguration(format!(
                "{chain}: router and factory must differ"
            )));
        }
        if !(self.rpc_url.starts_with("http://") || self.rpc_url.starts_with("https://")) {
            return Err(SwapError::InvalidConfiguration(format!(
                "{chain}: rpc_url must be an http(s) URL"
            )));
        }
        Ok(())
    }

    /// The wrapped native token as a [`Token`].
    #[must_use]
    pub fn wrapped_native_token(&self) -> Token {
        Token::new(
            self.chain,
            TokenAddress::new(self.wrapped_native),
            Decimals::ETHER,
            "WETH",
            "Wrapped Ether",
        )
    }

    /// CREATE2 address of the pair for two ERC-20 tokens.
    ///
    /// # Errors
    ///
    /// See [`pair_address`].
    pub fn pair_address(&self, token_a: TokenAddress, token_b: TokenAddress) -> Result<Address, SwapError> {
        pair_address(self.factory, token_a, token_b, self.init_code_hash)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for chain in ChainId::ALL {
            let cfg = ChainConfig::preset(chain);
            assert_eq!(cfg.chain, chain);
            assert!(cfg.validate().is_ok(), "{chain} preset invalid");
        }
    }

    #[test]
    fn wrapped_native_differs_per_chain() {
        assert_ne!(ChainConfig::mainnet().wrapped_native, ChainConfig::sepolia().wrapped_native);
        assert_eq!(ChainConfig::mainnet().router, ChainConfig::sepolia().router);
    }

    #[test]
    fn zero_router_rejected() {
        let mut cfg = ChainConfig::mainnet();
        cfg.router = Address::ZERO;
        let Err(SwapError::InvalidConfiguration(msg)) = cfg.validate() else {
            panic!("expected InvalidConfiguration");
        };
        assert!(msg.contains("router"));
    }

    #[test]
    fn non_http_url_rejected() {
        let mut cfg = ChainConfig::sepolia();
        cfg.rpc_url = "ws://localhost:8546".into();
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn wrapped_native_token_is_erc20() {
        let weth = ChainConfig::mainnet().wrapped_native_token();
        assert!(!weth.is_native());
        assert_eq!(weth.decimals(), Decimals::ETHER);
        assert_eq!(weth.chain_id(), ChainId::Mainnet);
    }
}

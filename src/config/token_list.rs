//! Supported tokens per network.

use std::collections::HashSet;

use alloy_primitives::address;
use serde::{Deserialize, Serialize};

use crate::domain::{ChainId, Decimals, Token, TokenAddress};
use crate::error::SwapError;

const USDC_LOGO: &str = "https://cryptologos.cc/logos/usd-coin-usdc-logo.svg?v=032";
const ETH_LOGO: &str =
    "https://raw.githubusercontent.com/trustwallet/assets/master/blockchains/ethereum/info/logo.png";

/// The tokens offered for selection, across all networks.
///
/// Order matters: the first two tokens of a network are the form's default
/// selection after a network switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenList(Vec<Token>);

impl Default for TokenList {
    fn default() -> Self {
        Self::builtin()
    }
}

impl TokenList {
    /// Creates a list from tokens in display order.
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self(tokens)
    }

    /// USDC and ETH on mainnet and Sepolia.
    #[must_use]
    pub fn builtin() -> Self {
        let usdc = Decimals::USD_STABLE;
        Self(vec![
            Token::new(
                ChainId::Mainnet,
                TokenAddress::new(address!("A0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48")),
                usdc,
                "USDC",
                "USDC",
            )
            .with_logo(USDC_LOGO),
            Token::native(ChainId::Mainnet, "ETH", "ETH").with_logo(ETH_LOGO),
            Token::new(
                ChainId::Sepolia,
                TokenAddress::new(address!("94a9D9AC8a22534E3FaCa9F4e7F2E2cf85d5E4C8")),
                usdc,
                "USDC",
                "USDC",
            )
            .with_logo(USDC_LOGO),
            Token::native(ChainId::Sepolia, "ETH", "ETH").with_logo(ETH_LOGO),
        ])
    }

    /// All tokens, in display order.
    #[must_use]
    pub fn tokens(&self) -> &[Token] {
        &self.0
    }

    /// Tokens on `chain`, in display order.
    pub fn for_chain(&self, chain: ChainId) -> impl Iterator<Item = &Token> + '_ {
        self.0.iter().filter(move |t| t.chain_id() == chain)
    }

    /// Looks up a token by address on `chain`.
    #[must_use]
    pub fn find(&self, chain: ChainId, address: TokenAddress) -> Option<&Token> {
        self.for_chain(chain).find(|t| t.address() == address)
    }

    /// The first two tokens listed for `chain`, the default selection.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if fewer than two are
    /// listed.
    pub fn default_pair(&self, chain: ChainId) -> Result<(Token, Token), SwapError> {
        let mut it = self.for_chain(chain);
        match (it.next(), it.next()) {
            (Some(a), Some(b)) => Ok((a.clone(), b.clone())),
            _ => Err(SwapError::InvalidConfiguration(format!(
                "{chain}: token list needs at least two tokens"
            ))),
        }
    }

    /// Validates the list.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if a token appears twice
    /// or a symbol is empty.
    pub fn validate(&self) -> Result<(), SwapError> {
        let mut seen = HashSet::with_capacity(self.0.len());
        for token in &self.0 {
            if token.symbol().trim().is_empty() {
                return Err(SwapError::InvalidConfiguration(format!(
                    "token {} on {} has an empty symbol",
                    token.address(),
                    token.chain_id()
                )));
            }
            if !seen.insert(token) {
                return Err(SwapError::InvalidConfiguration(format!(
                    "token {} listed twice on {}",
                    token.address(),
                    token.chain_id()
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn builtin() -> TokenList {
        TokenList::builtin()
    }

    #[test]
    fn builtin_has_two_tokens_per_chain() {
        let list = builtin();
        assert!(list.validate().is_ok());
        for chain in ChainId::ALL {
            assert_eq!(list.for_chain(chain).count(), 2);
        }
    }

    #[test]
    fn default_pair_is_usdc_then_eth() {
        let Ok((a, b)) = builtin().default_pair(ChainId::Sepolia) else {
            panic!("two tokens listed");
        };
        assert_eq!(a.symbol(), "USDC");
        assert_eq!(a.decimals().get(), 6);
        assert!(b.is_native());
    }

    #[test]
    fn find_is_scoped_to_chain() {
        let list = builtin();
        let Ok(usdc) = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".parse::<TokenAddress>() else {
            panic!("valid address");
        };
        assert!(list.find(ChainId::Mainnet, usdc).is_some());
        assert!(list.find(ChainId::Sepolia, usdc).is_none());
    }

    #[test]
    fn duplicates_rejected() {
        let mut tokens = builtin().tokens().to_vec();
        tokens.push(Token::native(ChainId::Mainnet, "ETH2", "Other"));
        assert!(TokenList::new(tokens).validate().is_err());
    }

    #[test]
    fn short_list_has_no_default_pair() {
        let list = TokenList::new(vec![Token::native(ChainId::Mainnet, "ETH", "ETH")]);
        assert!(list.default_pair(ChainId::Mainnet).is_err());
    }
}

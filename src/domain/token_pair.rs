//! Ordered pair of distinct tokens.

use super::Token;
use crate::error::SwapError;

/// The two tokens of a pair contract, in the contract's own order.
///
/// `token0` is the token whose address sorts first, exactly as the factory
/// orders them when it deploys the pair.  Reserves read from the pair are
/// reported in this order.
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::{ChainId, Decimals, Token, TokenAddress, TokenPair};
///
/// let a = Token::new(ChainId::Mainnet, TokenAddress::from_bytes([1u8; 20]), Decimals::ETHER, "A", "A");
/// let b = Token::new(ChainId::Mainnet, TokenAddress::from_bytes([2u8; 20]), Decimals::ETHER, "B", "B");
///
/// let pair = TokenPair::new(b.clone(), a.clone()).expect("distinct tokens");
/// assert_eq!(pair.token0(), &a);
/// assert_eq!(pair.token1(), &b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TokenPair {
    token0: Token,
    token1: Token,
}

impl TokenPair {
    /// Creates a pair sorted the way the pair contract sorts it.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] if the tokens share an address or
    /// live on different chains.
    pub fn new(token_a: Token, token_b: Token) -> Result<Self, SwapError> {
        if token_a.sorts_before(&token_b)? {
            Ok(Self {
                token0: token_a,
                token1: token_b,
            })
        } else {
            Ok(Self {
                token0: token_b,
                token1: token_a,
            })
        }
    }

    /// Returns the token with the lower address.
    #[must_use]
    pub const fn token0(&self) -> &Token {
        &self.token0
    }

    /// Returns the token with the higher address.
    #[must_use]
    pub const fn token1(&self) -> &Token {
        &self.token1
    }

    /// Returns `true` if the given token is part of this pair.
    #[must_use]
    pub fn contains(&self, token: &Token) -> bool {
        self.token0 == *token || self.token1 == *token
    }

    /// Returns `true` if `token` is `token0`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] if `token` is not in the pair.
    pub fn is_token0(&self, token: &Token) -> Result<bool, SwapError> {
        if *token == self.token0 {
            Ok(true)
        } else if *token == self.token1 {
            Ok(false)
        } else {
            Err(SwapError::InvalidToken("token is not part of this pair"))
        }
    }

    /// Returns the counterpart of `token` in this pair.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] if `token` is not in the pair.
    pub fn other(&self, token: &Token) -> Result<&Token, SwapError> {
        if self.is_token0(token)? {
            Ok(&self.token1)
        } else {
            Ok(&self.token0)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{ChainId, Decimals, TokenAddress};

    fn tok(addr_byte: u8) -> Token {
        Token::new(
            ChainId::Mainnet,
            TokenAddress::from_bytes([addr_byte; 20]),
            Decimals::ETHER,
            "T",
            "Test",
        )
    }

    #[test]
    fn auto_sorts_reversed_input() {
        let Ok(pair) = TokenPair::new(tok(2), tok(1)) else {
            panic!("expected Ok");
        };
        assert_eq!(pair.token0(), &tok(1));
        assert_eq!(pair.token1(), &tok(2));
    }

    #[test]
    fn rejects_same_address() {
        let Err(e) = TokenPair::new(tok(1), tok(1)) else {
            panic!("expected Err");
        };
        assert_eq!(e, SwapError::InvalidToken("tokens have the same address"));
    }

    #[test]
    fn rejects_cross_chain() {
        let other = Token::new(
            ChainId::Sepolia,
            TokenAddress::from_bytes([2; 20]),
            Decimals::ETHER,
            "T",
            "Test",
        );
        assert!(TokenPair::new(tok(1), other).is_err());
    }

    #[test]
    fn membership_and_counterpart() {
        let Ok(pair) = TokenPair::new(tok(1), tok(2)) else {
            panic!("expected Ok");
        };
        assert!(pair.contains(&tok(1)));
        assert!(!pair.contains(&tok(3)));
        assert_eq!(pair.is_token0(&tok(1)), Ok(true));
        assert_eq!(pair.is_token0(&tok(2)), Ok(false));
        assert_eq!(pair.other(&tok(1)), Ok(&tok(2)));
        assert!(pair.other(&tok(3)).is_err());
    }

    #[test]
    fn order_of_arguments_is_irrelevant() {
        let (Ok(p1), Ok(p2)) = (TokenPair::new(tok(1), tok(2)), TokenPair::new(tok(2), tok(1)))
        else {
            panic!("expected Ok");
        };
        assert_eq!(p1, p2);
    }
}

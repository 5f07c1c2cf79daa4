//! Trade request and its computed quote.

use super::{Amount, BasisPoints, SwapPath, Token};
use crate::error::SwapError;

/// An exact-input trade the user asked to price.
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::{Amount, ChainId, Decimals, Token, TokenAddress, TradeRequest};
///
/// let eth = Token::native(ChainId::Mainnet, "ETH", "Ether");
/// let usdc = Token::new(ChainId::Mainnet, TokenAddress::from_bytes([0xa0; 20]), Decimals::new(6).expect("valid"), "USDC", "USD Coin");
///
/// let request = TradeRequest::new(eth.clone(), usdc, Amount::new(1_000)).expect("valid");
/// assert_eq!(request.token_in(), &eth);
/// assert!(TradeRequest::new(eth.clone(), eth, Amount::new(1)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeRequest {
    token_in: Token,
    token_out: Token,
    amount_in: Amount,
}

impl TradeRequest {
    /// Creates a validated request.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidAmount`] if `amount_in` is zero.
    /// - [`SwapError::InvalidToken`] if the tokens are the same asset or on
    ///   different chains.
    pub fn new(token_in: Token, token_out: Token, amount_in: Amount) -> Result<Self, SwapError> {
        if amount_in.is_zero() {
            return Err(SwapError::InvalidAmount("amount must be positive"));
        }
        if token_in.chain_id() != token_out.chain_id() {
            return Err(SwapError::InvalidToken("tokens are on different chains"));
        }
        if token_in == token_out {
            return Err(SwapError::InvalidToken("input and output token are the same"));
        }
        Ok(Self {
            token_in,
            token_out,
            amount_in,
        })
    }

    /// The token sold.
    #[must_use]
    pub const fn token_in(&self) -> &Token {
        &self.token_in
    }

    /// The token bought.
    #[must_use]
    pub const fn token_out(&self) -> &Token {
        &self.token_out
    }

    /// Raw input amount.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }
}

/// A priced trade: what goes in, what comes out, and through which pools.
///
/// `price_impact` is the shortfall of `amount_out` against the fee-less
/// spot value of `amount_in`, rounded up to whole basis points.  It
/// includes the LP fee, so it is never below the fee of a single hop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeQuote {
    request: TradeRequest,
    amount_out: Amount,
    path: SwapPath,
    price_impact: BasisPoints,
}

impl TradeQuote {
    /// Assembles a quote.
    pub const fn new(
        request: TradeRequest,
        amount_out: Amount,
        path: SwapPath,
        price_impact: BasisPoints,
    ) -> Self {
        Self {
            request,
            amount_out,
            path,
            price_impact,
        }
    }

    /// The request this quote answers.
    #[must_use]
    pub const fn request(&self) -> &TradeRequest {
        &self.request
    }

    /// The token sold.
    #[must_use]
    pub const fn token_in(&self) -> &Token {
        self.request.token_in()
    }

    /// The token bought.
    #[must_use]
    pub const fn token_out(&self) -> &Token {
        self.request.token_out()
    }

    /// Raw input amount.
    pub const fn amount_in(&self) -> Amount {
        self.request.amount_in()
    }

    /// Raw output amount, floor-rounded exactly as the router computes it.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }

    /// Router path.
    #[must_use]
    pub const fn path(&self) -> &SwapPath {
        &self.path
    }

    /// Price impact including fees.
    #[must_use]
    pub const fn price_impact(&self) -> BasisPoints {
        self.price_impact
    }

    /// Output formatted with the output token's decimals.
    #[must_use]
    pub fn formatted_amount_out(&self) -> String {
        self.token_out().format_amount(self.amount_out)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{ChainId, Decimals, TokenAddress};

    fn erc20(b: u8, chain: ChainId) -> Token {
        Token::new(chain, TokenAddress::from_bytes([b; 20]), Decimals::ETHER, "T", "T")
    }

    #[test]
    fn request_rejects_zero_amount() {
        let Err(e) = TradeRequest::new(erc20(1, ChainId::Mainnet), erc20(2, ChainId::Mainnet), Amount::ZERO)
        else {
            panic!("expected Err");
        };
        assert!(e.is_quote_unavailable());
    }

    #[test]
    fn request_rejects_same_token_and_cross_chain() {
        assert!(TradeRequest::new(erc20(1, ChainId::Mainnet), erc20(1, ChainId::Mainnet), Amount::new(1)).is_err());
        assert!(TradeRequest::new(erc20(1, ChainId::Mainnet), erc20(2, ChainId::Sepolia), Amount::new(1)).is_err());
        let eth = Token::native(ChainId::Mainnet, "ETH", "Ether");
        assert!(TradeRequest::new(eth.clone(), eth, Amount::new(1)).is_err());
    }

    #[test]
    fn quote_accessors() {
        let Ok(req) = TradeRequest::new(erc20(1, ChainId::Mainnet), erc20(2, ChainId::Mainnet), Amount::new(1_000)) else {
            panic!("valid request");
        };
        let Ok(path) = SwapPath::direct(TokenAddress::from_bytes([1; 20]), TokenAddress::from_bytes([2; 20])) else {
            panic!("valid path");
        };
        let q = TradeQuote::new(req, Amount::new(1991), path, BasisPoints::new(41));
        assert_eq!(q.amount_in(), Amount::new(1_000));
        assert_eq!(q.amount_out(), Amount::new(1991));
        assert_eq!(q.price_impact().get(), 41);
        assert!(q.path().is_direct());
        assert_eq!(q.formatted_amount_out(), "0.000000000000001991");
    }
}

//! Stateless quote engine over a reserve snapshot.

use tracing::debug;

use super::constant_product::{get_amounts_out, price_impact};
use crate::domain::{Amount, FeeTier, OrientedReserves, Rounding, SwapPath, TradeQuote, TradeRequest};
use crate::error::{Result, SwapError};

/// Prices exact-input trades against caller-supplied reserves.
///
/// The engine holds no pool state: every call is a pure function of its
/// arguments, so identical inputs always yield identical quotes.  Reserves
/// are passed per leg of the path, already oriented in trade direction.
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::{Amount, ChainId, Decimals, OrientedReserves, SwapPath, Token, TokenAddress, TradeRequest};
/// use hydra_swap::quote::QuoteEngine;
///
/// let a = Token::new(ChainId::Mainnet, TokenAddress::from_bytes([1u8; 20]), Decimals::ETHER, "A", "A");
/// let b = Token::new(ChainId::Mainnet, TokenAddress::from_bytes([2u8; 20]), Decimals::ETHER, "B", "B");
/// let path = SwapPath::direct(a.address(), b.address()).expect("valid path");
/// let request = TradeRequest::new(a, b, Amount::new(1_000)).expect("valid request");
///
/// let reserves = [OrientedReserves::new(Amount::new(1_000_000), Amount::new(2_000_000))];
/// let quote = QuoteEngine::default().quote(request, path, &reserves).expect("liquid pool");
/// assert_eq!(quote.amount_out(), Amount::new(1991));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QuoteEngine {
    fee: FeeTier,
}

impl QuoteEngine {
    /// Creates an engine charging `fee` on every leg.
    #[must_use]
    pub const fn new(fee: FeeTier) -> Self {
        Self { fee }
    }

    /// Returns the per-leg fee.
    #[must_use]
    pub const fn fee(&self) -> FeeTier {
        self.fee
    }

    /// Quotes `request` along `path`.
    ///
    /// `reserves` must hold one entry per leg of `path`.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidToken`] if the number of reserve snapshots does
    ///   not match the path.
    /// - Any pricing error of
    ///   [`get_amount_out`](super::get_amount_out); callers should route the
    ///   result through [`QuoteOutcome::from_result`].
    pub fn quote(
        &self,
        request: TradeRequest,
        path: SwapPath,
        reserves: &[OrientedReserves],
    ) -> Result<TradeQuote> {
        if reserves.len() + 1 != path.len() {
            return Err(SwapError::InvalidToken("one reserve snapshot per path leg is required"));
        }
        let amounts = get_amounts_out(request.amount_in(), reserves, self.fee)?;
        let amount_out = amounts.last().copied().unwrap_or(Amount::ZERO);
        let impact = price_impact(request.amount_in(), amount_out, reserves);
        let lp_fee = self
            .fee
            .basis_points()
            .apply(request.amount_in(), Rounding::Up)
            .unwrap_or(Amount::MAX);

        debug!(
            token_in = request.token_in().symbol(),
            token_out = request.token_out().symbol(),
            amount_in = %request.amount_in(),
            %amount_out,
            price_impact = %impact,
            %lp_fee,
            legs = reserves.len(),
            "computed quote"
        );
        Ok(TradeQuote::new(request, amount_out, path, impact))
    }
}

/// A quote, or the reason none is available.
///
/// Pricing failures ([`SwapError::is_quote_unavailable`]) are not errors for
/// the surrounding flow: the output field shows "no quote" and input stays
/// enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuoteOutcome {
    /// A quote was computed.
    Ready(TradeQuote),
    /// No quote is available for this input.
    Unavailable(SwapError),
}

impl QuoteOutcome {
    /// Splits a quote result into an outcome, passing through errors that
    /// are not pricing failures.
    ///
    /// # Errors
    ///
    /// Returns the original error when it is not a pricing failure.
    pub fn from_result(result: Result<TradeQuote>) -> Result<Self> {
        match result {
            Ok(quote) => Ok(Self::Ready(quote)),
            Err(e) if e.is_quote_unavailable() => Ok(Self::Unavailable(e)),
            Err(e) => Err(e),
        }
    }

    /// Returns `true` if a quote is available.
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Returns the quote, if any.
    #[must_use]
    pub const fn quote(&self) -> Option<&TradeQuote> {
        match self {
            Self::Ready(q) => Some(q),
            Self::Unavailable(_) => None,
        }
    }

    /// Returns the reason no quote is available, if any.
    #[must_use]
    pub const fn reason(&self) -> Option<&SwapError> {
        match self {
            Self::Ready(_) => None,
            Self::Unavailable(e) => Some(e),
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{BasisPoints, ChainId, Decimals, Token, TokenAddress};

    fn tok(b: u8) -> Token {
        Token::new(ChainId::Mainnet, TokenAddress::from_bytes([b; 20]), Decimals::ETHER, "T", "T")
    }

    fn request(amount: u128) -> TradeRequest {
        let Ok(r) = TradeRequest::new(tok(1), tok(2), Amount::new(amount)) else {
            panic!("valid request");
        };
        r
    }

    fn direct() -> SwapPath {
        let Ok(p) = SwapPath::direct(tok(1).address(), tok(2).address()) else {
            panic!("valid path");
        };
        p
    }

    #[test]
    fn direct_quote_matches_router() {
        let reserves = [OrientedReserves::new(Amount::new(1_000_000), Amount::new(2_000_000))];
        let Ok(q) = QuoteEngine::default().quote(request(1_000), direct(), &reserves) else {
            panic!("expected quote");
        };
        assert_eq!(q.amount_out(), Amount::new(1991));
        assert_eq!(q.price_impact(), BasisPoints::new(45));
    }

    #[test]
    fn routed_quote_uses_both_legs() {
        let Ok(path) = SwapPath::via(tok(1).address(), tok(3).address(), tok(2).address()) else {
            panic!("valid path");
        };
        let reserves = [
            OrientedReserves::new(Amount::new(1_000_000), Amount::new(2_000_000)),
            OrientedReserves::new(Amount::new(2_000_000), Amount::new(2_000_000)),
        ];
        let Ok(q) = QuoteEngine::default().quote(request(1_000), path, &reserves) else {
            panic!("expected quote");
        };
        assert!(q.amount_out() < Amount::new(1991));
        assert!(q.price_impact() > BasisPoints::new(45));
    }

    #[test]
    fn leg_count_mismatch_is_rejected() {
        let reserves = [
            OrientedReserves::new(Amount::new(1), Amount::new(1)),
            OrientedReserves::new(Amount::new(1), Amount::new(1)),
        ];
        let Err(SwapError::InvalidToken(_)) = QuoteEngine::default().quote(request(1), direct(), &reserves)
        else {
            panic!("expected InvalidToken");
        };
    }

    #[test]
    fn empty_pool_is_unavailable_not_fatal() {
        let reserves = [OrientedReserves::default()];
        let result = QuoteEngine::default().quote(request(1_000), direct(), &reserves);
        let Ok(outcome) = QuoteOutcome::from_result(result) else {
            panic!("pricing errors are recovered");
        };
        assert!(!outcome.is_ready());
        assert_eq!(outcome.reason(), Some(&SwapError::NoLiquidity));
    }

    #[test]
    fn non_pricing_errors_pass_through() {
        let result = Err(SwapError::NetworkError("timeout".into()));
        assert!(QuoteOutcome::from_result(result).is_err());
    }

    #[test]
    fn quoting_is_idempotent() {
        let reserves = [OrientedReserves::new(Amount::new(123_456_789), Amount::new(987_654_321))];
        let engine = QuoteEngine::new(FeeTier::UNISWAP_V2);
        let first = engine.quote(request(55_555), direct(), &reserves);
        let second = engine.quote(request(55_555), direct(), &reserves);
        assert_eq!(first, second);
    }

    #[test]
    fn oversized_spot_value_does_not_fail_routed_quote() {
        use alloy_primitives::U256;
        let pow = |n: usize| Amount::from_u256(U256::from(1u8) << n);
        let Ok(path) = SwapPath::via(tok(1).address(), tok(3).address(), tok(2).address()) else {
            panic!("valid path");
        };
        let Ok(request) = TradeRequest::new(tok(1), tok(2), pow(127)) else {
            panic!("valid request");
        };
        let reserves = [
            OrientedReserves::new(Amount::new(1), pow(111)),
            OrientedReserves::new(pow(111), pow(111)),
        ];
        let Ok(amounts) = get_amounts_out(pow(127), &reserves, FeeTier::UNISWAP_V2) else {
            panic!("path is executable");
        };
        let Ok(q) = QuoteEngine::default().quote(request, path, &reserves) else {
            panic!("expected quote");
        };
        assert_eq!(Some(&q.amount_out()), amounts.last());
        assert_eq!(q.price_impact(), BasisPoints::MAX_PERCENT);
    }
}

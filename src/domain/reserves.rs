//! Pool reserves as reported by a pair contract.

use super::{Amount, Token, TokenAddress, TokenPair};
use crate::error::SwapError;

/// The `getReserves()` result of a constant-product pair.
///
/// Reserves are raw smallest-unit balances in the pair's own token order
/// (`token0`, `token1`).  Before pricing they must be re-ordered into
/// `(reserve_in, reserve_out)` with [`oriented`](Self::oriented).
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::{Amount, ChainId, Decimals, ReservePair, Token, TokenAddress, TokenPair};
///
/// let a = Token::new(ChainId::Mainnet, TokenAddress::from_bytes([1u8; 20]), Decimals::ETHER, "A", "A");
/// let b = Token::new(ChainId::Mainnet, TokenAddress::from_bytes([2u8; 20]), Decimals::ETHER, "B", "B");
/// let pair = TokenPair::new(a.clone(), b.clone()).expect("distinct");
///
/// let reserves = ReservePair::new(Amount::new(1_000), Amount::new(2_000), 0);
/// let selling_b = reserves.oriented(&b, &pair).expect("b is in the pair");
/// assert_eq!(selling_b.reserve_in(), Amount::new(2_000));
/// assert_eq!(selling_b.reserve_out(), Amount::new(1_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ReservePair {
    reserve0: Amount,
    reserve1: Amount,
    block_timestamp_last: u32,
}

impl ReservePair {
    /// Creates a reserve snapshot in pair order.
    pub const fn new(reserve0: Amount, reserve1: Amount, block_timestamp_last: u32) -> Self {
        Self {
            reserve0,
            reserve1,
            block_timestamp_last,
        }
    }

    /// Reserve of `token0`.
    pub const fn reserve0(&self) -> Amount {
        self.reserve0
    }

    /// Reserve of `token1`.
    pub const fn reserve1(&self) -> Amount {
        self.reserve1
    }

    /// Block timestamp (mod 2^32) of the last reserve update.
    #[must_use]
    pub const fn block_timestamp_last(&self) -> u32 {
        self.block_timestamp_last
    }

    /// Returns `true` if both reserves are non-zero.
    #[must_use]
    pub fn has_liquidity(&self) -> bool {
        !self.reserve0.is_zero() && !self.reserve1.is_zero()
    }

    /// Re-orders the reserves for a trade selling `token_in`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] if `token_in` is not in `pair`.
    pub fn oriented(&self, token_in: &Token, pair: &TokenPair) -> Result<OrientedReserves, SwapError> {
        if pair.is_token0(token_in)? {
            Ok(OrientedReserves::new(self.reserve0, self.reserve1))
        } else {
            Ok(OrientedReserves::new(self.reserve1, self.reserve0))
        }
    }

    /// Re-orders the reserves for one leg `from -> to` of a swap path.
    ///
    /// The pair's `token0` is the lower of the two addresses.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] if `from == to`.
    pub fn oriented_leg(&self, from: TokenAddress, to: TokenAddress) -> Result<OrientedReserves, SwapError> {
        match from.cmp(&to) {
            core::cmp::Ordering::Less => Ok(OrientedReserves::new(self.reserve0, self.reserve1)),
            core::cmp::Ordering::Greater => Ok(OrientedReserves::new(self.reserve1, self.reserve0)),
            core::cmp::Ordering::Equal => Err(SwapError::InvalidToken("leg starts and ends on the same token")),
        }
    }
}

/// Reserves ordered by trade direction: `(reserve_in, reserve_out)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OrientedReserves {
    reserve_in: Amount,
    reserve_out: Amount,
}

impl OrientedReserves {
    /// Creates oriented reserves.
    pub const fn new(reserve_in: Amount, reserve_out: Amount) -> Self {
        Self {
            reserve_in,
            reserve_out,
        }
    }

    /// Reserve of the token being sold.
    pub const fn reserve_in(&self) -> Amount {
        self.reserve_in
    }

    /// Reserve of the token being bought.
    pub const fn reserve_out(&self) -> Amount {
        self.reserve_out
    }

    /// Returns `true` if both reserves are non-zero.
    #[must_use]
    pub fn has_liquidity(&self) -> bool {
        !self.reserve_in.is_zero() && !self.reserve_out.is_zero()
    }
}

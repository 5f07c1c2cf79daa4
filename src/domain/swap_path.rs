//! Router hop sequence.

use core::fmt;

use alloy_primitives::Address;

use super::TokenAddress;
use crate::error::SwapError;

/// Ordered token addresses the router swaps through.
///
/// A path is either direct (`[in, out]`) or routed through exactly one
/// intermediate (`[in, mid, out]`).  Every hop is an ERC-20 contract: the
/// native sentinel never appears, it is replaced by the wrapped-native
/// address before the path is built.
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::{SwapPath, TokenAddress};
///
/// let a = TokenAddress::from_bytes([1u8; 20]);
/// let b = TokenAddress::from_bytes([2u8; 20]);
/// let path = SwapPath::direct(a, b).expect("distinct hops");
/// assert!(path.is_direct());
/// assert_eq!(path.first(), a);
/// assert_eq!(path.last(), b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SwapPath(Vec<TokenAddress>);

impl SwapPath {
    /// Creates a path from 2 or 3 hops.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] if the length is not 2 or 3, a
    /// hop is the native sentinel, or a token appears twice.
    pub fn new(hops: Vec<TokenAddress>) -> Result<Self, SwapError> {
        if !(2..=3).contains(&hops.len()) {
            return Err(SwapError::InvalidToken("path must have 2 or 3 hops"));
        }
        if hops.iter().any(TokenAddress::is_native) {
            return Err(SwapError::InvalidToken("path hops must be ERC-20 contracts"));
        }
        for (i, hop) in hops.iter().enumerate() {
            if hops[i + 1..].contains(hop) {
                return Err(SwapError::InvalidToken("path visits a token twice"));
            }
        }
        Ok(Self(hops))
    }

    /// Creates a direct two-hop path.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn direct(token_in: TokenAddress, token_out: TokenAddress) -> Result<Self, SwapError> {
        Self::new(vec![token_in, token_out])
    }

    /// Creates a three-hop path through `intermediate`.
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn via(
        token_in: TokenAddress,
        intermediate: TokenAddress,
        token_out: TokenAddress,
    ) -> Result<Self, SwapError> {
        Self::new(vec![token_in, intermediate, token_out])
    }

    /// Returns the hops in order.
    #[must_use]
    pub fn hops(&self) -> &[TokenAddress] {
        &self.0
    }

    /// Number of hops (2 or 3).
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; a valid path has at least two hops.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` for a two-hop path.
    #[must_use]
    pub fn is_direct(&self) -> bool {
        self.0.len() == 2
    }

    /// The token sold.
    #[must_use]
    pub fn first(&self) -> TokenAddress {
        self.0[0]
    }

    /// The token bought.
    #[must_use]
    pub fn last(&self) -> TokenAddress {
        self.0[self.0.len() - 1]
    }

    /// Consecutive `(from, to)` pairs, one per pool traversed.
    pub fn legs(&self) -> impl Iterator<Item = (TokenAddress, TokenAddress)> + '_ {
        self.0.windows(2).map(|w| (w[0], w[1]))
    }

    /// The path as raw addresses for ABI encoding.
    #[must_use]
    pub fn to_addresses(&self) -> Vec<Address> {
        self.0.iter().map(|hop| hop.address()).collect()
    }
}

impl fmt::Display for SwapPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, hop) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{hop}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn addr(b: u8) -> TokenAddress {
        TokenAddress::from_bytes([b; 20])
    }

    #[test]
    fn direct_and_via() {
        let (Ok(d), Ok(v)) = (
            SwapPath::direct(addr(1), addr(2)),
            SwapPath::via(addr(1), addr(3), addr(2)),
        ) else {
            panic!("valid paths");
        };
        assert!(d.is_direct());
        assert!(!v.is_direct());
        assert_eq!(v.len(), 3);
        assert_eq!(v.first(), addr(1));
        assert_eq!(v.last(), addr(2));
        let legs: Vec<_> = v.legs().collect();
        assert_eq!(legs, vec![(addr(1), addr(3)), (addr(3), addr(2))]);
    }

    #[test]
    fn rejects_bad_lengths() {
        assert!(SwapPath::new(vec![addr(1)]).is_err());
        assert!(SwapPath::new(vec![addr(1), addr(2), addr(3), addr(4)]).is_err());
    }

    #[test]
    fn rejects_native_and_repeats() {
        assert!(SwapPath::direct(TokenAddress::NATIVE, addr(2)).is_err());
        assert!(SwapPath::direct(addr(2), addr(2)).is_err());
        assert!(SwapPath::via(addr(1), addr(2), addr(1)).is_err());
    }

    #[test]
    fn addresses_preserve_order() {
        let Ok(p) = SwapPath::via(addr(1), addr(3), addr(2)) else {
            panic!("valid path");
        };
        let raw = p.to_addresses();
        assert_eq!(raw, vec![addr(1).address(), addr(3).address(), addr(2).address()]);
    }
}

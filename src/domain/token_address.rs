//! EVM token address with a native-currency sentinel.

use core::fmt;
use core::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::error::SwapError;

/// A 20-byte contract address identifying a token.
///
/// The all-zero address is reserved as the sentinel for the chain's native
/// currency (ETH), which has no contract.  Parsing accepts any hex casing,
/// and the empty string parses as the native sentinel.  Comparison is
/// byte-wise, which is the same as comparing lower-cased hex strings.
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::TokenAddress;
///
/// let lower: TokenAddress = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48".parse().unwrap();
/// let mixed: TokenAddress = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48".parse().unwrap();
/// assert_eq!(lower, mixed);
/// assert!("".parse::<TokenAddress>().unwrap().is_native());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TokenAddress(Address);

impl TokenAddress {
    /// Sentinel for the chain's native currency.
    pub const NATIVE: Self = Self(Address::ZERO);

    /// Wraps an [`Address`].
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    /// Creates a `TokenAddress` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(Address::new(bytes))
    }

    /// Returns the underlying [`Address`].
    #[must_use]
    pub const fn address(&self) -> Address {
        self.0
    }

    /// Returns the 20-byte representation.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }

    /// Returns `true` for the native-currency sentinel.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.0 == Address::ZERO
    }
}

impl FromStr for TokenAddress {
    type Err = SwapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(Self::NATIVE);
        }
        Address::from_str(s)
            .map(Self)
            .map_err(|_| SwapError::InvalidToken("address is not 20 bytes of hex"))
    }
}

impl TryFrom<String> for TokenAddress {
    type Error = SwapError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TokenAddress> for String {
    fn from(value: TokenAddress) -> Self {
        value.to_string()
    }
}

impl From<Address> for TokenAddress {
    fn from(value: Address) -> Self {
        Self(value)
    }
}

impl From<TokenAddress> for Address {
    fn from(value: TokenAddress) -> Self {
        value.0
    }
}

impl fmt::Display for TokenAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_checksum(None))
    }
}

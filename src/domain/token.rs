//! Token identity type.

use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use super::{Amount, ChainId, Decimals, TokenAddress};
use crate::error::SwapError;

/// A fungible asset on a given chain: an ERC-20 contract or the native
/// currency.
///
/// Two tokens are the same asset iff their chain and address match; the
/// descriptive fields (symbol, name, logo) do not take part in equality or
/// hashing.  Tokens are immutable once constructed.
///
/// The serialized form matches common token-list JSON (`chainId`,
/// `logoURI`, empty `address` for the native currency).
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::{ChainId, Decimals, Token, TokenAddress};
///
/// let eth = Token::native(ChainId::Mainnet, "ETH", "Ether");
/// assert!(eth.is_native());
/// assert_eq!(eth.decimals(), Decimals::ETHER);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    chain_id: ChainId,
    address: TokenAddress,
    decimals: Decimals,
    symbol: String,
    name: String,
    #[serde(rename = "logoURI", default, skip_serializing_if = "Option::is_none")]
    logo_uri: Option<String>,
}

impl Token {
    /// Creates an ERC-20 token.
    #[must_use]
    pub fn new(
        chain_id: ChainId,
        address: TokenAddress,
        decimals: Decimals,
        symbol: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            chain_id,
            address,
            decimals,
            symbol: symbol.into(),
            name: name.into(),
            logo_uri: None,
        }
    }

    /// Creates the native currency of `chain_id` (18 decimals).
    #[must_use]
    pub fn native(chain_id: ChainId, symbol: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(chain_id, TokenAddress::NATIVE, Decimals::ETHER, symbol, name)
    }

    /// Attaches a logo reference.
    #[must_use]
    pub fn with_logo(mut self, logo_uri: impl Into<String>) -> Self {
        self.logo_uri = Some(logo_uri.into());
        self
    }

    /// Returns the chain the token lives on.
    #[must_use]
    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// Returns the token address ([`TokenAddress::NATIVE`] for the native currency).
    #[must_use]
    pub const fn address(&self) -> TokenAddress {
        self.address
    }

    /// Returns the token decimals.
    #[must_use]
    pub const fn decimals(&self) -> Decimals {
        self.decimals
    }

    /// Returns the ticker symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the logo reference, if any.
    #[must_use]
    pub fn logo_uri(&self) -> Option<&str> {
        self.logo_uri.as_deref()
    }

    /// Returns `true` if this is the chain's native currency.
    #[must_use]
    pub fn is_native(&self) -> bool {
        self.address.is_native()
    }

    /// Returns `true` if `self` is token0 of a pair with `other`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] if the tokens are on different
    /// chains or have the same address.
    pub fn sorts_before(&self, other: &Self) -> crate::error::Result<bool> {
        if self.chain_id != other.chain_id {
            return Err(SwapError::InvalidToken("tokens are on different chains"));
        }
        if self.address == other.address {
            return Err(SwapError::InvalidToken("tokens have the same address"));
        }
        Ok(self.address < other.address)
    }

    /// Returns the ERC-20 that trades in place of this token: `wrapped` for
    /// the native currency, `self` otherwise.
    #[must_use]
    pub fn or_wrapped<'a>(&'a self, wrapped: &'a Self) -> &'a Self {
        if self.is_native() {
            wrapped
        } else {
            self
        }
    }

    /// Parses a human-readable amount of this token into raw units.
    ///
    /// # Errors
    ///
    /// See [`Decimals::parse_units`].
    pub fn parse_amount(&self, human: &str) -> crate::error::Result<Amount> {
        self.decimals.parse_units(human)
    }

    /// Formats raw units of this token as a decimal string.
    #[must_use]
    pub fn format_amount(&self, raw: Amount) -> String {
        self.decimals.format_units(raw)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.chain_id == other.chain_id && self.address == other.address
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.chain_id.hash(state);
        self.address.hash(state);
    }
}

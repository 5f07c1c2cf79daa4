//! Supported networks.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SwapError;

/// The networks the swap front end can operate on.
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::ChainId;
///
/// assert_eq!(ChainId::try_from(1u64).unwrap(), ChainId::Mainnet);
/// assert_eq!(ChainId::Sepolia.id(), 11_155_111);
/// assert!(ChainId::try_from(56u64).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum ChainId {
    /// Ethereum mainnet.
    Mainnet,
    /// Sepolia test network.
    Sepolia,
}

impl ChainId {
    /// All supported chains.
    pub const ALL: [Self; 2] = [Self::Mainnet, Self::Sepolia];

    /// Numeric EIP-155 chain id.
    #[must_use]
    pub const fn id(&self) -> u64 {
        match self {
            Self::Mainnet => 1,
            Self::Sepolia => 11_155_111,
        }
    }

    /// Display name used in user-facing messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Mainnet => "Mainnet",
            Self::Sepolia => "Sepolia",
        }
    }

    /// Returns `true` for test networks.
    #[must_use]
    pub const fn is_testnet(&self) -> bool {
        matches!(self, Self::Sepolia)
    }
}

impl Default for ChainId {
    /// The test network, used when no wallet is connected.
    fn default() -> Self {
        Self::Sepolia
    }
}

impl TryFrom<u64> for ChainId {
    type Error = SwapError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == value)
            .ok_or(SwapError::UnsupportedChain(value))
    }
}

impl From<ChainId> for u64 {
    fn from(value: ChainId) -> Self {
        value.id()
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Top-level swap configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{ChainConfig, TokenList};
use crate::domain::{ChainId, Slippage};
use crate::error::SwapError;
use crate::planner::ApprovalPolicy;

const DEFAULT_SLIPPAGE_BPS: u32 = 50;
const DEFAULT_DEADLINE_SECS: u64 = 20 * 60;
const DEFAULT_BALANCE_REFRESH_SECS: u64 = 30;

/// Everything the swap session needs besides its collaborators.
///
/// Every field has a default, so an empty TOML document yields
/// [`SwapConfig::default`]:
///
/// ```
/// use hydra_swap::config::SwapConfig;
///
/// let cfg = SwapConfig::from_toml_str("default_slippage_bps = 100").unwrap();
/// assert_eq!(cfg.default_slippage_bps, 100);
/// assert_eq!(cfg.chains.len(), 2);
/// ```
///
/// # Validation
///
/// - Every chain config is valid and each chain appears once.
/// - The token list is valid and lists at least two tokens per chain.
/// - `default_slippage_bps <= 10_000`.
/// - `deadline_secs` and `balance_refresh_secs` are positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwapConfig {
    /// Supported networks.
    pub chains: Vec<ChainConfig>,
    /// Selectable tokens.
    pub tokens: TokenList,
    /// Slippage tolerance applied when the trader sets none.
    pub default_slippage_bps: u32,
    /// Seconds from submission until the swap deadline.
    pub deadline_secs: u64,
    /// Seconds between balance refreshes.
    pub balance_refresh_secs: u64,
    /// Amount requested by approval transactions.
    pub approval_policy: ApprovalPolicy,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            chains: ChainId::ALL.into_iter().map(ChainConfig::preset).collect(),
            tokens: TokenList::builtin(),
            default_slippage_bps: DEFAULT_SLIPPAGE_BPS,
            deadline_secs: DEFAULT_DEADLINE_SECS,
            balance_refresh_secs: DEFAULT_BALANCE_REFRESH_SECS,
            approval_policy: ApprovalPolicy::default(),
        }
    }
}

impl SwapConfig {
    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] on a parse error or a
    /// failed validation.
    pub fn from_toml_str(input: &str) -> Result<Self, SwapError> {
        let cfg: Self =
            toml::from_str(input).map_err(|e| SwapError::InvalidConfiguration(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if the file cannot be
    /// read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SwapError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            SwapError::InvalidConfiguration(format!("{}: {e}", path.display()))
        })?;
        let cfg = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), chains = cfg.chains.len(), "loaded swap config");
        Ok(cfg)
    }

    /// Serializes to TOML.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if serialization fails.
    pub fn to_toml_string(&self) -> Result<String, SwapError> {
        toml::to_string_pretty(self).map_err(|e| SwapError::InvalidConfiguration(e.to_string()))
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] naming the first
    /// violated invariant.
    pub fn validate(&self) -> Result<(), SwapError> {
        if self.chains.is_empty() {
            return Err(SwapError::InvalidConfiguration(
                "at least one chain must be configured".into(),
            ));
        }
        for (i, chain) in self.chains.iter().enumerate() {
            chain.validate()?;
            if self.chains[..i].iter().any(|c| c.chain == chain.chain) {
                return Err(SwapError::InvalidConfiguration(format!(
                    "{} configured twice",
                    chain.chain
                )));
            }
            self.tokens.default_pair(chain.chain)?;
        }
        self.tokens.validate()?;
        self.default_slippage()?;
        if self.deadline_secs == 0 {
            return Err(SwapError::InvalidConfiguration(
                "deadline_secs must be positive".into(),
            ));
        }
        if self.balance_refresh_secs == 0 {
            return Err(SwapError::InvalidConfiguration(
                "balance_refresh_secs must be positive".into(),
            ));
        }
        Ok(())
    }

    /// Configuration for `chain`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::UnsupportedChain`] if `chain` is not configured.
    pub fn chain(&self, chain: ChainId) -> Result<&ChainConfig, SwapError> {
        self.chains
            .iter()
            .find(|c| c.chain == chain)
            .ok_or(SwapError::UnsupportedChain(chain.id()))
    }

    /// Default slippage tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if above 100%.
    pub fn default_slippage(&self) -> Result<Slippage, SwapError> {
        Slippage::from_bps(self.default_slippage_bps).map_err(|_| {
            SwapError::InvalidConfiguration(format!(
                "default_slippage_bps {} exceeds 10000",
                self.default_slippage_bps
            ))
        })
    }

    /// Window between submission and the swap deadline.
    #[must_use]
    pub const fn deadline_window(&self) -> Duration {
        Duration::from_secs(self.deadline_secs)
    }

    /// Interval between balance refreshes.
    #[must_use]
    pub const fn balance_refresh_interval(&self) -> Duration {
        Duration::from_secs(self.balance_refresh_secs)
    }
}

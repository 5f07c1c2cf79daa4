//! Transaction deadline.

use core::fmt;
use core::time::Duration;
use std::time::{SystemTime, UNIX_EPOCH};

use alloy_primitives::U256;

/// Unix timestamp (seconds) after which the router rejects a swap.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use hydra_swap::domain::Deadline;
///
/// let deadline = Deadline::after(1_700_000_000, Duration::from_secs(20 * 60));
/// assert_eq!(deadline.as_secs(), 1_700_001_200);
/// assert!(!deadline.is_expired(1_700_001_200));
/// assert!(deadline.is_expired(1_700_001_201));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Deadline(u64);

impl Deadline {
    /// Validity window used when none is configured.
    pub const DEFAULT_WINDOW: Duration = Duration::from_secs(20 * 60);

    /// Creates a deadline at an absolute unix time.
    #[must_use]
    pub const fn at(unix_secs: u64) -> Self {
        Self(unix_secs)
    }

    /// Creates a deadline `window` after `now_unix_secs`.
    #[must_use]
    pub const fn after(now_unix_secs: u64, window: Duration) -> Self {
        Self(now_unix_secs.saturating_add(window.as_secs()))
    }

    /// Creates a deadline `window` after the current system time.
    #[must_use]
    pub fn from_now(window: Duration) -> Self {
        Self::after(unix_now(), window)
    }

    /// Returns the deadline in unix seconds.
    #[must_use]
    pub const fn as_secs(&self) -> u64 {
        self.0
    }

    /// Returns the deadline as a `uint256` router argument.
    #[must_use]
    pub fn to_u256(&self) -> U256 {
        U256::from(self.0)
    }

    /// Returns `true` once `now_unix_secs` is past the deadline.
    #[must_use]
    pub const fn is_expired(&self, now_unix_secs: u64) -> bool {
        now_unix_secs > self.0
    }
}

/// Current unix time in seconds; a clock set before 1970 reads as zero.
#[must_use]
pub fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_secs())
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Periodic balance refresh.

use std::sync::Arc;
use std::time::Duration;

use alloy_primitives::Address;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::domain::{Amount, TokenAddress};
use crate::traits::ChainReader;

/// Default interval between balance reads.
pub const DEFAULT_BALANCE_REFRESH: Duration = Duration::from_secs(30);

/// Spawns background tasks that keep one balance fresh.
///
/// Only ambient data is polled.  Quotes are never cached; they are
/// recomputed on every input change.
#[derive(Debug)]
pub struct BalancePoller<R> {
    reader: Arc<R>,
    interval: Duration,
}

impl<R> Clone for BalancePoller<R> {
    fn clone(&self) -> Self {
        Self {
            reader: Arc::clone(&self.reader),
            interval: self.interval,
        }
    }
}

impl<R: ChainReader + 'static> BalancePoller<R> {
    /// Creates a poller reading through `reader` every `interval`.
    #[must_use]
    pub const fn new(reader: Arc<R>, interval: Duration) -> Self {
        Self { reader, interval }
    }

    /// Refresh interval.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Starts polling `owner`'s balance of `token`.
    ///
    /// The first read happens immediately.  A failed read is logged and the
    /// last known value is kept.  The task stops when the returned
    /// [`BalanceWatch`] is dropped.
    ///
    /// Must be called within a Tokio runtime.
    #[must_use]
    pub fn spawn(&self, owner: Address, token: TokenAddress) -> BalanceWatch {
        let (tx, rx) = watch::channel(None);
        let reader = Arc::clone(&self.reader);
        let period = self.interval;

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    () = tx.closed() => break,
                    _ = ticker.tick() => {}
                }
                match reader.get_balance(owner, token).await {
                    Ok(balance) => {
                        debug!(%owner, %token, %balance, "balance refreshed");
                        tx.send_replace(Some(balance));
                    }
                    Err(e) => warn!(%owner, %token, error = %e, "balance refresh failed"),
                }
            }
        });

        BalanceWatch { rx, handle }
    }
}

/// Receiving end of a balance poll; dropping it stops the poll.
#[derive(Debug)]
pub struct BalanceWatch {
    rx: watch::Receiver<Option<Amount>>,
    handle: JoinHandle<()>,
}

impl BalanceWatch {
    /// Latest balance, or `None` before the first successful read.
    #[must_use]
    pub fn latest(&self) -> Option<Amount> {
        *self.rx.borrow()
    }

    /// Waits for the next published balance.
    ///
    /// Returns `None` if the poll task has ended.
    pub async fn changed(&mut self) -> Option<Amount> {
        self.rx.changed().await.ok()?;
        *self.rx.borrow_and_update()
    }

    /// A receiver for other consumers of the same balance.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Amount>> {
        self.rx.clone()
    }
}

impl Drop for BalanceWatch {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

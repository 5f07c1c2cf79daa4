//! Last-write-wins ordering for asynchronous responses.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::warn;

/// Sequence number attached to one outgoing request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Raw sequence number.
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

/// Issues monotonically increasing tickets and accepts only the newest.
///
/// A response is applied only if its ticket is the latest one issued; any
/// other response belongs to a superseded input and is dropped.
///
/// ```
/// use hydra_swap::controller::RequestSequencer;
///
/// let seq = RequestSequencer::new();
/// let first = seq.issue();
/// let second = seq.issue();
/// assert_eq!(seq.accept(first, "stale"), None);
/// assert_eq!(seq.accept(second, "fresh"), Some("fresh"));
/// ```
#[derive(Debug, Default)]
pub struct RequestSequencer {
    latest: AtomicU64,
}

impl RequestSequencer {
    /// Creates a sequencer that has issued no tickets.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latest: AtomicU64::new(0),
        }
    }

    /// Issues the next ticket, superseding every earlier one.
    pub fn issue(&self) -> Ticket {
        Ticket(self.latest.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Supersedes every issued ticket without starting a request.
    pub fn invalidate(&self) {
        self.latest.fetch_add(1, Ordering::AcqRel);
    }

    /// Returns `true` if `ticket` is the latest issued.
    #[must_use]
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.load(Ordering::Acquire) == ticket.0
    }

    /// Passes `value` through if `ticket` is current, drops it otherwise.
    pub fn accept<T>(&self, ticket: Ticket, value: T) -> Option<T> {
        if self.is_current(ticket) {
            Some(value)
        } else {
            warn!(
                ticket = ticket.0,
                latest = self.latest.load(Ordering::Acquire),
                "discarding stale response"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_increase() {
        let seq = RequestSequencer::new();
        let a = seq.issue();
        let b = seq.issue();
        assert!(b > a);
        assert_eq!(a.get() + 1, b.get());
    }

    #[test]
    fn only_latest_is_current() {
        let seq = RequestSequencer::new();
        let a = seq.issue();
        assert!(seq.is_current(a));
        let b = seq.issue();
        assert!(!seq.is_current(a));
        assert!(seq.is_current(b));
    }

    #[test]
    fn invalidate_supersedes_outstanding() {
        let seq = RequestSequencer::new();
        let a = seq.issue();
        seq.invalidate();
        assert_eq!(seq.accept(a, 1), None);
    }

    #[test]
    fn out_of_order_arrival_keeps_newest() {
        let seq = RequestSequencer::new();
        let old = seq.issue();
        let new = seq.issue();
        assert_eq!(seq.accept(new, "new"), Some("new"));
        assert_eq!(seq.accept(old, "old"), None);
    }
}

//! Per-attempt swap state machine.

use core::fmt;

use tracing::info;

use crate::error::SwapError;

/// Where a swap attempt currently stands.
///
/// ```text
/// Idle -> Quoting -> (NoLiquidity | QuoteReady)
///      -> (AwaitingApproval ->)? AwaitingConfirmation -> (Success | Failed) -> Idle
/// ```
///
/// `Failed` is reachable from every non-terminal state.  Input edits move
/// `Quoting`, `NoLiquidity` and `QuoteReady` back to `Quoting` or `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwapState {
    /// No input, or the form was reset.
    #[default]
    Idle,
    /// A quote request is in flight.
    Quoting,
    /// The pair has no pool or no reserves.
    NoLiquidity,
    /// A quote is displayed and the swap can be submitted.
    QuoteReady,
    /// An approval transaction is waiting for confirmation.
    AwaitingApproval,
    /// The swap transaction is waiting for confirmation.
    AwaitingConfirmation,
    /// The swap was confirmed.
    Success,
    /// The attempt failed; no retry is made.
    Failed,
}

impl SwapState {
    /// Stable lowercase name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Quoting => "quoting",
            Self::NoLiquidity => "no_liquidity",
            Self::QuoteReady => "quote_ready",
            Self::AwaitingApproval => "awaiting_approval",
            Self::AwaitingConfirmation => "awaiting_confirmation",
            Self::Success => "success",
            Self::Failed => "failed",
        }
    }

    /// `Success` and `Failed` end an attempt.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Failed)
    }

    /// A transaction is pending; a second submission must be refused.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::AwaitingApproval | Self::AwaitingConfirmation)
    }

    /// Returns `true` if `self -> next` is an edge of the state machine.
    #[must_use]
    pub const fn can_transition_to(&self, next: Self) -> bool {
        use SwapState::{
            AwaitingApproval, AwaitingConfirmation, Failed, Idle, NoLiquidity, QuoteReady, Quoting,
            Success,
        };
        if matches!(next, Failed) {
            return !self.is_terminal();
        }
        matches!(
            (*self, next),
            (Idle, Quoting)
                | (Quoting | NoLiquidity | QuoteReady, Quoting | Idle)
                | (Quoting, NoLiquidity | QuoteReady)
                | (QuoteReady, AwaitingApproval | AwaitingConfirmation)
                | (AwaitingApproval, AwaitingConfirmation)
                | (AwaitingConfirmation, Success)
                | (Success | Failed, Idle)
        )
    }

    /// Moves to `next`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidTransition`] if the edge does not exist;
    /// `self` is left unchanged.
    pub fn transition(&mut self, next: Self) -> Result<(), SwapError> {
        if !self.can_transition_to(next) {
            return Err(SwapError::InvalidTransition {
                from: self.name(),
                to: next.name(),
            });
        }
        if *self != next {
            info!(from = self.name(), to = next.name(), "swap state");
        }
        *self = next;
        Ok(())
    }
}

impl fmt::Display for SwapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    const ALL: [SwapState; 8] = [
        SwapState::Idle,
        SwapState::Quoting,
        SwapState::NoLiquidity,
        SwapState::QuoteReady,
        SwapState::AwaitingApproval,
        SwapState::AwaitingConfirmation,
        SwapState::Success,
        SwapState::Failed,
    ];

    fn walk(path: &[SwapState]) -> SwapState {
        let mut state = SwapState::Idle;
        for &next in path {
            let Ok(()) = state.transition(next) else {
                panic!("{state} -> {next} rejected");
            };
        }
        state
    }

    #[test]
    fn happy_path_with_approval() {
        let end = walk(&[
            SwapState::Quoting,
            SwapState::QuoteReady,
            SwapState::AwaitingApproval,
            SwapState::AwaitingConfirmation,
            SwapState::Success,
            SwapState::Idle,
        ]);
        assert_eq!(end, SwapState::Idle);
    }

    #[test]
    fn approval_can_be_skipped() {
        assert!(SwapState::QuoteReady.can_transition_to(SwapState::AwaitingConfirmation));
    }

    #[test]
    fn failed_reachable_from_every_non_terminal_state() {
        for state in ALL {
            assert_eq!(
                state.can_transition_to(SwapState::Failed),
                !state.is_terminal(),
                "{state}"
            );
        }
    }

    #[test]
    fn terminal_states_return_to_idle_only() {
        for terminal in [SwapState::Success, SwapState::Failed] {
            for next in ALL {
                assert_eq!(terminal.can_transition_to(next), next == SwapState::Idle);
            }
        }
    }

    #[test]
    fn cannot_submit_without_quote() {
        let mut state = SwapState::NoLiquidity;
        let Err(SwapError::InvalidTransition { from, to }) =
            state.transition(SwapState::AwaitingConfirmation)
        else {
            panic!("expected InvalidTransition");
        };
        assert_eq!((from, to), ("no_liquidity", "awaiting_confirmation"));
        assert_eq!(state, SwapState::NoLiquidity);
    }

    #[test]
    fn pending_transaction_ignores_edits() {
        assert!(!SwapState::AwaitingConfirmation.can_transition_to(SwapState::Quoting));
        assert!(!SwapState::AwaitingApproval.can_transition_to(SwapState::Idle));
        assert!(SwapState::AwaitingApproval.is_submitting());
    }

    #[test]
    fn requote_while_quoting() {
        assert!(SwapState::Quoting.can_transition_to(SwapState::Quoting));
        assert!(SwapState::QuoteReady.can_transition_to(SwapState::Quoting));
    }
}

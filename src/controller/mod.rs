//! Event-driven swap controller.
//!
//! Glues the pure quote and planning layers to a [`ChainReader`] and a
//! [`Wallet`]:
//!
//! - [`SwapForm`] holds what the trader entered;
//! - [`SwapState`] is the per-attempt state machine;
//! - [`RequestSequencer`] drops responses for superseded input;
//! - [`SwapSession`] drives quoting and the approval-then-swap sequence;
//! - [`BalancePoller`] refreshes the input token's balance in the
//!   background.
//!
//! [`ChainReader`]: crate::traits::ChainReader
//! [`Wallet`]: crate::traits::Wallet

mod form;
mod poller;
mod sequencer;
mod session;
mod state;

pub use form::{Side, SwapForm, MAX_INPUT_LENGTH};
pub use poller::{BalancePoller, BalanceWatch, DEFAULT_BALANCE_REFRESH};
pub use sequencer::{RequestSequencer, Ticket};
pub use session::{
    fetch_quote, ExecutionReport, PendingQuote, QuoteResponse, SwapFailure, SwapSession,
};
pub use state::SwapState;

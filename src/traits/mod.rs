//! Collaborator seams for chain access and signing.
//!
//! [`ChainReader`] reads pool and account state; [`Wallet`] signs, submits
//! and waits for transactions.  The swap session is generic over both, so
//! any node client or signer can be plugged in.

mod chain_reader;
mod wallet;

pub use chain_reader::ChainReader;
pub use wallet::{TxReceipt, Wallet};

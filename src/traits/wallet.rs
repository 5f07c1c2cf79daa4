//! Signing and submission.

use alloy_primitives::{Address, B256};
use async_trait::async_trait;

use crate::domain::ChainId;
use crate::error::{Result, SwapError};
use crate::router::TransactionRequest;

/// Outcome of a mined transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxReceipt {
    /// Transaction hash.
    pub tx_hash: B256,
    /// `true` if execution succeeded, `false` if it reverted.
    pub success: bool,
    /// Block the transaction was included in.
    pub block_number: Option<u64>,
}

impl TxReceipt {
    /// Turns a reverted receipt into [`SwapError::SubmissionReverted`].
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::SubmissionReverted`] if `success` is `false`.
    pub fn into_result(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(SwapError::SubmissionReverted(format!(
                "transaction {} reverted",
                self.tx_hash
            )))
        }
    }
}

/// A connected account able to sign and submit transactions.
///
/// Implementations report a declined signature as
/// [`SwapError::UserRejected`] and transport failures as
/// [`SwapError::NetworkError`].
#[async_trait]
pub trait Wallet: Send + Sync {
    /// Address of the connected account.
    ///
    /// # Errors
    ///
    /// Returns an error if no account is connected.
    async fn address(&self) -> Result<Address>;

    /// Network the wallet is connected to.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::UnsupportedChain`] for unknown networks.
    async fn chain_id(&self) -> Result<ChainId>;

    /// Signs and broadcasts `tx`, returning its hash.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::UserRejected`] or a network error.
    async fn send_transaction(&self, tx: TransactionRequest) -> Result<B256>;

    /// Waits until `tx_hash` is mined.
    ///
    /// A reverted transaction is returned as a receipt with
    /// `success == false`, not as an error.
    ///
    /// # Errors
    ///
    /// Returns a network error if the receipt cannot be fetched.
    async fn wait_for_confirmation(&self, tx_hash: B256) -> Result<TxReceipt>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reverted_receipt_is_an_error() {
        let receipt = TxReceipt {
            tx_hash: B256::repeat_byte(1),
            success: false,
            block_number: Some(7),
        };
        assert!(matches!(receipt.into_result(), Err(SwapError::SubmissionReverted(_))));
    }

    #[test]
    fn successful_receipt_passes_through() {
        let receipt = TxReceipt {
            tx_hash: B256::repeat_byte(1),
            success: true,
            block_number: None,
        };
        assert_eq!(receipt.into_result(), Ok(receipt));
    }
}

//! Live quoting through a swap session.
//!
//! Reads reserves from a public JSON-RPC node, quotes USDC -> ETH as the
//! amount is "typed", then executes against a dry-run wallet that prints
//! the transactions instead of signing them.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hydra_swap=debug cargo run --example swap_session
//! ```
//!
//! Pass `sepolia` as the first argument to use the test network.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use alloy_primitives::{Address, B256};
use async_trait::async_trait;
use hydra_swap::config::SwapConfig;
use hydra_swap::controller::SwapSession;
use hydra_swap::domain::{ChainId, Slippage};
use hydra_swap::error::Result;
use hydra_swap::router::TransactionRequest;
use hydra_swap::rpc::JsonRpcChainReader;
use hydra_swap::traits::{TxReceipt, Wallet};
use hydra_swap::units::format_balance;
use tracing_subscriber::EnvFilter;

/// Prints transactions and reports them as mined.
struct DryRunWallet {
    chain: ChainId,
    sent: AtomicU8,
}

#[async_trait]
impl Wallet for DryRunWallet {
    async fn address(&self) -> Result<Address> {
        Ok(Address::repeat_byte(0xee))
    }

    async fn chain_id(&self) -> Result<ChainId> {
        Ok(self.chain)
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> Result<B256> {
        let n = self.sent.fetch_add(1, Ordering::Relaxed) + 1;
        println!("  [dry run] tx #{n} to {} value {} data {}", tx.to, tx.value, tx.data);
        Ok(B256::with_last_byte(n))
    }

    async fn wait_for_confirmation(&self, tx_hash: B256) -> Result<TxReceipt> {
        Ok(TxReceipt {
            tx_hash,
            success: true,
            block_number: None,
        })
    }
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let chain = match std::env::args().nth(1).as_deref() {
        Some("sepolia") => ChainId::Sepolia,
        _ => ChainId::Mainnet,
    };
    let config = SwapConfig::default();
    let reader = Arc::new(JsonRpcChainReader::from_chain_config(config.chain(chain)?)?);
    let wallet = DryRunWallet {
        chain,
        sent: AtomicU8::new(0),
    };
    let mut session = SwapSession::new(config, chain, reader, wallet)?;
    session.set_slippage(Slippage::from_percent_str("1")?);

    println!(
        "=== {} -> {} on {chain} ===\n",
        session.form().token_in().symbol(),
        session.form().token_out().symbol()
    );

    // Each keystroke supersedes the previous quote.
    for input in ["1", "10", "100"] {
        let state = session.requote(input).await?;
        match (session.quote(), session.quote_error()) {
            (Some(quote), _) => println!(
                "{input:>5} -> {} {} (impact {}) [{state}]",
                format_balance(&quote.formatted_amount_out()),
                quote.token_out().symbol(),
                quote.price_impact()
            ),
            (None, Some(reason)) => println!("{input:>5} -> no quote: {reason} [{state}]"),
            (None, None) => println!("{input:>5} -> [{state}]"),
        }
    }

    println!("\nExecuting:");
    match session.execute().await {
        Ok(report) => println!(
            "\nSwap confirmed ({} transaction{}), minimum out {}",
            if report.approval.is_some() { 2 } else { 1 },
            if report.approval.is_some() { "s" } else { "" },
            report.plan.swap_step.amount_out_min
        ),
        Err(failure) => println!("\nSwap failed: {failure}\n  {}", failure.suggested_action),
    }
    Ok(())
}

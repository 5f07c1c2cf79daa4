//! Event-driven swap session.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, warn};

use super::form::{Side, SwapForm};
use super::poller::{BalancePoller, BalanceWatch};
use super::sequencer::{RequestSequencer, Ticket};
use super::state::SwapState;
use crate::config::{ChainConfig, SwapConfig};
use crate::domain::{unix_now, Amount, ChainId, Deadline, Slippage, Token, TradeQuote, TradeRequest};
use crate::error::{Result, SwapError};
use crate::planner::{select_path, ExecutionPlan, ExecutionPlanner};
use crate::quote::{QuoteEngine, QuoteOutcome};
use crate::router::TransactionRequest;
use crate::traits::{ChainReader, TxReceipt, Wallet};

/// A failed attempt, reported with a suggestion for the trader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{error}")]
pub struct SwapFailure {
    /// What went wrong.
    #[source]
    pub error: SwapError,
    /// What the trader can do about it.
    pub suggested_action: &'static str,
}

impl From<SwapError> for SwapFailure {
    fn from(error: SwapError) -> Self {
        let suggested_action = error.suggested_action();
        Self {
            error,
            suggested_action,
        }
    }
}

/// Confirmed transactions of a successful swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionReport {
    /// The plan that was executed.
    pub plan: ExecutionPlan,
    /// Approval receipt, if an approval was needed.
    pub approval: Option<TxReceipt>,
    /// Swap receipt.
    pub swap: TxReceipt,
}

/// A quote request detached from the session.
///
/// Created by [`SwapSession::set_input`] and friends; resolve it anywhere
/// and hand the [`QuoteResponse`] back to [`SwapSession::apply_quote`].
/// Responses for superseded tickets are discarded there.
#[derive(Debug)]
pub struct PendingQuote<R> {
    ticket: Ticket,
    request: TradeRequest,
    reader: Arc<R>,
    chain: ChainConfig,
    engine: QuoteEngine,
}

impl<R: ChainReader> PendingQuote<R> {
    /// Ticket of this request.
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Reads the reserves along the path and prices the trade.
    pub async fn resolve(self) -> QuoteResponse {
        let result = fetch_quote(self.reader.as_ref(), &self.chain, self.engine, self.request).await;
        QuoteResponse {
            ticket: self.ticket,
            result,
        }
    }
}

/// The result of a [`PendingQuote`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteResponse {
    ticket: Ticket,
    result: Result<TradeQuote>,
}

impl QuoteResponse {
    /// Ticket of the originating request.
    #[must_use]
    pub const fn ticket(&self) -> Ticket {
        self.ticket
    }
}

/// Prices `request` against live reserves.
///
/// Picks the path (direct if the factory knows the pair, otherwise through
/// the wrapped native token), reads every leg's reserves and quotes.
///
/// # Errors
///
/// - [`SwapError::NoLiquidity`] if a pool along the path does not exist.
/// - [`SwapError::InvalidToken`] for wrapping or unwrapping, which is not
///   a swap.
/// - Pricing errors of [`QuoteEngine::quote`] and reader errors.
pub async fn fetch_quote<R: ChainReader + ?Sized>(
    reader: &R,
    chain: &ChainConfig,
    engine: QuoteEngine,
    request: TradeRequest,
) -> Result<TradeQuote> {
    let weth = chain.wrapped_native_token();
    let hop_in = request.token_in().or_wrapped(&weth).address();
    let hop_out = request.token_out().or_wrapped(&weth).address();
    if hop_in == hop_out {
        return Err(SwapError::InvalidToken("wrapping is not a swap"));
    }

    let direct = reader.get_pair_address(hop_in, hop_out).await?;
    if direct.is_none() && (hop_in == weth.address() || hop_out == weth.address()) {
        return Err(SwapError::NoLiquidity);
    }
    let path = select_path(request.token_in(), request.token_out(), &weth, direct.is_some())?;

    let mut reserves = Vec::with_capacity(path.len() - 1);
    for (from, to) in path.legs() {
        let pair = if (from, to) == (hop_in, hop_out) {
            direct
        } else {
            reader.get_pair_address(from, to).await?
        };
        let pair = pair.ok_or(SwapError::NoLiquidity)?;
        let snapshot = reader.get_reserves(pair).await?;
        debug!(%pair, %from, %to, reserve0 = %snapshot.reserve0(), reserve1 = %snapshot.reserve1(), "read reserves");
        if !snapshot.has_liquidity() {
            return Err(SwapError::NoLiquidity);
        }
        reserves.push(snapshot.oriented_leg(from, to)?);
    }
    engine.quote(request, path, &reserves)
}

/// One trader's swap flow over a chain reader and a wallet.
///
/// Input edits produce [`PendingQuote`]s; only the newest response is
/// applied.  [`execute`](Self::execute) re-prices against fresh reserves,
/// then runs approval and swap in order, never retrying.  A failure
/// returns the session to [`SwapState::Idle`] with the entered amount
/// kept; a success clears it.
pub struct SwapSession<R, W> {
    reader: Arc<R>,
    wallet: W,
    config: SwapConfig,
    engine: QuoteEngine,
    form: SwapForm,
    state: SwapState,
    quote: Option<TradeQuote>,
    quote_error: Option<SwapError>,
    sequencer: RequestSequencer,
}

impl<R, W> SwapSession<R, W>
where
    R: ChainReader + 'static,
    W: Wallet,
{
    /// Creates a session on `chain` with the configured defaults.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if `config` is invalid or does not
    /// cover `chain`.
    pub fn new(config: SwapConfig, chain: ChainId, reader: Arc<R>, wallet: W) -> Result<Self> {
        config.validate()?;
        config.chain(chain)?;
        let form = SwapForm::new(chain, &config.tokens, config.default_slippage()?)?;
        Ok(Self {
            reader,
            wallet,
            config,
            engine: QuoteEngine::default(),
            form,
            state: SwapState::Idle,
            quote: None,
            quote_error: None,
            sequencer: RequestSequencer::new(),
        })
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SwapState {
        self.state
    }

    /// The form as the trader sees it.
    #[must_use]
    pub const fn form(&self) -> &SwapForm {
        &self.form
    }

    /// The displayed quote, if any.
    #[must_use]
    pub const fn quote(&self) -> Option<&TradeQuote> {
        self.quote.as_ref()
    }

    /// Why no quote is displayed, if a quote was attempted.
    #[must_use]
    pub const fn quote_error(&self) -> Option<&SwapError> {
        self.quote_error.as_ref()
    }

    /// Connected wallet.
    #[must_use]
    pub const fn wallet(&self) -> &W {
        &self.wallet
    }

    /// Shared chain reader.
    #[must_use]
    pub const fn reader(&self) -> &Arc<R> {
        &self.reader
    }

    /// Session configuration.
    #[must_use]
    pub const fn config(&self) -> &SwapConfig {
        &self.config
    }

    /// Deployment of the selected network.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::UnsupportedChain`] if the network is not
    /// configured.
    pub fn chain_config(&self) -> Result<&ChainConfig> {
        self.config.chain(self.form.chain())
    }

    /// Enters an amount and starts a quote for it.
    ///
    /// Returns `None` when there is nothing to quote (empty entry); the
    /// session is then idle.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidTransition`] while a transaction is
    /// pending.
    pub fn set_input(&mut self, value: &str) -> Result<Option<PendingQuote<R>>> {
        self.ensure_editable()?;
        self.form.set_input(value);
        self.begin_quote()
    }

    /// Enters the full balance and starts a quote for it.
    ///
    /// # Errors
    ///
    /// See [`set_input`](Self::set_input).
    pub fn set_max(&mut self) -> Result<Option<PendingQuote<R>>> {
        self.ensure_editable()?;
        self.form.set_max();
        self.begin_quote()
    }

    /// Selects a token; see [`SwapForm::select_token`].
    ///
    /// Outstanding quotes are superseded and the session goes idle.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] for a token on another network,
    /// or [`SwapError::InvalidTransition`] while a transaction is pending.
    pub fn select_token(&mut self, side: Side, token: Token) -> Result<bool> {
        self.ensure_editable()?;
        let flipped = self.form.select_token(side, token)?;
        self.reset_quote()?;
        Ok(flipped)
    }

    /// Flips the pair.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidTransition`] while a transaction is
    /// pending.
    pub fn flip(&mut self) -> Result<()> {
        self.ensure_editable()?;
        self.form.flip();
        self.reset_quote()
    }

    /// Switches network and resets the form to its default pair.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::UnsupportedChain`] if `chain` is not
    /// configured, or [`SwapError::InvalidTransition`] while a transaction
    /// is pending.
    pub fn switch_chain(&mut self, chain: ChainId) -> Result<()> {
        self.ensure_editable()?;
        self.config.chain(chain)?;
        self.form.switch_chain(chain, &self.config.tokens)?;
        info!(%chain, "switched network");
        self.reset_quote()
    }

    /// Sets the slippage tolerance used by the next execution.
    pub fn set_slippage(&mut self, slippage: Slippage) {
        self.form.set_slippage(slippage);
    }

    /// Records a fresh balance of the input token.
    pub fn set_balance(&mut self, balance: Amount) {
        self.form.set_balance(balance);
    }

    /// Starts polling the connected account's balance of the input token.
    ///
    /// # Errors
    ///
    /// Returns a wallet error if no account is connected.
    pub async fn watch_balance(&self) -> Result<BalanceWatch> {
        let owner = self.wallet.address().await?;
        let poller = BalancePoller::new(Arc::clone(&self.reader), self.config.balance_refresh_interval());
        Ok(poller.spawn(owner, self.form.token_in().address()))
    }

    /// Applies a resolved quote if it is still the newest.
    ///
    /// Returns `false` for a stale response, which changes nothing.
    ///
    /// # Errors
    ///
    /// A reader failure other than a pricing failure fails the attempt:
    /// the session passes through [`SwapState::Failed`] back to
    /// [`SwapState::Idle`] and the failure is returned.
    pub fn apply_quote(&mut self, response: QuoteResponse) -> core::result::Result<bool, SwapFailure> {
        let Some(result) = self.sequencer.accept(response.ticket, response.result) else {
            return Ok(false);
        };
        match QuoteOutcome::from_result(result) {
            Ok(QuoteOutcome::Ready(quote)) => {
                self.form.set_output(quote.formatted_amount_out());
                self.quote = Some(quote);
                self.quote_error = None;
                self.state.transition(SwapState::QuoteReady)?;
            }
            Ok(QuoteOutcome::Unavailable(reason)) => {
                debug!(%reason, "no quote available");
                self.form.set_output(String::new());
                self.quote = None;
                self.quote_error = Some(reason);
                self.state.transition(SwapState::NoLiquidity)?;
            }
            Err(error) => {
                self.form.set_output(String::new());
                self.quote = None;
                return Err(self.fail(error));
            }
        }
        Ok(true)
    }

    /// Enters `value`, quotes it and applies the result.
    ///
    /// # Errors
    ///
    /// See [`set_input`](Self::set_input) and
    /// [`apply_quote`](Self::apply_quote).
    pub async fn requote(&mut self, value: &str) -> core::result::Result<SwapState, SwapFailure> {
        if let Some(pending) = self.set_input(value)? {
            let response = pending.resolve().await;
            self.apply_quote(response)?;
        }
        Ok(self.state)
    }

    /// Submits the displayed quote.
    ///
    /// The trade is re-priced against fresh reserves first.  When the
    /// router's allowance is short, the approval is sent and must confirm
    /// before the swap is sent.  Nothing is retried.
    ///
    /// # Errors
    ///
    /// Any failure is returned as a [`SwapFailure`]; the session is then
    /// idle with the entered amount kept.  Calling this without a ready
    /// quote fails with [`SwapError::InvalidTransition`] and changes
    /// nothing.
    pub async fn execute(&mut self) -> core::result::Result<ExecutionReport, SwapFailure> {
        if self.state != SwapState::QuoteReady || self.quote.is_none() {
            return Err(SwapError::InvalidTransition {
                from: self.state.name(),
                to: SwapState::AwaitingConfirmation.name(),
            }
            .into());
        }
        self.sequencer.invalidate();

        match self.submit().await {
            Ok(report) => {
                self.state.transition(SwapState::Success)?;
                info!(tx = %report.swap.tx_hash, block = ?report.swap.block_number, "swap confirmed");
                self.form.clear_amounts();
                self.quote = None;
                self.quote_error = None;
                self.state.transition(SwapState::Idle)?;
                Ok(report)
            }
            Err(error) => {
                self.form.set_output(String::new());
                self.quote = None;
                Err(self.fail(error))
            }
        }
    }

    async fn submit(&mut self) -> Result<ExecutionReport> {
        let chain = self.config.chain(self.form.chain())?.clone();
        let wallet_chain = self.wallet.chain_id().await?;
        if wallet_chain != chain.chain {
            return Err(SwapError::UnsupportedChain(wallet_chain.id()));
        }
        let recipient = self.wallet.address().await?;

        let request = self.form.trade_request()?;
        let quote = fetch_quote(self.reader.as_ref(), &chain, self.engine, request).await?;
        self.form.set_output(quote.formatted_amount_out());

        let allowance = if quote.token_in().is_native() {
            Amount::ZERO
        } else {
            self.reader
                .get_allowance(quote.token_in().address(), recipient, chain.router)
                .await?
        };
        let deadline = Deadline::after(unix_now(), self.config.deadline_window());
        let plan = ExecutionPlanner::new(chain.router)
            .with_approval_policy(self.config.approval_policy)
            .plan(&quote, self.form.slippage(), deadline, recipient, allowance)?;
        self.quote = Some(quote);

        let approval = match &plan.approval_step {
            Some(step) => {
                self.state.transition(SwapState::AwaitingApproval)?;
                info!(token = %step.token, spender = %step.spender, amount = %step.amount, "sending approval");
                let receipt = self.send_and_confirm(step.transaction.clone()).await;
                Some(receipt.map_err(|e| match e {
                    SwapError::SubmissionReverted(reason) => {
                        warn!(%reason, "approval reverted");
                        SwapError::AllowanceInsufficient
                    }
                    other => other,
                })?)
            }
            None => None,
        };

        self.state.transition(SwapState::AwaitingConfirmation)?;
        info!(
            operation = %plan.swap_step.operation,
            amount_in = %plan.swap_step.amount_in,
            amount_out_min = %plan.swap_step.amount_out_min,
            path = %plan.swap_step.path,
            "sending swap"
        );
        let swap = self.send_and_confirm(plan.swap_step.transaction.clone()).await?;
        Ok(ExecutionReport {
            plan,
            approval,
            swap,
        })
    }

    async fn send_and_confirm(&self, tx: TransactionRequest) -> Result<TxReceipt> {
        let tx_hash = self.wallet.send_transaction(tx).await?;
        info!(%tx_hash, "transaction submitted");
        self.wallet.wait_for_confirmation(tx_hash).await?.into_result()
    }

    fn begin_quote(&mut self) -> Result<Option<PendingQuote<R>>> {
        if self.form.input().trim().is_empty() {
            self.reset_quote()?;
            return Ok(None);
        }
        let ticket = self.sequencer.issue();
        self.state.transition(SwapState::Quoting)?;
        self.quote = None;
        self.form.set_output(String::new());

        let request = match self.form.trade_request() {
            Ok(request) => request,
            Err(reason) => {
                // Nothing to fetch; resolve locally so the ticket order holds.
                let response = QuoteResponse { ticket, result: Err(reason) };
                return match self.apply_quote(response) {
                    Ok(_) => Ok(None),
                    Err(failure) => Err(failure.error),
                };
            }
        };
        Ok(Some(PendingQuote {
            ticket,
            request,
            reader: Arc::clone(&self.reader),
            chain: self.config.chain(self.form.chain())?.clone(),
            engine: self.engine,
        }))
    }

    fn reset_quote(&mut self) -> Result<()> {
        self.sequencer.invalidate();
        self.quote = None;
        self.quote_error = None;
        self.form.set_output(String::new());
        if self.state != SwapState::Idle {
            self.state.transition(SwapState::Idle)?;
        }
        Ok(())
    }

    fn ensure_editable(&self) -> Result<()> {
        if self.state.is_submitting() {
            return Err(SwapError::InvalidTransition {
                from: self.state.name(),
                to: SwapState::Quoting.name(),
            });
        }
        Ok(())
    }

    fn fail(&mut self, error: SwapError) -> SwapFailure {
        warn!(%error, state = %self.state, "swap attempt failed");
        if self.state.transition(SwapState::Failed).is_ok() {
            let _ = self.state.transition(SwapState::Idle);
        } else {
            self.state = SwapState::Idle;
        }
        error.into()
    }
}

impl<R, W> core::fmt::Debug for SwapSession<R, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SwapSession")
            .field("state", &self.state)
            .field("form", &self.form)
            .field("quote", &self.quote)
            .finish_non_exhaustive()
    }
}

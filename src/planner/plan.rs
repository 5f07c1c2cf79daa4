//! Two-step execution plans: optional approval, then the swap.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::path::minimum_output;
use crate::domain::{Amount, Deadline, Slippage, SwapPath, TokenAddress, TradeQuote};
use crate::error::Result;
use crate::router::{approve, SwapOperation, TransactionRequest};

/// How much allowance the approval step grants the router.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalPolicy {
    /// Exactly the swap's input amount.
    #[default]
    Exact,
    /// `2^256 - 1`, so later swaps of the same token skip approval.
    Infinite,
}

impl ApprovalPolicy {
    /// Allowance to request for a swap spending `amount_in`.
    pub const fn amount_for(&self, amount_in: Amount) -> Amount {
        match self {
            Self::Exact => amount_in,
            Self::Infinite => Amount::MAX,
        }
    }
}

/// `token.approve(router, amount)`, which must be confirmed before the swap
/// is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalStep {
    /// Token being approved.
    pub token: TokenAddress,
    /// Router receiving the allowance.
    pub spender: Address,
    /// Allowance granted.
    pub amount: Amount,
    /// Transaction to sign.
    pub transaction: TransactionRequest,
}

/// The router call that performs the swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapStep {
    /// Router entry point.
    pub operation: SwapOperation,
    /// Exact input.
    pub amount_in: Amount,
    /// Slippage-adjusted floor; the router reverts below it.
    pub amount_out_min: Amount,
    /// Hop sequence.
    pub path: SwapPath,
    /// Receiver of the output.
    pub recipient: Address,
    /// Router deadline.
    pub deadline: Deadline,
    /// Transaction to sign.
    pub transaction: TransactionRequest,
}

/// Ordered external effects for one swap attempt.
///
/// When an approval step is present it must reach confirmation before the
/// swap step is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionPlan {
    /// Approval, if the current allowance is insufficient.
    pub approval_step: Option<ApprovalStep>,
    /// The swap itself.
    pub swap_step: SwapStep,
}

impl ExecutionPlan {
    /// Returns `true` if an approval must be confirmed first.
    #[must_use]
    pub const fn needs_approval(&self) -> bool {
        self.approval_step.is_some()
    }
}

/// Turns quotes into router calls for a fixed router contract.
///
/// # Examples
///
/// ```
/// use alloy_primitives::Address;
/// use hydra_swap::domain::{Amount, BasisPoints, ChainId, Deadline, Decimals, Slippage, SwapPath, Token, TokenAddress, TradeQuote, TradeRequest};
/// use hydra_swap::planner::ExecutionPlanner;
///
/// let a = Token::new(ChainId::Mainnet, TokenAddress::from_bytes([1u8; 20]), Decimals::ETHER, "A", "A");
/// let b = Token::new(ChainId::Mainnet, TokenAddress::from_bytes([2u8; 20]), Decimals::ETHER, "B", "B");
/// let path = SwapPath::direct(a.address(), b.address()).expect("valid path");
/// let request = TradeRequest::new(a, b, Amount::new(1_000)).expect("valid");
/// let quote = TradeQuote::new(request, Amount::new(1991), path, BasisPoints::new(45));
///
/// let planner = ExecutionPlanner::new(Address::repeat_byte(0x7a));
/// let plan = planner
///     .plan(&quote, Slippage::DEFAULT, Deadline::at(2_000_000_000), Address::repeat_byte(0xee), Amount::ZERO)
///     .expect("plannable");
/// assert!(plan.needs_approval());
/// assert_eq!(plan.swap_step.amount_out_min, Amount::new(1982));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionPlanner {
    router: Address,
    approval_policy: ApprovalPolicy,
}

impl ExecutionPlanner {
    /// Creates a planner granting exact approvals to `router`.
    #[must_use]
    pub const fn new(router: Address) -> Self {
        Self {
            router,
            approval_policy: ApprovalPolicy::Exact,
        }
    }

    /// Sets the approval policy.
    #[must_use]
    pub const fn with_approval_policy(mut self, policy: ApprovalPolicy) -> Self {
        self.approval_policy = policy;
        self
    }

    /// Router contract address.
    #[must_use]
    pub const fn router(&self) -> Address {
        self.router
    }

    /// Builds the plan for `quote`.
    ///
    /// `allowance` is the router's current allowance over the input token;
    /// it is ignored for native-currency input, which is sent as value.
    ///
    /// # Errors
    ///
    /// - [`SwapError::InvalidToken`](crate::error::SwapError::InvalidToken)
    ///   if both endpoints are native.
    /// - [`SwapError::Overflow`](crate::error::SwapError::Overflow) if the
    ///   slippage deduction overflows.
    pub fn plan(
        &self,
        quote: &TradeQuote,
        slippage: Slippage,
        deadline: Deadline,
        recipient: Address,
        allowance: Amount,
    ) -> Result<ExecutionPlan> {
        let operation = SwapOperation::select(quote.token_in(), quote.token_out())?;
        let amount_in = quote.amount_in();
        let amount_out_min = minimum_output(quote.amount_out(), slippage)?;

        let approval_step = if operation.spends_allowance() && allowance < amount_in {
            let token = quote.token_in().address();
            let amount = self.approval_policy.amount_for(amount_in);
            Some(ApprovalStep {
                token,
                spender: self.router,
                amount,
                transaction: approve(token, self.router, amount),
            })
        } else {
            None
        };

        let transaction = operation.encode(
            self.router,
            amount_in,
            amount_out_min,
            quote.path(),
            recipient,
            deadline,
        );
        debug!(
            %operation,
            %amount_in,
            %amount_out_min,
            %slippage,
            needs_approval = approval_step.is_some(),
            "planned swap"
        );

        Ok(ExecutionPlan {
            approval_step,
            swap_step: SwapStep {
                operation,
                amount_in,
                amount_out_min,
                path: quote.path().clone(),
                recipient,
                deadline,
                transaction,
            },
        })
    }
}

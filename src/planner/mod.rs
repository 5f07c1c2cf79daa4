//! Execution planner: from a quote to the exact router calls.
//!
//! Applies the trader's slippage tolerance, picks the path and the router
//! operation, and decides whether an approval must precede the swap.

mod path;
mod plan;

pub use crate::router::SwapOperation;
pub use path::{minimum_output, select_path};
pub use plan::{ApprovalPolicy, ApprovalStep, ExecutionPlan, ExecutionPlanner, SwapStep};

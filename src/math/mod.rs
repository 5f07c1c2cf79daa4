//! Arithmetic utilities for swap calculations.
//!
//! This module provides [`CheckedArithmetic`] for overflow-safe operations
//! on [`Amount`](crate::domain::Amount), and the raw 256-bit helpers
//! [`div_round`] and [`mul_div`] with explicit rounding direction.

mod checked;
mod rounding;

pub use checked::CheckedArithmetic;
pub use rounding::{div_round, mul_div};

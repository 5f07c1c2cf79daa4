//! Explicit rounding direction for integer division.

/// Direction in which an integer division is rounded.
///
/// Every division in the swap math names its rounding so that results
/// match the router contract bit for bit:
///
/// | Quantity | Direction |
/// |----------|-----------|
/// | Quoted output | [`Rounding::Down`] |
/// | Required input (exact-out) | [`Rounding::Up`] |
/// | Slippage deduction | [`Rounding::Down`] |
/// | Price impact | [`Rounding::Up`] |
///
/// # Examples
///
/// ```
/// use hydra_swap::domain::Rounding;
///
/// assert!(Rounding::Up.is_up());
/// assert!(Rounding::Down.is_down());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Round towards positive infinity (ceiling).
    Up,
    /// Round towards zero (floor).
    Down,
}

impl Rounding {
    /// Returns `true` if this is [`Rounding::Up`].
    #[must_use]
    pub const fn is_up(&self) -> bool {
        matches!(self, Self::Up)
    }

    /// Returns `true` if this is [`Rounding::Down`].
    #[must_use]
    pub const fn is_down(&self) -> bool {
        matches!(self, Self::Down)
    }
}

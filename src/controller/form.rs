//! Editable swap form state.

use crate::config::TokenList;
use crate::domain::{Amount, ChainId, Slippage, Token, TradeRequest};
use crate::error::{Result, SwapError};

/// Longest accepted amount entry, in characters.
pub const MAX_INPUT_LENGTH: usize = 25;

/// A side of the swap form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The token being sold.
    Input,
    /// The token being bought.
    Output,
}

/// The trader's current selections.
///
/// Holds the entered amount as typed, the selected pair, the slippage
/// tolerance and the last known balance of the input token.  Every token
/// change clears both amount fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapForm {
    chain: ChainId,
    token_in: Token,
    token_out: Token,
    input: String,
    output: String,
    slippage: Slippage,
    balance: Option<Amount>,
}

impl SwapForm {
    /// A blank form preselecting the first two tokens listed for `chain`.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if fewer than two tokens
    /// are listed for `chain`.
    pub fn new(chain: ChainId, tokens: &TokenList, slippage: Slippage) -> Result<Self> {
        let (token_in, token_out) = tokens.default_pair(chain)?;
        Ok(Self {
            chain,
            token_in,
            token_out,
            input: String::new(),
            output: String::new(),
            slippage,
            balance: None,
        })
    }

    /// Selected network.
    #[must_use]
    pub const fn chain(&self) -> ChainId {
        self.chain
    }

    /// Token being sold.
    #[must_use]
    pub const fn token_in(&self) -> &Token {
        &self.token_in
    }

    /// Token being bought.
    #[must_use]
    pub const fn token_out(&self) -> &Token {
        &self.token_out
    }

    /// Entered amount, as typed.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Displayed output amount; empty when no quote is shown.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Slippage tolerance.
    #[must_use]
    pub const fn slippage(&self) -> Slippage {
        self.slippage
    }

    /// Last known balance of the input token.
    #[must_use]
    pub const fn balance(&self) -> Option<Amount> {
        self.balance
    }

    /// Stores `value` as the entered amount and returns what was kept.
    ///
    /// The entry is cut to [`MAX_INPUT_LENGTH`] characters, and an amount
    /// above the known balance is replaced by the balance.  Unparseable
    /// entries are kept as typed; they simply yield no quote.
    pub fn set_input(&mut self, value: &str) -> &str {
        let mut entry: String = value.chars().take(MAX_INPUT_LENGTH).collect();
        if let (Ok(amount), Some(balance)) = (self.token_in.parse_amount(&entry), self.balance) {
            if amount > balance {
                entry = self.token_in.format_amount(balance);
            }
        }
        self.input = entry;
        &self.input
    }

    /// Enters the full balance, if known.
    pub fn set_max(&mut self) -> Option<&str> {
        let balance = self.balance?;
        self.input = self.token_in.format_amount(balance);
        Some(&self.input)
    }

    pub(crate) fn set_output(&mut self, output: String) {
        self.output = output;
    }

    /// Selects `token` on `side`.
    ///
    /// Picking the token already selected on the other side flips the pair.
    /// Both amount fields are cleared either way.  Returns `true` if the
    /// pair was flipped.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidToken`] if `token` is on another network.
    pub fn select_token(&mut self, side: Side, token: Token) -> Result<bool> {
        if token.chain_id() != self.chain {
            return Err(SwapError::InvalidToken("token is on another network"));
        }
        let (this, other) = match side {
            Side::Input => (&self.token_in, &self.token_out),
            Side::Output => (&self.token_out, &self.token_in),
        };
        if token == *other {
            self.flip();
            return Ok(true);
        }
        if token != *this {
            if side == Side::Input {
                self.balance = None;
            }
            match side {
                Side::Input => self.token_in = token,
                Side::Output => self.token_out = token,
            }
        }
        self.clear_amounts();
        Ok(false)
    }

    /// Swaps the input and output tokens and clears both amounts.
    pub fn flip(&mut self) {
        core::mem::swap(&mut self.token_in, &mut self.token_out);
        self.balance = None;
        self.clear_amounts();
    }

    /// Switches network and resets the form to that network's default
    /// pair.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidConfiguration`] if fewer than two tokens
    /// are listed for `chain`; the form is left unchanged.
    pub fn switch_chain(&mut self, chain: ChainId, tokens: &TokenList) -> Result<()> {
        let (token_in, token_out) = tokens.default_pair(chain)?;
        self.chain = chain;
        self.token_in = token_in;
        self.token_out = token_out;
        self.balance = None;
        self.clear_amounts();
        Ok(())
    }

    /// Sets the slippage tolerance.
    pub fn set_slippage(&mut self, slippage: Slippage) {
        self.slippage = slippage;
    }

    /// Records a fresh balance of the input token.
    pub fn set_balance(&mut self, balance: Amount) {
        self.balance = Some(balance);
    }

    /// Empties both amount fields.
    pub fn clear_amounts(&mut self) {
        self.input.clear();
        self.output.clear();
    }

    /// The trade described by the form.
    ///
    /// # Errors
    ///
    /// Returns [`SwapError::InvalidAmount`] if the entry is empty,
    /// unparseable or zero.
    pub fn trade_request(&self) -> Result<TradeRequest> {
        let amount = self.token_in.parse_amount(&self.input)?;
        TradeRequest::new(self.token_in.clone(), self.token_out.clone(), amount)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{Decimals, TokenAddress};

    fn form() -> SwapForm {
        let Ok(f) = SwapForm::new(ChainId::Mainnet, &TokenList::builtin(), Slippage::DEFAULT) else {
            panic!("builtin list has a default pair");
        };
        f
    }

    fn dai() -> Token {
        Token::new(
            ChainId::Mainnet,
            TokenAddress::from_bytes([0x6b; 20]),
            Decimals::ETHER,
            "DAI",
            "Dai",
        )
    }

    #[test]
    fn starts_with_default_pair() {
        let f = form();
        assert_eq!(f.token_in().symbol(), "USDC");
        assert!(f.token_out().is_native());
        assert!(f.input().is_empty());
    }

    #[test]
    fn input_is_truncated() {
        let mut f = form();
        let long = "1".repeat(40);
        assert_eq!(f.set_input(&long).len(), MAX_INPUT_LENGTH);
    }

    #[test]
    fn input_is_clamped_to_balance() {
        let mut f = form();
        f.set_balance(Amount::new(2_500_000));
        assert_eq!(f.set_input("3"), "2.5");
        assert_eq!(f.set_input("1.25"), "1.25");
    }

    #[test]
    fn unparseable_input_is_kept() {
        let mut f = form();
        f.set_balance(Amount::new(1));
        assert_eq!(f.set_input("abc"), "abc");
        assert!(matches!(f.trade_request(), Err(SwapError::InvalidAmount(_))));
    }

    #[test]
    fn max_uses_balance() {
        let mut f = form();
        assert_eq!(f.set_max(), None);
        f.set_balance(Amount::new(1_000_000));
        assert_eq!(f.set_max(), Some("1.0"));
    }

    #[test]
    fn selecting_other_side_flips() {
        let mut f = form();
        f.set_input("1");
        let eth = f.token_out().clone();
        let Ok(flipped) = f.select_token(Side::Input, eth) else {
            panic!("same chain");
        };
        assert!(flipped);
        assert!(f.token_in().is_native());
        assert_eq!(f.token_out().symbol(), "USDC");
        assert!(f.input().is_empty());
    }

    #[test]
    fn selecting_new_token_clears_amounts() {
        let mut f = form();
        f.set_balance(Amount::new(5));
        f.set_input("0.000001");
        let Ok(flipped) = f.select_token(Side::Output, dai()) else {
            panic!("same chain");
        };
        assert!(!flipped);
        assert_eq!(f.token_out().symbol(), "DAI");
        assert!(f.input().is_empty());
        assert_eq!(f.balance(), Some(Amount::new(5)));
    }

    #[test]
    fn foreign_token_rejected() {
        let mut f = form();
        let sepolia_eth = Token::native(ChainId::Sepolia, "ETH", "ETH");
        assert!(f.select_token(Side::Output, sepolia_eth).is_err());
    }

    #[test]
    fn chain_switch_resets_pair() {
        let mut f = form();
        f.set_input("5");
        let Ok(()) = f.switch_chain(ChainId::Sepolia, &TokenList::builtin()) else {
            panic!("sepolia listed");
        };
        assert_eq!(f.chain(), ChainId::Sepolia);
        assert_eq!(f.token_in().chain_id(), ChainId::Sepolia);
        assert_eq!(f.token_in().symbol(), "USDC");
        assert!(f.input().is_empty());
    }

    #[test]
    fn trade_request_uses_token_decimals() {
        let mut f = form();
        f.set_input("1.5");
        let Ok(request) = f.trade_request() else {
            panic!("valid amount");
        };
        assert_eq!(request.amount_in(), Amount::new(1_500_000));
    }
}

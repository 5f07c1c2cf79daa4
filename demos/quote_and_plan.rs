//! Offline quoting and execution planning.
//!
//! Prices a USDC -> ETH trade against fixed reserves, applies a 0.5%
//! slippage tolerance and prints the approval and swap calls the router
//! would receive.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hydra_swap=debug cargo run --example quote_and_plan
//! ```

use alloy_primitives::Address;
use hydra_swap::config::{ChainConfig, TokenList};
use hydra_swap::domain::{
    Amount, ChainId, Deadline, FeeTier, ReservePair, Slippage, TradeRequest,
};
use hydra_swap::planner::{select_path, ExecutionPlanner};
use hydra_swap::quote::{get_amount_in, get_amount_out, QuoteEngine};
use hydra_swap::units::format_balance;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Quote and plan (Uniswap V2, x · y = k) ===\n");

    // ── 1. The reference numbers ────────────────────────────────────────
    let out = get_amount_out(
        Amount::new(1_000),
        Amount::new(1_000_000),
        Amount::new(2_000_000),
        FeeTier::UNISWAP_V2,
    )?;
    let min = Slippage::DEFAULT.minimum_output(out)?;
    println!("1000 in against (1,000,000 / 2,000,000): {out} out, {min} minimum at {}", Slippage::DEFAULT);
    let back = get_amount_in(out, Amount::new(1_000_000), Amount::new(2_000_000), FeeTier::UNISWAP_V2)?;
    println!("Exact-output inverse for {out}: {back} in\n");

    // ── 2. Tokens and network ───────────────────────────────────────────
    let chain = ChainConfig::mainnet();
    let tokens = TokenList::builtin();
    let (usdc, eth) = tokens.default_pair(ChainId::Mainnet)?;
    let weth = chain.wrapped_native_token();
    println!("Selling {} for {} on {}", usdc.symbol(), eth.symbol(), chain.chain);

    // ── 3. Path and reserves ────────────────────────────────────────────
    let path = select_path(&usdc, &eth, &weth, true)?;
    let pair = chain.pair_address(usdc.address(), weth.address())?;
    println!("Path: {path}");
    println!("Pair: {pair}");

    // 2M USDC against 1000 WETH; USDC sorts first, so it is token0.
    let snapshot = ReservePair::new(
        Amount::new(2_000_000 * 10u128.pow(6)),
        Amount::new(1_000 * 10u128.pow(18)),
        0,
    );
    let mut reserves = Vec::new();
    for (from, to) in path.legs() {
        reserves.push(snapshot.oriented_leg(from, to)?);
    }

    // ── 4. Quote ────────────────────────────────────────────────────────
    let amount_in = usdc.parse_amount("25000")?;
    let request = TradeRequest::new(usdc.clone(), eth.clone(), amount_in)?;
    let quote = QuoteEngine::default().quote(request, path, &reserves)?;
    println!(
        "\nQuote: {} {} -> {} {} (price impact {})",
        format_balance(&usdc.format_amount(quote.amount_in())),
        usdc.symbol(),
        format_balance(&quote.formatted_amount_out()),
        eth.symbol(),
        quote.price_impact()
    );

    // ── 5. Plan ─────────────────────────────────────────────────────────
    let trader = Address::repeat_byte(0xee);
    let plan = ExecutionPlanner::new(chain.router).plan(
        &quote,
        Slippage::from_percent_str("0.5")?,
        Deadline::from_now(Deadline::DEFAULT_WINDOW),
        trader,
        Amount::ZERO,
    )?;

    if let Some(step) = &plan.approval_step {
        println!("\nStep 1: approve {} for {}", step.spender, step.amount);
        println!("  to:   {}", step.transaction.to);
        println!("  data: {}", step.transaction.data);
    }
    let swap = &plan.swap_step;
    println!("\nStep {}: {}", if plan.needs_approval() { 2 } else { 1 }, swap.operation);
    println!("  minimum out: {} {}", eth.format_amount(swap.amount_out_min), eth.symbol());
    println!("  deadline:    {}", swap.deadline.as_secs());
    println!("  to:          {}", swap.transaction.to);
    println!("  value:       {}", swap.transaction.value);
    println!("  data:        {}", swap.transaction.data);

    Ok(())
}

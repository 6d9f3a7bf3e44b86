//! Constant-product pool lifecycle.
//!
//! Bootstraps a pool, trades against it, adds a second provider, shows how
//! the reserve product drifts from `k_last`, and withdraws.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hydra_cpmm=debug cargo run --example pool_lifecycle
//! ```

use hydra_cpmm::config::PoolConfig;
use hydra_cpmm::domain::{Address, Amount};
use hydra_cpmm::ledger::InMemoryLedger;
use hydra_cpmm::pool::Pool;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Constant Product Pool ===\n");

    // ── 1. Accounts and assets ──────────────────────────────────────────
    let usdc = Address::from_bytes([1u8; 32]);
    let weth = Address::from_bytes([2u8; 32]);
    let pool_addr = Address::from_bytes([100u8; 32]);
    let alice = Address::from_bytes([10u8; 32]);
    let bob = Address::from_bytes([11u8; 32]);

    let mut ledger = InMemoryLedger::with_assets(&[usdc, weth]);
    for who in [alice, bob] {
        for asset in [usdc, weth] {
            ledger.mint(&asset, &who, Amount::new(1_000_000))?;
            ledger.approve(&asset, &who, &pool_addr, Amount::MAX)?;
        }
    }

    // ── 2. Create the pool ──────────────────────────────────────────────
    let config = PoolConfig::new(pool_addr, usdc, weth)?;
    let mut pool = Pool::from_config(&config, ledger)?;
    println!("Pool: {config}");

    // ── 3. Bootstrap deposit sets the price and k_last ──────────────────
    let deposit = pool.add_liquidity(alice, Amount::new(1_000), Amount::new(4_000))?;
    println!("\n--- Bootstrap ---");
    println!("  {deposit}");
    println!("  State:       {}", pool.state());

    // ── 4. Swap 100 USDC for WETH ───────────────────────────────────────
    let quote = pool.quote_swap(usdc, weth, Amount::new(100))?;
    let swap = pool.swap(bob, usdc, weth, Amount::new(100))?;
    println!("\n--- Swap ---");
    println!("  Quoted:      {quote}");
    println!("  Executed:    {swap}");
    println!("  State:       {}", pool.state());
    println!("  Drift:       {:?}", pool.state().invariant_drift());

    // ── 5. Second provider ──────────────────────────────────────────────
    let second = pool.add_liquidity(bob, Amount::new(550), Amount::new(2_000))?;
    println!("\n--- Proportional deposit ---");
    println!("  {second}");
    println!("  Providers:   {}", pool.liquidity_providers());
    println!("  Drift:       {:?}", pool.state().invariant_drift());

    // ── 6. Withdraw ─────────────────────────────────────────────────────
    let withdrawal = pool.remove_liquidity(alice, pool.liquidity_of(&alice))?;
    println!("\n--- Withdrawal ---");
    println!("  {withdrawal}");
    println!("  State:       {}", pool.state());

    // ── 7. Event log ────────────────────────────────────────────────────
    println!("\n--- Events ---");
    for event in pool.drain_events() {
        println!("  {event}");
    }

    println!("\n=== Done ===");
    Ok(())
}

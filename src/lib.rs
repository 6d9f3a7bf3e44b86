//! # Hydra CPMM
//!
//! A two-asset constant-product liquidity pool.  Liquidity providers
//! deposit both assets and receive shares; traders swap one asset for the
//! other at a price set by the reserve ratio; providers burn shares to
//! withdraw their slice of the reserves.
//!
//! The pool does not hold assets itself.  Balances and transfers belong to
//! an external [`AssetLedger`](traits::AssetLedger), which the pool reads
//! and drives.  [`InMemoryLedger`](ledger::InMemoryLedger) is a complete
//! reference implementation.
//!
//! # Quick Start
//!
//! ```toml
//! [dependencies]
//! hydra-cpmm = "0.1"
//! ```
//!
//! ## Create a pool, provide liquidity and swap
//!
//! ```rust
//! use hydra_cpmm::config::PoolConfig;
//! use hydra_cpmm::domain::{Address, Amount, Liquidity};
//! use hydra_cpmm::ledger::InMemoryLedger;
//! use hydra_cpmm::pool::Pool;
//!
//! // 1. Two assets and the accounts involved
//! let usdc = Address::from_bytes([1u8; 32]);
//! let weth = Address::from_bytes([2u8; 32]);
//! let pool_addr = Address::from_bytes([100u8; 32]);
//! let lp = Address::from_bytes([10u8; 32]);
//! let trader = Address::from_bytes([11u8; 32]);
//!
//! // 2. Fund both accounts and let the pool pull from them
//! let mut ledger = InMemoryLedger::with_assets(&[usdc, weth]);
//! for who in [lp, trader] {
//!     for asset in [usdc, weth] {
//!         ledger.mint(&asset, &who, Amount::new(1_000_000)).expect("mint");
//!         ledger.approve(&asset, &who, &pool_addr, Amount::MAX).expect("approve");
//!     }
//! }
//!
//! // 3. Build the pool from a validated configuration
//! let config = PoolConfig::new(pool_addr, usdc, weth).expect("valid config");
//! let mut pool = Pool::from_config(&config, ledger).expect("pool created");
//!
//! // 4. The first deposit sets the price and mints sqrt(a * b) shares
//! let deposit = pool
//!     .add_liquidity(lp, Amount::new(1_000), Amount::new(4_000))
//!     .expect("bootstrap deposit");
//! assert_eq!(deposit.liquidity(), Liquidity::new(2_000));
//! assert_eq!(pool.k_last(), Amount::new(4_000_000));
//!
//! // 5. Sell 100 USDC for WETH
//! let swap = pool.swap(trader, usdc, weth, Amount::new(100)).expect("swap");
//! assert_eq!(swap.amount_out(), Amount::new(363));
//! assert_eq!(pool.reserves(), (Amount::new(1_100), Amount::new(3_637)));
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Consumer    │  PoolConfig + an AssetLedger
//! └──────┬──────┘
//!        │ Pool::from_config
//!        ▼
//! ┌─────────────┐
//! │    Pool      │  swap / add_liquidity / remove_liquidity, quotes, events
//! └──────┬──────┘
//!        │ settlement journal (pull / push, unwind on failure)
//!        ▼
//! ┌─────────────┐
//! │ AssetLedger  │  balance_of / transfer / transfer_from
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Value types: [`Address`](domain::Address), [`Amount`](domain::Amount), [`Liquidity`](domain::Liquidity), receipts, events |
//! | [`traits`] | The [`AssetLedger`](traits::AssetLedger) capability the pool drives |
//! | [`ledger`] | [`InMemoryLedger`](ledger::InMemoryLedger) reference ledger |
//! | [`config`] | [`PoolConfig`](config::PoolConfig) blueprint |
//! | [`pool`]   | [`Pool`](pool::Pool), [`PoolState`](pool::PoolState) snapshot |
//! | [`math`]   | Checked arithmetic, `mul_div`, integer square root |
//! | [`error`]  | [`AmmError`](error::AmmError) and [`LedgerError`](error::LedgerError) |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod config;
pub mod domain;
pub mod error;
pub mod ledger;
pub mod math;
pub mod pool;
pub mod prelude;
pub mod traits;

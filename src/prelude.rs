//! Convenience re-exports for common types and traits.
//!
//! ```rust
//! use hydra_cpmm::prelude::*;
//! ```

// Domain types
pub use crate::domain::{
    Address, Amount, AssetPair, DepositReceipt, Liquidity, PoolEvent, Side, SwapReceipt,
    WithdrawalReceipt,
};

// Capabilities
pub use crate::traits::AssetLedger;

// Math utilities
pub use crate::math::CheckedArithmetic;

// Configuration
pub use crate::config::PoolConfig;

// Pool and reference ledger
pub use crate::ledger::InMemoryLedger;
pub use crate::pool::{InvariantDrift, Pool, PoolState};

// Error types
pub use crate::error::{AmmError, LedgerError, Result};

//! The constant-product pool and its internal bookkeeping.
//!
//! | Item | Role |
//! |------|------|
//! | [`Pool`] | Swap, deposit and withdrawal operations over an [`AssetLedger`](crate::traits::AssetLedger) |
//! | [`PoolState`] | Snapshot of reserves, `k_last` and share supply |
//! | [`InvariantDrift`] | How the live reserve product compares with `k_last` |
//! | [`swap_output`] | The pure swap formula, usable without a pool |

mod constant_product;
mod settlement;
mod shares;
mod state;

#[cfg(test)]
mod proptest_properties;

pub use constant_product::{swap_output, Pool};
pub use state::{InvariantDrift, PoolState};

//! Point-in-time view of a pool's counters.

use core::cmp::Ordering;
use core::fmt;

use crate::domain::{Amount, Liquidity};

/// How the product of the cached reserves compares with `k_last`.
///
/// Swaps price against `k_last`, not against the live product, so any
/// drift changes what the next swap pays out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvariantDrift {
    /// The reserve product equals `k_last`.
    AtBaseline,
    /// The reserve product exceeds `k_last` by the given amount.
    Above(Amount),
    /// The reserve product is below `k_last` by the given amount.
    Below(Amount),
}

/// A snapshot of the pool's reserve pair, invariant baseline and share
/// supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolState {
    /// Cached reserve of asset A.
    pub reserve_a: Amount,
    /// Cached reserve of asset B.
    pub reserve_b: Amount,
    /// Invariant baseline seeded by the bootstrap deposit.
    pub k_last: Amount,
    /// Outstanding liquidity shares.
    pub total_supply: Liquidity,
}

impl PoolState {
    /// Returns `reserve_a * reserve_b`, or `None` on overflow.
    #[must_use]
    pub const fn live_product(&self) -> Option<Amount> {
        self.reserve_a.checked_mul(&self.reserve_b)
    }

    /// Compares the live product with `k_last`.
    ///
    /// Returns `None` if the live product overflows `u128`.
    #[must_use]
    pub fn invariant_drift(&self) -> Option<InvariantDrift> {
        let product = self.live_product()?;
        Some(match product.cmp(&self.k_last) {
            Ordering::Equal => InvariantDrift::AtBaseline,
            Ordering::Greater => InvariantDrift::Above(Amount::new(product.get() - self.k_last.get())),
            Ordering::Less => InvariantDrift::Below(Amount::new(self.k_last.get() - product.get())),
        })
    }
}

impl fmt::Display for PoolState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "reserves=({}, {}) k_last={} supply={}",
            self.reserve_a, self.reserve_b, self.k_last, self.total_supply
        )
    }
}

//! Configuration for a two-asset constant-product pool.

use core::fmt;

use crate::domain::{Address, AssetPair};
use crate::error::AmmError;

/// Immutable parameters of a pool: the account that holds its reserves and
/// the two assets it trades.
///
/// There are no initial reserves: a pool starts empty and its price is set
/// by the first deposit.
///
/// # Validation
///
/// - The two assets must differ (checked by [`AssetPair::new`]).
/// - The pool account must not be the zero address.
/// - The pool account must not be one of the assets.
///
/// Whether the assets actually exist is checked against the ledger when the
/// pool is built, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PoolConfig {
    pool_address: Address,
    pair: AssetPair,
}

impl PoolConfig {
    /// Creates a validated `PoolConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any rule above is
    /// broken.
    pub fn new(pool_address: Address, asset_a: Address, asset_b: Address) -> Result<Self, AmmError> {
        let config = Self {
            pool_address,
            pair: AssetPair::new(asset_a, asset_b)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration invariants.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if any rule is broken.
    pub fn validate(&self) -> Result<(), AmmError> {
        if self.pair.asset_a() == self.pair.asset_b() {
            return Err(AmmError::InvalidConfiguration(
                "asset pair requires two distinct addresses",
            ));
        }
        if self.pool_address.is_zero() {
            return Err(AmmError::InvalidConfiguration(
                "pool address must not be zero",
            ));
        }
        if self.pair.contains(&self.pool_address) {
            return Err(AmmError::InvalidConfiguration(
                "pool address must differ from both assets",
            ));
        }
        Ok(())
    }

    /// Returns the account holding the pool's reserves.
    #[must_use]
    pub const fn pool_address(&self) -> Address {
        self.pool_address
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }
}

impl fmt::Display for PoolConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Pool({} / {} @ {})",
            self.pair.asset_a(),
            self.pair.asset_b(),
            self.pool_address
        )
    }
}

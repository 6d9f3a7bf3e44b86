//! The two distinct assets a pool trades.

use super::Address;
use crate::error::AmmError;

/// Which side of an [`AssetPair`] an asset sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Asset A.
    A,
    /// Asset B.
    B,
}

/// An ordered pair of distinct assets `(A, B)`.
///
/// Unlike a canonically sorted pair, the order is exactly the order the
/// pool was created with: whichever asset the creator names first is asset
/// A for the lifetime of the pool.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Address, AssetPair, Side};
///
/// let usdc = Address::from_bytes([2u8; 32]);
/// let weth = Address::from_bytes([1u8; 32]);
///
/// let pair = AssetPair::new(usdc, weth).expect("distinct assets");
/// assert_eq!(pair.asset_a(), usdc);
/// assert_eq!(pair.side_of(&weth), Some(Side::B));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    asset_a: Address,
    asset_b: Address,
}

impl AssetPair {
    /// Creates a new pair, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidConfiguration`] if both handles are the
    /// same address.
    pub fn new(asset_a: Address, asset_b: Address) -> Result<Self, AmmError> {
        if asset_a == asset_b {
            return Err(AmmError::InvalidConfiguration(
                "asset pair requires two distinct addresses",
            ));
        }
        Ok(Self { asset_a, asset_b })
    }

    /// Returns asset A.
    #[must_use]
    pub const fn asset_a(&self) -> Address {
        self.asset_a
    }

    /// Returns asset B.
    #[must_use]
    pub const fn asset_b(&self) -> Address {
        self.asset_b
    }

    /// Returns `true` if `asset` is one of the two assets.
    #[must_use]
    pub fn contains(&self, asset: &Address) -> bool {
        self.side_of(asset).is_some()
    }

    /// Returns the side `asset` sits on, or `None` for a foreign asset.
    #[must_use]
    pub fn side_of(&self, asset: &Address) -> Option<Side> {
        if *asset == self.asset_a {
            Some(Side::A)
        } else if *asset == self.asset_b {
            Some(Side::B)
        } else {
            None
        }
    }

    /// Resolves a `(token_in, token_out)` request into the input side.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InvalidToken`] if either asset is foreign to the
    /// pair or both name the same asset.
    pub fn direction(&self, token_in: &Address, token_out: &Address) -> Result<Side, AmmError> {
        let side_in = self
            .side_of(token_in)
            .ok_or(AmmError::InvalidToken("token_in is not part of the pool pair"))?;
        let side_out = self
            .side_of(token_out)
            .ok_or(AmmError::InvalidToken("token_out is not part of the pool pair"))?;
        if side_in == side_out {
            return Err(AmmError::InvalidToken(
                "token_in and token_out must be different assets",
            ));
        }
        Ok(side_in)
    }
}

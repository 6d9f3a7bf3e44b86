//! Per-holder liquidity share ledger.

use std::collections::HashMap;

use crate::domain::{Address, Liquidity};
use crate::error::AmmError;
use crate::math::CheckedArithmetic;

/// Outstanding liquidity shares, by holder.
///
/// `total_supply` always equals the sum of all holder balances.  Holders
/// whose balance drops to zero are removed, so the map only lists current
/// liquidity providers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ShareLedger {
    balances: HashMap<Address, Liquidity>,
    total_supply: Liquidity,
}

impl ShareLedger {
    pub(crate) fn total_supply(&self) -> Liquidity {
        self.total_supply
    }

    pub(crate) fn balance_of(&self, holder: &Address) -> Liquidity {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    pub(crate) fn holders(&self) -> usize {
        self.balances.len()
    }

    /// Checks that `amount` can be minted to `to` without overflow.
    pub(crate) fn check_mint(&self, to: &Address, amount: Liquidity) -> Result<(), AmmError> {
        self.total_supply.safe_add(&amount)?;
        self.balance_of(to).safe_add(&amount)?;
        Ok(())
    }

    pub(crate) fn mint(&mut self, to: &Address, amount: Liquidity) -> Result<(), AmmError> {
        let total = self.total_supply.safe_add(&amount)?;
        let balance = self.balance_of(to).safe_add(&amount)?;
        self.total_supply = total;
        self.balances.insert(*to, balance);
        Ok(())
    }

    /// Burns `amount` of `from`'s shares.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientLiquidity`] if `from` owns fewer
    /// than `amount` shares.
    pub(crate) fn burn(&mut self, from: &Address, amount: Liquidity) -> Result<(), AmmError> {
        let available = self.balance_of(from);
        let balance = available
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientLiquidity {
                requested: amount,
                available,
            })?;
        let total = self.total_supply.safe_sub(&amount)?;
        self.total_supply = total;
        if balance.is_zero() {
            self.balances.remove(from);
        } else {
            self.balances.insert(*from, balance);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn addr(b: u8) -> Address {
        Address::from_bytes([b; 32])
    }

    #[test]
    fn mint_and_burn_keep_supply_in_sync() {
        let mut shares = ShareLedger::default();
        let Ok(()) = shares.mint(&addr(1), Liquidity::new(2_000)) else {
            panic!("mint");
        };
        let Ok(()) = shares.mint(&addr(2), Liquidity::new(500)) else {
            panic!("mint");
        };
        assert_eq!(shares.total_supply(), Liquidity::new(2_500));

        let Ok(()) = shares.burn(&addr(1), Liquidity::new(1_500)) else {
            panic!("burn");
        };
        assert_eq!(shares.balance_of(&addr(1)), Liquidity::new(500));
        assert_eq!(shares.total_supply(), Liquidity::new(1_000));
    }

    #[test]
    fn burn_more_than_owned_fails_without_effect() {
        let mut shares = ShareLedger::default();
        let Ok(()) = shares.mint(&addr(1), Liquidity::new(10)) else {
            panic!("mint");
        };
        let before = shares.clone();
        assert_eq!(
            shares.burn(&addr(1), Liquidity::new(11)),
            Err(AmmError::InsufficientLiquidity {
                requested: Liquidity::new(11),
                available: Liquidity::new(10),
            })
        );
        assert_eq!(shares, before);
    }

    #[test]
    fn fully_burned_holder_is_removed() {
        let mut shares = ShareLedger::default();
        let Ok(()) = shares.mint(&addr(1), Liquidity::new(10)) else {
            panic!("mint");
        };
        assert_eq!(shares.holders(), 1);
        let Ok(()) = shares.burn(&addr(1), Liquidity::new(10)) else {
            panic!("burn");
        };
        assert_eq!(shares.holders(), 0);
        assert!(shares.total_supply().is_zero());
    }

    #[test]
    fn check_mint_detects_overflow() {
        let mut shares = ShareLedger::default();
        let Ok(()) = shares.mint(&addr(1), Liquidity::new(u128::MAX)) else {
            panic!("mint");
        };
        assert!(matches!(
            shares.check_mint(&addr(2), Liquidity::new(1)),
            Err(AmmError::Overflow(_))
        ));
    }
}

//! In-memory [`AssetLedger`] for simulations and tests.

use std::collections::HashMap;

use tracing::trace;

use crate::domain::{Address, Amount};
use crate::error::LedgerError;
use crate::traits::AssetLedger;

/// Balances and allowances of a single asset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct AssetBook {
    balances: HashMap<Address, Amount>,
    allowances: HashMap<(Address, Address), Amount>,
    total_supply: Amount,
}

impl AssetBook {
    fn balance(&self, holder: &Address) -> Amount {
        self.balances.get(holder).copied().unwrap_or_default()
    }

    fn allowance(&self, owner: &Address, spender: &Address) -> Amount {
        self.allowances
            .get(&(*owner, *spender))
            .copied()
            .unwrap_or_default()
    }

    /// Debits `from` and credits `to`, or does nothing and errors.
    fn move_balance(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let available = self.balance(from);
        let debited = available
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientBalance {
                needed: amount,
                available,
            })?;
        if from == to {
            return Ok(());
        }
        let credited = self
            .balance(to)
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        if debited.is_zero() {
            self.balances.remove(from);
        } else {
            self.balances.insert(*from, debited);
        }
        self.balances.insert(*to, credited);
        Ok(())
    }
}

/// A ledger of fungible assets held entirely in memory.
///
/// Assets must be registered before use.  Allowances follow the usual
/// token convention: an allowance of [`Amount::MAX`] is never decremented.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::{Address, Amount};
/// use hydra_cpmm::ledger::InMemoryLedger;
/// use hydra_cpmm::traits::AssetLedger;
///
/// let usdc = Address::from_bytes([1u8; 32]);
/// let alice = Address::from_bytes([10u8; 32]);
///
/// let mut ledger = InMemoryLedger::new();
/// ledger.register_asset(usdc).expect("new asset");
/// ledger.mint(&usdc, &alice, Amount::new(500)).expect("minted");
///
/// assert!(ledger.is_asset(&usdc));
/// assert_eq!(ledger.balance_of(&usdc, &alice), Ok(Amount::new(500)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryLedger {
    assets: HashMap<Address, AssetBook>,
}

impl InMemoryLedger {
    /// Creates an empty ledger with no registered assets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a ledger with each of `assets` registered.
    ///
    /// Duplicates are registered once.
    #[must_use]
    pub fn with_assets(assets: &[Address]) -> Self {
        let mut ledger = Self::new();
        for asset in assets {
            ledger.assets.entry(*asset).or_default();
        }
        ledger
    }

    /// Registers a new asset with zero supply.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::AssetExists`] if `asset` is already known.
    pub fn register_asset(&mut self, asset: Address) -> Result<(), LedgerError> {
        if self.assets.contains_key(&asset) {
            return Err(LedgerError::AssetExists(asset));
        }
        self.assets.insert(asset, AssetBook::default());
        Ok(())
    }

    /// Creates `amount` new units of `asset` in `to`'s balance.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownAsset`] if `asset` is not registered.
    /// - [`LedgerError::BalanceOverflow`] if the balance or the total
    ///   supply would overflow.
    pub fn mint(&mut self, asset: &Address, to: &Address, amount: Amount) -> Result<(), LedgerError> {
        let book = self.book_mut(asset)?;
        let supply = book
            .total_supply
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        let balance = book
            .balance(to)
            .checked_add(&amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        book.total_supply = supply;
        book.balances.insert(*to, balance);
        trace!(%asset, %to, %amount, "mint");
        Ok(())
    }

    /// Sets the amount of `owner`'s `asset` that `spender` may move.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownAsset`] if `asset` is not registered.
    pub fn approve(
        &mut self,
        asset: &Address,
        owner: &Address,
        spender: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let book = self.book_mut(asset)?;
        book.allowances.insert((*owner, *spender), amount);
        trace!(%asset, %owner, %spender, %amount, "approve");
        Ok(())
    }

    /// Returns how much of `owner`'s `asset` `spender` may still move.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownAsset`] if `asset` is not registered.
    pub fn allowance(
        &self,
        asset: &Address,
        owner: &Address,
        spender: &Address,
    ) -> Result<Amount, LedgerError> {
        Ok(self.book(asset)?.allowance(owner, spender))
    }

    /// Returns the total minted supply of `asset`.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownAsset`] if `asset` is not registered.
    pub fn total_supply(&self, asset: &Address) -> Result<Amount, LedgerError> {
        Ok(self.book(asset)?.total_supply)
    }

    fn book(&self, asset: &Address) -> Result<&AssetBook, LedgerError> {
        self.assets
            .get(asset)
            .ok_or(LedgerError::UnknownAsset(*asset))
    }

    fn book_mut(&mut self, asset: &Address) -> Result<&mut AssetBook, LedgerError> {
        self.assets
            .get_mut(asset)
            .ok_or(LedgerError::UnknownAsset(*asset))
    }
}

impl AssetLedger for InMemoryLedger {
    fn is_asset(&self, asset: &Address) -> bool {
        self.assets.contains_key(asset)
    }

    fn balance_of(&self, asset: &Address, holder: &Address) -> Result<Amount, LedgerError> {
        Ok(self.book(asset)?.balance(holder))
    }

    fn transfer(
        &mut self,
        asset: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        self.book_mut(asset)?.move_balance(from, to, amount)?;
        trace!(%asset, %from, %to, %amount, "transfer");
        Ok(())
    }

    fn transfer_from(
        &mut self,
        asset: &Address,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError> {
        let book = self.book_mut(asset)?;
        let approved = book.allowance(from, spender);
        let remaining = approved
            .checked_sub(&amount)
            .ok_or(LedgerError::InsufficientAllowance {
                needed: amount,
                approved,
            })?;
        book.move_balance(from, to, amount)?;
        if approved != Amount::MAX {
            book.allowances.insert((*from, *spender), remaining);
        }
        trace!(%asset, %spender, %from, %to, %amount, "transfer_from");
        Ok(())
    }
}

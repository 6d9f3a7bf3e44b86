//! External asset ledger capability.
//!
//! [`AssetLedger`] is everything the pool needs from the system that
//! actually holds the two assets: an existence probe, balance reads, and
//! two transfer primitives.  A chain host adapts its token interface to this
//! trait; off-chain simulations use
//! [`InMemoryLedger`](crate::ledger::InMemoryLedger).
//!
//! # Transfer Contract
//!
//! Each transfer call is all-or-nothing: it either moves exactly `amount`
//! or returns `Err` and moves nothing.  The pool relies on this to keep its
//! own operations atomic.

use crate::domain::{Address, Amount};
use crate::error::LedgerError;

/// Balance and transfer capability over a set of fungible assets.
pub trait AssetLedger {
    /// Returns `true` if `asset` names a fungible asset this ledger knows.
    ///
    /// Pools probe both of their assets with this at construction.
    fn is_asset(&self, asset: &Address) -> bool;

    /// Returns the balance of `holder` in `asset`.
    ///
    /// Unknown holders have a zero balance.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::UnknownAsset`] if `asset` is not registered.
    fn balance_of(&self, asset: &Address, holder: &Address) -> Result<Amount, LedgerError>;

    /// Moves `amount` of `asset` from `from` to `to` on `from`'s own
    /// authority.  The pool uses this to pay out of its holding account.
    ///
    /// # Errors
    ///
    /// - [`LedgerError::UnknownAsset`] if `asset` is not registered.
    /// - [`LedgerError::InsufficientBalance`] if `from` holds less than
    ///   `amount`.
    /// - [`LedgerError::BalanceOverflow`] if crediting `to` overflows.
    fn transfer(
        &mut self,
        asset: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;

    /// Moves `amount` of `asset` from `from` to `to` on `spender`'s
    /// authority, consuming allowance that `from` granted to `spender`.
    /// The pool uses this to pull caller deposits.
    ///
    /// # Errors
    ///
    /// Everything [`AssetLedger::transfer`] returns, plus
    /// [`LedgerError::InsufficientAllowance`] if `spender` is not approved
    /// for `amount`.
    fn transfer_from(
        &mut self,
        asset: &Address,
        spender: &Address,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<(), LedgerError>;
}

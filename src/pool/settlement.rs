//! Transfer journal that makes a multi-transfer pool operation atomic.
//!
//! A pool operation moves assets in up to two legs (pull from the caller,
//! push to the caller).  Each leg is individually atomic per the
//! [`AssetLedger`] contract; [`Settlement`] records completed legs so that a
//! failure in a later leg can reverse the earlier ones.

use tracing::{error, warn};

use crate::domain::{Address, Amount};
use crate::error::LedgerError;
use crate::traits::AssetLedger;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Leg {
    /// Counterparty -> pool.
    Pull { asset: Address, amount: Amount },
    /// Pool -> counterparty.
    Push { asset: Address, amount: Amount },
}

/// Journal of the legs settled between the pool and one counterparty.
pub(crate) struct Settlement<'a, L: AssetLedger> {
    ledger: &'a mut L,
    pool: Address,
    counterparty: Address,
    settled: Vec<Leg>,
}

impl<'a, L: AssetLedger> Settlement<'a, L> {
    pub(crate) fn new(ledger: &'a mut L, pool: Address, counterparty: Address) -> Self {
        Self {
            ledger,
            pool,
            counterparty,
            settled: Vec::with_capacity(2),
        }
    }

    /// Pulls `amount` of `asset` from the counterparty on the pool's
    /// allowance.  Zero amounts are skipped.
    pub(crate) fn pull(&mut self, asset: &Address, amount: Amount) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Ok(());
        }
        self.ledger
            .transfer_from(asset, &self.pool, &self.counterparty, &self.pool, amount)?;
        self.settled.push(Leg::Pull {
            asset: *asset,
            amount,
        });
        Ok(())
    }

    /// Pushes `amount` of `asset` from the pool to the counterparty.
    /// Zero amounts are skipped.
    pub(crate) fn push(&mut self, asset: &Address, amount: Amount) -> Result<(), LedgerError> {
        if amount.is_zero() {
            return Ok(());
        }
        self.ledger
            .transfer(asset, &self.pool, &self.counterparty, amount)?;
        self.settled.push(Leg::Push {
            asset: *asset,
            amount,
        });
        Ok(())
    }

    /// Reverses every settled leg, newest first.
    ///
    /// A pull is reversed by a plain transfer back out of the pool.  A push
    /// can only be reversed if the counterparty has left the pool enough
    /// allowance.  Every leg is attempted even after one fails.
    ///
    /// # Errors
    ///
    /// Returns the ledger error of the first leg that could not be
    /// reversed.  That leg, and any other failed one, stays applied.
    pub(crate) fn unwind(self) -> Result<(), LedgerError> {
        let Self {
            ledger,
            pool,
            counterparty,
            settled,
        } = self;
        let mut stuck = None;
        for leg in settled.into_iter().rev() {
            let reversed = match leg {
                Leg::Pull { asset, amount } => {
                    ledger.transfer(&asset, &pool, &counterparty, amount)
                }
                Leg::Push { asset, amount } => {
                    ledger.transfer_from(&asset, &pool, &counterparty, &pool, amount)
                }
            };
            match reversed {
                Ok(()) => warn!(?leg, %counterparty, "reversed settled leg"),
                Err(e) => {
                    error!(?leg, %counterparty, error = %e, "could not reverse settled leg");
                    stuck.get_or_insert(e);
                }
            }
        }
        stuck.map_or(Ok(()), Err)
    }
}

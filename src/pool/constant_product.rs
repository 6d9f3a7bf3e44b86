//! Two-asset constant-product pool.
//!
//! # Swap Algorithm (`token_in` → `token_out`)
//!
//! With `R_in` / `R_out` the pool's live balances read before the input is
//! pulled, and `k_last` the invariant baseline seeded by the bootstrap
//! deposit:
//!
//! 1. `n = R_in + amount_in`
//! 2. `amount_out = (R_out × n − k_last) / n`
//! 3. require `amount_out > 0`
//! 4. require `(R_out − amount_out) × n ≥ k_last`
//!
//! Step 2 nets out the *stored* `k_last` rather than the live product
//! `R_in × R_out`.  While the reserves sit exactly on the bootstrap curve the
//! two agree; once deposits, withdrawals or rounding move the live product
//! away from `k_last`, swap prices follow `k_last`.  There is no swap fee.
//!
//! # Deposits
//!
//! - **Bootstrap** (no shares outstanding): both amounts are taken as
//!   offered, `isqrt(a × b)` shares are minted and `k_last = a × b`.  This is
//!   the only place `k_last` is written.
//! - **Proportional**: `minted = min(a × S / R_a, b × S / R_b)` and the
//!   pulled amounts are re-derived from `minted` as `minted × R_x / S`.
//!
//! # Withdrawals
//!
//! `amount_x = liquidity × R_x / S` for each asset.
//!
//! # Atomicity
//!
//! Every check runs before the first transfer.  Transfers go through a
//! [`Settlement`] journal that reverses completed legs if a later leg
//! fails, and share balances are only touched once all transfers have
//! settled.  Reserves are re-read from the ledger after every committed
//! operation.
//!
//! Reversing a push needs the caller's allowance, and any reversal can be
//! refused by the ledger.  When a reversal fails the operation returns
//! [`AmmError::UnwindFailed`] and keeps what it could not undo: reserves
//! are re-synced, and a withdrawal that paid out only asset A burns half
//! of the requested shares (rounded up), the value of one leg at the spot
//! price.

use tracing::{debug, error, info, warn};

use super::settlement::Settlement;
use super::shares::ShareLedger;
use super::state::PoolState;
use crate::config::PoolConfig;
use crate::domain::{
    Address, Amount, AssetPair, DepositReceipt, Liquidity, PoolEvent, SwapReceipt,
    WithdrawalReceipt,
};
use crate::error::{AmmError, LedgerError, Result};
use crate::math::{isqrt, mul_div, CheckedArithmetic};
use crate::traits::AssetLedger;

/// A two-asset constant-product liquidity pool over an [`AssetLedger`].
///
/// The pool owns its ledger collaborator, its cached reserves, the
/// invariant baseline `k_last`, and the liquidity share ledger.  All state
/// changes go through [`swap`](Self::swap),
/// [`add_liquidity`](Self::add_liquidity) and
/// [`remove_liquidity`](Self::remove_liquidity); each takes `&mut self`, so
/// operations are serialized by the borrow checker.
///
/// # Example
///
/// ```rust
/// use hydra_cpmm::domain::{Address, Amount, Liquidity};
/// use hydra_cpmm::ledger::InMemoryLedger;
/// use hydra_cpmm::pool::Pool;
///
/// let (usdc, weth) = (Address::from_bytes([1u8; 32]), Address::from_bytes([2u8; 32]));
/// let pool_addr = Address::from_bytes([100u8; 32]);
/// let alice = Address::from_bytes([10u8; 32]);
///
/// let mut ledger = InMemoryLedger::with_assets(&[usdc, weth]);
/// for asset in [usdc, weth] {
///     ledger.mint(&asset, &alice, Amount::new(10_000)).expect("mint");
///     ledger.approve(&asset, &alice, &pool_addr, Amount::MAX).expect("approve");
/// }
///
/// let mut pool = Pool::new(pool_addr, usdc, weth, ledger).expect("pool created");
///
/// let deposit = pool
///     .add_liquidity(alice, Amount::new(1_000), Amount::new(4_000))
///     .expect("bootstrap");
/// assert_eq!(deposit.liquidity(), Liquidity::new(2_000));
///
/// let swap = pool.swap(alice, usdc, weth, Amount::new(100)).expect("swap");
/// assert_eq!(swap.amount_out(), Amount::new(363));
/// ```
#[derive(Debug, Clone)]
pub struct Pool<L: AssetLedger> {
    config: PoolConfig,
    ledger: L,
    reserve_a: Amount,
    reserve_b: Amount,
    k_last: Amount,
    shares: ShareLedger,
    events: Vec<PoolEvent>,
}

impl<L: AssetLedger> Pool<L> {
    /// Creates a pool trading `asset_a` against `asset_b`, holding its
    /// reserves in `pool_address`.
    ///
    /// # Errors
    ///
    /// See [`Pool::from_config`].
    pub fn new(pool_address: Address, asset_a: Address, asset_b: Address, ledger: L) -> Result<Self> {
        let config = PoolConfig::new(pool_address, asset_a, asset_b)?;
        Self::from_config(&config, ledger)
    }

    /// Creates an empty pool from a validated configuration.
    ///
    /// Both assets are probed with [`AssetLedger::is_asset`]; reserves,
    /// `k_last` and the share supply start at zero.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidConfiguration`] if the configuration is invalid.
    /// - [`AmmError::UnknownAsset`] if either asset is unknown to `ledger`.
    pub fn from_config(config: &PoolConfig, ledger: L) -> Result<Self> {
        config.validate()?;
        for asset in [config.pair().asset_a(), config.pair().asset_b()] {
            if !ledger.is_asset(&asset) {
                return Err(AmmError::UnknownAsset(asset));
            }
        }
        info!(%config, "pool created");
        Ok(Self {
            config: *config,
            ledger,
            reserve_a: Amount::ZERO,
            reserve_b: Amount::ZERO,
            k_last: Amount::ZERO,
            shares: ShareLedger::default(),
            events: Vec::new(),
        })
    }

    // -- read accessors -------------------------------------------------------

    /// Returns the cached `(reserve_a, reserve_b)` pair.
    ///
    /// The cache is refreshed from the ledger at the end of every committed
    /// operation; it is not re-read here.
    #[must_use]
    pub const fn reserves(&self) -> (Amount, Amount) {
        (self.reserve_a, self.reserve_b)
    }

    /// Returns asset A.
    #[must_use]
    pub const fn asset_a(&self) -> Address {
        self.config.pair().asset_a()
    }

    /// Returns asset B.
    #[must_use]
    pub const fn asset_b(&self) -> Address {
        self.config.pair().asset_b()
    }

    /// Returns the asset pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        self.config.pair()
    }

    /// Returns the account holding the pool's reserves.
    #[must_use]
    pub const fn pool_address(&self) -> Address {
        self.config.pool_address()
    }

    /// Returns the invariant baseline.
    #[must_use]
    pub const fn k_last(&self) -> Amount {
        self.k_last
    }

    /// Returns the total outstanding liquidity shares.
    #[must_use]
    pub fn total_supply(&self) -> Liquidity {
        self.shares.total_supply()
    }

    /// Returns the shares owned by `holder`.
    #[must_use]
    pub fn liquidity_of(&self, holder: &Address) -> Liquidity {
        self.shares.balance_of(holder)
    }

    /// Returns the number of accounts currently holding shares.
    #[must_use]
    pub fn liquidity_providers(&self) -> usize {
        self.shares.holders()
    }

    /// Returns a snapshot of reserves, `k_last` and share supply.
    #[must_use]
    pub fn state(&self) -> PoolState {
        PoolState {
            reserve_a: self.reserve_a,
            reserve_b: self.reserve_b,
            k_last: self.k_last,
            total_supply: self.shares.total_supply(),
        }
    }

    /// Returns all events emitted so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[PoolEvent] {
        &self.events
    }

    /// Removes and returns all emitted events.
    pub fn drain_events(&mut self) -> Vec<PoolEvent> {
        core::mem::take(&mut self.events)
    }

    /// Returns the asset ledger.
    #[must_use]
    pub const fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Returns the asset ledger mutably, e.g. to fund accounts or approve
    /// the pool.  Balance changes made here are picked up by the next pool
    /// operation; the pool's own counters cannot be touched.
    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    // -- quotes ---------------------------------------------------------------

    /// Computes the swap [`swap`](Self::swap) would execute, without moving
    /// anything.
    ///
    /// # Errors
    ///
    /// - [`AmmError::InvalidToken`] if either asset is foreign to the pool
    ///   or both are the same asset.
    /// - [`AmmError::ZeroAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientOutputAmount`] if the formula yields zero.
    /// - [`AmmError::InvariantViolation`] if the trade would leave the
    ///   reserve product below `k_last`.
    /// - [`AmmError::Overflow`] if any product overflows `u128`.
    pub fn quote_swap(&self, token_in: Address, token_out: Address, amount_in: Amount) -> Result<SwapReceipt> {
        let side_in = self.pair().direction(&token_in, &token_out)?;
        if amount_in.is_zero() {
            return Err(AmmError::ZeroAmount("amount_in must be positive"));
        }

        let pool = self.pool_address();
        let reserve_in = self.ledger.balance_of(&token_in, &pool)?;
        let reserve_out = self.ledger.balance_of(&token_out, &pool)?;

        let amount_out = swap_output(reserve_in, reserve_out, amount_in, self.k_last)?;
        debug!(
            ?side_in, %token_in, %token_out, %reserve_in, %reserve_out, %amount_in, %amount_out,
            k_last = %self.k_last,
            "swap quote"
        );
        Ok(SwapReceipt::new(token_in, token_out, amount_in, amount_out))
    }

    /// Computes the deposit [`add_liquidity`](Self::add_liquidity) would
    /// execute, without moving anything.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if either amount is zero, or if a
    ///   proportional deposit is too small to mint a share.
    /// - [`AmmError::ZeroReserve`] if shares are outstanding but a reserve
    ///   is zero.
    /// - [`AmmError::Overflow`] if any product overflows `u128`.
    pub fn quote_add_liquidity(&self, amount_a_in: Amount, amount_b_in: Amount) -> Result<DepositReceipt> {
        if amount_a_in.is_zero() || amount_b_in.is_zero() {
            return Err(AmmError::ZeroAmount("deposit amounts must be positive"));
        }

        let supply = self.shares.total_supply();
        if supply.is_zero() {
            let product = amount_a_in.safe_mul(&amount_b_in)?;
            let minted = Liquidity::new(isqrt(product.get()));
            return Ok(DepositReceipt::new(amount_a_in, amount_b_in, minted));
        }

        // Unreachable while shares and reserves move together, but a
        // zero reserve here would otherwise surface as a division by zero.
        if self.reserve_a.is_zero() || self.reserve_b.is_zero() {
            return Err(AmmError::ZeroReserve);
        }

        let supply_amt = supply.as_amount();
        let by_a = mul_div(amount_a_in, supply_amt, self.reserve_a)?;
        let by_b = mul_div(amount_b_in, supply_amt, self.reserve_b)?;
        let minted = by_a.min(by_b);
        if minted.is_zero() {
            return Err(AmmError::ZeroAmount("deposit too small to mint liquidity"));
        }

        let amount_a = mul_div(minted, self.reserve_a, supply_amt)?;
        let amount_b = mul_div(minted, self.reserve_b, supply_amt)?;
        Ok(DepositReceipt::new(amount_a, amount_b, Liquidity::from(minted)))
    }

    /// Computes the withdrawal [`remove_liquidity`](Self::remove_liquidity)
    /// would execute for `holder`, without moving anything.
    ///
    /// # Errors
    ///
    /// - [`AmmError::ZeroAmount`] if `liquidity` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if `holder` owns fewer shares.
    /// - [`AmmError::Overflow`] if any product overflows `u128`.
    pub fn quote_remove_liquidity(&self, holder: &Address, liquidity: Liquidity) -> Result<WithdrawalReceipt> {
        if liquidity.is_zero() {
            return Err(AmmError::ZeroAmount("cannot remove zero liquidity"));
        }
        let available = self.shares.balance_of(holder);
        if liquidity > available {
            return Err(AmmError::InsufficientLiquidity {
                requested: liquidity,
                available,
            });
        }

        let supply = self.shares.total_supply().as_amount();
        let amount_a = mul_div(liquidity.as_amount(), self.reserve_a, supply)?;
        let amount_b = mul_div(liquidity.as_amount(), self.reserve_b, supply)?;
        Ok(WithdrawalReceipt::new(amount_a, amount_b, liquidity))
    }

    // -- mutating operations --------------------------------------------------

    /// Sells `amount_in` of `token_in` from `caller` for `token_out`.
    ///
    /// The caller must have approved the pool for `amount_in` of
    /// `token_in`.
    ///
    /// # Errors
    ///
    /// Everything [`quote_swap`](Self::quote_swap) returns, plus
    /// [`AmmError::Ledger`] if a transfer fails and
    /// [`AmmError::UnwindFailed`] if the input pull could not be returned.
    /// On any other error nothing has changed.
    pub fn swap(&mut self, caller: Address, token_in: Address, token_out: Address, amount_in: Amount) -> Result<SwapReceipt> {
        let receipt = self.quote_swap(token_in, token_out, amount_in).map_err(|e| {
            if matches!(e, AmmError::InvariantViolation { .. }) {
                warn!(%caller, %token_in, %amount_in, error = %e, "swap rejected by invariant check");
            }
            e
        })?;

        let pool = self.pool_address();
        let mut settlement = Settlement::new(&mut self.ledger, pool, caller);
        let settled = settlement
            .pull(&token_in, receipt.amount_in())
            .and_then(|()| settlement.push(&token_out, receipt.amount_out()));
        if let Err(e) = settled {
            let unwound = settlement.unwind();
            return Err(self.abandon(unwound, e));
        }

        self.sync()?;
        self.emit(PoolEvent::Swap {
            actor: caller,
            token_in,
            token_out,
            amount_in: receipt.amount_in(),
            amount_out: receipt.amount_out(),
        });
        Ok(receipt)
    }

    /// Deposits up to `amount_a_in` / `amount_b_in` from `caller` and mints
    /// liquidity shares to `caller`.
    ///
    /// The first deposit into an empty pool sets the price and seeds
    /// `k_last`.  Later deposits pull only the amounts matching the minted
    /// shares; any excess offered stays with the caller.
    ///
    /// # Errors
    ///
    /// Everything [`quote_add_liquidity`](Self::quote_add_liquidity)
    /// returns, plus [`AmmError::Ledger`] if a transfer fails and
    /// [`AmmError::UnwindFailed`] if an asset pulled before the failure
    /// could not be returned.  On any other error nothing has changed.
    pub fn add_liquidity(&mut self, caller: Address, amount_a_in: Amount, amount_b_in: Amount) -> Result<DepositReceipt> {
        let receipt = self.quote_add_liquidity(amount_a_in, amount_b_in)?;
        let bootstrap = self.shares.total_supply().is_zero();
        let seeded_k = if bootstrap {
            Some(amount_a_in.safe_mul(&amount_b_in)?)
        } else {
            None
        };
        self.shares.check_mint(&caller, receipt.liquidity())?;

        let (asset_a, asset_b) = (self.asset_a(), self.asset_b());
        let pool = self.pool_address();
        let mut settlement = Settlement::new(&mut self.ledger, pool, caller);
        let settled = settlement
            .pull(&asset_a, receipt.amount_a())
            .and_then(|()| settlement.pull(&asset_b, receipt.amount_b()));
        if let Err(e) = settled {
            let unwound = settlement.unwind();
            return Err(self.abandon(unwound, e));
        }

        if let Some(k) = seeded_k {
            self.k_last = k;
        }
        self.sync()?;
        self.shares.mint(&caller, receipt.liquidity())?;
        self.emit(PoolEvent::AddLiquidity {
            actor: caller,
            amount_a: receipt.amount_a(),
            amount_b: receipt.amount_b(),
            liquidity_minted: receipt.liquidity(),
        });
        Ok(receipt)
    }

    /// Burns `liquidity` of `caller`'s shares and pays out the
    /// proportional slice of both reserves.
    ///
    /// # Errors
    ///
    /// Everything [`quote_remove_liquidity`](Self::quote_remove_liquidity)
    /// returns, plus:
    ///
    /// - [`AmmError::InsufficientReserve`] if the pool's live balance
    ///   cannot cover a payout.
    /// - [`AmmError::Ledger`] if a transfer fails.
    /// - [`AmmError::UnwindFailed`] if the asset B push failed and the
    ///   asset A payout could not be taken back.  The A payout stands and
    ///   half of `liquidity`, rounded up, is burned against it.
    ///
    /// On any other error nothing has changed.
    pub fn remove_liquidity(&mut self, caller: Address, liquidity: Liquidity) -> Result<WithdrawalReceipt> {
        let receipt = self.quote_remove_liquidity(&caller, liquidity)?;

        let (asset_a, asset_b) = (self.asset_a(), self.asset_b());
        let pool = self.pool_address();
        for (asset, needed) in [(asset_a, receipt.amount_a()), (asset_b, receipt.amount_b())] {
            let available = self.ledger.balance_of(&asset, &pool)?;
            if needed > available {
                return Err(AmmError::InsufficientReserve { needed, available });
            }
        }

        let mut settlement = Settlement::new(&mut self.ledger, pool, caller);
        let settled = settlement
            .push(&asset_a, receipt.amount_a())
            .and_then(|()| settlement.push(&asset_b, receipt.amount_b()));
        if let Err(e) = settled {
            // Only the asset A push can have settled before a failure.
            return Err(match settlement.unwind() {
                Ok(()) => e.into(),
                Err(stuck) => {
                    error!(%caller, cause = %e, error = %stuck, "withdrawal left asset A paid out");
                    self.commit_partial_withdrawal(caller, liquidity, receipt.amount_a(), stuck)
                }
            });
        }

        self.shares.burn(&caller, liquidity)?;
        self.sync()?;
        self.emit(PoolEvent::RemoveLiquidity {
            actor: caller,
            amount_a: receipt.amount_a(),
            amount_b: receipt.amount_b(),
            liquidity_burned: liquidity,
        });
        Ok(receipt)
    }

    // -- bookkeeping ----------------------------------------------------------

    /// Re-reads both reserves from the ledger.
    fn sync(&mut self) -> Result<()> {
        let pool = self.pool_address();
        self.reserve_a = self.ledger.balance_of(&self.asset_a(), &pool)?;
        self.reserve_b = self.ledger.balance_of(&self.asset_b(), &pool)?;
        debug!(reserve_a = %self.reserve_a, reserve_b = %self.reserve_b, "reserves synced");
        Ok(())
    }

    /// Turns a failed settlement into the error returned to the caller.
    ///
    /// If every settled leg was reversed the ledger is untouched and the
    /// transfer error is returned.  Otherwise the reserves are re-synced so
    /// the cache matches what the ledger still holds.
    fn abandon(&mut self, unwound: core::result::Result<(), LedgerError>, cause: LedgerError) -> AmmError {
        let Err(stuck) = unwound else {
            return cause.into();
        };
        error!(cause = %cause, error = %stuck, "settlement left partially applied");
        match self.sync() {
            Ok(()) => AmmError::UnwindFailed(stuck),
            Err(e) => e,
        }
    }

    /// Commits the asset A payout of a withdrawal whose asset B push
    /// failed.  Burns `ceil(liquidity / 2)` of `caller`'s shares, re-syncs
    /// the reserves and records what was actually paid.
    fn commit_partial_withdrawal(
        &mut self,
        caller: Address,
        liquidity: Liquidity,
        paid_a: Amount,
        stuck: LedgerError,
    ) -> AmmError {
        let burned = Liquidity::new(liquidity.get().div_ceil(2));
        if let Err(e) = self.shares.burn(&caller, burned) {
            return e;
        }
        if let Err(e) = self.sync() {
            return e;
        }
        self.emit(PoolEvent::RemoveLiquidity {
            actor: caller,
            amount_a: paid_a,
            amount_b: Amount::ZERO,
            liquidity_burned: burned,
        });
        AmmError::UnwindFailed(stuck)
    }

    fn emit(&mut self, event: PoolEvent) {
        info!(%event, "pool event");
        self.events.push(event);
    }
}

/// Computes the output of a swap against live reserves and the stored
/// baseline `k_last`.
///
/// # Errors
///
/// - [`AmmError::InvariantViolation`] if `R_out × (R_in + amount_in)` is
///   already below `k_last`, or the post-trade product would be.
/// - [`AmmError::InsufficientOutputAmount`] if the output rounds to zero.
/// - [`AmmError::Overflow`] if any product overflows `u128`.
pub fn swap_output(reserve_in: Amount, reserve_out: Amount, amount_in: Amount, k_last: Amount) -> Result<Amount> {
    let new_in = reserve_in.safe_add(&amount_in)?;
    let gross = reserve_out
        .checked_mul(&new_in)
        .ok_or(AmmError::Overflow("swap product overflow"))?;
    let numerator = gross
        .checked_sub(&k_last)
        .ok_or(AmmError::InvariantViolation {
            product: gross.get(),
            k_last: k_last.get(),
        })?;
    let amount_out = numerator.safe_div(&new_in)?;
    if amount_out.is_zero() {
        return Err(AmmError::InsufficientOutputAmount);
    }

    let new_out = reserve_out.safe_sub(&amount_out)?;
    let product = new_out
        .checked_mul(&new_in)
        .ok_or(AmmError::Overflow("post-swap product overflow"))?;
    if product < k_last {
        return Err(AmmError::InvariantViolation {
            product: product.get(),
            k_last: k_last.get(),
        });
    }
    Ok(amount_out)
}

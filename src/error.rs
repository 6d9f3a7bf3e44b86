//! Unified error types for the Hydra CPMM library.
//!
//! All fallible pool operations return [`AmmError`].  Failures reported by
//! the external asset ledger are carried as [`LedgerError`] and surface
//! through [`AmmError::Ledger`].
//!
//! Every error except [`AmmError::UnwindFailed`] is a precondition,
//! postcondition or transfer rejection: the operation that returned it has
//! not changed pool state, and the caller can retry with corrected inputs.
//! `UnwindFailed` means a settled transfer could not be taken back; the
//! operation is partially applied and the pool's state reflects that.

use thiserror::Error;

use crate::domain::{Address, Amount, Liquidity};

/// Crate-wide result alias.
pub type Result<T> = core::result::Result<T, AmmError>;

/// Errors produced by pool construction and pool operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmmError {
    /// The pool configuration is inconsistent (e.g. identical assets).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(&'static str),

    /// A handle passed at construction is not a known fungible asset.
    #[error("address {0} is not a registered asset")]
    UnknownAsset(Address),

    /// An operation referenced an asset that is not one of the pool's two
    /// assets, or named the same asset on both sides of a swap.
    #[error("invalid token: {0}")]
    InvalidToken(&'static str),

    /// An amount that must be positive was zero.
    #[error("zero amount: {0}")]
    ZeroAmount(&'static str),

    /// The swap formula produced no output for the given input.
    #[error("insufficient output amount")]
    InsufficientOutputAmount,

    /// The post-swap reserve product would fall below the stored baseline.
    #[error("invariant violation: product {product} is below k_last {k_last}")]
    InvariantViolation {
        /// Reserve product after the trade.
        product: u128,
        /// Stored invariant baseline.
        k_last: u128,
    },

    /// A holder tried to burn more shares than they own.
    #[error("insufficient liquidity: requested {requested}, available {available}")]
    InsufficientLiquidity {
        /// Shares the caller asked to burn.
        requested: Liquidity,
        /// Shares the caller actually owns.
        available: Liquidity,
    },

    /// The pool holds less of an asset than an operation must pay out.
    #[error("insufficient reserve: need {needed}, pool holds {available}")]
    InsufficientReserve {
        /// Amount the operation must pay out.
        needed: Amount,
        /// Live pool balance.
        available: Amount,
    },

    /// A reserve is zero while liquidity is outstanding.
    #[error("zero reserve with outstanding liquidity")]
    ZeroReserve,

    /// Arithmetic overflow.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// Arithmetic underflow.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// Division by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The asset ledger rejected a transfer.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// A transfer failed and a transfer that had already settled could not
    /// be reversed.  The pool has re-read its reserves from the ledger.
    #[error("settled transfer could not be reversed: {0}")]
    UnwindFailed(LedgerError),
}

/// Errors reported by an [`AssetLedger`](crate::traits::AssetLedger).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// The asset is not known to the ledger.
    #[error("unknown asset {0}")]
    UnknownAsset(Address),

    /// The asset is already registered.
    #[error("asset {0} is already registered")]
    AssetExists(Address),

    /// The sender does not hold enough of the asset.
    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance {
        /// Amount requested.
        needed: Amount,
        /// Amount held.
        available: Amount,
    },

    /// The spender is not approved for enough of the owner's balance.
    #[error("insufficient allowance: need {needed}, approved {approved}")]
    InsufficientAllowance {
        /// Amount requested.
        needed: Amount,
        /// Amount approved.
        approved: Amount,
    },

    /// Crediting the recipient would overflow its balance.
    #[error("balance overflow")]
    BalanceOverflow,
}

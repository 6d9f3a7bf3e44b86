//! Events emitted by committed pool operations.

use core::fmt;

use super::{Address, Amount, Liquidity};

/// An observable record of a committed pool operation.
///
/// Events are appended only after every transfer of an operation has
/// succeeded, so an indexer never sees an event for a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PoolEvent {
    /// A swap was executed.
    Swap {
        /// Caller that sold `amount_in` and received `amount_out`.
        actor: Address,
        /// Asset sold to the pool.
        token_in: Address,
        /// Asset bought from the pool.
        token_out: Address,
        /// Amount pulled from the caller.
        amount_in: Amount,
        /// Amount pushed to the caller.
        amount_out: Amount,
    },
    /// Liquidity was deposited.
    AddLiquidity {
        /// Depositor.
        actor: Address,
        /// Asset A pulled.
        amount_a: Amount,
        /// Asset B pulled.
        amount_b: Amount,
        /// Shares minted.
        liquidity_minted: Liquidity,
    },
    /// Liquidity was withdrawn.
    RemoveLiquidity {
        /// Withdrawer.
        actor: Address,
        /// Asset A paid out.
        amount_a: Amount,
        /// Asset B paid out.
        amount_b: Amount,
        /// Shares burned.
        liquidity_burned: Liquidity,
    },
}

impl PoolEvent {
    /// Returns the account that triggered the event.
    #[must_use]
    pub const fn actor(&self) -> Address {
        match self {
            Self::Swap { actor, .. }
            | Self::AddLiquidity { actor, .. }
            | Self::RemoveLiquidity { actor, .. } => *actor,
        }
    }
}

impl fmt::Display for PoolEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swap {
                actor,
                token_in,
                token_out,
                amount_in,
                amount_out,
            } => write!(
                f,
                "Swap(actor={actor}, {amount_in} {token_in} -> {amount_out} {token_out})"
            ),
            Self::AddLiquidity {
                actor,
                amount_a,
                amount_b,
                liquidity_minted,
            } => write!(
                f,
                "AddLiquidity(actor={actor}, a={amount_a}, b={amount_b}, minted={liquidity_minted})"
            ),
            Self::RemoveLiquidity {
                actor,
                amount_a,
                amount_b,
                liquidity_burned,
            } => write!(
                f,
                "RemoveLiquidity(actor={actor}, a={amount_a}, b={amount_b}, burned={liquidity_burned})"
            ),
        }
    }
}

//! Outcomes of the three mutating pool operations.

use core::fmt;

use super::{Address, Amount, Liquidity};

/// The outcome of a swap.
///
/// Also returned by [`Pool::quote_swap`](crate::pool::Pool::quote_swap),
/// in which case nothing has been transferred yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SwapReceipt {
    token_in: Address,
    token_out: Address,
    amount_in: Amount,
    amount_out: Amount,
}

impl SwapReceipt {
    pub(crate) const fn new(
        token_in: Address,
        token_out: Address,
        amount_in: Amount,
        amount_out: Amount,
    ) -> Self {
        Self {
            token_in,
            token_out,
            amount_in,
            amount_out,
        }
    }

    /// Asset sold to the pool.
    #[must_use]
    pub const fn token_in(&self) -> Address {
        self.token_in
    }

    /// Asset bought from the pool.
    #[must_use]
    pub const fn token_out(&self) -> Address {
        self.token_out
    }

    /// Amount pulled from the caller.
    pub const fn amount_in(&self) -> Amount {
        self.amount_in
    }

    /// Amount pushed to the caller.
    pub const fn amount_out(&self) -> Amount {
        self.amount_out
    }
}

impl fmt::Display for SwapReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Swap({} {} -> {} {})",
            self.amount_in, self.token_in, self.amount_out, self.token_out
        )
    }
}

/// The outcome of a deposit: amounts actually pulled and shares minted.
///
/// On a proportional deposit the pulled amounts can be smaller than the
/// amounts offered; the excess simply stays with the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DepositReceipt {
    amount_a: Amount,
    amount_b: Amount,
    liquidity: Liquidity,
}

impl DepositReceipt {
    pub(crate) const fn new(amount_a: Amount, amount_b: Amount, liquidity: Liquidity) -> Self {
        Self {
            amount_a,
            amount_b,
            liquidity,
        }
    }

    /// Amount of asset A pulled.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of asset B pulled.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Shares minted to the depositor.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }
}

impl fmt::Display for DepositReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Deposit(a={}, b={}, minted={})",
            self.amount_a, self.amount_b, self.liquidity
        )
    }
}

/// The outcome of a withdrawal: shares burned and amounts paid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WithdrawalReceipt {
    amount_a: Amount,
    amount_b: Amount,
    liquidity: Liquidity,
}

impl WithdrawalReceipt {
    pub(crate) const fn new(amount_a: Amount, amount_b: Amount, liquidity: Liquidity) -> Self {
        Self {
            amount_a,
            amount_b,
            liquidity,
        }
    }

    /// Amount of asset A paid out.
    pub const fn amount_a(&self) -> Amount {
        self.amount_a
    }

    /// Amount of asset B paid out.
    pub const fn amount_b(&self) -> Amount {
        self.amount_b
    }

    /// Shares burned.
    #[must_use]
    pub const fn liquidity(&self) -> Liquidity {
        self.liquidity
    }
}

impl fmt::Display for WithdrawalReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Withdrawal(a={}, b={}, burned={})",
            self.amount_a, self.amount_b, self.liquidity
        )
    }
}

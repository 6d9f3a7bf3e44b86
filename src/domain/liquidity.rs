//! Liquidity share units.

use core::fmt;

use super::Amount;

/// A quantity of liquidity shares.
///
/// Kept distinct from [`Amount`] so that share counts and asset amounts
/// cannot be mixed up by accident.  A holder of `l` shares owns
/// `l / total_supply` of each reserve.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Liquidity;
///
/// let minted = Liquidity::new(2_000);
/// assert_eq!(minted.checked_sub(&Liquidity::new(500)), Some(Liquidity::new(1_500)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Liquidity(u128);

impl Liquidity {
    /// No liquidity.
    pub const ZERO: Self = Self(0);

    /// Creates a new `Liquidity` from a raw `u128` value.
    #[must_use]
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if there are no shares.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checked addition.
    #[must_use]
    pub const fn checked_add(&self, other: &Self) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked subtraction.
    #[must_use]
    pub const fn checked_sub(&self, other: &Self) -> Option<Self> {
        match self.0.checked_sub(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Reinterprets the share count as an [`Amount`] for mixed
    /// share/asset formulas such as `liquidity * reserve / supply`.
    pub const fn as_amount(&self) -> Amount {
        Amount::new(self.0)
    }
}

impl From<Amount> for Liquidity {
    fn from(amount: Amount) -> Self {
        Self(amount.get())
    }
}

impl fmt::Display for Liquidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_constant() {
        assert!(Liquidity::ZERO.is_zero());
        assert_eq!(Liquidity::default(), Liquidity::ZERO);
    }

    #[test]
    fn add_overflow() {
        assert_eq!(Liquidity::new(u128::MAX).checked_add(&Liquidity::new(1)), None);
    }

    #[test]
    fn sub_underflow() {
        assert_eq!(Liquidity::new(1).checked_sub(&Liquidity::new(2)), None);
    }

    #[test]
    fn amount_conversions() {
        let l = Liquidity::new(2_000);
        assert_eq!(l.as_amount(), Amount::new(2_000));
        assert_eq!(Liquidity::from(Amount::new(2_000)), l);
    }

    #[test]
    fn display() {
        assert_eq!(Liquidity::new(1_000).to_string(), "1000");
    }
}

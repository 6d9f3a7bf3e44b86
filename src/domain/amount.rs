//! Raw asset amount with checked arithmetic.

use core::fmt;

/// A raw asset amount in the asset's smallest unit.
///
/// Arithmetic is checked and returns `None` on overflow, underflow, or
/// division by zero.  Division always floors: every quantity the pool pays
/// out or mints is rounded in the pool's favour.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Amount;
///
/// let a = Amount::new(1_000);
/// let b = Amount::new(4_000);
/// assert_eq!(a.checked_mul(&b), Some(Amount::new(4_000_000)));
/// assert_eq!(Amount::new(400_000).checked_div(&Amount::new(1_100)), Some(Amount::new(363)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[must_use]
pub struct Amount(u128);

impl Amount {
    /// Zero amount.
    pub const ZERO: Self = Self(0);

    /// Maximum representable amount.
    pub const MAX: Self = Self(u128::MAX);

    /// Creates a new `Amount` from a raw `u128` value.
    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    /// Returns the underlying `u128` value.
    #[must_use]
    pub const fn get(&self) -> u128 {
        self.0
    }

    /// Returns `true` if the amount is zero.
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

    /// Checked multiplication.
    #[must_use]
    pub const fn checked_mul(&self, other: &Self) -> Option<Self> {
        match self.0.checked_mul(other.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Checked floor division.  Returns `None` if `divisor` is zero.
    #[must_use]
    pub const fn checked_div(&self, divisor: &Self) -> Option<Self> {
        match self.0.checked_div(divisor.0) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }
}

impl From<u128> for Amount {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constants() {
        assert_eq!(Amount::ZERO.get(), 0);
        assert_eq!(Amount::MAX.get(), u128::MAX);
        assert_eq!(Amount::default(), Amount::ZERO);
    }

    #[test]
    fn add_and_overflow() {
        assert_eq!(
            Amount::new(100).checked_add(&Amount::new(200)),
            Some(Amount::new(300))
        );
        assert_eq!(Amount::MAX.checked_add(&Amount::new(1)), None);
    }

    #[test]
    fn sub_and_underflow() {
        assert_eq!(
            Amount::new(4_000).checked_sub(&Amount::new(363)),
            Some(Amount::new(3_637))
        );
        assert_eq!(Amount::new(1).checked_sub(&Amount::new(2)), None);
    }

    #[test]
    fn mul_overflow() {
        assert_eq!(Amount::MAX.checked_mul(&Amount::new(2)), None);
        assert_eq!(
            Amount::MAX.checked_mul(&Amount::ZERO),
            Some(Amount::ZERO)
        );
    }

    #[test]
    fn div_floors() {
        assert_eq!(
            Amount::new(10).checked_div(&Amount::new(3)),
            Some(Amount::new(3))
        );
        assert_eq!(
            Amount::new(1).checked_div(&Amount::new(2)),
            Some(Amount::ZERO)
        );
    }

    #[test]
    fn div_by_zero_is_none() {
        assert_eq!(Amount::new(100).checked_div(&Amount::ZERO), None);
    }

    #[test]
    fn min_picks_smaller() {
        assert_eq!(Amount::new(7).min(Amount::new(3)), Amount::new(3));
    }

    #[test]
    fn display() {
        assert_eq!(Amount::new(1_000_000).to_string(), "1000000");
    }
}

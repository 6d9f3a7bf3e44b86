//! Chain-agnostic account and asset identity.

use core::fmt;

/// A 32-byte identity used for every party the pool deals with: the two
/// assets, the pool's own holding account, and the callers.
///
/// All 32-byte sequences are valid addresses.  Whether an address names a
/// fungible asset is a question for the
/// [`AssetLedger`](crate::traits::AssetLedger), not for this type.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::domain::Address;
///
/// let usdc = Address::from_bytes([1u8; 32]);
/// assert_eq!(usdc.as_bytes(), [1u8; 32]);
/// assert_ne!(usdc, Address::zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address([u8; 32]);

impl Address {
    /// Creates an `Address` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }

    /// Returns the all-zero address.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0u8; 32])
    }

    /// Returns `true` for the all-zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl fmt::Display for Address {
    /// Formats as `0x` followed by the first and last four bytes in hex.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x")?;
        for b in &self.0[..4] {
            write!(f, "{b:02x}")?;
        }
        write!(f, "..")?;
        for b in &self.0[28..] {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}

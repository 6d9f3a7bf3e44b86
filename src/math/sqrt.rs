//! Integer square root.

/// Returns `floor(sqrt(n))` via Newton's method.
///
/// Bootstrap deposits mint `isqrt(amount_a * amount_b)` shares.
///
/// # Examples
///
/// ```
/// use hydra_cpmm::math::isqrt;
///
/// assert_eq!(isqrt(4_000_000), 2_000);
/// assert_eq!(isqrt(15), 3);
/// ```
#[must_use]
pub const fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    let mut x = n;
    let mut y = x.div_ceil(2);
    while y < x {
        x = y;
        y = (x + n / x) / 2;
    }
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_values() {
        assert_eq!(isqrt(0), 0);
        assert_eq!(isqrt(1), 1);
        assert_eq!(isqrt(2), 1);
        assert_eq!(isqrt(3), 1);
        assert_eq!(isqrt(4), 2);
        assert_eq!(isqrt(8), 2);
        assert_eq!(isqrt(9), 3);
    }

    #[test]
    fn perfect_squares() {
        assert_eq!(isqrt(4_000_000), 2_000);
        assert_eq!(isqrt(1_000_000_000_000), 1_000_000);
    }

    #[test]
    fn floors_non_squares() {
        // 1000 * 3000 = 3_000_000, sqrt ~ 1732.05
        assert_eq!(isqrt(3_000_000), 1_732);
    }

    #[test]
    fn u128_max_does_not_overflow() {
        let r = isqrt(u128::MAX);
        assert_eq!(r, u128::from(u64::MAX));
        assert!(r.checked_mul(r).is_some());
    }
}

//! Property-based tests for the pool's arithmetic and bookkeeping.
//!
//! 1. **Bootstrap** mints `isqrt(a × b)` and seeds `k_last = a × b`.
//! 2. **Swap invariant** never leaves the reserve product below `k_last`.
//! 3. **Swap monotonicity**: a larger input never buys less output.
//! 4. **Proportional deposit** never pulls more than offered.
//! 5. **Round trip**: deposit then withdraw returns at most what went in.
//! 6. **Conservation**: ledger balances equal cached reserves after every
//!    operation, and share supply equals the sum of holder balances.
//! 7. **Atomicity**: a rejected operation leaves the ledger untouched.
//! 8. **Funded reserves**: while shares are outstanding neither reserve is
//!    zero, so the deposit path's zero-reserve guard never fires.

#![allow(clippy::panic)]

use proptest::prelude::*;

use super::{swap_output, Pool};
use crate::domain::{Address, Amount, Liquidity};
use crate::error::AmmError;
use crate::ledger::InMemoryLedger;
use crate::math::isqrt;
use crate::traits::AssetLedger;

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn addr(b: u8) -> Address {
    Address::from_bytes([b; 32])
}

const FUNDING: u128 = 1_000_000_000_000;

fn make_pool() -> Pool<InMemoryLedger> {
    let mut ledger = InMemoryLedger::with_assets(&[addr(1), addr(2)]);
    for who in [addr(10), addr(11)] {
        for asset in [addr(1), addr(2)] {
            let Ok(()) = ledger.mint(&asset, &who, Amount::new(FUNDING)) else {
                panic!("mint");
            };
            let Ok(()) = ledger.approve(&asset, &who, &addr(100), Amount::MAX) else {
                panic!("approve");
            };
        }
    }
    let Ok(pool) = Pool::new(addr(100), addr(1), addr(2), ledger) else {
        panic!("valid pool");
    };
    pool
}

fn bootstrapped(ra: u128, rb: u128) -> Pool<InMemoryLedger> {
    let mut pool = make_pool();
    let Ok(_) = pool.add_liquidity(addr(10), Amount::new(ra), Amount::new(rb)) else {
        panic!("bootstrap");
    };
    pool
}

fn assert_cache_matches_ledger(pool: &Pool<InMemoryLedger>) -> Result<(), TestCaseError> {
    let pa = pool.ledger().balance_of(&addr(1), &addr(100));
    let pb = pool.ledger().balance_of(&addr(2), &addr(100));
    let (ra, rb) = pool.reserves();
    prop_assert_eq!(pa, Ok(ra));
    prop_assert_eq!(pb, Ok(rb));
    let holders = pool
        .liquidity_of(&addr(10))
        .checked_add(&pool.liquidity_of(&addr(11)));
    prop_assert_eq!(holders, Some(pool.total_supply()));
    Ok(())
}

/// Reserve values in range [1_000, 10_000_000].
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=10_000_000
}

fn amount_strategy() -> impl Strategy<Value = u128> {
    1u128..=1_000_000
}

// ---------------------------------------------------------------------------
// 1. Bootstrap
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_bootstrap_mints_floor_sqrt(ra in reserve_strategy(), rb in reserve_strategy()) {
        let pool = bootstrapped(ra, rb);
        let minted = pool.total_supply().get();
        prop_assert_eq!(minted, isqrt(ra * rb));
        prop_assert!(minted * minted <= ra * rb);
        prop_assert!((minted + 1) * (minted + 1) > ra * rb);
        prop_assert_eq!(pool.k_last(), Amount::new(ra * rb));
    }
}

// ---------------------------------------------------------------------------
// 2–3. Swaps
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_swap_keeps_product_at_or_above_k_last(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        amount_in in amount_strategy(),
        a_to_b in any::<bool>(),
    ) {
        let mut pool = bootstrapped(ra, rb);
        let (token_in, token_out) = if a_to_b { (addr(1), addr(2)) } else { (addr(2), addr(1)) };
        match pool.swap(addr(11), token_in, token_out, Amount::new(amount_in)) {
            Ok(receipt) => {
                prop_assert!(!receipt.amount_out().is_zero());
                let state = pool.state();
                let Some(product) = state.live_product() else {
                    panic!("product fits in u128");
                };
                prop_assert!(product >= pool.k_last());
            }
            Err(e) => prop_assert_eq!(e, AmmError::InsufficientOutputAmount),
        }
        assert_cache_matches_ledger(&pool)?;
    }

    #[test]
    fn prop_swap_output_is_monotonic(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        small in amount_strategy(),
        extra in amount_strategy(),
    ) {
        let k = Amount::new(ra * rb);
        let out = |amount: u128| {
            swap_output(Amount::new(ra), Amount::new(rb), Amount::new(amount), k)
                .map_or(0, |a| a.get())
        };
        prop_assert!(out(small) <= out(small + extra));
        prop_assert!(out(small + extra) < rb);
    }
}

// ---------------------------------------------------------------------------
// 4–5. Liquidity
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_deposit_never_pulls_more_than_offered(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in amount_strategy(),
        db in amount_strategy(),
    ) {
        let mut pool = bootstrapped(ra, rb);
        match pool.add_liquidity(addr(11), Amount::new(da), Amount::new(db)) {
            Ok(receipt) => {
                prop_assert!(receipt.amount_a() <= Amount::new(da));
                prop_assert!(receipt.amount_b() <= Amount::new(db));
                prop_assert!(!receipt.liquidity().is_zero());
            }
            Err(e) => prop_assert!(matches!(e, AmmError::ZeroAmount(_))),
        }
        assert_cache_matches_ledger(&pool)?;
    }

    #[test]
    fn prop_round_trip_returns_at_most_deposit(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        da in amount_strategy(),
        db in amount_strategy(),
    ) {
        let mut pool = bootstrapped(ra, rb);
        let Ok(dep) = pool.add_liquidity(addr(11), Amount::new(da), Amount::new(db)) else {
            return Ok(());
        };
        let Ok(wd) = pool.remove_liquidity(addr(11), dep.liquidity()) else {
            panic!("withdrawing freshly minted shares must succeed");
        };
        prop_assert!(wd.amount_a() <= dep.amount_a());
        prop_assert!(wd.amount_b() <= dep.amount_b());
        prop_assert_eq!(pool.liquidity_of(&addr(11)), Liquidity::ZERO);
        assert_cache_matches_ledger(&pool)?;
    }

    #[test]
    fn prop_full_withdrawal_empties_pool(ra in reserve_strategy(), rb in reserve_strategy()) {
        let mut pool = bootstrapped(ra, rb);
        let supply = pool.total_supply();
        let Ok(wd) = pool.remove_liquidity(addr(10), supply) else {
            panic!("full withdrawal");
        };
        prop_assert_eq!(wd.amount_a(), Amount::new(ra));
        prop_assert_eq!(wd.amount_b(), Amount::new(rb));
        prop_assert_eq!(pool.reserves(), (Amount::ZERO, Amount::ZERO));
    }
}

// ---------------------------------------------------------------------------
// 6–7. Conservation and atomicity over operation sequences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
enum Op {
    Swap { a_to_b: bool, amount: u128 },
    Add { a: u128, b: u128 },
    Remove { per_mille: u128 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (any::<bool>(), 0u128..=100_000).prop_map(|(a_to_b, amount)| Op::Swap { a_to_b, amount }),
        (0u128..=100_000, 0u128..=100_000).prop_map(|(a, b)| Op::Add { a, b }),
        (0u128..=1_000).prop_map(|per_mille| Op::Remove { per_mille }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_operation_sequences_conserve_balances(
        ra in reserve_strategy(),
        rb in reserve_strategy(),
        ops in prop::collection::vec(op_strategy(), 1..20),
    ) {
        let mut pool = bootstrapped(ra, rb);
        let trader = addr(11);
        for op in ops {
            let before = pool.ledger().clone();
            let state_before = pool.state();
            let events_before = pool.events().len();
            let result = match op {
                Op::Swap { a_to_b, amount } => {
                    let (tin, tout) = if a_to_b { (addr(1), addr(2)) } else { (addr(2), addr(1)) };
                    pool.swap(trader, tin, tout, Amount::new(amount)).map(|_| ())
                }
                Op::Add { a, b } => pool
                    .add_liquidity(trader, Amount::new(a), Amount::new(b))
                    .map(|_| ()),
                Op::Remove { per_mille } => {
                    let owned = pool.liquidity_of(&trader).get();
                    pool.remove_liquidity(trader, Liquidity::new(owned * per_mille / 1_000))
                        .map(|_| ())
                }
            };
            if result.is_err() {
                prop_assert_eq!(pool.ledger(), &before);
                prop_assert_eq!(pool.state(), state_before);
                prop_assert_eq!(pool.events().len(), events_before);
            } else {
                prop_assert_eq!(pool.events().len(), events_before + 1);
            }
            assert_cache_matches_ledger(&pool)?;
            // shares outstanding imply both reserves are funded
            let (res_a, res_b) = pool.reserves();
            prop_assert!(pool.total_supply().is_zero() || (!res_a.is_zero() && !res_b.is_zero()));
        }
    }
}

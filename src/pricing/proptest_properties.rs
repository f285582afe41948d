//! Property-based tests using `proptest` for the pricing invariants.
//!
//! 1. **Canonical order**: `canonicalize(a, b) == canonicalize(b, a)`.
//! 2. **Derivation determinism**: handle independent of argument order.
//! 3. **Inverse coverage**: the input from `amount_in_for` always buys at
//!    least the requested output.
//! 4. **Bounded round trip**: `amount_in_for(amount_out_for(x)) <= x + 1`.
//! 5. **Monotonicity**: in both directions.
//! 6. **Invariant preservation**: `k` never decreases across a swap.
//! 7. **Route consistency**: a one-hop route equals a single swap.

use alloy_primitives::{Address, B256};
use proptest::prelude::*;

use crate::config::PoolConfig;
use crate::domain::{Amount, AssetId, FeeRate, PoolFee, FEE_DENOMINATOR};
use crate::pricing::{
    amount_in_for, amount_out_for, canonicalize, derive_pool, get_amounts_in, get_amounts_out,
};
use crate::registry::InMemoryRegistry;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

/// Reserves spanning small pools up to 18-decimal balances in the billions.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    prop_oneof![
        1u128..=1_000u128,
        1_000u128..=10_000_000u128,
        10_000_000u128..=1_000_000_000_000_000_000_000_000_000u128,
    ]
}

/// Fees up to 10%; a 100% fee is covered by unit tests.
fn fee_strategy() -> impl Strategy<Value = PoolFee> {
    prop_oneof![
        Just(PoolFee::NoFee),
        (0u16..=100u16)
            .prop_filter_map("valid rate", |v| FeeRate::new(v).ok().map(PoolFee::FeeInToken)),
    ]
}

fn asset_strategy() -> impl Strategy<Value = AssetId> {
    any::<[u8; 20]>()
        .prop_filter("non-zero asset", |b| b.iter().any(|x| *x != 0))
        .prop_map(AssetId::from_bytes)
}

fn k(x: Amount, y: Amount) -> Amount {
    let Some(product) = x.checked_mul(&y) else {
        panic!("test magnitudes keep the product within 256 bits");
    };
    product
}

// ---------------------------------------------------------------------------
// Address derivation
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_canonicalize_order_independent(a in asset_strategy(), b in asset_strategy()) {
        prop_assume!(a != b);
        let (Ok(ab), Ok(ba)) = (canonicalize(a, b), canonicalize(b, a)) else {
            panic!("distinct non-zero assets canonicalize");
        };
        prop_assert_eq!(ab, ba);
        prop_assert!(ab.token0() < ab.token1());
    }

    #[test]
    fn prop_derive_pool_order_independent(
        a in asset_strategy(),
        b in asset_strategy(),
        registry in any::<[u8; 20]>(),
        fingerprint in any::<[u8; 32]>(),
    ) {
        prop_assume!(a != b);
        let reg = InMemoryRegistry::new(Address::new(registry), B256::new(fingerprint));
        let (Ok(h1), Ok(h2)) = (derive_pool(&reg, a, b), derive_pool(&reg, b, a)) else {
            panic!("derivation succeeds for valid pairs");
        };
        prop_assert_eq!(h1, h2);
    }
}

// ---------------------------------------------------------------------------
// Swap math
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_inverse_covers_requested_output(
        reserve_in in reserve_strategy(),
        reserve_out in 2u128..=1_000_000_000_000_000_000_000_000_000u128,
        fraction in 1u32..=999u32,
        fee in fee_strategy(),
    ) {
        let wanted = (reserve_out / 1_000 * u128::from(fraction)).clamp(1, reserve_out - 1);
        let Ok(needed) = amount_in_for(
            Amount::new(wanted), Amount::new(reserve_in), Amount::new(reserve_out), fee,
        ) else {
            panic!("valid inverse swap");
        };
        let Ok(received) = amount_out_for(
            needed, Amount::new(reserve_in), Amount::new(reserve_out), fee,
        ) else {
            panic!("valid forward swap");
        };
        prop_assert!(
            received >= Amount::new(wanted),
            "paid {} for {} but received {}", needed, wanted, received
        );
    }

    #[test]
    fn prop_round_trip_overshoots_by_at_most_one(
        reserve_in in reserve_strategy(),
        reserve_out in reserve_strategy(),
        amount_in in 1u128..=1_000_000_000_000u128,
        fee in fee_strategy(),
    ) {
        let Ok(out) = amount_out_for(
            Amount::new(amount_in), Amount::new(reserve_in), Amount::new(reserve_out), fee,
        ) else {
            panic!("valid forward swap");
        };
        prop_assume!(!out.is_zero());
        let Ok(back) = amount_in_for(out, Amount::new(reserve_in), Amount::new(reserve_out), fee)
        else {
            panic!("output is below reserve, inverse is defined");
        };
        prop_assert!(back <= Amount::new(amount_in + 1));
    }

    #[test]
    fn prop_amount_out_monotonic(
        reserve_in in reserve_strategy(),
        reserve_out in reserve_strategy(),
        x in 1u128..=1_000_000_000_000u128,
        dx in 0u128..=1_000_000_000u128,
        fee in fee_strategy(),
    ) {
        let (ri, ro) = (Amount::new(reserve_in), Amount::new(reserve_out));
        let (Ok(lo), Ok(hi)) = (
            amount_out_for(Amount::new(x), ri, ro, fee),
            amount_out_for(Amount::new(x + dx), ri, ro, fee),
        ) else {
            panic!("valid forward swaps");
        };
        prop_assert!(hi >= lo);
        prop_assert!(hi < ro);
    }

    #[test]
    fn prop_amount_in_monotonic(
        reserve_in in reserve_strategy(),
        reserve_out in 3u128..=10_000_000u128,
        y in 1u128..=10_000_000u128,
        dy in 0u128..=10_000_000u128,
        fee in fee_strategy(),
    ) {
        let y_lo = y.min(reserve_out - 2);
        let y_hi = (y_lo + dy).min(reserve_out - 1);
        let (ri, ro) = (Amount::new(reserve_in), Amount::new(reserve_out));
        let (Ok(lo), Ok(hi)) = (
            amount_in_for(Amount::new(y_lo), ri, ro, fee),
            amount_in_for(Amount::new(y_hi), ri, ro, fee),
        ) else {
            panic!("valid inverse swaps");
        };
        prop_assert!(hi >= lo);
    }

    #[test]
    fn prop_invariant_never_decreases(
        reserve_in in 1_000u128..=1_000_000_000_000u128,
        reserve_out in 1_000u128..=1_000_000_000_000u128,
        amount_in in 1u128..=1_000_000_000u128,
        fee in fee_strategy(),
    ) {
        let Ok(out) = amount_out_for(
            Amount::new(amount_in), Amount::new(reserve_in), Amount::new(reserve_out), fee,
        ) else {
            panic!("valid forward swap");
        };
        // fee-adjusted invariant: (1000·x + in·(1000 − fee))·(y − out) ≥ 1000·x·y
        let scale = u128::from(FEE_DENOMINATOR);
        let rate = u128::from(FEE_DENOMINATOR - fee.rate().get());
        let Some(y_after) = Amount::new(reserve_out).checked_sub(&out) else {
            panic!("output never exceeds reserve");
        };
        let before = k(Amount::new(reserve_in * scale), Amount::new(reserve_out));
        let after = k(Amount::new(reserve_in * scale + amount_in * rate), y_after);
        prop_assert!(after >= before);
    }
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_single_hop_route_matches_swap(
        reserve_a in 1_000u128..=1_000_000_000u128,
        reserve_b in 1_000u128..=1_000_000_000u128,
        amount_in in 1u128..=1_000_000u128,
        fee in fee_strategy(),
    ) {
        let a = AssetId::from_bytes([1u8; 20]);
        let b = AssetId::from_bytes([2u8; 20]);
        let pool = PoolConfig::new(b, a, Amount::new(reserve_b), Amount::new(reserve_a), fee);
        let Ok(reg) = InMemoryRegistry::new(Address::repeat_byte(3), B256::repeat_byte(4))
            .with_pool(&pool)
        else {
            panic!("valid pool");
        };
        let Ok(single) = amount_out_for(
            Amount::new(amount_in), Amount::new(reserve_a), Amount::new(reserve_b), fee,
        ) else {
            panic!("valid forward swap");
        };
        let Ok(route) = get_amounts_out(&reg, Amount::new(amount_in), &[a, b]) else {
            panic!("valid route");
        };
        prop_assert_eq!(route, vec![Amount::new(amount_in), single]);

        prop_assume!(!single.is_zero());
        let Ok(back) = get_amounts_in(&reg, single, &[a, b]) else {
            panic!("valid backward route");
        };
        prop_assert_eq!(back[1], single);
        prop_assert!(back[0] <= Amount::new(amount_in + 1));
    }
}

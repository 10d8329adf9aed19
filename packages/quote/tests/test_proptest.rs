// Property-Based Testing with Proptest
// Run with: cargo test -p yieldcore-quote --test test_proptest

mod common;

use common::*;
use proptest::prelude::*;
use soroban_sdk::Env;
use yieldcore_math::FixedPoint;
use yieldcore_quote::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: min_received <= out_amount <= gross output, and the fee
    /// accounts for the gap between gross and out
    #[test]
    fn prop_quote_ordering(
        amount in 1u128..1_000_000_000_000_000_000_000_000,
        price in 1u128..100_000_000_000_000_000_000,
        fee_bps in 0u32..=10_000,
        slippage_bps in 0u32..=5_000,
    ) {
        let env = Env::default();
        let catalog = setup_catalog(&env);
        let in_amount = FixedPoint::from_raw(amount);
        let price = FixedPoint::from_raw(price);

        let q = quote(&env, &catalog, TOKEN_A, TOKEN_B, in_amount, slippage_bps, fee_bps, price, 0)
            .unwrap();
        let gross = expected_output(&env, in_amount, price).unwrap();

        prop_assert!(q.min_received <= q.out_amount);
        prop_assert!(q.out_amount <= gross);
        prop_assert_eq!(q.out_amount.checked_add(q.fee_amount).unwrap(), gross);
    }

    /// Property: a larger slippage tolerance never raises the floor
    #[test]
    fn prop_slippage_monotonic(
        amount in 1u128..1_000_000_000_000_000_000_000,
        s1 in 0u32..=5_000,
        s2 in 0u32..=5_000,
    ) {
        let env = Env::default();
        let catalog = setup_catalog(&env);
        let (lo, hi) = if s1 <= s2 { (s1, s2) } else { (s2, s1) };
        let in_amount = FixedPoint::from_raw(amount);

        let tight = quote(&env, &catalog, TOKEN_A, TOKEN_B, in_amount, lo, 30, units(2), 0).unwrap();
        let loose = quote(&env, &catalog, TOKEN_A, TOKEN_B, in_amount, hi, 30, units(2), 0).unwrap();

        prop_assert!(loose.min_received <= tight.min_received);
        prop_assert_eq!(loose.out_amount, tight.out_amount);
    }

    /// Property: price impact is forwarded unchanged
    #[test]
    fn prop_price_impact_forwarded(impact in 0u32..=10_000) {
        let env = Env::default();
        let catalog = setup_catalog(&env);

        let q = quote(&env, &catalog, TOKEN_B, TOKEN_C, units(1), 0, 0, units(1), impact).unwrap();
        prop_assert_eq!(q.price_impact_bps, impact);
    }
}

// Property-Based Testing with Proptest
// Run with: cargo test -p yieldcore-math --test test_proptest

use yieldcore_math::*;
use soroban_sdk::Env;
use proptest::prelude::*;

// ============================================================
// FIXED-POINT PROPERTY TESTS
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: a * 1.0 = a
    #[test]
    fn prop_mul_identity(a in 0u128..u128::MAX / 2) {
        let env = Env::default();
        let value = FixedPoint::from_raw(a);
        prop_assert_eq!(value.mul(&env, FixedPoint::ONE).unwrap(), value);
    }

    /// Property: a / 1.0 = a
    #[test]
    fn prop_div_identity(a in 0u128..u128::MAX / 2) {
        let env = Env::default();
        let value = FixedPoint::from_raw(a);
        prop_assert_eq!(value.div(&env, FixedPoint::ONE).unwrap(), value);
    }

    /// Property: (a + b) - b = a
    #[test]
    fn prop_add_sub_inverse(a in 0u128..u128::MAX / 2, b in 0u128..u128::MAX / 2) {
        let a = FixedPoint::from_raw(a);
        let b = FixedPoint::from_raw(b);
        prop_assert_eq!(a.checked_add(b).unwrap().checked_sub(b).unwrap(), a);
    }

    /// Property: a - b underflows exactly when b > a
    #[test]
    fn prop_sub_underflow(a in any::<u128>(), b in any::<u128>()) {
        let result = FixedPoint::from_raw(a).checked_sub(FixedPoint::from_raw(b));
        if b > a {
            prop_assert_eq!(result, Err(YieldError::Underflow));
        } else {
            prop_assert_eq!(result.unwrap().raw(), a - b);
        }
    }

    /// Property: mul_div(a, b, b) = a (when b != 0)
    #[test]
    fn prop_mul_div_identity(a in any::<u128>(), b in 1u128..u128::MAX) {
        let env = Env::default();
        prop_assert_eq!(mul_div(&env, a, b, b).unwrap(), a);
    }

    /// Property: mul_div never exceeds the true quotient and misses it by < 1
    #[test]
    fn prop_mul_div_floor(a in 0u128..(1u128 << 64), b in 0u128..(1u128 << 63), c in 1u128..u128::MAX) {
        let env = Env::default();
        let result = mul_div(&env, a, b, c).unwrap();
        let product = a * b;
        prop_assert!(result * c <= product);
        prop_assert!(product - result * c < c);
    }
}

// ============================================================
// RATE PROPERTY TESTS
// ============================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: APY is non-decreasing in APR
    #[test]
    fn prop_apy_monotonic(
        apr_bps in 0u32..100_000,
        step_bps in 1u32..1_000,
        n in MIN_COMPOUNDS_PER_YEAR..=MAX_COMPOUNDS_PER_YEAR
    ) {
        let env = Env::default();
        let low = apr_to_apy(&env, FixedPoint::from_bps(apr_bps), n).unwrap();
        let high = apr_to_apy(&env, FixedPoint::from_bps(apr_bps + step_bps), n).unwrap();
        prop_assert!(high > low, "apy({}) = {:?} vs apy({}) = {:?}", apr_bps, low, apr_bps + step_bps, high);
    }

    /// Property: APY is never below APR
    #[test]
    fn prop_apy_at_least_apr(apr_bps in 0u32..100_000, n in 1u32..=365) {
        let env = Env::default();
        let apr = FixedPoint::from_bps(apr_bps);
        let apy = apr_to_apy(&env, apr, n).unwrap();
        // flooring inside the power costs at most a few units of the last digit
        prop_assert!(apy.raw() + 1_000 >= apr.raw());
    }

    /// Property: apr_to_apy(0, n) = 0 for all valid n
    #[test]
    fn prop_zero_apr(n in MIN_COMPOUNDS_PER_YEAR..=MAX_COMPOUNDS_PER_YEAR) {
        let env = Env::default();
        prop_assert_eq!(apr_to_apy(&env, FixedPoint::ZERO, n).unwrap(), FixedPoint::ZERO);
    }

    /// Property: apy_to_apr returns the largest APR that does not overshoot
    #[test]
    fn prop_apy_to_apr_largest(apy_raw in 0u128..10_000_000_000_000_000_000, n in 2u32..=365) {
        let env = Env::default();
        let apy = FixedPoint::from_raw(apy_raw);
        let apr = apy_to_apr(&env, apy, n).unwrap();

        prop_assert!(apr_to_apy(&env, apr, n).unwrap() <= apy);
        prop_assert!(apr_to_apy(&env, FixedPoint::from_raw(apr.raw() + 1), n).unwrap() > apy);
    }
}

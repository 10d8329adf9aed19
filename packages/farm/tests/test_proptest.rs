// Property-Based Testing with Proptest
// Run with: cargo test -p yieldcore-farm --test test_proptest

mod common;

use common::*;
use proptest::prelude::*;
use soroban_sdk::Env;
use yieldcore_farm::*;
use yieldcore_math::FixedPoint;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Property: accrual over [t0, t1) equals bonus seconds at the
    /// multiplier plus normal seconds at 1x, wherever the bonus ends
    #[test]
    fn prop_bonus_split_matches_closed_form(
        rps in 1u128..1_000,
        multiplier in 1u32..10,
        bonus_end in 0u64..10_000,
        t0 in 0u64..10_000,
        dt in 0u64..10_000,
    ) {
        let env = Env::default();
        let mut registry = setup_bonus_registry(&env, rps, multiplier, bonus_end);
        let pid = add_pool(&env, &mut registry, &pool_config(100, 1), 0).unwrap();
        let mut pos = StakePosition::default();
        // one whole unit staked: acc_reward_per_share equals the reward itself
        deposit(&env, &mut registry, pid, &mut pos, units(1), t0).unwrap();

        let t1 = t0 + dt;
        update_pool(&env, &mut registry, pid, t1).unwrap();

        let bonus_seconds = t1.min(bonus_end).saturating_sub(t0.min(bonus_end));
        let normal_seconds = dt - bonus_seconds;
        let expected = rps * (bonus_seconds as u128 * multiplier as u128 + normal_seconds as u128);

        prop_assert_eq!(registry.pool(pid).unwrap().acc_reward_per_share, units(expected));
    }

    /// Property: settling in many steps gives the same accumulator as one jump
    #[test]
    fn prop_settle_path_independent(
        multiplier in 1u32..5,
        bonus_end in 0u64..5_000,
        steps in prop::collection::vec(0u64..1_000, 1..10),
    ) {
        let env = Env::default();
        let mut registry = setup_bonus_registry(&env, 3, multiplier, bonus_end);
        let pid = add_pool(&env, &mut registry, &pool_config(100, 1), 0).unwrap();
        let mut pos = StakePosition::default();
        deposit(&env, &mut registry, pid, &mut pos, units(1), 0).unwrap();

        let mut stepped = registry.clone();
        let mut now = 0u64;
        for dt in steps {
            now += dt;
            update_pool(&env, &mut stepped, pid, now).unwrap();
        }

        let mut jumped = registry.clone();
        update_pool(&env, &mut jumped, pid, now).unwrap();

        prop_assert_eq!(
            stepped.pool(pid).unwrap().acc_reward_per_share,
            jumped.pool(pid).unwrap().acc_reward_per_share
        );
    }

    /// Property: total_alloc_points tracks the sum of pool weights
    #[test]
    fn prop_alloc_points_invariant(
        weights in prop::collection::vec(0u64..10_000, 1..8),
        updates in prop::collection::vec((0usize..8, 0u64..10_000), 0..8),
    ) {
        let env = Env::default();
        let mut registry = setup_registry(&env, 1);
        let mut now = 0u64;

        for (i, w) in weights.iter().enumerate() {
            now += 10;
            add_pool(&env, &mut registry, &pool_config(*w, i as u32), now).unwrap();
            prop_assert_eq!(registry.total_alloc_points, sum_alloc_points(&registry));
        }

        for (pid, w) in updates {
            now += 10;
            let pid = (pid % weights.len()) as u32;
            set_alloc_points(&env, &mut registry, pid, w, now).unwrap();
            prop_assert_eq!(registry.total_alloc_points, sum_alloc_points(&registry));
        }
    }

    /// Property: raw stakes of any size settle, exit and stay within the emission
    #[test]
    fn prop_raw_stakes_never_block(
        amounts in prop::collection::vec(
            prop_oneof![1u128..1_000, 1u128..1_000_000_000_000_000_000_000_000],
            1..6,
        ),
        steps in prop::collection::vec(1u64..10_000, 1..6),
    ) {
        let env = Env::default();
        let mut registry = setup_registry(&env, 1);
        let pid = add_pool(&env, &mut registry, &pool_config(100, 1), 0).unwrap();
        let mut positions = Vec::new();
        let mut now = 0u64;

        for (i, amount) in amounts.iter().enumerate() {
            let mut pos = StakePosition::default();
            deposit(&env, &mut registry, pid, &mut pos, FixedPoint::from_raw(*amount), now).unwrap();
            positions.push(pos);
            now += steps[i % steps.len()];
            mass_update_pools(&env, &mut registry, now).unwrap();
        }

        let mut paid = FixedPoint::ZERO;
        for pos in positions.iter_mut() {
            let principal = pos.principal;
            withdraw(&env, &mut registry, pid, pos, principal, now).unwrap();
            paid = paid.checked_add(pos.rewards_owed).unwrap();
        }

        prop_assert_eq!(registry.pool(pid).unwrap().total_staked, FixedPoint::ZERO);
        prop_assert!(paid <= units(now as u128));
    }
}

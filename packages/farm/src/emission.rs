// SPDX-License-Identifier: MIT
// Allocation-weighted emission and bonus-window settlement

use soroban_sdk::Env;
use yieldcore_math::{mul_div, FixedPoint, YieldError};
use yieldcore_position::{accrue_reward_per_share, elapsed_within};
use crate::types::{FarmPool, FarmRegistry};

/// Reward a pool weighted `alloc_points` earns over `seconds` at `multiplier`
///
/// rewards_per_second * seconds * multiplier * alloc_points / total_alloc_points
fn pool_emission(
    env: &Env,
    registry: &FarmRegistry,
    alloc_points: u64,
    seconds: u64,
    multiplier: u32,
) -> Result<FixedPoint, YieldError> {
    if seconds == 0 || alloc_points == 0 || registry.total_alloc_points == 0 {
        return Ok(FixedPoint::ZERO);
    }

    let gross = registry
        .rewards_per_second
        .checked_mul_int(seconds)?
        .checked_mul_int(multiplier as u64)?;

    Ok(FixedPoint::from_raw(mul_div(
        env,
        gross.raw(),
        alloc_points as u128,
        registry.total_alloc_points as u128,
    )?))
}

/// Per-second reward flowing to `pool` at `now`
pub fn pool_rate(
    env: &Env,
    registry: &FarmRegistry,
    pool: &FarmPool,
    now: u64,
) -> Result<FixedPoint, YieldError> {
    if now < registry.start_time {
        return Ok(FixedPoint::ZERO);
    }
    pool_emission(env, registry, pool.alloc_points, 1, registry.multiplier_at(now))
}

/// Advance `pool` to `now` under the registry's current weights
///
/// An interval straddling `bonus_end_time` is split in two and each part
/// is accrued at its own multiplier. Time before `start_time` accrues nothing.
pub fn settle_pool(
    env: &Env,
    registry: &FarmRegistry,
    pool: &mut FarmPool,
    now: u64,
) -> Result<(), YieldError> {
    let from = pool.last_accrual_time;
    let bonus_seconds = elapsed_within(from, now, registry.start_time, registry.bonus_end_time);
    let normal_start = registry.start_time.max(registry.bonus_end_time);
    let normal_seconds = elapsed_within(from, now, normal_start, u64::MAX);

    if !pool.total_staked.is_zero() {
        let bonus_reward = pool_emission(
            env,
            registry,
            pool.alloc_points,
            bonus_seconds,
            registry.bonus_multiplier,
        )?;
        pool.acc_reward_per_share =
            accrue_reward_per_share(env, pool.acc_reward_per_share, bonus_reward, pool.total_staked)?;

        let normal_reward = pool_emission(env, registry, pool.alloc_points, normal_seconds, 1)?;
        pool.acc_reward_per_share =
            accrue_reward_per_share(env, pool.acc_reward_per_share, normal_reward, pool.total_staked)?;
    }

    if now > pool.last_accrual_time {
        pool.last_accrual_time = now;
    }

    Ok(())
}

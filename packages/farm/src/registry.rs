// SPDX-License-Identifier: MIT
// Registry mutation
//
// Reweighting only affects emission from the moment it happens: every pool
// is settled under the old weights before `total_alloc_points` changes.

use soroban_sdk::{log, Env};
use yieldcore_math::{FixedPoint, YieldError};
use crate::emission::{pool_rate, settle_pool};
use crate::types::{FarmPool, FarmRegistry, FarmPoolConfig};

/// Settle one pool to `now` and store it back
pub fn update_pool(env: &Env, registry: &mut FarmRegistry, pid: u32, now: u64) -> Result<(), YieldError> {
    let mut pool = registry.pool(pid)?;
    settle_pool(env, registry, &mut pool, now)?;
    registry.pools.set(pid, pool);
    Ok(())
}

/// Settle every pool to `now`
pub fn mass_update_pools(env: &Env, registry: &mut FarmRegistry, now: u64) -> Result<(), YieldError> {
    for pid in 0..registry.pool_count() {
        update_pool(env, registry, pid, now)?;
    }
    Ok(())
}

/// Register a new pool
///
/// # Returns
/// The new pool's index, or `PoolAlreadyExists` if the LP token is taken
pub fn add_pool(
    env: &Env,
    registry: &mut FarmRegistry,
    config: &FarmPoolConfig,
    now: u64,
) -> Result<u32, YieldError> {
    if registry.pools.iter().any(|p| p.lp_token_id == config.lp_token_id) {
        return Err(YieldError::PoolAlreadyExists);
    }

    mass_update_pools(env, registry, now)?;

    let total_alloc_points = registry
        .total_alloc_points
        .checked_add(config.alloc_points)
        .ok_or(YieldError::Overflow)?;

    registry.pools.push_back(FarmPool {
        alloc_points: config.alloc_points,
        lp_token_id: config.lp_token_id,
        acc_reward_per_share: FixedPoint::ZERO,
        total_staked: FixedPoint::ZERO,
        last_accrual_time: now.max(registry.start_time),
    });
    registry.total_alloc_points = total_alloc_points;

    let pid = registry.pool_count() - 1;
    log!(env, "farm pool added: pid {}, alloc points {}, total {}", pid, config.alloc_points, total_alloc_points);

    Ok(pid)
}

/// Change a pool's weight
pub fn set_alloc_points(
    env: &Env,
    registry: &mut FarmRegistry,
    pid: u32,
    alloc_points: u64,
    now: u64,
) -> Result<(), YieldError> {
    let old_points = registry.pool(pid)?.alloc_points;

    mass_update_pools(env, registry, now)?;

    let total_alloc_points = registry
        .total_alloc_points
        .checked_sub(old_points)
        .ok_or(YieldError::Underflow)?
        .checked_add(alloc_points)
        .ok_or(YieldError::Overflow)?;

    let mut pool = registry.pool(pid)?;
    pool.alloc_points = alloc_points;
    registry.pools.set(pid, pool);
    registry.total_alloc_points = total_alloc_points;

    log!(env, "farm pool reweighted: pid {}, alloc points {} -> {}", pid, old_points, alloc_points);

    Ok(())
}

/// Change the global emission, effective from `now`
pub fn set_rewards_per_second(
    env: &Env,
    registry: &mut FarmRegistry,
    rewards_per_second: FixedPoint,
    now: u64,
) -> Result<(), YieldError> {
    mass_update_pools(env, registry, now)?;
    registry.rewards_per_second = rewards_per_second;

    log!(env, "farm emission updated: {}", rewards_per_second.raw());

    Ok(())
}

/// rewards_per_second * multiplier(now) * alloc_points / total_alloc_points
pub fn effective_rate(
    env: &Env,
    registry: &FarmRegistry,
    pid: u32,
    now: u64,
) -> Result<FixedPoint, YieldError> {
    let pool = registry.pool(pid)?;
    pool_rate(env, registry, &pool, now)
}

// SPDX-License-Identifier: MIT
// Per-pool farm operations
//
// Farms have no lockup, so positions are always harvested at 1.0x and
// withdrawals never carry a penalty.

use soroban_sdk::{log, Env};
use yieldcore_math::{FixedPoint, YieldError, BOOST_NEUTRAL_BPS};
use yieldcore_position::{
    decrease_principal, harvest, increase_principal, pending, take_rewards, StakePosition,
    WithdrawOutcome,
};
use crate::emission::settle_pool;
use crate::types::FarmRegistry;

/// Stake `amount` of the pool's LP token
pub fn deposit(
    env: &Env,
    registry: &mut FarmRegistry,
    pid: u32,
    pos: &mut StakePosition,
    amount: FixedPoint,
    now: u64,
) -> Result<(), YieldError> {
    if amount.is_zero() {
        return Err(YieldError::InvalidAmount);
    }

    let mut pool = registry.pool(pid)?;
    settle_pool(env, registry, &mut pool, now)?;

    let total_staked = pool.total_staked.checked_add(amount)?;
    let first_deposit = pos.principal.is_zero();

    increase_principal(env, pos, amount, pool.acc_reward_per_share, BOOST_NEUTRAL_BPS)?;
    if first_deposit {
        pos.deposited_at = now;
    }

    pool.total_staked = total_staked;
    registry.pools.set(pid, pool);

    log!(env, "farm deposit: pid {}, amount {}", pid, amount.raw());

    Ok(())
}

/// Unstake `amount` of the pool's LP token
pub fn withdraw(
    env: &Env,
    registry: &mut FarmRegistry,
    pid: u32,
    pos: &mut StakePosition,
    amount: FixedPoint,
    now: u64,
) -> Result<WithdrawOutcome, YieldError> {
    if amount.is_zero() {
        return Err(YieldError::InvalidAmount);
    }
    if amount > pos.principal {
        return Err(YieldError::InsufficientBalance);
    }

    let mut pool = registry.pool(pid)?;
    settle_pool(env, registry, &mut pool, now)?;

    let total_staked = pool.total_staked.checked_sub(amount)?;

    decrease_principal(env, pos, amount, pool.acc_reward_per_share, BOOST_NEUTRAL_BPS)?;

    pool.total_staked = total_staked;
    registry.pools.set(pid, pool);

    log!(env, "farm withdraw: pid {}, amount {}", pid, amount.raw());

    Ok(WithdrawOutcome::without_penalty(amount))
}

/// Pay out the position's reward in this pool
pub fn claim(
    env: &Env,
    registry: &mut FarmRegistry,
    pid: u32,
    pos: &mut StakePosition,
    now: u64,
) -> Result<FixedPoint, YieldError> {
    let mut pool = registry.pool(pid)?;
    settle_pool(env, registry, &mut pool, now)?;

    harvest(env, pos, pool.acc_reward_per_share, BOOST_NEUTRAL_BPS)?;
    registry.pools.set(pid, pool);

    let claimed = take_rewards(pos);
    if claimed.is_zero() {
        return Err(YieldError::NothingToClaim);
    }

    log!(env, "farm claim: pid {}, amount {}", pid, claimed.raw());

    Ok(claimed)
}

/// Reward the position could claim at `now`, projected without mutation
pub fn pending_reward(
    env: &Env,
    registry: &FarmRegistry,
    pid: u32,
    pos: &StakePosition,
    now: u64,
) -> Result<FixedPoint, YieldError> {
    let mut projected = registry.pool(pid)?;
    settle_pool(env, registry, &mut projected, now)?;

    pending(env, pos, projected.acc_reward_per_share, BOOST_NEUTRAL_BPS)
}

/// Return the whole principal and forfeit every unclaimed reward
///
/// Never settles the pool, so it succeeds even when reward accounting
/// cannot. The leaver's share of the unsettled interval goes to whoever
/// is still staked at the next settlement.
pub fn emergency_withdraw(
    env: &Env,
    registry: &mut FarmRegistry,
    pid: u32,
    pos: &mut StakePosition,
) -> Result<FixedPoint, YieldError> {
    let mut pool = registry.pool(pid)?;

    let amount = pos.principal;
    pool.total_staked = pool.total_staked.checked_sub(amount)?;
    registry.pools.set(pid, pool);

    pos.principal = FixedPoint::ZERO;
    pos.rewards_owed = FixedPoint::ZERO;

    log!(env, "farm emergency withdraw: pid {}, amount {}", pid, amount.raw());

    Ok(amount)
}

// SPDX-License-Identifier: MIT
// Staking accrual
//
// Every mutating operation settles the pool to `now` first, then applies
// its action against the settled accumulator.

use soroban_sdk::{log, Env};
use yieldcore_math::{FixedPoint, YieldError, BOOST_NEUTRAL_BPS};
use yieldcore_position::{
    accrue_reward_per_share, decrease_principal, elapsed_within, harvest, has_principal,
    increase_principal, pending, take_rewards, StakePosition, WithdrawOutcome,
};
use crate::types::StakingPool;

/// Multiplier credited to `pos` for rewards harvested at `now`
///
/// The boost only applies while the position's lock is running.
#[inline]
pub fn boost_multiplier_bps(pool: &StakingPool, pos: &StakePosition, now: u64) -> u32 {
    if pos.is_locked(now) {
        pool.boost_multiplier_bps
    } else {
        BOOST_NEUTRAL_BPS
    }
}

/// Advance the accumulator to `now`
///
/// Only the part of `[last_accrual_time, now)` inside `[start_time, end_time)`
/// accrues, and only while something is staked. Settling twice at the same
/// `now` is a no-op; `last_accrual_time` never moves backward.
pub fn settle(env: &Env, pool: &mut StakingPool, now: u64) -> Result<(), YieldError> {
    let elapsed = elapsed_within(pool.last_accrual_time, now, pool.start_time, pool.end_time);

    if elapsed > 0 && !pool.total_staked.is_zero() {
        let reward = pool.reward_rate_per_second.checked_mul_int(elapsed)?;
        pool.acc_reward_per_share =
            accrue_reward_per_share(env, pool.acc_reward_per_share, reward, pool.total_staked)?;
    }

    if now > pool.last_accrual_time {
        pool.last_accrual_time = now;
    }

    Ok(())
}

/// Stake `amount` into the pool
///
/// Reward accrued on the existing principal is harvested into
/// `rewards_owed` first. With a lockup configured, every deposit restarts
/// the lock at `now + lockup_seconds`.
pub fn deposit(
    env: &Env,
    pool: &mut StakingPool,
    pos: &mut StakePosition,
    amount: FixedPoint,
    now: u64,
) -> Result<(), YieldError> {
    if amount.is_zero() {
        return Err(YieldError::InvalidAmount);
    }

    settle(env, pool, now)?;

    let total_staked = pool.total_staked.checked_add(amount)?;
    let lockup_ends_at = if pool.has_lockup() {
        Some(now.checked_add(pool.lockup_seconds).ok_or(YieldError::Overflow)?)
    } else {
        None
    };

    let multiplier = boost_multiplier_bps(pool, pos, now);
    let first_deposit = !has_principal(pos);

    increase_principal(env, pos, amount, pool.acc_reward_per_share, multiplier)?;

    pool.total_staked = total_staked;
    if first_deposit {
        pos.deposited_at = now;
    }
    if lockup_ends_at.is_some() {
        pos.lockup_ends_at = lockup_ends_at;
    }

    log!(env, "staking deposit: amount {}, total staked {}", amount.raw(), pool.total_staked.raw());

    Ok(())
}

/// Unstake `amount` from the pool
///
/// Inside the lock window `penalty_bps` of the amount is kept by the pool
/// and the outcome carries `early_withdrawal_penalty = true`.
pub fn withdraw(
    env: &Env,
    pool: &mut StakingPool,
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

    settle(env, pool, now)?;

    let early = pos.is_locked(now) && pool.penalty_bps > 0;
    let penalty = if early {
        amount.mul_bps(env, pool.penalty_bps)?
    } else {
        FixedPoint::ZERO
    };
    let received = amount.checked_sub(penalty)?;
    let total_staked = pool.total_staked.checked_sub(amount)?;
    let penalties_collected = pool.penalties_collected.checked_add(penalty)?;

    let multiplier = boost_multiplier_bps(pool, pos, now);
    decrease_principal(env, pos, amount, pool.acc_reward_per_share, multiplier)?;

    pool.total_staked = total_staked;
    pool.penalties_collected = penalties_collected;

    if early {
        log!(env, "early withdrawal: amount {}, penalty {}", amount.raw(), penalty.raw());
    } else {
        log!(env, "staking withdraw: amount {}", amount.raw());
    }

    Ok(WithdrawOutcome {
        amount,
        received,
        penalty,
        early_withdrawal_penalty: early,
    })
}

/// Pay out everything the position has earned so far
///
/// Fails with the soft `NothingToClaim` when there is nothing to pay.
pub fn claim(
    env: &Env,
    pool: &mut StakingPool,
    pos: &mut StakePosition,
    now: u64,
) -> Result<FixedPoint, YieldError> {
    settle(env, pool, now)?;

    let multiplier = boost_multiplier_bps(pool, pos, now);
    harvest(env, pos, pool.acc_reward_per_share, multiplier)?;

    let claimed = take_rewards(pos);
    if claimed.is_zero() {
        return Err(YieldError::NothingToClaim);
    }

    log!(env, "staking claim: {}", claimed.raw());

    Ok(claimed)
}

/// Reward `pos` could claim at `now`, without touching pool state
pub fn pending_reward(
    env: &Env,
    pool: &StakingPool,
    pos: &StakePosition,
    now: u64,
) -> Result<FixedPoint, YieldError> {
    let mut projected = pool.clone();
    settle(env, &mut projected, now)?;

    pending(
        env,
        pos,
        projected.acc_reward_per_share,
        boost_multiplier_bps(pool, pos, now),
    )
}

/// Sweep retained early-withdrawal penalties out of the pool
pub fn collect_penalties(env: &Env, pool: &mut StakingPool) -> FixedPoint {
    let collected = pool.penalties_collected;
    pool.penalties_collected = FixedPoint::ZERO;

    if !collected.is_zero() {
        log!(env, "penalties collected: {}", collected.raw());
    }

    collected
}

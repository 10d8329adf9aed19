// SPDX-License-Identifier: MIT
// Reward-per-share accumulator
//
// The MasterChef pattern, with growth tracked the way fee growth is:
// 1. acc_reward_per_share += reward * SCALE / total_staked, modulo 2^128
// 2. a position is owed principal * (acc - acc_last) / SCALE, the delta
//    taken with wrapping_sub
// 3. acc_last is re-checkpointed whenever the position is harvested
//
// Wrapping keeps settlement total for any stake size. A dust stake can push
// the accumulator past u128 in a single interval; that only shortens the
// delta seen by positions whose own checkpoint gap spans a full wrap.

use soroban_sdk::Env;
use yieldcore_math::{FixedPoint, YieldError};
use crate::types::StakePosition;

/// Seconds of `[from, to)` that fall inside the emission window `[start, end)`
///
/// Both ends are clamped to the window, so time before `start` or after
/// `end` contributes nothing and a backwards interval is empty.
#[inline]
pub fn elapsed_within(from: u64, to: u64, start: u64, end: u64) -> u64 {
    let from = from.clamp(start, end.max(start));
    let to = to.clamp(start, end.max(start));
    to.saturating_sub(from)
}

/// Spread `reward` over `total_staked` shares and add it to the accumulator
///
/// An empty pool leaves the accumulator untouched: nobody is owed the
/// reward and there is nothing to divide by.
pub fn accrue_reward_per_share(
    env: &Env,
    acc_reward_per_share: FixedPoint,
    reward: FixedPoint,
    total_staked: FixedPoint,
) -> Result<FixedPoint, YieldError> {
    if total_staked.is_zero() || reward.is_zero() {
        return Ok(acc_reward_per_share);
    }

    let delta = FixedPoint::mul_div_wrapping(env, reward, FixedPoint::ONE, total_staked)?;
    Ok(acc_reward_per_share.wrapping_add(delta))
}

/// Accumulator growth since the position's last checkpoint
#[inline]
pub fn reward_per_share_delta(pos: &StakePosition, acc_reward_per_share: FixedPoint) -> FixedPoint {
    acc_reward_per_share.wrapping_sub(pos.acc_reward_per_share_last)
}

/// Reward accrued to `pos` since its last checkpoint, before any boost
///
/// principal * (acc - acc_last) / SCALE
pub fn fresh_reward(
    env: &Env,
    pos: &StakePosition,
    acc_reward_per_share: FixedPoint,
) -> Result<FixedPoint, YieldError> {
    if pos.principal.is_zero() {
        return Ok(FixedPoint::ZERO);
    }

    let delta = reward_per_share_delta(pos, acc_reward_per_share);
    FixedPoint::mul_div(env, pos.principal, delta, FixedPoint::ONE)
}

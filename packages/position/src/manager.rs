// SPDX-License-Identifier: MIT
// Position Management Logic

use soroban_sdk::Env;
use yieldcore_math::{FixedPoint, YieldError, BOOST_NEUTRAL_BPS};
use crate::rewards::fresh_reward;
use crate::types::StakePosition;

#[inline]
fn apply_multiplier(
    env: &Env,
    reward: FixedPoint,
    multiplier_bps: u32,
) -> Result<FixedPoint, YieldError> {
    if multiplier_bps == BOOST_NEUTRAL_BPS {
        Ok(reward)
    } else {
        reward.mul_bps(env, multiplier_bps)
    }
}

/// Move the reward accrued since the last checkpoint into `rewards_owed`
///
/// The fresh reward is scaled by `multiplier_bps` (10000 = 1.0x) before it
/// is credited, and the checkpoint is moved to the current accumulator.
///
/// # Returns
/// The amount credited to `rewards_owed`
pub fn harvest(
    env: &Env,
    pos: &mut StakePosition,
    acc_reward_per_share: FixedPoint,
    multiplier_bps: u32,
) -> Result<FixedPoint, YieldError> {
    let fresh = fresh_reward(env, pos, acc_reward_per_share)?;
    let credited = apply_multiplier(env, fresh, multiplier_bps)?;

    pos.rewards_owed = pos.rewards_owed.checked_add(credited)?;
    pos.acc_reward_per_share_last = acc_reward_per_share;

    Ok(credited)
}

/// Reward `pos` could claim against `acc_reward_per_share`, without mutating it
pub fn pending(
    env: &Env,
    pos: &StakePosition,
    acc_reward_per_share: FixedPoint,
    multiplier_bps: u32,
) -> Result<FixedPoint, YieldError> {
    let fresh = fresh_reward(env, pos, acc_reward_per_share)?;
    let boosted = apply_multiplier(env, fresh, multiplier_bps)?;
    pos.rewards_owed.checked_add(boosted)
}

/// Harvest, then add `amount` to the principal
pub fn increase_principal(
    env: &Env,
    pos: &mut StakePosition,
    amount: FixedPoint,
    acc_reward_per_share: FixedPoint,
    multiplier_bps: u32,
) -> Result<(), YieldError> {
    harvest(env, pos, acc_reward_per_share, multiplier_bps)?;

    pos.principal = pos.principal.checked_add(amount)?;

    Ok(())
}

/// Harvest, then remove `amount` from the principal
pub fn decrease_principal(
    env: &Env,
    pos: &mut StakePosition,
    amount: FixedPoint,
    acc_reward_per_share: FixedPoint,
    multiplier_bps: u32,
) -> Result<(), YieldError> {
    if amount > pos.principal {
        return Err(YieldError::InsufficientBalance);
    }

    harvest(env, pos, acc_reward_per_share, multiplier_bps)?;

    pos.principal = pos.principal.checked_sub(amount)?;

    Ok(())
}

/// Hand out everything in `rewards_owed`
pub fn take_rewards(pos: &mut StakePosition) -> FixedPoint {
    let owed = pos.rewards_owed;
    pos.rewards_owed = FixedPoint::ZERO;
    owed
}

// ============================================================
// POSITION HELPERS
// ============================================================

#[inline]
pub fn has_principal(pos: &StakePosition) -> bool {
    !pos.principal.is_zero()
}

/// A position with no principal and nothing owed
#[inline]
pub fn is_empty(pos: &StakePosition) -> bool {
    pos.principal.is_zero() && pos.rewards_owed.is_zero()
}

// SPDX-License-Identifier: MIT

use soroban_sdk::contracttype;
use yieldcore_math::FixedPoint;

/// A depositor's stake in one pool
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakePosition {
    /// Amount currently staked
    pub principal: FixedPoint,
    /// acc_reward_per_share at the last checkpoint
    pub acc_reward_per_share_last: FixedPoint,
    /// Rewards harvested on principal changes and not yet claimed
    pub rewards_owed: FixedPoint,
    /// Time of the first deposit
    pub deposited_at: u64,
    /// End of the current lock, if the pool has a lockup
    pub lockup_ends_at: Option<u64>,
}

impl Default for StakePosition {
    fn default() -> Self {
        Self {
            principal: FixedPoint::ZERO,
            acc_reward_per_share_last: FixedPoint::ZERO,
            rewards_owed: FixedPoint::ZERO,
            deposited_at: 0,
            lockup_ends_at: None,
        }
    }
}

impl StakePosition {
    /// True while `now` is inside the lock window
    #[inline]
    pub fn is_locked(&self, now: u64) -> bool {
        matches!(self.lockup_ends_at, Some(ends_at) if now < ends_at)
    }
}

/// Result of a withdrawal
///
/// `early_withdrawal_penalty` is the observable flag for a withdrawal made
/// inside the lock window; it is an outcome, not an error.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawOutcome {
    /// Principal removed from the position
    pub amount: FixedPoint,
    /// Amount handed back to the depositor (amount - penalty)
    pub received: FixedPoint,
    /// Amount retained by the pool
    pub penalty: FixedPoint,
    pub early_withdrawal_penalty: bool,
}

impl WithdrawOutcome {
    pub fn without_penalty(amount: FixedPoint) -> Self {
        Self {
            amount,
            received: amount,
            penalty: FixedPoint::ZERO,
            early_withdrawal_penalty: false,
        }
    }
}

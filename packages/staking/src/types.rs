// SPDX-License-Identifier: MIT
// Staking Pool Types

use soroban_sdk::contracttype;
use yieldcore_math::{
    FixedPoint, YieldError, BOOST_NEUTRAL_BPS, BPS_DENOMINATOR, DEFAULT_BOOST_MULTIPLIER_BPS,
    DEFAULT_LOCKUP_SECONDS, DEFAULT_PENALTY_BPS, MAX_BOOST_BPS,
};

/// Parameters a staking pool is deployed with
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingConfig {
    /// Reward emitted per second, shared by all stakers
    pub reward_rate_per_second: FixedPoint,
    /// Emission starts (inclusive)
    pub start_time: u64,
    /// Emission stops (exclusive)
    pub end_time: u64,
    /// Lock applied on every deposit, 0 for none
    pub lockup_seconds: u64,
    /// Reward multiplier while locked (10000 = 1.0x)
    pub boost_multiplier_bps: u32,
    /// Share of principal kept by the pool on early withdrawal
    pub penalty_bps: u32,
}

impl StakingConfig {
    /// Unlocked pool: no lockup, no boost, no penalty
    pub fn new(reward_rate_per_second: FixedPoint, start_time: u64, end_time: u64) -> Self {
        Self {
            reward_rate_per_second,
            start_time,
            end_time,
            lockup_seconds: 0,
            boost_multiplier_bps: BOOST_NEUTRAL_BPS,
            penalty_bps: 0,
        }
    }

    pub fn with_lockup(mut self, lockup_seconds: u64, boost_multiplier_bps: u32, penalty_bps: u32) -> Self {
        self.lockup_seconds = lockup_seconds;
        self.boost_multiplier_bps = boost_multiplier_bps;
        self.penalty_bps = penalty_bps;
        self
    }

    /// 30-day lock, 1.2x boost, 5% penalty
    pub fn with_default_lockup(self) -> Self {
        self.with_lockup(DEFAULT_LOCKUP_SECONDS, DEFAULT_BOOST_MULTIPLIER_BPS, DEFAULT_PENALTY_BPS)
    }

    pub fn validate(&self) -> Result<(), YieldError> {
        if self.end_time <= self.start_time {
            return Err(YieldError::InvalidTimeWindow);
        }
        if self.penalty_bps > BPS_DENOMINATOR {
            return Err(YieldError::InvalidBps);
        }
        if self.boost_multiplier_bps < BOOST_NEUTRAL_BPS || self.boost_multiplier_bps > MAX_BOOST_BPS {
            return Err(YieldError::InvalidBoost);
        }
        Ok(())
    }
}

/// Time-derived lifecycle of a staking pool
#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum PoolPhase {
    /// now < start_time
    Scheduled,
    /// start_time <= now < end_time
    Active,
    /// now >= end_time
    Ended,
}

/// Single reward-rate staking pool
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakingPool {
    pub reward_rate_per_second: FixedPoint,
    pub start_time: u64,
    pub end_time: u64,
    pub lockup_seconds: u64,
    pub boost_multiplier_bps: u32,
    pub penalty_bps: u32,
    pub total_staked: FixedPoint,
    /// Reward per staked unit since start, scaled by SCALE
    pub acc_reward_per_share: FixedPoint,
    pub last_accrual_time: u64,
    /// Early-withdrawal penalties retained and not yet swept
    pub penalties_collected: FixedPoint,
}

impl StakingPool {
    pub fn new(config: &StakingConfig) -> Result<Self, YieldError> {
        config.validate()?;

        Ok(Self {
            reward_rate_per_second: config.reward_rate_per_second,
            start_time: config.start_time,
            end_time: config.end_time,
            lockup_seconds: config.lockup_seconds,
            boost_multiplier_bps: config.boost_multiplier_bps,
            penalty_bps: config.penalty_bps,
            total_staked: FixedPoint::ZERO,
            acc_reward_per_share: FixedPoint::ZERO,
            last_accrual_time: config.start_time,
            penalties_collected: FixedPoint::ZERO,
        })
    }

    pub fn phase(&self, now: u64) -> PoolPhase {
        if now < self.start_time {
            PoolPhase::Scheduled
        } else if now < self.end_time {
            PoolPhase::Active
        } else {
            PoolPhase::Ended
        }
    }

    #[inline]
    pub fn has_lockup(&self) -> bool {
        self.lockup_seconds > 0
    }
}

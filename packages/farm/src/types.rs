// SPDX-License-Identifier: MIT
// Farm Types

use soroban_sdk::{contracttype, Env, Vec};
use yieldcore_math::{FixedPoint, YieldError, DEFAULT_BONUS_DURATION, DEFAULT_BONUS_MULTIPLIER};

/// Parameters a farm registry is deployed with
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FarmConfig {
    /// Emission shared by all pools, per second
    pub rewards_per_second: FixedPoint,
    /// Emission starts (inclusive)
    pub start_time: u64,
    /// Emission multiplier before `bonus_end_time`
    pub bonus_multiplier: u32,
    /// Bonus window ends (exclusive)
    pub bonus_end_time: u64,
}

impl FarmConfig {
    /// Farm without a bonus window
    pub fn new(rewards_per_second: FixedPoint, start_time: u64) -> Self {
        Self {
            rewards_per_second,
            start_time,
            bonus_multiplier: 1,
            bonus_end_time: start_time,
        }
    }

    pub fn with_bonus(mut self, bonus_multiplier: u32, bonus_end_time: u64) -> Self {
        self.bonus_multiplier = bonus_multiplier;
        self.bonus_end_time = bonus_end_time;
        self
    }

    /// 2x emission for the first 30 days
    pub fn with_default_bonus(self) -> Self {
        let bonus_end_time = self.start_time.saturating_add(DEFAULT_BONUS_DURATION);
        self.with_bonus(DEFAULT_BONUS_MULTIPLIER, bonus_end_time)
    }

    pub fn validate(&self) -> Result<(), YieldError> {
        if self.bonus_multiplier < 1 {
            return Err(YieldError::InvalidBonusMultiplier);
        }
        Ok(())
    }
}

/// Weight and LP reference of one farm pool
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FarmPoolConfig {
    pub alloc_points: u64,
    /// Opaque LP token reference, never resolved by the engine
    pub lp_token_id: u32,
}

/// One allocation-weighted pool inside a registry
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FarmPool {
    pub alloc_points: u64,
    pub lp_token_id: u32,
    pub acc_reward_per_share: FixedPoint,
    pub total_staked: FixedPoint,
    pub last_accrual_time: u64,
}

/// MasterChef-style registry splitting one emission across pools
///
/// `total_alloc_points` always equals the sum of the pools' `alloc_points`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FarmRegistry {
    pub rewards_per_second: FixedPoint,
    pub start_time: u64,
    pub bonus_multiplier: u32,
    pub bonus_end_time: u64,
    pub total_alloc_points: u64,
    pub pools: Vec<FarmPool>,
}

impl FarmRegistry {
    pub fn new(env: &Env, config: &FarmConfig) -> Result<Self, YieldError> {
        config.validate()?;

        Ok(Self {
            rewards_per_second: config.rewards_per_second,
            start_time: config.start_time,
            bonus_multiplier: config.bonus_multiplier,
            bonus_end_time: config.bonus_end_time,
            total_alloc_points: 0,
            pools: Vec::new(env),
        })
    }

    #[inline]
    pub fn pool_count(&self) -> u32 {
        self.pools.len()
    }

    pub fn pool(&self, pid: u32) -> Result<FarmPool, YieldError> {
        self.pools.get(pid).ok_or(YieldError::PoolNotFound)
    }

    /// Emission multiplier in force at `now`
    #[inline]
    pub fn multiplier_at(&self, now: u64) -> u32 {
        if now < self.bonus_end_time {
            self.bonus_multiplier
        } else {
            1
        }
    }
}

// SPDX-License-Identifier: MIT
// Pool variants

use soroban_sdk::{contracttype, Env};
use yieldcore_farm::{effective_rate, FarmPoolConfig, FarmRegistry};
use yieldcore_math::{FixedPoint, YieldError};
use yieldcore_staking::StakingConfig;

/// Index of the registry pool staking `lp_token_id`
fn find_farm_pool(registry: &FarmRegistry, lp_token_id: u32) -> Result<u32, YieldError> {
    registry
        .pools
        .iter()
        .position(|p| p.lp_token_id == lp_token_id)
        .map(|pid| pid as u32)
        .ok_or(YieldError::PoolNotFound)
}

/// A pool the engine can run, checked when built
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PoolKind {
    /// Single-rate staking with optional lockup
    Stake(StakingConfig),
    /// Weighted pool inside a farm registry
    Farm(FarmPoolConfig),
}

impl PoolKind {
    pub fn stake(config: StakingConfig) -> Result<Self, YieldError> {
        config.validate()?;
        Ok(PoolKind::Stake(config))
    }

    /// A farm pool must already be registered under its LP token
    pub fn farm(config: FarmPoolConfig, registry: &FarmRegistry) -> Result<Self, YieldError> {
        find_farm_pool(registry, config.lp_token_id)?;
        Ok(PoolKind::Farm(config))
    }

    pub fn is_farm(&self) -> bool {
        matches!(self, PoolKind::Farm(_))
    }

    /// Reward emitted per second at `now`
    ///
    /// Staking pools emit only inside their window. Farm pools are resolved
    /// through `registry` by LP token and need one.
    pub fn rewards_per_second(
        &self,
        env: &Env,
        registry: Option<&FarmRegistry>,
        now: u64,
    ) -> Result<FixedPoint, YieldError> {
        match self {
            PoolKind::Stake(config) => {
                if now >= config.start_time && now < config.end_time {
                    Ok(config.reward_rate_per_second)
                } else {
                    Ok(FixedPoint::ZERO)
                }
            }
            PoolKind::Farm(config) => {
                let registry = registry.ok_or(YieldError::PoolNotFound)?;
                let pid = find_farm_pool(registry, config.lp_token_id)?;
                effective_rate(env, registry, pid, now)
            }
        }
    }
}

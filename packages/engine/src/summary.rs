// SPDX-License-Identifier: MIT

use soroban_sdk::{contracttype, Env};
use yieldcore_farm::FarmRegistry;
use yieldcore_math::{apr_to_apy, calculate_apr, FixedPoint, YieldError};
use crate::kind::PoolKind;

/// Annualized yield of a pool
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct YieldSummary {
    /// Simple annual rate
    pub apr: FixedPoint,
    /// Compounded annual rate
    pub apy: FixedPoint,
}

/// APR from emission value over staked value, then APY at `compounds_per_year`
///
/// A pool with nothing staked reports zero for both.
pub fn yield_summary(
    env: &Env,
    rewards_per_second: FixedPoint,
    reward_price: FixedPoint,
    staked_value: FixedPoint,
    compounds_per_year: u32,
) -> Result<YieldSummary, YieldError> {
    let apr = calculate_apr(env, rewards_per_second, reward_price, staked_value)?;
    let apy = apr_to_apy(env, apr, compounds_per_year)?;
    Ok(YieldSummary { apr, apy })
}

/// Yield of a configured pool at `now`
pub fn pool_yield_summary(
    env: &Env,
    kind: &PoolKind,
    registry: Option<&FarmRegistry>,
    now: u64,
    reward_price: FixedPoint,
    staked_value: FixedPoint,
    compounds_per_year: u32,
) -> Result<YieldSummary, YieldError> {
    let rewards_per_second = kind.rewards_per_second(env, registry, now)?;
    yield_summary(env, rewards_per_second, reward_price, staked_value, compounds_per_year)
}

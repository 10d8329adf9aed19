#![allow(dead_code)]

use soroban_sdk::Env;
use yieldcore_farm::*;
use yieldcore_math::FixedPoint;

pub fn units(n: u128) -> FixedPoint {
    FixedPoint::from_units(n).unwrap()
}

/// Registry emitting `rps` whole tokens per second from t=0, no bonus
pub fn setup_registry(env: &Env, rps: u128) -> FarmRegistry {
    FarmRegistry::new(env, &FarmConfig::new(units(rps), 0)).unwrap()
}

/// Registry with a bonus window [0, bonus_end_time)
pub fn setup_bonus_registry(env: &Env, rps: u128, multiplier: u32, bonus_end_time: u64) -> FarmRegistry {
    let config = FarmConfig::new(units(rps), 0).with_bonus(multiplier, bonus_end_time);
    FarmRegistry::new(env, &config).unwrap()
}

pub fn pool_config(alloc_points: u64, lp_token_id: u32) -> FarmPoolConfig {
    FarmPoolConfig { alloc_points, lp_token_id }
}

pub fn sum_alloc_points(registry: &FarmRegistry) -> u64 {
    registry.pools.iter().map(|p| p.alloc_points).sum()
}

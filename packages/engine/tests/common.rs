#![allow(dead_code)]

use soroban_sdk::Env;
use yieldcore_engine::farm::{FarmConfig, FarmRegistry};
use yieldcore_engine::staking::StakingConfig;
use yieldcore_engine::FixedPoint;

pub const START: u64 = 0;
pub const END: u64 = 31_536_000;

pub fn units(n: u128) -> FixedPoint {
    FixedPoint::from_units(n).unwrap()
}

pub fn stake_config(rate: u128) -> StakingConfig {
    StakingConfig::new(units(rate), START, END)
}

pub fn setup_registry(env: &Env, rps: u128) -> FarmRegistry {
    FarmRegistry::new(env, &FarmConfig::new(units(rps), START)).unwrap()
}

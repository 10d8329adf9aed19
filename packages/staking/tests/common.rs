#![allow(dead_code)]

use yieldcore_math::FixedPoint;
use yieldcore_staking::{StakingConfig, StakingPool};

pub const START: u64 = 0;
pub const END: u64 = 31_536_000;

pub fn units(n: u128) -> FixedPoint {
    FixedPoint::from_units(n).unwrap()
}

/// Unlocked pool emitting `rate` whole tokens per second over [START, END)
pub fn setup_pool(rate: u128) -> StakingPool {
    StakingPool::new(&StakingConfig::new(units(rate), START, END)).unwrap()
}

/// Locked pool with custom lockup, boost and penalty
pub fn setup_locked_pool(rate: u128, lockup_seconds: u64, boost_bps: u32, penalty_bps: u32) -> StakingPool {
    let config = StakingConfig::new(units(rate), START, END)
        .with_lockup(lockup_seconds, boost_bps, penalty_bps);
    StakingPool::new(&config).unwrap()
}

/// Pool emitting over a custom window
pub fn setup_window_pool(rate: u128, start: u64, end: u64) -> StakingPool {
    StakingPool::new(&StakingConfig::new(units(rate), start, end)).unwrap()
}

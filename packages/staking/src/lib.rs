// SPDX-License-Identifier: MIT
#![no_std]

pub mod types;
pub mod pool;

pub use types::{PoolPhase, StakingConfig, StakingPool};
pub use pool::{
    boost_multiplier_bps, claim, collect_penalties, deposit, pending_reward, settle, withdraw,
};

// Re-export the position types every caller needs
pub use yieldcore_position::{StakePosition, WithdrawOutcome};

// SPDX-License-Identifier: MIT
#![no_std]

pub mod types;
pub mod emission;
pub mod registry;
pub mod pool;

pub use types::{FarmConfig, FarmPool, FarmPoolConfig, FarmRegistry};
pub use emission::{pool_rate, settle_pool};
pub use registry::{
    add_pool, effective_rate, mass_update_pools, set_alloc_points, set_rewards_per_second,
    update_pool,
};
pub use pool::{claim, deposit, emergency_withdraw, pending_reward, withdraw};

pub use yieldcore_position::{StakePosition, WithdrawOutcome};

// SPDX-License-Identifier: MIT
#![no_std]

pub mod types;
pub mod rewards;
pub mod manager;

pub use types::{StakePosition, WithdrawOutcome};
pub use rewards::{accrue_reward_per_share, elapsed_within, fresh_reward, reward_per_share_delta};
pub use manager::{
    decrease_principal, harvest, has_principal, increase_principal, is_empty, pending,
    take_rewards,
};

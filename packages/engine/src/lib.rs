// SPDX-License-Identifier: MIT
// Yieldcore Engine
//
// Single entry point over the math, position, staking, farm and quote
// packages. Callers pass `now` to every time-dependent operation.

#![no_std]

pub mod kind;
pub mod summary;

pub use kind::PoolKind;
pub use summary::{pool_yield_summary, yield_summary, YieldSummary};

pub use yieldcore_farm as farm;
pub use yieldcore_math as math;
pub use yieldcore_position as position;
pub use yieldcore_quote as quote;
pub use yieldcore_staking as staking;

pub use yieldcore_math::{FixedPoint, YieldError};
pub use yieldcore_position::{StakePosition, WithdrawOutcome};

// SPDX-License-Identifier: MIT
// Yieldcore Math Package

#![no_std]

pub mod constants;
pub mod error;
pub mod fixed_point;
pub mod full_math;
pub mod rate;

// Re-export commonly used items from constants
pub use constants::*;

pub use error::YieldError;
pub use fixed_point::FixedPoint;

// Re-export raw integer helpers
pub use full_math::{mul_div, mul_div_wrapping, mul_bps, checked_add, checked_sub, checked_mul};

// Re-export rate conversion
pub use rate::{apr_to_apy, apy_to_apr, calculate_apr, pow};

// SPDX-License-Identifier: MIT
// Full-precision multiply-divide

use soroban_sdk::{Env, U256};
use crate::error::YieldError;

/// Calculates floor(a * b / denominator) without losing the high bits of `a * b`
///
/// The product is kept in 128 bits when it fits and widened to U256
/// otherwise, so `amount * acc_reward_per_share / SCALE` never overflows
/// on the multiply for any u128 inputs. Only a quotient above u128::MAX
/// is reported as `Overflow`.
pub fn mul_div(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, YieldError> {
    if denominator == 0 {
        return Err(YieldError::DivideByZero);
    }

    if a == 0 || b == 0 {
        return Ok(0);
    }

    if let Some(product) = a.checked_mul(b) {
        return Ok(product / denominator);
    }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let den_256 = U256::from_u128(env, denominator);

    let product = a_256.mul(&b_256);
    let result = product.div(&den_256);

    result.to_u128().ok_or(YieldError::Overflow)
}

/// Calculates floor(a * b / denominator) modulo 2^128
///
/// For growth accumulators that are only ever read back as differences
/// through `wrapping_sub`. The quotient may exceed u128 without failing;
/// only a zero denominator is an error.
pub fn mul_div_wrapping(env: &Env, a: u128, b: u128, denominator: u128) -> Result<u128, YieldError> {
    if denominator == 0 {
        return Err(YieldError::DivideByZero);
    }

    if a == 0 || b == 0 {
        return Ok(0);
    }

    if let Some(product) = a.checked_mul(b) {
        return Ok(product / denominator);
    }

    let a_256 = U256::from_u128(env, a);
    let b_256 = U256::from_u128(env, b);
    let den_256 = U256::from_u128(env, denominator);
    let modulus = U256::from_parts(env, 0, 1, 0, 0);

    let result = a_256.mul(&b_256).div(&den_256).rem_euclid(&modulus);

    // below 2^128 after the reduction
    result.to_u128().ok_or(YieldError::Overflow)
}

/// Calculates floor(a * bps / 10000)
#[inline]
pub fn mul_bps(env: &Env, a: u128, bps: u32) -> Result<u128, YieldError> {
    mul_div(env, a, bps as u128, crate::constants::BPS_DENOMINATOR as u128)
}

/// Checked u128 addition mapped onto the engine error
#[inline]
pub fn checked_add(a: u128, b: u128) -> Result<u128, YieldError> {
    a.checked_add(b).ok_or(YieldError::Overflow)
}

/// Checked u128 subtraction mapped onto the engine error
#[inline]
pub fn checked_sub(a: u128, b: u128) -> Result<u128, YieldError> {
    a.checked_sub(b).ok_or(YieldError::Underflow)
}

/// Checked u128 multiplication mapped onto the engine error
#[inline]
pub fn checked_mul(a: u128, b: u128) -> Result<u128, YieldError> {
    a.checked_mul(b).ok_or(YieldError::Overflow)
}

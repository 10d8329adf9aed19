// SPDX-License-Identifier: MIT
// APR <-> APY conversion

use soroban_sdk::Env;
use crate::constants::{MAX_COMPOUNDS_PER_YEAR, MIN_COMPOUNDS_PER_YEAR, SECONDS_PER_YEAR};
use crate::error::YieldError;
use crate::fixed_point::FixedPoint;

#[inline]
fn validate_compounds(compounds_per_year: u32) -> Result<(), YieldError> {
    if !(MIN_COMPOUNDS_PER_YEAR..=MAX_COMPOUNDS_PER_YEAR).contains(&compounds_per_year) {
        return Err(YieldError::InvalidCompoundingPeriod);
    }
    Ok(())
}

/// base^exp by squaring, flooring after every multiplication
pub fn pow(env: &Env, base: FixedPoint, exp: u32) -> Result<FixedPoint, YieldError> {
    let mut result = FixedPoint::ONE;
    let mut base = base;
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result.mul(env, base)?;
        }
        exp >>= 1;
        // the last square is never used and may overflow on its own
        if exp > 0 {
            base = base.mul(env, base)?;
        }
    }

    Ok(result)
}

/// Compound an APR into an APY: (1 + apr/n)^n - 1
///
/// # Arguments
/// * `apr` - Annual rate as a fraction (0.12 for 12%)
/// * `compounds_per_year` - Compounding periods, 1..=8760
///
/// # Returns
/// The APY as a fraction, or `InvalidCompoundingPeriod` / `Overflow`
pub fn apr_to_apy(
    env: &Env,
    apr: FixedPoint,
    compounds_per_year: u32,
) -> Result<FixedPoint, YieldError> {
    validate_compounds(compounds_per_year)?;

    if apr.is_zero() {
        return Ok(FixedPoint::ZERO);
    }

    let periodic = FixedPoint::from_raw(apr.raw() / compounds_per_year as u128);
    let base = FixedPoint::ONE.checked_add(periodic)?;
    let growth = pow(env, base, compounds_per_year)?;

    growth.checked_sub(FixedPoint::ONE)
}

/// Inverse of `apr_to_apy`: the largest APR whose compounded APY does not exceed `apy`
///
/// Bisection over the monotone forward map. Flooring the periodic rate can
/// leave `apr_to_apy(x)` below `x`, so the answer may lie above `apy`; the
/// upper bound starts at `apy + n` and doubles until it overshoots.
pub fn apy_to_apr(
    env: &Env,
    apy: FixedPoint,
    compounds_per_year: u32,
) -> Result<FixedPoint, YieldError> {
    validate_compounds(compounds_per_year)?;

    if compounds_per_year == 1 {
        return Ok(apy);
    }

    // apr_to_apy(lo) <= apy < apr_to_apy(hi) throughout
    let mut lo: u128 = 0;
    let mut hi: u128 = apy.raw().saturating_add(compounds_per_year as u128);

    loop {
        match apr_to_apy(env, FixedPoint::from_raw(hi), compounds_per_year) {
            Ok(candidate) if candidate <= apy => {
                if hi == u128::MAX {
                    return Ok(FixedPoint::from_raw(hi));
                }
                lo = hi;
                hi = hi.saturating_mul(2);
            }
            Ok(_) | Err(YieldError::Overflow) => break,
            Err(e) => return Err(e),
        }
    }

    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        match apr_to_apy(env, FixedPoint::from_raw(mid), compounds_per_year) {
            Ok(candidate) if candidate <= apy => lo = mid,
            Ok(_) | Err(YieldError::Overflow) => hi = mid,
            Err(e) => return Err(e),
        }
    }

    Ok(FixedPoint::from_raw(lo))
}

/// Simple APR of an emission stream against the value staked in it
///
/// apr = rewards_per_second * reward_price * SECONDS_PER_YEAR / staked_value
/// Returns zero for an empty pool instead of dividing by zero.
pub fn calculate_apr(
    env: &Env,
    rewards_per_second: FixedPoint,
    reward_price: FixedPoint,
    staked_value: FixedPoint,
) -> Result<FixedPoint, YieldError> {
    if staked_value.is_zero() {
        return Ok(FixedPoint::ZERO);
    }

    let rewards_per_year = rewards_per_second.checked_mul_int(SECONDS_PER_YEAR)?;
    let value_per_year = rewards_per_year.mul(env, reward_price)?;

    value_per_year.div(env, staked_value)
}

// SPDX-License-Identifier: MIT
// 18-decimal fixed-point number

use soroban_sdk::{contracttype, Env};
use crate::constants::{BPS_DENOMINATOR, SCALE};
use crate::error::YieldError;
use crate::full_math::{checked_add, checked_mul, checked_sub, mul_bps, mul_div, mul_div_wrapping};

/// Unsigned fixed-point value: `raw / SCALE`
///
/// Every money amount, rate and per-share accumulator in the engine is a
/// `FixedPoint`. Arithmetic never goes through floats, and all rounding
/// is floor, matching integer division in the contracts being mirrored.
#[contracttype]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, PartialOrd, Ord)]
pub struct FixedPoint(pub u128);

impl FixedPoint {
    pub const ZERO: FixedPoint = FixedPoint(0);
    pub const ONE: FixedPoint = FixedPoint(SCALE);

    #[inline]
    pub const fn from_raw(raw: u128) -> Self {
        FixedPoint(raw)
    }

    #[inline]
    pub const fn raw(&self) -> u128 {
        self.0
    }

    /// Whole units, e.g. `from_units(1000)` is 1000.0
    pub fn from_units(units: u128) -> Result<Self, YieldError> {
        Ok(FixedPoint(checked_mul(units, SCALE)?))
    }

    /// A basis-point fraction, e.g. `from_bps(500)` is 0.05
    pub fn from_bps(bps: u32) -> Self {
        // bps * 10^18 / 10^4 cannot overflow for any u32
        FixedPoint(bps as u128 * (SCALE / BPS_DENOMINATOR as u128))
    }

    /// Whole units, floored
    #[inline]
    pub const fn to_units(&self) -> u128 {
        self.0 / SCALE
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, rhs: FixedPoint) -> Result<FixedPoint, YieldError> {
        Ok(FixedPoint(checked_add(self.0, rhs.0)?))
    }

    /// Fails with `Underflow` instead of going negative
    pub fn checked_sub(self, rhs: FixedPoint) -> Result<FixedPoint, YieldError> {
        Ok(FixedPoint(checked_sub(self.0, rhs.0)?))
    }

    /// Modular addition, for growth accumulators only
    #[inline]
    pub const fn wrapping_add(self, rhs: FixedPoint) -> FixedPoint {
        FixedPoint(self.0.wrapping_add(rhs.0))
    }

    /// Modular difference between two readings of a growth accumulator
    #[inline]
    pub const fn wrapping_sub(self, rhs: FixedPoint) -> FixedPoint {
        FixedPoint(self.0.wrapping_sub(rhs.0))
    }

    /// floor(self * rhs), rescaled back to SCALE
    pub fn mul(self, env: &Env, rhs: FixedPoint) -> Result<FixedPoint, YieldError> {
        Ok(FixedPoint(mul_div(env, self.0, rhs.0, SCALE)?))
    }

    /// floor(self / rhs), truncating toward zero
    pub fn div(self, env: &Env, rhs: FixedPoint) -> Result<FixedPoint, YieldError> {
        if rhs.0 == 0 {
            return Err(YieldError::DivideByZero);
        }
        Ok(FixedPoint(mul_div(env, self.0, SCALE, rhs.0)?))
    }

    /// floor(a * b / c) on raw magnitudes
    ///
    /// The scale of the result is whatever `a * b / c` leaves, so
    /// `mul_div(amount, acc, ONE)` is an amount and
    /// `mul_div(reward, ONE, staked)` is a per-share value.
    pub fn mul_div(
        env: &Env,
        a: FixedPoint,
        b: FixedPoint,
        c: FixedPoint,
    ) -> Result<FixedPoint, YieldError> {
        Ok(FixedPoint(mul_div(env, a.0, b.0, c.0)?))
    }

    /// floor(a * b / c) modulo 2^128, for per-share growth increments
    pub fn mul_div_wrapping(
        env: &Env,
        a: FixedPoint,
        b: FixedPoint,
        c: FixedPoint,
    ) -> Result<FixedPoint, YieldError> {
        Ok(FixedPoint(mul_div_wrapping(env, a.0, b.0, c.0)?))
    }

    /// Multiply by a plain integer (e.g. a per-second rate by seconds)
    pub fn checked_mul_int(self, n: u64) -> Result<FixedPoint, YieldError> {
        Ok(FixedPoint(checked_mul(self.0, n as u128)?))
    }

    /// floor(self * bps / 10000)
    pub fn mul_bps(self, env: &Env, bps: u32) -> Result<FixedPoint, YieldError> {
        Ok(FixedPoint(mul_bps(env, self.0, bps)?))
    }
}

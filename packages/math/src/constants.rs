// SPDX-License-Identifier: MIT
// Engine-wide constants
//
// Grouped by functionality:
// - Fixed-point scale
// - Basis points
// - Rate conversion bounds
// - Quote limits
// - Deployment defaults

// ============================================================
// FIXED-POINT CONSTANTS
// ============================================================

/// Implicit scale of every `FixedPoint` (18 decimals, "wad")
/// 1.0 is represented by the raw integer 10^18
pub const SCALE: u128 = 1_000_000_000_000_000_000;

// ============================================================
// BASIS POINT CONSTANTS
// ============================================================

/// 100% expressed in basis points
pub const BPS_DENOMINATOR: u32 = 10_000;

/// Boost multiplier meaning "no boost" (1.0x)
pub const BOOST_NEUTRAL_BPS: u32 = 10_000;

/// Upper bound on a staking boost (5.0x)
pub const MAX_BOOST_BPS: u32 = 50_000;

// ============================================================
// RATE CONVERSION CONSTANTS
// ============================================================

/// Seconds in a 365-day year
pub const SECONDS_PER_YEAR: u64 = 31_536_000;

/// Smallest valid compounding frequency (yearly)
pub const MIN_COMPOUNDS_PER_YEAR: u32 = 1;

/// Largest valid compounding frequency (hourly)
/// Bounds the squaring loop and the overflow surface of the power
pub const MAX_COMPOUNDS_PER_YEAR: u32 = 365 * 24;

/// Daily compounding, the dashboard default
pub const DEFAULT_COMPOUNDS_PER_YEAR: u32 = 365;

// ============================================================
// QUOTE CONSTANTS
// ============================================================

/// Maximum slippage tolerance in basis points (50%)
pub const MAX_SLIPPAGE_BPS: u32 = 5_000;

/// Maximum trading fee in basis points (100%)
pub const MAX_FEE_BPS: u32 = 10_000;

/// Default router fee (0.3%)
pub const DEFAULT_FEE_BPS: u32 = 30;

/// Gas units reported for a single-hop router swap
pub const DEFAULT_GAS_ESTIMATE: u64 = 200_000;

// ============================================================
// DEPLOYMENT DEFAULTS
// ============================================================

/// Default staking lockup (30 days)
pub const DEFAULT_LOCKUP_SECONDS: u64 = 30 * 24 * 60 * 60;

/// Default staking boost while locked (1.2x)
pub const DEFAULT_BOOST_MULTIPLIER_BPS: u32 = 12_000;

/// Default early-withdrawal penalty (5%)
pub const DEFAULT_PENALTY_BPS: u32 = 500;

/// Default farm bonus multiplier during the bonus window
pub const DEFAULT_BONUS_MULTIPLIER: u32 = 2;

/// Default farm bonus window length (30 days)
pub const DEFAULT_BONUS_DURATION: u64 = 30 * 24 * 60 * 60;

// SPDX-License-Identifier: MIT
// Error taxonomy shared by every engine package
//
// - Uses contracterror derive macro for typed errors
// - Codes are grouped by concern in blocks of 100

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum YieldError {
    // Amount errors (100-199)
    /// Amount must be strictly positive
    InvalidAmount = 100,
    /// Withdrawal exceeds the position's principal
    InsufficientBalance = 101,
    /// No reward has accrued since the last claim (soft)
    NothingToClaim = 102,

    // Arithmetic errors (200-299)
    /// Subtraction would go below zero
    Underflow = 200,
    /// Result does not fit in 128 bits
    Overflow = 201,
    /// Division by zero
    DivideByZero = 202,

    // Rate errors (300-399)
    /// Compounding periods per year outside 1..=8760
    InvalidCompoundingPeriod = 300,

    // Configuration errors (400-499)
    /// end_time must be after start_time
    InvalidTimeWindow = 400,
    /// Basis point value above 10000
    InvalidBps = 401,
    /// Boost multiplier outside 1.0x..=5.0x
    InvalidBoost = 402,
    /// Bonus multiplier must be at least 1
    InvalidBonusMultiplier = 403,

    // Registry errors (500-599)
    /// No farm pool at this index
    PoolNotFound = 500,
    /// LP token already has a farm pool
    PoolAlreadyExists = 501,

    // Quote errors (600-699)
    /// Token is not known to the supplied catalog
    TokenNotFound = 600,
    /// Input and output tokens are the same
    SameToken = 601,
    /// Fee above 100%
    InvalidFee = 602,
    /// Slippage tolerance above the maximum
    InvalidSlippage = 603,
    /// Price ratio must be non-zero
    InvalidPrice = 604,
    /// Price impact above 100%
    InvalidPriceImpact = 605,
}

impl YieldError {
    /// Errors a caller may treat as a zero-value result instead of aborting
    #[inline]
    pub fn is_soft(&self) -> bool {
        matches!(self, YieldError::NothingToClaim)
    }
}

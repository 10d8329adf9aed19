// SPDX-License-Identifier: MIT

use soroban_sdk::Env;
use yieldcore_math::{
    FixedPoint, YieldError, BPS_DENOMINATOR, DEFAULT_GAS_ESTIMATE, MAX_FEE_BPS, MAX_SLIPPAGE_BPS,
};
use crate::catalog::TokenCatalog;
use crate::types::{SwapQuote, TokenId};

// ============================================================
// VALIDATION
// ============================================================

fn validate_tokens<C: TokenCatalog>(
    env: &Env,
    catalog: &C,
    in_token: TokenId,
    out_token: TokenId,
) -> Result<(), YieldError> {
    if !catalog.is_listed(env, in_token) || !catalog.is_listed(env, out_token) {
        return Err(YieldError::TokenNotFound);
    }
    if in_token == out_token {
        return Err(YieldError::SameToken);
    }
    Ok(())
}

fn validate_params(
    in_amount: FixedPoint,
    slippage_bps: u32,
    fee_bps: u32,
    price_ratio: FixedPoint,
    price_impact_bps: u32,
) -> Result<(), YieldError> {
    if in_amount.is_zero() {
        return Err(YieldError::InvalidAmount);
    }
    if fee_bps > MAX_FEE_BPS {
        return Err(YieldError::InvalidFee);
    }
    if slippage_bps > MAX_SLIPPAGE_BPS {
        return Err(YieldError::InvalidSlippage);
    }
    if price_ratio.is_zero() {
        return Err(YieldError::InvalidPrice);
    }
    if price_impact_bps > BPS_DENOMINATOR {
        return Err(YieldError::InvalidPriceImpact);
    }
    Ok(())
}

// ============================================================
// QUOTE
// ============================================================

/// Output before fees: in_amount * price_ratio
#[inline]
pub fn expected_output(
    env: &Env,
    in_amount: FixedPoint,
    price_ratio: FixedPoint,
) -> Result<FixedPoint, YieldError> {
    in_amount.mul(env, price_ratio)
}

/// Derive a swap quote
///
/// # Arguments
/// * `catalog` - Resolves which tokens may be quoted
/// * `in_amount` - Input amount, must be non-zero
/// * `slippage_bps` - Tolerated adverse move, at most 5000
/// * `fee_bps` - Trading fee, at most 10000
/// * `price_ratio` - Output tokens per input token
/// * `price_impact_bps` - From the caller's liquidity model, forwarded as-is
///
/// # Calculation
/// out_amount = in_amount * price_ratio * (1 - fee_bps / 10000)
/// min_received = out_amount * (1 - slippage_bps / 10000)
/// Every step floors, so the quote never promises more than the math allows.
pub fn quote<C: TokenCatalog>(
    env: &Env,
    catalog: &C,
    in_token: TokenId,
    out_token: TokenId,
    in_amount: FixedPoint,
    slippage_bps: u32,
    fee_bps: u32,
    price_ratio: FixedPoint,
    price_impact_bps: u32,
) -> Result<SwapQuote, YieldError> {
    validate_tokens(env, catalog, in_token, out_token)?;
    validate_params(in_amount, slippage_bps, fee_bps, price_ratio, price_impact_bps)?;

    let gross_out = expected_output(env, in_amount, price_ratio)?;
    let fee_amount = gross_out.mul_bps(env, fee_bps)?;
    let out_amount = gross_out.checked_sub(fee_amount)?;

    let slippage = out_amount.mul_bps(env, slippage_bps)?;
    let min_received = out_amount.checked_sub(slippage)?;

    Ok(SwapQuote {
        in_token,
        out_token,
        in_amount,
        out_amount,
        min_received,
        price_impact_bps,
        fee_bps,
        fee_amount,
        gas_estimate: DEFAULT_GAS_ESTIMATE,
    })
}

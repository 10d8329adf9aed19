// SPDX-License-Identifier: MIT

use soroban_sdk::{contracttype, Env, Vec};
use yieldcore_math::FixedPoint;

/// Opaque token reference resolved by the caller's catalog
pub type TokenId = u32;

/// A computed swap quote, recomputed per request and never stored
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapQuote {
    pub in_token: TokenId,
    pub out_token: TokenId,
    pub in_amount: FixedPoint,
    /// Output after the fee, at the quoted price
    pub out_amount: FixedPoint,
    /// Output floor after the slippage tolerance
    pub min_received: FixedPoint,
    /// Supplied by the pricing model, forwarded unchanged
    pub price_impact_bps: u32,
    pub fee_bps: u32,
    /// Fee charged, in output token units
    pub fee_amount: FixedPoint,
    pub gas_estimate: u64,
}

impl SwapQuote {
    /// Tokens visited by the swap, in order
    pub fn route(&self, env: &Env) -> Vec<TokenId> {
        let mut route = Vec::new(env);
        route.push_back(self.in_token);
        route.push_back(self.out_token);
        route
    }
}

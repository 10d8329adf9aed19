#![allow(dead_code)]

use soroban_sdk::{vec, Env, Vec};
use yieldcore_math::FixedPoint;
use yieldcore_quote::TokenId;

pub const TOKEN_A: TokenId = 1;
pub const TOKEN_B: TokenId = 2;
pub const TOKEN_C: TokenId = 3;
pub const UNLISTED: TokenId = 99;

pub fn units(n: u128) -> FixedPoint {
    FixedPoint::from_units(n).unwrap()
}

/// Catalog listing A, B and C
pub fn setup_catalog(env: &Env) -> Vec<TokenId> {
    vec![env, TOKEN_A, TOKEN_B, TOKEN_C]
}

// SPDX-License-Identifier: MIT
// Token resolution

use soroban_sdk::{Env, Vec};
use crate::types::TokenId;

/// Catalog trait for token lookups
/// This allows the quote engine to work with any token registry
pub trait TokenCatalog {
    fn is_listed(&self, env: &Env, token: TokenId) -> bool;
}

impl TokenCatalog for Vec<TokenId> {
    fn is_listed(&self, _env: &Env, token: TokenId) -> bool {
        self.iter().any(|t| t == token)
    }
}

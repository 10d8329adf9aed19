// SPDX-License-Identifier: MIT
#![no_std]

pub mod types;
pub mod catalog;
pub mod engine;

// Re-export types
pub use types::{SwapQuote, TokenId};
pub use catalog::TokenCatalog;

// Re-export engine functions
pub use engine::{expected_output, quote};

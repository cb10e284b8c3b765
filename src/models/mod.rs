//! Data models for the Argent portfolio API

pub mod dapp;
pub mod portfolio;
pub mod token;

// Re-export for convenience
pub use dapp::{Dapp, DappMap, UserDapp};
pub use portfolio::BalanceBreakdown;
pub use token::{Currency, Token, TokenMap, TokenValue, UserToken};

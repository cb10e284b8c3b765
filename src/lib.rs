//! Argent Portfolio API Client
//!
//! A thin async client for the Argent portfolio API that fetches token,
//! dapp, and balance data for Starknet mainnet wallets and derives a
//! fiat-denominated total balance.

// Public modules - these are the API surface
pub mod client;
pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used items for easier access
pub use client::PortfolioClient;
pub use config::{ApiConfig, ApiHeaders};
pub use error::Error;
pub use models::{
    dapp::{Dapp, DappMap, UserDapp},
    portfolio::BalanceBreakdown,
    token::{Currency, Token, TokenMap, TokenValue, UserToken},
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type alias for library functions
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for the portfolio client

use thiserror::Error;

/// Errors produced by [`PortfolioClient`](crate::client::PortfolioClient) operations
#[derive(Debug, Error)]
pub enum Error {
    /// The API answered with a non-success HTTP status
    #[error("API returned status {status}: {body}")]
    Fetch { status: u16, body: String },

    /// The request never produced a response (connection, TLS, ...)
    #[error("request to Argent API failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not JSON of the expected shape
    #[error("failed to decode API response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A numeric conversion failed during price math
    #[error("price calculation failed: {0}")]
    Calculation(String),
}

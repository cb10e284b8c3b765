//! Client configuration for the Argent portfolio API

use crate::models::token::Currency;

/// Static identifying headers sent to the API on every request
#[derive(Debug, Clone)]
pub struct ApiHeaders {
    /// Value for the `argent-client` header
    pub client: String,
    /// Value for the `argent-network` header
    pub network: String,
    /// Value for the `argent-version` header
    pub version: String,
}

impl Default for ApiHeaders {
    fn default() -> Self {
        Self {
            client: "portfolio".to_string(),
            network: "mainnet".to_string(),
            version: "1.4.3".to_string(),
        }
    }
}

/// Configuration for a [`PortfolioClient`](crate::client::PortfolioClient)
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL including the API version path, no trailing slash
    pub base_url: String,
    /// Identifying headers attached to every request
    pub headers: ApiHeaders,
    /// Currency used when a calculation is not given one explicitly
    pub default_currency: Currency,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://cloud.argent-api.com/v1".to_string(),
            headers: ApiHeaders::default(),
            default_currency: Currency::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_targets_production_api() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, "https://cloud.argent-api.com/v1");
        assert_eq!(config.headers.client, "portfolio");
        assert_eq!(config.headers.network, "mainnet");
        assert_eq!(config.default_currency, Currency::Usd);
    }
}

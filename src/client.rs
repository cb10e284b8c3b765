//! HTTP client for the Argent portfolio API

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, error};

use crate::config::ApiConfig;
use crate::error::Error;
use crate::models::{
    dapp::{Dapp, DappMap, UserDapp},
    portfolio::BalanceBreakdown,
    token::{Currency, Token, TokenMap, TokenValue, UserToken},
};

/// Response wrapper for the token listing endpoint
#[derive(Debug, Deserialize)]
struct TokensResponse {
    tokens: Vec<Token>,
}

/// Response wrapper for the wallet balance endpoint
#[derive(Debug, Deserialize)]
struct BalancesResponse {
    balances: Vec<UserToken>,
}

/// Response wrapper for the wallet decomposition endpoint
#[derive(Debug, Deserialize)]
struct DecompositionResponse {
    dapps: Vec<UserDapp>,
}

/// Client for the Argent portfolio API
///
/// Each operation issues one or more GET requests against a fixed host and
/// reshapes the JSON response. The client holds no state across calls and
/// never retries.
#[derive(Debug, Clone)]
pub struct PortfolioClient {
    http: Client,
    config: ApiConfig,
}

impl PortfolioClient {
    /// Create a client against the production API
    pub fn new() -> Self {
        Self::with_config(ApiConfig::default())
    }

    /// Create a client with an explicit configuration
    pub fn with_config(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// GET an endpoint and decode the JSON body
    async fn fetch_json<T: DeserializeOwned>(&self, endpoint: &str) -> crate::Result<T> {
        let url = format!("{}{}", self.config.base_url, endpoint);
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .header("argent-client", &self.config.headers.client)
            .header("argent-network", &self.config.headers.network)
            .header("argent-version", &self.config.headers.version)
            .send()
            .await
            .map_err(|err| {
                error!("Request to {} failed: {}", url, err);
                Error::from(err)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Argent API returned {} for {}: {}", status, url, body);
            return Err(Error::Fetch {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(|err| {
            error!("Failed to read response body from {}: {}", url, err);
            Error::from(err)
        })?;
        serde_json::from_str(&body).map_err(|err| {
            error!("Failed to decode response from {}: {}", url, err);
            Error::from(err)
        })
    }

    /// Fetch the dapp catalog, keyed by dapp id
    pub async fn fetch_dapps(&self) -> crate::Result<DappMap> {
        let dapps: Vec<Dapp> = self.fetch_json("/tokens/dapps?chain=starknet").await?;
        Ok(dapps
            .into_iter()
            .map(|dapp| (dapp.dapp_id.clone(), dapp))
            .collect())
    }

    /// Fetch the token catalog, keyed by token address
    pub async fn fetch_tokens(&self) -> crate::Result<TokenMap> {
        let response: TokensResponse = self.fetch_json("/tokens/info?chain=starknet").await?;
        Ok(response
            .tokens
            .into_iter()
            .map(|token| (token.address.clone(), token))
            .collect())
    }

    /// Fetch a wallet's token holdings, in upstream order
    ///
    /// The wallet address is passed through unvalidated; the service rejects
    /// malformed addresses with a non-success status.
    pub async fn fetch_user_tokens(&self, wallet_address: &str) -> crate::Result<Vec<UserToken>> {
        let endpoint = format!(
            "/activity/starknet/mainnet/account/{}/balance",
            wallet_address
        );
        let response: BalancesResponse = self.fetch_json(&endpoint).await?;
        Ok(response.balances)
    }

    /// Fetch a wallet's decomposed DeFi positions, in upstream order
    pub async fn fetch_user_dapps(&self, wallet_address: &str) -> crate::Result<Vec<UserDapp>> {
        let endpoint = format!("/tokens/defi/decomposition/{}?chain=starknet", wallet_address);
        let response: DecompositionResponse = self.fetch_json(&endpoint).await?;
        Ok(response.dapps)
    }

    /// Price an amount of a token in the given currency
    ///
    /// Fetches the unit quote and computes `amount × unit price`. The amount
    /// is a decimal string; a non-numeric amount or quote is a
    /// [`Error::Calculation`]. Falls back to the configured default currency
    /// when `currency` is `None`.
    pub async fn calculate_token_price(
        &self,
        token_address: &str,
        token_amount: &str,
        currency: Option<Currency>,
    ) -> crate::Result<f64> {
        let currency = currency.unwrap_or(self.config.default_currency);
        let endpoint = format!(
            "/tokens/prices/{}?chain=starknet&currency={}",
            token_address, currency
        );
        let quote: TokenValue = self.fetch_json(&endpoint).await?;

        let amount: f64 = token_amount.parse().map_err(|_| {
            let err = Error::Calculation(format!("non-numeric token amount {:?}", token_amount));
            error!("Error while calculating token price: {}", err);
            err
        })?;
        let unit_price = quote.unit_price().map_err(|err| {
            error!("Error while calculating token price: {}", err);
            err
        })?;

        Ok(amount * unit_price)
    }

    /// Total fiat value of a wallet's token holdings
    ///
    /// A failure to price one token drops that token from the sum instead of
    /// aborting, so the result may be a partial total. Use
    /// [`calculate_total_balance_breakdown`](Self::calculate_total_balance_breakdown)
    /// to find out which tokens were dropped.
    pub async fn calculate_total_balance(
        &self,
        wallet_address: &str,
        currency: Option<Currency>,
    ) -> crate::Result<f64> {
        let breakdown = self
            .calculate_total_balance_breakdown(wallet_address, currency)
            .await?;
        Ok(breakdown.total)
    }

    /// Total fiat value plus the tokens that could not be priced
    ///
    /// Fails only if the wallet's holdings cannot be fetched at all; no price
    /// lookup happens in that case. Price lookups run sequentially, one per
    /// held token.
    pub async fn calculate_total_balance_breakdown(
        &self,
        wallet_address: &str,
        currency: Option<Currency>,
    ) -> crate::Result<BalanceBreakdown> {
        let tokens = self.fetch_user_tokens(wallet_address).await?;
        let mut breakdown = BalanceBreakdown::default();

        for token in tokens {
            let value = match token.adjusted_balance() {
                Ok(amount) => {
                    self.calculate_token_price(
                        &token.token_address,
                        &amount.to_string(),
                        currency,
                    )
                    .await
                }
                Err(err) => Err(err),
            };

            match value {
                Ok(value) => breakdown.total += value,
                Err(err) => {
                    error!(
                        "Error calculating price for token {}: {}",
                        token.token_address, err
                    );
                    breakdown.skipped_tokens.push(token.token_address);
                }
            }
        }

        Ok(breakdown)
    }
}

impl Default for PortfolioClient {
    fn default() -> Self {
        Self::new()
    }
}

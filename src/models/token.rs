use std::collections::HashMap;
use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::Error;

/// Number of decimals assumed when converting raw balances to amounts
const BALANCE_DECIMALS: i32 = 18;

/// Token descriptor from the upstream token catalog
///
/// Identified by its on-chain address; every other upstream field is kept
/// as opaque passthrough data.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    pub address: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Tokens keyed by address
///
/// Keys are unique; if the upstream array repeats an address, the last
/// entry wins.
pub type TokenMap = HashMap<String, Token>;

/// A wallet's holding of a token
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserToken {
    pub token_address: String,
    /// Raw integer balance in the token's smallest unit, as a decimal string
    pub token_balance: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserToken {
    /// Convert the raw balance to a human-readable amount, assuming 18
    /// decimals (the upstream contract does not expose per-token decimals
    /// on this endpoint)
    pub fn adjusted_balance(&self) -> Result<f64, Error> {
        let raw: f64 = self.token_balance.parse().map_err(|_| {
            Error::Calculation(format!(
                "token {} has non-numeric balance {:?}",
                self.token_address, self.token_balance
            ))
        })?;
        Ok(raw / 10f64.powi(BALANCE_DECIMALS))
    }
}

/// Unit price quote for a token in a requested currency
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenValue {
    /// Currency-denominated unit price, as a decimal string
    pub ccy_value: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TokenValue {
    /// Parse the quoted unit price
    pub fn unit_price(&self) -> Result<f64, Error> {
        self.ccy_value.parse().map_err(|_| {
            Error::Calculation(format!("non-numeric unit price {:?}", self.ccy_value))
        })
    }
}

/// Fiat currency accepted by the price endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    /// Upstream query-string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_token(balance: &str) -> UserToken {
        UserToken {
            token_address: "0xabc".to_string(),
            token_balance: balance.to_string(),
            extra: Map::new(),
        }
    }

    #[test]
    fn one_full_token_adjusts_to_one() {
        let token = user_token("1000000000000000000");
        assert_eq!(token.adjusted_balance().unwrap(), 1.0);
    }

    #[test]
    fn fractional_balance_adjusts() {
        let token = user_token("500000000000000000");
        assert_eq!(token.adjusted_balance().unwrap(), 0.5);
    }

    #[test]
    fn non_numeric_balance_is_a_calculation_error() {
        let token = user_token("not-a-number");
        assert!(matches!(
            token.adjusted_balance(),
            Err(Error::Calculation(_))
        ));
    }

    #[test]
    fn currency_renders_upstream_codes() {
        assert_eq!(Currency::Usd.to_string(), "USD");
        assert_eq!(Currency::Eur.to_string(), "EUR");
        assert_eq!(Currency::Gbp.to_string(), "GBP");
        assert_eq!(Currency::default(), Currency::Usd);
    }
}

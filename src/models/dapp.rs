use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

/// Entry in the upstream dapp catalog
///
/// Only the identifier is interpreted; every other upstream field is kept
/// as opaque passthrough data.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dapp {
    pub dapp_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Dapps keyed by `dappId`
///
/// Keys are unique; if the upstream array repeats an id, the last entry wins.
pub type DappMap = HashMap<String, Dapp>;

/// A wallet's itemized DeFi position within a dapp (upstream "decomposition")
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDapp {
    pub dapp_id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dapp_keeps_unknown_fields() {
        let dapp: Dapp = serde_json::from_str(
            r#"{"dappId": "jediswap", "name": "JediSwap", "tvl": 12.5}"#,
        )
        .unwrap();

        assert_eq!(dapp.dapp_id, "jediswap");
        assert_eq!(dapp.extra["name"], "JediSwap");
        assert_eq!(dapp.extra["tvl"], 12.5);
    }
}

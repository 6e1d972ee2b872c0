// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::collections::BTreeMap;

use serde::Serialize;

use super::env::Env;

/// Explorer API key names and the variables they are read from.
///
/// Polygon mainnet and Mumbai share one key.
pub const API_KEYS: &[(&str, &str)] = &[
    ("polygonMumbai", "POLYGON_API_KEY"),
    ("bscTestnet", "ETHERSCAN_API_KEY"),
    ("polygon", "POLYGON_API_KEY"),
    ("coston", "COSTON_API_KEY"),
];

/// Block-explorer verification settings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EtherscanConfig {
    pub api_key: BTreeMap<String, String>,
}

impl EtherscanConfig {
    /// Resolves every API key from `env`, blank when undefined.
    pub fn from_env(env: &impl Env) -> Self {
        let api_key = API_KEYS
            .iter()
            .map(|(explorer, var)| (explorer.to_string(), env.var(var).unwrap_or_default()))
            .collect();
        Self { api_key }
    }

    /// Non-blank API key for an explorer.
    pub fn key_for(&self, explorer: &str) -> Option<&str> {
        self.api_key
            .get(explorer)
            .map(String::as_str)
            .filter(|key| !key.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn keys_default_to_blank() {
        let config = EtherscanConfig::from_env(&BTreeMap::<String, String>::new());
        assert_eq!(config.api_key.len(), 4);
        assert!(config.api_key.values().all(String::is_empty));
        assert_eq!(config.key_for("polygon"), None);
    }

    #[test]
    fn polygon_key_is_shared() {
        let env: BTreeMap<_, _> = [("POLYGON_API_KEY".to_string(), "poly".to_string())].into();
        let config = EtherscanConfig::from_env(&env);
        assert_eq!(config.key_for("polygon"), Some("poly"));
        assert_eq!(config.key_for("polygonMumbai"), Some("poly"));
        assert_eq!(config.key_for("bscTestnet"), None);
        assert_eq!(config.key_for("unknown"), None);
    }
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! The build configuration record.
//!
//! Assembled once from the environment at start-up and read-only afterwards. Loading performs no
//! validation and cannot fail: an undefined URL or API key becomes `""`, an undefined private key
//! becomes an empty account list. Malformed values pass through untouched for the consuming
//! collaborator to reject.

use std::collections::BTreeMap;

use serde::Serialize;

use super::{
    abi::AbiExporterConfig,
    chain::Chain,
    env::{Env, ProcessEnv},
    gas::GasReporterConfig,
    network::{NetworkConfig, NETWORKS},
    paths::PathsConfig,
    verification::EtherscanConfig,
};
use crate::Result;

/// Pinned contract compiler version.
pub const SOLIDITY_VERSION: &str = "0.8.17";

/// Placeholder for secrets in displayed configurations.
pub const REDACTED: &str = "<redacted>";

/// Toolchain plugins activated by the configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Plugin {
    #[serde(rename = "hardhat-etherscan")]
    Etherscan,
    #[serde(rename = "hardhat-waffle")]
    Waffle,
    #[serde(rename = "typechain")]
    Typechain,
    #[serde(rename = "hardhat-gas-reporter")]
    GasReporter,
    #[serde(rename = "solidity-coverage")]
    Coverage,
    #[serde(rename = "hardhat-abi-exporter")]
    AbiExporter,
}

pub const PLUGINS: &[Plugin] = &[
    Plugin::Etherscan,
    Plugin::Waffle,
    Plugin::Typechain,
    Plugin::GasReporter,
    Plugin::Coverage,
    Plugin::AbiExporter,
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildConfig {
    pub solidity: String,
    pub networks: BTreeMap<String, NetworkConfig>,
    pub gas_reporter: GasReporterConfig,
    pub etherscan: EtherscanConfig,
    pub abi_exporter: AbiExporterConfig,
    pub paths: PathsConfig,
    pub plugins: Vec<Plugin>,
}

impl BuildConfig {
    /// Assembles the configuration from `env`.
    pub fn load(env: &impl Env) -> Self {
        let networks = NETWORKS
            .iter()
            .map(|spec| (spec.name.to_string(), spec.resolve(env)))
            .collect();
        Self {
            solidity: SOLIDITY_VERSION.to_string(),
            networks,
            gas_reporter: GasReporterConfig::from_env(env),
            etherscan: EtherscanConfig::from_env(env),
            abi_exporter: AbiExporterConfig::default(),
            paths: PathsConfig::default(),
            plugins: PLUGINS.to_vec(),
        }
    }

    pub fn from_process_env() -> Self {
        Self::load(&ProcessEnv)
    }

    pub fn network(&self, name: &str) -> Option<&NetworkConfig> {
        self.networks.get(name)
    }

    /// Non-blank explorer API key for a configured network.
    pub fn verification_key(&self, network: &str) -> Option<&str> {
        let chain = Chain::by_network(network)?;
        self.etherscan.key_for(chain.explorer)
    }

    /// Copy with every non-empty private key and API key masked.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        let secrets = config
            .networks
            .values_mut()
            .flat_map(|network| network.accounts.iter_mut())
            .chain(config.etherscan.api_key.values_mut());
        for secret in secrets {
            if !secret.is_empty() {
                *secret = REDACTED.to_string();
            }
        }
        config
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Network definitions and their signing credentials.

use alloy::{
    network::EthereumWallet,
    primitives::{Address, B256},
    signers::{local::PrivateKeySigner, Signer},
};
use serde::Serialize;

use super::env::Env;
use crate::utils::decode0x;

/// Gas price override for the Polygon and Flare test networks.
pub const TESTNET_GAS_PRICE: u64 = 50_000_000_000;

/// How a network entry is sourced from the environment.
#[derive(Clone, Copy, Debug)]
pub struct NetworkSpec {
    pub name: &'static str,
    pub url_var: &'static str,
    pub private_key_var: &'static str,
    pub gas_price: Option<u64>,
}

pub const NETWORKS: &[NetworkSpec] = &[
    NetworkSpec {
        name: "ropsten",
        url_var: "ROPSTEN_URL",
        private_key_var: "PRIVATE_KEY",
        gas_price: None,
    },
    NetworkSpec {
        name: "mumbai",
        url_var: "POLYGON_TESTNET",
        private_key_var: "POLYGON_PRIVATE_KEY",
        gas_price: Some(TESTNET_GAS_PRICE),
    },
    NetworkSpec {
        name: "coston",
        url_var: "COSTON_TESTNET",
        private_key_var: "COSTON_PRIVATE_KEY",
        gas_price: Some(TESTNET_GAS_PRICE),
    },
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkConfig {
    pub url: String,
    pub accounts: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    #[error("no accounts configured for this network")]
    NoAccounts,
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),
}

impl NetworkSpec {
    /// Resolves this network from `env`.
    ///
    /// The URL degrades to `""` when undefined. The account list holds exactly the private key
    /// when its variable is defined (even if empty) and is empty otherwise.
    pub fn resolve(&self, env: &impl Env) -> NetworkConfig {
        NetworkConfig {
            url: env.var(self.url_var).unwrap_or_default(),
            accounts: env.var(self.private_key_var).into_iter().collect(),
            gas_price: self.gas_price,
        }
    }
}

impl NetworkConfig {
    /// Parses the configured credential into a local signer.
    pub fn signer(&self) -> Result<PrivateKeySigner, NetworkError> {
        let key = self.accounts.first().ok_or(NetworkError::NoAccounts)?;
        if key.trim().is_empty() {
            return Err(NetworkError::InvalidPrivateKey("empty private key".into()));
        }
        let bytes = decode0x(key).map_err(|err| NetworkError::InvalidPrivateKey(err.to_string()))?;
        if bytes.len() != 32 {
            return Err(NetworkError::InvalidPrivateKey(format!(
                "expected 32 bytes, got {}",
                bytes.len()
            )));
        }
        PrivateKeySigner::from_bytes(&B256::from_slice(&bytes))
            .map_err(|err| NetworkError::InvalidPrivateKey(err.to_string()))
    }

    /// Builds a wallet signing for `chain_id` from the configured credential.
    pub fn wallet(&self, chain_id: u64) -> Result<EthereumWallet, NetworkError> {
        let signer = self.signer()?.with_chain_id(Some(chain_id));
        Ok(EthereumWallet::new(signer))
    }

    /// Address of the configured credential.
    pub fn signer_address(&self) -> Result<Address, NetworkError> {
        Ok(self.signer()?.address())
    }
}

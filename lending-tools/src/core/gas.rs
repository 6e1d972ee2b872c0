// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use serde::Serialize;

use super::env::Env;

/// Variable whose presence turns on gas reporting.
pub const REPORT_GAS_VAR: &str = "REPORT_GAS";

pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GasReporterConfig {
    pub enabled: bool,
    pub currency: String,
}

impl GasReporterConfig {
    /// Enabled exactly when [`REPORT_GAS_VAR`] is defined, whatever its value.
    pub fn from_env(env: &impl Env) -> Self {
        Self {
            enabled: env.is_defined(REPORT_GAS_VAR),
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

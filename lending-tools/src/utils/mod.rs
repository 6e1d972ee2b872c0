// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! General purpose utilities.
//!
//! None of these are specific to the lending toolchain, but the configuration and export code
//! in [`lending-tools`](crate) is built on them.

use color::{Color, GREY, MINT, YELLOW};

pub mod color;
pub mod sys;

/// Pretty-prints a gas price given in wei.
pub fn format_gas_price(wei: Option<u64>) -> String {
    match wei {
        Some(wei) => {
            let gwei = wei as f64 / 1e9;
            format!("{YELLOW}{gwei} gwei{GREY} ({wei} wei)")
        }
        None => "auto".grey(),
    }
}

/// Pretty-prints whether a secret is present, without revealing it.
pub fn format_secret_presence(value: &str) -> String {
    if value.is_empty() {
        "unset".red()
    } else {
        format!("{MINT}set{GREY}")
    }
}

/// Strips an optional `0x` prefix and surrounding whitespace, then decodes hex.
pub fn decode0x(text: impl AsRef<str>) -> Result<Vec<u8>, hex::FromHexError> {
    let text = text.as_ref().trim();
    let text = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(text)
}

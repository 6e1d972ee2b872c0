// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use lending_tools::{
    core::chain::Chain,
    utils::{format_gas_price, format_secret_presence},
};

use crate::{common_args::ProjectArgs, error::CargoLendingResult, utils::styled_name};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> CargoLendingResult {
    let config = args.project.load()?;
    for (name, network) in &config.networks {
        let chain_id = Chain::by_network(name)
            .map(|chain| chain.id.to_string())
            .unwrap_or_else(|| "?".into());
        let url = if network.url.is_empty() {
            "<unset>"
        } else {
            network.url.as_str()
        };
        let api_key = config.verification_key(name).unwrap_or_default();
        println!("{} (chain {chain_id})", styled_name(name));
        println!("  url: {url}");
        println!("  accounts: {}", network.accounts.len());
        println!("  gas price: {}", format_gas_price(network.gas_price));
        println!("  verification key: {}", format_secret_presence(api_key));
    }
    Ok(())
}

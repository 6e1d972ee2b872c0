// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use eyre::eyre;
use lending_tools::core::network::NetworkError;

use crate::{common_args::ProjectArgs, error::CargoLendingResult, utils::styled_name};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Only show the account of this network, failing if it has no valid key
    #[arg(long)]
    network: Option<String>,

    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> CargoLendingResult {
    let config = args.project.load()?;

    if let Some(name) = &args.network {
        let network = config
            .network(name)
            .ok_or_else(|| eyre!("unknown network: {name}"))?;
        println!("{}: {}", styled_name(name), network.signer_address()?);
        return Ok(());
    }

    for (name, network) in &config.networks {
        match network.signer_address() {
            Ok(address) => println!("{}: {address}", styled_name(name)),
            Err(NetworkError::NoAccounts) => println!("{}: no account", styled_name(name)),
            Err(err) => println!("{}: {err}", styled_name(name)),
        }
    }
    Ok(())
}

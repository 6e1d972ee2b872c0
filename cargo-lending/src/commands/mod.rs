// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use crate::error::CargoLendingResult;

mod accounts;
mod config;
mod export_abi;
mod networks;

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Print the addresses of the configured signing accounts
    #[clap(visible_alias = "a")]
    Accounts(accounts::Args),
    /// Print the resolved build configuration
    #[clap(visible_alias = "c")]
    Config(config::Args),
    /// Export contract ABIs from compiled artifacts
    ExportAbi(export_abi::Args),
    /// List the configured networks
    #[clap(visible_alias = "n")]
    Networks(networks::Args),
}

pub fn exec(cmd: Command) -> CargoLendingResult {
    match cmd {
        Command::Accounts(args) => accounts::exec(args),
        Command::Config(args) => config::exec(args),
        Command::ExportAbi(args) => export_abi::exec(args),
        Command::Networks(args) => networks::exec(args),
    }
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use lending_tools::ops;

use crate::{common_args::ProjectArgs, error::CargoLendingResult};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> CargoLendingResult {
    let config = args.project.load()?;
    for exported in ops::export_abi(&config, &args.project.root)? {
        println!("{} -> {}", exported.name, exported.path.display());
    }
    Ok(())
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::{io::Write, path::PathBuf};

use lending_tools::utils::sys;

use crate::{
    common_args::{DisplayArgs, ProjectArgs},
    error::CargoLendingResult,
};

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Toml,
}

#[derive(Debug, clap::Args)]
pub struct Args {
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: Format,
    /// The output file (defaults to stdout).
    #[arg(long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    display: DisplayArgs,
    #[command(flatten)]
    project: ProjectArgs,
}

pub fn exec(args: Args) -> CargoLendingResult {
    let config = args.display.apply(args.project.load()?);
    let mut rendered = match args.format {
        Format::Json => config.to_json()?,
        Format::Toml => config.to_toml()?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    let mut out = sys::file_or_stdout(args.output)?;
    out.write_all(rendered.as_bytes())?;
    Ok(())
}

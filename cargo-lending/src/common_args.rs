// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::PathBuf;

use lending_tools::{
    core::env::{self, Layered, ProcessEnv, ENV_FILENAME},
    BuildConfig,
};

use crate::constants::DEFAULT_ROOT;

#[derive(Debug, clap::Args)]
pub struct ProjectArgs {
    /// Project root that relative paths are resolved against
    #[arg(long, default_value = DEFAULT_ROOT)]
    pub root: PathBuf,
    /// Environment file to fill in variables missing from the process environment.
    ///
    /// Defaults to `.env` in the project root, which is skipped if it does not exist.
    #[arg(long)]
    env_file: Option<PathBuf>,
}

impl ProjectArgs {
    /// Loads the build configuration from the process environment backed by the env file.
    pub fn load(&self) -> Result<BuildConfig, env::EnvError> {
        let file_vars = match &self.env_file {
            Some(path) => {
                log::debug!("reading env file {}", path.display());
                env::load_env_file(path)?
            }
            None => {
                let path = self.root.join(ENV_FILENAME);
                let vars = env::load_env_file_if_exists(&path)?;
                if vars.is_some() {
                    log::debug!("reading env file {}", path.display());
                }
                vars.unwrap_or_default()
            }
        };
        Ok(BuildConfig::load(&Layered::new(ProcessEnv, file_vars)))
    }
}

#[derive(Debug, clap::Args)]
pub struct DisplayArgs {
    /// Print private keys and API keys instead of masking them
    #[arg(long)]
    pub show_secrets: bool,
}

impl DisplayArgs {
    pub fn apply(&self, config: BuildConfig) -> BuildConfig {
        if self.show_secrets {
            config
        } else {
            config.redacted()
        }
    }
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Sources of environment variables.
//!
//! The configuration loader only ever asks one question of its environment: is this variable
//! defined, and if so what is its value. [`Env`] captures that, so the loader can run against the
//! real process environment, a fixed map, or a process environment backed by a `.env` file.

use std::{
    collections::{BTreeMap, HashMap},
    path::{Path, PathBuf},
};

/// Default filename for environment files.
pub const ENV_FILENAME: &str = ".env";

/// A read-only mapping of variable names to values.
///
/// `None` means the variable is undefined. A defined variable with an empty value is `Some("")`.
pub trait Env {
    fn var(&self, key: &str) -> Option<String>;

    fn is_defined(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

/// The environment of the current process.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnv;

impl Env for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // non-unicode values are still defined
        std::env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }
}

impl Env for BTreeMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl Env for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<E: Env + ?Sized> Env for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Looks variables up in `primary`, falling back to `fallback` when undefined there.
#[derive(Clone, Debug, Default)]
pub struct Layered<A, B> {
    pub primary: A,
    pub fallback: B,
}

impl<A, B> Layered<A, B> {
    pub fn new(primary: A, fallback: B) -> Self {
        Self { primary, fallback }
    }
}

impl<A: Env, B: Env> Env for Layered<A, B> {
    fn var(&self, key: &str) -> Option<String> {
        self.primary.var(key).or_else(|| self.fallback.var(key))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    #[error("failed to read env file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: dotenvy::Error,
    },
}

/// Reads and parses an env file without touching the process environment.
///
/// Later definitions win.
pub fn load_env_file(path: impl AsRef<Path>) -> Result<BTreeMap<String, String>, EnvError> {
    let path = path.as_ref();
    let read_error = |source: dotenvy::Error| EnvError::Read {
        path: path.to_path_buf(),
        source,
    };
    dotenvy::from_path_iter(path)
        .map_err(read_error)?
        .collect::<Result<_, _>>()
        .map_err(read_error)
}

/// Like [`load_env_file`], but a missing file yields `None` rather than an error.
pub fn load_env_file_if_exists(
    path: impl AsRef<Path>,
) -> Result<Option<BTreeMap<String, String>>, EnvError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Ok(None);
    }
    load_env_file(path).map(Some)
}

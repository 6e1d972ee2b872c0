// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::utils::sys;

/// Filesystem roots used by the surrounding toolchain.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PathsConfig {
    pub sources: PathBuf,
    pub tests: PathBuf,
    pub cache: PathBuf,
    pub artifacts: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            sources: "./contracts/lending".into(),
            tests: "./test".into(),
            cache: "./cache".into(),
            artifacts: "./artifacts".into(),
        }
    }
}

impl PathsConfig {
    /// Anchors every relative path at `root`. Paths are not checked for existence.
    pub fn resolve(&self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Self {
            sources: sys::join_relative(root, &self.sources),
            tests: sys::join_relative(root, &self.tests),
            cache: sys::join_relative(root, &self.cache),
            artifacts: sys::join_relative(root, &self.artifacts),
        }
    }
}

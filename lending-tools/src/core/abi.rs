// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! ABI export options and contract selection.

use std::path::PathBuf;

use regex::Regex;
use serde::Serialize;

/// Options controlling where and how contract ABIs are exported.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AbiExporterConfig {
    /// Output directory.
    pub path: PathBuf,
    /// Export after every compilation.
    pub run_on_compile: bool,
    /// Delete the output directory before exporting.
    pub clear: bool,
    /// Write every ABI directly under `path` instead of mirroring source directories.
    pub flat: bool,
    /// JSON indentation width; `0` writes compact JSON.
    pub spacing: usize,
    /// Write human-readable signatures instead of JSON ABI entries.
    pub pretty: bool,
    /// Patterns for fully qualified names to leave out.
    pub except: Vec<String>,
    /// Patterns for fully qualified names to keep; empty keeps everything.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub only: Vec<String>,
}

impl Default for AbiExporterConfig {
    fn default() -> Self {
        Self {
            path: "./abis".into(),
            run_on_compile: true,
            clear: true,
            flat: true,
            spacing: 2,
            pretty: true,
            except: vec![":IERC20$".into()],
            only: vec![],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AbiError {
    #[error("invalid contract pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
    #[error("duplicate output destination {}: {first} and {second}", path.display())]
    DuplicateOutput {
        path: PathBuf,
        first: String,
        second: String,
    },
    #[error("failed to read artifact {}: {source}", path.display())]
    Artifact {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid artifact glob: {0}")]
    Glob(#[from] glob::PatternError),
    #[error("failed to walk artifacts: {0}")]
    Walk(#[from] glob::GlobError),
}

/// Compiled `only`/`except` patterns, matched against `<sourceName>:<contractName>`.
#[derive(Clone, Debug)]
pub struct AbiFilter {
    only: Vec<Regex>,
    except: Vec<Regex>,
}

impl AbiExporterConfig {
    pub fn filter(&self) -> Result<AbiFilter, AbiError> {
        Ok(AbiFilter {
            only: compile(&self.only)?,
            except: compile(&self.except)?,
        })
    }
}

fn compile(patterns: &[String]) -> Result<Vec<Regex>, AbiError> {
    patterns
        .iter()
        .map(|pattern| {
            Regex::new(pattern).map_err(|source| AbiError::Pattern {
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

impl AbiFilter {
    pub fn is_excluded(&self, fully_qualified_name: &str) -> bool {
        let listed = self.only.is_empty()
            || self
                .only
                .iter()
                .any(|pattern| pattern.is_match(fully_qualified_name));
        !listed
            || self
                .except
                .iter()
                .any(|pattern| pattern.is_match(fully_qualified_name))
    }

    pub fn includes(&self, fully_qualified_name: &str) -> bool {
        !self.is_excluded(fully_qualified_name)
    }
}

/// Joins a source file and contract name the way artifacts are addressed.
pub fn fully_qualified_name(source_name: &str, contract_name: &str) -> String {
    format!("{source_name}:{contract_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_excludes_ierc20_only() {
        let filter = AbiExporterConfig::default().filter().unwrap();
        let cases = [
            ("@openzeppelin/contracts/token/ERC20/IERC20.sol:IERC20", true),
            ("contracts/lending/interfaces/IERC20.sol:IERC20", true),
            ("contracts/lending/LendingPool.sol:LendingPool", false),
            ("@openzeppelin/contracts/token/ERC20/extensions/IERC20Metadata.sol:IERC20Metadata", false),
            ("contracts/lending/MyIERC20Wrapper.sol:MyIERC20Wrapper", false),
            // the pattern anchors on the contract name, not the file
            ("contracts/IERC20.sol:Token", false),
        ];
        for (name, excluded) in cases {
            assert_eq!(filter.is_excluded(name), excluded, "{name}");
            assert_eq!(filter.includes(name), !excluded, "{name}");
        }
    }

    #[test]
    fn only_restricts_selection() {
        let config = AbiExporterConfig {
            only: vec!["^contracts/lending/".into()],
            ..Default::default()
        };
        let filter = config.filter().unwrap();
        assert!(filter.includes("contracts/lending/LendingPool.sol:LendingPool"));
        assert!(filter.is_excluded("contracts/mocks/MockToken.sol:MockToken"));
        // except still applies inside the allow list
        assert!(filter.is_excluded("contracts/lending/IERC20.sol:IERC20"));
    }

    #[test]
    fn invalid_pattern() {
        let config = AbiExporterConfig {
            except: vec!["(unclosed".into()],
            ..Default::default()
        };
        let err = config.filter().unwrap_err();
        assert!(matches!(err, AbiError::Pattern { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn qualified_names() {
        assert_eq!(
            fully_qualified_name("contracts/lending/Pool.sol", "Pool"),
            "contracts/lending/Pool.sol:Pool"
        );
    }
}

// Copyright 2025, Offchain Labs, Inc.
// For licensing, see https://github.com/OffchainLabs/stylus-sdk-rs/blob/main/licenses/COPYRIGHT.md

//! Export contract ABIs from compiled artifacts.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use alloy::json_abi::{AbiItem, Param, StateMutability};
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::{
    core::{
        abi::{fully_qualified_name, AbiError, AbiExporterConfig},
        config::BuildConfig,
    },
    utils::sys,
    Result,
};

/// Directory holding compiler inputs/outputs rather than contract artifacts.
const BUILD_INFO_DIR: &str = "build-info";
const DEBUG_SUFFIX: &str = ".dbg.json";

/// Exports the ABIs of a project's compiled contracts using its build configuration.
pub fn export_abi(config: &BuildConfig, root: impl AsRef<Path>) -> Result<Vec<ExportedAbi>> {
    Exporter::from_config(config, root).export()
}

/// Defines an ABI export run.
/// After setting the parameters, call `Exporter::export` to write the files.
#[derive(Debug, TypedBuilder)]
#[builder(field_defaults(setter(into)))]
pub struct Exporter {
    #[builder(default)]
    config: AbiExporterConfig,
    /// Directory of compiled artifacts to read.
    artifacts: PathBuf,
    /// Project root that a relative output path is resolved against.
    #[builder(default = PathBuf::from("."))]
    root: PathBuf,
}

/// A contract artifact as written by the compiler plugin.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Artifact {
    contract_name: String,
    source_name: String,
    /// Items in declaration order.
    abi: Vec<AbiItem<'static>>,
}

/// One written ABI file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportedAbi {
    pub name: String,
    pub path: PathBuf,
}

impl Exporter {
    /// Exporter using the options and artifact directory of a build configuration.
    pub fn from_config(config: &BuildConfig, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        Exporter::builder()
            .config(config.abi_exporter.clone())
            .artifacts(config.paths.resolve(root).artifacts)
            .root(root)
            .build()
    }

    /// Directory the ABIs are written to.
    pub fn output_dir(&self) -> PathBuf {
        sys::join_relative(&self.root, &self.config.path)
    }

    /// Writes one file per selected contract and returns them in artifact order.
    pub fn export(&self) -> Result<Vec<ExportedAbi>> {
        let filter = self.config.filter()?;
        let output = self.output_dir();

        let mut selected = Vec::new();
        let mut destinations: BTreeMap<PathBuf, String> = BTreeMap::new();
        for artifact in self.read_artifacts()? {
            let name = fully_qualified_name(&artifact.source_name, &artifact.contract_name);
            if artifact.abi.is_empty() || filter.is_excluded(&name) {
                debug!(@grey, "skipping {}", name);
                continue;
            }
            let path = self.destination(&output, &artifact);
            if let Some(first) = destinations.insert(path.clone(), name.clone()) {
                return Err(AbiError::DuplicateOutput {
                    path,
                    first,
                    second: name,
                }
                .into());
            }
            selected.push((name, path, artifact.abi));
        }

        if self.config.clear {
            sys::remove_dir_if_exists(&output)?;
        }

        let mut exported = Vec::with_capacity(selected.len());
        for (name, path, abi) in selected {
            let contents = if self.config.pretty {
                to_json(&human_readable(&abi), self.config.spacing)?
            } else {
                to_json(&abi, self.config.spacing)?
            };
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, contents)?;
            debug!(@grey, "exported {} to {}", name, path.display());
            exported.push(ExportedAbi { name, path });
        }

        info!(@mint, "exported {} ABIs to {}", exported.len(), output.display());
        Ok(exported)
    }

    fn destination(&self, output: &Path, artifact: &Artifact) -> PathBuf {
        let filename = format!("{}.json", artifact.contract_name);
        if self.config.flat {
            output.join(filename)
        } else {
            output.join(&artifact.source_name).join(filename)
        }
    }

    fn read_artifacts(&self) -> Result<Vec<Artifact>> {
        if !self.artifacts.is_dir() {
            warn!(
                @yellow,
                "no artifacts found in {}, has the project been compiled?",
                self.artifacts.display()
            );
            return Ok(vec![]);
        }

        let pattern = format!(
            "{}/**/*.json",
            glob::Pattern::escape(&self.artifacts.to_string_lossy())
        );
        let mut artifacts = Vec::new();
        for path in glob::glob(&pattern).map_err(AbiError::from)? {
            let path = path.map_err(AbiError::from)?;
            if !is_artifact(&path) {
                continue;
            }
            let contents = fs::read_to_string(&path)?;
            let artifact = serde_json::from_str(&contents)
                .map_err(|source| AbiError::Artifact { path, source })?;
            artifacts.push(artifact);
        }
        Ok(artifacts)
    }
}

fn is_artifact(path: &Path) -> bool {
    let in_build_info = path
        .components()
        .any(|component| component.as_os_str() == BUILD_INFO_DIR);
    let is_debug = path
        .file_name()
        .is_some_and(|name| name.to_string_lossy().ends_with(DEBUG_SUFFIX));
    !in_build_info && !is_debug
}

/// Serializes `value` with `spacing` spaces of indentation, or compactly for `0`.
fn to_json<T: Serialize + ?Sized>(value: &T, spacing: usize) -> Result<Vec<u8>> {
    if spacing == 0 {
        return Ok(serde_json::to_vec(value)?);
    }
    let indent = vec![b' '; spacing];
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(&indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
    value.serialize(&mut serializer)?;
    Ok(out)
}

/// Minimal human-readable signatures for the items of `abi`, in order.
///
/// e.g. `function balanceOf(address) view returns (uint256)` or
/// `event Transfer(address indexed,address indexed,uint256)`. Fallback and receive entries have no
/// minimal form and are left out.
pub fn human_readable(abi: &[AbiItem<'_>]) -> Vec<String> {
    abi.iter().filter_map(signature).collect()
}

fn signature(item: &AbiItem<'_>) -> Option<String> {
    let signature = match item {
        AbiItem::Constructor(constructor) => format!(
            "constructor({}){}",
            param_list(&constructor.inputs),
            mutability_suffix(constructor.state_mutability)
        ),
        AbiItem::Function(function) => {
            let mut signature = format!(
                "function {}({}){}",
                function.name,
                param_list(&function.inputs),
                mutability_suffix(function.state_mutability)
            );
            if !function.outputs.is_empty() {
                signature.push_str(&format!(" returns ({})", param_list(&function.outputs)));
            }
            signature
        }
        AbiItem::Event(event) => {
            let inputs = event
                .inputs
                .iter()
                .map(|input| {
                    let ty = param_type(&input.ty, &input.components);
                    if input.indexed {
                        format!("{ty} indexed")
                    } else {
                        ty
                    }
                })
                .collect::<Vec<_>>()
                .join(",");
            let anonymous = if event.anonymous { " anonymous" } else { "" };
            format!("event {}({inputs}){anonymous}", event.name)
        }
        AbiItem::Error(error) => format!("error {}({})", error.name, param_list(&error.inputs)),
        AbiItem::Fallback(_) | AbiItem::Receive(_) => return None,
    };
    Some(signature)
}

fn param_list(params: &[Param]) -> String {
    params
        .iter()
        .map(|param| param_type(&param.ty, &param.components))
        .collect::<Vec<_>>()
        .join(",")
}

/// Expands `tuple` types with their component lists, keeping any array suffix.
fn param_type(ty: &str, components: &[Param]) -> String {
    match ty.strip_prefix("tuple") {
        Some(suffix) => format!("tuple({}){suffix}", param_list(components)),
        None => ty.to_string(),
    }
}

fn mutability_suffix(mutability: StateMutability) -> &'static str {
    match mutability {
        StateMutability::Pure => " pure",
        StateMutability::View => " view",
        StateMutability::NonPayable => "",
        StateMutability::Payable => " payable",
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    const POOL_ABI: &str = r#"[
        {"type": "constructor", "stateMutability": "nonpayable",
         "inputs": [{"name": "token", "type": "address"}]},
        {"type": "function", "name": "deposit", "stateMutability": "nonpayable",
         "inputs": [{"name": "amount", "type": "uint256"}], "outputs": []},
        {"type": "function", "name": "balanceOf", "stateMutability": "view",
         "inputs": [{"name": "owner", "type": "address"}],
         "outputs": [{"name": "", "type": "uint256"}]},
        {"type": "function", "name": "position", "stateMutability": "view",
         "inputs": [{"name": "owner", "type": "address"}],
         "outputs": [{"name": "", "type": "tuple", "components": [
            {"name": "collateral", "type": "uint256"},
            {"name": "debt", "type": "uint256"}]}]},
        {"type": "event", "name": "Deposit", "anonymous": false, "inputs": [
            {"name": "user", "type": "address", "indexed": true},
            {"name": "amount", "type": "uint256", "indexed": false}]},
        {"type": "error", "name": "Unauthorized",
         "inputs": [{"name": "caller", "type": "address"}]}
    ]"#;

    const IERC20_ABI: &str = r#"[
        {"type": "function", "name": "totalSupply", "stateMutability": "view",
         "inputs": [], "outputs": [{"name": "", "type": "uint256"}]}
    ]"#;

    struct Project {
        dir: TempDir,
    }

    impl Project {
        fn new() -> Self {
            Self {
                dir: tempfile::tempdir().unwrap(),
            }
        }

        fn root(&self) -> &Path {
            self.dir.path()
        }

        fn artifact(&self, source: &str, contract: &str, abi: &str) {
            let dir = self.root().join("artifacts").join(source);
            fs::create_dir_all(&dir).unwrap();
            let json = format!(
                r#"{{"_format": "hh-sol-artifact-1", "contractName": "{contract}",
                    "sourceName": "{source}", "abi": {abi}, "bytecode": "0x"}}"#
            );
            fs::write(dir.join(format!("{contract}.json")), json).unwrap();
            fs::write(dir.join(format!("{contract}.dbg.json")), "{}").unwrap();
        }

        fn standard(&self) {
            self.artifact("contracts/lending/Pool.sol", "Pool", POOL_ABI);
            self.artifact(
                "@openzeppelin/contracts/token/ERC20/IERC20.sol",
                "IERC20",
                IERC20_ABI,
            );
            self.artifact("contracts/lending/Math.sol", "Math", "[]");
            let build_info = self.root().join("artifacts/build-info");
            fs::create_dir_all(&build_info).unwrap();
            fs::write(build_info.join("abc123.json"), r#"{"id": "abc123"}"#).unwrap();
        }

        fn exporter(&self, config: AbiExporterConfig) -> Exporter {
            Exporter::builder()
                .config(config)
                .artifacts(self.root().join("artifacts"))
                .root(self.root())
                .build()
        }
    }

    #[test]
    fn pretty_flat_export() {
        let project = Project::new();
        project.standard();

        let exported = project.exporter(AbiExporterConfig::default()).export().unwrap();
        let abis = project.root().join("abis");
        assert_eq!(
            exported,
            vec![ExportedAbi {
                name: "contracts/lending/Pool.sol:Pool".into(),
                path: abis.join("Pool.json"),
            }]
        );

        let contents = fs::read_to_string(abis.join("Pool.json")).unwrap();
        assert!(contents.starts_with("[\n  \"constructor(address)\""));
        let items: Vec<String> = serde_json::from_str(&contents).unwrap();
        assert_eq!(
            items,
            vec![
                "constructor(address)",
                "function deposit(uint256)",
                "function balanceOf(address) view returns (uint256)",
                "function position(address) view returns (tuple(uint256,uint256))",
                "event Deposit(address indexed,uint256)",
                "error Unauthorized(address)",
            ]
        );
        assert!(!abis.join("IERC20.json").exists());
        assert!(!abis.join("Math.json").exists());
    }

    #[test]
    fn json_nested_export() {
        let project = Project::new();
        project.standard();

        let config = AbiExporterConfig {
            flat: false,
            pretty: false,
            spacing: 4,
            except: vec![],
            ..Default::default()
        };
        let exported = project.exporter(config).export().unwrap();
        let names: Vec<_> = exported.iter().map(|abi| abi.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "@openzeppelin/contracts/token/ERC20/IERC20.sol:IERC20",
                "contracts/lending/Pool.sol:Pool",
            ]
        );

        let path = project
            .root()
            .join("abis/contracts/lending/Pool.sol/Pool.json");
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.starts_with("[\n    {"));
        let abi: Vec<AbiItem<'_>> = serde_json::from_str(&contents).unwrap();
        let expected: Vec<AbiItem<'_>> = serde_json::from_str(POOL_ABI).unwrap();
        assert_eq!(abi, expected);
        assert!(matches!(&abi[1], AbiItem::Function(f) if f.name == "deposit"));
    }

    #[test]
    fn compact_output() {
        let project = Project::new();
        project.artifact("contracts/Token.sol", "Token", IERC20_ABI);
        let config = AbiExporterConfig {
            spacing: 0,
            ..Default::default()
        };
        project.exporter(config).export().unwrap();
        let contents = fs::read_to_string(project.root().join("abis/Token.json")).unwrap();
        assert_eq!(
            contents,
            r#"["function totalSupply() view returns (uint256)"]"#
        );
    }

    #[test]
    fn flat_rejects_duplicate_names() {
        let project = Project::new();
        project.artifact("contracts/a/Oracle.sol", "Oracle", IERC20_ABI);
        project.artifact("contracts/b/Oracle.sol", "Oracle", IERC20_ABI);

        let err = project
            .exporter(AbiExporterConfig::default())
            .export()
            .unwrap_err();
        assert!(matches!(
            err,
            crate::Error::Abi(AbiError::DuplicateOutput { .. })
        ));
        // nothing is written when the run is rejected
        assert!(!project.root().join("abis").exists());

        let nested = AbiExporterConfig {
            flat: false,
            ..Default::default()
        };
        assert_eq!(project.exporter(nested).export().unwrap().len(), 2);
    }

    #[test]
    fn clear_removes_stale_files() {
        let project = Project::new();
        project.artifact("contracts/Token.sol", "Token", IERC20_ABI);
        let abis = project.root().join("abis");
        fs::create_dir_all(&abis).unwrap();
        fs::write(abis.join("Stale.json"), "[]").unwrap();

        let keep = AbiExporterConfig {
            clear: false,
            ..Default::default()
        };
        project.exporter(keep).export().unwrap();
        assert!(abis.join("Stale.json").exists());

        project.exporter(AbiExporterConfig::default()).export().unwrap();
        assert!(!abis.join("Stale.json").exists());
        assert!(abis.join("Token.json").exists());
    }

    #[test]
    fn missing_artifacts_exports_nothing() {
        let project = Project::new();
        let exported = project.exporter(AbiExporterConfig::default()).export().unwrap();
        assert!(exported.is_empty());
    }

    #[test]
    fn malformed_artifact_is_an_error() {
        let project = Project::new();
        let dir = project.root().join("artifacts/contracts/Broken.sol");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("Broken.json"), r#"{"contractName": "Broken"}"#).unwrap();
        let err = project
            .exporter(AbiExporterConfig::default())
            .export()
            .unwrap_err();
        assert!(matches!(err, crate::Error::Abi(AbiError::Artifact { .. })));
    }

    #[test]
    fn from_build_config() {
        let config = BuildConfig::load(&BTreeMap::<String, String>::new());
        let exporter = Exporter::from_config(&config, "/work/lending");
        assert_eq!(exporter.output_dir(), PathBuf::from("/work/lending/abis"));
        assert_eq!(exporter.artifacts, PathBuf::from("/work/lending/artifacts"));
    }

    #[test]
    fn signatures_for_special_items() {
        let abi: Vec<AbiItem<'_>> = serde_json::from_str(
            r#"[
                {"type": "constructor", "stateMutability": "payable", "inputs": []},
                {"type": "function", "name": "batch", "stateMutability": "pure",
                 "inputs": [{"name": "orders", "type": "tuple[]", "components": [
                    {"name": "id", "type": "uint64"},
                    {"name": "to", "type": "address"}]}],
                 "outputs": []},
                {"type": "fallback", "stateMutability": "nonpayable"},
                {"type": "event", "name": "Ping", "anonymous": true, "inputs": []},
                {"type": "receive", "stateMutability": "payable"},
                {"type": "function", "name": "allowance", "stateMutability": "view",
                 "inputs": [], "outputs": [{"name": "", "type": "uint256"}]}
            ]"#,
        )
        .unwrap();
        assert_eq!(
            human_readable(&abi),
            vec![
                "constructor() payable",
                "function batch(tuple(uint64,address)[]) pure",
                "event Ping() anonymous",
                "function allowance() view returns (uint256)",
            ]
        );
    }
}

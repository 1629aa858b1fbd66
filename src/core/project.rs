//! Project metadata loading

use crate::core::aliases::AliasTable;
use crate::error::{Result, UnimportedError};
use crate::models::package::{PackageManifest, TsConfig};
use crate::parsers::{PackageJsonParser, TsConfigParser};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Manifest-derived facts about the project under scan
#[derive(Debug, Clone)]
pub struct Project {
    pub root: PathBuf,
    pub manifest: PackageManifest,
    pub tsconfig: Option<TsConfig>,
    pub dependencies: BTreeSet<String>,
    pub peer_dependencies: BTreeSet<String>,
    pub aliases: AliasTable,
}

impl Project {
    /// Load package.json (required), tsconfig.json (optional) and peer dependencies
    pub fn load(root: &Path) -> Result<Self> {
        let manifest_path = root.join("package.json");
        if !manifest_path.is_file() {
            return Err(UnimportedError::ManifestNotFound {
                path: root.to_path_buf(),
            });
        }
        let manifest = PackageJsonParser::parse_file(&manifest_path)?;

        let tsconfig = load_tsconfig(root);
        let dependencies: BTreeSet<String> = manifest.dependency_names().map(str::to_string).collect();
        let peer_dependencies = collect_peer_dependencies(root, &dependencies);
        let aliases = AliasTable::build(root, &manifest, tsconfig.as_ref())?;

        tracing::debug!(
            "{} dependencies, {} peer dependencies, {} aliases",
            dependencies.len(),
            peer_dependencies.len(),
            aliases.len()
        );

        Ok(Self {
            root: root.to_path_buf(),
            manifest,
            tsconfig,
            dependencies,
            peer_dependencies,
            aliases,
        })
    }
}

fn load_tsconfig(root: &Path) -> Option<TsConfig> {
    let path = root.join("tsconfig.json");
    if !path.is_file() {
        return None;
    }

    match TsConfigParser::parse_file(&path) {
        Ok(config) => Some(config),
        Err(err) => {
            tracing::warn!("ignoring tsconfig.json: {}", err);
            None
        }
    }
}

/// Union of `peerDependencies` across the installed manifests of every dependency
fn collect_peer_dependencies(root: &Path, dependencies: &BTreeSet<String>) -> BTreeSet<String> {
    let mut peers = BTreeSet::new();

    for dep in dependencies {
        let path = root.join("node_modules").join(dep).join("package.json");
        if !path.is_file() {
            continue;
        }

        match PackageJsonParser::parse_file(&path) {
            Ok(manifest) => peers.extend(manifest.peer_dependencies.into_keys()),
            Err(err) => tracing::debug!("skipping peers of {}: {}", dep, err),
        }
    }

    peers
}

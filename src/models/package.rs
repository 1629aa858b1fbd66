//! Project manifest data structures

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The subset of package.json the scan cares about
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: Option<String>,
    pub main: Option<String>,
    /// `dependencies`: name → version spec, in declaration order
    pub dependencies: IndexMap<String, String>,
    pub peer_dependencies: IndexMap<String, String>,
    pub repository: Option<RepositoryInfo>,
}

impl PackageManifest {
    /// Declared dependency names
    pub fn dependency_names(&self) -> impl Iterator<Item = &str> {
        self.dependencies.keys().map(String::as_str)
    }

    /// Subdirectory of the repository this package lives in, if any
    pub fn repository_directory(&self) -> Option<&str> {
        match &self.repository {
            Some(RepositoryInfo::Object { directory, .. }) => directory.as_deref(),
            _ => None,
        }
    }
}

/// Repository information from package.json
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RepositoryInfo {
    String(String),
    Object {
        #[serde(rename = "type")]
        repo_type: Option<String>,
        url: Option<String>,
        directory: Option<String>,
    },
}

/// The subset of tsconfig.json used for alias building
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TsConfig {
    pub base_url: Option<String>,
    /// `compilerOptions.paths`, pattern → targets, in declaration order
    pub paths: IndexMap<String, Vec<String>>,
}

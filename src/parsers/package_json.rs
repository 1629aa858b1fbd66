//! Package.json parsing functionality
//!
//! Fields are extracted by hand from a `serde_json::Value` so that a
//! malformed optional field (a `dependencies` array, a numeric `main`)
//! degrades to "absent" instead of rejecting the whole manifest.

use crate::error::{read_file, Result, UnimportedError};
use crate::models::package::{PackageManifest, RepositoryInfo};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::path::Path;

/// Parser for package.json files
pub struct PackageJsonParser;

impl PackageJsonParser {
    /// Parse package.json content into a PackageManifest
    pub fn parse(content: &str) -> Result<PackageManifest> {
        let json_value: Value =
            serde_json::from_str(content).map_err(|e| UnimportedError::json_parse_error("package.json", e))?;

        let obj = match json_value {
            Value::Object(obj) => obj,
            _ => {
                return Err(UnimportedError::InvalidPackageJson {
                    path: "package.json".into(),
                    message: "Root value is not an object".into(),
                });
            }
        };

        Ok(PackageManifest {
            name: Self::extract_optional_string(&obj, "name"),
            main: Self::extract_optional_string(&obj, "main"),
            dependencies: Self::extract_dependencies(&obj, "dependencies"),
            peer_dependencies: Self::extract_dependencies(&obj, "peerDependencies"),
            repository: Self::extract_repository(&obj),
        })
    }

    /// Parse package.json file from a path
    pub fn parse_file(path: &Path) -> Result<PackageManifest> {
        let content = read_file(path)?;

        Self::parse(&content).map_err(|e| match e {
            UnimportedError::JsonParse { source, .. } => UnimportedError::JsonParse {
                file: path.to_path_buf(),
                source,
            },
            UnimportedError::InvalidPackageJson { message, .. } => UnimportedError::InvalidPackageJson {
                path: path.to_path_buf(),
                message,
            },
            _ => e,
        })
    }

    /// Extract a dependency map; non-string version specs are skipped
    fn extract_dependencies(obj: &Map<String, Value>, field: &str) -> IndexMap<String, String> {
        let mut entries = IndexMap::new();

        if let Some(Value::Object(map)) = obj.get(field) {
            for (name, version) in map {
                if let Some(version_str) = version.as_str() {
                    entries.insert(name.clone(), version_str.to_string());
                }
            }
        }

        entries
    }

    fn extract_optional_string(obj: &Map<String, Value>, field: &str) -> Option<String> {
        match obj.get(field) {
            Some(Value::String(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn extract_repository(obj: &Map<String, Value>) -> Option<RepositoryInfo> {
        match obj.get("repository") {
            Some(Value::String(s)) => Some(RepositoryInfo::String(s.clone())),
            Some(Value::Object(repo_obj)) => Some(RepositoryInfo::Object {
                repo_type: Self::extract_optional_string(repo_obj, "type"),
                url: Self::extract_optional_string(repo_obj, "url"),
                directory: Self::extract_optional_string(repo_obj, "directory"),
            }),
            _ => None,
        }
    }
}

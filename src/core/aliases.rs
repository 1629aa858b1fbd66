//! Alias table construction
//!
//! An alias maps an import prefix to one or more base directories. The
//! table is built once per run from the project root, the manifest and the
//! optional tsconfig, then only read.

use crate::error::Result;
use crate::models::package::{PackageManifest, TsConfig};
use crate::utils::path_resolver::normalize_path;
use indexmap::IndexMap;
use path_slash::PathExt;
use std::fs;
use std::path::Path;

/// Ordered mapping of alias prefix to ordered candidate base directories
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    entries: IndexMap<String, Vec<String>>,
}

impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the table for a project
    ///
    /// Registration order: the root slash alias, sibling packages when the
    /// manifest declares a repository subdirectory, then tsconfig `paths`.
    pub fn build(project_root: &Path, manifest: &PackageManifest, tsconfig: Option<&TsConfig>) -> Result<Self> {
        let mut table = Self::new();

        table.register("/", vec![with_trailing_slash(&slash_string(project_root))]);

        if manifest.repository_directory().is_some() {
            table.register_siblings(project_root)?;
        }

        if let Some(tsconfig) = tsconfig {
            table.register_ts_paths(project_root, tsconfig);
        }

        tracing::debug!("built {} alias(es)", table.len());
        Ok(table)
    }

    /// Insert or replace an alias; a replaced key keeps its original position
    pub fn register(&mut self, key: impl Into<String>, targets: Vec<String>) {
        self.entries.insert(key.into(), targets);
    }

    /// Every alias whose key is a prefix of `target`, in registration order
    pub fn matching<'t>(&'t self, target: &'t str) -> impl Iterator<Item = (&'t str, &'t [String])> + 't {
        self.entries
            .iter()
            .filter(move |(key, _)| target.starts_with(key.as_str()))
            .map(|(key, targets)| (key.as_str(), targets.as_slice()))
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `<name>/` → `<parent>/<name>/` for each directory next to the project
    fn register_siblings(&mut self, project_root: &Path) -> Result<()> {
        let Some(parent) = project_root.parent() else {
            return Ok(());
        };

        let mut names: Vec<String> = fs::read_dir(parent)?
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|ty| ty.is_dir()).unwrap_or(false))
            .filter_map(|entry| entry.file_name().to_str().map(str::to_string))
            .collect();
        names.sort();

        for name in names {
            let target = with_trailing_slash(&slash_string(&parent.join(&name)));
            self.register(format!("{}/", name), vec![target]);
        }

        Ok(())
    }

    /// tsconfig `compilerOptions.paths`, with one trailing `*` stripped from keys and targets
    fn register_ts_paths(&mut self, project_root: &Path, tsconfig: &TsConfig) {
        let base = project_root.join(tsconfig.base_url.as_deref().unwrap_or("."));

        for (pattern, targets) in &tsconfig.paths {
            let key = pattern.strip_suffix('*').unwrap_or(pattern);
            let resolved = targets
                .iter()
                .map(|target| {
                    let stripped = target.strip_suffix('*').unwrap_or(target);
                    let joined = slash_string(&base.join(stripped));
                    if stripped.is_empty() || stripped.ends_with('/') {
                        with_trailing_slash(&joined)
                    } else {
                        joined
                    }
                })
                .collect();

            self.register(key, resolved);
        }
    }
}

fn slash_string(path: &Path) -> String {
    normalize_path(path).to_slash_lossy().into_owned()
}

fn with_trailing_slash(path: &str) -> String {
    if path.ends_with('/') {
        path.to_string()
    } else {
        format!("{}/", path)
    }
}

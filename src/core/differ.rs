//! Result differ
//!
//! Compares what the walk reached against what exists and what is declared.

use crate::models::analysis::{ProcessedResult, TraversalResult};
use path_slash::PathExt;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Project facts the differ needs beyond the traversal itself
pub struct DiffInput<'a> {
    pub project_root: &'a Path,
    pub dependencies: &'a BTreeSet<String>,
    pub peer_dependencies: &'a BTreeSet<String>,
    pub listing: &'a [PathBuf],
}

/// User-configured exclusions, matched by exact string
#[derive(Debug, Clone, Default)]
pub struct IgnoreLists {
    pub unresolved: Vec<String>,
    pub unimported: Vec<String>,
    pub unused: Vec<String>,
}

pub fn process_results(traversal: &TraversalResult, input: &DiffInput<'_>, ignore: &IgnoreLists) -> ProcessedResult {
    let unresolved: Vec<String> = traversal
        .unresolved
        .iter()
        .filter(|target| !ignore.unresolved.contains(target))
        .cloned()
        .collect();

    let unused: Vec<String> = input
        .dependencies
        .iter()
        .filter(|dep| !traversal.referenced_packages.contains(*dep))
        .filter(|dep| !input.peer_dependencies.contains(*dep))
        .filter(|dep| !ignore.unused.contains(dep))
        .cloned()
        .collect();

    let unimported: BTreeSet<String> = input
        .listing
        .iter()
        .filter(|path| !traversal.contains(path))
        .map(|path| relative_slash(path, input.project_root))
        .filter(|rel| !ignore.unimported.contains(rel))
        .collect();

    let clean = unresolved.is_empty() && unused.is_empty() && unimported.is_empty();

    ProcessedResult {
        unresolved,
        unimported: unimported.into_iter().collect(),
        unused,
        clean,
    }
}

/// `path` relative to `root`, forward slashes
fn relative_slash(path: &Path, root: &Path) -> String {
    path.strip_prefix(root).unwrap_or(path).to_slash_lossy().into_owned()
}

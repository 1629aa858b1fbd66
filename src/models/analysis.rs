//! Traversal and report data structures

use crate::models::import::FileRecord;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// Accumulated state of one graph walk
///
/// `source_files` doubles as the visited table for parsed files.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TraversalResult {
    pub unresolved: BTreeSet<String>,
    pub source_files: BTreeMap<PathBuf, FileRecord>,
    pub static_files: BTreeSet<PathBuf>,
    pub referenced_packages: BTreeSet<String>,
}

impl TraversalResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the path was recorded as either a source or a static file
    pub fn contains(&self, path: &std::path::Path) -> bool {
        self.source_files.contains_key(path) || self.static_files.contains(path)
    }
}

/// Final report handed to the output layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProcessedResult {
    pub unresolved: Vec<String>,
    pub unimported: Vec<String>,
    pub unused: Vec<String>,
    pub clean: bool,
}

impl ProcessedResult {
    /// Total number of findings across all categories
    pub fn finding_count(&self) -> usize {
        self.unresolved.len() + self.unimported.len() + self.unused.len()
    }
}

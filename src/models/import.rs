//! Import graph data types

use crate::error::{Result, UnimportedError};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Outcome of classifying one raw import target
///
/// Exactly one variant applies per target; classification never fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResolvedImport {
    /// A declared dependency (direct or `@types/`-prefixed)
    Package { declared_name: String },
    /// A file on disk with a code extension
    SourceFile { path: PathBuf },
    /// A file on disk with any other extension
    StaticFile { path: PathBuf },
    /// Nothing matched; carries the target exactly as written
    Unresolved { target: String },
}

impl ResolvedImport {
    /// Filesystem path for file imports
    pub fn path(&self) -> Option<&Path> {
        match self {
            ResolvedImport::SourceFile { path } | ResolvedImport::StaticFile { path } => Some(path),
            _ => None,
        }
    }
}

/// Parser family of a code file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    /// js, jsx, ts, tsx and their module/commonjs variants
    Script,
    /// Single-file components with template/script/style blocks
    Component,
}

impl FileKind {
    /// Select the parser family for a code file
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();

        match ext {
            "js" | "jsx" | "mjs" | "cjs" | "ts" | "tsx" | "mts" | "cts" => Ok(FileKind::Script),
            "vue" => Ok(FileKind::Component),
            _ => Err(UnimportedError::UnsupportedFileKind {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// One visited code file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub kind: FileKind,
    pub imports: Vec<ResolvedImport>,
}

/// Raw output of a file parser
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFile {
    /// Import targets in document order
    pub imports: Vec<String>,
    /// Compiled style blocks (component files only)
    pub styles: Vec<String>,
}

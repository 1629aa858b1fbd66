//! Immutable per-run resolution state

use crate::core::aliases::AliasTable;
use crate::core::project::Project;
use crate::models::config::Settings;
use crate::utils::path_resolver::ModuleResolver;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Everything classification and traversal need, built once and shared by reference
pub struct ResolutionContext {
    pub project_root: PathBuf,
    pub aliases: AliasTable,
    pub dependencies: BTreeSet<String>,
    pub peer_dependencies: BTreeSet<String>,
    pub code_extensions: Vec<String>,
    /// Scanned extensions (code and static)
    pub extensions: Vec<String>,
    pub resolver: ModuleResolver,
}

impl ResolutionContext {
    pub fn new(project: &Project, settings: &Settings) -> Self {
        Self {
            project_root: project.root.clone(),
            aliases: project.aliases.clone(),
            dependencies: project.dependencies.clone(),
            peer_dependencies: project.peer_dependencies.clone(),
            code_extensions: settings.code_extensions.clone(),
            extensions: settings.extensions.clone(),
            resolver: ModuleResolver::new(&settings.extensions, &settings.module_directory),
        }
    }

    /// Whether the path has an extension that is parsed for imports
    pub fn is_code_file(&self, path: &Path) -> bool {
        has_extension(path, &self.code_extensions)
    }

    /// Whether the path has an extension the scan tracks at all
    pub fn is_scanned_file(&self, path: &Path) -> bool {
        has_extension(path, &self.extensions)
    }
}

/// Match `path`'s extension against dotted extensions like `.tsx`
pub fn has_extension(path: &Path, extensions: &[String]) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => extensions
            .iter()
            .any(|candidate| candidate.strip_prefix('.').unwrap_or(candidate) == ext),
        None => false,
    }
}

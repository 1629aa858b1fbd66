//! Import target classification
//!
//! Turns a raw import target into exactly one `ResolvedImport`. Each step
//! is an `Option`-returning strategy; the first `Some` wins and a target
//! nothing claims becomes `Unresolved`.

use crate::core::context::ResolutionContext;
use crate::models::import::ResolvedImport;
use crate::utils::path_resolver::split_package_specifier;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub struct ImportClassifier<'c> {
    context: &'c ResolutionContext,
}

impl<'c> ImportClassifier<'c> {
    pub fn new(context: &'c ResolutionContext) -> Self {
        Self { context }
    }

    /// Classify `target` as written in a file located in `from_dir`
    pub fn classify(&self, target: &str, from_dir: &Path) -> ResolvedImport {
        let resolved = self
            .as_dependency(target)
            .or_else(|| self.as_direct(target, from_dir))
            .or_else(|| self.as_alias(target, from_dir))
            .or_else(|| self.as_relative(target, from_dir))
            .unwrap_or_else(|| ResolvedImport::Unresolved {
                target: target.to_string(),
            });

        tracing::debug!("{} from {} -> {:?}", target, from_dir.display(), resolved);
        resolved
    }

    fn as_dependency(&self, target: &str) -> Option<ResolvedImport> {
        dependency_name(target, &self.context.dependencies).map(|declared_name| ResolvedImport::Package { declared_name })
    }

    fn as_direct(&self, target: &str, from_dir: &Path) -> Option<ResolvedImport> {
        self.context
            .resolver
            .resolve(target, from_dir)
            .map(|path| self.file_import(path))
    }

    /// Substitute each matching alias prefix with each of its candidate directories
    fn as_alias(&self, target: &str, from_dir: &Path) -> Option<ResolvedImport> {
        self.context.aliases.matching(target).find_map(|(key, candidates)| {
            let rest = &target[key.len()..];
            candidates
                .iter()
                .find_map(|candidate| self.as_direct(&format!("{}{}", candidate, rest), from_dir))
        })
    }

    /// Last attempt: `import 'index'` meant `import './index'`
    fn as_relative(&self, target: &str, from_dir: &Path) -> Option<ResolvedImport> {
        self.as_direct(&format!("./{}", target), from_dir)
    }

    fn file_import(&self, path: PathBuf) -> ResolvedImport {
        if self.context.is_code_file(&path) {
            ResolvedImport::SourceFile { path }
        } else {
            ResolvedImport::StaticFile { path }
        }
    }
}

/// Declared dependency a target refers to, checked lexically
///
/// The package name is `@scope/pkg` for scoped targets and the first path
/// segment otherwise; a match on `@types/<name>` counts too.
pub fn dependency_name(target: &str, dependencies: &BTreeSet<String>) -> Option<String> {
    let (name, _) = split_package_specifier(target);

    if dependencies.contains(&name) {
        return Some(name);
    }

    let typed = format!("@types/{}", name);
    if dependencies.contains(&typed) {
        return Some(typed);
    }

    None
}

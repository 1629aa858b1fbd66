//! Entry point resolution

use crate::core::classifier::ImportClassifier;
use crate::core::context::ResolutionContext;
use crate::error::{Result, UnimportedError};
use crate::models::import::ResolvedImport;
use std::path::PathBuf;

/// Candidates tried, in order, when no entry is configured
pub const DEFAULT_ENTRY_CANDIDATES: &[&str] = &["./src/index", "./src/main", "./index", "./main"];

/// Resolve the files the walk starts from
///
/// Configured entries are all kept when they resolve to source files.
/// Otherwise the default candidates (then the manifest `main`) are tried
/// and the first source file wins.
pub fn resolve_entries(
    context: &ResolutionContext,
    configured: &[String],
    manifest_main: Option<&str>,
) -> Result<Vec<PathBuf>> {
    let classifier = ImportClassifier::new(context);
    let root = context.project_root.as_path();

    if !configured.is_empty() {
        let mut entries = Vec::new();
        for candidate in configured {
            match classifier.classify(candidate, root) {
                ResolvedImport::SourceFile { path } => {
                    if !entries.contains(&path) {
                        entries.push(path);
                    }
                }
                other => tracing::warn!("entry {} does not resolve to a source file ({:?})", candidate, other),
            }
        }

        if entries.is_empty() {
            return Err(UnimportedError::EntryNotFound {
                candidates: configured.to_vec(),
            });
        }
        return Ok(entries);
    }

    let candidates: Vec<String> = DEFAULT_ENTRY_CANDIDATES
        .iter()
        .map(|s| s.to_string())
        .chain(manifest_main.map(str::to_string))
        .collect();

    let found = candidates.iter().find_map(|candidate| match classifier.classify(candidate, root) {
        ResolvedImport::SourceFile { path } => Some(path),
        _ => None,
    });

    match found {
        Some(entry) => Ok(vec![entry]),
        None => Err(UnimportedError::EntryNotFound { candidates }),
    }
}

//! Eligible-file listing
//!
//! Produces the set of files the differ compares traversal output against.

use crate::core::context::has_extension;
use crate::error::Result;
use crate::models::config::Settings;
use crate::utils::path_resolver::normalize_path;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Compile ignore patterns; `*` stops at `/`, `**` crosses it
pub fn compile_ignore_patterns(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(GlobBuilder::new(pattern).literal_separator(true).build()?);
    }
    Ok(builder.build()?)
}

/// `<root>/src` when it exists, else the root itself
pub fn listing_base(project_root: &Path) -> PathBuf {
    let src = project_root.join("src");
    if src.is_dir() {
        src
    } else {
        project_root.to_path_buf()
    }
}

pub struct FileLister {
    extensions: Vec<String>,
    ignore: GlobSet,
    skip_dirs: HashSet<String>,
}

impl FileLister {
    pub fn new(settings: &Settings) -> Result<Self> {
        let skip_dirs = settings
            .module_directory
            .iter()
            .cloned()
            .chain(std::iter::once(".git".to_string()))
            .collect();

        Ok(Self {
            extensions: settings.extensions.clone(),
            ignore: compile_ignore_patterns(&settings.ignore_patterns)?,
            skip_dirs,
        })
    }

    /// Every scanned, non-ignored file under the listing base, sorted
    pub fn list(&self, project_root: &Path) -> Result<Vec<PathBuf>> {
        let base = listing_base(project_root);
        let mut files = Vec::new();

        let walker = WalkDir::new(&base)
            .follow_links(false)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !self.is_skipped_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!("skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if !entry.file_type().is_file() || !has_extension(entry.path(), &self.extensions) {
                continue;
            }

            let relative = entry.path().strip_prefix(&base).unwrap_or(entry.path());
            if self.ignore.is_match(relative) {
                continue;
            }

            files.push(normalize_path(entry.path()));
        }

        files.sort();
        tracing::debug!("listed {} file(s) under {}", files.len(), base.display());
        Ok(files)
    }

    fn is_skipped_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.skip_dirs.contains(name))
    }
}

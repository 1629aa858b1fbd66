//! Import graph traversal
//!
//! Walks the graph from the entry files with an explicit frontier and a
//! reserved set. Reservation and merging happen on the calling thread;
//! only parsing and classification of a batch of already-reserved files
//! is fanned out to the rayon pool.

use crate::core::classifier::ImportClassifier;
use crate::core::context::ResolutionContext;
use crate::error::Result;
use crate::models::analysis::TraversalResult;
use crate::models::import::{FileKind, FileRecord, ResolvedImport};
use crate::parsers::FileParser;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Progress snapshot emitted after every merged batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressUpdate {
    pub current: usize,
    pub total: usize,
    pub message: String,
}

impl ProgressUpdate {
    pub fn new(current: usize, total: usize, message: impl Into<String>) -> Self {
        Self {
            current,
            total,
            message: message.into(),
        }
    }
}

type ProgressCallback<'c> = Box<dyn Fn(ProgressUpdate) + Send + Sync + 'c>;

pub struct TraversalEngine<'c> {
    context: &'c ResolutionContext,
    parser: &'c FileParser,
    parallel: bool,
    progress: Option<ProgressCallback<'c>>,
}

impl<'c> TraversalEngine<'c> {
    pub fn new(context: &'c ResolutionContext, parser: &'c FileParser) -> Self {
        Self {
            context,
            parser,
            parallel: true,
            progress: None,
        }
    }

    /// Parse batches on the rayon pool (default) or sequentially
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_progress<F>(mut self, callback: F) -> Self
    where
        F: Fn(ProgressUpdate) + Send + Sync + 'c,
    {
        self.progress = Some(Box::new(callback));
        self
    }

    /// Walk from every entry into one fresh result
    pub fn traverse(&self, entries: &[PathBuf]) -> Result<TraversalResult> {
        let mut result = TraversalResult::new();
        self.traverse_into(entries, &mut result)?;
        Ok(result)
    }

    /// Walk from `entries`, extending an existing result
    ///
    /// Files already recorded in `result` are not visited again.
    pub fn traverse_into(&self, entries: &[PathBuf], result: &mut TraversalResult) -> Result<()> {
        let mut reserved: HashSet<PathBuf> = result
            .source_files
            .keys()
            .chain(result.static_files.iter())
            .cloned()
            .collect();
        let mut frontier: Vec<PathBuf> = entries.to_vec();

        while !frontier.is_empty() {
            let mut batch = Vec::new();

            for path in frontier.drain(..) {
                if !reserved.insert(path.clone()) {
                    continue;
                }
                if !self.context.is_scanned_file(&path) {
                    tracing::debug!("skipping {}: extension not scanned", path.display());
                    continue;
                }
                if self.context.is_code_file(&path) {
                    batch.push(path);
                } else {
                    result.static_files.insert(path);
                }
            }

            let records: Vec<Result<FileRecord>> = if self.parallel {
                batch.par_iter().map(|path| self.visit(path)).collect()
            } else {
                batch.iter().map(|path| self.visit(path)).collect()
            };

            for record in records {
                let record = record?;
                self.merge(record, &reserved, &mut frontier, result);
            }

            self.report(result, frontier.len());
        }

        Ok(())
    }

    /// Parse one code file and classify its targets
    fn visit(&self, path: &Path) -> Result<FileRecord> {
        let kind = FileKind::from_path(path)?;
        let parsed = self.parser.parse(path, kind)?;
        let from_dir = path.parent().unwrap_or(path);
        let classifier = ImportClassifier::new(self.context);

        let imports = parsed
            .imports
            .iter()
            .map(|target| classifier.classify(target, from_dir))
            .collect();

        Ok(FileRecord {
            path: path.to_path_buf(),
            kind,
            imports,
        })
    }

    fn merge(
        &self,
        record: FileRecord,
        reserved: &HashSet<PathBuf>,
        frontier: &mut Vec<PathBuf>,
        result: &mut TraversalResult,
    ) {
        for import in &record.imports {
            match import {
                ResolvedImport::Package { declared_name } => {
                    result.referenced_packages.insert(declared_name.clone());
                }
                ResolvedImport::Unresolved { target } => {
                    result.unresolved.insert(target.clone());
                }
                ResolvedImport::SourceFile { path } | ResolvedImport::StaticFile { path } => {
                    if !reserved.contains(path) {
                        frontier.push(path.clone());
                    }
                }
            }
        }

        result.source_files.insert(record.path.clone(), record);
    }

    fn report(&self, result: &TraversalResult, pending: usize) {
        if let Some(callback) = &self.progress {
            let done = result.source_files.len() + result.static_files.len();
            if done + pending == 0 {
                return;
            }
            callback(ProgressUpdate::new(done, done + pending, format!("resolving imports ({} files)", done)));
        }
    }
}

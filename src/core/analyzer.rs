//! Scan pipeline
//!
//! Project metadata → entries → traversal → file listing → differ.

use crate::core::context::ResolutionContext;
use crate::core::differ::{process_results, DiffInput, IgnoreLists};
use crate::core::entry::resolve_entries;
use crate::core::file_listing::FileLister;
use crate::core::project::Project;
use crate::core::traverse::{ProgressUpdate, TraversalEngine};
use crate::error::{Result, ResultExt, UnimportedError};
use crate::models::analysis::{ProcessedResult, TraversalResult};
use crate::models::config::Settings;
use crate::parsers::FileParser;
use crate::utils::path_resolver::normalize_path;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Everything one scan produced
#[derive(Debug, Clone)]
pub struct Analysis {
    pub project_root: PathBuf,
    pub entries: Vec<PathBuf>,
    pub traversal: TraversalResult,
    pub result: ProcessedResult,
    pub duration: Duration,
}

pub struct Analyzer {
    settings: Settings,
}

impl Analyzer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn analyze(&self) -> Result<Analysis> {
        self.analyze_with_progress(|_| {})
    }

    /// Run a scan, reporting phase changes and traversal progress
    pub fn analyze_with_progress<F>(&self, progress: F) -> Result<Analysis>
    where
        F: Fn(ProgressUpdate) + Send + Sync,
    {
        let start = Instant::now();
        let phase = |name: &str| progress(ProgressUpdate::new(0, 0, name));

        phase("initializing");
        let root = self.project_root()?;
        let project = Project::load(&root)?;
        let context = ResolutionContext::new(&project, &self.settings);
        let parser = FileParser::new(&root, self.settings.flow);

        let entries = resolve_entries(&context, &self.settings.entry, project.manifest.main.as_deref())?;
        tracing::info!("scanning from {} entry file(s)", entries.len());

        phase("resolving imports");
        let traversal = TraversalEngine::new(&context, &parser)
            .with_parallel(self.settings.parallel)
            .with_progress(&progress)
            .traverse(&entries)?;

        phase("traverse the file system");
        let listing = FileLister::new(&self.settings)?.list(&root)?;

        phase("process results");
        let input = DiffInput {
            project_root: &root,
            dependencies: &project.dependencies,
            peer_dependencies: &project.peer_dependencies,
            listing: &listing,
        };
        let result = process_results(&traversal, &input, &self.ignore_lists());

        tracing::info!(
            "visited {} source and {} static file(s), {} finding(s)",
            traversal.source_files.len(),
            traversal.static_files.len(),
            result.finding_count()
        );

        Ok(Analysis {
            project_root: root,
            entries,
            traversal,
            result,
            duration: start.elapsed(),
        })
    }

    /// Absolute, normalized project root
    fn project_root(&self) -> Result<PathBuf> {
        let root = &self.settings.project_root;
        if !root.is_dir() {
            return Err(UnimportedError::InvalidPath { path: root.clone() });
        }

        let absolute = root
            .canonicalize()
            .with_context(|| format!("Failed to resolve project root {}", root.display()))?;
        Ok(normalize_path(&absolute))
    }

    fn ignore_lists(&self) -> IgnoreLists {
        IgnoreLists {
            unresolved: self.settings.ignore_unresolved.clone(),
            unimported: self.settings.ignore_unimported.clone(),
            unused: self.settings.ignore_unused.clone(),
        }
    }
}

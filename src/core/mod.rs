//! Core scan engine: resolution, traversal and result diffing

pub mod aliases;
pub mod analyzer;
pub mod classifier;
pub mod context;
pub mod differ;
pub mod entry;
pub mod file_listing;
pub mod project;
pub mod traverse;

pub use aliases::AliasTable;
pub use analyzer::{Analysis, Analyzer};
pub use classifier::ImportClassifier;
pub use context::ResolutionContext;
pub use differ::{process_results, DiffInput, IgnoreLists};
pub use entry::resolve_entries;
pub use file_listing::FileLister;
pub use project::Project;
pub use traverse::{ProgressUpdate, TraversalEngine};

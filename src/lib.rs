//! unimported - find dead files, broken imports and unused dependencies
//!
//! Starting from a project's entry files, the import graph is walked with a
//! node-style resolver that understands path aliases, tsconfig `paths` and
//! vue single-file components. The walk is then compared against the files on
//! disk and the dependencies declared in package.json.

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logger;
pub mod models;
pub mod output;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use crate::core::{Analysis, Analyzer};
pub use error::{ErrorSeverity, Result, ResultExt, UnimportedError};
pub use models::{
    analysis::{ProcessedResult, TraversalResult},
    config::Settings,
    import::{FileKind, FileRecord, ResolvedImport},
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");

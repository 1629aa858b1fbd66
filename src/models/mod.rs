//! Data models and structures for unimported

pub mod analysis;
pub mod config;
pub mod import;
pub mod package;

pub use analysis::{ProcessedResult, TraversalResult};
pub use config::{OutputFormat, PartialSettings, Settings};
pub use import::{FileKind, FileRecord, ParsedFile, ResolvedImport};
pub use package::{PackageManifest, RepositoryInfo, TsConfig};

//! Error handling for unimported
//!
//! Error types, the crate `Result` alias, and context helpers.

pub mod context;
pub mod types;

pub use context::{read_file, IoResultExt, ResultExt};
pub use types::{ErrorSeverity, Result, UnimportedError};

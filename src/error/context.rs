//! Error context utilities
//!
//! Helpers for attaching context to foreign errors so they surface as
//! `UnimportedError` with a readable message.

use crate::error::{Result, UnimportedError};
use std::io;
use std::path::Path;

/// Extension trait for Result to add context to errors
pub trait ResultExt<T> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| UnimportedError::Analysis {
            message: format!("{}: {}", context(), err),
        })
    }
}

/// Extension trait for io results tied to one file
pub trait IoResultExt<T> {
    /// Attach the file being read
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn with_file_context<P: AsRef<Path>>(self, path: P) -> Result<T> {
        self.map_err(|source| UnimportedError::IoRead {
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Read a whole text file, reporting the path on failure
pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_file_context(path)
}

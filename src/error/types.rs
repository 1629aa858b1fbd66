//! Error types and definitions for unimported
//!
//! Per-target resolution misses are not errors (they surface as
//! `ResolvedImport::Unresolved` report data). Everything here either aborts
//! the run or is recovered locally by the caller.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current operation fails
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for unimported operations
#[derive(Debug, Error)]
pub enum UnimportedError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// Reading a source file failed
    #[error("Failed to read {path}: {source}")]
    IoRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parsing errors with file context
    #[error("JSON parsing error in {file}: {source}")]
    JsonParse {
        file: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid path errors
    #[error("Invalid path: {path}")]
    InvalidPath { path: PathBuf },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// JSON configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigJsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Glob pattern errors
    #[error("Glob pattern error: {source}")]
    GlobPattern {
        #[source]
        source: globset::Error,
    },

    /// CSV handling errors
    #[error("CSV error: {source}")]
    Csv {
        #[source]
        source: csv::Error,
    },

    /// package.json missing from the project root
    #[error("package.json not found in {path}")]
    ManifestNotFound { path: PathBuf },

    /// Invalid package.json structure
    #[error("Invalid package.json structure in {path}: {message}")]
    InvalidPackageJson { path: PathBuf, message: String },

    /// No entry candidate resolved to a source file
    #[error("could not find entry point (tried: {})", candidates.join(", "))]
    EntryNotFound { candidates: Vec<String> },

    /// A visited code file could not be parsed
    #[error("Failed parsing {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// A code extension without a matching parser
    #[error("No parser registered for {path}")]
    UnsupportedFileKind { path: PathBuf },

    /// A style block could not be compiled
    #[error("Failed compiling <style lang=\"{lang}\">: {message}")]
    StyleCompile { lang: String, message: String },

    /// Output file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// Output directory not found
    #[error("Output directory not found: {path}")]
    OutputDirectoryNotFound { path: PathBuf },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Generic analysis failure with context attached
    #[error("Analysis error: {message}")]
    Analysis { message: String },
}

impl UnimportedError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            UnimportedError::StyleCompile { .. } => ErrorSeverity::Warning,
            UnimportedError::InvalidPackageJson { .. } => ErrorSeverity::Warning,

            UnimportedError::Config { .. } => ErrorSeverity::Critical,
            UnimportedError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            UnimportedError::ConfigRead { .. } => ErrorSeverity::Critical,
            UnimportedError::ConfigParse { .. } => ErrorSeverity::Critical,
            UnimportedError::ConfigJsonParse { .. } => ErrorSeverity::Critical,
            UnimportedError::ManifestNotFound { .. } => ErrorSeverity::Critical,
            UnimportedError::EntryNotFound { .. } => ErrorSeverity::Critical,
            UnimportedError::Parse { .. } => ErrorSeverity::Critical,
            UnimportedError::UnsupportedFileKind { .. } => ErrorSeverity::Critical,
            UnimportedError::StdoutWrite { .. } => ErrorSeverity::Critical,
            UnimportedError::OutputDirectoryNotFound { .. } => ErrorSeverity::Critical,

            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            UnimportedError::JsonParse { file, source } => {
                format!("Invalid JSON in '{}': {}. Please check the file format.", file.display(), source)
            }
            UnimportedError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            UnimportedError::InvalidPath { path } => {
                format!("Invalid path: '{}'. Please provide a valid project directory.", path.display())
            }
            UnimportedError::ManifestNotFound { path } => {
                format!("Failed to load package.json from '{}'.", path.display())
            }
            UnimportedError::Parse { path, message } => {
                format!("Failed parsing '{}':\n{}", path.display(), message)
            }
            UnimportedError::OutputDirectoryNotFound { path } => {
                format!("Output directory '{}' does not exist. Please create the directory or specify a different output path.", path.display())
            }
            _ => self.to_string(),
        }
    }

    /// Get a hint for how to fix the error, if there is one
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            UnimportedError::ManifestNotFound { .. } => {
                Some("Run unimported from the directory that contains package.json, or pass --path")
            }
            UnimportedError::EntryNotFound { .. } => {
                Some("Add an \"entry\" list to .unimportedrc.json or pass --entry")
            }
            UnimportedError::Parse { .. } => {
                Some("If the file uses flow annotations without an @flow pragma, run with --flow")
            }
            UnimportedError::ConfigNotFound { .. } => {
                Some("Create a .unimportedrc.json file with --init or specify a config file with --config")
            }
            UnimportedError::GlobPattern { .. } => Some("Check the ignorePatterns entries in your config"),
            _ => None,
        }
    }

    /// Create an IO error with context
    pub fn io_error(source: std::io::Error) -> Self {
        UnimportedError::Io { source }
    }

    /// Create a JSON parse error with file context
    pub fn json_parse_error(file: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        UnimportedError::JsonParse {
            file: file.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        UnimportedError::Config {
            message: message.into(),
        }
    }

    /// Create a fatal parse error for a visited file
    pub fn parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        UnimportedError::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for UnimportedError {
    fn from(err: std::io::Error) -> Self {
        UnimportedError::io_error(err)
    }
}

impl From<csv::Error> for UnimportedError {
    fn from(err: csv::Error) -> Self {
        UnimportedError::Csv { source: err }
    }
}

impl From<globset::Error> for UnimportedError {
    fn from(err: globset::Error) -> Self {
        UnimportedError::GlobPattern { source: err }
    }
}

impl From<serde_json::Error> for UnimportedError {
    fn from(err: serde_json::Error) -> Self {
        UnimportedError::JsonSerialize { source: err }
    }
}

/// Result type alias for unimported operations
pub type Result<T> = std::result::Result<T, UnimportedError>;

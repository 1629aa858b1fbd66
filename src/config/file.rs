//! Configuration file and environment sources

use std::path::{Path, PathBuf};

use super::{parser, ConfigSource};
use crate::error::{Result, UnimportedError};
use crate::models::config::PartialSettings;

/// Default configuration file name, looked up in the project root
pub const DEFAULT_CONFIG_FILE: &str = ".unimportedrc.json";

/// Configuration file source
pub struct FileConfig {
    path: PathBuf,
    name: String,
    priority: u8,
}

impl FileConfig {
    /// Default config file inside `project_root`
    pub fn in_project(project_root: &Path) -> Self {
        Self {
            path: project_root.join(DEFAULT_CONFIG_FILE),
            name: "default config file".to_string(),
            priority: 20, // Higher priority than environment variables but lower than CLI
        }
    }

    /// Create a new file configuration source with a custom path
    pub fn with_path<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            name: format!("config file ({})", path.as_ref().display()),
            priority: 20,
        }
    }

    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileConfig {
    fn load(&self) -> Result<PartialSettings> {
        if !self.is_available() {
            return Err(UnimportedError::ConfigNotFound {
                path: self.path.clone(),
            });
        }

        parser::parse_config_file(&self.path)
    }

    fn is_available(&self) -> bool {
        self.path.is_file()
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

/// Environment variable configuration source
///
/// List values are comma separated; booleans accept `1`/`true`/`0`/`false`.
pub struct EnvConfig {
    prefix: String,
    name: String,
    priority: u8,
}

const ENV_KEYS: &[&str] = &[
    "PATH",
    "ENTRY",
    "FLOW",
    "EXTENSIONS",
    "IGNORE_PATTERNS",
    "MODULE_DIRECTORY",
    "OUTPUT_FORMAT",
    "PARALLEL",
];

impl EnvConfig {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            name: format!("{} environment variables", &prefix),
            prefix,
            priority: 10,
        }
    }

    fn var(&self, key: &str) -> Option<String> {
        std::env::var(format!("{}_{}", self.prefix, key)).ok()
    }

    fn list(&self, key: &str) -> Option<Vec<String>> {
        self.var(key).map(|value| {
            value
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        })
    }

    fn flag(&self, key: &str) -> Result<Option<bool>> {
        match self.var(key) {
            None => Ok(None),
            Some(value) => match value.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" => Ok(Some(true)),
                "0" | "false" | "no" => Ok(Some(false)),
                other => Err(UnimportedError::config_error(format!(
                    "{}_{} must be a boolean, got '{}'",
                    self.prefix, key, other
                ))),
            },
        }
    }
}

impl ConfigSource for EnvConfig {
    fn load(&self) -> Result<PartialSettings> {
        let mut settings = PartialSettings {
            project_root: self.var("PATH").map(PathBuf::from),
            entry: self.list("ENTRY"),
            flow: self.flag("FLOW")?,
            extensions: self.list("EXTENSIONS"),
            ignore_patterns: self.list("IGNORE_PATTERNS"),
            module_directory: self.list("MODULE_DIRECTORY"),
            parallel: self.flag("PARALLEL")?,
            ..Default::default()
        };

        if let Some(format) = self.var("OUTPUT_FORMAT") {
            let format = format.parse().map_err(UnimportedError::config_error)?;
            settings.output_format = Some(format);
        }

        Ok(settings)
    }

    fn is_available(&self) -> bool {
        ENV_KEYS.iter().any(|key| self.var(key).is_some())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> u8 {
        self.priority
    }
}

//! Configuration management
//!
//! Settings are layered: defaults ← `.unimportedrc.json` (or a `--config`
//! file) ← `UNIMPORTED_*` environment variables ← command-line flags.

pub mod cli;
pub mod file;
pub mod parser;
pub mod settings;
#[cfg(test)]
pub mod tests;

use crate::error::Result;
use crate::models::config::{PartialSettings, Settings};
use std::path::{Path, PathBuf};

pub use cli::{CliArgs, CliConfig};
pub use file::{EnvConfig, FileConfig, DEFAULT_CONFIG_FILE};
pub use parser::{find_default_config, parse_config_content, parse_config_file, write_init_config};
pub use settings::SettingsValidator;

/// Environment variable prefix for configuration overrides
pub const ENV_PREFIX: &str = "UNIMPORTED";

/// Trait for configuration sources
pub trait ConfigSource {
    /// Load configuration from this source
    fn load(&self) -> Result<PartialSettings>;

    /// Check if this configuration source is available
    fn is_available(&self) -> bool;

    /// Get the name of this configuration source for logging
    fn name(&self) -> &str;

    /// Get the priority of this source (higher numbers take precedence)
    fn priority(&self) -> u8 {
        10
    }
}

/// Configuration builder for merging multiple sources
pub struct ConfigBuilder {
    partial: PartialSettings,
}

impl ConfigBuilder {
    /// Create a new configuration builder with defaults
    pub fn new() -> Self {
        Self {
            partial: PartialSettings::default(),
        }
    }

    /// Merge settings from a partial configuration
    pub fn merge(mut self, partial: PartialSettings) -> Self {
        self.partial.merge_from(partial);
        self
    }

    /// Load and merge settings from a configuration source
    pub fn load_from<S: ConfigSource>(self, source: &S) -> Result<Self> {
        if !source.is_available() {
            return Ok(self);
        }

        let partial = source.load()?;
        tracing::debug!("loaded configuration from {}", source.name());
        Ok(self.merge(partial))
    }

    /// Try to load from a source, ignoring it if unavailable or broken
    pub fn try_load_from<S: ConfigSource>(self, source: &S) -> Self {
        if !source.is_available() {
            return self;
        }

        match source.load() {
            Ok(partial) => self.merge(partial),
            Err(err) => {
                tracing::warn!("ignoring {}: {}", source.name(), err);
                self
            }
        }
    }

    /// Add configuration from a file
    pub fn add_config_file(self, path: &Path) -> Result<Self> {
        let file_config = FileConfig::with_path(path);
        self.load_from(&file_config)
    }

    /// Add `.unimportedrc.json` from the project root when present
    ///
    /// A default file that exists but does not parse is an error.
    pub fn add_default_config_file(self, project_root: &Path) -> Result<Self> {
        match find_default_config(project_root)? {
            Some(partial) => Ok(self.merge(partial)),
            None => Ok(self),
        }
    }

    /// Settings merged so far, before defaults are applied
    pub fn partial(&self) -> &PartialSettings {
        &self.partial
    }

    /// Build the final settings with validation
    pub fn build(self) -> Result<Settings> {
        let settings = self.partial.to_settings();
        SettingsValidator::validate(&settings)?;
        Ok(settings)
    }
}

impl Default for ConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Project root named on the command line, or the working directory
pub fn project_root(cli_args: &CliArgs) -> PathBuf {
    cli_args.path.clone().unwrap_or_else(|| PathBuf::from("."))
}

/// File-level configuration only (explicit `--config` or the default file)
pub fn load_file_config(cli_args: &CliArgs) -> Result<PartialSettings> {
    let builder = match &cli_args.config {
        Some(path) => {
            let file_config = FileConfig::with_path(path);
            if !file_config.is_available() {
                return Err(crate::error::UnimportedError::ConfigNotFound { path: path.clone() });
            }
            ConfigBuilder::new().load_from(&file_config)?
        }
        None => ConfigBuilder::new().add_default_config_file(&project_root(cli_args))?,
    };

    Ok(builder.partial)
}

/// Load configuration from every source with proper precedence handling
pub fn load_config(cli_args: CliArgs) -> Result<Settings> {
    load_config_with_env_prefix(cli_args, ENV_PREFIX)
}

/// Load configuration with a custom environment variable prefix
pub fn load_config_with_env_prefix(cli_args: CliArgs, env_prefix: &str) -> Result<Settings> {
    let file_settings = load_file_config(&cli_args)?;
    let cli_config = CliConfig::new(cli_args);
    let env_config = EnvConfig::new(env_prefix);

    ConfigBuilder::new()
        .merge(file_settings)
        .try_load_from(&env_config)
        .load_from(&cli_config)?
        .build()
}

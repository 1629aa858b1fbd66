//! Configuration file parsing utilities
//!
//! JSON is the native format; a path ending in `.toml` is read as TOML
//! with the same camelCase keys.

use std::fs;
use std::path::{Path, PathBuf};

use super::file::DEFAULT_CONFIG_FILE;
use crate::core::file_listing::compile_ignore_patterns;
use crate::error::{Result, UnimportedError};
use crate::models::config::PartialSettings;

/// Parse a configuration file into PartialSettings
pub fn parse_config_file<P: AsRef<Path>>(path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(UnimportedError::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|e| UnimportedError::ConfigRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_config_content(&content, path)
}

/// Parse configuration content, choosing the format from the path extension
pub fn parse_config_content<P: AsRef<Path>>(content: &str, path: P) -> Result<PartialSettings> {
    let path = path.as_ref();

    let settings: PartialSettings = if is_toml(path) {
        toml::from_str(content).map_err(|e| UnimportedError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?
    } else {
        serde_json::from_str(content).map_err(|e| UnimportedError::ConfigJsonParse {
            path: path.to_path_buf(),
            source: e,
        })?
    };

    validate_partial_settings(&settings, path)?;

    Ok(settings)
}

fn is_toml(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "toml")
}

/// Validate partial settings for obvious errors
pub fn validate_partial_settings<P: AsRef<Path>>(settings: &PartialSettings, path: P) -> Result<()> {
    let path = path.as_ref();

    if let Some(patterns) = &settings.ignore_patterns {
        if patterns.iter().any(String::is_empty) {
            return Err(UnimportedError::config_error(format!(
                "Empty ignore pattern in config file: {}",
                path.display()
            )));
        }

        compile_ignore_patterns(patterns).map_err(|e| {
            UnimportedError::config_error(format!("Invalid ignorePatterns in {}: {}", path.display(), e))
        })?;
    }

    if let Some(entries) = &settings.entry {
        if entries.iter().any(|entry| entry.trim().is_empty()) {
            return Err(UnimportedError::config_error(format!(
                "Empty entry in config file: {}",
                path.display()
            )));
        }
    }

    if let Some(output_file) = &settings.output_file {
        if output_file.as_os_str().is_empty() {
            return Err(UnimportedError::config_error(format!(
                "Invalid empty outputFile in config file: {}",
                path.display()
            )));
        }
    }

    Ok(())
}

/// Load `.unimportedrc.json` from the project root if it exists
pub fn find_default_config(project_root: &Path) -> Result<Option<PartialSettings>> {
    let path = project_root.join(DEFAULT_CONFIG_FILE);
    if !path.is_file() {
        return Ok(None);
    }

    Ok(Some(parse_config_file(path)?))
}

/// Write the `--init` config: the existing file settings plus the effective ignore patterns
pub fn write_init_config(project_root: &Path, file_settings: &PartialSettings, ignore_patterns: &[String]) -> Result<PathBuf> {
    let path = project_root.join(DEFAULT_CONFIG_FILE);

    let mut config = file_settings.clone();
    config.ignore_patterns = Some(ignore_patterns.to_vec());
    config.ignore_unresolved.get_or_insert_with(Vec::new);
    config.ignore_unimported.get_or_insert_with(Vec::new);
    config.ignore_unused.get_or_insert_with(Vec::new);

    let mut json = serde_json::to_string_pretty(&config)?;
    json.push('\n');

    fs::write(&path, json).map_err(|e| UnimportedError::OutputWrite {
        path: path.clone(),
        source: e,
    })?;

    Ok(path)
}

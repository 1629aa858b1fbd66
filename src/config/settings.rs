//! Settings validation

use crate::core::file_listing::compile_ignore_patterns;
use crate::error::{Result, ResultExt, UnimportedError};
use crate::models::config::Settings;
use std::path::Path;

/// Settings validator for ensuring configuration is valid
pub struct SettingsValidator;

impl SettingsValidator {
    /// Validate settings and return errors if invalid
    pub fn validate(settings: &Settings) -> Result<()> {
        if !settings.project_root.is_dir() {
            return Err(UnimportedError::InvalidPath {
                path: settings.project_root.clone(),
            });
        }

        compile_ignore_patterns(&settings.ignore_patterns).with_context(|| "Invalid ignore pattern")?;

        Self::validate_extensions(settings)?;

        if settings.module_directory.is_empty() || settings.module_directory.iter().any(String::is_empty) {
            return Err(UnimportedError::config_error("moduleDirectory must list at least one directory name"));
        }

        if let Some(path) = &settings.output_file {
            Self::validate_output_path(path)?;
        }

        Ok(())
    }

    fn validate_extensions(settings: &Settings) -> Result<()> {
        for ext in settings.extensions.iter().chain(settings.code_extensions.iter()) {
            if !ext.starts_with('.') || ext.len() < 2 {
                return Err(UnimportedError::config_error(format!(
                    "Extension '{}' must start with a dot, e.g. '.js'",
                    ext
                )));
            }
        }

        if let Some(missing) = settings
            .code_extensions
            .iter()
            .find(|ext| !settings.extensions.contains(ext))
        {
            return Err(UnimportedError::config_error(format!(
                "Code extension '{}' is missing from extensions",
                missing
            )));
        }

        Ok(())
    }

    /// Validate that an output path's directory exists
    fn validate_output_path(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                return Err(UnimportedError::OutputDirectoryNotFound {
                    path: parent.to_path_buf(),
                });
            }
        }

        Ok(())
    }
}

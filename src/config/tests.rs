//! Tests for configuration system

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::models::config::{OutputFormat, PartialSettings, Settings};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_partial_settings_merge() {
        let mut base = PartialSettings {
            entry: Some(vec!["src/base.js".to_string()]),
            ignore_unused: Some(vec!["left-pad".to_string()]),
            ..Default::default()
        };

        let override_settings = PartialSettings {
            entry: Some(vec!["src/override.js".to_string()]),
            flow: Some(true),
            ..Default::default()
        };

        base.merge_from(override_settings);

        assert_eq!(base.entry, Some(vec!["src/override.js".to_string()]));
        assert_eq!(base.ignore_unused, Some(vec!["left-pad".to_string()]));
        assert_eq!(base.flow, Some(true));
    }

    #[test]
    fn test_partial_settings_to_settings() {
        let partial = PartialSettings {
            ignore_patterns: Some(vec!["**/legacy/**".to_string()]),
            output_format: Some(OutputFormat::Json),
            flow: Some(true),
            ..Default::default()
        };

        let settings = partial.to_settings();

        assert_eq!(settings.ignore_patterns, vec!["**/legacy/**".to_string()]);
        assert_eq!(settings.output_format, OutputFormat::Json);
        assert!(settings.flow);

        // Unspecified fields keep their defaults
        assert!(settings.parallel);
        assert_eq!(settings.module_directory, vec!["node_modules".to_string()]);
        assert_eq!(settings.extensions.len(), 12);
    }

    #[test]
    fn test_narrowed_extensions_narrow_code_extensions() {
        let partial = PartialSettings {
            extensions: Some(vec![".ts".to_string(), ".tsx".to_string(), ".svg".to_string()]),
            ..Default::default()
        };

        let settings = partial.to_settings();

        assert_eq!(settings.code_extensions, vec![".ts".to_string(), ".tsx".to_string()]);
        assert!(settings.extensions.contains(&".svg".to_string()));
    }

    #[test]
    fn test_config_builder() {
        let temp_dir = tempdir().unwrap();

        let settings = ConfigBuilder::new()
            .merge(PartialSettings {
                project_root: Some(temp_dir.path().to_path_buf()),
                entry: Some(vec!["src/one.js".to_string()]),
                ignore_unresolved: Some(vec!["virtual:pwa".to_string()]),
                ..Default::default()
            })
            .merge(PartialSettings {
                entry: Some(vec!["src/two.js".to_string()]),
                ..Default::default()
            })
            .build()
            .unwrap();

        // Last merge wins for entry
        assert_eq!(settings.entry, vec!["src/two.js".to_string()]);
        // First merge is preserved where the second is silent
        assert_eq!(settings.ignore_unresolved, vec!["virtual:pwa".to_string()]);
    }

    #[test]
    fn test_file_config_source() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("unimported.toml");

        fs::write(
            &config_path,
            r#"
                flow = true
                ignorePatterns = ["**/fixtures/**"]
                outputFormat = "json"
                parallel = false
            "#,
        )
        .unwrap();

        let file_config = file::FileConfig::with_path(&config_path);
        assert!(file_config.is_available());
        assert_eq!(file_config.priority(), 20);

        let partial = file_config.load().unwrap();

        assert_eq!(partial.flow, Some(true));
        assert_eq!(partial.ignore_patterns, Some(vec!["**/fixtures/**".to_string()]));
        assert_eq!(partial.output_format, Some(OutputFormat::Json));
        assert_eq!(partial.parallel, Some(false));
    }

    #[test]
    fn test_file_config_not_found() {
        let file_config = file::FileConfig::with_path("/nonexistent/path/.unimportedrc.json");
        assert!(!file_config.is_available());
        assert!(file_config.load().is_err());
    }

    #[test]
    fn test_env_config_source() {
        std::env::set_var("UNIMPORTED_ENV_TEST_ENTRY", "src/a.ts, src/b.ts");
        std::env::set_var("UNIMPORTED_ENV_TEST_FLOW", "true");
        std::env::set_var("UNIMPORTED_ENV_TEST_OUTPUT_FORMAT", "csv");

        let env_config = file::EnvConfig::new("UNIMPORTED_ENV_TEST");
        assert!(env_config.is_available());
        assert_eq!(env_config.priority(), 10);

        let partial = env_config.load().unwrap();

        assert_eq!(partial.entry, Some(vec!["src/a.ts".to_string(), "src/b.ts".to_string()]));
        assert_eq!(partial.flow, Some(true));
        assert_eq!(partial.output_format, Some(OutputFormat::Csv));
        assert_eq!(partial.parallel, None);

        std::env::remove_var("UNIMPORTED_ENV_TEST_ENTRY");
        std::env::remove_var("UNIMPORTED_ENV_TEST_FLOW");
        std::env::remove_var("UNIMPORTED_ENV_TEST_OUTPUT_FORMAT");
    }

    #[test]
    fn test_env_config_rejects_bad_boolean() {
        std::env::set_var("UNIMPORTED_BAD_BOOL_PARALLEL", "sometimes");

        let env_config = file::EnvConfig::new("UNIMPORTED_BAD_BOOL");
        assert!(env_config.load().is_err());

        std::env::remove_var("UNIMPORTED_BAD_BOOL_PARALLEL");
    }

    #[test]
    fn test_settings_validator() {
        let temp_dir = tempdir().unwrap();
        let valid = Settings {
            project_root: temp_dir.path().to_path_buf(),
            ..Settings::default()
        };
        assert!(SettingsValidator::validate(&valid).is_ok());

        let missing_root = Settings {
            project_root: PathBuf::from("/nonexistent/path"),
            ..Settings::default()
        };
        assert!(SettingsValidator::validate(&missing_root).is_err());

        let undotted = Settings {
            project_root: temp_dir.path().to_path_buf(),
            extensions: vec!["js".to_string()],
            code_extensions: Vec::new(),
            ..Settings::default()
        };
        assert!(SettingsValidator::validate(&undotted).is_err());

        let unscanned_code = Settings {
            project_root: temp_dir.path().to_path_buf(),
            extensions: vec![".js".to_string()],
            code_extensions: vec![".js".to_string(), ".ts".to_string()],
            ..Settings::default()
        };
        assert!(SettingsValidator::validate(&unscanned_code).is_err());

        let no_module_dirs = Settings {
            project_root: temp_dir.path().to_path_buf(),
            module_directory: Vec::new(),
            ..Settings::default()
        };
        assert!(SettingsValidator::validate(&no_module_dirs).is_err());

        let missing_output_dir = Settings {
            project_root: temp_dir.path().to_path_buf(),
            output_file: Some(temp_dir.path().join("nope/report.json")),
            ..Settings::default()
        };
        assert!(SettingsValidator::validate(&missing_output_dir).is_err());
    }

    #[test]
    fn test_load_config_layers() {
        let temp_dir = tempdir().unwrap();
        fs::write(
            temp_dir.path().join(DEFAULT_CONFIG_FILE),
            r#"{ "entry": ["src/from-file.js"], "ignoreUnused": ["react"], "flow": false }"#,
        )
        .unwrap();

        std::env::set_var("UNIMPORTED_LAYER_TEST_OUTPUT_FORMAT", "json");

        let cli_args = CliArgs {
            path: Some(temp_dir.path().to_path_buf()),
            flow: true,
            ..Default::default()
        };

        let settings = load_config_with_env_prefix(cli_args, "UNIMPORTED_LAYER_TEST").unwrap();

        // Default file in the project root is picked up
        assert_eq!(settings.entry, vec!["src/from-file.js".to_string()]);
        assert_eq!(settings.ignore_unused, vec!["react".to_string()]);
        // Env overrides defaults
        assert_eq!(settings.output_format, OutputFormat::Json);
        // CLI overrides the file
        assert!(settings.flow);
        assert_eq!(settings.project_root, temp_dir.path().to_path_buf());

        std::env::remove_var("UNIMPORTED_LAYER_TEST_OUTPUT_FORMAT");
    }

    #[test]
    fn test_explicit_config_path_must_exist() {
        let temp_dir = tempdir().unwrap();
        let cli_args = CliArgs {
            path: Some(temp_dir.path().to_path_buf()),
            config: Some(temp_dir.path().join("missing.json")),
            ..Default::default()
        };

        match load_config(cli_args) {
            Err(crate::error::UnimportedError::ConfigNotFound { .. }) => {}
            other => panic!("Expected ConfigNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_broken_default_config_is_an_error() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILE), "{ entry: ").unwrap();

        let cli_args = CliArgs {
            path: Some(temp_dir.path().to_path_buf()),
            ..Default::default()
        };

        assert!(load_config(cli_args).is_err());
    }
}

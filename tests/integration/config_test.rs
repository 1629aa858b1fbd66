//! Configuration files driving a real scan

use super::common::project;
use std::fs;
use unimported::{
    cli::{Args, Command},
    config::{load_config, CliArgs},
    core::Analyzer,
};

#[test]
fn test_rc_file_entries_and_ignores_apply() {
    let dir = project(&[
        ("package.json", "{}"),
        (
            ".unimportedrc.json",
            r#"{
                "entry": ["./app/start.js"],
                "ignorePatterns": ["**/generated/**"],
                "ignoreUnresolved": ["./env"]
            }"#,
        ),
        ("app/start.js", "import './env';\nimport './routes';"),
        ("app/routes.js", ""),
        ("app/generated/schema.js", ""),
        ("app/unused.js", ""),
    ]);

    let settings = load_config(CliArgs {
        path: Some(dir.path().to_path_buf()),
        no_progress: true,
        quiet: true,
        ..Default::default()
    })
    .unwrap();

    let analysis = Analyzer::new(settings).analyze().unwrap();

    assert!(analysis.result.unresolved.is_empty());
    assert_eq!(analysis.result.unimported, vec!["app/unused.js"]);
}

#[test]
fn test_module_directory_is_configurable() {
    let dir = project(&[
        ("package.json", "{}"),
        (".unimportedrc.json", r#"{ "moduleDirectory": ["node_modules", "shared"] }"#),
        ("src/index.js", "import 'design-system/button';"),
        ("shared/design-system/button.js", ""),
    ]);

    let settings = load_config(CliArgs {
        path: Some(dir.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();

    let analysis = Analyzer::new(settings).analyze().unwrap();
    assert!(analysis.result.unresolved.is_empty(), "{:?}", analysis.result.unresolved);
}

#[test]
fn test_flow_flag_from_config() {
    let dir = project(&[
        ("package.json", "{}"),
        (".unimportedrc.json", r#"{ "flow": true }"#),
        ("src/index.js", "import { add } from './math';\nconst total: number = add(1, 2);"),
        ("src/math.js", "export function add(a: number, b: number): number { return a + b; }"),
    ]);

    let settings = load_config(CliArgs {
        path: Some(dir.path().to_path_buf()),
        ..Default::default()
    })
    .unwrap();
    assert!(settings.flow);

    let analysis = Analyzer::new(settings).analyze().unwrap();
    assert_eq!(analysis.traversal.source_files.len(), 2);
}

#[test]
fn test_init_keeps_existing_settings() {
    let dir = project(&[
        ("package.json", "{}"),
        (".unimportedrc.json", r#"{ "flow": true, "ignoreUnused": ["react"] }"#),
    ]);

    let command = Command::from_args(Args {
        path: Some(dir.path().to_path_buf()),
        init: true,
        quiet: true,
        ..Default::default()
    });
    assert_eq!(command.run(), 0);

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join(".unimportedrc.json")).unwrap()).unwrap();

    assert_eq!(written["flow"], serde_json::json!(true));
    assert_eq!(written["ignoreUnused"], serde_json::json!(["react"]));
    assert_eq!(written["ignorePatterns"][0], serde_json::json!("**/node_modules/**"));
}

//! Whole-pipeline tests: listing, diffing and reporting

use super::common::{analyze, project, settings_for};
use std::fs;
use unimported::{
    cli::{Args, Command},
    core::Analyzer,
    error::UnimportedError,
    models::config::Settings,
};

#[test]
fn test_never_reached_file_is_unimported() {
    let dir = project(&[
        ("package.json", "{}"),
        ("src/index.js", "import './used';"),
        ("src/used.js", ""),
        ("src/orphan.js", ""),
        ("src/legacy/old.tsx", ""),
        ("src/orphan.test.js", ""),
        ("src/__tests__/helper.js", ""),
    ]);

    let analysis = analyze(dir.path());

    assert_eq!(analysis.result.unimported, vec!["src/legacy/old.tsx", "src/orphan.js"]);
    for rel in &analysis.result.unimported {
        let absolute = unimported::utils::normalize_path(&analysis.project_root.join(rel));
        assert!(!analysis.traversal.contains(&absolute));
    }
}

#[test]
fn test_unused_excludes_referenced_and_peer_dependencies() {
    let dir = project(&[
        (
            "package.json",
            r#"{ "dependencies": { "react": "18", "react-dom": "18", "moment": "2", "@types/node": "20" } }"#,
        ),
        ("node_modules/react-dom/package.json", r#"{ "peerDependencies": { "react": "^18" } }"#),
        ("src/index.tsx", "import { createRoot } from 'react-dom/client';\nimport fs from 'node';\n"),
    ]);

    let analysis = analyze(dir.path());
    let result = &analysis.result;

    assert_eq!(result.unused, vec!["moment"]);
    for name in &result.unused {
        assert!(!analysis.traversal.referenced_packages.contains(name));
    }
}

#[test]
fn test_ignore_lists_make_the_report_clean() {
    let dir = project(&[
        ("package.json", r#"{ "dependencies": { "left-pad": "1" } }"#),
        ("src/index.js", "import 'virtual:icons';"),
        ("src/setupTests.js", ""),
    ]);

    let settings = Settings {
        ignore_unresolved: vec!["virtual:icons".to_string()],
        ignore_unimported: vec!["src/setupTests.js".to_string()],
        ignore_unused: vec!["left-pad".to_string()],
        ..settings_for(dir.path())
    };

    let analysis = Analyzer::new(settings).analyze().unwrap();
    assert!(analysis.result.clean, "{:?}", analysis.result);
}

#[test]
fn test_sequential_and_parallel_agree() {
    let dir = project(&[
        ("package.json", r#"{ "dependencies": { "lodash": "4" } }"#),
        ("src/index.js", "import './a';\nimport './b';\nimport('./lazy');"),
        ("src/a.js", "import _ from 'lodash/fp';\nimport './c';"),
        ("src/b.ts", "import x = require('./c');"),
        ("src/c.jsx", "export default () => <div />;"),
        ("src/lazy.js", "export const lazy = true;"),
        ("src/dead.js", ""),
    ]);

    let parallel = Analyzer::new(settings_for(dir.path())).analyze().unwrap();
    let sequential = Analyzer::new(Settings {
        parallel: false,
        ..settings_for(dir.path())
    })
    .analyze()
    .unwrap();

    assert_eq!(parallel.result, sequential.result);
    assert_eq!(parallel.traversal.source_files, sequential.traversal.source_files);
    assert_eq!(parallel.result.unimported, vec!["src/dead.js"]);
}

#[test]
fn test_missing_manifest_is_critical() {
    let dir = project(&[("src/index.js", "")]);

    let err = Analyzer::new(settings_for(dir.path())).analyze().unwrap_err();
    assert!(matches!(err, UnimportedError::ManifestNotFound { .. }));
    assert!(err.is_critical());
}

#[test]
fn test_missing_entry_is_critical() {
    let dir = project(&[("package.json", "{}"), ("lib/util.js", "")]);

    let err = Analyzer::new(settings_for(dir.path())).analyze().unwrap_err();
    assert!(matches!(err, UnimportedError::EntryNotFound { .. }));
}

#[test]
fn test_syntax_error_aborts_the_scan() {
    let dir = project(&[("package.json", "{}"), ("src/index.js", "import './broken';"), ("src/broken.js", "let = ;")]);

    match Analyzer::new(settings_for(dir.path())).analyze() {
        Err(UnimportedError::Parse { path, .. }) => assert!(path.ends_with("broken.js")),
        other => panic!("Expected Parse error, got {:?}", other.map(|a| a.result)),
    }
}

#[test]
fn test_cli_writes_csv_report() {
    let dir = project(&[
        ("package.json", r#"{ "dependencies": { "moment": "2" } }"#),
        ("src/index.js", "import './missing';"),
        ("src/orphan.js", ""),
    ]);
    let report = dir.path().join("report.csv");

    let command = Command::from_args(Args {
        path: Some(dir.path().to_path_buf()),
        output: Some(unimported::cli::args::OutputFormat::Csv),
        output_file: Some(report.clone()),
        quiet: true,
        no_progress: true,
        ..Default::default()
    });

    assert_eq!(command.run(), 0);
    let csv = fs::read_to_string(&report).unwrap();
    assert_eq!(
        csv.lines().collect::<Vec<_>>(),
        vec!["category,value", "unresolved,./missing", "unimported,src/orphan.js", "unused,moment"]
    );
}

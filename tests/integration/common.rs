//! Fixture helpers shared by the integration tests

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use unimported::{
    core::{Analysis, Analyzer},
    models::config::Settings,
    utils::normalize_path,
};

/// Create a project from `(relative path, content)` pairs
pub fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (rel, content) in files {
        let path = dir.path().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

pub fn settings_for(root: &Path) -> Settings {
    Settings {
        project_root: root.to_path_buf(),
        show_progress: false,
        quiet: true,
        ..Settings::default()
    }
}

pub fn analyze(root: &Path) -> Analysis {
    Analyzer::new(settings_for(root)).analyze().unwrap()
}

/// Absolute path as the scan records it
pub fn scanned(root: &Path, rel: &str) -> PathBuf {
    normalize_path(&root.canonicalize().unwrap().join(rel))
}

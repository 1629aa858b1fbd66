//! Node-style module path resolution
//!
//! Resolves a specifier from a base directory the way `require.resolve`
//! does: relative and absolute specifiers are joined onto the base, bare
//! ones are looked up in every ancestor's module directories. Each
//! candidate is tried as a file, as a file plus each extension, then as a
//! directory (manifest `main`, then `index`).

use crate::parsers::package_json::PackageJsonParser;
use dashmap::DashMap;
use lru::LruCache;
use parking_lot::Mutex;
use path_clean::PathClean;
use path_slash::PathBufExt;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const MANIFEST_CACHE_SIZE: usize = 256;

/// What a path points at on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    File,
    Dir,
    Missing,
}

/// Module resolver with per-run filesystem caches
///
/// Safe to share across rayon workers: the caches synchronize internally.
pub struct ModuleResolver {
    extensions: Vec<String>,
    module_directories: Vec<String>,
    entry_cache: Arc<DashMap<PathBuf, Entry>>,
    manifest_main_cache: Arc<Mutex<LruCache<PathBuf, Option<String>>>>,
}

impl ModuleResolver {
    /// `extensions` are tried in order when the specifier has none that exists
    pub fn new(extensions: &[String], module_directories: &[String]) -> Self {
        let capacity = NonZeroUsize::new(MANIFEST_CACHE_SIZE).unwrap_or(NonZeroUsize::MIN);

        Self {
            extensions: extensions.to_vec(),
            module_directories: module_directories.to_vec(),
            entry_cache: Arc::new(DashMap::new()),
            manifest_main_cache: Arc::new(Mutex::new(LruCache::new(capacity))),
        }
    }

    /// Resolve `specifier` from `base_dir` to a normalized file path
    pub fn resolve(&self, specifier: &str, base_dir: &Path) -> Option<PathBuf> {
        if specifier.is_empty() {
            return None;
        }

        let resolved = if is_path_specifier(specifier) {
            self.resolve_candidate(&base_dir.join(specifier).clean())
        } else {
            self.resolve_module(specifier, base_dir)
        };

        resolved.map(|path| normalize_path(&path))
    }

    /// Look the specifier up in `<ancestor>/<module dir>/` for every ancestor
    fn resolve_module(&self, specifier: &str, base_dir: &Path) -> Option<PathBuf> {
        for ancestor in base_dir.ancestors() {
            let is_module_dir = ancestor
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| self.module_directories.iter().any(|dir| dir == name));
            if is_module_dir {
                continue;
            }

            for module_dir in &self.module_directories {
                let candidate = ancestor.join(module_dir).join(specifier).clean();
                if let Some(resolved) = self.resolve_candidate(&candidate) {
                    return Some(resolved);
                }
            }
        }

        None
    }

    fn resolve_candidate(&self, candidate: &Path) -> Option<PathBuf> {
        self.load_as_file(candidate).or_else(|| self.load_as_directory(candidate))
    }

    fn load_as_file(&self, candidate: &Path) -> Option<PathBuf> {
        if self.entry(candidate) == Entry::File {
            return Some(candidate.to_path_buf());
        }

        let base = candidate.as_os_str().to_string_lossy();
        self.extensions
            .iter()
            .map(|ext| PathBuf::from(format!("{}{}", base, ext)))
            .find(|with_ext| self.entry(with_ext) == Entry::File)
    }

    fn load_as_directory(&self, candidate: &Path) -> Option<PathBuf> {
        if self.entry(candidate) != Entry::Dir {
            return None;
        }

        if let Some(main) = self.manifest_main(candidate) {
            let main_path = candidate.join(main).clean();
            let from_main = self.load_as_file(&main_path).or_else(|| self.load_index(&main_path));
            if from_main.is_some() {
                return from_main;
            }
        }

        self.load_index(candidate)
    }

    fn load_index(&self, dir: &Path) -> Option<PathBuf> {
        let index = dir.join("index");
        self.extensions
            .iter()
            .map(|ext| PathBuf::from(format!("{}{}", index.to_string_lossy(), ext)))
            .find(|with_ext| self.entry(with_ext) == Entry::File)
    }

    /// `main` field of `<dir>/package.json`, cached per directory
    fn manifest_main(&self, dir: &Path) -> Option<String> {
        let manifest_path = dir.join("package.json");

        {
            let mut cache = self.manifest_main_cache.lock();
            if let Some(cached) = cache.get(&manifest_path) {
                return cached.clone();
            }
        }

        let main = if self.entry(&manifest_path) == Entry::File {
            match PackageJsonParser::parse_file(&manifest_path) {
                Ok(manifest) => manifest.main,
                Err(err) => {
                    tracing::debug!("ignoring unreadable {}: {}", manifest_path.display(), err);
                    None
                }
            }
        } else {
            None
        };

        self.manifest_main_cache.lock().put(manifest_path, main.clone());
        main
    }

    /// Check what a path is with caching
    fn entry(&self, path: &Path) -> Entry {
        if let Some(cached) = self.entry_cache.get(path) {
            return *cached;
        }

        let entry = match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => Entry::File,
            Ok(meta) if meta.is_dir() => Entry::Dir,
            _ => Entry::Missing,
        };
        self.entry_cache.insert(path.to_path_buf(), entry);
        entry
    }
}

/// Whether the specifier addresses the filesystem instead of a module directory
pub fn is_path_specifier(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
        || specifier.starts_with('/')
}

/// Lexically normalize a path (`.`/`..` removed) in forward-slash form
pub fn normalize_path(path: &Path) -> PathBuf {
    let cleaned = path.clean();
    PathBuf::from_slash(cleaned.to_slash_lossy())
}

/// Split a specifier into its package name and the remaining subpath
///
/// `@scope/pkg/deep` gives `("@scope/pkg", Some("deep"))`.
pub fn split_package_specifier(specifier: &str) -> (String, Option<String>) {
    if specifier.starts_with('@') {
        let parts: Vec<&str> = specifier.splitn(3, '/').collect();
        if parts.len() >= 2 {
            let package_name = format!("{}/{}", parts[0], parts[1]);
            let subpath = parts.get(2).map(|s| s.to_string());
            (package_name, subpath)
        } else {
            (specifier.to_string(), None)
        }
    } else {
        match specifier.split_once('/') {
            Some((name, rest)) => (name.to_string(), Some(rest.to_string())),
            None => (specifier.to_string(), None),
        }
    }
}

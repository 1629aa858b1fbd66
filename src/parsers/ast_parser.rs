//! Script parser wrapper using OXC

use crate::error::{read_file, Result, UnimportedError};
use crate::parsers::flow_syntax::{scan_import_targets, strip_flow_syntax};
use crate::parsers::import_collector::ImportCollector;
use oxc_allocator::Allocator;
use oxc_diagnostics::OxcDiagnostic;
use oxc_parser::{ParseOptions, Parser};
use oxc_span::SourceType;
use parking_lot::Mutex;
use std::path::Path;
use std::sync::Arc;

/// Thread-safe allocator pool for reuse across parses
pub struct AllocatorPool {
    allocators: Arc<Mutex<Vec<Allocator>>>,
}

impl AllocatorPool {
    /// Create a new allocator pool
    pub fn new(size: usize) -> Self {
        let allocators = (0..size).map(|_| Allocator::default()).collect();
        Self {
            allocators: Arc::new(Mutex::new(allocators)),
        }
    }

    /// Take an allocator from the pool, or a fresh one if it is drained
    pub fn take(&self) -> Allocator {
        self.allocators.lock().pop().unwrap_or_default()
    }

    /// Return an allocator to the pool
    pub fn give_back(&self, mut allocator: Allocator) {
        allocator.reset();
        self.allocators.lock().push(allocator);
    }
}

/// Parser for js/jsx/ts/tsx sources
pub struct ScriptParser {
    flow: bool,
    parse_options: ParseOptions,
    allocator_pool: AllocatorPool,
}

impl ScriptParser {
    /// `flow` treats every plain JS file as Flow
    pub fn new(flow: bool) -> Self {
        Self {
            flow,
            parse_options: ParseOptions::default(),
            allocator_pool: AllocatorPool::new(rayon::current_num_threads()),
        }
    }

    /// Read a script file and return its import targets
    pub fn parse_file(&self, path: &Path) -> Result<Vec<String>> {
        let source_text = read_file(path)?;

        let source_type = SourceType::from_path(path).map_err(|_| UnimportedError::UnsupportedFileKind {
            path: path.to_path_buf(),
        })?;

        self.parse_source(path, &source_text, source_type)
    }

    /// Parse source text with a known grammar
    ///
    /// `path` only labels errors; the text may come from a component block.
    /// Plain JS is treated as Flow when `flow` is set or the file carries an
    /// `@flow` pragma: Flow-only syntax is blanked out, the result is parsed
    /// as TSX, and a file that still fails falls back to a lexical scan.
    pub fn parse_source(&self, path: &Path, source_text: &str, source_type: SourceType) -> Result<Vec<String>> {
        if source_type.is_typescript() || !(self.flow || has_flow_pragma(source_text)) {
            return self.parse_with(path, source_text, source_type);
        }

        let stripped = strip_flow_syntax(source_text);
        match self.parse_with(path, &stripped, SourceType::tsx()) {
            Ok(targets) => Ok(targets),
            Err(err) => {
                tracing::warn!("{}: flow source scanned without a syntax tree: {}", path.display(), err);
                Ok(scan_import_targets(&stripped))
            }
        }
    }

    fn parse_with(&self, path: &Path, source_text: &str, source_type: SourceType) -> Result<Vec<String>> {
        let allocator = self.allocator_pool.take();

        let targets = {
            let ret = Parser::new(&allocator, source_text, source_type)
                .with_options(self.parse_options.clone())
                .parse();

            if ret.panicked || !ret.errors.is_empty() {
                Err(UnimportedError::parse_error(path, render_diagnostics(&ret.errors)))
            } else {
                Ok(ImportCollector::collect(&ret.program))
            }
        };

        self.allocator_pool.give_back(allocator);

        if let Ok(found) = &targets {
            tracing::debug!("{}: {} import target(s)", path.display(), found.len());
        }
        targets
    }
}

fn render_diagnostics(errors: &[OxcDiagnostic]) -> String {
    if errors.is_empty() {
        return "parser aborted".to_string();
    }
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("\n")
}

/// Whether a leading comment carries an `@flow` pragma
pub fn has_flow_pragma(source_text: &str) -> bool {
    let mut rest = source_text.trim_start();

    loop {
        if let Some(line) = rest.strip_prefix("//") {
            let (comment, tail) = line.split_once('\n').unwrap_or((line, ""));
            if comment.contains("@flow") {
                return true;
            }
            rest = tail.trim_start();
        } else if let Some(block) = rest.strip_prefix("/*") {
            let (comment, tail) = block.split_once("*/").unwrap_or((block, ""));
            if comment.contains("@flow") {
                return true;
            }
            rest = tail.trim_start();
        } else {
            return false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn parse(name: &str, source: &str) -> Result<Vec<String>> {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join(name);
        fs::write(&file_path, source).unwrap();
        ScriptParser::new(false).parse_file(&file_path)
    }

    #[test]
    fn test_collects_targets_in_document_order() {
        let targets = parse(
            "index.js",
            r#"
            import React from 'react';
            import './side-effect';
            export { a } from './a';
            export * from './b';
            const c = require('./c');
            async function load() {
                const d = await import('./d');
                const e = await require('./e');
            }
            "#,
        )
        .unwrap();

        assert_eq!(targets, vec!["react", "./side-effect", "./a", "./b", "./c", "./d", "./e"]);
    }

    #[test]
    fn test_skips_computed_sources() {
        let targets = parse(
            "index.js",
            r#"
            const name = 'x';
            require(name);
            import(`./pages/${name}`);
            import(`./static`);
            "#,
        )
        .unwrap();

        assert_eq!(targets, vec!["./static"]);
    }

    #[test]
    fn test_local_exports_have_no_target() {
        let targets = parse("index.ts", "export const a = 1; export { a as b };").unwrap();
        assert!(targets.is_empty());
    }

    #[test]
    fn test_typescript_import_equals() {
        let targets = parse(
            "index.ts",
            r#"
            import fs = require('fs');
            import type { Props } from './types';
            const f = <T,>(x: T): T => x;
            "#,
        )
        .unwrap();

        assert_eq!(targets, vec!["fs", "./types"]);
    }

    #[test]
    fn test_jsx_in_js_file() {
        let targets = parse("App.js", "import B from './B';\nexport default () => <B />;").unwrap();
        assert_eq!(targets, vec!["./B"]);
    }

    #[test]
    fn test_syntax_error_is_fatal() {
        let err = parse("broken.js", "import { from './a';").unwrap_err();
        match err {
            UnimportedError::Parse { path, .. } => assert!(path.ends_with("broken.js")),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_flow_pragma_enables_annotations() {
        let source = "// @flow\nimport type { T } from './t';\nfunction f(x: number): string { return ''; }\n";
        let targets = parse("typed.js", source).unwrap();
        assert_eq!(targets, vec!["./t"]);
    }

    #[test]
    fn test_flow_only_syntax_parses() {
        let source = r#"// @flow
import typeof Theme from './theme';
import { typeof Size, type Props } from './types';
import Button from './Button';
type Exact = {| a: number, b: ?string |};
type Empty = {||};
export opaque type Id: string = string;
declare export function f(x: number): void;
const b = require('./b');
"#;

        let targets = parse("flow.js", source).unwrap();
        assert_eq!(targets, vec!["./theme", "./types", "./Button", "./b"]);
    }

    #[test]
    fn test_unparseable_flow_falls_back_to_scan() {
        let source = "// @flow\nimport a from './a';\nconst v = ((a: any): string);\nconst b = require('./b');\n";
        let targets = parse("cast.js", source).unwrap();
        assert_eq!(targets, vec!["./a", "./b"]);
    }

    #[test]
    fn test_syntax_error_without_flow_stays_fatal() {
        let err = parse("plain.js", "import a from './a';\ntype O = {| a: number |};\n").unwrap_err();
        assert!(matches!(err, UnimportedError::Parse { .. }));
    }

    #[test]
    fn test_flow_setting_applies_without_pragma() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("typed.js");
        fs::write(&file_path, "import a from './a';\nconst n: number = 1;\n").unwrap();

        assert!(ScriptParser::new(false).parse_file(&file_path).is_err());
        assert_eq!(ScriptParser::new(true).parse_file(&file_path).unwrap(), vec!["./a"]);
    }

    #[test]
    fn test_has_flow_pragma() {
        assert!(has_flow_pragma("/**\n * @flow\n */\nimport a from 'a';"));
        assert!(has_flow_pragma("// @flow strict\n'use strict';"));
        assert!(!has_flow_pragma("import a from 'a'; // @flow"));
        assert!(!has_flow_pragma("/* plain */ const a = 1;"));
    }
}

//! Single-file component (`.vue`) parsing
//!
//! A component is split into its top-level `<template>`, `<script>` and
//! `<style>` blocks. Script blocks go through the script parser; style
//! blocks are compiled and any failure is logged and dropped.

use crate::error::{read_file, Result, UnimportedError};
use crate::models::import::ParsedFile;
use crate::parsers::ast_parser::ScriptParser;
use crate::parsers::style_compiler::{StyleCompiler, StyleLang};
use oxc_span::SourceType;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

fn block_regex(tag: &str) -> Regex {
    Regex::new(&format!(r"(?s)<{tag}(\s[^>]*)?>(.*?)</{tag}\s*>")).expect("hardcoded pattern is valid")
}

fn script_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| block_regex("script"))
}

fn style_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| block_regex("style"))
}

fn lang_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"\blang\s*=\s*["']([^"']*)["']"#).expect("hardcoded pattern is valid"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Script,
    Style,
}

/// One top-level block of a component file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfcBlock {
    pub kind: BlockKind,
    pub lang: Option<String>,
    pub content: String,
}

/// Split component source into script and style blocks, in document order
///
/// The template is cut out first (from its first opening tag to its last
/// closing tag) so nested `<template>` elements cannot confuse the scan.
pub fn split_blocks(source: &str) -> Vec<SfcBlock> {
    let stripped = strip_template(source);
    let mut blocks: Vec<(usize, SfcBlock)> = Vec::new();

    for (kind, regex) in [(BlockKind::Script, script_regex()), (BlockKind::Style, style_regex())] {
        for caps in regex.captures_iter(&stripped) {
            let start = caps.get(0).map(|m| m.start()).unwrap_or_default();
            let lang = caps
                .get(1)
                .and_then(|attrs| lang_regex().captures(attrs.as_str()))
                .and_then(|lang| lang.get(1))
                .map(|m| m.as_str().to_string());
            let content = caps.get(2).map(|m| m.as_str().to_string()).unwrap_or_default();

            blocks.push((start, SfcBlock { kind, lang, content }));
        }
    }

    blocks.sort_by_key(|(start, _)| *start);
    blocks.into_iter().map(|(_, block)| block).collect()
}

fn strip_template(source: &str) -> String {
    let open = source.find("<template");
    let close = source.rfind("</template>");

    match (open, close) {
        (Some(open), Some(close)) if close > open => {
            let mut stripped = String::with_capacity(source.len());
            stripped.push_str(&source[..open]);
            stripped.push_str(&source[close + "</template>".len()..]);
            stripped
        }
        _ => source.to_string(),
    }
}

/// Grammar for a `<script lang="...">` block
fn script_source_type(path: &Path, lang: Option<&str>) -> Result<SourceType> {
    match lang.unwrap_or("js") {
        "js" | "" => Ok(SourceType::mjs()),
        "jsx" => Ok(SourceType::jsx()),
        "ts" => Ok(SourceType::ts()),
        "tsx" => Ok(SourceType::tsx()),
        _ => Err(UnimportedError::UnsupportedFileKind {
            path: path.to_path_buf(),
        }),
    }
}

/// Parser for `.vue` component files
pub struct ComponentParser<'p> {
    scripts: &'p ScriptParser,
    styles: &'p StyleCompiler,
}

impl<'p> ComponentParser<'p> {
    pub fn new(scripts: &'p ScriptParser, styles: &'p StyleCompiler) -> Self {
        Self { scripts, styles }
    }

    pub fn parse_file(&self, path: &Path) -> Result<ParsedFile> {
        let source = read_file(path)?;
        self.parse_source(path, &source)
    }

    pub fn parse_source(&self, path: &Path, source: &str) -> Result<ParsedFile> {
        let component_dir = path.parent().unwrap_or(path);
        let mut parsed = ParsedFile::default();

        for block in split_blocks(source) {
            match block.kind {
                BlockKind::Script => {
                    let source_type = script_source_type(path, block.lang.as_deref())?;
                    let targets = self.scripts.parse_source(path, &block.content, source_type)?;
                    parsed.imports.extend(targets);
                }
                BlockKind::Style => {
                    let lang = StyleLang::from_attr(block.lang.as_deref());
                    match self.styles.compile(&block.content, &lang, component_dir) {
                        Ok(css) => parsed.styles.push(css),
                        Err(err) => {
                            tracing::debug!("{}: style block skipped: {}", path.display(), err);
                            parsed.styles.push(String::new());
                        }
                    }
                }
            }
        }

        Ok(parsed)
    }
}

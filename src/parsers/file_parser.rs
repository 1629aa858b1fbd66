//! Parser selection by file kind

use crate::error::Result;
use crate::models::import::{FileKind, ParsedFile};
use crate::parsers::ast_parser::ScriptParser;
use crate::parsers::sfc_parser::ComponentParser;
use crate::parsers::style_compiler::StyleCompiler;
use std::path::Path;

/// Owns one parser per file kind and dispatches on the closed `FileKind` set
pub struct FileParser {
    scripts: ScriptParser,
    styles: StyleCompiler,
}

impl FileParser {
    pub fn new(project_root: &Path, flow: bool) -> Self {
        Self {
            scripts: ScriptParser::new(flow),
            styles: StyleCompiler::new(project_root),
        }
    }

    pub fn parse(&self, path: &Path, kind: FileKind) -> Result<ParsedFile> {
        match kind {
            FileKind::Script => Ok(ParsedFile {
                imports: self.scripts.parse_file(path)?,
                styles: Vec::new(),
            }),
            FileKind::Component => ComponentParser::new(&self.scripts, &self.styles).parse_file(path),
        }
    }
}

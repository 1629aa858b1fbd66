//! Parsing functionality for project files
//!
//! Manifest and tsconfig readers, plus the script and component parsers
//! that extract import targets from source files.

pub mod ast_parser;
pub mod file_parser;
pub mod flow_syntax;
pub mod import_collector;
pub mod package_json;
pub mod sfc_parser;
pub mod style_compiler;
pub mod tsconfig;

pub use ast_parser::ScriptParser;
pub use file_parser::FileParser;
pub use import_collector::ImportCollector;
pub use package_json::PackageJsonParser;
pub use sfc_parser::ComponentParser;
pub use style_compiler::{StyleCompiler, StyleLang};
pub use tsconfig::TsConfigParser;

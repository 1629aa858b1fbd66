//! Compilation of component `<style>` blocks
//!
//! Output is only used to prove the block is well-formed enough not to
//! break the walk; nothing downstream reads it beyond logging.

use crate::error::{Result, UnimportedError};
use lightningcss::stylesheet::{ParserOptions, PrinterOptions, StyleSheet};
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn style_import_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"@(import|use|forward)\s+(['"])([^'"]+)['"]"#).expect("hardcoded pattern is valid"))
}

/// Language declared by a style block's `lang` attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleLang {
    Css,
    Scss,
    Sass,
    Other(String),
}

impl StyleLang {
    pub fn from_attr(lang: Option<&str>) -> Self {
        match lang.map(str::to_ascii_lowercase).as_deref() {
            None | Some("css") | Some("") => StyleLang::Css,
            Some("scss") => StyleLang::Scss,
            Some("sass") => StyleLang::Sass,
            Some(other) => StyleLang::Other(other.to_string()),
        }
    }

    fn name(&self) -> &str {
        match self {
            StyleLang::Css => "css",
            StyleLang::Scss => "scss",
            StyleLang::Sass => "sass",
            StyleLang::Other(name) => name,
        }
    }
}

/// Compiles style blocks with per-language strategies
pub struct StyleCompiler {
    source_root: PathBuf,
}

impl StyleCompiler {
    /// `project_root/src` is where `@/` style imports point
    pub fn new(project_root: &Path) -> Self {
        Self {
            source_root: project_root.join("src"),
        }
    }

    /// Compile one block; `component_dir` anchors relative imports
    pub fn compile(&self, source: &str, lang: &StyleLang, component_dir: &Path) -> Result<String> {
        let source = self.rewrite_imports(source, component_dir);

        match lang {
            StyleLang::Css => {
                let stylesheet = StyleSheet::parse(&source, ParserOptions::default()).map_err(|e| {
                    UnimportedError::StyleCompile {
                        lang: lang.name().to_string(),
                        message: e.to_string(),
                    }
                })?;
                let printed = stylesheet
                    .to_css(PrinterOptions::default())
                    .map_err(|e| UnimportedError::StyleCompile {
                        lang: lang.name().to_string(),
                        message: e.to_string(),
                    })?;
                Ok(printed.code)
            }
            StyleLang::Scss | StyleLang::Sass => {
                let syntax = if *lang == StyleLang::Sass {
                    grass::InputSyntax::Sass
                } else {
                    grass::InputSyntax::Scss
                };
                let options = grass::Options::default()
                    .load_path(component_dir)
                    .load_path(&self.source_root)
                    .input_syntax(syntax);

                grass::from_string(source, &options).map_err(|e| UnimportedError::StyleCompile {
                    lang: lang.name().to_string(),
                    message: e.to_string(),
                })
            }
            StyleLang::Other(_) => Err(UnimportedError::StyleCompile {
                lang: lang.name().to_string(),
                message: "no compiler for this language".to_string(),
            }),
        }
    }

    /// Point `@/` and `~@/` imports at the source root and relative ones at the component
    pub fn rewrite_imports(&self, source: &str, component_dir: &Path) -> String {
        style_import_regex()
            .replace_all(source, |caps: &Captures| {
                let target = &caps[3];
                let rewritten = if let Some(rest) = target.strip_prefix("~@/").or_else(|| target.strip_prefix("@/")) {
                    Some(self.source_root.join(rest))
                } else if target.starts_with("./") || target.starts_with("../") {
                    Some(component_dir.join(target))
                } else {
                    None
                };

                match rewritten {
                    Some(path) => format!("@{} {}{}{}", &caps[1], &caps[2], path.to_string_lossy(), &caps[2]),
                    None => caps[0].to_string(),
                }
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_lang_from_attr() {
        assert_eq!(StyleLang::from_attr(None), StyleLang::Css);
        assert_eq!(StyleLang::from_attr(Some("SCSS")), StyleLang::Scss);
        assert_eq!(StyleLang::from_attr(Some("sass")), StyleLang::Sass);
        assert_eq!(StyleLang::from_attr(Some("less")), StyleLang::Other("less".to_string()));
    }

    #[test]
    fn test_compile_css() {
        let compiler = StyleCompiler::new(Path::new("/project"));
        let css = compiler
            .compile(".a { color: red; }", &StyleLang::Css, Path::new("/project/src"))
            .unwrap();
        assert!(css.contains(".a"));
    }

    #[test]
    fn test_compile_scss_with_alias_import() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("src/styles")).unwrap();
        fs::write(dir.path().join("src/styles/_vars.scss"), "$primary: #ff0000;").unwrap();

        let compiler = StyleCompiler::new(dir.path());
        let css = compiler
            .compile(
                "@import '@/styles/vars';\n.a { .b { color: $primary; } }",
                &StyleLang::Scss,
                &dir.path().join("src/components"),
            )
            .unwrap();

        assert!(css.contains(".a .b"));
        assert!(css.contains("#ff0000") || css.contains("red"));
    }

    #[test]
    fn test_unknown_language_is_a_recoverable_error() {
        let compiler = StyleCompiler::new(Path::new("/project"));
        let err = compiler
            .compile("@a: 1;", &StyleLang::Other("less".to_string()), Path::new("/project"))
            .unwrap_err();
        assert!(!err.is_critical());
    }

    #[test]
    fn test_rewrite_imports() {
        let compiler = StyleCompiler::new(Path::new("/project"));
        let rewritten = compiler.rewrite_imports(
            "@import '~@/a.scss';\n@use \"./b\";\n@import 'vendor/c';",
            Path::new("/project/src/components"),
        );

        assert!(rewritten.contains("@import '/project/src/a.scss'"));
        assert!(rewritten.contains("@use \"/project/src/components/./b\""));
        assert!(rewritten.contains("@import 'vendor/c'"));
    }
}

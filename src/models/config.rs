//! Configuration-related data structures

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Extensions that carry parseable import statements
pub const DEFAULT_CODE_EXTENSIONS: &[&str] = &[".js", ".jsx", ".ts", ".tsx", ".vue"];

/// Asset extensions that are tracked but never parsed
pub const DEFAULT_STATIC_EXTENSIONS: &[&str] = &[".png", ".jpg", ".jpeg", ".svg", ".gif", ".tif", ".bmp"];

pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "**/node_modules/**",
    "**/*.stories.{js,jsx,ts,tsx}",
    "**/*.tests.{js,jsx,ts,tsx}",
    "**/*.test.{js,jsx,ts,tsx}",
    "**/*.spec.{js,jsx,ts,tsx}",
    "**/tests/**",
    "**/__tests__/**",
    "**/*.d.ts",
];

/// Main configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Project root (the directory holding package.json)
    pub project_root: PathBuf,

    /// Explicit entry files; empty means the default candidates
    pub entry: Vec<String>,

    /// Every extension the scan cares about (code and static)
    pub extensions: Vec<String>,

    /// Subset of `extensions` that is parsed for imports
    pub code_extensions: Vec<String>,

    /// Glob patterns removed from the file listing
    pub ignore_patterns: Vec<String>,

    pub ignore_unresolved: Vec<String>,
    pub ignore_unimported: Vec<String>,
    pub ignore_unused: Vec<String>,

    /// Directory names searched for bare module specifiers
    pub module_directory: Vec<String>,

    /// Parse every file with the type-annotation-aware grammar
    pub flow: bool,

    /// Parse batches of files on the rayon pool
    pub parallel: bool,

    /// Output format (text, json, csv)
    pub output_format: OutputFormat,

    /// Output file path (if not specified, output to stdout)
    pub output_file: Option<PathBuf>,

    /// Exit non-zero when the report is not clean
    pub fail_on_findings: bool,

    pub quiet: bool,
    pub verbose: bool,
    pub use_colors: bool,
    pub show_progress: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let code_extensions: Vec<String> = DEFAULT_CODE_EXTENSIONS.iter().map(|s| s.to_string()).collect();
        let extensions = code_extensions
            .iter()
            .cloned()
            .chain(DEFAULT_STATIC_EXTENSIONS.iter().map(|s| s.to_string()))
            .collect();

        Self {
            project_root: PathBuf::from("."),
            entry: Vec::new(),
            extensions,
            code_extensions,
            ignore_patterns: DEFAULT_IGNORE_PATTERNS.iter().map(|s| s.to_string()).collect(),
            ignore_unresolved: Vec::new(),
            ignore_unimported: Vec::new(),
            ignore_unused: Vec::new(),
            module_directory: vec!["node_modules".to_string()],
            flow: false,
            parallel: true,
            output_format: OutputFormat::Text,
            output_file: None,
            fail_on_findings: false,
            quiet: false,
            verbose: false,
            use_colors: true,
            show_progress: true,
        }
    }
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

/// Partial settings for configuration merging
///
/// Keys are camelCase so `.unimportedrc.json` files read naturally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PartialSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_extensions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_patterns: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_unresolved: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_unimported: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_unused: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module_directory: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flow: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_file: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fail_on_findings: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiet: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_colors: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_progress: Option<bool>,
}

impl PartialSettings {
    /// Merge another PartialSettings into this one
    /// Fields from `other` take precedence over existing fields
    pub fn merge_from(&mut self, other: PartialSettings) {
        macro_rules! take {
            ($($field:ident),* $(,)?) => {
                $(
                    if other.$field.is_some() {
                        self.$field = other.$field;
                    }
                )*
            };
        }

        take!(
            project_root,
            entry,
            extensions,
            code_extensions,
            ignore_patterns,
            ignore_unresolved,
            ignore_unimported,
            ignore_unused,
            module_directory,
            flow,
            parallel,
            output_format,
            output_file,
            fail_on_findings,
            quiet,
            verbose,
            use_colors,
            show_progress,
        );
    }

    /// Convert partial settings to full settings
    /// Uses defaults for any fields that are None
    pub fn to_settings(&self) -> Settings {
        let mut settings = Settings::default();

        if let Some(project_root) = &self.project_root {
            settings.project_root = project_root.clone();
        }
        if let Some(entry) = &self.entry {
            settings.entry = entry.clone();
        }
        if let Some(extensions) = &self.extensions {
            settings.extensions = extensions.clone();
        }
        match &self.code_extensions {
            Some(code_extensions) => settings.code_extensions = code_extensions.clone(),
            // Narrowed scan: only parse what is still scanned
            None => settings.code_extensions.retain(|ext| settings.extensions.contains(ext)),
        }
        if let Some(ignore_patterns) = &self.ignore_patterns {
            settings.ignore_patterns = ignore_patterns.clone();
        }
        if let Some(ignore) = &self.ignore_unresolved {
            settings.ignore_unresolved = ignore.clone();
        }
        if let Some(ignore) = &self.ignore_unimported {
            settings.ignore_unimported = ignore.clone();
        }
        if let Some(ignore) = &self.ignore_unused {
            settings.ignore_unused = ignore.clone();
        }
        if let Some(module_directory) = &self.module_directory {
            settings.module_directory = module_directory.clone();
        }
        if let Some(flow) = self.flow {
            settings.flow = flow;
        }
        if let Some(parallel) = self.parallel {
            settings.parallel = parallel;
        }
        if let Some(output_format) = self.output_format {
            settings.output_format = output_format;
        }
        if let Some(output_file) = &self.output_file {
            settings.output_file = Some(output_file.clone());
        }
        if let Some(fail_on_findings) = self.fail_on_findings {
            settings.fail_on_findings = fail_on_findings;
        }
        if let Some(quiet) = self.quiet {
            settings.quiet = quiet;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(use_colors) = self.use_colors {
            settings.use_colors = use_colors;
        }
        if let Some(show_progress) = self.show_progress {
            settings.show_progress = show_progress;
        }

        settings
    }
}

//! Command-line argument parsing

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// unimported - find unused source files, unresolved imports and unused dependencies
#[derive(Parser, Debug, Default)]
#[command(name = "unimported")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Scan your project for dead files, broken imports and unused dependencies")]
#[command(long_about = "unimported follows the import graph of a JavaScript/TypeScript project from its entry \
files and reports source files that are never imported, imports that cannot be resolved, and dependencies \
declared in package.json that no reachable file uses.")]
#[command(after_help = "EXAMPLES:

    # Scan the current project
    unimported

    # Scan another project
    unimported --path ../my-app

    # Write .unimportedrc.json with the default ignore patterns
    unimported --init

    # The code base uses flow annotations without @flow pragmas
    unimported --flow

    # Start from explicit entry files
    unimported --entry src/app.ts --entry src/worker.ts

    # Machine-readable report for CI, failing when anything is found
    unimported --output json --output-file report.json --fail-on-findings
")]
pub struct Args {
    /// Project root (the directory holding package.json)
    #[arg(short, long, value_name = "PATH", help = "Project root to scan (defaults to the current directory)")]
    pub path: Option<PathBuf>,

    /// Configuration file path
    #[arg(short, long, value_name = "FILE", help = "Configuration file (.json or .toml); defaults to .unimportedrc.json in the project root")]
    pub config: Option<PathBuf>,

    /// Dump default settings to .unimportedrc.json
    #[arg(short, long, help = "Write .unimportedrc.json with the current settings and default ignore patterns, then exit")]
    pub init: bool,

    /// Code is annotated with flow types
    #[arg(short, long, help = "Parse every file with the type-annotation-aware grammar (for flow code without @flow pragmas)")]
    pub flow: bool,

    /// Entry files
    #[arg(short, long, value_name = "FILE", help = "Entry file to start from (can be specified multiple times)")]
    pub entry: Vec<String>,

    /// Output format (text, json, csv)
    #[arg(short, long, value_enum, help = "Report format: 'text' for humans, 'json' or 'csv' for tooling")]
    pub output: Option<OutputFormat>,

    /// Output file path (stdout if not specified)
    #[arg(long, value_name = "FILE", help = "File to write the report to (uses stdout if not specified)")]
    pub output_file: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, help = "Only print the report and errors")]
    pub quiet: bool,

    /// Show debug information
    #[arg(short, long, help = "Log every resolved import and the effective settings")]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, help = "Disable colored output (useful when piping the report)")]
    pub no_colors: bool,

    /// Disable the progress spinner
    #[arg(long, help = "Disable the progress spinner (useful for CI environments)")]
    pub no_progress: bool,

    /// Disable parallel parsing
    #[arg(long, help = "Parse files one at a time instead of on the thread pool")]
    pub no_parallel: bool,

    /// Exit with code 1 when the report is not clean
    #[arg(long, help = "Exit with code 1 when unresolved imports, unimported files or unused dependencies are found")]
    pub fail_on_findings: bool,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// CSV output for spreadsheet analysis
    Csv,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }
}

//! Output formatting and writing functionality

mod formatters;
mod progress;
mod writers;

pub use self::formatters::{format_results_csv, format_results_json, format_results_text, CATEGORIES};
pub use self::progress::{create_progress_callback, ProgressReporter};
pub use self::writers::{create_writer, FileWriter, OutputWriter, StdoutWriter};

use crate::core::analyzer::Analysis;
use crate::error::Result;
use crate::models::config::OutputFormat;

/// Trait for different output formatters
pub trait Formatter {
    /// Format a finished scan into a string
    fn format(&self, analysis: &Analysis) -> Result<String>;
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    pub use_colors: bool,
    pub verbose: bool,
}

impl TextFormatter {
    pub fn new(use_colors: bool, verbose: bool) -> Self {
        Self { use_colors, verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, analysis: &Analysis) -> Result<String> {
        Ok(formatters::format_results_text(analysis, self.use_colors, self.verbose))
    }
}

/// JSON formatter for machine-readable output
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, analysis: &Analysis) -> Result<String> {
        let mut json = formatters::format_results_json(&analysis.result)?;
        json.push('\n');
        Ok(json)
    }
}

/// CSV formatter, one `category,value` row per finding
pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, analysis: &Analysis) -> Result<String> {
        formatters::format_results_csv(&analysis.result)
    }
}

/// Create a formatter based on the output format
pub fn create_formatter(format: OutputFormat, use_colors: bool, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(use_colors, verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

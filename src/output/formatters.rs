//! Output formatting functionality
//!
//! This module renders a finished scan in each supported format.

use crate::core::analyzer::Analysis;
use crate::error::{Result, ResultExt, UnimportedError};
use crate::models::analysis::ProcessedResult;
use ansi_term::Colour::{Cyan, Green, Red, Yellow};
use ansi_term::Style;
use path_slash::PathExt;

/// Report categories, in display order
pub const CATEGORIES: &[&str] = &["unresolved", "unimported", "unused"];

fn paint(use_colors: bool, style: Style, text: &str) -> String {
    if use_colors {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Values of one category
pub fn category_values<'r>(result: &'r ProcessedResult, category: &str) -> &'r [String] {
    match category {
        "unresolved" => &result.unresolved,
        "unimported" => &result.unimported,
        _ => &result.unused,
    }
}

fn section_title(category: &str, count: usize) -> String {
    match category {
        "unresolved" => format!("{} unresolved imports", count),
        "unimported" => format!("{} unimported files", count),
        _ => format!("{} unused dependencies", count),
    }
}

fn section_colour(category: &str) -> Style {
    match category {
        "unresolved" => Red.bold(),
        "unimported" => Cyan.bold(),
        _ => Yellow.bold(),
    }
}

/// Format a scan as human-readable text
pub fn format_results_text(analysis: &Analysis, use_colors: bool, verbose: bool) -> String {
    let result = &analysis.result;
    let mut output = String::new();

    if result.clean {
        output.push_str(&paint(
            use_colors,
            Green.bold(),
            "✓ There don't seem to be any unimported files.",
        ));
        output.push('\n');
        return output;
    }

    let dimmed = Style::new().dimmed();

    output.push_str(&paint(use_colors, Style::new().bold(), "summary"));
    output.push('\n');
    for entry in &analysis.entries {
        let shown = entry.strip_prefix(&analysis.project_root).unwrap_or(entry);
        output.push_str(&format!("  {:<20} : {}\n", "entry file", shown.to_slash_lossy()));
    }
    output.push('\n');
    output.push_str(&format!("  {:<20} : {}\n", "unresolved imports", result.unresolved.len()));
    output.push_str(&format!("  {:<20} : {}\n", "unused dependencies", result.unused.len()));
    output.push_str(&format!("  {:<20} : {}\n", "unimported files", result.unimported.len()));

    for category in CATEGORIES {
        let values = category_values(result, category);
        if values.is_empty() {
            continue;
        }

        output.push('\n');
        output.push_str(&paint(use_colors, section_colour(category), &section_title(category, values.len())));
        output.push('\n');

        let width = values.len().to_string().len();
        for (index, value) in values.iter().enumerate() {
            let number = format!("{:>width$}", index + 1, width = width);
            output.push_str(&format!("  {} │ {}\n", paint(use_colors, dimmed, &number), value));
        }
    }

    if verbose {
        output.push_str(&format!(
            "\nvisited {} source files and {} static files in {:.2}s\n",
            analysis.traversal.source_files.len(),
            analysis.traversal.static_files.len(),
            analysis.duration.as_secs_f64()
        ));
    }

    output.push_str(&format!(
        "\n{}\n",
        paint(
            use_colors,
            dimmed,
            "Inspect the results and add false positives to .unimportedrc.json"
        )
    ));

    output
}

/// Format a scan as JSON
pub fn format_results_json(result: &ProcessedResult) -> Result<String> {
    serde_json::to_string_pretty(result).map_err(|e| UnimportedError::JsonSerialize { source: e })
}

/// Format a scan as `category,value` CSV rows
pub fn format_results_csv(result: &ProcessedResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(["category", "value"])?;

    for category in CATEGORIES {
        for value in category_values(result, category) {
            writer.write_record([*category, value.as_str()])?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| UnimportedError::io_error(e.into_error()))?;

    String::from_utf8(bytes).with_context(|| "CSV output is not valid UTF-8")
}

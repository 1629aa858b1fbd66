//! Command implementations

use super::Args;
use crate::config::{self, CliArgs};
use crate::core::Analyzer;
use crate::error::{ErrorSeverity, Result, UnimportedError};
use crate::output::{create_formatter, create_progress_callback, create_writer, ProgressReporter};
use std::io::IsTerminal;
use std::sync::Arc;

/// Available commands
#[derive(Debug)]
pub enum Command {
    /// Scan the project and print the report
    Analyze(Args),
    /// Write `.unimportedrc.json` and exit
    Init(Args),
}

impl Command {
    /// Create a command from parsed arguments
    pub fn from_args(args: Args) -> Self {
        if args.init {
            Command::Init(args)
        } else {
            Command::Analyze(args)
        }
    }

    fn args(&self) -> &Args {
        match self {
            Command::Analyze(args) | Command::Init(args) => args,
        }
    }

    /// Execute the command, returning the process exit code on success
    pub fn execute(&self) -> Result<i32> {
        self.validate()?;

        match self {
            Command::Analyze(args) => Self::analyze(args),
            Command::Init(args) => Self::init(args),
        }
    }

    fn analyze(args: &Args) -> Result<i32> {
        let settings = config::load_config(CliArgs::from_args(args))?;
        tracing::debug!("settings: {:#?}", settings);

        let reporter = Arc::new(ProgressReporter::new(
            settings.show_progress && !settings.quiet,
            settings.verbose,
        ));

        let analysis =
            Analyzer::new(settings.clone()).analyze_with_progress(create_progress_callback(reporter.clone()));
        reporter.finish();
        let analysis = analysis?;

        let use_colors = settings.use_colors && settings.output_file.is_none() && std::io::stdout().is_terminal();
        let formatter = create_formatter(settings.output_format, use_colors, settings.verbose);
        let content = formatter.format(&analysis)?;
        create_writer(settings.output_file.as_ref()).write(&content)?;

        if let Some(path) = &settings.output_file {
            if !settings.quiet {
                eprintln!("Report written to {}", path.display());
            }
        }

        if settings.fail_on_findings && !analysis.result.clean {
            return Ok(1);
        }
        Ok(0)
    }

    fn init(args: &Args) -> Result<i32> {
        let cli_args = CliArgs::from_args(args);
        let file_settings = config::load_file_config(&cli_args)?;
        let settings = config::load_config(cli_args)?;

        let path = config::write_init_config(&settings.project_root, &file_settings, &settings.ignore_patterns)?;

        if !settings.quiet {
            println!("Wrote default settings to {}", path.display());
        }
        Ok(0)
    }

    /// Validate the command arguments
    pub fn validate(&self) -> Result<()> {
        let args = self.args();

        if let Some(path) = &args.path {
            if !path.is_dir() {
                return Err(UnimportedError::InvalidPath { path: path.clone() });
            }
        }

        if let Some(config_path) = &args.config {
            if !config_path.is_file() {
                return Err(UnimportedError::ConfigNotFound {
                    path: config_path.clone(),
                });
            }
        }

        Ok(())
    }

    /// Run the command and map errors to exit codes
    pub fn run(&self) -> i32 {
        match self.execute() {
            Ok(code) => code,
            Err(err) => {
                eprintln!("{}: {}", err.severity(), err.user_message());
                if let Some(suggestion) = err.suggestion() {
                    eprintln!("Suggestion: {}", suggestion);
                }

                match err.severity() {
                    ErrorSeverity::Warning => 0,
                    ErrorSeverity::Error => 1,
                    ErrorSeverity::Critical => 2,
                }
            }
        }
    }
}

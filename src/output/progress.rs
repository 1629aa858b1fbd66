//! Progress reporting functionality
//!
//! A single spinner shows the current scan phase; traversal updates append
//! the number of files resolved so far.

use crate::core::traverse::ProgressUpdate;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Progress reporter for a scan
pub struct ProgressReporter {
    quiet: bool,
    verbose: bool,
    multi_progress: Arc<MultiProgress>,
    spinner: Option<ProgressBar>,
    current_phase: Mutex<String>,
}

impl ProgressReporter {
    /// Create a reporter; `enabled = false` keeps it silent
    pub fn new(enabled: bool, verbose: bool) -> Self {
        let quiet = !enabled;
        let multi_progress = Arc::new(MultiProgress::new());

        let mut reporter = Self {
            quiet,
            verbose,
            multi_progress,
            spinner: None,
            current_phase: Mutex::new(String::new()),
        };
        reporter.spinner = reporter.create_spinner("initializing");
        reporter
    }

    /// Enter a new phase
    pub fn start(&self, phase: &str) {
        *self.current_phase.lock() = phase.to_string();

        if let Some(spinner) = &self.spinner {
            spinner.set_message(phase.to_string());
        }

        tracing::debug!("phase: {}", phase);
    }

    /// Update progress within the current phase
    pub fn update(&self, current: usize, total: usize, message: &str) {
        if self.quiet {
            return;
        }

        if let Some(spinner) = &self.spinner {
            let phase = self.current_phase.lock();
            if total > 0 {
                spinner.set_message(format!("{} [{}/{}]", phase, current, total));
            } else {
                spinner.set_message(message.to_string());
            }
        }

        if self.verbose && total > 0 {
            tracing::trace!("[{}/{}] {}", current, total, message);
        }
    }

    /// Route an update: `total == 0` marks a phase change
    pub fn update_from(&self, progress: ProgressUpdate) {
        if progress.total == 0 {
            self.start(&progress.message);
        } else {
            self.update(progress.current, progress.total, &progress.message);
        }
    }

    /// Stop and clear the spinner
    pub fn finish(&self) {
        if let Some(spinner) = &self.spinner {
            spinner.finish_and_clear();
        }
    }

    /// Create a spinner for a specific operation
    pub fn create_spinner(&self, message: &str) -> Option<ProgressBar> {
        if self.quiet {
            return None;
        }

        let spinner = self.multi_progress.add(ProgressBar::new_spinner());
        let style = ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());
        spinner.set_style(style);
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        Some(spinner)
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// The phase most recently entered
    pub fn current_phase(&self) -> String {
        self.current_phase.lock().clone()
    }
}

/// Create a progress callback function that updates a ProgressReporter
pub fn create_progress_callback(reporter: Arc<ProgressReporter>) -> impl Fn(ProgressUpdate) + Send + Sync {
    move |progress: ProgressUpdate| {
        reporter.update_from(progress);
    }
}

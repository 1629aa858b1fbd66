//! Logging setup
//!
//! Diagnostics go to stderr through `tracing`, so the report on stdout stays
//! machine-readable.
//!
//! The level is chosen in this order:
//! 1. `--verbose`: debug for this crate
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. info for this crate

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter for the given verbosity flags
pub fn default_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("unimported=debug")
    } else if quiet {
        EnvFilter::new("unimported=error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("unimported=info"))
    }
}

/// Install the global subscriber; later calls are no-ops
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(default_filter(verbose, quiet), no_color);
}

pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    let _ = tracing_subscriber::registry().with(filter).with(fmt_layer).try_init();
}

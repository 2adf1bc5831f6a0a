//! Logging infrastructure for the Strata CLI.
//!
//! Library crates emit `tracing` events; this module installs the
//! subscriber that prints them to stderr.
//!
//! # Example
//!
//! ```rust,no_run
//! use strata_cli::logger::init_logger;
//! use tracing::{debug, info};
//!
//! init_logger(false, false, false);
//!
//! info!("Starting scan");
//! debug!("Scanning module: {}", "app.models");
//! ```

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const VERBOSE_FILTER: &str = "strata=debug,strata_graph=debug,strata_analysis=debug,strata_cli=debug";
const QUIET_FILTER: &str = "strata=error,strata_graph=error,strata_analysis=error,strata_cli=error";
const DEFAULT_FILTER: &str = "strata=info,strata_graph=info,strata_analysis=info,strata_cli=info";

/// Initialize the tracing subscriber with the specified options.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for strata crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. Default: INFO for strata crates
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new(VERBOSE_FILTER)
    } else if quiet {
        EnvFilter::new(QUIET_FILTER)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
    };

    init_logger_with_filter(filter, no_color);
}

/// Initialize logger with custom environment filter.
///
/// ```rust,no_run
/// use strata_cli::logger::init_logger_with_filter;
/// use tracing_subscriber::EnvFilter;
///
/// let filter = EnvFilter::new("strata_analysis=trace");
/// init_logger_with_filter(filter, false);
/// ```
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

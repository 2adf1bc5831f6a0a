//! Strata CLI - Python module dependency graphs from the command line.
//!
//! This crate provides the `strata` binary on top of `strata-analysis`
//! and `strata-graph`.
//!
//! # Architecture
//!
//! - [`cli`] - Argument definitions (clap derive)
//! - [`commands`] - One module per subcommand
//! - [`config`] - `strata.config.json` / environment / flag merging
//! - [`error`] - Error types with actionable hints
//! - [`logger`] - Structured logging with tracing
//! - [`ui`] - Status messages on stderr
//!
//! Results are printed to stdout; status lines and logs go to stderr so
//! output can be piped.
//!
//! # Example
//!
//! ```rust,no_run
//! use strata_cli::{error::Result, logger};
//!
//! fn main() -> Result<()> {
//!     logger::init_logger(false, false, false);
//!     // CLI command implementations...
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};

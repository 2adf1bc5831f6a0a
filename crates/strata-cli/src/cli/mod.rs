//! Command-line interface definition for Strata.
//!
//! # Command Structure
//!
//! - `strata scan` - Scan a repository and summarize the graph
//! - `strata tree` - Print the package/module tree
//! - `strata level` - Children of one package with aggregated edges
//! - `strata info` - Attributes of a single module
//! - `strata graph` - Filtered node and edge listing, or JSON

mod commands;

use clap::Parser;

pub use commands::{Command, GraphArgs, InfoArgs, LevelArgs, ScanArgs, SourceArgs, TreeArgs};

/// Strata - Python module dependency graphs
#[derive(Parser, Debug)]
#[command(
    name = "strata",
    version,
    about = "Map the internal import structure of a Python repository",
    long_about = "Strata scans a Python source tree, builds the graph of imports between\n\
                  the repository's own modules, and reports it per package level."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress logs and status messages; results and errors still print
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

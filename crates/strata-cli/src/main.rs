//! Strata CLI - Python module dependency graphs.
//!
//! This is the main entry point for the `strata` binary. It handles
//! command-line argument parsing, logging initialization, and command
//! dispatch.

use clap::Parser;
use miette::Result;
use strata_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = cli::Cli::parse();

    // Initialize logging and colors based on global flags
    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);
    ui::set_quiet(args.quiet);

    let result = match args.command {
        cli::Command::Scan(scan_args) => commands::scan_execute(scan_args),
        cli::Command::Tree(tree_args) => commands::tree_execute(tree_args),
        cli::Command::Level(level_args) => commands::level_execute(level_args),
        cli::Command::Info(info_args) => commands::info_execute(info_args),
        cli::Command::Graph(graph_args) => commands::graph_execute(graph_args),
    };

    result.map_err(error::cli_error_to_miette)
}

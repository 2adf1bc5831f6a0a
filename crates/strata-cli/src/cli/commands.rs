use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Available Strata subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan a repository and print graph statistics
    ///
    /// Files that could not be read are listed as warnings; the scan
    /// continues past them.
    Scan(ScanArgs),

    /// Print the module tree
    Tree(TreeArgs),

    /// Show the children of a package and the weighted edges between them
    Level(LevelArgs),

    /// Show the attributes and dependencies of one module
    Info(InfoArgs),

    /// List nodes and edges, optionally filtered
    Graph(GraphArgs),
}

/// Options shared by every subcommand that scans a repository
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Repository root to scan [default: current directory]
    #[arg(value_name = "ROOT")]
    pub root: Option<PathBuf>,

    /// Path to a config file [default: ./strata.config.json if present]
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory name to skip, in addition to the configured ones
    ///
    /// Can be given multiple times.
    #[arg(short = 'x', long = "exclude", value_name = "DIR")]
    pub exclude: Vec<String>,

    /// Also scan dot-prefixed directories
    #[arg(long)]
    pub include_hidden: bool,
}

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Write the full graph as JSON to this file
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,
}

/// Arguments for the tree command
#[derive(Args, Debug)]
pub struct TreeArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the level command
#[derive(Args, Debug)]
pub struct LevelArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Dotted package path; empty for the top level
    #[arg(short, long, default_value = "", value_name = "PACKAGE")]
    pub path: String,
}

/// Arguments for the info command
#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Dotted module name, e.g. `app.models`
    #[arg(value_name = "MODULE")]
    pub module: String,

    #[command(flatten)]
    pub source: SourceArgs,
}

/// Arguments for the graph command
#[derive(Args, Debug)]
pub struct GraphArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Keep modules whose name matches this regex (case-insensitive)
    #[arg(long, value_name = "REGEX")]
    pub pattern: Option<String>,

    /// Drop modules without any edge after filtering
    #[arg(long)]
    pub only_connected: bool,

    /// Restrict to one package and everything below it
    #[arg(long, value_name = "PACKAGE")]
    pub package: Option<String>,

    /// Print the graph as JSON instead of a listing
    #[arg(long)]
    pub json: bool,
}

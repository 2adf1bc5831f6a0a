//! Tree command implementation.

use strata_graph::render_tree;

use crate::cli::TreeArgs;
use crate::commands::utils;
use crate::error::Result;

/// Execute the tree command.
pub fn execute(args: TreeArgs) -> Result<()> {
    let result = utils::run_analysis(&args.source)?;
    print!("{}", render_tree(&result.graph));
    Ok(())
}

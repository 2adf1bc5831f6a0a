//! Info command implementation.

use crate::cli::InfoArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};

/// Execute the info command.
///
/// # Errors
///
/// Returns [`CliError::ModuleNotFound`] if the module is not in the graph.
pub fn execute(args: InfoArgs) -> Result<()> {
    let result = utils::run_analysis(&args.source)?;
    let hierarchy = result.hierarchy();

    let info = hierarchy
        .module_info(&args.module)
        .ok_or_else(|| CliError::ModuleNotFound(args.module.clone()))?;

    println!("{}", info);

    let dependents = result.graph.dependents(&args.module);
    if !dependents.is_empty() {
        println!("Imported by:  {}", dependents.len());
        for name in dependents {
            println!("  - {name}");
        }
    }

    Ok(())
}

//! Level command implementation.
//!
//! Shows what sits directly inside one package and how those children
//! depend on each other.

use crate::cli::LevelArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the level command.
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] if `--path` is not a dotted name.
pub fn execute(args: LevelArgs) -> Result<()> {
    if !args.path.is_empty() && args.path.split('.').any(str::is_empty) {
        return Err(CliError::InvalidArgument(format!(
            "'{}' is not a dotted package path",
            args.path
        )));
    }

    let result = utils::run_analysis(&args.source)?;
    let hierarchy = result.hierarchy();

    let view = hierarchy.level_view(&args.path);
    if view.is_empty() {
        ui::warning(&format!(
            "Nothing found at {}",
            ui::format_level_path(&args.path)
        ));
        let known: Vec<_> = hierarchy
            .level_paths()
            .map(ui::format_level_path)
            .collect();
        ui::info(&format!("Known levels: {}", known.join(", ")));
        return Ok(());
    }

    println!("Level: {}", ui::format_level_path(&args.path));

    println!("\nPackages ({}):", view.packages.len());
    for package in &view.packages {
        println!("  {}/", package);
    }

    println!("\nModules ({}):", view.modules.len());
    for module in &view.modules {
        println!("  {}", module.simple_name());
    }

    // Heaviest edges first, ties by name
    let mut edges: Vec<_> = hierarchy.aggregated_dependencies(&args.path).into_iter().collect();
    edges.sort_by(|(a, wa), (b, wb)| wb.cmp(wa).then_with(|| a.cmp(b)));

    println!("\nDependencies ({}):", edges.len());
    for ((from, to), weight) in &edges {
        println!("  {}", ui::format_edge(from, to, *weight));
    }

    Ok(())
}

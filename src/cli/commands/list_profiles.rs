//! List-profiles command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;

/// Execute the list-profiles command
pub fn execute(ctx: &Context) -> Result<()> {
    let profiles = ctx.store.discover();

    if profiles.is_empty() {
        println!(
            "{}",
            format!(
                "No shell profiles found in {} (looked for {})",
                ctx.home.display(),
                ctx.store.candidates().join(", ")
            )
            .dimmed()
        );
        return Ok(());
    }

    let name_w = profiles
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or(0)
        .max(7);

    println!(
        "{:<name_w$}  {:>4}  {}",
        "PROFILE".bold().cyan(),
        "VARS".bold().cyan(),
        "PATH".bold().cyan(),
        name_w = name_w
    );
    for profile in &profiles {
        println!(
            "{:<name_w$}  {:>4}  {}",
            profile.name.green(),
            profile.variables.len(),
            profile.path.display().to_string().dimmed(),
            name_w = name_w
        );
    }

    Ok(())
}

//! Edit command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::ops;

/// Execute the edit command
pub fn execute(ctx: &Context, profile_name: &str, key: &str, value: &str) -> Result<()> {
    let key = key.trim();
    let profile = ctx.profile(profile_name)?;
    let previous = profile.get(key).map(|v| v.value.clone());

    ops::edit(&ctx.store, &profile, key, value)?;

    let Some(old) = previous else {
        ctx.print_warning(&format!(
            "{} is not set in {}, nothing changed (use 'set' to add it)",
            key, profile.name
        ));
        return Ok(());
    };

    ctx.print_success(&format!(
        "Updated {} in {}: '{}' → '{}'",
        key.cyan(),
        profile.name,
        old.dimmed(),
        value
    ));
    ctx.print_reload_hint(&profile.path);

    Ok(())
}

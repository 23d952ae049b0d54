//! Set command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::ops;

/// Execute the set command
pub fn execute(ctx: &Context, profile_name: &str, key: &str, value: &str) -> Result<()> {
    let key = key.trim();
    let profile = ctx.profile(profile_name)?;
    let previous = profile.get(key).map(|v| v.value.clone());

    ops::add(&ctx.store, &profile, key, value)?;

    match previous {
        Some(old) => ctx.print_success(&format!(
            "Updated {} in {}: '{}' → '{}'",
            key.cyan(),
            profile.name,
            old.dimmed(),
            value
        )),
        None => ctx.print_success(&format!(
            "Added {}={} to {}",
            key.cyan(),
            value,
            profile.name
        )),
    }
    ctx.print_reload_hint(&profile.path);

    Ok(())
}

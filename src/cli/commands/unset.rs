//! Unset command implementation

use anyhow::Result;
use colored::Colorize;

use crate::cli::context::Context;
use crate::ops;

/// Execute the unset command
pub fn execute(ctx: &Context, profile_name: &str, key: &str) -> Result<()> {
    let key = key.trim();
    let profile = ctx.profile(profile_name)?;
    let removed = profile.variables.iter().filter(|v| v.key == key).count();

    ops::delete(&ctx.store, &profile, key)?;

    if removed == 0 {
        ctx.print_warning(&format!("{} is not set in {}", key, profile.name));
        return Ok(());
    }

    ctx.print_success(&format!("Removed {} from {}", key.cyan(), profile.name));
    ctx.print_reload_hint(&profile.path);

    Ok(())
}

//! Import command implementation

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::cli::context::Context;
use crate::ops;
use crate::store::profile_filename;

/// Execute the import command
pub fn execute(ctx: &Context, input: &Path) -> Result<()> {
    let (document, profiles) = ops::import_file(&ctx.store, input)?;

    let filename = profile_filename(&document.profile_name);
    let target = ctx.store.path_for(filename);

    ctx.print_success(&format!(
        "Imported {} variables into {}",
        document.variables.len(),
        target.display().to_string().cyan()
    ));

    if !profiles.iter().any(|p| p.name == filename) {
        ctx.print_warning(&format!(
            "{} is not one of the tracked profiles ({})",
            filename,
            ctx.store.candidates().join(", ")
        ));
    }
    ctx.print_reload_hint(&target);

    Ok(())
}

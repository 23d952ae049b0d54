//! Export command implementation

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::cli::context::Context;
use crate::ops;

/// Execute the export command
pub fn execute(ctx: &Context, profile_name: &str, out: Option<&Path>) -> Result<()> {
    let profile = ctx.profile(profile_name)?;
    let output = out
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(ops::export(&profile).default_filename()));

    let document = ops::export_file(&profile, &output)?;

    ctx.print_success(&format!(
        "Exported {} variables from {} to {}",
        document.variables.len(),
        profile.name,
        output.display().to_string().cyan()
    ));

    Ok(())
}

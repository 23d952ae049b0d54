//! CLI command implementations

pub mod edit;
pub mod export;
pub mod import;
pub mod list_profiles;
pub mod list_vars;
pub mod set;
pub mod unset;

use anyhow::Result;

use crate::cli::args::{Cli, Commands};
use crate::cli::context::Context;

/// Dispatch a parsed command line
pub fn execute(cli: &Cli) -> Result<()> {
    let ctx = Context::from_cli(cli)?;

    match &cli.command {
        Commands::ListProfiles => list_profiles::execute(&ctx),
        Commands::ListVars { profile } => list_vars::execute(&ctx, profile),
        Commands::Set {
            profile,
            key,
            value,
        } => set::execute(&ctx, profile, key, value),
        Commands::Edit {
            profile,
            key,
            value,
        } => edit::execute(&ctx, profile, key, value),
        Commands::Unset { profile, key } => unset::execute(&ctx, profile, key),
        Commands::Export { profile, out } => export::execute(&ctx, profile, out.as_deref()),
        Commands::Import { input } => import::execute(&ctx, input),
    }
}

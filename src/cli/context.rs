//! Command execution context

use anyhow::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::cli::args::Cli;
use crate::model::{Config, Profile};
use crate::store::ProfileStore;
use crate::utils::path::resolve_home;

/// Common context for command execution
pub struct Context {
    pub config: Config,
    pub home: PathBuf,
    pub store: ProfileStore,
}

impl Context {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config = Config::load()?;
        // --home beats the config file, which beats $HOME
        let home = resolve_home(cli.home.as_deref().or(config.home.as_deref()));
        let store = ProfileStore::from_config(&home, &config);

        tracing::debug!(home = %home.display(), config = %Config::config_path().display(), "Context ready");

        Ok(Self {
            config,
            home,
            store,
        })
    }

    /// Find a discovered profile by name
    pub fn profile(&self, name: &str) -> Result<Profile> {
        Ok(self.store.find(name)?)
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print reload hint after modifying a profile
    pub fn print_reload_hint(&self, path: &Path) {
        println!(
            "{} {}",
            "→".cyan(),
            format!("Run 'source {}' to apply changes", path.display()).dimmed()
        );
    }
}

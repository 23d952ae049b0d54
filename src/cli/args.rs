//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "shenv")]
#[command(about = "Manage exported variables in shell profiles (.zshrc, .bash_profile, .bashrc)")]
#[command(version)]
#[command(author)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Home directory containing the profiles (defaults to $HOME)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Show debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List discovered profiles
    #[command(visible_alias = "profiles")]
    ListProfiles,

    /// List the variables exported by a profile
    #[command(visible_alias = "ls")]
    ListVars {
        /// Profile name (.zshrc or zshrc)
        #[arg(short, long)]
        profile: String,
    },

    /// Add a variable, or update it and move it to the end
    Set {
        /// Profile name
        #[arg(short, long)]
        profile: String,
        /// Variable name
        #[arg(short, long)]
        key: String,
        /// Variable value, written as-is
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },

    /// Change the value of an existing variable in place
    Edit {
        /// Profile name
        #[arg(short, long)]
        profile: String,
        /// Variable name
        #[arg(short, long)]
        key: String,
        /// New value, written as-is
        #[arg(long, allow_hyphen_values = true)]
        value: String,
    },

    /// Remove a variable
    #[command(visible_alias = "rm")]
    Unset {
        /// Profile name
        #[arg(short, long)]
        profile: String,
        /// Variable name
        #[arg(short, long)]
        key: String,
    },

    /// Export a profile's variables to a JSON document
    Export {
        /// Profile name
        #[arg(short, long)]
        profile: String,
        /// Output file (defaults to <profile>_env_vars.json)
        #[arg(short, long, value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Replace a profile's variables with those of a JSON document
    Import {
        /// Input document
        #[arg(short, long = "in", value_name = "FILE")]
        input: PathBuf,
    },
}

//! shenv - Shell Profile Environment Manager

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use shenv::cli::{commands, Cli};
use shenv::ShenvError;

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "shenv=debug" } else { "shenv=warn" };
    let env_filter = EnvFilter::try_from_env("SHENV_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match commands::execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "✗".red(), err);
            let code = err
                .downcast_ref::<ShenvError>()
                .map(ShenvError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

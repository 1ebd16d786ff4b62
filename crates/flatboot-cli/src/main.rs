//! flatboot CLI
//!
//! Reads a host configuration file and makes sure the Flatpak remotes and
//! applications it lists are present.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Err(e) = flatboot_core::logging::init(cli.verbose) {
        eprintln!("{}: failed to set up logging: {}", "warning".yellow().bold(), e);
    }
    tracing::debug!("Verbose mode enabled");

    execute_command(cli.command)
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Apply {
            config,
            dry_run,
            flatpak,
        } => commands::run_apply(&config, dry_run, &flatpak),
        Commands::Plan { config } => commands::run_plan(&config),
        Commands::KnownRepos { json } => commands::run_known_repos(json),
    }
}

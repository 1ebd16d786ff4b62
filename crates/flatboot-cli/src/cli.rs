//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Default host configuration file, relative to the working directory.
pub const DEFAULT_CONFIG: &str = "install.conf.yaml";

/// flatboot - Declaratively add Flatpak remotes and install Flatpak apps
#[derive(Parser, Debug)]
#[command(name = "flatboot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Add the configured remotes and install the configured apps
    ///
    /// Examples:
    ///   flatboot apply                          # Use ./install.conf.yaml
    ///   flatboot apply -c ~/dotfiles/setup.json # Use another file
    ///   flatboot apply --dry-run                # Print commands only
    Apply {
        /// Host configuration file (.yaml, .yml, .json or .toml)
        #[arg(short, long, env = "FLATBOOT_CONFIG", default_value = DEFAULT_CONFIG)]
        config: PathBuf,

        /// Print each command instead of running it
        #[arg(long)]
        dry_run: bool,

        /// flatpak executable to run
        #[arg(long, env = "FLATBOOT_FLATPAK", default_value = flatboot_core::FLATPAK_PROGRAM)]
        flatpak: String,
    },

    /// Print the commands `apply` would run, without running them
    Plan {
        /// Host configuration file (.yaml, .yml, .json or .toml)
        #[arg(short, long, env = "FLATBOOT_CONFIG", default_value = DEFAULT_CONFIG)]
        config: PathBuf,
    },

    /// List the repository aliases usable in `repos`
    KnownRepos {
        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

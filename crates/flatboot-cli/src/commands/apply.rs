//! Apply command: add remotes and install apps

use colored::Colorize;
use flatboot_core::{
    CommandExecutor, Dispatcher, DryRunExecutor, Flatpak, HostConfig, SystemExecutor,
};
use std::path::Path;

use crate::error::{CliError, Result};

/// Run the apply command
pub fn run_apply(config_path: &Path, dry_run: bool, flatpak: &str) -> Result<()> {
    let config = HostConfig::load(config_path)?;

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(Flatpak::with_program(flatpak));

    let executor: Box<dyn CommandExecutor> = if dry_run {
        Box::new(DryRunExecutor::new())
    } else {
        Box::new(SystemExecutor::new())
    };

    let report = dispatcher.dispatch(&config, executor.as_ref())?;

    if report.handled == 0 {
        tracing::warn!("No flatpak tasks found in {}", config_path.display());
    }
    if !report.success {
        return Err(CliError::user(
            "Not all flatpak repos and apps were successfully installed",
        ));
    }

    let verb = if dry_run { "Planned" } else { "Applied" };
    eprintln!(
        "{} {} {} flatpak task(s) from {}",
        "OK".green().bold(),
        verb,
        report.handled,
        config_path.display().to_string().cyan()
    );
    Ok(())
}

//! Plan command: print commands without running them

use colored::Colorize;
use flatboot_core::{Dispatcher, HostConfig};
use std::path::Path;

use crate::error::Result;

/// Run the plan command
pub fn run_plan(config_path: &Path) -> Result<()> {
    let config = HostConfig::load(config_path)?;
    let plan = Dispatcher::with_builtins().plan(&config)?;

    if plan.is_empty() {
        eprintln!("{} Nothing to do.", "Plan:".dimmed());
    } else {
        println!("{}", plan.render());
    }

    if !plan.warnings.is_empty() {
        eprintln!(
            "{} {} configuration entr{} ignored",
            "warning:".yellow().bold(),
            plan.warnings.len(),
            if plan.warnings.len() == 1 { "y" } else { "ies" }
        );
    }
    Ok(())
}

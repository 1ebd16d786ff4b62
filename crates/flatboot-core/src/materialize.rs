//! Repository and application materializers
//!
//! Each stage validates its settings, then runs one command per valid entry.
//! Failures are logged and folded into the stage result; the remaining
//! entries are always attempted.

use crate::command::FlatpakCommand;
use crate::defaults::Defaults;
use crate::error::Result;
use crate::executor::CommandExecutor;
use crate::settings::{materialize_apps, materialize_repos};
use serde_json::Value;

/// Runs flatpak commands through an executor.
pub struct Runner<'a> {
    program: &'a str,
    executor: &'a dyn CommandExecutor,
}

impl<'a> Runner<'a> {
    pub fn new(program: &'a str, executor: &'a dyn CommandExecutor) -> Self {
        Self { program, executor }
    }

    fn execute(&self, command: &FlatpakCommand) -> Result<()> {
        self.executor.run(&command.argv(self.program))
    }

    /// Add every valid repository. True iff every attempted add succeeded.
    pub fn add_repos(&self, settings: &[Value]) -> bool {
        let mut success = true;
        for repo in materialize_repos(settings).entries {
            let name = repo.name.clone();
            if let Err(e) = self.execute(&FlatpakCommand::RemoteAdd(repo)) {
                tracing::error!("{} was not added successfully: {}", name, e);
                success = false;
            }
        }
        success
    }

    /// Install every valid application. True iff every attempted install
    /// succeeded.
    pub fn install_apps(&self, settings: &[Value], defaults: &Defaults) -> bool {
        let mut success = true;
        for app in materialize_apps(settings, defaults).entries {
            let name = app.name.clone();
            if let Err(e) = self.execute(&FlatpakCommand::Install(app)) {
                tracing::error!("{} was not installed successfully: {}", name, e);
                success = false;
            }
        }
        success
    }
}

//! Directive handlers

use crate::command::FLATPAK_PROGRAM;
use crate::defaults::{ContextProvider, Defaults};
use crate::document::{Document, Section};
use crate::error::{Error, Result};
use crate::executor::CommandExecutor;
use crate::materialize::Runner;
use crate::plan::{Plan, plan_document};
use serde_json::Value;

/// Directive owned by [`Flatpak`].
pub const FLATPAK_DIRECTIVE: &str = "flatpak";

/// A handler for one directive of the host configuration.
pub trait Plugin {
    /// The directive this plugin owns.
    fn directive(&self) -> &str;

    fn can_handle(&self, directive: &str) -> bool {
        self.directive() == directive
    }

    /// Apply a block. `Ok(false)` means the block was processed but at least
    /// one operation failed.
    fn handle(
        &self,
        directive: &str,
        data: &Value,
        context: &dyn ContextProvider,
        executor: &dyn CommandExecutor,
    ) -> Result<bool>;

    /// Describe what `handle` would do without doing it.
    fn plan(&self, directive: &str, data: &Value, context: &dyn ContextProvider) -> Result<Plan>;
}

/// Adds flatpak remotes and installs flatpak applications.
#[derive(Debug, Clone)]
pub struct Flatpak {
    program: String,
}

impl Flatpak {
    pub fn new() -> Self {
        Self {
            program: FLATPAK_PROGRAM.to_string(),
        }
    }

    /// Use a different flatpak executable.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn ensure_directive(&self, directive: &str) -> Result<()> {
        if !self.can_handle(directive) {
            return Err(Error::UnsupportedDirective {
                plugin: self.directive().to_string(),
                directive: directive.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for Flatpak {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for Flatpak {
    fn directive(&self) -> &str {
        FLATPAK_DIRECTIVE
    }

    fn handle(
        &self,
        directive: &str,
        data: &Value,
        context: &dyn ContextProvider,
        executor: &dyn CommandExecutor,
    ) -> Result<bool> {
        self.ensure_directive(directive)?;

        let defaults = Defaults::resolve(context);
        let runner = Runner::new(&self.program, executor);

        let mut success = true;
        for section in Document::parse(data).sections {
            let stage_ok = match section {
                Section::Repos(settings) => runner.add_repos(settings),
                Section::Apps(settings) => runner.install_apps(settings, &defaults),
            };
            success &= stage_ok;
        }

        if success {
            tracing::info!("All flatpak repos and apps have been installed");
        } else {
            tracing::error!("Not all flatpak repos and apps were successfully installed");
        }
        Ok(success)
    }

    fn plan(&self, directive: &str, data: &Value, context: &dyn ContextProvider) -> Result<Plan> {
        self.ensure_directive(directive)?;
        Ok(plan_document(data, &Defaults::resolve(context)))
    }
}

//! Command execution
//!
//! Commands are handed over as token lists. Any failure, whether the process
//! could not be started or exited non-zero, is an [`Error`] to the caller.

use crate::command::render_argv;
use crate::error::{Error, Result};
use std::process::{Command, Stdio};

/// Runs a command to completion.
pub trait CommandExecutor {
    fn run(&self, argv: &[String]) -> Result<()>;
}

/// Runs commands as child processes with inherited stdio, so flatpak's own
/// progress output reaches the terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for SystemExecutor {
    fn run(&self, argv: &[String]) -> Result<()> {
        let command = render_argv(argv);
        let Some((program, args)) = argv.split_first() else {
            return Err(Error::CommandLaunch {
                command,
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
            });
        };

        tracing::debug!("Running: {}", command);
        let status = Command::new(program)
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|source| Error::CommandLaunch {
                command: command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(Error::CommandFailed {
                command,
                exit_code: status.code(),
            });
        }
        Ok(())
    }
}

/// Prints each command instead of running it. Always succeeds.
#[derive(Debug, Default, Clone, Copy)]
pub struct DryRunExecutor;

impl DryRunExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for DryRunExecutor {
    fn run(&self, argv: &[String]) -> Result<()> {
        println!("{}", render_argv(argv));
        Ok(())
    }
}

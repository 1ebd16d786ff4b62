//! Recording command executor

use flatboot_core::{CommandExecutor, Error, Result, render_argv};
use std::cell::RefCell;

/// Records every command it is asked to run.
///
/// Commands whose tokens contain a registered failure marker exit with
/// status 1; everything else succeeds.
#[derive(Debug, Default)]
pub struct RecordingExecutor {
    calls: RefCell<Vec<Vec<String>>>,
    failures: RefCell<Vec<String>>,
    failing: Vec<String>,
}

impl RecordingExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any command with a token equal to `marker` (a repo or app name).
    pub fn failing_on(mut self, marker: impl Into<String>) -> Self {
        self.failing.push(marker.into());
        self
    }

    /// Every recorded command, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Recorded commands rendered as shell lines.
    pub fn rendered(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|argv| render_argv(argv)).collect()
    }

    /// Rendered commands that were made to fail, in call order.
    pub fn failures(&self) -> Vec<String> {
        self.failures.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }
}

impl CommandExecutor for RecordingExecutor {
    fn run(&self, argv: &[String]) -> Result<()> {
        self.calls.borrow_mut().push(argv.to_vec());
        if argv.iter().any(|token| self.failing.contains(token)) {
            self.failures.borrow_mut().push(render_argv(argv));
            return Err(Error::CommandFailed {
                command: render_argv(argv),
                exit_code: Some(1),
            });
        }
        Ok(())
    }
}

//! Flatpak command lines

use crate::settings::{AppEntry, RepoEntry};
use std::fmt;

/// Default executable name.
pub const FLATPAK_PROGRAM: &str = "flatpak";

/// An idempotent flatpak operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlatpakCommand {
    /// `remote-add --if-not-exists <name> <url>`
    RemoteAdd(RepoEntry),
    /// `install --noninteractive [--reinstall] <repo> <name>`
    Install(AppEntry),
}

impl FlatpakCommand {
    /// Arguments after the program name.
    pub fn args(&self) -> Vec<String> {
        match self {
            Self::RemoteAdd(repo) => vec![
                "remote-add".to_string(),
                "--if-not-exists".to_string(),
                repo.name.clone(),
                repo.url.clone(),
            ],
            Self::Install(app) => {
                let mut args = vec!["install".to_string(), "--noninteractive".to_string()];
                if app.reinstall {
                    args.push("--reinstall".to_string());
                }
                args.push(app.repo.clone());
                args.push(app.name.clone());
                args
            }
        }
    }

    /// Full token list, starting with `program`.
    pub fn argv(&self, program: &str) -> Vec<String> {
        let mut argv = vec![program.to_string()];
        argv.extend(self.args());
        argv
    }

    /// What the command acts on, for log messages.
    pub fn subject(&self) -> &str {
        match self {
            Self::RemoteAdd(repo) => &repo.name,
            Self::Install(app) => &app.name,
        }
    }
}

impl fmt::Display for FlatpakCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_argv(&self.argv(FLATPAK_PROGRAM)))
    }
}

/// Join tokens into a copy-pasteable shell line.
pub fn render_argv(argv: &[String]) -> String {
    argv.iter()
        .map(|token| quote(token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote(token: &str) -> String {
    let plain = !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.,:/+=@%".contains(c));
    if plain {
        token.to_string()
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}

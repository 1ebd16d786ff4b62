//! Planning: the commands a document would run, without running them

use crate::command::FlatpakCommand;
use crate::defaults::Defaults;
use crate::document::{Document, Section};
use crate::settings::{materialize_apps, materialize_repos};
use serde_json::Value;

/// Ordered commands plus every validation warning met along the way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Plan {
    pub commands: Vec<FlatpakCommand>,
    pub warnings: Vec<String>,
}

impl Plan {
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Append another plan, keeping order.
    pub fn extend(&mut self, other: Plan) {
        self.commands.extend(other.commands);
        self.warnings.extend(other.warnings);
    }

    /// One shell line per command.
    pub fn render(&self) -> String {
        self.commands
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Plan a `flatpak` document against resolved defaults.
pub fn plan_document(data: &Value, defaults: &Defaults) -> Plan {
    let document = Document::parse(data);
    let mut plan = Plan {
        commands: Vec::new(),
        warnings: document.warnings,
    };

    for section in document.sections {
        match section {
            Section::Repos(settings) => {
                let repos = materialize_repos(settings);
                plan.commands
                    .extend(repos.entries.into_iter().map(FlatpakCommand::RemoteAdd));
                plan.warnings.extend(repos.warnings);
            }
            Section::Apps(settings) => {
                let apps = materialize_apps(settings, defaults);
                plan.commands
                    .extend(apps.entries.into_iter().map(FlatpakCommand::Install));
                plan.warnings.extend(apps.warnings);
            }
        }
    }

    plan
}

//! Repository and application settings
//!
//! Raw configuration entries are either a bare string or a mapping. Each
//! entry is parsed into a [`RepoSetting`] or [`AppSetting`]; anything that
//! fits neither shape is rejected and never reaches command execution.

use crate::defaults::Defaults;
use crate::known::known_repo_url;
use crate::value::{coerce_bool, coerce_string, describe};
use serde_json::Value;

/// A Flatpak remote ready to be added.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoEntry {
    pub name: String,
    pub url: String,
}

/// A Flatpak application ready to be installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppEntry {
    pub name: String,
    pub repo: String,
    pub reinstall: bool,
}

/// A repository setting that passed shape validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoSetting {
    /// Alias from the known repository table.
    Known { alias: String, url: &'static str },
    /// Explicit `{name, url}` pair.
    Explicit { name: String, url: String },
}

impl RepoSetting {
    /// Parse a raw setting. Returns `None` for unknown aliases and for
    /// mappings without non-empty string `name` and `url` fields.
    pub fn parse(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(alias) => known_repo_url(alias).map(|url| Self::Known {
                alias: alias.clone(),
                url,
            }),
            Value::Object(map) => {
                let name = non_empty_str(map.get("name"))?;
                let url = non_empty_str(map.get("url"))?;
                Some(Self::Explicit {
                    name: name.to_string(),
                    url: url.to_string(),
                })
            }
            _ => None,
        }
    }

    pub fn into_entry(self) -> RepoEntry {
        match self {
            Self::Known { alias, url } => RepoEntry {
                name: alias,
                url: url.to_string(),
            },
            Self::Explicit { name, url } => RepoEntry { name, url },
        }
    }
}

/// An application setting that passed shape validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppSetting {
    /// Bare application id; repo and reinstall come from the defaults.
    Name(String),
    /// Mapping with a `name` and optional overrides.
    Detailed {
        name: String,
        repo: Option<String>,
        reinstall: Option<bool>,
    },
}

impl AppSetting {
    /// Parse a raw setting. Returns `None` for empty names and for anything
    /// that is neither a string nor a mapping with a string `name`.
    pub fn parse(raw: &Value) -> Option<Self> {
        match raw {
            Value::String(name) if !name.is_empty() => Some(Self::Name(name.clone())),
            Value::Object(map) => {
                let name = non_empty_str(map.get("name"))?.to_string();
                let repo = match map.get("repo") {
                    None => None,
                    Some(value) => {
                        let repo = coerce_string(value).filter(|r| !r.is_empty());
                        if repo.is_none() {
                            tracing::warn!(
                                "Invalid repo '{}' for app '{}', using the default repo",
                                describe(value),
                                name
                            );
                        }
                        repo
                    }
                };
                let reinstall = map.get("reinstall").map(coerce_bool);
                Some(Self::Detailed {
                    name,
                    repo,
                    reinstall,
                })
            }
            _ => None,
        }
    }

    /// Fill in anything the setting leaves open from `defaults`.
    pub fn resolve(self, defaults: &Defaults) -> AppEntry {
        match self {
            Self::Name(name) => AppEntry {
                name,
                repo: defaults.repo.clone(),
                reinstall: defaults.reinstall,
            },
            Self::Detailed {
                name,
                repo,
                reinstall,
            } => AppEntry {
                name,
                repo: repo.unwrap_or_else(|| defaults.repo.clone()),
                reinstall: reinstall.unwrap_or(defaults.reinstall),
            },
        }
    }
}

/// Entries that passed validation, plus a warning for each one that did not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Materialized<T> {
    pub entries: Vec<T>,
    pub warnings: Vec<String>,
}

impl<T> Default for Materialized<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            warnings: Vec::new(),
        }
    }
}

/// Validate repository settings in order. Rejected entries are logged.
pub fn materialize_repos(settings: &[Value]) -> Materialized<RepoEntry> {
    let mut out = Materialized::default();
    for raw in settings {
        match RepoSetting::parse(raw) {
            Some(setting) => out.entries.push(setting.into_entry()),
            None => {
                let warning = format!("Unknown repo '{}' is being ignored.", describe(raw));
                tracing::warn!("{}", warning);
                out.warnings.push(warning);
            }
        }
    }
    out
}

/// Validate application settings in order against `defaults`.
pub fn materialize_apps(settings: &[Value], defaults: &Defaults) -> Materialized<AppEntry> {
    let mut out = Materialized::default();
    for raw in settings {
        match AppSetting::parse(raw) {
            Some(setting) => out.entries.push(setting.resolve(defaults)),
            None => {
                let warning = format!("Invalid app '{}' is being ignored.", describe(raw));
                tracing::warn!("{}", warning);
                out.warnings.push(warning);
            }
        }
    }
    out
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

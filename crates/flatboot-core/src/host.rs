//! Host configuration loading
//!
//! A host configuration is an ordered list of task blocks. Each block maps
//! directive names to their data:
//!
//! ```yaml
//! - defaults:
//!     flatpak:
//!       repo: flathub
//! - flatpak:
//!     repos: [flathub]
//!     apps: [org.gimp.GIMP]
//! ```
//!
//! YAML, JSON and TOML are accepted. In TOML the list lives under a
//! top-level `tasks` array; a top-level mapping without `tasks` is read as a
//! single block.

use crate::error::{Error, Result};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Directive that replaces the defaults seen by later blocks.
pub const DEFAULTS_DIRECTIVE: &str = "defaults";

/// Key holding the task list in TOML documents.
pub const TASKS_KEY: &str = "tasks";

/// Supported host configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
    Toml,
}

impl Format {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// One directive occurrence, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Directive {
    pub name: String,
    pub data: Value,
}

/// A parsed host configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostConfig {
    directives: Vec<Directive>,
}

impl HostConfig {
    /// Load from a file, picking the format from its extension.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::ConfigNotFound(path.to_path_buf()));
        }
        let format = Format::from_path(path).ok_or_else(|| Error::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let content = fs::read_to_string(path)?;
        tracing::debug!("Loading host configuration from {}", path.display());
        Self::parse(&content, format)
    }

    pub fn parse(content: &str, format: Format) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let value: Value = match format {
            Format::Yaml => serde_yaml::from_str(content)?,
            Format::Json => serde_json::from_str(content)?,
            Format::Toml => toml::from_str(content)?,
        };
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let blocks = match value {
            Value::Null => Vec::new(),
            Value::Array(blocks) => blocks,
            Value::Object(mut map) => match map.remove(TASKS_KEY) {
                Some(Value::Array(blocks)) => blocks,
                Some(other) => {
                    return Err(Error::InvalidHostConfig {
                        reason: format!("'{}' must be a list, found {}", TASKS_KEY, other),
                    });
                }
                None => vec![Value::Object(map)],
            },
            other => {
                return Err(Error::InvalidHostConfig {
                    reason: format!("expected a list of tasks, found {}", other),
                });
            }
        };

        let mut directives = Vec::new();
        for (index, block) in blocks.into_iter().enumerate() {
            let Value::Object(map) = block else {
                return Err(Error::InvalidHostConfig {
                    reason: format!("task {} is not a mapping of directives", index + 1),
                });
            };
            directives.extend(map.into_iter().map(|(name, data)| Directive { name, data }));
        }

        Ok(Self { directives })
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    pub fn is_empty(&self) -> bool {
        self.directives.is_empty()
    }
}

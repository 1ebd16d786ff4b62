//! Default repository and reinstall flag, resolved from host context

use crate::value::{coerce_bool, coerce_string};
use serde_json::{Map, Value};

/// Namespace of the flatpak defaults inside the host `defaults` mapping.
pub const DEFAULTS_NAMESPACE: &str = "flatpak";

/// Repository used when neither the context nor an entry names one.
pub const DEFAULT_REPO: &str = "flathub";

/// Reinstall flag used when neither the context nor an entry sets one.
pub const DEFAULT_REINSTALL: bool = false;

/// Source of per-plugin defaults, keyed by plugin namespace.
pub trait ContextProvider {
    fn defaults(&self) -> &Map<String, Value>;
}

impl ContextProvider for Map<String, Value> {
    fn defaults(&self) -> &Map<String, Value> {
        self
    }
}

/// Resolved defaults for one invocation. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Defaults {
    pub repo: String,
    pub reinstall: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            repo: DEFAULT_REPO.to_string(),
            reinstall: DEFAULT_REINSTALL,
        }
    }
}

impl Defaults {
    /// Resolve defaults from the `flatpak` namespace of the context.
    ///
    /// Missing namespaces or keys keep the built-in values. Values are
    /// coerced rather than validated, so this never fails.
    pub fn resolve(context: &dyn ContextProvider) -> Self {
        let mut defaults = Self::default();

        let Some(Value::Object(namespace)) = context.defaults().get(DEFAULTS_NAMESPACE) else {
            return defaults;
        };

        if let Some(repo) = namespace.get("repo") {
            match coerce_string(repo) {
                Some(repo) if !repo.is_empty() => defaults.repo = repo,
                _ => tracing::debug!("Ignoring unusable default repo {}", repo),
            }
        }
        if let Some(reinstall) = namespace.get("reinstall") {
            defaults.reinstall = coerce_bool(reinstall);
        }

        tracing::debug!(
            repo = %defaults.repo,
            reinstall = defaults.reinstall,
            "Resolved flatpak defaults"
        );
        defaults
    }
}

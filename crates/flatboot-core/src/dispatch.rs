//! Routes host configuration directives to registered plugins
//!
//! Directive ownership is explicit: a plugin is registered once and the
//! dispatcher hands it every block whose directive it owns. `defaults`
//! blocks are consumed here and replace the defaults seen by later blocks.

use crate::error::Result;
use crate::executor::CommandExecutor;
use crate::host::{DEFAULTS_DIRECTIVE, HostConfig};
use crate::plan::Plan;
use crate::plugin::{Flatpak, Plugin};
use crate::value::describe;
use serde_json::{Map, Value};

/// Outcome of dispatching a host configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchReport {
    /// True iff every handled block succeeded.
    pub success: bool,
    /// Number of blocks handed to a plugin.
    pub handled: usize,
    /// Directives no registered plugin owns, in file order.
    pub skipped: Vec<String>,
}

impl Default for DispatchReport {
    fn default() -> Self {
        Self {
            success: true,
            handled: 0,
            skipped: Vec::new(),
        }
    }
}

pub struct Dispatcher {
    plugins: Vec<Box<dyn Plugin>>,
}

impl Dispatcher {
    /// Create a dispatcher with no plugins.
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
        }
    }

    /// Create a dispatcher with the built-in `flatpak` plugin.
    pub fn with_builtins() -> Self {
        let mut dispatcher = Self::new();
        dispatcher.register(Flatpak::new());
        dispatcher
    }

    /// Register a plugin. A later registration for the same directive
    /// replaces the earlier one.
    pub fn register(&mut self, plugin: impl Plugin + 'static) {
        self.plugins.retain(|p| p.directive() != plugin.directive());
        self.plugins.push(Box::new(plugin));
    }

    pub fn has_directive(&self, directive: &str) -> bool {
        self.plugin_for(directive).is_some()
    }

    /// Registered directive names, sorted.
    pub fn directives(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .plugins
            .iter()
            .map(|p| p.directive().to_string())
            .collect();
        names.sort();
        names
    }

    fn plugin_for(&self, directive: &str) -> Option<&dyn Plugin> {
        self.plugins
            .iter()
            .find(|p| p.can_handle(directive))
            .map(|p| p.as_ref())
    }

    /// Run every block of `config` in order.
    pub fn dispatch(
        &self,
        config: &HostConfig,
        executor: &dyn CommandExecutor,
    ) -> Result<DispatchReport> {
        let mut report = DispatchReport::default();
        let mut context = Map::new();

        for directive in config.directives() {
            if directive.name == DEFAULTS_DIRECTIVE {
                set_defaults(&mut context, &directive.data);
                continue;
            }
            match self.plugin_for(&directive.name) {
                Some(plugin) => {
                    let ok = plugin.handle(&directive.name, &directive.data, &context, executor)?;
                    report.handled += 1;
                    report.success &= ok;
                }
                None => {
                    tracing::warn!("Action '{}' is not handled, skipping", directive.name);
                    report.skipped.push(directive.name.clone());
                }
            }
        }

        Ok(report)
    }

    /// Plan every block of `config` in order. Unowned directives are skipped.
    pub fn plan(&self, config: &HostConfig) -> Result<Plan> {
        let mut plan = Plan::default();
        let mut context = Map::new();

        for directive in config.directives() {
            if directive.name == DEFAULTS_DIRECTIVE {
                set_defaults(&mut context, &directive.data);
                continue;
            }
            match self.plugin_for(&directive.name) {
                Some(plugin) => plan.extend(plugin.plan(&directive.name, &directive.data, &context)?),
                None => tracing::warn!("Action '{}' is not handled, skipping", directive.name),
            }
        }

        Ok(plan)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::with_builtins()
    }
}

fn set_defaults(context: &mut Map<String, Value>, data: &Value) {
    match data {
        Value::Object(map) => *context = map.clone(),
        Value::Null => context.clear(),
        other => tracing::warn!("Invalid defaults '{}' are being ignored.", describe(other)),
    }
}

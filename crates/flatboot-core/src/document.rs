//! The `flatpak` directive's configuration document

use crate::value::describe;
use serde_json::Value;

pub const REPOS_KEY: &str = "repos";
pub const APPS_KEY: &str = "apps";

const NO_SETTINGS: &[Value] = &[];

/// One recognised key of the document, in document order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Section<'a> {
    Repos(&'a [Value]),
    Apps(&'a [Value]),
}

/// A document split into its sections. Keys that are not understood are
/// reported as warnings and dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document<'a> {
    pub sections: Vec<Section<'a>>,
    pub warnings: Vec<String>,
}

impl<'a> Document<'a> {
    pub fn parse(data: &'a Value) -> Self {
        let mut document = Self::default();

        let map = match data {
            Value::Object(map) => map,
            Value::Null => return document,
            other => {
                document.warn(format!(
                    "Invalid flatpak configuration '{}' is being ignored.",
                    describe(other)
                ));
                return document;
            }
        };

        for (key, value) in map {
            let settings = match value {
                Value::Array(items) => items.as_slice(),
                Value::Null => NO_SETTINGS,
                other if key == REPOS_KEY || key == APPS_KEY => {
                    document.warn(format!(
                        "Invalid value '{}' for option '{}': expected a list, ignoring.",
                        describe(other),
                        key
                    ));
                    continue;
                }
                _ => NO_SETTINGS,
            };

            match key.as_str() {
                REPOS_KEY => document.sections.push(Section::Repos(settings)),
                APPS_KEY => document.sections.push(Section::Apps(settings)),
                _ => document.warn(format!("Invalid option: '{}' is being ignored.", key)),
            }
        }

        document
    }

    fn warn(&mut self, warning: String) {
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }
}

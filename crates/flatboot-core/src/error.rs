//! Error types for flatboot-core

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A plugin was handed a block for a directive it does not own.
    #[error("{plugin} cannot handle directive '{directive}'")]
    UnsupportedDirective { plugin: String, directive: String },

    /// The command ran but exited unsuccessfully.
    #[error("Command failed: {command}{}", .exit_code.map(|c| format!(" (exit code {c})")).unwrap_or_default())]
    CommandFailed {
        command: String,
        exit_code: Option<i32>,
    },

    /// The command could not be started at all.
    #[error("Command could not be started: {command}: {source}")]
    CommandLaunch {
        command: String,
        source: std::io::Error,
    },

    #[error("configuration file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("unsupported configuration format for {path} (expected .yaml, .yml, .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("invalid host configuration: {reason}")]
    InvalidHostConfig { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    /// True for failures reported by an executed (or unstartable) command.
    pub fn is_command_failure(&self) -> bool {
        matches!(self, Self::CommandFailed { .. } | Self::CommandLaunch { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_directive_display() {
        let err = Error::UnsupportedDirective {
            plugin: "flatpak".to_string(),
            directive: "link".to_string(),
        };
        assert_eq!(err.to_string(), "flatpak cannot handle directive 'link'");

        let err = Error::UnsupportedDirective {
            plugin: "snap".to_string(),
            directive: "flatpak".to_string(),
        };
        assert_eq!(err.to_string(), "snap cannot handle directive 'flatpak'");
    }

    #[test]
    fn test_command_failed_display_with_exit_code() {
        let err = Error::CommandFailed {
            command: "flatpak install --noninteractive flathub org.gimp.GIMP".to_string(),
            exit_code: Some(1),
        };
        assert!(err.to_string().contains("org.gimp.GIMP"));
        assert!(err.to_string().ends_with("(exit code 1)"));
    }

    #[test]
    fn test_command_failed_display_without_exit_code() {
        let err = Error::CommandFailed {
            command: "flatpak".to_string(),
            exit_code: None,
        };
        assert_eq!(err.to_string(), "Command failed: flatpak");
    }

    #[test]
    fn test_is_command_failure() {
        let launch = Error::CommandLaunch {
            command: "flatpak".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(launch.is_command_failure());
        assert!(
            !Error::ConfigNotFound(PathBuf::from("install.conf.yaml")).is_command_failure()
        );
    }
}

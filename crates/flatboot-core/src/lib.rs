//! Declarative Flatpak bootstrapping.
//!
//! Given a `flatpak` configuration block, this crate makes sure the listed
//! remotes are registered and the listed applications are installed:
//!
//! ```yaml
//! - flatpak:
//!     repos:
//!       - flathub
//!       - name: kde
//!         url: https://distribute.kde.org/kdeapps.flatpakrepo
//!     apps:
//!       - org.gimp.GIMP
//!       - name: org.kde.krita
//!         repo: kde
//!         reinstall: true
//! ```
//!
//! Malformed entries are skipped with a warning. Failed commands are logged
//! and reported through a single pass/fail result; remaining entries are
//! still attempted.

pub mod command;
pub mod defaults;
pub mod dispatch;
pub mod document;
pub mod error;
pub mod executor;
pub mod host;
pub mod known;
pub mod logging;
pub mod materialize;
pub mod plan;
pub mod plugin;
pub mod settings;
pub mod value;

pub use command::{FLATPAK_PROGRAM, FlatpakCommand, render_argv};
pub use defaults::{ContextProvider, DEFAULT_REINSTALL, DEFAULT_REPO, Defaults};
pub use dispatch::{DispatchReport, Dispatcher};
pub use document::{Document, Section};
pub use error::{Error, Result};
pub use executor::{CommandExecutor, DryRunExecutor, SystemExecutor};
pub use host::{Directive, Format, HostConfig};
pub use known::{KNOWN_REPOS, known_repo_aliases, known_repo_url};
pub use materialize::Runner;
pub use plan::{Plan, plan_document};
pub use plugin::{FLATPAK_DIRECTIVE, Flatpak, Plugin};
pub use settings::{AppEntry, AppSetting, Materialized, RepoEntry, RepoSetting};

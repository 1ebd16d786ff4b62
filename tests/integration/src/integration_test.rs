//! End-to-end integration tests
//!
//! These exercise the complete flow: host config loading -> dispatch ->
//! flatpak commands, with a recording executor standing in for flatpak.

use flatboot_core::{Dispatcher, Flatpak, HostConfig};
use flatboot_test_utils::{RecordingExecutor, write_config};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

const DOTFILES_CONFIG: &str = r#"
- defaults:
    link:
      relink: true
    flatpak:
      repo: fedora
      reinstall: true

- link:
    ~/.bashrc: bashrc

- flatpak:
    repos:
      - fedora
      - flathub
      - name: kde
        url: https://distribute.kde.org/kdeapps.flatpakrepo
      - not-a-remote
    apps:
      - org.gnome.Builder
      - name: org.kde.krita
        repo: kde
        reinstall: false
      - repo: flathub
    foo: bar

- shell:
    - echo done
"#;

fn load(temp: &TempDir, name: &str, content: &str) -> HostConfig {
    HostConfig::load(&write_config(temp, name, content)).unwrap()
}

#[test]
fn test_dotfiles_config_runs_expected_commands() {
    let temp = TempDir::new().unwrap();
    let config = load(&temp, "install.conf.yaml", DOTFILES_CONFIG);
    let executor = RecordingExecutor::new();

    let report = Dispatcher::with_builtins()
        .dispatch(&config, &executor)
        .unwrap();

    assert!(report.success);
    assert_eq!(report.handled, 1);
    assert_eq!(report.skipped, vec!["link", "shell"]);
    assert_eq!(
        executor.rendered(),
        vec![
            "flatpak remote-add --if-not-exists fedora oci+https://registry.fedoraproject.org",
            "flatpak remote-add --if-not-exists flathub https://dl.flathub.org/repo/flathub.flatpakrepo",
            "flatpak remote-add --if-not-exists kde https://distribute.kde.org/kdeapps.flatpakrepo",
            "flatpak install --noninteractive --reinstall fedora org.gnome.Builder",
            "flatpak install --noninteractive kde org.kde.krita",
        ]
    );
}

#[test]
fn test_plan_matches_dispatch() {
    let temp = TempDir::new().unwrap();
    let config = load(&temp, "install.conf.yaml", DOTFILES_CONFIG);
    let executor = RecordingExecutor::new();

    let dispatcher = Dispatcher::with_builtins();
    let plan = dispatcher.plan(&config).unwrap();
    dispatcher.dispatch(&config, &executor).unwrap();

    let planned: Vec<String> = plan.commands.iter().map(|c| c.to_string()).collect();
    assert_eq!(planned, executor.rendered());
    assert_eq!(
        plan.warnings,
        vec![
            "Invalid option: 'foo' is being ignored.",
            "Unknown repo 'not-a-remote' is being ignored.",
            r#"Invalid app '{"repo":"flathub"}' is being ignored."#,
        ]
    );
}

#[test]
fn test_partial_failure_attempts_everything() {
    let temp = TempDir::new().unwrap();
    let config = load(&temp, "install.conf.yaml", DOTFILES_CONFIG);
    let executor = RecordingExecutor::new().failing_on("kde");

    let report = Dispatcher::with_builtins()
        .dispatch(&config, &executor)
        .unwrap();

    assert!(!report.success);
    assert_eq!(executor.call_count(), 5);
}

#[test]
fn test_multiple_flatpak_blocks_aggregate() {
    let temp = TempDir::new().unwrap();
    let config = load(
        &temp,
        "install.conf.json",
        r#"[
            {"flatpak": {"apps": ["org.broken.App"]}},
            {"flatpak": {"apps": ["org.gimp.GIMP"]}}
        ]"#,
    );
    let executor = RecordingExecutor::new().failing_on("org.broken.App");

    let report = Dispatcher::with_builtins()
        .dispatch(&config, &executor)
        .unwrap();

    assert!(!report.success);
    assert_eq!(report.handled, 2);
    assert_eq!(executor.call_count(), 2);
}

#[test]
fn test_toml_config_with_custom_program() {
    let temp = TempDir::new().unwrap();
    let config = load(
        &temp,
        "install.conf.toml",
        r#"
[[tasks]]
[tasks.flatpak]
repos = ["elementary"]
apps = [{ name = "io.elementary.calculator", repo = "elementary" }]
"#,
    );
    let executor = RecordingExecutor::new();

    let mut dispatcher = Dispatcher::new();
    dispatcher.register(Flatpak::with_program("/usr/bin/flatpak"));
    let report = dispatcher.dispatch(&config, &executor).unwrap();

    assert!(report.success);
    assert_eq!(
        executor.rendered(),
        vec![
            "/usr/bin/flatpak remote-add --if-not-exists elementary https://flatpak.elementary.io/repo.flatpakrepo",
            "/usr/bin/flatpak install --noninteractive elementary io.elementary.calculator",
        ]
    );
}

#[test]
fn test_empty_config_succeeds_without_commands() {
    let temp = TempDir::new().unwrap();
    let config = load(&temp, "install.conf.yaml", "");
    let executor = RecordingExecutor::new();

    let report = Dispatcher::with_builtins()
        .dispatch(&config, &executor)
        .unwrap();

    assert!(report.success);
    assert_eq!(report.handled, 0);
    assert_eq!(executor.call_count(), 0);
}

//! Materializer and plugin behaviour against a recording executor

use flatboot_core::{Defaults, Error, Flatpak, Plugin, Runner, known_repo_url};
use flatboot_test_utils::{RecordingExecutor, context};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Map, json};

#[rstest]
#[case("flathub")]
#[case("flathub-beta")]
#[case("fedora")]
#[case("gnome-nightly")]
#[case("elementary")]
#[case("rhel")]
fn test_known_alias_adds_canonical_url(#[case] alias: &str) {
    let executor = RecordingExecutor::new();
    let ok = Runner::new("flatpak", &executor).add_repos(&[json!(alias)]);

    assert!(ok);
    assert_eq!(
        executor.calls(),
        vec![vec![
            "flatpak".to_string(),
            "remote-add".to_string(),
            "--if-not-exists".to_string(),
            alias.to_string(),
            known_repo_url(alias).unwrap().to_string(),
        ]]
    );
}

#[test]
fn test_explicit_repo_is_passed_through() {
    let executor = RecordingExecutor::new();
    let ok = Runner::new("flatpak", &executor).add_repos(&[json!({
        "name": "kde",
        "url": "https://distribute.kde.org/kdeapps.flatpakrepo"
    })]);

    assert!(ok);
    assert_eq!(
        executor.rendered(),
        vec!["flatpak remote-add --if-not-exists kde https://distribute.kde.org/kdeapps.flatpakrepo"]
    );
}

#[test]
fn test_invalid_repos_issue_no_command_and_do_not_fail() {
    let executor = RecordingExecutor::new();
    let ok = Runner::new("flatpak", &executor).add_repos(&[
        json!("unknown-remote"),
        json!({"name": "kde"}),
        json!(42),
    ]);

    assert!(ok);
    assert_eq!(executor.call_count(), 0);
}

#[test]
fn test_repo_failure_does_not_short_circuit() {
    let executor = RecordingExecutor::new().failing_on("fedora");
    let ok = Runner::new("flatpak", &executor).add_repos(&[json!("fedora"), json!("flathub")]);

    assert!(!ok);
    assert_eq!(executor.call_count(), 2);
}

#[test]
fn test_app_failure_does_not_short_circuit() {
    let executor = RecordingExecutor::new().failing_on("org.broken.App");
    let ok = Runner::new("flatpak", &executor).install_apps(
        &[json!("org.broken.App"), json!("org.gimp.GIMP")],
        &Defaults::default(),
    );

    assert!(!ok);
    assert_eq!(
        executor.rendered(),
        vec![
            "flatpak install --noninteractive flathub org.broken.App",
            "flatpak install --noninteractive flathub org.gimp.GIMP",
        ]
    );
}

#[test]
fn test_invalid_apps_issue_no_command() {
    let executor = RecordingExecutor::new();
    let ok = Runner::new("flatpak", &executor).install_apps(
        &[json!({"repo": "flathub"}), json!(null), json!("")],
        &Defaults::default(),
    );

    assert!(ok);
    assert_eq!(executor.call_count(), 0);
}

#[test]
fn test_bare_app_uses_context_defaults() {
    let executor = RecordingExecutor::new();
    let ctx = context(json!({"flatpak": {"repo": "fedora", "reinstall": true}}));

    let ok = Flatpak::new()
        .handle("flatpak", &json!({"apps": ["gimp"]}), &ctx, &executor)
        .unwrap();

    assert!(ok);
    assert_eq!(
        executor.rendered(),
        vec!["flatpak install --noninteractive --reinstall fedora gimp"]
    );
}

#[test]
fn test_end_to_end_document() {
    let executor = RecordingExecutor::new();
    let data = json!({
        "repos": ["flathub"],
        "apps": [{"name": "org.gimp.GIMP", "reinstall": true}]
    });

    let ok = Flatpak::new()
        .handle("flatpak", &data, &Map::new(), &executor)
        .unwrap();

    assert!(ok);
    assert_eq!(
        executor.rendered(),
        vec![
            "flatpak remote-add --if-not-exists flathub https://dl.flathub.org/repo/flathub.flatpakrepo",
            "flatpak install --noninteractive --reinstall flathub org.gimp.GIMP",
        ]
    );
}

#[rstest]
#[case("org.gimp.GIMP", false)]
#[case("nothing-matches", true)]
fn test_end_to_end_result_requires_both_commands(#[case] failing: &str, #[case] expected: bool) {
    let executor = RecordingExecutor::new().failing_on(failing);
    let data = json!({
        "repos": ["flathub"],
        "apps": [{"name": "org.gimp.GIMP", "reinstall": true}]
    });

    let ok = Flatpak::new()
        .handle("flatpak", &data, &Map::new(), &executor)
        .unwrap();

    assert_eq!(ok, expected);
    assert_eq!(executor.call_count(), 2);
}

#[test]
fn test_unknown_key_does_not_affect_result() {
    let executor = RecordingExecutor::new();
    let ok = Flatpak::new()
        .handle(
            "flatpak",
            &json!({"foo": ["bar"], "apps": ["org.gimp.GIMP"]}),
            &Map::new(),
            &executor,
        )
        .unwrap();

    assert!(ok);
    assert_eq!(executor.call_count(), 1);
}

const KDE_URL: &str = "https://distribute.kde.org/kdeapps.flatpakrepo";

#[rstest]
#[case::repo_add_fails("kde", vec!["flatpak remote-add --if-not-exists kde https://distribute.kde.org/kdeapps.flatpakrepo"])]
#[case::install_fails("org.gimp.GIMP", vec!["flatpak install --noninteractive flathub org.gimp.GIMP"])]
fn test_one_failed_stage_fails_the_document(#[case] failing: &str, #[case] failed: Vec<&str>) {
    let executor = RecordingExecutor::new().failing_on(failing);
    let data = json!({
        "repos": [{"name": "kde", "url": KDE_URL}],
        "apps": ["org.gimp.GIMP"]
    });

    let ok = Flatpak::new()
        .handle("flatpak", &data, &Map::new(), &executor)
        .unwrap();

    assert!(!ok);
    assert_eq!(executor.call_count(), 2);
    assert_eq!(executor.failures(), failed);
}

#[test]
fn test_failed_repo_stage_still_runs_app_stage() {
    let executor = RecordingExecutor::new().failing_on("kde");
    let ok = Flatpak::new()
        .handle(
            "flatpak",
            &json!({
                "repos": [{"name": "kde", "url": KDE_URL}],
                "apps": ["org.gimp.GIMP"]
            }),
            &Map::new(),
            &executor,
        )
        .unwrap();

    assert!(!ok);
    assert_eq!(
        executor.rendered(),
        vec![
            "flatpak remote-add --if-not-exists kde https://distribute.kde.org/kdeapps.flatpakrepo",
            "flatpak install --noninteractive flathub org.gimp.GIMP",
        ]
    );
    assert_eq!(executor.failures().len(), 1);
    assert!(executor.failures()[0].contains("remote-add"));
}

#[test]
fn test_foreign_directive_runs_nothing() {
    let executor = RecordingExecutor::new();
    let err = Flatpak::new()
        .handle("link", &json!({"apps": ["org.gimp.GIMP"]}), &Map::new(), &executor)
        .unwrap_err();

    assert!(matches!(err, Error::UnsupportedDirective { .. }));
    assert_eq!(executor.call_count(), 0);
}

#[test]
fn test_custom_program_is_first_token() {
    let executor = RecordingExecutor::new();
    Flatpak::with_program("/opt/bin/flatpak")
        .handle("flatpak", &json!({"apps": ["a.b.C"]}), &Map::new(), &executor)
        .unwrap();

    assert_eq!(executor.calls()[0][0], "/opt/bin/flatpak");
}

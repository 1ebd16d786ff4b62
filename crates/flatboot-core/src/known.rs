//! Well-known Flatpak remotes addressable by alias

/// Alias to canonical `.flatpakrepo` (or OCI registry) URL.
pub const KNOWN_REPOS: &[(&str, &str)] = &[
    ("flathub", "https://dl.flathub.org/repo/flathub.flatpakrepo"),
    (
        "flathub-beta",
        "https://flathub.org/beta-repo/flathub-beta.flatpakrepo",
    ),
    ("fedora", "oci+https://registry.fedoraproject.org"),
    (
        "gnome-nightly",
        "https://nightly.gnome.org/gnome-nightly.flatpakrepo",
    ),
    ("elementary", "https://flatpak.elementary.io/repo.flatpakrepo"),
    ("rhel", "https://flatpaks.redhat.io/rhel.flatpakrepo"),
];

/// Look up the canonical URL for a known alias.
pub fn known_repo_url(alias: &str) -> Option<&'static str> {
    KNOWN_REPOS
        .iter()
        .find(|(name, _)| *name == alias)
        .map(|(_, url)| *url)
}

/// Aliases in table order.
pub fn known_repo_aliases() -> impl Iterator<Item = &'static str> {
    KNOWN_REPOS.iter().map(|(name, _)| *name)
}

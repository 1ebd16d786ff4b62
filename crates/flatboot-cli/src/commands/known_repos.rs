//! List the built-in repository aliases

use colored::Colorize;
use flatboot_core::KNOWN_REPOS;
use serde::Serialize;

use crate::error::Result;

#[derive(Debug, Serialize)]
struct KnownRepo {
    alias: &'static str,
    url: &'static str,
}

fn known_repos() -> Vec<KnownRepo> {
    KNOWN_REPOS
        .iter()
        .map(|&(alias, url)| KnownRepo { alias, url })
        .collect()
}

/// Run the known-repos command
pub fn run_known_repos(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&known_repos())?);
        return Ok(());
    }

    println!("{}", "Known Repositories".bold());
    println!();
    for repo in known_repos() {
        println!("  {:<14} {}", repo.alias.green(), repo.url.dimmed());
    }
    Ok(())
}

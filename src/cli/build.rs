use anyhow::Result;
use std::env;
use std::path::Path;
use tracing::info;

use crate::collector;
use crate::config::Config;
use crate::render;
use crate::repo::{self, GitRemote};
use crate::site::{self, Manifest};

/// Environment variable carrying the `owner/name` slug on GitHub Actions.
pub const REPO_ENV_VAR: &str = "GITHUB_REPOSITORY";

pub fn run(
    skills_dir: Option<String>,
    out_dir: Option<String>,
    repo_override: Option<String>,
    config_path: Option<String>,
) -> Result<()> {
    // Load config (explicit path, repo root, or user config dir)
    let mut config = Config::load_with_path(config_path)?;

    // Apply CLI overrides
    if let Some(ref dir) = skills_dir {
        info!("CLI override: skills_dir = {}", dir);
        config.site.skills_dir = dir.clone();
    }
    if let Some(ref dir) = out_dir {
        info!("CLI override: out_dir = {}", dir);
        config.site.out_dir = dir.clone();
    }

    // Repo slug: --repo beats the CI environment, which beats the git
    // remote, which beats the configured fallback.
    let explicit = repo_override.or_else(|| match env::var(REPO_ENV_VAR) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => None,
    });
    let remote = GitRemote::new(Path::new("."));
    let repo = repo::resolve_repo(explicit.as_deref(), &remote, &config.site.fallback_repo);
    info!("Publishing as repo: {}", repo);

    let skills = collector::collect_skills(Path::new(&config.site.skills_dir))?;
    info!(
        "Collected {} skills from {}",
        skills.len(),
        config.site.skills_dir
    );

    let html = render::render_page(&repo, &skills);
    let manifest = Manifest { repo, skills };

    let out = Path::new(&config.site.out_dir);
    site::write_site(out, &html, &manifest)?;
    info!("Site written to {}", out.display());

    Ok(())
}

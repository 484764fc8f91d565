//! Resolution of the `owner/name` repository identifier the site is built
//! for. The identifier feeds every install command and link on the page, so
//! resolution never fails; it degrades to a configured fallback instead.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Where the `origin` remote URL comes from. The production implementation
/// shells out to git; tests substitute fixed or failing sources.
pub trait RemoteUrlSource {
    fn remote_url(&self) -> Result<String>;
}

/// Reads `remote.origin.url` from the repository at `root` via the git CLI.
pub struct GitRemote {
    root: PathBuf,
}

impl GitRemote {
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl RemoteUrlSource for GitRemote {
    fn remote_url(&self) -> Result<String> {
        let output = Command::new("git")
            .args(["config", "--get", "remote.origin.url"])
            .current_dir(&self.root)
            .output()?;

        if !output.status.success() {
            bail!("No origin remote configured");
        }

        Ok(String::from_utf8(output.stdout)?.trim().to_string())
    }
}

/// Resolve the repository identifier.
///
/// A non-empty explicit identifier wins outright. Otherwise the origin
/// remote URL is normalized down to the `owner/name` after its last
/// `github.com/` or `github.com:`; a failing remote lookup, a URL that is
/// not GitHub-shaped, or an empty tail all resolve to `fallback`.
pub fn resolve_repo(
    explicit: Option<&str>,
    remote: &dyn RemoteUrlSource,
    fallback: &str,
) -> String {
    if let Some(repo) = explicit {
        if !repo.is_empty() {
            return repo.to_string();
        }
    }

    let url = match remote.remote_url() {
        Ok(url) => url,
        Err(e) => {
            debug!("Origin remote unavailable ({}), using fallback", e);
            return fallback.to_string();
        }
    };

    let url = url.strip_suffix(".git").unwrap_or(&url);

    let tail = if let Some(pos) = url.rfind("github.com/") {
        &url[pos + "github.com/".len()..]
    } else if let Some(pos) = url.rfind("github.com:") {
        &url[pos + "github.com:".len()..]
    } else {
        debug!("Origin remote '{}' is not a GitHub URL, using fallback", url);
        return fallback.to_string();
    };

    let repo = tail.trim_matches('/');
    if repo.is_empty() {
        return fallback.to_string();
    }
    repo.to_string()
}

//! Writes the generated site into the output directory.

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::collector::SkillRecord;

pub const INDEX_FILE: &str = "index.html";
pub const MANIFEST_FILE: &str = "skills.json";
pub const NOJEKYLL_FILE: &str = ".nojekyll";
pub const LEGACY_STYLESHEET: &str = "styles.css";

/// Machine-readable companion to the HTML page, written as `skills.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub repo: String,
    pub skills: Vec<SkillRecord>,
}

/// Write `index.html`, `skills.json` and `.nojekyll` into `out_dir`,
/// creating it if needed, and drop the stylesheet left behind by earlier
/// site layouts. Existing files are overwritten.
pub fn write_site(out_dir: &Path, html: &str, manifest: &Manifest) -> Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output dir {}", out_dir.display()))?;

    let index_path = out_dir.join(INDEX_FILE);
    fs::write(&index_path, html)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    let manifest_path = out_dir.join(MANIFEST_FILE);
    let manifest_json =
        serde_json::to_string_pretty(manifest).context("Failed to serialize skills manifest")?;
    fs::write(&manifest_path, manifest_json)
        .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    let nojekyll_path = out_dir.join(NOJEKYLL_FILE);
    fs::write(&nojekyll_path, "")
        .with_context(|| format!("Failed to write {}", nojekyll_path.display()))?;

    let legacy_path = out_dir.join(LEGACY_STYLESHEET);
    match fs::remove_file(&legacy_path) {
        Ok(()) => debug!("Removed legacy stylesheet {}", legacy_path.display()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to remove {}", legacy_path.display()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_manifest() -> Manifest {
        Manifest {
            repo: "acme/widgets".to_string(),
            skills: vec![SkillRecord {
                dir: "tool-x".to_string(),
                name: "Tool X".to_string(),
                description: "Does things".to_string(),
            }],
        }
    }

    #[test]
    fn test_writes_all_artifacts() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("docs");

        write_site(&out, "<html></html>", &sample_manifest()).unwrap();

        assert_eq!(fs::read_to_string(out.join(INDEX_FILE)).unwrap(), "<html></html>");
        assert_eq!(fs::read_to_string(out.join(NOJEKYLL_FILE)).unwrap(), "");
        let json = fs::read_to_string(out.join(MANIFEST_FILE)).unwrap();
        assert!(json.contains("\"repo\": \"acme/widgets\""));
        assert!(json.contains("\"dir\": \"tool-x\""));
    }

    #[test]
    fn test_manifest_field_order_and_shape() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("docs");

        write_site(&out, "", &sample_manifest()).unwrap();

        let json = fs::read_to_string(out.join(MANIFEST_FILE)).unwrap();
        let repo_at = json.find("\"repo\"").unwrap();
        let skills_at = json.find("\"skills\"").unwrap();
        assert!(repo_at < skills_at, "repo must come before skills");
        assert!(!json.ends_with('\n'), "pretty JSON has no trailing newline");

        let parsed: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample_manifest());
    }

    #[test]
    fn test_empty_skills_serialize_as_empty_array() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("docs");
        let manifest = Manifest {
            repo: "acme/widgets".to_string(),
            skills: Vec::new(),
        };

        write_site(&out, "", &manifest).unwrap();

        let json = fs::read_to_string(out.join(MANIFEST_FILE)).unwrap();
        assert!(json.contains("\"skills\": []"));
    }

    #[test]
    fn test_removes_legacy_stylesheet() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("docs");
        fs::create_dir_all(&out).unwrap();
        fs::write(out.join(LEGACY_STYLESHEET), "body {}").unwrap();

        write_site(&out, "", &sample_manifest()).unwrap();

        assert!(!out.join(LEGACY_STYLESHEET).exists());
    }

    #[test]
    fn test_missing_legacy_stylesheet_is_fine() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("docs");

        write_site(&out, "", &sample_manifest()).unwrap();

        assert!(out.join(INDEX_FILE).exists());
    }

    #[test]
    fn test_rerun_overwrites_outputs() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("docs");

        write_site(&out, "first", &sample_manifest()).unwrap();
        write_site(&out, "second", &sample_manifest()).unwrap();

        assert_eq!(fs::read_to_string(out.join(INDEX_FILE)).unwrap(), "second");
    }
}

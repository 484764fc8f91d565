use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::frontmatter;

/// File a skill directory must carry to be listed.
pub const SKILL_FILE: &str = "SKILL.md";

/// One entry in the generated directory: the skill's folder name plus the
/// metadata extracted from its SKILL.md front-matter. Serialized as-is into
/// the skills.json manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecord {
    pub dir: String,
    pub name: String,
    pub description: String,
}

/// Scan the skills directory and return one record per skill, ordered by
/// directory name.
///
/// A missing skills directory yields an empty list, and subdirectories
/// without a SKILL.md are skipped; neither is an error. A SKILL.md that
/// exists but cannot be read is.
pub fn collect_skills(skills_dir: &Path) -> Result<Vec<SkillRecord>> {
    let mut skills = Vec::new();

    if !skills_dir.exists() {
        debug!("Skills directory {} not found", skills_dir.display());
        return Ok(skills);
    }

    let mut entries: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(skills_dir)
        .with_context(|| format!("Failed to read skills directory {}", skills_dir.display()))?
    {
        entries.push(entry?.path());
    }
    entries.sort();

    for path in entries {
        if !path.is_dir() {
            continue;
        }
        let skill_md = path.join(SKILL_FILE);
        if !skill_md.exists() {
            debug!("Skipping {}: no {}", path.display(), SKILL_FILE);
            continue;
        }

        let text = fs::read_to_string(&skill_md)
            .with_context(|| format!("Failed to read {}", skill_md.display()))?;
        let fm = frontmatter::parse(&text);

        let dir_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let name = fm.get("name").cloned().unwrap_or_else(|| dir_name.clone());
        let description = fm
            .get("description")
            .map(|d| d.trim().to_string())
            .unwrap_or_default();

        skills.push(SkillRecord {
            dir: dir_name,
            name,
            description,
        });
    }

    Ok(skills)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn add_skill(root: &Path, dir: &str, content: &str) {
        let skill_dir = root.join(dir);
        fs::create_dir_all(&skill_dir).unwrap();
        fs::write(skill_dir.join(SKILL_FILE), content).unwrap();
    }

    #[test]
    fn test_missing_directory_yields_empty_list() {
        let tmp = TempDir::new().unwrap();
        let skills = collect_skills(&tmp.path().join("no-such-dir")).unwrap();
        assert!(skills.is_empty());
    }

    #[test]
    fn test_records_sorted_by_directory_name() {
        let tmp = TempDir::new().unwrap();
        add_skill(tmp.path(), "b-skill", "---\nname: B\n---\n");
        add_skill(tmp.path(), "a-skill", "---\nname: A\n---\n");

        let skills = collect_skills(tmp.path()).unwrap();
        let dirs: Vec<&str> = skills.iter().map(|s| s.dir.as_str()).collect();
        assert_eq!(dirs, vec!["a-skill", "b-skill"]);
    }

    #[test]
    fn test_name_falls_back_to_directory() {
        let tmp = TempDir::new().unwrap();
        add_skill(tmp.path(), "bare", "# Heading only, no front-matter\n");

        let skills = collect_skills(tmp.path()).unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].name, "bare");
        assert_eq!(skills[0].description, "");
    }

    #[test]
    fn test_directory_without_skill_file_skipped() {
        let tmp = TempDir::new().unwrap();
        add_skill(tmp.path(), "real", "---\nname: Real\n---\n");
        fs::create_dir(tmp.path().join("empty-dir")).unwrap();

        let skills = collect_skills(tmp.path()).unwrap();
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].dir, "real");
    }

    #[test]
    fn test_loose_files_in_skills_dir_ignored() {
        let tmp = TempDir::new().unwrap();
        add_skill(tmp.path(), "real", "---\nname: Real\n---\n");
        fs::write(tmp.path().join("README.md"), "not a skill").unwrap();

        let skills = collect_skills(tmp.path()).unwrap();
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn test_description_trimmed() {
        let tmp = TempDir::new().unwrap();
        add_skill(
            tmp.path(),
            "padded",
            "---\ndescription: \"  padded out  \"\n---\n",
        );

        let skills = collect_skills(tmp.path()).unwrap();
        assert_eq!(skills[0].description, "padded out");
    }
}

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Directory scanned for `<skill>/SKILL.md` entries (default: "skills")
    #[serde(default = "default_skills_dir")]
    pub skills_dir: String,

    /// Directory the site is written to (default: "docs")
    #[serde(default = "default_out_dir")]
    pub out_dir: String,

    /// Repo slug used when neither an override nor a usable git remote
    /// is available (default: "chandima/agent-skills")
    #[serde(default = "default_fallback_repo")]
    pub fallback_repo: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            skills_dir: default_skills_dir(),
            out_dir: default_out_dir(),
            fallback_repo: default_fallback_repo(),
        }
    }
}

fn default_skills_dir() -> String {
    "skills".to_string()
}

fn default_out_dir() -> String {
    "docs".to_string()
}

fn default_fallback_repo() -> String {
    "chandima/agent-skills".to_string()
}

impl Config {
    /// Load config from repo root or user config directory
    #[allow(dead_code)]
    pub fn load() -> Result<Self> {
        Self::load_with_path(None)
    }

    /// Load configuration from a specific path, or use default search paths
    pub fn load_with_path(path: Option<String>) -> Result<Self> {
        // If explicit path provided, use it
        if let Some(config_path) = path {
            debug!("Loading config from explicit path: {}", config_path);
            return Self::load_from_path(&config_path);
        }

        // Try repo root first (per-repo config)
        if let Ok(config) = Self::load_from_path("skillsite.toml") {
            debug!("Loaded config from ./skillsite.toml");
            return Ok(config);
        }

        // Try user config directory
        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("skillsite").join("config.toml");
            if let Ok(config) = Self::load_from_path(&config_path) {
                debug!("Loaded config from {:?}", config_path);
                return Ok(config);
            }
        }

        // Return defaults
        debug!("Using default config");
        Ok(Self::default())
    }

    fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

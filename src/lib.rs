//! skillsite - Generate a static directory site for agent skill repos
//!
//! Scans `skills/*/SKILL.md` front-matter, resolves the GitHub repo slug
//! (explicit override, CI environment, git remote, configured fallback) and
//! writes a self-contained HTML directory page plus a JSON manifest suitable
//! for GitHub Pages.

pub mod cli;
pub mod collector;
pub mod config;
pub mod frontmatter;
pub mod render;
pub mod repo;
pub mod site;

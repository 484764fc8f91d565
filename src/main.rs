use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cli;
mod collector;
mod config;
mod frontmatter;
mod render;
mod repo;
mod site;

#[derive(Parser)]
#[command(name = "skillsite", version)]
#[command(about = "Generate a static directory site for agent skill repos", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the skills tree and write the site (default when no subcommand given)
    Build {
        /// Directory scanned for <skill>/SKILL.md entries
        #[arg(long)]
        skills_dir: Option<String>,

        /// Directory the site is written to
        #[arg(long)]
        out_dir: Option<String>,

        /// Repo slug (owner/name) to publish as; beats env and git detection
        #[arg(long)]
        repo: Option<String>,

        /// Path to config file (defaults to ~/.config/skillsite/config.toml or ./skillsite.toml)
        #[arg(long)]
        config: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Build {
            skills_dir,
            out_dir,
            repo,
            config,
        }) => {
            cli::build::run(skills_dir, out_dir, repo, config)?;
        }
        None => {
            cli::build::run(None, None, None, None)?;
        }
    }

    Ok(())
}

//! Generates CHANGELOG.md from the current repository's git history.
//!
//! Commit subjects are expected to follow Conventional Commits
//! (<https://www.conventionalcommits.org/en/v1.0.0/>) and the layout follows
//! <https://keepachangelog.com/en/1.1.0/>.

use std::{
    io::{self, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use repo_scripts::{fmt::SummaryWriter, Changelog, Outcome};
use tracing_subscriber::EnvFilter;

/// Generate CHANGELOG.md according to the repository's git history.
#[derive(Debug, Parser)]
#[command(name = "keep-a-changelog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Run as if started in this directory
    #[arg(short = 'C', long, value_name = "DIR", default_value = ".")]
    repo: PathBuf,

    /// Configuration file (default: .changelog.toml at the repository root)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the parsed commits instead of writing the changelog
    #[arg(long)]
    print: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let clog = match cli.config.as_ref() {
        Some(cfg_file) => Changelog::with_config(&cli.repo, cfg_file),
        None => Changelog::with_dir(&cli.repo),
    }
    .context("failed to set up changelog generation")?;

    if cli.print {
        let out = io::stdout();
        let mut out_buf = BufWriter::new(out.lock());
        let mut writer = SummaryWriter::new(&mut out_buf);
        return clog
            .write_changelog_with(&mut writer)
            .context("failed to list commits");
    }

    match clog.write_changelog().context("failed to generate changelog")? {
        Outcome::Written(path) => info!("Changelog written to {}", path.display()),
        Outcome::NoCommits => {}
    }
    Ok(())
}

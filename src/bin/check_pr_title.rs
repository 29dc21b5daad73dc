//! Checks that a pull request title consists of ASCII chars only.
//!
//! Intended for CI, where the title is handed over through `PR_TITLE`.

use std::io;

use anyhow::{bail, Result};
use clap::Parser;
use repo_scripts::title::{check_title, TITLE_ENV_VAR};
use tracing_subscriber::EnvFilter;

/// Check that the pull request title contains only ASCII chars.
#[derive(Debug, Parser)]
#[command(name = "check-pr-title")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Title to check
    #[arg(long, env = TITLE_ENV_VAR)]
    title: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let Some(title) = cli.title else {
        bail!("cannot get env var {TITLE_ENV_VAR}");
    };

    check_title(&title)?;
    Ok(())
}

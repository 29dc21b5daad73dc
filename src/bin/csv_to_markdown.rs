//! Converts a CSV file to a Markdown table.
//!
//! The table is written next to the input, with the `.csv` extension replaced
//! by `.md`.

use std::{fs::File, io, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use repo_scripts::table::{csv_to_markdown_table, markdown_path_for};
use tracing_subscriber::EnvFilter;

/// Convert a CSV file to a markdown table.
#[derive(Debug, Parser)]
#[command(name = "csv-to-markdown")]
#[command(version, about, long_about = None)]
struct Cli {
    /// The target CSV's file path
    #[arg(value_name = "CSV_FILE")]
    csv_file: PathBuf,

    /// Overwrite the Markdown file if it already exists
    #[arg(short, long)]
    force: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let markdown_file = markdown_path_for(&cli.csv_file);

    if !cli.csv_file.exists() {
        bail!("No such file or directory: '{}'", cli.csv_file.display());
    }
    if markdown_file.exists() && !cli.force {
        bail!(
            "'{}' exists and stays intact; run again with --force to overwrite it",
            markdown_file.display()
        );
    }

    let input = File::open(&cli.csv_file)
        .with_context(|| format!("failed to open '{}'", cli.csv_file.display()))?;
    let table = csv_to_markdown_table(input)?;
    std::fs::write(&markdown_file, table)
        .with_context(|| format!("failed to write '{}'", markdown_file.display()))?;

    println!("{}", markdown_file.display());
    Ok(())
}

//! Helpers for repository maintenance in CI.
//!
//! The bulk of the crate is the changelog generator: `git log` output is
//! parsed into [`CommitRecord`]s, grouped into releases by their semantic
//! version tags and rendered as Markdown. Two smaller helpers live alongside
//! it, an ASCII check for pull request titles ([`title`]) and a CSV to
//! Markdown table converter ([`table`]).

#[macro_use]
mod macros;
mod changelog;
pub mod config;
pub mod error;
pub mod fmt;
pub mod git;
pub mod parser;
mod sectionmap;
pub mod semver;
pub mod table;
pub mod title;

pub use changelog::{Changelog, Outcome};
pub use git::{CommitRecord, Commits};
pub use sectionmap::{Section, SectionHeading, SectionMap};

// The default config file, looked up at the repository root
const DEFAULT_CONFIG_FILE: &str = ".changelog.toml";

//! Pull request title validation.

use crate::error::{Error, Result};

/// The environment variable CI exposes the pull request title through
pub const TITLE_ENV_VAR: &str = "PR_TITLE";

/// Returns the distinct non-ASCII chars of `text`, in the order they first
/// appear
pub fn non_ascii_chars(text: &str) -> Vec<char> {
    let mut found: Vec<char> = Vec::new();
    for c in text.chars().filter(|c| !c.is_ascii()) {
        if !found.contains(&c) {
            found.push(c);
        }
    }
    found
}

/// Checks that `text` contains only ASCII chars.
///
/// # Example
///
/// ```
/// # use repo_scripts::title::check_title;
/// assert!(check_title("feat: add csv export").is_ok());
/// assert!(check_title("feat: add “csv” export").is_err());
/// ```
pub fn check_title(text: &str) -> Result<()> {
    match non_ascii_chars(text) {
        found if found.is_empty() => Ok(()),
        found => Err(Error::NonAscii(found)),
    }
}

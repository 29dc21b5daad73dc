use std::{
    path::{Path, PathBuf},
    process::Command,
};

use log::debug;
use time::Date;

use crate::error::{Error, Result};

/// The `git log` format producing one `hash|subject|date|refs` line per commit
pub const LOG_FORMAT: &str = "--pretty=format:%H|%s|%ad|%d";

/// The struct representation of a single commit in the history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// The 40 char hash
    pub hash: String,
    /// The commit subject
    pub message: String,
    /// The authored date, without time of day
    pub date: Date,
    /// Semantic version tags pointing at this commit (empty unless it is a
    /// release)
    pub tags: Vec<String>,
}

impl CommitRecord {
    /// Whether this commit marks a release
    pub fn is_release(&self) -> bool {
        !self.tags.is_empty()
    }

    /// The first eight characters of the hash
    pub fn short_hash(&self) -> &str {
        self.hash.get(..8).unwrap_or(&self.hash)
    }
}

/// A convienience type for multiple commits
pub type Commits = Vec<CommitRecord>;

/// Runs `git` commands against a working tree, defaulting to the current
/// directory.
#[derive(Debug, Clone, Default)]
pub struct Git {
    work_tree: Option<PathBuf>,
}

impl Git {
    pub fn new() -> Self {
        Git::default()
    }

    /// Runs every command as if `git` was started in `dir`
    pub fn with_work_tree<P: AsRef<Path>>(dir: P) -> Self {
        Git {
            work_tree: Some(dir.as_ref().to_path_buf()),
        }
    }

    /// Retrieves the raw log, newest commit first, one record per line.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use repo_scripts::git::Git;
    /// let raw = Git::new().log().unwrap();
    /// for line in raw.lines().filter(|l| !l.is_empty()) {
    ///     println!("{line}");
    /// }
    /// ```
    pub fn log(&self) -> Result<String> {
        self.run(&["log", LOG_FORMAT, "--date=iso"])
    }

    /// Retrieves the absolute path of the repository's top level directory
    pub fn toplevel(&self) -> Result<PathBuf> {
        let out = self.run(&["rev-parse", "--show-toplevel"])?;
        Ok(PathBuf::from(out.trim_end_matches(['\n', '\r'])))
    }

    fn run(&self, args: &[&str]) -> Result<String> {
        let command = format!("git {}", args.join(" "));
        debug!("Running {command} in {:?}", self.work_tree);

        let mut cmd = Command::new("git");
        if let Some(dir) = self.work_tree.as_ref() {
            cmd.arg("-C").arg(dir);
        }
        let output = cmd.args(args).output().map_err(|e| Error::Acquisition {
            command: command.clone(),
            reason: e.to_string(),
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Acquisition {
                reason: match stderr.trim() {
                    "" => output.status.to_string(),
                    msg => msg.to_owned(),
                },
                command,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

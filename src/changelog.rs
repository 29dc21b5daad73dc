use std::{
    env, fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    config::ChangelogCfg,
    error::{Error, Result},
    fmt::{FormatWriter, MarkdownWriter},
    git::{Commits, Git},
    parser::{parse_log, ParseOptions},
    sectionmap::SectionMap,
    DEFAULT_CONFIG_FILE,
};

/// The base struct used to set options and generate a changelog from the
/// history of a git repository.
#[derive(Debug, Clone, Default)]
pub struct Changelog {
    /// Runs `git` against the working tree being described
    pub git: Git,
    /// Resolved output settings
    pub config: ChangelogCfg,
}

/// What `Changelog::write_changelog` ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The changelog was written to this path
    Written(PathBuf),
    /// The history is empty; nothing was written
    NoCommits,
}

impl Changelog {
    /// Creates a `Changelog` for the repository containing the current working
    /// directory, reading `.changelog.toml` from its root when present.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use repo_scripts::Changelog;
    /// let clog = Changelog::new().unwrap();
    /// ```
    pub fn new() -> Result<Self> {
        debug!("Creating changelog for the current directory");
        let cwd = env::current_dir().map_err(|_| Error::CurrentDir)?;
        Changelog::with_dir(cwd)
    }

    /// Creates a `Changelog` for the repository containing `dir`, reading
    /// `.changelog.toml` from the repository root when present.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use repo_scripts::Changelog;
    /// let clog = Changelog::with_dir("/myproject").unwrap();
    /// ```
    pub fn with_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        debug!("Creating changelog with \n\tdir: {:?}", dir.as_ref());
        let git = Git::with_work_tree(dir);
        let cfg_file = git.toplevel()?.join(DEFAULT_CONFIG_FILE);
        Ok(Changelog {
            config: ChangelogCfg::from_optional_file(cfg_file)?,
            git,
        })
    }

    /// Creates a `Changelog` for the repository containing `dir` using a
    /// specific configuration file, which must exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use repo_scripts::Changelog;
    /// let clog = Changelog::with_config("/myproject", "/myproject/changelog.toml").unwrap();
    /// ```
    pub fn with_config<P: AsRef<Path>, Q: AsRef<Path>>(dir: P, cfg_file: Q) -> Result<Self> {
        debug!(
            "Creating changelog with \n\tdir: {:?}\n\tcfg_file: {:?}",
            dir.as_ref(),
            cfg_file.as_ref()
        );
        Ok(Changelog {
            git: Git::with_work_tree(dir),
            config: ChangelogCfg::from_file(cfg_file)?,
        })
    }

    /// Replaces the output settings
    pub fn config(mut self, config: ChangelogCfg) -> Changelog {
        self.config = config;
        self
    }

    fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            message_split: self.config.message_split,
            date_basis: self.config.date_basis,
        }
    }

    /// Retrieves every commit reachable from `HEAD`, newest first.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use repo_scripts::Changelog;
    /// let clog = Changelog::new().unwrap();
    /// let commits = clog.get_commits().unwrap();
    /// ```
    pub fn get_commits(&self) -> Result<Commits> {
        let raw = self.git.log()?;
        parse_log(&raw, self.parse_options())
    }

    /// Renders the grouped commits as a Markdown document
    pub fn render(&self, sm: &SectionMap) -> Result<String> {
        let mut buf = Vec::with_capacity(256);
        MarkdownWriter::new(&mut buf).write_changelog(self, sm)?;
        // Only `String`s are written into the buffer
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    /// The file the changelog is written to
    pub fn outfile(&self) -> Result<PathBuf> {
        let outfile = Path::new(&self.config.outfile);
        if outfile.is_absolute() {
            return Ok(outfile.to_path_buf());
        }
        Ok(self.git.toplevel()?.join(outfile))
    }

    /// Writes the changelog to the configured file, replacing whatever it held
    /// before. Nothing is written when the history is empty, or when reading
    /// or parsing the history fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use repo_scripts::{Changelog, Outcome};
    /// let clog = Changelog::new().unwrap();
    /// if let Outcome::Written(path) = clog.write_changelog().unwrap() {
    ///     println!("wrote {}", path.display());
    /// }
    /// ```
    pub fn write_changelog(&self) -> Result<Outcome> {
        self.write_commits(self.get_commits()?)
    }

    /// Writes the changelog for already parsed commits, newest first. An empty
    /// list leaves the output file untouched.
    pub fn write_commits(&self, commits: Commits) -> Result<Outcome> {
        let sm = SectionMap::from_commits(commits);
        if sm.is_empty() {
            info!("No commits found, nothing to write");
            return Ok(Outcome::NoCommits);
        }

        let contents = self.render(&sm)?;
        let path = self.outfile()?;
        debug!("Writing changelog to file: {:?}", path);
        fs::write(&path, contents)?;

        Ok(Outcome::Written(path))
    }

    /// Writes a changelog with a specified `FormatWriter` format
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use repo_scripts::{Changelog, fmt::SummaryWriter};
    /// # use std::io;
    /// let clog = Changelog::new().unwrap();
    ///
    /// // List the parsed commits on stdout
    /// let out = io::stdout();
    /// let mut out_buf = io::BufWriter::new(out.lock());
    /// let mut writer = SummaryWriter::new(&mut out_buf);
    ///
    /// clog.write_changelog_with(&mut writer).unwrap();
    /// ```
    pub fn write_changelog_with<W>(&self, writer: &mut W) -> Result<()>
    where
        W: FormatWriter,
    {
        debug!("Writing changelog from writer");
        let sm = SectionMap::from_commits(self.get_commits()?);

        writer.write_changelog(self, &sm)
    }
}

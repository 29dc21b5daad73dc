use std::io;

use crate::{
    changelog::Changelog,
    error::Result,
    fmt::FormatWriter,
    sectionmap::{Section, SectionHeading, SectionMap},
};

/// Wraps a `std::io::Write` object to write the changelog as Markdown
///
/// # Example
///
/// ```no_run
/// # use repo_scripts::{Changelog, SectionMap, fmt::{FormatWriter, MarkdownWriter}};
/// let clog = Changelog::new().unwrap();
/// let sm = SectionMap::from_commits(clog.get_commits().unwrap());
///
/// let mut buf = Vec::new();
/// MarkdownWriter::new(&mut buf).write_changelog(&clog, &sm).unwrap();
/// ```
pub struct MarkdownWriter<'a>(&'a mut dyn io::Write);

impl<'a> MarkdownWriter<'a> {
    /// Creates a new instance of the `MarkdownWriter` struct using a
    /// `std::io::Write` object.
    pub fn new<T: io::Write + 'a>(writer: &'a mut T) -> MarkdownWriter<'a> {
        MarkdownWriter(writer)
    }

    fn write_section(&mut self, options: &Changelog, section: &Section) -> Result<()> {
        match &section.heading {
            SectionHeading::Unreleased => {
                write!(self.0, "\n## {}\n\n", options.config.unreleased)?;
            }
            SectionHeading::Release { tags, date } => {
                write!(self.0, "\n## {} - {date}\n\n", tags.join(","))?;
            }
        }

        for entry in &section.entries {
            writeln!(self.0, "- {}", entry.message)?;
        }

        Ok(())
    }
}

impl<'a> FormatWriter for MarkdownWriter<'a> {
    fn write_changelog(&mut self, options: &Changelog, sm: &SectionMap) -> Result<()> {
        writeln!(self.0, "# {}", options.config.title)?;

        for section in &sm.sections {
            self.write_section(options, section)?;
        }

        self.0.flush().map_err(Into::into)
    }
}

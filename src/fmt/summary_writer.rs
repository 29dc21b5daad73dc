use std::io;

use crate::{changelog::Changelog, error::Result, fmt::FormatWriter, sectionmap::SectionMap};

/// Wraps a `std::io::Write` object to list every parsed commit, mostly useful
/// for checking what the Markdown output will be built from
pub struct SummaryWriter<'a>(&'a mut dyn io::Write);

impl<'a> SummaryWriter<'a> {
    pub fn new<T: io::Write + 'a>(writer: &'a mut T) -> SummaryWriter<'a> {
        SummaryWriter(writer)
    }
}

impl<'a> FormatWriter for SummaryWriter<'a> {
    fn write_changelog(&mut self, _options: &Changelog, sm: &SectionMap) -> Result<()> {
        if sm.is_empty() {
            writeln!(self.0, "No commits found or error occurred.")?;
        }
        for commit in sm.commits() {
            writeln!(self.0, "\nCommit: {}", commit.short_hash())?;
            writeln!(self.0, "Message: {}", commit.message)?;
            writeln!(self.0, "Date: {}", commit.date)?;
            if commit.is_release() {
                writeln!(self.0, "Tags: {}", commit.tags.join(", "))?;
            }
            writeln!(self.0, "{}", "-".repeat(50))?;
        }

        self.0.flush().map_err(Into::into)
    }
}

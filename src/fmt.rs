mod md_writer;
mod summary_writer;

pub use self::{md_writer::MarkdownWriter, summary_writer::SummaryWriter};
use crate::{changelog::Changelog, error::Result, sectionmap::SectionMap};

/// A trait that allows writing the results of a changelog run in an arbitrary
/// format. The single required function `write_changelog()` accepts a
/// `SectionMap`, the commits already grouped by release.
///
/// Two implementors are provided, `MarkdownWriter` for the `CHANGELOG.md`
/// document and `SummaryWriter` for a plain listing of the parsed commits.
pub trait FormatWriter {
    /// Writes a changelog from a given `SectionMap`
    fn write_changelog(&mut self, options: &Changelog, section_map: &SectionMap) -> Result<()>;
}

use time::Date;

use crate::git::{CommitRecord, Commits};

/// What a section of the changelog is titled after
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionHeading {
    /// Commits newer than the latest release
    Unreleased,
    /// A release, named by the tags on its newest commit
    Release { tags: Vec<String>, date: Date },
}

/// One release worth of commits, newest first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub heading: SectionHeading,
    pub entries: Commits,
}

/// The commits of a changelog grouped into sections, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionMap {
    pub sections: Vec<Section>,
}

impl SectionMap {
    /// Creates a section map from a newest-first list of commits. Every tagged
    /// commit opens a new section; untagged commits join the section opened
    /// before them, or an unreleased section when no tag has been seen yet.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use repo_scripts::{Changelog, SectionMap};
    /// let clog = Changelog::new().unwrap();
    /// let sm = SectionMap::from_commits(clog.get_commits().unwrap());
    /// println!("{} releases", sm.releases().count());
    /// ```
    pub fn from_commits(commits: Commits) -> SectionMap {
        let mut sm = SectionMap::default();

        for entry in commits {
            match sm.sections.last_mut() {
                Some(section) if !entry.is_release() => section.entries.push(entry),
                _ => sm.sections.push(Section::opened_by(entry)),
            }
        }

        sm
    }

    /// Whether there is nothing to write
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The released sections, newest first
    pub fn releases(&self) -> impl Iterator<Item = &Section> {
        self.sections
            .iter()
            .filter(|s| matches!(s.heading, SectionHeading::Release { .. }))
    }

    /// Every commit in document order
    pub fn commits(&self) -> impl Iterator<Item = &CommitRecord> {
        self.sections.iter().flat_map(|s| s.entries.iter())
    }
}

impl Section {
    fn opened_by(entry: CommitRecord) -> Section {
        let heading = if entry.is_release() {
            SectionHeading::Release {
                tags: entry.tags.clone(),
                date: entry.date,
            }
        } else {
            SectionHeading::Unreleased
        };
        Section {
            heading,
            entries: vec![entry],
        }
    }
}

//! Turns raw `git log` lines into [`CommitRecord`]s.
//!
//! Each line has the shape produced by [`LOG_FORMAT`](crate::git::LOG_FORMAT):
//!
//! ```text
//! <hash>|<subject>|<YYYY-MM-DD HH:MM:SS ±HHMM>|<decorations>
//! ```
//!
//! The decorations field is usually empty or something like
//! ` (HEAD -> main, tag: v1.2.0, origin/main)`; only the entries that are
//! semantic versions survive as tags.

use log::debug;
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime, UtcOffset};

use crate::{
    config::{DateBasis, MessageSplit},
    error::{Error, Result},
    git::{CommitRecord, Commits},
    semver::is_semver_tag,
};

const DATE_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day] [hour]:[minute]:[second] [offset_hour sign:mandatory][offset_minute]"
);

/// Options controlling how ambiguous lines are read
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub message_split: MessageSplit,
    pub date_basis: DateBasis,
}

/// Parses a full log, newest commit first. Empty lines are skipped and the
/// first malformed line aborts the whole parse.
///
/// # Example
///
/// ```
/// # use repo_scripts::parser::{parse_log, ParseOptions};
/// let raw = "\
/// 1f0e3d|feat: search|2024-02-01 10:00:00 +0000| (HEAD -> main, tag: v1.1.0)
/// 9a8b7c|fix: typo|2024-01-20 09:30:00 +0000|
/// ";
/// let commits = parse_log(raw, ParseOptions::default()).unwrap();
/// assert_eq!(commits.len(), 2);
/// assert_eq!(commits[0].tags, vec!["v1.1.0".to_string()]);
/// ```
pub fn parse_log(raw: &str, opts: ParseOptions) -> Result<Commits> {
    raw.lines()
        .filter(|line| !line.is_empty())
        .map(|line| parse_line(line, opts))
        .collect()
}

/// Parses a single non-empty log line
pub fn parse_line(line: &str, opts: ParseOptions) -> Result<CommitRecord> {
    let (hash, message, date, refs) = match opts.message_split {
        MessageSplit::Tolerant => split_tolerant(line),
        MessageSplit::Positional => split_positional(line),
    }
    .ok_or_else(|| Error::MalformedRecord(line.to_owned()))?;

    let record = CommitRecord {
        hash: hash.to_owned(),
        message: message.to_owned(),
        date: parse_date(date, opts.date_basis)?,
        tags: refs.map(parse_tags).unwrap_or_default(),
    };
    debug!("Parsed commit {} ({:?})", record.short_hash(), record.tags);
    Ok(record)
}

type Fields<'a> = (&'a str, &'a str, &'a str, Option<&'a str>);

// Both the subject and the decorations may contain `|`, so the fields are
// anchored on the date-shaped field between them
fn split_tolerant(line: &str) -> Option<Fields<'_>> {
    let re = regex!(concat!(
        r"^([^|]*)\|(.*)\|",
        r"([0-9]{4}-[0-9]{2}-[0-9]{2} [0-9]{2}:[0-9]{2}:[0-9]{2} [+-][0-9]{4})",
        r"(?:\|(.*))?$",
    ));
    if let Some(caps) = re.captures(line) {
        return Some((
            caps.get(1)?.as_str(),
            caps.get(2)?.as_str(),
            caps.get(3)?.as_str(),
            caps.get(4).map(|m| m.as_str()),
        ));
    }

    // No well-formed date: split by position so the bad field is reported
    let (hash, rest) = line.split_once('|')?;
    let mut tail = rest.rsplitn(3, '|');
    let last = tail.next()?;
    let second_last = tail.next()?;
    Some(match tail.next() {
        Some(message) => (hash, message, second_last, Some(last)),
        None => (hash, second_last, last, None),
    })
}

fn split_positional(line: &str) -> Option<Fields<'_>> {
    let mut parts = line.split('|');
    Some((parts.next()?, parts.next()?, parts.next()?, parts.next()))
}

/// Parses a `YYYY-MM-DD HH:MM:SS ±HHMM` timestamp down to its calendar date
pub fn parse_date(value: &str, basis: DateBasis) -> Result<time::Date> {
    let at = OffsetDateTime::parse(value, &DATE_FORMAT).map_err(|source| Error::DateFormat {
        value: value.to_owned(),
        source,
    })?;
    Ok(match basis {
        DateBasis::Utc => at.to_offset(UtcOffset::UTC).date(),
        DateBasis::Author => at.date(),
    })
}

/// Extracts the semantic version tags from a decoration list such as
/// ` (HEAD -> main, tag: v1.2.0, tag: latest)`
pub fn parse_tags(refs: &str) -> Vec<String> {
    let refs = refs.trim();
    let refs = refs.strip_prefix('(').unwrap_or(refs);
    let refs = refs.strip_suffix(')').unwrap_or(refs);
    refs.split(',')
        .map(str::trim)
        .map(|entry| entry.strip_prefix("tag: ").unwrap_or(entry))
        .filter(|entry| is_semver_tag(entry))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::*;

    const HASH: &str = "3f786850e387550fdab836ed7e6dc881de23001b";

    fn positional() -> ParseOptions {
        ParseOptions {
            message_split: MessageSplit::Positional,
            ..ParseOptions::default()
        }
    }

    #[test]
    fn plain_line() {
        let line = format!("{HASH}|fix: handle empty input|2024-01-15 12:00:00 +0000|");
        let c = parse_line(&line, ParseOptions::default()).unwrap();
        assert_eq!(c.hash, HASH);
        assert_eq!(c.message, "fix: handle empty input");
        assert_eq!(c.date, date!(2024 - 01 - 15));
        assert!(c.tags.is_empty());
    }

    #[test]
    fn tagged_line() {
        let line = format!(
            "{HASH}|chore: release|2024-02-01 08:00:00 +0000| (HEAD -> main, tag: v1.1.0, tag: 1.1.0-rc.1, tag: latest, origin/main)"
        );
        let c = parse_line(&line, ParseOptions::default()).unwrap();
        assert_eq!(c.tags, vec!["v1.1.0", "1.1.0-rc.1"]);
    }

    #[test]
    fn three_fields_means_no_refs() {
        let line = format!("{HASH}|docs: readme|2024-01-15 12:00:00 +0000");
        for opts in [ParseOptions::default(), positional()] {
            let c = parse_line(&line, opts).unwrap();
            assert_eq!(c.message, "docs: readme");
            assert!(c.tags.is_empty());
        }
    }

    #[test]
    fn pipe_in_message_tolerant() {
        let line =
            format!("{HASH}|feat: a | b | c|2024-01-15 12:00:00 +0000| (tag: v2.0.0)");
        let c = parse_line(&line, ParseOptions::default()).unwrap();
        assert_eq!(c.message, "feat: a | b | c");
        assert_eq!(c.date, date!(2024 - 01 - 15));
        assert_eq!(c.tags, vec!["v2.0.0"]);
    }

    #[test]
    fn pipe_in_ref_name() {
        let line = format!(
            "{HASH}|feat: init|2024-01-10 10:00:00 +0000| (HEAD -> main, tag: v1.0.0, fix|thing)"
        );
        let c = parse_line(&line, ParseOptions::default()).unwrap();
        assert_eq!(c.message, "feat: init");
        assert_eq!(c.date, date!(2024 - 01 - 10));
        assert_eq!(c.tags, vec!["v1.0.0"]);
    }

    #[test]
    fn pipes_in_message_and_ref_name() {
        let line = format!(
            "{HASH}|fix: a | b|2024-01-10 10:00:00 +0000| (tag: v1.0.1, feat|x|y)"
        );
        let c = parse_line(&line, ParseOptions::default()).unwrap();
        assert_eq!(c.message, "fix: a | b");
        assert_eq!(c.tags, vec!["v1.0.1"]);
    }

    #[test]
    fn pipe_in_message_positional() {
        let line = format!("{HASH}|feat: a | b|2024-01-15 12:00:00 +0000|");
        let err = parse_line(&line, positional()).unwrap_err();
        match err {
            Error::DateFormat { value, .. } => assert_eq!(value, " b"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn too_few_fields() {
        for opts in [ParseOptions::default(), positional()] {
            let err = parse_line("abc|only a message", opts).unwrap_err();
            assert!(matches!(err, Error::MalformedRecord(_)), "{err:?}");
        }
    }

    #[test]
    fn bad_date() {
        let line = format!("{HASH}|fix: x|not-a-date|");
        match parse_line(&line, ParseOptions::default()).unwrap_err() {
            Error::DateFormat { value, .. } => assert_eq!(value, "not-a-date"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn date_without_offset_is_rejected() {
        assert!(parse_date("2024-01-15 12:00:00", DateBasis::Utc).is_err());
        assert!(parse_date("2024-01-15T12:00:00 +0000", DateBasis::Utc).is_err());
    }

    #[test]
    fn date_normalized_before_truncation() {
        let a = parse_date("2024-01-15 23:30:00 +0000", DateBasis::Utc).unwrap();
        let b = parse_date("2024-01-16 00:30:00 +0100", DateBasis::Utc).unwrap();
        assert_eq!(a, date!(2024 - 01 - 15));
        assert_eq!(a, b);
    }

    #[test]
    fn date_in_author_offset() {
        let d = parse_date("2024-01-16 00:30:00 +0100", DateBasis::Author).unwrap();
        assert_eq!(d, date!(2024 - 01 - 16));
    }

    #[test]
    fn negative_offset_rolls_forward() {
        let d = parse_date("2024-01-15 20:00:00 -0500", DateBasis::Utc).unwrap();
        assert_eq!(d, date!(2024 - 01 - 16));
    }

    #[test]
    fn tags_filter() {
        assert_eq!(
            parse_tags(" (tag: v1.2.3, tag: 1.2, tag: release-1.2.3, tag: 1.2.3+build.5)"),
            vec!["v1.2.3", "1.2.3+build.5"]
        );
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" (HEAD -> main)").is_empty());
    }

    #[test]
    fn tags_without_parens() {
        assert_eq!(parse_tags("tag: v0.1.0, main"), vec!["v0.1.0"]);
    }

    #[test]
    fn log_skips_empty_lines() {
        let raw = format!(
            "{HASH}|a|2024-01-15 12:00:00 +0000|\n\n{HASH}|b|2024-01-14 12:00:00 +0000|\n"
        );
        let commits = parse_log(&raw, ParseOptions::default()).unwrap();
        assert_eq!(
            commits.iter().map(|c| c.message.as_str()).collect::<Vec<_>>(),
            ["a", "b"]
        );
    }

    #[test]
    fn log_stops_at_first_error() {
        let raw = format!("{HASH}|a|2024-01-15 12:00:00 +0000|\n{HASH}|b|yesterday|\n");
        assert!(matches!(
            parse_log(&raw, ParseOptions::default()),
            Err(Error::DateFormat { .. })
        ));
    }

    #[test]
    fn empty_log() {
        assert!(parse_log("", ParseOptions::default()).unwrap().is_empty());
    }
}

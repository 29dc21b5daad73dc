use std::{fs, io, path::Path, result::Result as StdResult, str::FromStr};

use log::debug;
use serde::Deserialize;
use strum::{Display, EnumString};

use crate::error::{Error, Result};

/// How a raw log line is split when the commit subject itself contains the
/// `|` delimiter
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, EnumString, Display)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum MessageSplit {
    /// Hash is the first field, date and refs are the last two, the message is
    /// everything in between
    #[default]
    Tolerant,
    /// Every `|` separates a field; a subject containing `|` is truncated
    Positional,
}

/// Which clock a commit's calendar date is read from
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, EnumString, Display)]
#[strum(ascii_case_insensitive, serialize_all = "kebab-case")]
pub enum DateBasis {
    /// Normalize to UTC, then drop the time of day
    #[default]
    Utc,
    /// Drop the time of day in the author's own offset
    Author,
}

macro_rules! deserialize_from_str {
    ($t:ty) => {
        impl<'de> serde::de::Deserialize<'de> for $t {
            fn deserialize<D>(deserializer: D) -> StdResult<Self, D::Error>
            where
                D: serde::de::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                FromStr::from_str(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

deserialize_from_str!(MessageSplit);
deserialize_from_str!(DateBasis);

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCfg {
    #[serde(default)]
    pub changelog: RawChangelogCfg,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawChangelogCfg {
    pub outfile: Option<String>,
    pub title: Option<String>,
    pub unreleased: Option<String>,
    pub message_split: MessageSplit,
    pub date_basis: DateBasis,
}

/// Resolved changelog settings, every value filled in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangelogCfg {
    /// Output file, relative to the repository root unless absolute
    pub outfile: String,
    /// Document title, rendered as the top level heading
    pub title: String,
    /// Heading for commits newer than the latest release tag
    pub unreleased: String,
    pub message_split: MessageSplit,
    pub date_basis: DateBasis,
}

impl Default for ChangelogCfg {
    fn default() -> Self {
        ChangelogCfg {
            outfile: "CHANGELOG.md".to_owned(),
            title: "CHANGELOG".to_owned(),
            unreleased: "Unreleased".to_owned(),
            message_split: MessageSplit::default(),
            date_basis: DateBasis::default(),
        }
    }
}

impl From<RawChangelogCfg> for ChangelogCfg {
    fn from(raw: RawChangelogCfg) -> Self {
        let defaults = ChangelogCfg::default();
        ChangelogCfg {
            outfile: raw.outfile.unwrap_or(defaults.outfile),
            title: raw.title.unwrap_or(defaults.title),
            unreleased: raw.unreleased.unwrap_or(defaults.unreleased),
            message_split: raw.message_split,
            date_basis: raw.date_basis,
        }
    }
}

impl ChangelogCfg {
    /// Parses settings from the contents of a TOML file
    pub fn from_toml(contents: &str, path: &Path) -> Result<Self> {
        let raw: RawCfg = toml::from_str(contents).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(raw.changelog.into())
    }

    /// Reads settings from `path`, which must exist
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Reading config file: {:?}", path);
        let contents = fs::read_to_string(path)?;
        ChangelogCfg::from_toml(&contents, path)
    }

    /// Reads settings from `path` when it exists, otherwise falls back to the
    /// defaults
    pub fn from_optional_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        match ChangelogCfg::from_file(path.as_ref()) {
            Err(Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No config file at {:?}, using defaults", path.as_ref());
                Ok(ChangelogCfg::default())
            }
            res => res,
        }
    }
}

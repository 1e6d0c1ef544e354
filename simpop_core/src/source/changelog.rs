//! Reads the release version of a data source from its changelog.
//!
//! Every changelog entry starts with a heading line such as
//!
//! ```text
//! **1.4.2 - July 4, 2023**
//! ```
//!
//! The topmost entry describes the current release.

use super::{DataSourceError, SourceError};
use crate::types::DataVersion;
use regex::Regex;
use std::{
	fs::File,
	io::{BufRead, BufReader},
	path::Path,
	sync::LazyLock,
};

static HEADING: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^\*\*\s*(\d+\.\d+\.\d+)\s*-\s*(.*?)\s*\*\*\s*$").expect("changelog heading pattern is valid")
});

/// The top entry of a changelog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangelogEntry {
	pub version: DataVersion,
	/// Freeform release date, exactly as written in the heading.
	pub date: String,
}

impl ChangelogEntry {
	/// Parses a heading line like `**1.4.2 - some date**`. Returns `None` if the line is not a heading.
	#[must_use]
	pub fn parse_heading(line: &str) -> Option<Self> {
		let captures = HEADING.captures(line.trim())?;
		let version = DataVersion::parse_str(&captures[1]).ok()?;
		Some(ChangelogEntry {
			version,
			date: captures[2].to_string(),
		})
	}

	/// Parses the first non-blank line of a changelog's text.
	#[must_use]
	pub fn parse_first(text: &str) -> Option<Self> {
		let line = text.lines().find(|line| !line.trim().is_empty())?;
		Self::parse_heading(line)
	}
}

/// Reads the top entry of the changelog at `path`.
///
/// Reading stops at the first non-blank line, the rest of the file is never touched.
pub fn read_changelog_head(path: &Path) -> Result<ChangelogEntry, SourceError> {
	log::debug!("reading changelog {path:?}");
	let file = File::open(path).map_err(|err| SourceError::io(path, err))?;

	let mut first = None;
	for line in BufReader::new(file).lines() {
		let line = line.map_err(|err| SourceError::io(path, err))?;
		if !line.trim().is_empty() {
			first = Some(line);
			break;
		}
	}

	let entry = first
		.as_deref()
		.and_then(ChangelogEntry::parse_heading)
		.ok_or_else(|| DataSourceError::MalformedChangelog {
			path: path.to_path_buf(),
		})?;
	log::debug!("changelog {path:?} reports version {} ({})", entry.version, entry.date);
	Ok(entry)
}

/// Returns the version of the current release described by the changelog at `path`.
pub fn get_data_changelog_version(path: &Path) -> Result<DataVersion, SourceError> {
	Ok(read_changelog_head(path)?.version)
}

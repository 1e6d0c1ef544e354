//! This module defines `DataVersion`, the `MAJOR.MINOR.PATCH` release number of a simulated
//! population data source.
//!
//! Versions are ordered component by component, so `1.4.12` is newer than `1.4.3`.
//!
//! # Examples
//!
//! ```
//! use simpop_core::types::DataVersion;
//!
//! let version: DataVersion = "1.4.2".parse().unwrap();
//! assert_eq!(version, DataVersion::new(1, 4, 2));
//! assert!(version < DataVersion::new(1, 4, 12));
//! assert_eq!(version.to_string(), "1.4.2");
//! ```

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A three component release number.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct DataVersion {
	pub major: u32,
	pub minor: u32,
	pub patch: u32,
}

impl DataVersion {
	#[must_use]
	pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
		Self { major, minor, patch }
	}

	/// Parses strings like `"1.4.2"`. Surrounding whitespace is ignored.
	pub fn parse_str(value: &str) -> Result<Self> {
		let parts: Vec<&str> = value.trim().split('.').collect();
		if parts.len() != 3 {
			bail!("invalid version \"{value}\", expected MAJOR.MINOR.PATCH");
		}

		let component = |index: usize, name: &str| -> Result<u32> {
			let text = parts[index];
			if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit()) {
				bail!("invalid {name} component \"{text}\" in version \"{value}\"");
			}
			text
				.parse::<u32>()
				.with_context(|| format!("{name} component of version \"{value}\" is too large"))
		};

		Ok(Self::new(
			component(0, "major")?,
			component(1, "minor")?,
			component(2, "patch")?,
		))
	}
}

impl FromStr for DataVersion {
	type Err = anyhow::Error;

	fn from_str(s: &str) -> Result<Self> {
		Self::parse_str(s)
	}
}

impl TryFrom<String> for DataVersion {
	type Error = anyhow::Error;

	fn try_from(value: String) -> Result<Self> {
		Self::parse_str(&value)
	}
}

impl From<DataVersion> for String {
	fn from(value: DataVersion) -> Self {
		value.to_string()
	}
}

impl fmt::Display for DataVersion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
	}
}
